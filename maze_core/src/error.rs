// error.rs - Construction and invariant errors for the maze graph

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("Invalid maze dimensions {width}x{height}: {reason}")]
    InvalidDimensions {
        width: usize,
        height: usize,
        reason: &'static str,
    },

    #[error("Room ({w}, {h}) is outside the {width}x{height} grid")]
    OutOfRange {
        w: usize,
        h: usize,
        width: usize,
        height: usize,
    },

    #[error("Room index {index} does not belong to a maze of {rooms} rooms")]
    UnknownRoom { index: usize, rooms: usize },

    #[error("Maze graph is disconnected: reached {reached} of {total} rooms")]
    DisconnectedGraph { reached: usize, total: usize },

    #[error("Open doors do not form a spanning tree: {open_doors} open doors for {rooms} rooms")]
    NotATree { open_doors: usize, rooms: usize },
}

pub type Result<T> = std::result::Result<T, MazeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = MazeError::InvalidDimensions { width: 0, height: 3, reason: "dimensions must be greater than 0" };
        assert_eq!(
            err.to_string(),
            "Invalid maze dimensions 0x3: dimensions must be greater than 0"
        );

        let err = MazeError::OutOfRange { w: 5, h: 1, width: 3, height: 3 };
        assert_eq!(err.to_string(), "Room (5, 1) is outside the 3x3 grid");
    }
}
