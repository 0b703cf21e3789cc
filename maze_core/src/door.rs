// door.rs - Edge between two adjacent rooms

use crate::room::RoomId;

/// Index of a door in the maze's door arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DoorId(pub usize);

/// A wall between (at most) two rooms that the carver may open.
///
/// Doors are owned by [`crate::Maze`]; rooms only hold their ids. A door with
/// fewer than two rooms behind it is locked: it can never be opened by the
/// carver and is always drawn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Door {
    rooms: [Option<RoomId>; 2],
    is_open: bool,
    is_rendered: bool,
    index: usize,
}

impl Door {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            ..Self::default()
        }
    }

    pub fn connect(&mut self, a: RoomId, b: RoomId) {
        self.rooms = [Some(a), Some(b)];
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    pub fn rooms(&self) -> [Option<RoomId>; 2] {
        self.rooms
    }

    pub fn is_locked(&self) -> bool {
        self.rooms[0].is_none() || self.rooms[1].is_none()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn is_rendered(&self) -> bool {
        self.is_rendered
    }

    pub fn set_rendered(&mut self) {
        self.is_rendered = true;
    }

    pub fn reset_rendered(&mut self) {
        self.is_rendered = false;
    }

    /// The room on the other side of the door as seen from `me`.
    /// `None` if the door is locked or `me` is not one of its rooms.
    pub fn behind(&self, me: RoomId) -> Option<RoomId> {
        match self.rooms {
            [Some(a), Some(b)] if a == me => Some(b),
            [Some(a), Some(b)] if b == me => Some(a),
            _ => None,
        }
    }
}
