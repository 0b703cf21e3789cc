// lib.rs - Room/door graph model and randomized depth-first maze carving
// Provides the graph the renderer crate draws from

pub mod error;
pub mod point;
pub mod door;
pub mod room;
pub mod maze;
pub mod carver;
pub mod dump;
pub mod legacy;

// Re-export commonly used types
pub use error::{MazeError, Result};
pub use point::Point;
pub use door::{Door, DoorId};
pub use room::{Room, RoomId, Slot, SLOTS_PER_ROOM};
pub use maze::Maze;
pub use carver::CarveOutcome;
pub use legacy::CharGrid;
