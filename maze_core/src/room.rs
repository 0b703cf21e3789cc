// room.rs - Grid cell with a fixed, ordered set of door slots

use crate::door::DoorId;

/// Door slots per room on the rectangular lattice
pub const SLOTS_PER_ROOM: usize = 4;

/// Index of a room in the maze's room arena (row-major)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoomId(pub usize);

/// Slot directions on the rectangular lattice, in slot order.
/// `North` faces the row above (smaller `h`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    North,
    East,
    South,
    West,
}

impl Slot {
    pub const ALL: [Slot; SLOTS_PER_ROOM] = [Slot::North, Slot::East, Slot::South, Slot::West];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Slot::North => 0,
            Slot::East => 1,
            Slot::South => 2,
            Slot::West => 3,
        }
    }

    pub const fn opposite(self) -> Slot {
        match self {
            Slot::North => Slot::South,
            Slot::East => Slot::West,
            Slot::South => Slot::North,
            Slot::West => Slot::East,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    index: usize,
    doors: Vec<Option<DoorId>>,
    visited: bool,
}

impl Room {
    /// A room with `slot_count` empty slots. The slot count never changes.
    pub fn new(index: usize, slot_count: usize) -> Self {
        Self {
            index,
            doors: vec![None; slot_count],
            visited: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    pub fn slot_count(&self) -> usize {
        self.doors.len()
    }

    pub fn doors(&self) -> &[Option<DoorId>] {
        &self.doors
    }

    pub fn door(&self, slot: Slot) -> Option<DoorId> {
        self.doors.get(slot.index()).copied().flatten()
    }

    /// Slots outside the fixed range are ignored
    pub(crate) fn set_door(&mut self, slot: Slot, door: DoorId) {
        if let Some(entry) = self.doors.get_mut(slot.index()) {
            *entry = Some(door);
        }
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub fn visit(&mut self) {
        self.visited = true;
    }

    pub(crate) fn reset_visited(&mut self) {
        self.visited = false;
    }
}
