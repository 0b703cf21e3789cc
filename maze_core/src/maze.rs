// maze.rs - Rectangular lattice of rooms joined by doors
//
// Rooms and doors live in two index-stable arenas owned by `Maze`. Rooms refer
// to doors by `DoorId` and doors refer back by `RoomId`, so neither owns the
// other.

use crate::door::{Door, DoorId};
use crate::error::{MazeError, Result};
use crate::room::{Room, RoomId, Slot, SLOTS_PER_ROOM};
use log::debug;
use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub struct Maze {
    pub(crate) width: usize,
    pub(crate) height: usize,
    pub(crate) rooms: Vec<Room>,
    pub(crate) doors: Vec<Door>,
}

impl Maze {
    /// Build a `width` x `height` lattice with every door closed.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(MazeError::InvalidDimensions {
                width,
                height,
                reason: "dimensions must be greater than 0",
            });
        }

        let too_large = MazeError::InvalidDimensions {
            width,
            height,
            reason: "dimensions are too large",
        };
        let room_count = width.checked_mul(height).ok_or(too_large.clone())?;
        let door_count = ((width - 1) * height)
            .checked_add(width * (height - 1))
            .ok_or(too_large)?;

        let mut maze = Self {
            width,
            height,
            rooms: (0..room_count).map(|i| Room::new(i, SLOTS_PER_ROOM)).collect(),
            doors: Vec::with_capacity(door_count),
        };

        // Top row
        for w in 0..width - 1 {
            maze.connect_east(w, 0);
        }

        for h in 1..height {
            for w in 0..width - 1 {
                maze.connect_east(w, h);
                maze.connect_north(w, h);
            }
        }

        // Northern doors in the right-hand column
        for h in 1..height {
            maze.connect_north(width - 1, h);
        }

        maze.assign_indices();
        maze.check_connected()?;

        debug!(
            "Built {}x{} maze graph: {} rooms, {} doors",
            width,
            height,
            maze.rooms.len(),
            maze.doors.len()
        );
        Ok(maze)
    }

    fn cell_index(&self, w: usize, h: usize) -> usize {
        h * self.width + w
    }

    fn connect(&mut self, from: usize, slot: Slot, to: usize) {
        let id = DoorId(self.doors.len());
        let mut door = Door::new(id.0);
        door.connect(RoomId(from), RoomId(to));
        self.doors.push(door);

        self.rooms[from].set_door(slot, id);
        self.rooms[to].set_door(slot.opposite(), id);
    }

    fn connect_east(&mut self, w: usize, h: usize) {
        let (left, right) = (self.cell_index(w, h), self.cell_index(w + 1, h));
        self.connect(left, Slot::East, right);
    }

    fn connect_north(&mut self, w: usize, h: usize) {
        let (lower, upper) = (self.cell_index(w, h), self.cell_index(w, h - 1));
        self.connect(lower, Slot::North, upper);
    }

    fn assign_indices(&mut self) {
        for (i, room) in self.rooms.iter_mut().enumerate() {
            room.set_index(i);
        }
        for (i, door) in self.doors.iter_mut().enumerate() {
            door.set_index(i);
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn door_count(&self) -> usize {
        self.doors.len()
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn doors(&self) -> &[Door] {
        &self.doors
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.0)
    }

    pub fn door(&self, id: DoorId) -> Option<&Door> {
        self.doors.get(id.0)
    }

    /// Rooms for reading alongside doors for flag updates
    pub fn rooms_and_doors_mut(&mut self) -> (&[Room], &mut [Door]) {
        (&self.rooms, &mut self.doors)
    }

    /// Room at grid position `(w, h)`
    pub fn room_at(&self, w: usize, h: usize) -> Result<RoomId> {
        if w >= self.width || h >= self.height {
            return Err(MazeError::OutOfRange {
                w,
                h,
                width: self.width,
                height: self.height,
            });
        }
        Ok(RoomId(self.cell_index(w, h)))
    }

    /// Grid position of a room
    pub fn coords(&self, id: RoomId) -> Result<(usize, usize)> {
        self.check_room(id)?;
        Ok((id.0 % self.width, id.0 / self.width))
    }

    pub fn check_room(&self, id: RoomId) -> Result<()> {
        if id.0 < self.rooms.len() {
            Ok(())
        } else {
            Err(MazeError::UnknownRoom {
                index: id.0,
                rooms: self.rooms.len(),
            })
        }
    }

    /// Conventional starting room: the centre of the grid
    pub fn default_start(&self) -> RoomId {
        RoomId(self.cell_index(self.width / 2, self.height / 2))
    }

    pub fn open_door_count(&self) -> usize {
        self.doors.iter().filter(|door| door.is_open()).count()
    }

    /// Ids of all open doors, in door order
    pub fn open_doors(&self) -> Vec<DoorId> {
        self.doors
            .iter()
            .enumerate()
            .filter(|(_, door)| door.is_open())
            .map(|(i, _)| DoorId(i))
            .collect()
    }

    /// Clear every door's rendered flag
    pub fn reset_rendered(&mut self) {
        for door in &mut self.doors {
            door.reset_rendered();
        }
    }

    /// Return to the raw state: all rooms unvisited, all doors closed.
    pub fn reset(&mut self) {
        for room in &mut self.rooms {
            room.reset_visited();
        }
        for door in &mut self.doors {
            door.close();
            door.reset_rendered();
        }
    }

    /// Rooms reachable from `start` through doors accepted by `passable`
    pub(crate) fn reachable_from<F>(&self, start: RoomId, passable: F) -> usize
    where
        F: Fn(&Door) -> bool,
    {
        let mut seen = vec![false; self.rooms.len()];
        let mut queue = VecDeque::new();
        seen[start.0] = true;
        queue.push_back(start);
        let mut reached = 1;

        while let Some(current) = queue.pop_front() {
            for door_id in self.rooms[current.0].doors().iter().flatten() {
                let door = &self.doors[door_id.0];
                if !passable(door) {
                    continue;
                }
                if let Some(next) = door.behind(current) {
                    if !seen[next.0] {
                        seen[next.0] = true;
                        reached += 1;
                        queue.push_back(next);
                    }
                }
            }
        }

        reached
    }

    /// Every room must be reachable when all unlocked doors are passable
    pub fn check_connected(&self) -> Result<()> {
        let total = self.rooms.len();
        let reached = self.reachable_from(RoomId(0), |door| !door.is_locked());
        if reached == total {
            Ok(())
        } else {
            Err(MazeError::DisconnectedGraph { reached, total })
        }
    }

    /// Open doors must form a spanning tree: connected, with rooms - 1 edges.
    pub fn verify_perfect(&self) -> Result<()> {
        let total = self.rooms.len();
        let reached = self.reachable_from(RoomId(0), Door::is_open);
        if reached != total {
            return Err(MazeError::DisconnectedGraph { reached, total });
        }

        let open_doors = self.open_door_count();
        if open_doors != total - 1 {
            return Err(MazeError::NotATree {
                open_doors,
                rooms: total,
            });
        }
        Ok(())
    }
}
