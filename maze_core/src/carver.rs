// carver.rs - Randomized depth-first spanning tree over the room graph
//
// Opens doors from a start room until every reachable room is visited. The
// walk keeps its own stack of rooms instead of recursing, so long corridors
// cannot exhaust the call stack. The visiting order and the RNG draws are the
// same as the recursive formulation.

use crate::door::DoorId;
use crate::error::Result;
use crate::maze::Maze;
use crate::room::RoomId;
use log::debug;
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};

/// How a carving pass ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarveOutcome {
    Completed { opened: usize },
    Cancelled { opened: usize },
}

impl CarveOutcome {
    pub fn opened(self) -> usize {
        match self {
            CarveOutcome::Completed { opened } | CarveOutcome::Cancelled { opened } => opened,
        }
    }
}

impl Maze {
    /// Carve a perfect maze starting at `start`.
    ///
    /// Only door `is_open` and room `visited` flags change. A maze that has
    /// already been carved has no unvisited rooms left; call [`Maze::reset`]
    /// before carving it again.
    pub fn carve<R: Rng + ?Sized>(&mut self, start: RoomId, rng: &mut R) -> Result<()> {
        let never = AtomicBool::new(false);
        self.carve_cancellable(start, rng, &never).map(|_| ())
    }

    /// Like [`Maze::carve`], but checks `cancel` before every step.
    pub fn carve_cancellable<R: Rng + ?Sized>(
        &mut self,
        start: RoomId,
        rng: &mut R,
        cancel: &AtomicBool,
    ) -> Result<CarveOutcome> {
        self.check_room(start)?;

        self.rooms[start.0].visit();
        let mut stack = vec![start];
        let mut opened = 0;
        let mut deepest = 1;

        while let Some(&current) = stack.last() {
            if cancel.load(Ordering::Relaxed) {
                debug!("Carving cancelled after opening {} doors", opened);
                return Ok(CarveOutcome::Cancelled { opened });
            }

            match self.enter_unvisited_neighbour(current, rng) {
                Some(next) => {
                    stack.push(next);
                    opened += 1;
                    deepest = deepest.max(stack.len());
                }
                // Exhausted: back to the room we came from
                None => {
                    stack.pop();
                }
            }
        }

        debug!(
            "Carved {} doors from room {} (max depth {})",
            opened, start.0, deepest
        );
        Ok(CarveOutcome::Completed { opened })
    }

    /// Closed, unlocked doors of `room` leading to unvisited rooms, in slot order
    pub fn doors_to_unvisited_neighbours(&self, room: RoomId) -> Vec<DoorId> {
        let Some(current) = self.rooms.get(room.0) else {
            return Vec::new();
        };

        current
            .doors()
            .iter()
            .flatten()
            .copied()
            .filter(|door_id| {
                let door = &self.doors[door_id.0];
                !door.is_locked()
                    && door
                        .behind(room)
                        .is_some_and(|next| !self.rooms[next.0].is_visited())
            })
            .collect()
    }

    /// Open a random door to an unvisited neighbour and step through it
    fn enter_unvisited_neighbour<R: Rng + ?Sized>(&mut self, room: RoomId, rng: &mut R) -> Option<RoomId> {
        let candidates = self.doors_to_unvisited_neighbours(room);
        if candidates.is_empty() {
            return None;
        }

        let door = &mut self.doors[candidates[rng.gen_range(0..candidates.len())].0];
        door.open();

        let next = door.behind(room)?;
        self.rooms[next.0].visit();
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MazeError;
    use proptest::prelude::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};

    /// Counts draws from the wrapped source, optionally raising `cancel`
    /// once `cancel_after` draws have been made.
    struct CountingRng<'a, R> {
        inner: R,
        draws: usize,
        cancel: Option<(usize, &'a AtomicBool)>,
    }

    impl<'a, R: RngCore> CountingRng<'a, R> {
        fn new(inner: R) -> Self {
            Self { inner, draws: 0, cancel: None }
        }

        fn cancelling_after(inner: R, cancel_after: usize, flag: &'a AtomicBool) -> Self {
            Self { inner, draws: 0, cancel: Some((cancel_after, flag)) }
        }

        fn tick(&mut self) {
            self.draws += 1;
            if let Some((after, flag)) = self.cancel {
                if self.draws >= after {
                    flag.store(true, Ordering::Relaxed);
                }
            }
        }
    }

    impl<R: RngCore> RngCore for CountingRng<'_, R> {
        fn next_u32(&mut self) -> u32 {
            self.tick();
            self.inner.next_u32()
        }

        fn next_u64(&mut self) -> u64 {
            self.tick();
            self.inner.next_u64()
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            self.tick();
            self.inner.fill_bytes(dest)
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
            self.tick();
            self.inner.try_fill_bytes(dest)
        }
    }

    fn carved(width: usize, height: usize, seed: u64) -> Maze {
        let mut maze = Maze::new(width, height).unwrap();
        let start = maze.default_start();
        maze.carve(start, &mut StdRng::seed_from_u64(seed)).unwrap();
        maze
    }

    /// Removing the door must leave its two rooms in separate components
    fn door_is_bridge(maze: &Maze, door_id: DoorId) -> bool {
        let door = &maze.doors()[door_id.0];
        let [Some(a), Some(b)] = door.rooms() else {
            return false;
        };
        let reached = maze.reachable_from(a, |d| d.is_open() && d.index() != door_id.0);
        let reached_b = maze.reachable_from(b, |d| d.is_open() && d.index() != door_id.0);
        reached + reached_b == maze.room_count()
    }

    #[test]
    fn test_three_by_three_from_centre() {
        let mut maze = Maze::new(3, 3).unwrap();
        maze.carve(RoomId(4), &mut StdRng::seed_from_u64(42)).unwrap();

        assert_eq!(maze.open_door_count(), 8);
        assert!(maze.rooms().iter().all(|room| room.is_visited()));
        maze.verify_perfect().unwrap();

        let first = maze.open_doors();
        maze.reset();
        maze.carve(RoomId(4), &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(maze.open_doors(), first);
    }

    #[test]
    fn test_three_by_three_first_choice_golden() {
        // A zero source always takes the first candidate in slot order
        // (north, east, south, west): 4 -> 1 -> 2 -> 5 -> 8 -> 7 -> 6 -> 3 -> 0
        let mut maze = Maze::new(3, 3).unwrap();
        let mut rng = CountingRng::new(StepRng::new(0, 0));
        maze.carve(RoomId(4), &mut rng).unwrap();

        let open: Vec<usize> = maze.open_doors().iter().map(|id| id.0).collect();
        assert_eq!(open, vec![1, 3, 5, 6, 7, 8, 10, 11]);
        // one draw per opened door, none when backtracking
        assert_eq!(rng.draws, 8);
        maze.verify_perfect().unwrap();
    }

    #[test]
    fn test_single_room_carves_nothing() {
        let mut maze = Maze::new(1, 1).unwrap();
        maze.carve(RoomId(0), &mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(maze.open_door_count(), 0);
        assert!(maze.rooms()[0].is_visited());
        maze.verify_perfect().unwrap();
    }

    #[test]
    fn test_unknown_start_room() {
        let mut maze = Maze::new(2, 2).unwrap();
        let err = maze.carve(RoomId(4), &mut StdRng::seed_from_u64(0)).unwrap_err();
        assert_eq!(err, MazeError::UnknownRoom { index: 4, rooms: 4 });
        assert_eq!(maze.open_door_count(), 0);
    }

    #[test]
    fn test_every_open_door_is_a_bridge() {
        let maze = carved(6, 5, 7);
        for door_id in maze.open_doors() {
            assert!(door_is_bridge(&maze, door_id), "door {} closes a cycle", door_id.0);
        }
    }

    #[test]
    fn test_long_corridor_does_not_recurse() {
        let mut maze = Maze::new(5000, 1).unwrap();
        maze.carve(RoomId(0), &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(maze.open_door_count(), 4999);
    }

    #[test]
    fn test_candidates_shrink_as_rooms_are_visited() {
        let mut maze = Maze::new(3, 3).unwrap();
        assert_eq!(maze.doors_to_unvisited_neighbours(RoomId(4)).len(), 4);
        assert_eq!(maze.doors_to_unvisited_neighbours(RoomId(0)).len(), 2);

        maze.rooms[1].visit();
        maze.rooms[3].visit();
        assert_eq!(maze.doors_to_unvisited_neighbours(RoomId(4)).len(), 2);
        assert!(maze.doors_to_unvisited_neighbours(RoomId(0)).is_empty());
        assert!(maze.doors_to_unvisited_neighbours(RoomId(99)).is_empty());
    }

    #[test]
    fn test_cancelled_before_first_step() {
        let mut maze = Maze::new(4, 4).unwrap();
        let cancel = AtomicBool::new(true);
        let outcome = maze
            .carve_cancellable(RoomId(0), &mut StdRng::seed_from_u64(0), &cancel)
            .unwrap();
        assert_eq!(outcome, CarveOutcome::Cancelled { opened: 0 });
        assert_eq!(maze.open_door_count(), 0);
    }

    #[test]
    fn test_cancelled_mid_carve_leaves_a_tree() {
        for cancel_after in [1, 5, 17] {
            let mut maze = Maze::new(6, 6).unwrap();
            let cancel = AtomicBool::new(false);
            let mut rng = CountingRng::cancelling_after(StepRng::new(0, 0), cancel_after, &cancel);

            let outcome = maze.carve_cancellable(RoomId(0), &mut rng, &cancel).unwrap();
            assert_eq!(outcome, CarveOutcome::Cancelled { opened: cancel_after });
            assert_eq!(maze.open_door_count(), cancel_after);

            // the carved part is a tree over exactly the visited rooms
            let visited = maze.rooms().iter().filter(|room| room.is_visited()).count();
            assert_eq!(visited, cancel_after + 1);
            assert_eq!(maze.reachable_from(RoomId(0), |d| d.is_open()), visited);
        }
    }

    #[test]
    fn test_completed_outcome_counts_doors() {
        let mut maze = Maze::new(4, 4).unwrap();
        let cancel = AtomicBool::new(false);
        let outcome = maze
            .carve_cancellable(RoomId(5), &mut StdRng::seed_from_u64(9), &cancel)
            .unwrap();
        assert_eq!(outcome, CarveOutcome::Completed { opened: 15 });
        assert_eq!(outcome.opened(), maze.open_door_count());
    }

    proptest! {
        #[test]
        fn prop_carving_yields_spanning_tree(
            width in 1usize..12,
            height in 1usize..12,
            seed in any::<u64>(),
            start_frac in 0.0f64..1.0,
        ) {
            let mut maze = Maze::new(width, height).unwrap();
            let start = RoomId(((maze.room_count() as f64) * start_frac) as usize % maze.room_count());
            maze.carve(start, &mut StdRng::seed_from_u64(seed)).unwrap();

            prop_assert_eq!(maze.open_door_count(), maze.room_count() - 1);
            prop_assert_eq!(maze.reachable_from(start, |d| d.is_open()), maze.room_count());
            prop_assert!(maze.verify_perfect().is_ok());
        }

        #[test]
        fn prop_same_seed_same_maze(width in 1usize..10, height in 1usize..10, seed in any::<u64>()) {
            prop_assert_eq!(carved(width, height, seed).open_doors(), carved(width, height, seed).open_doors());
        }
    }
}
