// renderer.rs - Wall segments from the current door state
//
// Each room contributes one segment per slot unless the slot holds an open
// door. Interior doors are shared by two rooms; the first room to reach a
// closed door draws it and flags it rendered so its neighbour skips it.

use maze_core::{Door, Maze, Point, Room};
use std::f64::consts::PI;

/// How slot directions map onto the cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum WallGeometry {
    /// Slots 0..4 are the top, right, bottom and left edges of the cell
    #[default]
    #[value(name = "axis")]
    AxisAligned,
    /// Slot directions spread evenly around the cell centre
    Radial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallKind {
    /// Grid edge or locked door
    Boundary,
    /// Closed door between two rooms
    Interior,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallSegment {
    pub from: Point,
    pub to: Point,
    pub room: usize,
    pub door_dir: usize,
    pub kind: WallKind,
}

impl WallGeometry {
    /// Endpoints of the wall for `slot` of the cell at `(w, h)`, in grid units
    pub fn wall(self, w: usize, h: usize, slot: usize, slot_count: usize) -> (Point, Point) {
        match self {
            WallGeometry::AxisAligned if slot_count == 4 => {
                let corners = [
                    Point::from_cell(w, h),
                    Point::from_cell(w + 1, h),
                    Point::from_cell(w + 1, h + 1),
                    Point::from_cell(w, h + 1),
                ];
                (corners[slot % 4], corners[(slot + 1) % 4])
            }
            _ => radial_wall(w, h, slot, slot_count),
        }
    }
}

/// Fewest sides the radial layout lays out; below three the chord radius
/// `1 / (2 cos(pi / n))` is negative or unbounded.
pub const MIN_RADIAL_SLOTS: usize = 3;

/// Slot `i` faces `(i - 1) * step`, so slot 0 points up in screen coordinates.
/// The wall is the chord spanning half a step either side, on the circle that
/// puts the endpoints of a 4-slot room on the cell corners. Rooms with fewer
/// than [`MIN_RADIAL_SLOTS`] slots are laid out as triangles.
fn radial_wall(w: usize, h: usize, slot: usize, slot_count: usize) -> (Point, Point) {
    let sweep = PI / slot_count.max(MIN_RADIAL_SLOTS) as f64;
    let radius = 1.0 / sweep.cos() / 2.0;
    let direction = (slot as f64 - 1.0) * 2.0 * sweep;

    let centre = Point::from_cell(w, h) + Point::new(0.5, 0.5);
    (
        centre + radius * Point::polar(direction - sweep),
        centre + radius * Point::polar(direction + sweep),
    )
}

/// Emit the walls of one room located at `(w, h)`.
///
/// `doors` is the arena the room's door ids index into.
pub fn render_room(
    room: &Room,
    (w, h): (usize, usize),
    doors: &mut [Door],
    geometry: WallGeometry,
    scale: f64,
    out: &mut Vec<WallSegment>,
) {
    let slot_count = room.slot_count();

    for (door_dir, &slot) in room.doors().iter().enumerate() {
        let kind = match slot.and_then(|id| doors.get_mut(id.0)) {
            None => WallKind::Boundary,
            Some(door) => {
                if door.is_open() || door.is_rendered() {
                    continue;
                }
                door.set_rendered();
                if door.is_locked() {
                    WallKind::Boundary
                } else {
                    WallKind::Interior
                }
            }
        };

        let (from, to) = geometry.wall(w, h, door_dir, slot_count);
        out.push(WallSegment {
            from: (from * scale).round(),
            to: (to * scale).round(),
            room: room.index(),
            door_dir,
            kind,
        });
    }
}

/// Render every room in row-major order.
///
/// Clears all rendered flags first, so repeated calls on an unchanged maze
/// return the same segments.
pub fn render(maze: &mut Maze, geometry: WallGeometry, scale: f64) -> Vec<WallSegment> {
    maze.reset_rendered();

    let width = maze.width();
    let (rooms, doors) = maze.rooms_and_doors_mut();
    let mut segments = Vec::with_capacity(rooms.len() * 2 + 2 * width);

    for (i, room) in rooms.iter().enumerate() {
        render_room(room, (i % width, i / width), doors, geometry, scale, &mut segments);
    }

    log::debug!(
        "Rendered {} wall segments ({:?} geometry, scale {})",
        segments.len(),
        geometry,
        scale
    );
    segments
}
