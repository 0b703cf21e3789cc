// dump.rs - Plain-text diagnostic view of door state
//
// One character per door slot: `#` no door (grid edge), `x` locked,
// `O` open, `-` closed. Rooms are tab separated, rows newline separated.

use crate::maze::Maze;

impl Maze {
    pub fn dump(&self) -> String {
        let mut out = String::with_capacity(self.rooms.len() * 6 + self.height);

        for row in self.rooms.chunks(self.width) {
            for room in row {
                for &slot in room.doors() {
                    let c = match slot.and_then(|id| self.door(id)) {
                        None => '#',
                        Some(door) if door.is_locked() => 'x',
                        Some(door) if door.is_open() => 'O',
                        Some(_) => '-',
                    };
                    out.push(c);
                }
                out.push('\t');
            }
            out.push('\n');
        }

        out
    }
}
