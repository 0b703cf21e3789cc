// legacy.rs - Character-grid maze generator
//
// The older representation: an odd-sized grid where cells at odd (x, y) are
// nodes, everything else starts as wall, and carving knocks out the wall cell
// between two linked nodes. Each node keeps a 4-bit mask of directions it has
// not tried yet and a parent link used for backtracking.

use crate::error::{MazeError, Result};
use log::debug;
use rand::Rng;
use std::fmt;

const RIGHT: u8 = 0b0001;
const DOWN: u8 = 0b0010;
const LEFT: u8 = 0b0100;
const UP: u8 = 0b1000;
const ALL_DIRECTIONS: u8 = RIGHT | DOWN | LEFT | UP;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Passage,
}

#[derive(Debug, Clone, Copy, Default)]
struct Node {
    parent: Option<usize>,
    unexplored: u8,
}

#[derive(Debug, Clone)]
pub struct CharGrid {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
    nodes: Vec<Node>,
}

impl CharGrid {
    /// Generate a maze on a `width` x `height` character grid.
    /// Both dimensions must be odd and at least 3.
    pub fn generate<R: Rng + ?Sized>(width: usize, height: usize, rng: &mut R) -> Result<Self> {
        if width % 2 == 0 || height % 2 == 0 {
            return Err(MazeError::InvalidDimensions {
                width,
                height,
                reason: "dimensions must be odd",
            });
        }
        if width < 3 || height < 3 {
            return Err(MazeError::InvalidDimensions {
                width,
                height,
                reason: "dimensions must be at least 3",
            });
        }

        if width.checked_mul(height).is_none() {
            return Err(MazeError::InvalidDimensions {
                width,
                height,
                reason: "dimensions are too large",
            });
        }

        let mut grid = Self::walled(width, height);

        let start = grid.index(1, 1);
        grid.nodes[start].parent = Some(start);

        let mut last = start;
        let mut steps = 0usize;
        loop {
            last = grid.link(last, rng);
            steps += 1;
            if last == start {
                break;
            }
        }

        debug!("Generated {}x{} char grid in {} steps", width, height, steps);
        Ok(grid)
    }

    fn walled(width: usize, height: usize) -> Self {
        let mut tiles = vec![Tile::Wall; width * height];
        let mut nodes = vec![Node::default(); width * height];

        for y in (1..height).step_by(2) {
            for x in (1..width).step_by(2) {
                let i = y * width + x;
                tiles[i] = Tile::Passage;
                nodes[i].unexplored = ALL_DIRECTIONS;
            }
        }

        Self { width, height, tiles, nodes }
    }

    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Link `node` to a random unlinked neighbour and return that neighbour,
    /// or return the parent once every direction has been tried.
    fn link<R: Rng + ?Sized>(&mut self, node: usize, rng: &mut R) -> usize {
        let (x, y) = (node % self.width, node / self.width);

        while self.nodes[node].unexplored != 0 {
            let dir = 1u8 << rng.gen_range(0..4);
            if self.nodes[node].unexplored & dir == 0 {
                continue;
            }
            self.nodes[node].unexplored &= !dir;

            let (dx, dy) = match dir {
                RIGHT if x + 2 < self.width => (x + 2, y),
                DOWN if y + 2 < self.height => (x, y + 2),
                LEFT if x >= 2 => (x - 2, y),
                UP if y >= 2 => (x, y - 2),
                _ => continue,
            };

            let dest = self.index(dx, dy);
            if self.tiles[dest] != Tile::Passage || self.nodes[dest].parent.is_some() {
                continue;
            }

            self.nodes[dest].parent = Some(node);
            let between = self.index((x + dx) / 2, (y + dy) / 2);
            self.tiles[between] = Tile::Passage;
            return dest;
        }

        self.nodes[node].parent.unwrap_or(node)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn tile(&self, x: usize, y: usize) -> Option<Tile> {
        if x < self.width && y < self.height {
            Some(self.tiles[self.index(x, y)])
        } else {
            None
        }
    }
}

impl fmt::Display for CharGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.chunks(self.width) {
            for tile in row {
                let c = match tile {
                    Tile::Wall => '#',
                    Tile::Passage => ' ',
                };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
