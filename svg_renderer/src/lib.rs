// lib.rs - Library exports for maze-svg-renderer
// Turns a carved maze graph into wall segments and SVG documents

pub mod error_handling;
pub mod renderer;
pub mod style;
pub mod svg_writer;

// Re-export commonly used types
pub use error_handling::{RenderError, Result};
pub use renderer::{render, render_room, WallGeometry, WallKind, WallSegment, MIN_RADIAL_SLOTS};
pub use style::RenderStyle;
pub use svg_writer::{save_document, to_document};
