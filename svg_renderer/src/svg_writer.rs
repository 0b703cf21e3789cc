// svg_writer.rs - SVG document assembly and output

use crate::error_handling::{RenderError, Result};
use crate::renderer::WallSegment;
use crate::style::RenderStyle;
use log::info;
use std::io::Write;
use std::path::Path;
use svg::node::element::{Line, Rectangle};
use svg::Document;

/// Build an `<svg>` of `<line>` elements for a `width` x `height` maze.
///
/// The view box is padded by one stroke width so edge walls are not clipped.
pub fn to_document(
    segments: &[WallSegment],
    width: usize,
    height: usize,
    style: &RenderStyle,
) -> Document {
    let pad = style.stroke_width;
    let (w, h) = (width as f64 * style.scale, height as f64 * style.scale);

    let mut document = Document::new()
        .set("viewBox", (-pad, -pad, w + 2.0 * pad, h + 2.0 * pad))
        .set("width", w + 2.0 * pad)
        .set("height", h + 2.0 * pad);

    if let Some(background) = &style.background {
        document = document.add(
            Rectangle::new()
                .set("x", -pad)
                .set("y", -pad)
                .set("width", w + 2.0 * pad)
                .set("height", h + 2.0 * pad)
                .set("fill", background.as_str()),
        );
    }

    for segment in segments {
        let line = Line::new()
            .set("room", segment.room.to_string())
            .set("door_dir", segment.door_dir.to_string())
            .set("x1", segment.from.x)
            .set("y1", segment.from.y)
            .set("x2", segment.to.x)
            .set("y2", segment.to.y)
            .set("stroke-width", style.stroke_width)
            .set("stroke", style.color_for(segment.kind))
            .set("opacity", style.opacity);
        document = document.add(line);
    }

    document
}

/// Write the document to `path`, creating parent directories; "-" writes to stdout.
pub fn save_document<P: AsRef<Path>>(path: P, document: &Document) -> Result<()> {
    let path = path.as_ref();

    if path == Path::new("-") {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{document}").map_err(|e| RenderError::io(path, e))?;
        return Ok(());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| RenderError::io(parent, e))?;
    }

    svg::save(path, document).map_err(|e| RenderError::io(path, e))?;
    info!("Saved maze to {}", path.display());
    Ok(())
}
