// style.rs - Stroke and colour settings for SVG output

use crate::error_handling::{RenderError, Result};
use crate::renderer::WallKind;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Drawing parameters. Missing fields in a style file fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    pub scale: f64,        // Pixels per cell
    pub stroke_width: f64,
    pub opacity: f64,      // 0.0-1.0
    pub boundary_color: String,
    pub interior_color: String,
    pub background: Option<String>,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            scale: 30.0,
            stroke_width: 4.0,
            opacity: 1.0,
            boundary_color: "red".to_string(),
            interior_color: "green".to_string(),
            background: None,
        }
    }
}

impl RenderStyle {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| RenderError::io(path, e))?;
        let style = Self::from_json(&json)?;
        log::debug!("Loaded render style from {}: {:?}", path.display(), style);
        Ok(style)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn color_for(&self, kind: WallKind) -> &str {
        match kind {
            WallKind::Boundary => &self.boundary_color,
            WallKind::Interior => &self.interior_color,
        }
    }
}
