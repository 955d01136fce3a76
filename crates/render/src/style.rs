//! Immutable drawing settings for the plain-shapes renderer.

use image::Rgb;
use serde::{Deserialize, Serialize};

use crate::RenderError;

pub const MIN_CELL_SIZE: u32 = 16;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    pub cell_size: u32,
    pub wall_width: u32,
    pub dot_radius: u32,
    /// Pixel size of one bitmap-font dot.
    pub glyph_scale: u32,
    pub background: [u8; 3],
    pub wall: [u8; 3],
    pub door: [u8; 3],
    pub trap: [u8; 3],
    pub monster: [u8; 3],
    pub treasure: [u8; 3],
    pub gems: [u8; 3],
    pub boss: [u8; 3],
    pub text: [u8; 3],
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            cell_size: 100,
            wall_width: 2,
            dot_radius: 5,
            glyph_scale: 2,
            background: [255, 255, 255],
            wall: [0, 0, 0],
            door: [211, 211, 211],
            trap: [255, 0, 0],
            monster: [0, 0, 255],
            treasure: [255, 215, 0],
            gems: [0, 191, 255],
            boss: [255, 0, 0],
            text: [0, 0, 0],
        }
    }
}

impl RenderStyle {
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.cell_size < MIN_CELL_SIZE {
            return Err(RenderError::InvalidStyle(format!(
                "cell_size must be at least {MIN_CELL_SIZE}, got {}",
                self.cell_size
            )));
        }
        if self.wall_width == 0 || self.wall_width > self.cell_size / 4 {
            return Err(RenderError::InvalidStyle(format!(
                "wall_width must lie in 1..={}, got {}",
                self.cell_size / 4,
                self.wall_width
            )));
        }
        if self.dot_radius == 0 || self.dot_radius * 4 > self.cell_size {
            return Err(RenderError::InvalidStyle(format!(
                "dot_radius {} does not fit a {}px cell",
                self.dot_radius, self.cell_size
            )));
        }
        if self.glyph_scale == 0 {
            return Err(RenderError::InvalidStyle("glyph_scale must be at least 1".to_string()));
        }
        Ok(())
    }
}

pub(crate) fn rgb(color: [u8; 3]) -> Rgb<u8> {
    Rgb(color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_style_is_valid() {
        assert!(RenderStyle::default().validate().is_ok());
    }

    #[test]
    fn tiny_cells_and_oversized_walls_are_rejected() {
        let tiny = RenderStyle { cell_size: 4, ..RenderStyle::default() };
        assert!(matches!(tiny.validate(), Err(RenderError::InvalidStyle(_))));

        let thick = RenderStyle { wall_width: 40, ..RenderStyle::default() };
        assert!(matches!(thick.validate(), Err(RenderError::InvalidStyle(_))));

        let no_glyphs = RenderStyle { glyph_scale: 0, ..RenderStyle::default() };
        assert!(matches!(no_glyphs.validate(), Err(RenderError::InvalidStyle(_))));
    }

    #[test]
    fn partial_toml_keeps_default_colors() {
        let style: RenderStyle = toml::from_str("cell_size = 64\nwall = [10, 20, 30]\n")
            .expect("style parses");
        assert_eq!(style.cell_size, 64);
        assert_eq!(style.wall, [10, 20, 30]);
        assert_eq!(style.door, RenderStyle::default().door);
    }
}
