// component.rs - Component data kept by the entity store
//
// Components are plain data keyed by entity name. Asset handles are keys the
// render sink resolves; the store never loads anything itself.

use glam::{DVec2, IVec2, UVec2};
use std::sync::Arc;

/// Screen position plus draw depth.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    /// Draw order, ascending.
    pub z: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn xy(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

/// Image key (the source path as declared by the script).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageHandle(Arc<str>);

impl ImageHandle {
    pub fn new(path: impl AsRef<str>) -> Self {
        Self(Arc::from(path.as_ref()))
    }

    pub fn path(&self) -> &str {
        &self.0
    }
}

/// Font key; fonts are identified by pixel size only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontHandle {
    pub size: u32,
}

impl FontHandle {
    pub fn new(size: u32) -> Self {
        Self { size }
    }
}

/// Sprite sheet cell selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub image: ImageHandle,
    /// Size of one cell in the sheet.
    pub cell_size: UVec2,
    /// Current cell (column, row).
    pub frame: IVec2,
    pub hidden: bool,
}

impl Sprite {
    pub fn new(image: ImageHandle, cell_size: UVec2, frame: IVec2) -> Self {
        Self {
            image,
            cell_size,
            frame,
            hidden: false,
        }
    }

    /// Top-left corner of the current cell inside the sheet.
    pub fn source_origin(&self) -> IVec2 {
        self.frame * self.cell_size.as_ivec2()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub text: String,
    pub font: FontHandle,
}

impl Text {
    pub fn new(text: impl Into<String>, font: FontHandle) -> Self {
        Self {
            text: text.into(),
            font,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_origin_scales_frame_by_cell() {
        let sprite = Sprite::new(
            ImageHandle::new("hero.png"),
            UVec2::new(32, 48),
            IVec2::new(2, 1),
        );
        assert_eq!(sprite.source_origin(), IVec2::new(64, 48));
    }

    #[test]
    fn image_handles_compare_by_path() {
        assert_eq!(ImageHandle::new("a.png"), ImageHandle::new(String::from("a.png")));
        assert_eq!(ImageHandle::new("a.png").path(), "a.png");
    }
}
