//! Draw-command scenes for the presentation surface
//!
//! The simulation never renders; it composes a `Scene`, an ordered list of
//! primitives on a fixed 800x600 canvas, and hands it to whatever surface
//! the host wired up (a window, a test, a JSON dump).

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::{POND_HEIGHT, POND_WIDTH};

/// 0xRRGGBB packed color
pub type Color = u32;

pub const BLACK: Color = 0x00_00_00;
pub const RED: Color = 0xFF_00_00;
pub const GREEN: Color = 0x00_FF_00;
pub const BLUE: Color = 0x00_00_FF;
pub const YELLOW: Color = 0xFF_FF_00;
pub const ORANGE: Color = 0xFF_C8_00;
pub const MAGENTA: Color = 0xFF_00_FF;
pub const CYAN: Color = 0x00_FF_FF;
pub const PINK: Color = 0xFF_AF_AF;
pub const GRAY: Color = 0x80_80_80;
pub const DARK_GRAY: Color = 0x40_40_40;
pub const LIGHT_GRAY: Color = 0xC0_C0_C0;

/// A single draw command. Primitives are drawn in list order, so later
/// entries land on top.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Primitive {
    /// Filled circle centered at `center`
    Circle {
        center: IVec2,
        radius: i32,
        color: Color,
    },
    /// Bold text centered at `pos`, `px` tall
    Text {
        pos: IVec2,
        px: i32,
        color: Color,
        text: String,
    },
}

/// An ordered list of draw commands on the fixed pond canvas
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    pub width: i32,
    pub height: i32,
    primitives: Vec<Primitive>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    pub fn new() -> Self {
        Self {
            width: POND_WIDTH,
            height: POND_HEIGHT,
            primitives: Vec::new(),
        }
    }

    pub fn circle(&mut self, center: IVec2, radius: i32, color: Color) {
        self.primitives.push(Primitive::Circle {
            center,
            radius,
            color,
        });
    }

    pub fn text(&mut self, pos: IVec2, px: i32, color: Color, text: impl Into<String>) {
        self.primitives.push(Primitive::Text {
            pos,
            px,
            color,
            text: text.into(),
        });
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}
