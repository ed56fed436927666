use crate::coords::Vec2;
use crate::paint::Color;

use super::{DrawList, ZIndex};

/// Solid, anti-aliased filled circle.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Disc {
    pub center: Vec2,
    pub radius: f32,
    pub color: Color,
}

impl Disc {
    #[inline]
    pub const fn new(center: Vec2, radius: f32, color: Color) -> Self {
        Self { center, radius, color }
    }

    /// Zero-radius or fully transparent discs produce no pixels.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.radius > 0.0 && self.color.a > 0.0 && self.center.is_finite() && self.radius.is_finite()
    }
}

impl DrawList {
    /// Records a disc on layer `z`.
    #[inline]
    pub fn push_disc(&mut self, z: ZIndex, center: Vec2, radius: f32, color: Color) {
        self.push(z, Disc::new(center, radius, color));
    }
}
