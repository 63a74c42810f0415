//! Shared shape of everything that moves on the field
//!
//! Entities are positioned by the bottom-left corner of a fixed-size hitbox. The
//! hitbox size is taken from the entity's first sprite frame when it is
//! created and does not follow later frame changes, so a jump pose that is
//! taller than the walk pose does not change what the player collides with.

use sdl2::rect::Rect;

/// Pixel size of an entity's hitbox
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSize {
    pub width: u32,
    pub height: u32,
}

impl FrameSize {
    pub const fn new(width: u32, height: u32) -> Self {
        FrameSize { width, height }
    }
}

/// Hitbox size plus the number of frames in the entity's animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteMetrics {
    pub size: FrameSize,
    pub frames: usize,
}

impl SpriteMetrics {
    pub const fn new(size: FrameSize, frames: usize) -> Self {
        SpriteMetrics { size, frames }
    }
}

pub trait Entity {
    /// Left edge of the hitbox
    fn left(&self) -> i32;

    /// Bottom edge of the hitbox (exclusive, like an SDL rect's bottom)
    fn bottom(&self) -> i32;

    fn size(&self) -> FrameSize;

    /// Index into the entity's frame list to display this tick
    fn frame_index(&self) -> usize;

    /// Axis-aligned bounding box in screen coordinates
    fn bounds(&self) -> Rect {
        let size = self.size();
        Rect::new(self.left(), self.bottom() - size.height as i32, size.width, size.height)
    }
}

/// Left edge for a hitbox whose bottom-centre sits at `center_x`
pub fn left_from_center(center_x: i32, size: FrameSize) -> i32 {
    center_x - (size.width / 2) as i32
}
