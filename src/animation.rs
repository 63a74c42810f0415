//! Tick-driven looping frame cycle
//!
//! Sprites in this game advance a tenth of a frame per tick and loop back to
//! the first frame once they run past the last one. The position is kept in
//! whole tenths so the loop length is exact: a two-frame cycle repeats every
//! 20 ticks, never 19 or 21 from accumulated rounding.
//!
//! # Example
//!
//! ```rust
//! let mut walk = FrameCycle::new(2);
//! for _ in 0..10 {
//!     walk.advance();
//! }
//! assert_eq!(walk.frame(), 1);
//! ```

/// Ticks spent on each frame (one tenth of a frame per tick)
pub const TICKS_PER_FRAME: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameCycle {
    tenths: u32,
    frame_count: u32,
}

impl FrameCycle {
    /// Creates a cycle over `frame_count` frames, starting on frame 0
    ///
    /// A zero count is treated as a single frame so `frame()` is always a
    /// valid index.
    pub fn new(frame_count: usize) -> Self {
        FrameCycle {
            tenths: 0,
            frame_count: frame_count.max(1) as u32,
        }
    }

    /// Moves forward one tick, wrapping back to frame 0 past the last frame
    pub fn advance(&mut self) {
        self.tenths += 1;
        if self.tenths >= self.frame_count * TICKS_PER_FRAME {
            self.tenths = 0;
        }
    }

    /// Index of the frame to display (fractional position truncated)
    pub fn frame(&self) -> usize {
        (self.tenths / TICKS_PER_FRAME) as usize
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count as usize
    }

    /// Length of one full loop in ticks
    pub fn period(&self) -> u32 {
        self.frame_count * TICKS_PER_FRAME
    }
}
