// Procedural fill: every frame rewrites the visible part of the buffer.
// Visual outcomes:
// - Gradient: red ramps left→right, blue ramps top→bottom, and both bands
//   scroll diagonally as the offset grows (wrapping every 256 steps).
// - Solid: one flat color, no motion.

use crate::color::{pack, truncate8};
use crate::types::{Extent, PixelBuffer};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FillMode {
    /// Animated red/blue gradient driven by the offset.
    Gradient,
    /// Flat packed color; time has no effect.
    Solid(u32),
}

/// Accumulated animation state carried from frame to frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimationState {
    /// Grows by `speed * dt` every frame and is never reset.
    pub offset: f64,
}

pub struct Animator {
    speed: f32,
    mode: FillMode,
}

impl Animator {
    pub fn new(speed: f32, mode: FillMode) -> Self {
        Self { speed, mode }
    }

    /// Step the state by `dt` seconds and redraw the part of `logical` that fits in `buffer`.
    /// Returns the new state; cells outside the render extent are left untouched.
    pub fn advance(
        &self,
        buffer: &mut PixelBuffer,
        logical: Extent,
        dt: f32,
        state: AnimationState,
    ) -> AnimationState {
        let next = match self.mode {
            FillMode::Gradient => AnimationState {
                offset: state.offset + f64::from(self.speed) * f64::from(dt),
            },
            FillMode::Solid(_) => state,
        };

        let render = buffer.render_extent(logical);
        self.fill(buffer, render, next.offset);
        next
    }

    /// Rewrite the top-left `render` cells for the given offset. Pure function of its inputs.
    pub fn fill(&self, buffer: &mut PixelBuffer, render: Extent, offset: f64) {
        match self.mode {
            FillMode::Gradient => {
                // Each row only needs its own y; no pixel reads another.
                for (y, row) in buffer.rows_mut(render).enumerate() {
                    let blue = truncate8(y as f64 - offset);
                    for (x, px) in row.iter_mut().enumerate() {
                        *px = pack(truncate8(x as f64 - offset), 0, blue, 255);
                    }
                }
            }
            FillMode::Solid(color) => {
                for row in buffer.rows_mut(render) {
                    row.fill(color);
                }
            }
        }
    }
}
