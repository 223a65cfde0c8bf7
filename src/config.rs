// Compile-time settings. There is no config file and no CLI; edit the constants.

use crate::animator::FillMode;
use crate::types::Extent;

/// Window size requested at startup.
pub const INITIAL_WINDOW: Extent = Extent::new(1280, 720);

/// Largest drawable area; the pixel buffer is allocated to this once.
pub const BUFFER_CAPACITY: Extent = Extent::new(1920, 1080);

/// Gradient scroll speed in color steps per second.
pub const ANIMATION_SPEED: f32 = 100.0;

/// Paint one flat color instead of the animated gradient.
pub const STATIC_FILL: bool = false;

/// Color used by the static fill mode (opaque orange).
pub const SOLID_COLOR: u32 = 0xFFEB_A228;

pub const WINDOW_TITLE: &str = "Rasterizer";

pub struct Config {
    pub title: &'static str,
    pub window: Extent,
    pub capacity: Extent,
    pub speed: f32,
    pub mode: FillMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: WINDOW_TITLE,
            window: INITIAL_WINDOW,
            capacity: BUFFER_CAPACITY,
            speed: ANIMATION_SPEED,
            mode: if STATIC_FILL {
                FillMode::Solid(SOLID_COLOR)
            } else {
                FillMode::Gradient
            },
        }
    }
}
