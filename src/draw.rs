// Window + presentation.
// Visual effects provided here:
// 1) A resizable window that shows the pixel buffer, anchored top-left (no stretching).
// 2) Closing the window or pressing ESC ends the program.

use crate::cancel::CancelToken;
use crate::error::Error;
use crate::types::{Extent, PixelBuffer};
use log::trace;
use minifb::{Key, ScaleMode, Window, WindowOptions};

/// What the frame loop needs from the host window system.
pub trait Surface {
    /// Current client-area size in pixels. May change between frames.
    fn size(&self) -> Extent;

    /// Non-blocking check of the close/quit state; cancels the loop's token when set.
    ///
    /// Implementations may pump the OS queue here or inside [`Surface::present`].
    /// minifb pumps in `present`, so this only reads what the previous frame's pump collected.
    fn drain_events(&mut self);

    /// Copy the top-left `region` of `buffer` to the top-left of the surface.
    /// `region` never exceeds `buffer.capacity()`.
    fn present(&mut self, buffer: &PixelBuffer, region: Extent) -> Result<(), Error>;
}

/// Top-left `region` of a `stride`-wide buffer as a tightly packed slice.
///
/// When the region spans full rows the source is returned as-is; otherwise each
/// visible row is copied into `out`, back to back. `out` must hold `region.area()` pixels.
pub fn pack_region<'a>(
    pixels: &'a [u32],
    stride: usize,
    region: Extent,
    out: &'a mut [u32],
) -> &'a [u32] {
    if region.is_empty() {
        return &[];
    }
    if region.width == stride {
        return &pixels[..region.area()];
    }

    let out = &mut out[..region.area()];
    for (dst, src) in out.chunks_exact_mut(region.width).zip(pixels.chunks(stride)) {
        dst.copy_from_slice(&src[..region.width]);
    }
    out
}

pub struct Drawer {
    window: Window,      // the on-screen window you see
    cancel: CancelToken, // set once the user asks to quit
    staging: Vec<u32>,   // tightly packed copy when the region is narrower than the stride
}

impl Drawer {
    /// Create a resizable window of the requested size.
    /// `staging_capacity` is the pixel count of the largest region that will ever be presented.
    pub fn new(
        title: &str,
        size: Extent,
        staging_capacity: usize,
        cancel: CancelToken,
    ) -> Result<Self, Error> {
        let opts = WindowOptions {
            resize: true,
            scale_mode: ScaleMode::UpperLeft,
            ..WindowOptions::default()
        };
        let window = Window::new(title, size.width, size.height, opts)
            .map_err(|e| Error::WindowInit(e.to_string()))?;

        let mut staging = Vec::new();
        staging.try_reserve_exact(staging_capacity).map_err(|e| {
            Error::BufferAlloc(format!("staging buffer of {staging_capacity} pixels: {e}"))
        })?;
        staging.resize(staging_capacity, 0);

        Ok(Self { window, cancel, staging })
    }
}

impl Surface for Drawer {
    fn size(&self) -> Extent {
        let (w, h) = self.window.get_size();
        Extent::new(w, h)
    }

    fn drain_events(&mut self) {
        if !self.window.is_open() || self.window.is_key_down(Key::Escape) {
            self.cancel.cancel();
        }
    }

    fn present(&mut self, buffer: &PixelBuffer, region: Extent) -> Result<(), Error> {
        if region.is_empty() {
            // Minimized: nothing to blit, but the event queue still has to move.
            self.window.update();
            return Ok(());
        }

        let stride = buffer.stride();
        let packed = pack_region(buffer.pixels(), stride, region, &mut self.staging);

        trace!("Present {}x{} (stride {})", region.width, region.height, stride);
        self.window
            .update_with_buffer(packed, region.width, region.height)
            .map_err(|e| Error::Present(e.to_string()))?;
        Ok(())
    }
}
