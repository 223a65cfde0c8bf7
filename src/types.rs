// Core types shared by the animator, the frame loop and the window adapter.

use crate::error::Error;

/// A width × height pair in pixels (window size, visible region, capacity).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Extent {
    pub width: usize,
    pub height: usize,
}

impl Extent {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Per-axis minimum of the two extents.
    pub fn clamp_to(self, limit: Extent) -> Extent {
        Extent {
            width: self.width.min(limit.width),
            height: self.height.min(limit.height),
        }
    }

    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn area(self) -> usize {
        self.width * self.height
    }
}

/// Fixed-capacity, row-major framebuffer of packed 0xAARRGGBB pixels.
///
/// The backing storage is sized once to the largest supported display and is never
/// reallocated; the visible part of it changes with the window size. Row stride is
/// always the capacity width. Memory is released when the buffer is dropped.
pub struct PixelBuffer {
    capacity: Extent,
    pixels: Vec<u32>,
}

impl PixelBuffer {
    /// Reserve `capacity_width × capacity_height` zeroed pixels.
    pub fn allocate(capacity_width: usize, capacity_height: usize) -> Result<Self, Error> {
        let len = capacity_width.checked_mul(capacity_height).ok_or_else(|| {
            Error::BufferAlloc(format!(
                "{capacity_width}x{capacity_height} pixels overflows usize"
            ))
        })?;

        let mut pixels = Vec::new();
        pixels.try_reserve_exact(len).map_err(|e| {
            Error::BufferAlloc(format!("{capacity_width}x{capacity_height} pixels: {e}"))
        })?;
        pixels.resize(len, 0);

        Ok(Self {
            capacity: Extent::new(capacity_width, capacity_height),
            pixels,
        })
    }

    pub fn capacity(&self) -> Extent {
        self.capacity
    }

    /// Pixels between the starts of two consecutive rows.
    pub fn stride(&self) -> usize {
        self.capacity.width
    }

    /// The part of `logical` that actually fits in this buffer.
    pub fn render_extent(&self, logical: Extent) -> Extent {
        logical.clamp_to(self.capacity)
    }

    /// Store one pixel. Coordinates outside the capacity are a caller bug.
    #[cfg_attr(not(test), allow(dead_code, reason = "the fill writes whole rows via rows_mut"))]
    #[inline]
    pub fn write(&mut self, x: usize, y: usize, px: u32) {
        assert!(
            x < self.capacity.width && y < self.capacity.height,
            "pixel ({x},{y}) outside {}x{} buffer",
            self.capacity.width,
            self.capacity.height
        );
        let idx = y * self.stride() + x;
        self.pixels[idx] = px;
    }

    #[cfg_attr(not(test), allow(dead_code, reason = "read back by tests only"))]
    pub fn get(&self, x: usize, y: usize) -> Option<u32> {
        if x >= self.capacity.width || y >= self.capacity.height {
            return None;
        }
        Some(self.pixels[y * self.stride() + x])
    }

    /// Mutable rows of the top-left `extent` sub-region, clamped to capacity.
    /// Each slice is exactly `extent.width` long (after clamping).
    pub fn rows_mut(&mut self, extent: Extent) -> impl Iterator<Item = &mut [u32]> {
        let region = self.render_extent(extent);
        let stride = self.stride().max(1);
        self.pixels
            .chunks_mut(stride)
            .take(region.height)
            .map(move |row| &mut row[..region.width])
    }

    /// The whole backing store, `stride() * capacity().height` pixels.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }
}
