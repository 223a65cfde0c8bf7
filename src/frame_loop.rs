// The per-frame pipeline: time → events → fill → present, until the token is cancelled.

use crate::animator::{AnimationState, Animator};
use crate::cancel::CancelToken;
use crate::clock::{FpsCounter, FrameClock};
use crate::draw::Surface;
use crate::error::Error;
use crate::types::{Extent, PixelBuffer};
use log::{debug, info};

/// Summary handed back when the loop exits normally.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameStats {
    pub frames: u64,
    pub last_region: Extent,
    /// Frames whose render region differed from the previous frame's.
    pub region_changes: u64,
    pub state: AnimationState,
}

/// Run frames until `cancel` is set. The buffer is borrowed, never reallocated; any
/// presentation failure stops the loop and is returned as-is.
pub fn run<S: Surface>(
    surface: &mut S,
    buffer: &mut PixelBuffer,
    animator: &Animator,
    cancel: &CancelToken,
) -> Result<FrameStats, Error> {
    let mut stats = FrameStats::default();
    let mut clock = FrameClock::start();
    let mut fps = FpsCounter::new(clock.last_tick());

    while !cancel.is_cancelled() {
        let dt = clock.tick();

        surface.drain_events();
        if cancel.is_cancelled() {
            break;
        }

        let logical = surface.size();
        let region = buffer.render_extent(logical);
        if region != stats.last_region {
            stats.region_changes += 1;
            debug!(
                "Render region {}x{} (surface {}x{})",
                region.width, region.height, logical.width, logical.height
            );
        }

        stats.state = animator.advance(buffer, logical, dt, stats.state);
        surface.present(buffer, region)?;

        stats.frames += 1;
        stats.last_region = region;

        if let Some(rate) = fps.frame(clock.last_tick()) {
            info!("FPS: {:.1}", rate);
        }
    }

    info!("Frame loop stopped after {} frames", stats.frames);
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animator::FillMode;
    use crate::color::unpack;
    use std::collections::VecDeque;
    use test_log::test;

    /// Scripted host: one size per frame, closes itself after the script runs out.
    struct MockSurface {
        cancel: CancelToken,
        sizes: VecDeque<Extent>,
        current: Extent,
        presented: Vec<Extent>,
        fail_on_frame: Option<usize>,
        // Snapshot of the buffer's first pixel at each present.
        first_pixels: Vec<u32>,
    }

    impl MockSurface {
        fn new(cancel: CancelToken, sizes: &[Extent]) -> Self {
            Self {
                cancel,
                sizes: sizes.iter().copied().collect(),
                current: Extent::default(),
                presented: Vec::new(),
                fail_on_frame: None,
                first_pixels: Vec::new(),
            }
        }
    }

    impl Surface for MockSurface {
        fn size(&self) -> Extent {
            self.current
        }

        fn drain_events(&mut self) {
            match self.sizes.pop_front() {
                Some(size) => self.current = size,
                None => self.cancel.cancel(),
            }
        }

        fn present(&mut self, buffer: &PixelBuffer, region: Extent) -> Result<(), Error> {
            if self.fail_on_frame == Some(self.presented.len()) {
                return Err(Error::Present("device lost".into()));
            }
            assert!(region.width <= buffer.capacity().width);
            assert!(region.height <= buffer.capacity().height);
            self.presented.push(region);
            self.first_pixels.push(buffer.get(0, 0).unwrap_or(0));
            Ok(())
        }
    }

    #[test]
    fn runs_until_surface_cancels() {
        let cancel = CancelToken::new();
        let sizes = [Extent::new(4, 4); 3];
        let mut surface = MockSurface::new(cancel.clone(), &sizes);
        let mut buf = PixelBuffer::allocate(8, 8).unwrap();
        let anim = Animator::new(100.0, FillMode::Gradient);

        let stats = run(&mut surface, &mut buf, &anim, &cancel).unwrap();

        assert_eq!(stats.frames, 3);
        assert_eq!(surface.presented.len(), 3);
        assert!(cancel.is_cancelled());
        assert!(stats.state.offset >= 0.0);
    }

    #[test]
    fn already_cancelled_token_renders_nothing() {
        let cancel = CancelToken::new();
        cancel.cancel();
        let mut surface = MockSurface::new(cancel.clone(), &[Extent::new(4, 4)]);
        let mut buf = PixelBuffer::allocate(4, 4).unwrap();
        let anim = Animator::new(100.0, FillMode::Gradient);

        let stats = run(&mut surface, &mut buf, &anim, &cancel).unwrap();
        assert_eq!(stats.frames, 0);
        assert!(surface.presented.is_empty());
        assert!(buf.pixels().iter().all(|&p| p == 0));
    }

    #[test]
    fn presents_clamped_region_and_follows_resizes() {
        let cancel = CancelToken::new();
        let sizes = [
            Extent::new(3, 2),
            Extent::new(1000, 1000),
            Extent::new(0, 5),
            Extent::new(6, 1),
        ];
        let mut surface = MockSurface::new(cancel.clone(), &sizes);
        let mut buf = PixelBuffer::allocate(4, 4).unwrap();
        let anim = Animator::new(0.0, FillMode::Gradient);

        let stats = run(&mut surface, &mut buf, &anim, &cancel).unwrap();

        assert_eq!(
            surface.presented,
            vec![
                Extent::new(3, 2),
                Extent::new(4, 4),
                Extent::new(0, 4),
                Extent::new(4, 1),
            ]
        );
        assert_eq!(stats.last_region, Extent::new(4, 1));
        // Capacity unchanged across resizes.
        assert_eq!(buf.capacity(), Extent::new(4, 4));
        assert_eq!(buf.pixels().len(), 16);
        // Speed 0: the gradient stays at offset 0.
        assert_eq!(unpack(buf.get(3, 3).unwrap()).b, 3);
    }

    #[test]
    fn region_change_counted_once_per_resize() {
        let cancel = CancelToken::new();
        let sizes = [
            Extent::new(3, 2),
            Extent::new(3, 2),
            Extent::new(1000, 1000),
            Extent::new(5000, 5000), // still clamped to the same 4x4
            Extent::new(6, 1),
        ];
        let mut surface = MockSurface::new(cancel.clone(), &sizes);
        let mut buf = PixelBuffer::allocate(4, 4).unwrap();
        let anim = Animator::new(100.0, FillMode::Gradient);

        let stats = run(&mut surface, &mut buf, &anim, &cancel).unwrap();
        assert_eq!(stats.frames, 5);
        // 0x0 -> 3x2, 3x2 -> 4x4, 4x4 -> 4x1
        assert_eq!(stats.region_changes, 3);
    }

    #[test]
    fn solid_mode_paints_before_first_present() {
        let cancel = CancelToken::new();
        let mut surface = MockSurface::new(cancel.clone(), &[Extent::new(2, 2)]);
        let mut buf = PixelBuffer::allocate(2, 2).unwrap();
        let anim = Animator::new(100.0, FillMode::Solid(0xFFEB_A228));

        run(&mut surface, &mut buf, &anim, &cancel).unwrap();
        assert_eq!(surface.first_pixels, vec![0xFFEB_A228]);
    }

    #[test]
    fn present_failure_is_fatal() {
        let cancel = CancelToken::new();
        let sizes = [Extent::new(2, 2); 5];
        let mut surface = MockSurface::new(cancel.clone(), &sizes);
        surface.fail_on_frame = Some(1);
        let mut buf = PixelBuffer::allocate(2, 2).unwrap();
        let anim = Animator::new(100.0, FillMode::Gradient);

        let err = run(&mut surface, &mut buf, &anim, &cancel).unwrap_err();
        assert!(matches!(err, Error::Present(_)));
        assert_eq!(err.exit_code(), 5);
        assert_eq!(surface.presented.len(), 1);
    }
}
