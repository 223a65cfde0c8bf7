// What you SEE:
// • A 1280x720 window filled with a red/blue gradient that scrolls diagonally.
// • Resize freely: the picture grows with the window up to the buffer capacity,
//   anything beyond stays the window background.
// • Close the window or press ESC to quit. RUST_LOG=debug shows resizes.

mod animator;
mod cancel;
mod clock;
mod color;
mod config;
mod draw;
mod error;
mod frame_loop;
mod types;

use animator::Animator;
use cancel::CancelToken;
use config::Config;
use draw::{Drawer, Surface};
use error::Error;
use log::{error, info};
use types::PixelBuffer;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    if let Err(e) = run(Config::default()) {
        error!("{e}");
        std::process::exit(e.exit_code());
    }
}

fn run(config: Config) -> Result<(), Error> {
    info!(
        "Starting rasterizer: window {}x{}, capacity {}x{}, mode {:?}",
        config.window.width,
        config.window.height,
        config.capacity.width,
        config.capacity.height,
        config.mode
    );

    /* --- Window + quit token ---
       Visual: an empty window appears. */
    let cancel = CancelToken::new();
    let mut drawer = Drawer::new(
        config.title,
        config.window,
        config.capacity.area(),
        cancel.clone(),
    )?;

    let initial = drawer.size();
    if initial.is_empty() {
        return Err(Error::SurfaceQuery(format!(
            "window reported {}x{} client area",
            initial.width, initial.height
        )));
    }

    /* --- Framebuffer, sized once to the largest supported display ---
       Dropped on every way out of this function. */
    let mut buffer = PixelBuffer::allocate(config.capacity.width, config.capacity.height)?;

    let animator = Animator::new(config.speed, config.mode);
    let stats = frame_loop::run(&mut drawer, &mut buffer, &animator, &cancel)?;

    info!(
        "Window closed after {} frames, {} region changes (offset {:.1})",
        stats.frames, stats.region_changes, stats.state.offset
    );
    Ok(())
}
