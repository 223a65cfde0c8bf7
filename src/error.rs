// A tiny error type so we don't rely on anyhow/thiserror.
// Every variant states *where* things went wrong and maps to its own exit code.
use std::fmt::{self, Display};

#[derive(Debug)]
pub enum Error {
    WindowInit(String),   // Creating the window failed
    BufferAlloc(String),  // Reserving the pixel buffer failed
    SurfaceQuery(String), // The window reported no usable client area
    Present(String),      // Blitting the buffer to the window failed
}

impl Error {
    /// Process exit status for this failure class (0 and 1 are left to success / panics).
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::WindowInit(_) => 2,
            Error::BufferAlloc(_) => 3,
            Error::SurfaceQuery(_) => 4,
            Error::Present(_) => 5,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::WindowInit(s) => write!(f, "Window init error: {s}"),
            Error::BufferAlloc(s) => write!(f, "Buffer allocation error: {s}"),
            Error::SurfaceQuery(s) => write!(f, "Surface query error: {s}"),
            Error::Present(s) => write!(f, "Present error: {s}"),
        }
    }
}

impl std::error::Error for Error {}
