//! Error types for icon generation

use std::io;

use thiserror::Error;

/// Result type alias for icon operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Creating, writing or reading an icon file failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Encoding or saving a raster image failed
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// None of the requested sizes fit the master canvas
    #[error("No icon entries fit a {master}x{master} master (requested {requested:?})")]
    NoEntries { master: u32, requested: Vec<u32> },
}
