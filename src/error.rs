//! Error handling for the Headway library.
//!
//! This module provides centralized error handling for progress display
//! construction and rendering. All errors implement the standard Error
//! trait and provide context about the failure.

use std::io;
use thiserror::Error;

/// Errors that can happen when using Headway.
///
/// This enum represents all possible errors that can occur while building
/// or driving a progress display.
#[derive(Error, Debug)]
pub enum Error {
    /// Error caused by a rejected configuration.
    ///
    /// This variant is returned at construction time when the requested
    /// configuration would produce a degenerate display, such as a zero
    /// total, a zero-width bar, or an empty spinner glyph sequence.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Error from the output sink.
    ///
    /// This variant wraps I/O errors raised by the output sink when a
    /// rendered frame cannot be written or flushed, for example because
    /// the underlying stream was closed. The error is surfaced to the
    /// caller untouched; the display neither retries nor degrades.
    #[error("Output write failure")]
    OutputWrite {
        #[from]
        source: io::Error,
    },
}

/// Result type alias for operations that can fail with a Headway error.
///
/// This type alias provides a convenient way to return results from Headway
/// operations without having to spell out the full `Result<T, Error>` type.
pub type Result<T> = std::result::Result<T, Error>;
