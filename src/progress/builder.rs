//! Builder pattern implementation for creating ProgressDisplay instances.
//!
//! This module provides the [`ProgressDisplayBuilder`] struct that
//! implements the builder pattern for configuring and creating
//! [`ProgressDisplay`] instances. It allows for flexible configuration of
//! the bar geometry, glyphs, colors, and the output sink.
//!
//! # Examples
//!
//! ## Basic Builder Usage
//!
//! ```rust
//! use headway::ProgressDisplayBuilder;
//!
//! # fn example() -> Result<(), headway::Error> {
//! let progress = ProgressDisplayBuilder::new()
//!     .bar_width(40)
//!     .glyphs('=', '.')
//!     .build(100)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Custom Colors and Sink
//!
//! ```rust
//! use headway::{ColorScheme, ProgressDisplayBuilder};
//!
//! # fn example() -> Result<(), headway::Error> {
//! let progress = ProgressDisplayBuilder::new()
//!     .colors(ColorScheme::vivid())
//!     .sink(std::io::stderr())
//!     .build(100)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Block Style
//!
//! ```rust
//! use headway::ProgressDisplayBuilder;
//!
//! # fn example() -> Result<(), headway::Error> {
//! // Block glyphs, braille spinner, truecolor output
//! let progress = ProgressDisplayBuilder::block_style().build(100)?;
//! # Ok(())
//! # }
//! ```

use std::io::{self, Write};

use super::display::ProgressDisplay;
use crate::error::Result;
use crate::progress::{ColorScheme, StyleOptions};

/// A builder used to create a [`ProgressDisplay`].
///
/// ```rust
/// # fn main() -> Result<(), headway::Error> {
/// use headway::ProgressDisplayBuilder;
///
/// let p = ProgressDisplayBuilder::new().bar_width(20).build(10)?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct ProgressDisplayBuilder {
    style: StyleOptions,
    sink: Option<Box<dyn Write>>,
}

impl ProgressDisplayBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        ProgressDisplayBuilder::default()
    }

    /// Convenience function to start from the block style.
    pub fn block_style() -> Self {
        let mut builder = ProgressDisplayBuilder::default();
        builder.style = StyleOptions::with_block_style();
        builder
    }

    /// Set the number of glyph positions in the bar.
    pub fn bar_width(mut self, bar_width: usize) -> Self {
        self.style.bar_width = bar_width;
        self
    }

    /// Set the glyphs used for the filled and empty portions of the bar.
    pub fn glyphs(mut self, fill: char, empty: char) -> Self {
        self.style.fill_glyph = fill;
        self.style.empty_glyph = empty;
        self
    }

    /// Set the spinner glyph sequence, one glyph per animation step.
    pub fn spinner_glyphs(mut self, glyphs: &str) -> Self {
        self.style.spinner_glyphs = glyphs.chars().collect();
        self
    }

    /// Set the color scheme.
    pub fn colors(mut self, colors: ColorScheme) -> Self {
        self.style.colors = colors;
        self
    }

    /// Set the display style options, replacing the whole configuration.
    pub fn style_options(mut self, style: StyleOptions) -> Self {
        self.style = style;
        self
    }

    /// Set the output sink the rendered frames are written to.
    ///
    /// Defaults to stdout. Anything implementing [`Write`] works: stderr,
    /// a file, or an in-memory buffer.
    pub fn sink<W: Write + 'static>(mut self, sink: W) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Create the [`ProgressDisplay`] with the specified options.
    ///
    /// Fails with [`crate::Error::InvalidConfiguration`] if `total` is
    /// zero, the bar width is zero, or the spinner glyph sequence is
    /// empty.
    pub fn build(self, total: u64) -> Result<ProgressDisplay> {
        let sink = self.sink.unwrap_or_else(|| Box::new(io::stdout()));
        ProgressDisplay::from_parts(total, self.style, sink)
    }
}
