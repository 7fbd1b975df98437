//! Progress line styling and configuration options.
//!
//! This module provides styling and configuration options for the progress
//! line: the bar geometry, the glyphs used for the filled and empty
//! segments, the spinner glyph sequence, and the color codes applied to
//! each segment.
//!
//! # Examples
//!
//! ## Default Styling
//!
//! ```rust
//! use headway::StyleOptions;
//!
//! // Use default styling (50-column bar, `#`/`-` glyphs, plain output)
//! let style = StyleOptions::default();
//! ```
//!
//! ## Custom Styling
//!
//! ```rust
//! use headway::{ColorScheme, StyleOptions};
//!
//! let style = StyleOptions::new(
//!     40,
//!     '=',
//!     '.',
//!     StyleOptions::SPINNER_LINE,
//!     ColorScheme::vivid(),
//! );
//! ```
//!
//! ## Block Style
//!
//! ```rust
//! use headway::StyleOptions;
//!
//! // Block glyphs, braille spinner, and truecolor output
//! let style = StyleOptions::with_block_style();
//! ```

use crate::error::{Error, Result};

/// Color codes applied to the rendered segments.
///
/// Every field is an opaque control-sequence string inserted verbatim
/// around its segment; no validation of ANSI correctness is performed.
/// Each colored segment is followed by the `reset` code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorScheme {
    /// Code applied to the filled portion of the bar.
    pub fill: String,
    /// Code applied to the empty portion of the bar.
    pub empty: String,
    /// Code applied to the spinner glyph.
    pub spinner: String,
    /// Code applied to the percentage text while running.
    pub status: String,
    /// Code applied to the status text once the task is complete.
    pub complete: String,
    /// Code written after each colored segment to revert it.
    pub reset: String,
    /// Code written right after the carriage return to wipe leftovers
    /// from a previously longer frame.
    pub clear_line: String,
}

impl Default for ColorScheme {
    fn default() -> Self {
        ColorScheme::plain()
    }
}

impl ColorScheme {
    /// ANSI reset sequence: `ESC[0m`.
    pub const RESET: &'static str = "\x1b[0m";
    /// ANSI erase-to-end-of-line sequence: `ESC[K`.
    pub const CLEAR_LINE: &'static str = "\x1b[K";

    /// Create a no-op scheme where every code is empty.
    ///
    /// The rendered line is plain text, safe for sinks that do not
    /// understand control sequences.
    pub fn plain() -> Self {
        Self {
            fill: String::new(),
            empty: String::new(),
            spinner: String::new(),
            status: String::new(),
            complete: String::new(),
            reset: String::new(),
            clear_line: String::new(),
        }
    }

    /// Create a truecolor scheme.
    ///
    /// Magenta fill, slate empty segment, gold spinner, periwinkle status
    /// text, and green completion text.
    pub fn vivid() -> Self {
        Self {
            fill: "\x1b[1;38;2;224;0;90m".into(),
            empty: "\x1b[1;38;2;54;65;82m".into(),
            spinner: "\x1b[1;38;2;255;215;0m".into(),
            status: "\x1b[1;38;2;104;118;244m".into(),
            complete: "\x1b[1;38;2;12;159;109m".into(),
            reset: Self::RESET.into(),
            clear_line: Self::CLEAR_LINE.into(),
        }
    }
}

/// Define the display style options.
///
/// By default the bar is 50 columns wide, drawn with `#` and `-` glyphs,
/// animated with the classic line spinner, and rendered without colors.
#[derive(Debug, Clone)]
pub struct StyleOptions {
    /// Number of glyph positions in the bar.
    pub(crate) bar_width: usize,
    /// Glyph used for the filled portion of the bar.
    pub(crate) fill_glyph: char,
    /// Glyph used for the empty portion of the bar.
    pub(crate) empty_glyph: char,
    /// Ordered spinner glyph sequence, cycled one glyph per render.
    pub(crate) spinner_glyphs: Vec<char>,
    /// Color codes for the rendered segments.
    pub(crate) colors: ColorScheme,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            bar_width: 50,
            fill_glyph: '#',
            empty_glyph: '-',
            spinner_glyphs: StyleOptions::SPINNER_LINE.chars().collect(),
            colors: ColorScheme::plain(),
        }
    }
}

impl StyleOptions {
    /// Classic line spinner: `|/-\`.
    pub const SPINNER_LINE: &'static str = "|/-\\";
    /// Braille dot spinner: `⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏`.
    pub const SPINNER_DOTS: &'static str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";
    /// ASCII bar glyphs: `#` filled, `-` empty.
    pub const GLYPHS_HASH: (char, char) = ('#', '-');
    /// Block bar glyphs: `▰` filled, `▱` empty.
    pub const GLYPHS_BLOCK: (char, char) = ('▰', '▱');

    /// Create new [`StyleOptions`].
    pub fn new(
        bar_width: usize,
        fill_glyph: char,
        empty_glyph: char,
        spinner_glyphs: &str,
        colors: ColorScheme,
    ) -> Self {
        Self {
            bar_width,
            fill_glyph,
            empty_glyph,
            spinner_glyphs: spinner_glyphs.chars().collect(),
            colors,
        }
    }

    /// Create new [`StyleOptions`] using block glyphs, the braille spinner,
    /// and the vivid color scheme.
    pub fn with_block_style() -> Self {
        let (fill_glyph, empty_glyph) = StyleOptions::GLYPHS_BLOCK;
        Self {
            bar_width: 30,
            fill_glyph,
            empty_glyph,
            spinner_glyphs: StyleOptions::SPINNER_DOTS.chars().collect(),
            colors: ColorScheme::vivid(),
        }
    }

    /// Get the number of glyph positions in the bar.
    pub fn bar_width(&self) -> usize {
        self.bar_width
    }

    /// Get the glyph used for the filled portion of the bar.
    pub fn fill_glyph(&self) -> char {
        self.fill_glyph
    }

    /// Get the glyph used for the empty portion of the bar.
    pub fn empty_glyph(&self) -> char {
        self.empty_glyph
    }

    /// Get the spinner glyph sequence.
    pub fn spinner_glyphs(&self) -> &[char] {
        &self.spinner_glyphs
    }

    /// Get a reference to the color scheme.
    pub fn colors(&self) -> &ColorScheme {
        &self.colors
    }

    /// Set the color scheme.
    pub fn set_colors(&mut self, colors: ColorScheme) {
        self.colors = colors;
    }

    /// Reject geometry that would produce a degenerate rendering.
    pub(crate) fn validate(&self) -> Result<()> {
        if self.bar_width == 0 {
            return Err(Error::InvalidConfiguration(
                "bar width must be greater than zero".into(),
            ));
        }
        if self.spinner_glyphs.is_empty() {
            return Err(Error::InvalidConfiguration(
                "spinner glyph sequence must not be empty".into(),
            ));
        }
        Ok(())
    }
}
