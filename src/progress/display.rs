//! Progress display state and in-place rendering.
//!
//! This module provides the [`ProgressDisplay`] struct that tracks
//! cumulative progress against a fixed total and renders it as a single
//! terminal line, overwritten in place on every render. It also provides
//! the [`Phase`] enum describing the display lifecycle.
//!
//! # Examples
//!
//! ## Driving a Display
//!
//! ```rust
//! use headway::ProgressDisplay;
//!
//! # fn example() -> Result<(), headway::Error> {
//! let mut progress = ProgressDisplay::new(100)?;
//!
//! progress.advance(25);
//! progress.render()?;
//!
//! progress.advance(75);
//! progress.render()?; // frozen to "Completed!" from here on
//! # Ok(())
//! # }
//! ```
//!
//! ## Rendering to a Custom Sink
//!
//! ```rust
//! use headway::ProgressDisplayBuilder;
//!
//! # fn example() -> Result<(), headway::Error> {
//! let mut progress = ProgressDisplayBuilder::new()
//!     .bar_width(10)
//!     .sink(Vec::<u8>::new())
//!     .build(4)?;
//!
//! progress.advance(2);
//! progress.render()?;
//! # Ok(())
//! # }
//! ```

use std::io::Write;

use tracing::debug;

use crate::error::{Error, Result};
use crate::progress::StyleOptions;

/// Display lifecycle phase.
///
/// The transition is one-way: the first render that observes the current
/// count reaching the total moves the display to [`Phase::Completed`], and
/// it never returns to [`Phase::Running`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Progress is still being reported; renders show the spinner and the
    /// percentage.
    Running,
    /// The total has been reached; renders show a full bar and the frozen
    /// `Completed!` status.
    Completed,
}

/// Stateful progress line writer.
///
/// Tracks cumulative progress toward a fixed total and renders the state
/// as a bar, a spinner glyph, and a percentage, written in place over the
/// previously rendered line.
pub struct ProgressDisplay {
    /// Units representing 100% completion.
    total: u64,
    /// Cumulative units reported so far; may exceed `total`.
    current: u64,
    /// Selects the spinner glyph; advances once per running render.
    spinner_index: usize,
    /// Current lifecycle phase.
    phase: Phase,
    /// Style options for the rendered line.
    style: StyleOptions,
    /// Destination for the rendered frames.
    sink: Box<dyn Write>,
}

impl std::fmt::Debug for ProgressDisplay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressDisplay")
            .field("total", &self.total)
            .field("current", &self.current)
            .field("spinner_index", &self.spinner_index)
            .field("phase", &self.phase)
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}

impl ProgressDisplay {
    /// Create a display with the default style, writing to stdout.
    ///
    /// Fails with [`Error::InvalidConfiguration`] if `total` is zero.
    pub fn new(total: u64) -> Result<Self> {
        crate::progress::ProgressDisplayBuilder::new().build(total)
    }

    /// Create a display from its parts, validating the configuration.
    pub(crate) fn from_parts(
        total: u64,
        style: StyleOptions,
        sink: Box<dyn Write>,
    ) -> Result<Self> {
        if total == 0 {
            return Err(Error::InvalidConfiguration(
                "total must be greater than zero".into(),
            ));
        }
        style.validate()?;
        debug!(total, bar_width = style.bar_width, "creating progress display");
        Ok(Self {
            total,
            current: 0,
            spinner_index: 0,
            phase: Phase::Running,
            style,
            sink,
        })
    }

    /// Report `amount` newly completed units.
    ///
    /// The count is stored unclamped: reporting more units than the total
    /// is accepted so callers can report work in uneven batches, and the
    /// overshoot is only clamped when rendering.
    pub fn advance(&mut self, amount: u64) {
        self.current = self.current.saturating_add(amount);
    }

    /// Render the current state to the sink, overwriting the previously
    /// rendered line.
    ///
    /// The frame is prefixed with a carriage return and carries no
    /// trailing newline, so repeated calls update one visual line. The
    /// sink is flushed after every frame. A rejected write or flush
    /// surfaces as [`Error::OutputWrite`].
    pub fn render(&mut self) -> Result<()> {
        let displayed = self.current.min(self.total);
        let fraction = displayed as f64 / self.total as f64;
        let filled = (fraction * self.style.bar_width as f64).round() as usize;
        let empty = self.style.bar_width - filled;
        let percent = (fraction * 100.0).round() as u8;

        let colors = &self.style.colors;
        let bar = format!(
            "{}{}{}{}{}",
            colors.fill,
            repeat_glyph(self.style.fill_glyph, filled),
            colors.empty,
            repeat_glyph(self.style.empty_glyph, empty),
            colors.reset,
        );

        let line = if displayed >= self.total {
            if self.phase == Phase::Running {
                self.phase = Phase::Completed;
                debug!(total = self.total, "progress complete");
            }
            format!(
                "\r{}{} {}Completed!{}",
                colors.clear_line, bar, colors.complete, colors.reset,
            )
        } else {
            let glyphs = &self.style.spinner_glyphs;
            let glyph = glyphs[self.spinner_index % glyphs.len()];
            self.spinner_index += 1;
            format!(
                "\r{}{} {}{}{} {}{}%{}",
                colors.clear_line,
                bar,
                colors.spinner,
                glyph,
                colors.reset,
                colors.status,
                percent,
                colors.reset,
            )
        };

        self.sink.write_all(line.as_bytes())?;
        self.sink.flush()?;
        Ok(())
    }

    /// Complete the display.
    ///
    /// Forces the count to the total, renders the final frame, and writes
    /// a trailing newline so subsequent output starts on a fresh line.
    /// This is the only place a newline is ever emitted.
    pub fn finish(&mut self) -> Result<()> {
        self.current = self.current.max(self.total);
        self.render()?;
        self.sink.write_all(b"\n")?;
        self.sink.flush()?;
        Ok(())
    }

    /// Get the total number of units.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Get the cumulative units reported so far, including any overshoot
    /// beyond the total.
    pub fn current(&self) -> u64 {
        self.current
    }

    /// Get the rounded integer percentage, clamped to `[0, 100]`.
    pub fn percent(&self) -> u8 {
        let displayed = self.current.min(self.total);
        ((displayed as f64 / self.total as f64) * 100.0).round() as u8
    }

    /// Return `true` once the reported count has reached the total.
    pub fn is_complete(&self) -> bool {
        self.current >= self.total
    }

    /// Get the display lifecycle phase.
    ///
    /// The phase only changes when a render observes completion, so it can
    /// lag behind [`is_complete`](Self::is_complete) between an `advance`
    /// and the next `render`.
    pub fn phase(&self) -> Phase {
        self.phase
    }
}

fn repeat_glyph(glyph: char, count: usize) -> String {
    std::iter::repeat(glyph).take(count).collect()
}
