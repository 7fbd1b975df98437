//! Progress module containing the progress display functionality.
//!
//! This module provides the stateful progress display, its builder, and
//! the styling options used to render it.
//!
//! # Overview
//!
//! The progress module is organized into three main components:
//!
//! - `style` - Bar geometry, glyphs, spinner sequences, and color schemes
//! - `display` - The stateful display and its in-place rendering
//! - `builder` - Fluent construction of configured displays
//!
//! # Examples
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
//!     StyleOptions::SPINNER_DOTS,
//!     ColorScheme::vivid(),
//! );
//! ```
//!
//! ## Building a Display
//!
//! ```rust
//! use headway::{ProgressDisplayBuilder, StyleOptions};
//!
//! # fn example() -> Result<(), headway::Error> {
//! let progress = ProgressDisplayBuilder::new()
//!     .style_options(StyleOptions::with_block_style())
//!     .build(100)?;
//! # Ok(())
//! # }
//! ```

pub(crate) mod builder;
pub(crate) mod display;
pub(crate) mod style;

pub use builder::ProgressDisplayBuilder;
pub use display::{Phase, ProgressDisplay};
pub use style::{ColorScheme, StyleOptions};
