//! Headway is a crate aiming at providing a simple way to display the
//! progress of a task as a pretty, in-place terminal line.
//!
//! # Quick Start
//!
//! ```rust
//! use headway::{Error, ProgressDisplay};
//!
//! # fn main() -> Result<(), Error> {
//! let mut progress = ProgressDisplay::new(100)?;
//! for _ in 0..4 {
//!     progress.advance(25);
//!     progress.render()?;
//! }
//! progress.finish()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! The headway crate is organized into two modules:
//!
//! - [`error`] - Centralized error handling with the `Error` enum
//! - [`progress`] - The progress display, its builder, and styling options

pub mod error;
pub mod progress;

pub use error::{Error, Result};
pub use progress::{ColorScheme, Phase, ProgressDisplay, ProgressDisplayBuilder, StyleOptions};
