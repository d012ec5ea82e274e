//! Elo System - two-player skill rating updates
//!
//! This crate computes new ratings for two competitors after a match using a
//! logistic win-probability curve, with per-player reliability weighting and
//! K-factor overrides.

pub mod config;
pub mod error;
pub mod rating;
pub mod types;

// Re-export commonly used types
pub use error::{RatingError, Result};
pub use types::*;

// Re-export key components
pub use config::RatingConfig;
pub use rating::{EloRatingUpdater, MatchOptions};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
