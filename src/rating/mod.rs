//! Elo rating calculations
//!
//! This module provides the two-player rating updater, its per-call
//! options and the coefficient checks shared by every update.

pub mod coefficient;
pub mod elo;

// Re-export commonly used types
pub use coefficient::check_coefficient;
pub use elo::{win_probability, EloRatingUpdater, MatchOptions};
