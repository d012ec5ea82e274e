//! Elo rating updates for two competitors
//!
//! Ratings move by `k * (outcome - expected)`, where the expected score
//! comes from a logistic curve over the rating gap. Each side's movement is
//! further damped by the opponent's reliability, after a rectification step
//! that lets two unrated competitors exchange full movement.

use crate::config::RatingConfig;
use crate::error::RatingError;
use crate::rating::coefficient::check_coefficient;
use crate::types::{MatchOutcome, MatchReport, Rating};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Probability that a player rated `rating_a` beats one rated `rating_b`.
///
/// Degenerate `interval`/`base` values produce NaN or infinities rather than
/// an error.
pub fn win_probability(rating_a: Rating, rating_b: Rating, interval: f64, base: f64) -> f64 {
    1.0 / (1.0 + base.powf((rating_b - rating_a) / interval))
}

/// Per-call weights for both competitors
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchOptions {
    /// Confidence in player 0's rating, 1.0 = established, 0.0 = unrated
    pub reliability0: f64,
    /// Confidence in player 1's rating
    pub reliability1: f64,
    /// Replaces the configured K-factor for player 0
    pub k_factor0: Option<f64>,
    /// Replaces the configured K-factor for player 1
    pub k_factor1: Option<f64>,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            reliability0: 1.0,
            reliability1: 1.0,
            k_factor0: None,
            k_factor1: None,
        }
    }
}

impl MatchOptions {
    pub fn with_reliability(mut self, reliability0: f64, reliability1: f64) -> Self {
        self.reliability0 = reliability0;
        self.reliability1 = reliability1;
        self
    }

    pub fn with_k_factors(mut self, k_factor0: Option<f64>, k_factor1: Option<f64>) -> Self {
        self.k_factor0 = k_factor0;
        self.k_factor1 = k_factor1;
        self
    }
}

/// Elo rating calculator
///
/// Immutable once built; every method is a pure function of its arguments
/// and the three configured constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EloRatingUpdater {
    k_factor: f64,
    interval: f64,
    base: f64,
}

impl Default for EloRatingUpdater {
    fn default() -> Self {
        Self::from_config(&RatingConfig::default())
    }
}

impl EloRatingUpdater {
    /// Create a calculator. The constants are trusted and not validated.
    pub fn new(k_factor: f64, interval: f64, base: f64) -> Self {
        Self {
            k_factor,
            interval,
            base,
        }
    }

    pub fn from_config(config: &RatingConfig) -> Self {
        Self::new(config.k_factor, config.interval, config.base)
    }

    pub fn config(&self) -> RatingConfig {
        RatingConfig::new(self.k_factor, self.interval, self.base)
    }

    pub fn k_factor(&self) -> f64 {
        self.k_factor
    }

    pub fn interval(&self) -> f64 {
        self.interval
    }

    pub fn base(&self) -> f64 {
        self.base
    }

    /// Probability that `rating_a` beats `rating_b` under this curve
    pub fn win_probability(&self, rating_a: Rating, rating_b: Rating) -> f64 {
        win_probability(rating_a, rating_b, self.interval, self.base)
    }

    /// Compute new ratings after a match.
    ///
    /// # Arguments
    /// * `outcome` - result for player 0 in [0;1]: 1 won, 0 lost, 0.5 draw
    /// * `options` - reliabilities and K-factor overrides of both players
    ///
    /// # Returns
    /// `(new_rating0, new_rating1)`, or `InvalidCoefficient` naming the
    /// first of `reliability0`, `reliability1`, `outcome` out of range.
    pub fn calculate(
        &self,
        rating0: Rating,
        rating1: Rating,
        outcome: f64,
        options: MatchOptions,
    ) -> Result<(Rating, Rating), RatingError> {
        check_coefficient(options.reliability0, "reliability0")?;
        check_coefficient(options.reliability1, "reliability1")?;
        check_coefficient(outcome, "outcome")?;

        let k0 = options.k_factor0.unwrap_or(self.k_factor);
        let k1 = options.k_factor1.unwrap_or(self.k_factor);

        let expected0 = self.win_probability(rating0, rating1);

        let mut delta0 = outcome - expected0;
        let mut delta1 = -delta0;

        // Two newcomers (0 and 0.1) become 0.9 and 1.0
        let rectification = 1.0 - options.reliability0.max(options.reliability1);
        let reliability0 = options.reliability0 + rectification;
        let reliability1 = options.reliability1 + rectification;

        trace!(
            expected0,
            rectification,
            reliability0,
            reliability1,
            "Computed Elo update weights"
        );

        // Each side learns from the other side's reliability
        delta0 *= k0 * reliability1;
        delta1 *= k1 * reliability0;

        debug!(
            rating0,
            rating1,
            outcome,
            delta0,
            delta1,
            "Calculated Elo rating update"
        );

        Ok((rating0 + delta0, rating1 + delta1))
    }

    /// Player 0 beat player 1
    pub fn win(
        &self,
        rating0: Rating,
        rating1: Rating,
        options: MatchOptions,
    ) -> Result<(Rating, Rating), RatingError> {
        self.calculate(rating0, rating1, 1.0, options)
    }

    /// Player 0 lost against player 1
    pub fn lose(
        &self,
        rating0: Rating,
        rating1: Rating,
        options: MatchOptions,
    ) -> Result<(Rating, Rating), RatingError> {
        self.calculate(rating0, rating1, 0.0, options)
    }

    /// Players drew
    pub fn draw(
        &self,
        rating0: Rating,
        rating1: Rating,
        options: MatchOptions,
    ) -> Result<(Rating, Rating), RatingError> {
        self.calculate(rating0, rating1, 0.5, options)
    }

    /// Apply a discrete match outcome through the matching alias
    pub fn settle(
        &self,
        rating0: Rating,
        rating1: Rating,
        outcome: MatchOutcome,
        options: MatchOptions,
    ) -> Result<(Rating, Rating), RatingError> {
        match outcome {
            MatchOutcome::Win => self.win(rating0, rating1, options),
            MatchOutcome::Loss => self.lose(rating0, rating1, options),
            MatchOutcome::Draw => self.draw(rating0, rating1, options),
        }
    }

    /// Like [`calculate`](Self::calculate) but returns the full record
    pub fn report(
        &self,
        rating0: Rating,
        rating1: Rating,
        outcome: f64,
        options: MatchOptions,
    ) -> Result<MatchReport, RatingError> {
        let (new_rating0, new_rating1) = self.calculate(rating0, rating1, outcome, options)?;

        Ok(MatchReport {
            rating0,
            rating1,
            outcome,
            expected0: self.win_probability(rating0, rating1),
            new_rating0,
            new_rating1,
            delta0: new_rating0 - rating0,
            delta1: new_rating1 - rating1,
        })
    }
}
