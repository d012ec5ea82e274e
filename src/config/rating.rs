//! Rating system configuration

use crate::error::RatingError;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Tunable constants of the Elo curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingConfig {
    /// Base magnitude of rating change per match
    pub k_factor: f64,
    /// Rating spread for one order-of-magnitude shift in win odds
    pub interval: f64,
    /// Logistic base of the win-probability curve
    pub base: f64,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            k_factor: 16.0,
            interval: 400.0,
            base: 10.0,
        }
    }
}

impl RatingConfig {
    pub fn new(k_factor: f64, interval: f64, base: f64) -> Self {
        Self {
            k_factor,
            interval,
            base,
        }
    }

    /// Reject constants that would turn every probability into NaN or infinity.
    ///
    /// The calculator never calls this itself; loaders and the command line do.
    pub fn validate(&self) -> Result<(), RatingError> {
        let message = if !self.k_factor.is_finite() {
            Some(format!("K-factor must be finite, got {}", self.k_factor))
        } else if !self.interval.is_finite() || self.interval == 0.0 {
            Some(format!(
                "Interval must be finite and non-zero, got {}",
                self.interval
            ))
        } else if !self.base.is_finite() || self.base <= 0.0 {
            Some(format!("Base must be finite and positive, got {}", self.base))
        } else {
            None
        };

        match message {
            Some(message) => {
                warn!("Rejected rating configuration: {}", message);
                Err(RatingError::ConfigurationError { message })
            }
            None => Ok(()),
        }
    }
}
