//! Common types used by the rating calculator

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A competitor's skill score. Unconstrained real number.
pub type Rating = f64;

/// Result of a match from player 0's perspective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchOutcome {
    Win,
    Loss,
    Draw,
}

impl MatchOutcome {
    /// Outcome coefficient fed into the update formula
    pub fn coefficient(self) -> f64 {
        match self {
            MatchOutcome::Win => 1.0,
            MatchOutcome::Loss => 0.0,
            MatchOutcome::Draw => 0.5,
        }
    }
}

impl std::fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchOutcome::Win => write!(f, "win"),
            MatchOutcome::Loss => write!(f, "lose"),
            MatchOutcome::Draw => write!(f, "draw"),
        }
    }
}

impl FromStr for MatchOutcome {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "win" | "won" => Ok(MatchOutcome::Win),
            "lose" | "loss" | "lost" => Ok(MatchOutcome::Loss),
            "draw" | "tie" => Ok(MatchOutcome::Draw),
            other => Err(format!("Unknown match outcome: {}", other)),
        }
    }
}

/// Full record of one rating update, suitable for logging or JSON output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    pub rating0: Rating,
    pub rating1: Rating,
    /// Outcome coefficient from player 0's perspective
    pub outcome: f64,
    /// Probability that player 0 beats player 1 before the match
    pub expected0: f64,
    pub new_rating0: Rating,
    pub new_rating1: Rating,
    pub delta0: f64,
    pub delta1: f64,
}
