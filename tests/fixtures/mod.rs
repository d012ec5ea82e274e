//! Shared match scenarios for integration testing

#![allow(dead_code)]

use elo_system::{EloRatingUpdater, MatchOptions};

/// One recorded match with the expected, rounded post-match ratings
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    pub k_factor: f64,
    pub interval: f64,
    pub base: f64,
    pub rating0: f64,
    pub rating1: f64,
    pub outcome: f64,
    pub reliability0: f64,
    pub reliability1: f64,
    pub k_factor0: Option<f64>,
    pub k_factor1: Option<f64>,
    pub expected: (f64, f64),
}

impl Scenario {
    pub fn updater(&self) -> EloRatingUpdater {
        EloRatingUpdater::new(self.k_factor, self.interval, self.base)
    }

    pub fn options(&self) -> MatchOptions {
        MatchOptions::default()
            .with_reliability(self.reliability0, self.reliability1)
            .with_k_factors(self.k_factor0, self.k_factor1)
    }
}

#[allow(clippy::too_many_arguments)]
const fn scenario(
    k_factor: f64,
    interval: f64,
    base: f64,
    rating0: f64,
    rating1: f64,
    outcome: f64,
    reliability0: f64,
    reliability1: f64,
    k_factor0: Option<f64>,
    k_factor1: Option<f64>,
    expected0: f64,
    expected1: f64,
) -> Scenario {
    Scenario {
        k_factor,
        interval,
        base,
        rating0,
        rating1,
        outcome,
        reliability0,
        reliability1,
        k_factor0,
        k_factor1,
        expected: (expected0, expected1),
    }
}

/// Mixed configurations, reliabilities and K-factor overrides
pub const SCENARIOS: &[Scenario] = &[
    scenario(16.0, 400.0, 10.0, 2100.0, 1600.0, 1.0, 1.0, 1.0, None, None, 2101.0, 1599.0),
    scenario(16.0, 10.0, 2.0, 1800.0, 1600.0, 0.0, 1.0, 1.0, None, None, 1784.0, 1616.0),
    scenario(32.0, 100.0, 10.0, 1800.0, 1600.0, 0.5, 1.0, 1.0, None, None, 1784.0, 1616.0),
    scenario(32.0, 100.0, 10.0, 1800.0, 1600.0, 0.0, 0.0, 1.0, None, None, 1768.0, 1600.0),
    scenario(24.0, 400.0, 10.0, 1800.0, 1600.0, 1.0, 0.2, 1.0, None, None, 1806.0, 1599.0),
    scenario(24.0, 400.0, 10.0, 1800.0, 1200.0, 0.5, 0.2, 0.8, None, None, 1789.0, 1205.0),
    scenario(24.0, 400.0, 10.0, 1200.0, 1600.0, 1.0, 0.6, 0.8, None, None, 1222.0, 1583.0),
    scenario(24.0, 400.0, 10.0, 1200.0, 1600.0, 0.2, 0.6, 0.8, None, None, 1203.0, 1598.0),
    scenario(24.0, 400.0, 10.0, 1200.0, 1600.0, 0.75, 0.6, 0.8, None, None, 1216.0, 1587.0),
    scenario(12.0, 400.0, 10.0, 1800.0, 1500.0, 0.4, 0.6, 0.0, None, None, 1798.0, 1505.0),
    scenario(24.0, 400.0, 10.0, 1800.0, 1500.0, 0.5, 1.0, 1.0, Some(30.0), Some(10.0), 1790.0, 1503.0),
    scenario(24.0, 400.0, 10.0, 1800.0, 1500.0, 0.5, 1.0, 1.0, Some(10.0), Some(20.0), 1797.0, 1507.0),
    scenario(24.0, 400.0, 10.0, 1800.0, 1500.0, 0.0, 1.0, 1.0, Some(10.0), None, 1792.0, 1520.0),
    scenario(24.0, 400.0, 10.0, 1800.0, 1500.0, 1.0, 1.0, 1.0, None, Some(20.0), 1804.0, 1497.0),
];

/// Round both ratings to the nearest integer
pub fn rounded(pair: (f64, f64)) -> (f64, f64) {
    (pair.0.round(), pair.1.round())
}
