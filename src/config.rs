// Copyright 2025 Lars Brubaker
// License: MIT
//
// Numeric configuration passed explicitly into every query.

use crate::geom::{quantum, Point};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Decimal places kept by default.
pub const DEFAULT_DP: u32 = 2;

/// Pivot for the degeneracy-avoiding rotation; far away from any realistic
/// diagram so rotated coordinates keep a consistent sign.
pub const DEFAULT_PIVOT: Point = Point::new(-10_000.0, -10_000.0);

/// Precision settings for the sweeps.
///
/// Two precision tiers are used:
///
/// | tier       | default | used for                                                        |
/// |------------|---------|-----------------------------------------------------------------|
/// | `dp`       | 2       | x quantization after rotation, intersection dedup and vertex    |
/// |            |         | attribution, boundary output, box rounding, equality tie-break, |
/// |            |         | contact snap distance (`10^-dp`)                                |
/// | `sweep_dp` | 1       | sweep y ordering and coincidence, region comparisons,           |
/// |            |         | equal-area test                                                 |
///
/// ```rust
/// use polyrel::Config;
///
/// let config = Config::new().with_precision(3);
/// assert_eq!(config.sweep_dp, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Decimal places for coordinate rounding.
    pub dp: u32,
    /// Reduced decimal places for comparisons along the sweep line.
    pub sweep_dp: u32,
    /// Rotation pivot.
    pub pivot: Point,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `dp` and resets `sweep_dp` to one place fewer.
    pub fn with_precision(mut self, dp: u32) -> Self {
        self.dp = dp;
        self.sweep_dp = dp.saturating_sub(1);
        self
    }

    pub fn with_sweep_precision(mut self, sweep_dp: u32) -> Self {
        self.sweep_dp = sweep_dp;
        self
    }

    pub fn with_pivot(mut self, pivot: Point) -> Self {
        self.pivot = pivot;
        self
    }

    /// Distance under which a point counts as lying on a segment.
    pub fn snap_tolerance(&self) -> f64 {
        quantum(self.dp)
    }

    /// Width of one sweep comparison step, `10^-sweep_dp`.
    pub fn sweep_tolerance(&self) -> f64 {
        quantum(self.sweep_dp)
    }

    /// Equality of two sweep-axis values at the reduced precision.
    pub fn sweep_eq(&self, a: f64, b: f64) -> bool {
        (a - b).abs() < self.sweep_tolerance() / 2.0
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            dp: DEFAULT_DP,
            sweep_dp: DEFAULT_DP - 1,
            pivot: DEFAULT_PIVOT,
        }
    }
}
