//! Options and result types of the median search.

use nalgebra::Vector2;
use std::f64::consts::FRAC_1_SQRT_2 as S2;

use crate::error::{Error, Result};

/// Probe directions on the unit circle, clockwise from west.
///
/// Even indices are the cardinal directions (W, N, E, S); odd indices are
/// the diagonals only probed with `subsearch`.
pub const COMPASS: [[f64; 2]; 8] = [
    [-1.0, 0.0],
    [-S2, S2],
    [0.0, 1.0],
    [S2, S2],
    [1.0, 0.0],
    [S2, -S2],
    [0.0, -1.0],
    [-S2, -S2],
];

/// Configuration of the compass search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeometricCenterOptions {
    /// Convergence tolerance on the step length.
    pub epsilon: f64,
    /// Multiplier of the mean center-to-point distance used as first step.
    pub bounds: f64,
    /// Probe all 8 directions instead of the 4 cardinal ones.
    pub subsearch: bool,
}

impl Default for GeometricCenterOptions {
    fn default() -> Self {
        Self {
            epsilon: 1e-3,
            bounds: 10.0,
            subsearch: false,
        }
    }
}

impl GeometricCenterOptions {
    pub fn validate(&self) -> Result<()> {
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(Error::invalid(format!(
                "epsilon must be finite and > 0, got {}",
                self.epsilon
            )));
        }
        if !(self.bounds.is_finite() && self.bounds > 0.0) {
            return Err(Error::invalid(format!(
                "bounds must be finite and > 0, got {}",
                self.bounds
            )));
        }
        Ok(())
    }

    /// Indices into `COMPASS` probed per scan, in order.
    #[inline]
    pub(crate) fn probe_stride(&self) -> usize {
        if self.subsearch {
            1
        } else {
            2
        }
    }
}

/// A center together with its net Euclidean distance to the point set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Center {
    pub point: Vector2<f64>,
    pub score: f64,
}
