//! Least-squares polynomial fits through planar samples.
//!
//! Purpose
//! - `best_fit`: coefficients of `y = a_0 + a_1 x + … + a_k x^k` minimizing
//!   the squared vertical error, via the normal equations `(XᵀX) a = Xᵀy`.
//! - `guess_degree`: a cheap complexity estimate from the number of slope
//!   sign changes in the samples.
//!
//! Normal equations
//! - `XᵀX` only has `2k + 1` distinct entries, the power sums
//!   `V[j] = Σ x_i^j` for `j = 0..=2k`; row `r` of the system is the window
//!   `V[r..=r+k]`. The right-hand side is `b[j] = Σ x_i^j · y_i`.
//!
//! Limitation
//! - Power sums reach `x^(2k)`. For large `k` or widely scaled `x` they
//!   overflow or lose precision; the system then turns singular or yields
//!   non-finite coefficients, which is reported as `Error::SingularSystem`.
//!   Callers with large abscissae should recenter/rescale `x` first.

use nalgebra::{DMatrix, Vector2};

use crate::error::{Error, Result};
use crate::linalg::{eliminate_gaussian, solve_reduced_augmented};

/// Degree reported for a sample sequence without any extremum.
pub const DEFAULT_DEGREE: usize = 2;

/// Polynomial with coefficients in ascending powers of `x`.
#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial {
    pub coefficients: Vec<f64>,
}

impl Polynomial {
    #[inline]
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// Horner evaluation.
    pub fn eval(&self, x: f64) -> f64 {
        self.coefficients.iter().rev().fold(0.0, |acc, a| acc * x + a)
    }

    /// Sum of absolute vertical deviations `Σ |y_i − p(x_i)|`.
    pub fn residual(&self, points: &[Vector2<f64>]) -> f64 {
        points.iter().map(|p| (p.y - self.eval(p.x)).abs()).sum()
    }
}

#[inline]
fn check_samples(x: &[f64], y: &[f64]) -> Result<()> {
    if x.len() != y.len() {
        return Err(Error::mismatch(x.len(), y.len()));
    }
    Ok(())
}

/// Estimates a fitting degree as `2 + number of extrema`.
///
/// `y` is reordered by adjacent swaps whenever `x[i] > x[i + 1]`, with `x`
/// itself left untouched. This only amounts to a sort by `x` when the input
/// is already ascending in `x` (or nearly so).
/// Fewer than two samples give degree 0.
pub fn guess_degree(x: &[f64], y: &[f64]) -> Result<usize> {
    check_samples(x, y)?;
    let n = y.len();
    if n <= 1 {
        return Ok(0);
    }

    let mut ys = y.to_vec();
    for pass in 1..n {
        let mut swapped = false;
        for i in 0..(n - pass) {
            if x[i] > x[i + 1] {
                ys.swap(i, i + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }

    let slope = |i: usize| if ys[i] < ys[i + 1] { 1i8 } else { -1i8 };
    let mut dir = slope(0);
    let mut extrema = 0usize;
    for i in 1..(n - 1) {
        let d = slope(i);
        if d != dir {
            extrema += 1;
            dir = d;
        }
    }
    tracing::trace!(n, extrema, "guess_degree");
    Ok(DEFAULT_DEGREE + extrema)
}

/// Power sums `Σ x_i^j` for `j = 0..=2k`.
fn power_sums(x: &[f64], k: usize) -> Vec<f64> {
    (0..=2 * k)
        .map(|j| x.iter().map(|xi| xi.powi(j as i32)).sum())
        .collect()
}

/// Projections `Σ x_i^j y_i` for `j = 0..=k`.
fn projections(x: &[f64], y: &[f64], k: usize) -> Vec<f64> {
    (0..=k)
        .map(|j| x.iter().zip(y).map(|(xi, yi)| xi.powi(j as i32) * yi).sum())
        .collect()
}

/// The `(k + 1) × (k + 2)` augmented normal-equation matrix.
fn augmented_vandermonde(v: &[f64], b: &[f64], k: usize) -> DMatrix<f64> {
    DMatrix::from_fn(k + 1, k + 2, |r, c| if c <= k { v[r + c] } else { b[r] })
}

/// Least-squares polynomial of the given degree through `(x_i, y_i)`.
///
/// Pre: enough distinct abscissae for the degree (`> degree`); otherwise
/// the system is singular.
/// Post: `degree + 1` finite coefficients, ascending powers.
pub fn best_fit(x: &[f64], y: &[f64], degree: usize) -> Result<Polynomial> {
    check_samples(x, y)?;
    if x.is_empty() {
        return Err(Error::EmptyInput);
    }
    let v = power_sums(x, degree);
    let b = projections(x, y, degree);
    let mut system = augmented_vandermonde(&v, &b, degree);
    eliminate_gaussian(&mut system)?;
    let solution = solve_reduced_augmented(&system)?;
    tracing::debug!(n = x.len(), degree, "best_fit solved");
    Ok(Polynomial {
        coefficients: solution.iter().copied().collect(),
    })
}

/// `best_fit` over planar points; `degree = None` asks `guess_degree`.
pub fn fit_points(points: &[Vector2<f64>], degree: Option<usize>) -> Result<Polynomial> {
    let x: Vec<f64> = points.iter().map(|p| p.x).collect();
    let y: Vec<f64> = points.iter().map(|p| p.y).collect();
    let degree = match degree {
        Some(d) => d,
        None => guess_degree(&x, &y)?,
    };
    best_fit(&x, &y, degree)
}
