//! Planar centers of point sets: arithmetic mean and geometric median.
//!
//! Purpose
//! - `mean`: coordinate-wise average, O(n).
//! - `geometric_median`: the point minimizing the summed Euclidean distance
//!   to the set, found by a derivative-free compass search. Robust to
//!   outliers where the mean is not.
//!
//! Search outline
//! - Start at the mean with step `score / n × bounds`.
//! - Probe a fixed ring of directions; accept the first strictly improving
//!   probe (first-improvement, not best-improvement) and rescan at the same
//!   step. When a full scan fails, halve the step. Stop once `step <= epsilon`.
//! - The probe order is part of the contract: on tied inputs it decides
//!   which of several minimizers is returned.
//!
//! The objective is strictly convex for non-collinear sets, so the descent
//! cannot stall in a spurious local minimum. Collinear or repeated points
//! still converge, to one of possibly many minimizers.

mod solvers;
mod types;

pub use solvers::{geometric_median, mean};
pub use types::{Center, GeometricCenterOptions, COMPASS};

#[cfg(test)]
mod tests;
