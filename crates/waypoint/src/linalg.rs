//! Dense augmented systems and pairwise cost matrices.
//!
//! Purpose
//! - Solve the small normal-equation systems produced by the polynomial
//!   fitter: in-place elimination to row-echelon form, then back-substitution.
//! - Build the `n × n` distance matrix consumed by the route heuristic.
//!
//! Conventions
//! - An augmented matrix for `n` unknowns is `n × (n + 1)`; the right-hand
//!   side is the last column.
//! - Row swaps compare raw values, not magnitudes. This is a deliberate
//!   simplification of partial pivoting and is kept as is: fits depend on
//!   the exact elimination order.
//! - Singular or inconsistent systems are not detected during elimination;
//!   they surface as a zero or non-finite pivot during back-substitution and
//!   are reported as `Error::SingularSystem`.

use nalgebra::{DMatrix, DVector};

use crate::error::{Error, Result};
use crate::ips::norm_distance;

#[inline]
fn check_augmented(matrix: &DMatrix<f64>) -> Result<usize> {
    let n = matrix.nrows();
    if matrix.ncols() != n + 1 {
        return Err(Error::mismatch(n + 1, matrix.ncols()));
    }
    Ok(n)
}

/// In-place Gaussian elimination of an `n × (n + 1)` augmented matrix.
///
/// For each pivot row `i` and each lower row `j`: if `m[j][i] > m[i][i]` the
/// two rows are swapped, then `m[j] -= (m[j][i] / m[i][i]) · m[i]`. The
/// result is in row-echelon form (not necessarily reduced).
pub fn eliminate_gaussian(matrix: &mut DMatrix<f64>) -> Result<()> {
    let n = check_augmented(matrix)?;
    for i in 0..n {
        for j in (i + 1)..n {
            if matrix[(j, i)] > matrix[(i, i)] {
                matrix.swap_rows(i, j);
            }
            let ratio = matrix[(j, i)] / matrix[(i, i)];
            for k in 0..=n {
                let pivot = matrix[(i, k)];
                matrix[(j, k)] -= ratio * pivot;
            }
        }
    }
    Ok(())
}

/// Back-substitution on an augmented matrix already in row-echelon form.
///
/// Pre: `eliminate_gaussian` has run on `matrix`.
/// Post: the unique solution, or `SingularSystem` when a pivot is zero or
/// any unknown comes out non-finite.
pub fn solve_reduced_augmented(matrix: &DMatrix<f64>) -> Result<DVector<f64>> {
    let n = check_augmented(matrix)?;
    let mut solution = DVector::<f64>::zeros(n);
    for row in (0..n).rev() {
        let mut value = matrix[(row, n)];
        for col in (row + 1)..n {
            value -= matrix[(row, col)] * solution[col];
        }
        let pivot = matrix[(row, row)];
        if pivot == 0.0 || !pivot.is_finite() {
            return Err(Error::SingularSystem);
        }
        value /= pivot;
        if !value.is_finite() {
            return Err(Error::SingularSystem);
        }
        solution[row] = value;
    }
    Ok(solution)
}

/// Pairwise distance matrix: entry `(i, j)` is `norm_distance(degree, p_i, p_j)`.
///
/// Every ordered pair is evaluated, so the diagonal is zero and symmetry
/// follows from the symmetry of the norm.
pub fn cost_matrix<P: AsRef<[f64]>>(points: &[P], norm_degree: u32) -> Result<DMatrix<f64>> {
    let n = points.len();
    let mut cost = DMatrix::<f64>::zeros(n, n);
    for i in 0..n {
        for j in 0..n {
            cost[(i, j)] = norm_distance(norm_degree, points[i].as_ref(), points[j].as_ref())?;
        }
    }
    Ok(cost)
}
