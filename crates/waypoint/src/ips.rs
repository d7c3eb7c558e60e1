//! Inner-product-space primitives: p-norms and the distances built on them.
//!
//! Vectors are plain `&[f64]` slices so that both planar nalgebra points
//! (`as_slice`) and n-D rows of a point set can be measured with the same
//! functions. Every function is pure.

use nalgebra::Vector2;

use crate::error::{Error, Result};

#[inline]
fn check_degree(degree: u32) -> Result<()> {
    if degree == 0 {
        return Err(Error::invalid("norm degree must be >= 1"));
    }
    Ok(())
}

#[inline]
fn p_root(sum: f64, degree: u32) -> f64 {
    match degree {
        1 => sum,
        2 => sum.sqrt(),
        d => sum.powf(1.0 / f64::from(d)),
    }
}

/// The p-norm `(Σ|v_i|^degree)^(1/degree)`; `degree = 2` is Euclidean.
pub fn norm(degree: u32, v: &[f64]) -> Result<f64> {
    check_degree(degree)?;
    let sum: f64 = v.iter().map(|x| x.abs().powi(degree as i32)).sum();
    Ok(p_root(sum, degree))
}

/// The p-norm of `a - b`.
pub fn norm_distance(degree: u32, a: &[f64], b: &[f64]) -> Result<f64> {
    check_degree(degree)?;
    if a.len() != b.len() {
        return Err(Error::mismatch(a.len(), b.len()));
    }
    let sum: f64 = a
        .iter()
        .zip(b)
        .map(|(x, y)| (x - y).abs().powi(degree as i32))
        .sum();
    Ok(p_root(sum, degree))
}

/// Sum of `norm_distance(degree, center, n)` over all neighbours.
///
/// Used as the objective of the median search and as a fit diagnostic.
pub fn net_distance<P: AsRef<[f64]>>(degree: u32, center: &[f64], neighbors: &[P]) -> Result<f64> {
    check_degree(degree)?;
    neighbors.iter().try_fold(0.0, |acc, n| -> Result<f64> {
        Ok(acc + norm_distance(degree, center, n.as_ref())?)
    })
}

/// Rejects the first row holding a NaN or infinite coordinate.
pub fn check_finite<'a, I>(rows: I) -> Result<()>
where
    I: IntoIterator<Item = &'a [f64]>,
{
    match rows
        .into_iter()
        .position(|row| row.iter().any(|x| !x.is_finite()))
    {
        Some(i) => Err(Error::invalid(format!("point {i} has a non-finite coordinate"))),
        None => Ok(()),
    }
}

/// Euclidean net distance for planar points; the median search hot loop.
#[inline]
pub fn euclidean_net_distance(center: Vector2<f64>, points: &[Vector2<f64>]) -> f64 {
    points.iter().fold(0.0, |acc, p| {
        let dx = p.x - center.x;
        let dy = p.y - center.y;
        acc + (dx * dx + dy * dy).sqrt()
    })
}
