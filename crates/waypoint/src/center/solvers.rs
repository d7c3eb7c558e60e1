use nalgebra::Vector2;

use super::types::{Center, GeometricCenterOptions, COMPASS};
use crate::error::{Error, Result};
use crate::ips::{check_finite, euclidean_net_distance};

/// Coordinate-wise average of a planar point set.
///
/// Non-finite coordinates, or a coordinate sum that overflows, give
/// `InvalidParameter`.
pub fn mean(points: &[Vector2<f64>]) -> Result<Vector2<f64>> {
    if points.is_empty() {
        return Err(Error::EmptyInput);
    }
    check_finite(points.iter().map(|p| p.as_slice()))?;
    let sum = points.iter().fold(Vector2::zeros(), |acc, p| acc + p);
    let m = sum / points.len() as f64;
    if !(m.x.is_finite() && m.y.is_finite()) {
        return Err(Error::invalid("coordinate sum overflows f64"));
    }
    Ok(m)
}

/// Geometric median by first-improvement compass search.
///
/// Pre: `points` is non-empty and `options` validates.
/// Post: `score` is the Euclidean net distance of the returned point, never
/// larger than that of the mean.
pub fn geometric_median(points: &[Vector2<f64>], options: GeometricCenterOptions) -> Result<Center> {
    options.validate()?;
    let mut center = mean(points)?;
    let mut score = euclidean_net_distance(center, points);
    let mut step = score / points.len() as f64 * options.bounds;
    if !(score.is_finite() && step.is_finite()) {
        return Err(Error::invalid("net distance overflows f64"));
    }

    let stride = options.probe_stride();
    let mut moves = 0usize;
    let mut halvings = 0usize;
    while step > options.epsilon {
        let mut improved = false;
        for dir in COMPASS.iter().step_by(stride) {
            let probe = center + Vector2::new(dir[0], dir[1]) * step;
            let probe_score = euclidean_net_distance(probe, points);
            if probe_score < score {
                center = probe;
                score = probe_score;
                improved = true;
                moves += 1;
                break;
            }
        }
        if !improved {
            step /= 2.0;
            halvings += 1;
        }
    }
    tracing::debug!(
        n = points.len(),
        moves,
        halvings,
        score,
        subsearch = options.subsearch,
        "geometric_median converged"
    );
    Ok(Center {
        point: center,
        score,
    })
}
