//! Call-level operations on plain numeric arrays.
//!
//! This is the surface a host binding or the CLI talks to: points come in as
//! `[x, y]` pairs, results leave as owned values. Each call is independent.

use nalgebra::Vector2;

use crate::error::Result;

pub use crate::cartesian::{distances, haversine_distance, DistanceUnit};
pub use crate::center::{Center, GeometricCenterOptions};
pub use crate::route::RouteMethod;

#[inline]
fn to_vectors(points: &[[f64; 2]]) -> Vec<Vector2<f64>> {
    points.iter().map(|p| Vector2::new(p[0], p[1])).collect()
}

/// Coordinate-wise average as `[x, y]`.
pub fn mean(points: &[[f64; 2]]) -> Result<[f64; 2]> {
    let m = crate::center::mean(&to_vectors(points))?;
    Ok([m.x, m.y])
}

/// Geometric median with its net distance.
pub fn geometric_median(points: &[[f64; 2]], options: GeometricCenterOptions) -> Result<Center> {
    crate::center::geometric_median(&to_vectors(points), options)
}

/// Best-fit coefficients (ascending powers); `degree = 0` guesses the degree.
pub fn best_fit(points: &[[f64; 2]], degree: usize) -> Result<Vec<f64>> {
    let degree = (degree > 0).then_some(degree);
    let poly = crate::polynomial::fit_points(&to_vectors(points), degree)?;
    Ok(poly.coefficients)
}

/// Greedy visiting order starting at `start_index`.
pub fn tsp(points: &[[f64; 2]], start_index: usize, method: RouteMethod) -> Result<Vec<usize>> {
    crate::route::solve_with_method(points, start_index, method)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn mean_and_median_round_trip_through_arrays() {
        let pts = [[0.0, 0.0], [2.0, 0.0], [1.0, 3.0]];
        assert_eq!(mean(&pts).unwrap(), [1.0, 1.0]);
        let c = geometric_median(&pts, GeometricCenterOptions::default()).unwrap();
        assert!(c.score > 0.0 && c.point.x.is_finite());
    }

    #[test]
    fn best_fit_explicit_and_guessed() {
        let pts = [[0.0, 2.0], [1.0, 5.0], [2.0, 8.0], [3.0, 11.0]];
        let line = best_fit(&pts, 1).unwrap();
        assert!((line[0] - 2.0).abs() < 1e-9 && (line[1] - 3.0).abs() < 1e-9);
        let guessed = best_fit(&pts, 0).unwrap();
        assert_eq!(guessed.len(), 3);
        assert!(guessed[2].abs() < 1e-9);
    }

    #[test]
    fn non_finite_points_are_errors_not_results() {
        let pts = [[f64::NAN, 0.0], [1.0, 1.0]];
        assert!(matches!(mean(&pts), Err(Error::InvalidParameter { .. })));
        assert!(matches!(
            geometric_median(&pts, GeometricCenterOptions::default()),
            Err(Error::InvalidParameter { .. })
        ));
        assert!(matches!(
            tsp(&pts, 0, RouteMethod::Tsp),
            Err(Error::InvalidParameter { .. })
        ));
    }

    #[test]
    fn distances_from_degree_origins() {
        let d = distances(&[[0.0, 1.0], [0.0, -1.0]], [0.0, 0.0], DistanceUnit::Meters).unwrap();
        assert!((d[0] - d[1]).abs() < 1e-6);
        assert!((d[0] - 111_194.9).abs() < 0.1, "{d:?}");
    }

    #[test]
    fn tsp_errors_surface_unchanged() {
        assert_eq!(tsp(&[], 0, RouteMethod::Tsp), Err(Error::EmptyInput));
        assert_eq!(
            tsp(&[[0.0, 0.0]], 3, RouteMethod::NaiveVrp),
            Err(Error::IndexOutOfRange { index: 3, len: 1 })
        );
    }
}
