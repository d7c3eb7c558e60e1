use super::*;
use crate::error::Error;
use crate::ips::euclidean_net_distance;
use nalgebra::{vector, Vector2};
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn quad() -> Vec<Vector2<f64>> {
    vec![
        vector![1.0, 2.0],
        vector![5.0, 6.6],
        vector![-7.0, 8.1],
        vector![3.1, -1.7],
    ]
}

#[test]
fn mean_of_triangle() {
    let pts = vec![vector![0.0, 0.0], vector![2.0, 0.0], vector![1.0, 3.0]];
    let m = mean(&pts).unwrap();
    assert!((m - vector![1.0, 1.0]).norm() < 1e-12);
    let q = mean(&quad()).unwrap();
    assert!((q - vector![0.525, 3.75]).norm() < 1e-12);
}

#[test]
fn empty_input_is_rejected() {
    assert_eq!(mean(&[]), Err(Error::EmptyInput));
    assert_eq!(
        geometric_median(&[], GeometricCenterOptions::default()),
        Err(Error::EmptyInput)
    );
}

#[test]
fn invalid_options_are_rejected() {
    let pts = quad();
    for opts in [
        GeometricCenterOptions {
            epsilon: 0.0,
            ..Default::default()
        },
        GeometricCenterOptions {
            bounds: -1.0,
            ..Default::default()
        },
        GeometricCenterOptions {
            epsilon: f64::NAN,
            ..Default::default()
        },
    ] {
        assert!(matches!(
            geometric_median(&pts, opts),
            Err(Error::InvalidParameter { .. })
        ));
    }
}

#[test]
fn non_finite_coordinates_are_rejected() {
    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let pts = vec![vector![bad, 0.0], vector![1.0, 1.0]];
        assert!(matches!(mean(&pts), Err(Error::InvalidParameter { .. })));
        assert!(matches!(
            geometric_median(&pts, GeometricCenterOptions::default()),
            Err(Error::InvalidParameter { .. })
        ));
    }
}

#[test]
fn overflowing_sums_fail_instead_of_spinning() {
    // The coordinate sum overflows even though every point is finite.
    let far = vec![vector![1e308, 0.0]; 2];
    assert!(matches!(mean(&far), Err(Error::InvalidParameter { .. })));
    assert!(matches!(
        geometric_median(&far, GeometricCenterOptions::default()),
        Err(Error::InvalidParameter { .. })
    ));

    // The mean is 0, but the net distance overflows.
    let spread = vec![
        vector![1e308, 0.0],
        vector![-1e308, 0.0],
        vector![1e308, 0.0],
        vector![-1e308, 0.0],
    ];
    assert_eq!(mean(&spread).unwrap(), vector![0.0, 0.0]);
    assert!(matches!(
        geometric_median(&spread, GeometricCenterOptions::default()),
        Err(Error::InvalidParameter { .. })
    ));
}

#[test]
fn single_point_is_its_own_median() {
    let p = vector![3.5, -2.0];
    let c = geometric_median(&[p], GeometricCenterOptions::default()).unwrap();
    assert_eq!(c.point, p);
    assert_eq!(c.score, 0.0);
}

#[test]
fn cardinal_search_regression() {
    let c = geometric_median(&quad(), GeometricCenterOptions::default()).unwrap();
    assert!((c.point.x - 0.9998479030807611).abs() < 1e-9, "{:?}", c.point);
    assert!((c.point.y - 2.000560357070879).abs() < 1e-9, "{:?}", c.point);
    assert!((c.score - euclidean_net_distance(c.point, &quad())).abs() < 1e-12);
}

#[test]
fn oblique_search_regression() {
    let opts = GeometricCenterOptions {
        subsearch: true,
        ..Default::default()
    };
    let c = geometric_median(&quad(), opts).unwrap();
    assert!((c.point.x - 0.9999063853985626).abs() < 1e-9, "{:?}", c.point);
    assert!((c.point.y - 2.001119760004479).abs() < 1e-9, "{:?}", c.point);
}

#[test]
fn median_resists_outlier() {
    let pts = vec![
        vector![0.0, 0.0],
        vector![0.0, 0.0],
        vector![0.0, 0.0],
        vector![10.0, 0.0],
    ];
    let m = mean(&pts).unwrap();
    assert!((m - vector![2.5, 0.0]).norm() < 1e-12);
    let c = geometric_median(&pts, GeometricCenterOptions::default()).unwrap();
    assert!(c.point.norm() < 1e-2, "median drifted: {:?}", c.point);
    assert!(c.point.y.abs() < 1e-12, "left the line: {:?}", c.point);
    assert!(c.score <= euclidean_net_distance(m, &pts));
}

#[test]
fn square_median_is_its_center() {
    let pts = vec![
        vector![0.0, 0.0],
        vector![10.0, 0.0],
        vector![0.0, 10.0],
        vector![10.0, 10.0],
    ];
    let c = geometric_median(&pts, GeometricCenterOptions::default()).unwrap();
    assert!((c.point - vector![5.0, 5.0]).norm() < 1e-12);
}

#[test]
fn tighter_epsilon_never_worsens_score() {
    let mut rng = StdRng::seed_from_u64(7);
    let pts: Vec<Vector2<f64>> = (0..40)
        .map(|_| vector![rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0)])
        .collect();
    let mut last = f64::INFINITY;
    for eps in [1e-1, 1e-2, 1e-3, 1e-4, 1e-6] {
        let opts = GeometricCenterOptions {
            epsilon: eps,
            ..Default::default()
        };
        let c = geometric_median(&pts, opts).unwrap();
        assert!(c.score <= last + 1e-12, "eps={eps}: {} > {last}", c.score);
        last = c.score;
    }
}

#[test]
fn compass_is_unit_and_cardinal_on_even_indices() {
    for (i, d) in COMPASS.iter().enumerate() {
        let v = vector![d[0], d[1]];
        assert!((v.norm() - 1.0).abs() < 1e-12);
        if i % 2 == 0 {
            assert!(d[0] == 0.0 || d[1] == 0.0);
        }
    }
}

proptest! {
    #[test]
    fn prop_mean_is_coordinate_average(
        raw in prop::collection::vec((-1e3f64..1e3, -1e3f64..1e3), 1..50)
    ) {
        let pts: Vec<Vector2<f64>> = raw.iter().map(|&(x, y)| vector![x, y]).collect();
        let m = mean(&pts).unwrap();
        let n = raw.len() as f64;
        let ex = raw.iter().map(|p| p.0).sum::<f64>() / n;
        let ey = raw.iter().map(|p| p.1).sum::<f64>() / n;
        prop_assert!((m.x - ex).abs() < 1e-9);
        prop_assert!((m.y - ey).abs() < 1e-9);
    }

    #[test]
    fn prop_median_never_worse_than_mean(
        raw in prop::collection::vec((-100f64..100.0, -100f64..100.0), 1..30),
        subsearch in any::<bool>()
    ) {
        let pts: Vec<Vector2<f64>> = raw.iter().map(|&(x, y)| vector![x, y]).collect();
        let opts = GeometricCenterOptions { subsearch, ..Default::default() };
        let c = geometric_median(&pts, opts).unwrap();
        let m = mean(&pts).unwrap();
        prop_assert!(c.score <= euclidean_net_distance(m, &pts));
        prop_assert!(c.point.x.is_finite() && c.point.y.is_finite());
    }
}
