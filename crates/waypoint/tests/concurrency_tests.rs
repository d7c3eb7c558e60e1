//! Independent calls share nothing and can run on separate threads.

use std::thread;

use rand::{rngs::StdRng, Rng, SeedableRng};
use waypoint::api::{self, GeometricCenterOptions, RouteMethod};

fn cloud(seed: u64, n: usize) -> Vec<[f64; 2]> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| [rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0)])
        .collect()
}

#[test]
fn parallel_calls_match_sequential_results() {
    let inputs: Vec<Vec<[f64; 2]>> = (0..4).map(|s| cloud(s, 60)).collect();
    let sequential: Vec<_> = inputs
        .iter()
        .map(|pts| {
            let c = api::geometric_median(pts, GeometricCenterOptions::default()).unwrap();
            let r = api::tsp(pts, 0, RouteMethod::Tsp).unwrap();
            (c, r)
        })
        .collect();

    let handles: Vec<_> = inputs
        .into_iter()
        .map(|pts| {
            thread::spawn(move || {
                let c = api::geometric_median(&pts, GeometricCenterOptions::default()).unwrap();
                let r = api::tsp(&pts, 0, RouteMethod::Tsp).unwrap();
                (c, r)
            })
        })
        .collect();
    for (h, expected) in handles.into_iter().zip(sequential) {
        assert_eq!(h.join().unwrap(), expected);
    }
}

#[test]
fn failing_call_does_not_disturb_earlier_results() {
    let pts = cloud(11, 10);
    let before = api::tsp(&pts, 2, RouteMethod::NaiveVrp).unwrap();
    assert!(api::tsp(&pts, 99, RouteMethod::NaiveVrp).is_err());
    assert_eq!(api::tsp(&pts, 2, RouteMethod::NaiveVrp).unwrap(), before);
}
