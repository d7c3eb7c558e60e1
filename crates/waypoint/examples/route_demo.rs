//! Timing probe: median, fit, and route on one seeded point cloud.
//!
//! Run with `cargo run --release -p waypoint --example route_demo [n]`.

use std::time::Instant;

use nalgebra::Vector2;
use rand::{rngs::StdRng, Rng, SeedableRng};
use waypoint::prelude::*;

fn seeded_cloud(n: usize, seed: u64) -> Vec<Vector2<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| Vector2::new(rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0)))
        .collect()
}

fn main() -> Result<()> {
    let n: usize = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(200);
    let mut pos = Position::new(seeded_cloud(n, 42), PositionOptions::default());
    pos.options.center.subsearch = true;
    pos.options.degree = 3;

    let t = Instant::now();
    let center = pos.center()?;
    let t_center = t.elapsed().as_secs_f64() * 1e3;

    let t = Instant::now();
    let path = pos.path()?;
    let t_path = t.elapsed().as_secs_f64() * 1e3;

    let t = Instant::now();
    let fit = pos.fit()?;
    let t_fit = t.elapsed().as_secs_f64() * 1e3;

    println!("n = {n}");
    println!(
        "center = ({:.4}, {:.4}), score = {:.4}  [{t_center:.2} ms]",
        center.point.x, center.point.y, center.score
    );
    println!("route starts {:?}...  [{t_path:.2} ms]", &path[..path.len().min(8)]);
    println!("fit degree {} residual {:.3}  [{t_fit:.2} ms]", fit.degree(), fit.residual(&pos.locations));
    Ok(())
}
