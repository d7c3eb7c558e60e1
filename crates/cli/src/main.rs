use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;
use waypoint::api::{self, DistanceUnit, GeometricCenterOptions, RouteMethod};
use waypoint::linalg::cost_matrix;
use waypoint::route::tour_cost;

mod input;
mod provenance;

use provenance::Payload;

#[derive(Parser)]
#[command(name = "waypoint")]
#[command(about = "Centers, polynomial fits, and greedy routes for planar point sets")]
struct Cmd {
    /// Optional run tag; propagated to outputs and logs
    #[arg(long)]
    tag: Option<String>,

    /// Write the JSON result here (plus a provenance sidecar) instead of stdout
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Arithmetic mean of the points
    Mean {
        #[arg(long)]
        input: String,
    },
    /// Geometric median by compass search
    Median {
        #[arg(long)]
        input: String,
        #[arg(long, default_value_t = 1e-3)]
        epsilon: f64,
        #[arg(long, default_value_t = 10.0)]
        bounds: f64,
        /// Probe the diagonals as well as the cardinal directions
        #[arg(long)]
        subsearch: bool,
    },
    /// Least-squares polynomial through the points (degree 0 = guess)
    Fit {
        #[arg(long)]
        input: String,
        #[arg(long, default_value_t = 0)]
        degree: usize,
    },
    /// Nearest-neighbour visiting order
    Route {
        #[arg(long)]
        input: String,
        #[arg(long, default_value_t = 0)]
        start: usize,
        /// `tsp` (Euclidean) or `naive-vrp` (Manhattan)
        #[arg(long, default_value = "tsp")]
        method: String,
    },
    /// Great-circle distance between two lat/lon pairs in radians
    Haversine {
        #[arg(long, allow_hyphen_values = true)]
        lat1: f64,
        #[arg(long, allow_hyphen_values = true)]
        lon1: f64,
        #[arg(long, allow_hyphen_values = true)]
        lat2: f64,
        #[arg(long, allow_hyphen_values = true)]
        lon2: f64,
        /// `m`, `km`, or `mi`
        #[arg(long, default_value = "m")]
        unit: String,
    },
    /// Great-circle distance from every `[lat, lon]` point (degrees) to one destination
    Distances {
        #[arg(long)]
        input: String,
        /// Destination as `lat,lon` in degrees
        #[arg(long, allow_hyphen_values = true)]
        to: String,
        /// `m`, `km`, or `mi`
        #[arg(long, default_value = "m")]
        unit: String,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Serialize)]
struct MeanOut {
    mean: [f64; 2],
}

#[derive(Serialize)]
struct MedianOut {
    center: [f64; 2],
    score: f64,
    mean: [f64; 2],
}

#[derive(Serialize)]
struct FitOut {
    degree: usize,
    coefficients: Vec<f64>,
}

#[derive(Serialize)]
struct RouteOut {
    method: String,
    order: Vec<usize>,
    open_cost: f64,
    closed_cost: f64,
}

#[derive(Serialize)]
struct DistanceOut {
    distance: f64,
    unit: String,
}

#[derive(Serialize)]
struct DistancesOut {
    destination: [f64; 2],
    distances: Vec<f64>,
    unit: String,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let tag = cmd.tag;
    let out = cmd.out;
    match cmd.action {
        Action::Mean { input } => mean(input, out, tag),
        Action::Median {
            input,
            epsilon,
            bounds,
            subsearch,
        } => median(
            input,
            GeometricCenterOptions {
                epsilon,
                bounds,
                subsearch,
            },
            out,
            tag,
        ),
        Action::Fit { input, degree } => fit(input, degree, out, tag),
        Action::Route {
            input,
            start,
            method,
        } => route(input, start, method, out, tag),
        Action::Haversine {
            lat1,
            lon1,
            lat2,
            lon2,
            unit,
        } => haversine([lat1, lon1, lat2, lon2], unit, out, tag),
        Action::Distances { input, to, unit } => distances(input, to, unit, out, tag),
        Action::Report => report(tag),
    }
}

/// Print `result` or write it with a sidecar, depending on `--out`.
fn emit<T: Serialize>(result: &T, out: Option<PathBuf>, payload: Payload) -> Result<()> {
    match out {
        Some(path) => {
            let prov = provenance::write_result(&path, result, payload)?;
            tracing::info!(out = %path.display(), provenance = %prov.display(), "written");
        }
        None => println!("{}", serde_json::to_string_pretty(result)?),
    }
    Ok(())
}

fn mean(input: String, out: Option<PathBuf>, tag: Option<String>) -> Result<()> {
    tracing::info!(input, tag = ?tag, "mean");
    let points = input::load_points(&input)?;
    let m = api::mean(&points).context("mean")?;
    let params = json!({ "input": input });
    emit(&MeanOut { mean: m }, out, Payload::new("mean", params, tag))
}

fn median(
    input: String,
    options: GeometricCenterOptions,
    out: Option<PathBuf>,
    tag: Option<String>,
) -> Result<()> {
    tracing::info!(
        input,
        epsilon = options.epsilon,
        bounds = options.bounds,
        subsearch = options.subsearch,
        tag = ?tag,
        "median"
    );
    let points = input::load_points(&input)?;
    let center = api::geometric_median(&points, options).context("geometric median")?;
    let m = api::mean(&points)?;
    let result = MedianOut {
        center: [center.point.x, center.point.y],
        score: center.score,
        mean: m,
    };
    let params = json!({
        "input": input,
        "epsilon": options.epsilon,
        "bounds": options.bounds,
        "subsearch": options.subsearch
    });
    emit(&result, out, Payload::new("median", params, tag))
}

fn fit(input: String, degree: usize, out: Option<PathBuf>, tag: Option<String>) -> Result<()> {
    tracing::info!(input, degree, tag = ?tag, "fit");
    let points = input::load_points(&input)?;
    let coefficients = api::best_fit(&points, degree)
        .with_context(|| format!("fitting degree {degree} (0 = guess)"))?;
    let result = FitOut {
        degree: coefficients.len().saturating_sub(1),
        coefficients,
    };
    tracing::info!(degree = result.degree, "fit_done");
    let params = json!({ "input": input, "degree": degree });
    emit(&result, out, Payload::new("fit", params, tag))
}

fn route(
    input: String,
    start: usize,
    method: String,
    out: Option<PathBuf>,
    tag: Option<String>,
) -> Result<()> {
    let method: RouteMethod = method.parse()?;
    tracing::info!(input, start, %method, tag = ?tag, "route");
    let points = input::load_points(&input)?;
    let order = api::tsp(&points, start, method).context("route")?;
    let cost = cost_matrix(&points, method.norm_degree())?;
    let result = RouteOut {
        method: method.to_string(),
        open_cost: tour_cost(&cost, &order, false),
        closed_cost: tour_cost(&cost, &order, true),
        order,
    };
    tracing::info!(open_cost = result.open_cost, "route_done");
    let params = json!({ "input": input, "start": start, "method": result.method });
    emit(&result, out, Payload::new("route", params, tag))
}

fn haversine(
    coords: [f64; 4],
    unit: String,
    out: Option<PathBuf>,
    tag: Option<String>,
) -> Result<()> {
    let unit: DistanceUnit = unit.parse()?;
    let [lat1, lon1, lat2, lon2] = coords;
    let distance = api::haversine_distance(lat1, lon1, lat2, lon2, unit);
    tracing::info!(distance, %unit, "haversine");
    let result = DistanceOut {
        distance,
        unit: unit.to_string(),
    };
    let params = json!({ "from": [lat1, lon1], "to": [lat2, lon2], "unit": result.unit });
    emit(&result, out, Payload::new("haversine", params, tag))
}

/// Parse a `lat,lon` pair.
fn parse_lat_lon(s: &str) -> Result<[f64; 2]> {
    let (lat, lon) = s
        .split_once(',')
        .ok_or_else(|| anyhow!("expected `lat,lon`, got `{s}`"))?;
    Ok([
        lat.trim().parse().with_context(|| format!("latitude in `{s}`"))?,
        lon.trim().parse().with_context(|| format!("longitude in `{s}`"))?,
    ])
}

fn distances(
    input: String,
    to: String,
    unit: String,
    out: Option<PathBuf>,
    tag: Option<String>,
) -> Result<()> {
    let unit: DistanceUnit = unit.parse()?;
    let destination = parse_lat_lon(&to)?;
    tracing::info!(input, to, %unit, tag = ?tag, "distances");
    let origins = input::load_points(&input)?;
    let distances = api::distances(&origins, destination, unit).context("distances")?;
    let result = DistancesOut {
        destination,
        distances,
        unit: unit.to_string(),
    };
    let params = json!({ "input": input, "to": destination, "unit": result.unit });
    emit(&result, out, Payload::new("distances", params, tag))
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "waypoint_version": waypoint::VERSION,
        "tag": tag,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lat_lon_pairs_parse() {
        assert_eq!(parse_lat_lon("51.5,-0.12").unwrap(), [51.5, -0.12]);
        assert_eq!(parse_lat_lon(" -33.9 , 151.2 ").unwrap(), [-33.9, 151.2]);
        assert!(parse_lat_lon("51.5").is_err());
        assert!(parse_lat_lon("north,0").is_err());
    }
}
