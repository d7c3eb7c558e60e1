//! Greedy nearest-neighbour tours over a pairwise cost matrix.
//!
//! The tour starts at a caller-chosen index and repeatedly moves to the
//! closest unvisited point. Ties go to the lowest index. The result is a
//! permutation of all indices, not an optimal tour.

use std::fmt;
use std::str::FromStr;

use nalgebra::DMatrix;

use crate::error::{Error, Result};
use crate::ips::check_finite;
use crate::linalg::cost_matrix;

/// Routing flavour; only the distance metric differs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RouteMethod {
    /// Euclidean travelling salesman (norm degree 2).
    #[default]
    Tsp,
    /// Manhattan-like "naive VRP" (norm degree 1).
    NaiveVrp,
}

impl RouteMethod {
    #[inline]
    pub fn norm_degree(self) -> u32 {
        match self {
            RouteMethod::Tsp => 2,
            RouteMethod::NaiveVrp => 1,
        }
    }
}

impl FromStr for RouteMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "t" | "tsp" => Ok(RouteMethod::Tsp),
            "n" | "vrp" | "naive-vrp" | "naive_vrp" => Ok(RouteMethod::NaiveVrp),
            other => Err(Error::invalid(format!("unknown route method `{other}`"))),
        }
    }
}

impl fmt::Display for RouteMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteMethod::Tsp => write!(f, "tsp"),
            RouteMethod::NaiveVrp => write!(f, "naive-vrp"),
        }
    }
}

fn nearest_unvisited(cost: &DMatrix<f64>, from: usize, visited: &[bool]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (cand, seen) in visited.iter().enumerate() {
        if *seen {
            continue;
        }
        let c = cost[(from, cand)];
        if best.is_none_or(|(_, b)| c < b) {
            best = Some((cand, c));
        }
    }
    best.map(|(k, _)| k)
}

/// Visiting order from `start_index` under the given norm degree.
///
/// NaN or infinite coordinates give `InvalidParameter`.
pub fn solve<P: AsRef<[f64]>>(points: &[P], start_index: usize, norm_degree: u32) -> Result<Vec<usize>> {
    let n = points.len();
    if n == 0 {
        return Err(Error::EmptyInput);
    }
    if start_index >= n {
        return Err(Error::IndexOutOfRange {
            index: start_index,
            len: n,
        });
    }
    check_finite(points.iter().map(|p| p.as_ref()))?;
    let cost = cost_matrix(points, norm_degree)?;

    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n);
    let mut current = start_index;
    order.push(current);
    while order.len() < n {
        visited[current] = true;
        // n > visited count, so an unvisited point always exists here.
        let Some(next) = nearest_unvisited(&cost, current, &visited) else {
            break;
        };
        order.push(next);
        current = next;
    }
    tracing::debug!(n, start_index, norm_degree, "route solved");
    Ok(order)
}

/// `solve` with the metric picked by `method`.
pub fn solve_with_method<P: AsRef<[f64]>>(
    points: &[P],
    start_index: usize,
    method: RouteMethod,
) -> Result<Vec<usize>> {
    solve(points, start_index, method.norm_degree())
}

/// Total cost of visiting `order`; `closed` adds the leg back to the start.
pub fn tour_cost(cost: &DMatrix<f64>, order: &[usize], closed: bool) -> f64 {
    let open: f64 = order.windows(2).map(|w| cost[(w[0], w[1])]).sum();
    match (closed, order.first(), order.last()) {
        (true, Some(&first), Some(&last)) => open + cost[(last, first)],
        _ => open,
    }
}
