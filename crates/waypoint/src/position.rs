//! An owned, editable set of planar locations with per-set options.
//!
//! `Position` is the stateful front door used by interactive callers: it
//! keeps the point list and the options together and delegates every query
//! to the stateless solvers. Queries recompute from scratch each time.

use nalgebra::Vector2;

use crate::center::{geometric_median, mean, Center, GeometricCenterOptions};
use crate::error::Result;
use crate::polynomial::{fit_points, Polynomial};
use crate::route::{solve_with_method, RouteMethod};

/// Options carried by a `Position`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PositionOptions {
    pub center: GeometricCenterOptions,
    /// First index of the route.
    pub start_index: usize,
    pub method: RouteMethod,
    /// Polynomial degree for `fit`; `0` lets `guess_degree` decide.
    pub degree: usize,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Position {
    pub locations: Vec<Vector2<f64>>,
    pub options: PositionOptions,
}

impl Position {
    pub fn new(locations: Vec<Vector2<f64>>, options: PositionOptions) -> Self {
        Self { locations, options }
    }

    pub fn add(&mut self, point: Vector2<f64>) {
        self.locations.push(point);
    }

    /// Removes the first location equal to `point`; `None` when absent.
    pub fn remove(&mut self, point: &Vector2<f64>) -> Option<Vector2<f64>> {
        let idx = self.locations.iter().position(|p| p == point)?;
        Some(self.locations.remove(idx))
    }

    /// Replaces the first location equal to `old` with `new`, returning the
    /// replaced location; `None` (and no change) when `old` is absent.
    pub fn adjust(&mut self, old: &Vector2<f64>, new: Vector2<f64>) -> Option<Vector2<f64>> {
        let slot = self.locations.iter_mut().find(|p| **p == *old)?;
        Some(std::mem::replace(slot, new))
    }

    pub fn mean(&self) -> Result<Vector2<f64>> {
        mean(&self.locations)
    }

    /// Geometric median under `options.center`.
    pub fn center(&self) -> Result<Center> {
        geometric_median(&self.locations, self.options.center)
    }

    /// Greedy route from `options.start_index` under `options.method`.
    pub fn path(&self) -> Result<Vec<usize>> {
        let rows: Vec<[f64; 2]> = self.locations.iter().map(|p| [p.x, p.y]).collect();
        solve_with_method(&rows, self.options.start_index, self.options.method)
    }

    /// Least-squares polynomial through the locations.
    pub fn fit(&self) -> Result<Polynomial> {
        let degree = (self.options.degree > 0).then_some(self.options.degree);
        fit_points(&self.locations, degree)
    }
}
