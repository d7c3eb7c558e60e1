//! Planar centers, polynomial fits, and greedy routes over point sets.
//!
//! Layout (leaves first)
//! - `ips`: p-norms and distances over `&[f64]` vectors.
//! - `linalg`: augmented-system elimination/back-substitution, cost matrices.
//! - `center`: arithmetic mean and compass-search geometric median.
//! - `polynomial`: normal-equation least squares and a degree heuristic.
//! - `route`: nearest-neighbour tours.
//! - `cartesian`: haversine distance, single pair or many origins.
//! - `position`: an editable point set that delegates to the above.
//! - `api`: the same operations over plain `[x, y]` arrays.
//!
//! Every call allocates its own buffers and returns owned results; there is
//! no shared state, so independent calls may run on different threads.

pub mod api;
pub mod cartesian;
pub mod center;
pub mod error;
pub mod ips;
pub mod linalg;
pub mod polynomial;
pub mod position;
pub mod route;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{Error, Result};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cartesian::{distances, haversine_distance, DistanceUnit};
    pub use crate::center::{geometric_median, mean, Center, GeometricCenterOptions};
    pub use crate::error::{Error, Result};
    pub use crate::polynomial::{best_fit, fit_points, guess_degree, Polynomial};
    pub use crate::position::{Position, PositionOptions};
    pub use crate::route::{solve as solve_route, solve_with_method, tour_cost, RouteMethod};
    pub use nalgebra::Vector2 as Vec2;
}
