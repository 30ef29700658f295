pub mod bitmask;
pub mod coordinate;
pub mod cost;
mod error;
pub mod held_karp;
pub mod matrix;
pub mod nearest_neighbor;
pub mod solver;
pub mod tour;

#[cfg(test)]
mod testing;

pub use coordinate::{haversine, Coordinate};
pub use cost::Cost;
pub use error::{Error, Result};
pub use held_karp::held_karp;
pub use matrix::{DistanceMatrix, PointIndex};
pub use nearest_neighbor::nearest_neighbor;
pub use solver::{
    solve, solve_points, solve_with, Algorithm, Route, Solution, SolverConfig, DEFAULT_CUTOFF,
};
pub use tour::Tour;
