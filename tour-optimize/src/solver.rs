use std::{fmt, hash::Hash, str::FromStr};

use crate::{
    coordinate::Coordinate,
    cost::Cost,
    error::{Error, Result},
    held_karp::{held_karp, MAX_EXACT_NODES},
    matrix::DistanceMatrix,
    nearest_neighbor::nearest_neighbor,
    tour::Tour,
};

/// Largest number of points solved exactly unless configured otherwise.
pub const DEFAULT_CUTOFF: usize = 15;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// A single point, no solver involved.
    Trivial,
    HeldKarp,
    NearestNeighbor,
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "held-karp" | "hk" => Ok(Algorithm::HeldKarp),
            "nearest-neighbor" | "nn" => Ok(Algorithm::NearestNeighbor),
            _ => Err(Error::invalid_input(format!("unknown algorithm '{}'", s))),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Trivial => write!(f, "trivial"),
            Algorithm::HeldKarp => write!(f, "held-karp"),
            Algorithm::NearestNeighbor => write!(f, "nearest-neighbor"),
        }
    }
}

/// Chooses between the exact solver and the heuristic by instance size, unless an algorithm is
/// forced.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    cutoff: usize,
    forced: Option<Algorithm>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            cutoff: DEFAULT_CUTOFF,
            forced: None,
        }
    }
}

impl SolverConfig {
    /// Instances with up to `cutoff` points are solved exactly.
    pub fn new(cutoff: usize) -> Result<Self> {
        if cutoff > MAX_EXACT_NODES {
            return Err(Error::invalid_input(format!(
                "cutoff {} exceeds the exact solver limit of {} points",
                cutoff, MAX_EXACT_NODES
            )));
        }
        Ok(SolverConfig {
            cutoff,
            forced: None,
        })
    }

    /// Uses `algorithm` for every instance of more than one point.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.forced = Some(algorithm);
        self
    }

    pub fn cutoff(&self) -> usize {
        self.cutoff
    }

    pub fn algorithm_for(&self, n: usize) -> Algorithm {
        if n <= 1 {
            Algorithm::Trivial
        } else if let Some(algorithm) = self.forced {
            algorithm
        } else if n <= self.cutoff {
            Algorithm::HeldKarp
        } else {
            Algorithm::NearestNeighbor
        }
    }
}

/// A tour over matrix indices together with the algorithm that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub tour: Tour,
    pub algorithm: Algorithm,
}

impl Solution {
    pub fn order(&self) -> &[usize] {
        self.tour.order()
    }

    pub fn cost(&self) -> Cost {
        self.tour.cost()
    }
}

/// A tour over the caller's point identifiers.
#[derive(Debug, Clone, PartialEq)]
pub struct Route<K> {
    pub order: Vec<K>,
    pub cost: Cost,
    pub algorithm: Algorithm,
}

/// Solves the instance given by `matrix`, starting the tour at `start`. The algorithm is picked by
/// [`SolverConfig::algorithm_for`].
pub fn solve(matrix: &DistanceMatrix, start: usize, config: &SolverConfig) -> Result<Solution> {
    let n = matrix.n();
    check_start(start, n)?;
    let algorithm = config.algorithm_for(n);
    log::debug!(
        "Dispatching {} points to {} (cutoff {}).",
        n,
        algorithm,
        config.cutoff()
    );
    solve_with(matrix, start, algorithm)
}

/// Solves the instance with a fixed algorithm, bypassing the size based choice.
pub fn solve_with(matrix: &DistanceMatrix, start: usize, algorithm: Algorithm) -> Result<Solution> {
    let n = matrix.n();
    check_start(start, n)?;
    let tour = match algorithm {
        Algorithm::Trivial if n == 1 => Tour::singleton(),
        Algorithm::Trivial => {
            return Err(Error::invalid_input(format!(
                "the trivial tour needs exactly one point, got {}",
                n
            )))
        }
        Algorithm::HeldKarp => held_karp(matrix, start)?,
        Algorithm::NearestNeighbor => nearest_neighbor(matrix, start)?,
    };
    debug_assert!(tour.is_permutation_of(n));
    debug_assert_eq!(tour.first(), start);
    Ok(Solution { tour, algorithm })
}

/// Computes a tour through identified coordinates, beginning at the point `start`.
///
/// The iteration order of `points` fixes the matrix indices; the returned order lists the same
/// identifiers.
pub fn solve_points<K, I, C>(points: I, start: &K, config: &SolverConfig) -> Result<Route<K>>
where
    K: Clone + Eq + Hash,
    I: IntoIterator<Item = (K, C)>,
    C: Into<Coordinate>,
{
    let (matrix, index) = DistanceMatrix::from_points(points)?;
    let start_index = index
        .get(start)
        .ok_or_else(|| Error::invalid_input("start point is not part of the given points"))?;

    let solution = solve(&matrix, start_index, config)?;
    Ok(Route {
        order: index.resolve(solution.order()),
        cost: solution.cost(),
        algorithm: solution.algorithm,
    })
}

fn check_start(start: usize, n: usize) -> Result<()> {
    if start >= n {
        Err(Error::invalid_input(format!(
            "start index {} out of range for {} points",
            start, n
        )))
    } else {
        Ok(())
    }
}
