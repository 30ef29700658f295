//! Instances and reference results shared by the test modules.

use rand::{rngs::StdRng, Rng};

use crate::{coordinate::Coordinate, cost::Cost, matrix::DistanceMatrix};

pub(crate) fn euclidean(points: &[(f64, f64)]) -> DistanceMatrix {
    DistanceMatrix::from_fn(points.len(), |i, j| {
        let dx = points[i].0 - points[j].0;
        let dy = points[i].1 - points[j].1;
        (dx * dx + dy * dy).sqrt()
    })
    .unwrap()
}

///   1 ---- 2
///   |      |
///   0 ---- 3
pub(crate) fn unit_square() -> DistanceMatrix {
    euclidean(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)])
}

/// Symmetric matrix with integer weights in `1..=max`, so that every sum of edges is exact.
pub(crate) fn random_integer_matrix(n: usize, max: u32, rng: &mut StdRng) -> DistanceMatrix {
    DistanceMatrix::from_fn(n, |_, _| rng.gen_range(1..=max) as f64).unwrap()
}

pub(crate) fn random_coordinates(n: usize, rng: &mut StdRng) -> Vec<Coordinate> {
    (0..n)
        .map(|_| Coordinate::new(rng.gen_range(40.0..41.0), rng.gen_range(-75.0..-73.0)))
        .collect()
}

/// Cost of an optimal tour by enumerating all orders that start at vertex 0.
pub(crate) fn brute_force(matrix: &DistanceMatrix) -> Cost {
    let n = matrix.n();
    if n == 1 {
        return Cost::zero();
    }
    let mut rest: Vec<usize> = (1..n).collect();
    let mut best = f64::INFINITY;
    permute(matrix, 0, 0.0, &mut rest, 0, &mut best);
    Cost::new(best)
}

fn permute(
    matrix: &DistanceMatrix,
    last: usize,
    cost: f64,
    rest: &mut Vec<usize>,
    k: usize,
    best: &mut f64,
) {
    if k == rest.len() {
        let total = cost + matrix.get(last, 0);
        if total < *best {
            *best = total;
        }
        return;
    }
    for i in k..rest.len() {
        rest.swap(k, i);
        let next = rest[k];
        permute(matrix, next, cost + matrix.get(last, next), rest, k + 1, best);
        rest.swap(k, i);
    }
}
