use crate::{
    bitmask::{members, without, SubsetsOfSize},
    cost::Cost,
    error::{Error, Result},
    matrix::DistanceMatrix,
    tour::Tour,
};

/// Largest instance the exact solver accepts. The memo table holds `n * 2^(n-1)` entries.
pub const MAX_EXACT_NODES: usize = 20;

const NO_PREDECESSOR: usize = usize::MAX;

/// Optimal cost of a path that leaves the origin, visits exactly the vertices of a subset and
/// ends in a given vertex of it, plus the vertex visited before that one.
#[derive(Debug, Clone, Copy)]
struct Subtour {
    cost: f64,
    prev: usize,
}

impl Subtour {
    fn unreached() -> Self {
        Subtour {
            cost: f64::INFINITY,
            prev: NO_PREDECESSOR,
        }
    }
}

/// Memo table keyed by (subset, last vertex). Subsets never contain the origin, so bit 0 is
/// dropped from the key.
struct MemoTable {
    entries: Vec<Subtour>,
    n: usize,
}

impl MemoTable {
    fn new(n: usize) -> Self {
        MemoTable {
            entries: vec![Subtour::unreached(); (1 << (n - 1)) * n],
            n,
        }
    }

    #[inline]
    fn slot(&self, mask: usize, v: usize) -> usize {
        (mask >> 1) * self.n + v
    }

    #[inline]
    fn get(&self, mask: usize, v: usize) -> Subtour {
        self.entries[self.slot(mask, v)]
    }

    #[inline]
    fn set(&mut self, mask: usize, v: usize, subtour: Subtour) {
        let slot = self.slot(mask, v);
        self.entries[slot] = subtour;
    }
}

/// Computes an optimal tour with the Held-Karp dynamic program and returns it starting at
/// `start`.
///
/// The program runs with vertex 0 as origin. Subsets are processed by increasing size, and within
/// every minimization candidates are scanned by increasing index and replaced only on a strictly
/// smaller cost, so among equally good tours the one through the lowest-indexed predecessors is
/// returned.
pub fn held_karp(matrix: &DistanceMatrix, start: usize) -> Result<Tour> {
    let n = matrix.n();
    if start >= n {
        return Err(Error::invalid_input(format!(
            "start index {} out of range for {} points",
            start, n
        )));
    }
    if n == 1 {
        return Ok(Tour::singleton());
    }
    if n > MAX_EXACT_NODES {
        return Err(Error::invalid_input(format!(
            "Held-Karp supports at most {} points, got {}",
            MAX_EXACT_NODES, n
        )));
    }

    log::info!("Start computing optimal tour by Held-Karp on {} points.", n);

    let mut opt = MemoTable::new(n);
    for v in 1..n {
        opt.set(
            1 << v,
            v,
            Subtour {
                cost: matrix.get(0, v),
                prev: 0,
            },
        );
    }

    for size in 2..n {
        for mask in SubsetsOfSize::new(n, size) {
            for v in members(mask) {
                let rest = without(mask, v);
                let mut best = Subtour::unreached();
                for u in members(rest) {
                    let cost = opt.get(rest, u).cost + matrix.get(u, v);
                    if cost < best.cost {
                        best = Subtour { cost, prev: u };
                    }
                }
                opt.set(mask, v, best);
            }
        }
        log::trace!("Held-Karp: finished subsets of size {}/{}.", size, n - 1);
    }

    let all = (1 << n) - 2;
    let mut best = Subtour::unreached();
    for v in 1..n {
        let cost = opt.get(all, v).cost + matrix.get(v, 0);
        if cost < best.cost {
            best = Subtour { cost, prev: v };
        }
    }
    if best.prev == NO_PREDECESSOR || !best.cost.is_finite() {
        return Err(Error::infeasible(format!(
            "no tour of finite cost through {} points",
            n
        )));
    }

    let mut order = Vec::with_capacity(n);
    let mut mask = all;
    let mut v = best.prev;
    while mask != 0 {
        order.push(v);
        let prev = opt.get(mask, v).prev;
        if prev == NO_PREDECESSOR {
            return Err(Error::infeasible(format!(
                "vertex {} cannot be reached at finite cost",
                v
            )));
        }
        mask = without(mask, v);
        v = prev;
    }
    order.push(0);
    order.reverse();

    log::info!("Finished computing optimal tour by Held-Karp: {}", best.cost);

    Tour::new(order, Cost::new(best.cost)).rotate_to(start)
}

#[cfg(test)]
mod test_held_karp {
    use super::*;
    use crate::testing::*;
    use ndarray::Array2;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_unit_square() {
        let matrix = unit_square();
        let tour = held_karp(&matrix, 0).unwrap();
        assert!(tour.order() == [0, 1, 2, 3] || tour.order() == [0, 3, 2, 1]);
        assert_eq!(tour.cost(), 4.0.into());
    }

    #[test]
    fn test_unit_square_lowest_index_tie_break() {
        // both directions cost 4; closing through vertex 1 is found first
        let tour = held_karp(&unit_square(), 0).unwrap();
        assert_eq!(tour.order(), &[0, 3, 2, 1]);
        assert_eq!(held_karp(&unit_square(), 0).unwrap(), tour);
    }

    #[test]
    fn test_start_rotation() {
        let matrix = unit_square();
        let base = held_karp(&matrix, 0).unwrap();
        for start in 1..4 {
            let tour = held_karp(&matrix, start).unwrap();
            assert_eq!(tour.first(), start);
            assert_eq!(tour.cost(), base.cost());
            assert_eq!(base.clone().rotate_to(start).unwrap(), tour);
        }
    }

    #[test]
    fn test_two_points() {
        let matrix = euclidean(&[(0.0, 0.0), (3.0, 4.0)]);
        let tour = held_karp(&matrix, 1).unwrap();
        assert_eq!(tour.order(), &[1, 0]);
        assert_eq!(tour.cost(), 10.0.into());
    }

    #[test]
    fn test_single_point() {
        let matrix = euclidean(&[(2.0, 2.0)]);
        let tour = held_karp(&matrix, 0).unwrap();
        assert_eq!(tour.order(), &[0]);
        assert_eq!(tour.cost(), 0.0.into());
    }

    #[test]
    fn test_matches_brute_force() {
        let mut rng = StdRng::seed_from_u64(42);
        for n in 2..=8 {
            for _ in 0..10 {
                let matrix = random_integer_matrix(n, 100, &mut rng);
                let tour = held_karp(&matrix, 0).unwrap();
                assert!(tour.is_permutation_of(n));
                assert_eq!(tour.cost(), brute_force(&matrix), "n = {}", n);
            }
        }
    }

    #[test]
    fn test_matches_brute_force_haversine() {
        let mut rng = StdRng::seed_from_u64(1);
        for n in 2..=8 {
            let coords = random_coordinates(n, &mut rng);
            let (matrix, _) = DistanceMatrix::from_points(coords.into_iter().enumerate()).unwrap();
            let tour = held_karp(&matrix, n - 1).unwrap();
            let expected = brute_force(&matrix).as_float();
            assert!((tour.cost().as_float() - expected).abs() < 1e-9 * expected.max(1.0));
            assert_eq!(tour.first(), n - 1);
        }
    }

    #[test]
    fn test_reported_cost_matches_order() {
        let mut rng = StdRng::seed_from_u64(5);
        for n in 3..=10 {
            let matrix = random_integer_matrix(n, 50, &mut rng);
            let tour = held_karp(&matrix, n / 2).unwrap();
            let recomputed = Tour::with_cost_from(tour.order().to_vec(), &matrix).unwrap();
            assert_eq!(recomputed.cost(), tour.cost());
        }
    }

    #[test]
    fn test_start_out_of_range() {
        let err = held_karp(&unit_square(), 4).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_too_many_points() {
        let matrix = DistanceMatrix::from_fn(MAX_EXACT_NODES + 1, |i, j| (i + j) as f64).unwrap();
        assert!(held_karp(&matrix, 0).unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_nan_on_every_tour_is_infeasible() {
        let mut array = unit_square().as_array().clone();
        for i in 0..3 {
            array[[i, 3]] = f64::NAN;
            array[[3, i]] = f64::NAN;
        }
        let matrix = DistanceMatrix::from_array(array).unwrap();
        assert!(held_karp(&matrix, 0).unwrap_err().is_infeasible());
    }

    #[test]
    fn test_negative_infinity_is_infeasible() {
        let mut array = unit_square().as_array().clone();
        array[[0, 2]] = f64::NEG_INFINITY;
        array[[2, 0]] = f64::NEG_INFINITY;
        let matrix = DistanceMatrix::from_array(array).unwrap();
        assert!(held_karp(&matrix, 0).unwrap_err().is_infeasible());
    }

    #[test]
    fn test_avoidable_infinite_edge() {
        let mut array = unit_square().as_array().clone();
        array[[0, 2]] = f64::INFINITY;
        array[[2, 0]] = f64::INFINITY;
        let matrix = DistanceMatrix::from_array(array).unwrap();
        let tour = held_karp(&matrix, 0).unwrap();
        assert_eq!(tour.cost(), 4.0.into());
    }

    #[test]
    fn test_unreachable_vertex_is_infeasible() {
        let mut array = Array2::from_elem((4, 4), 1.0);
        for i in 0..4 {
            array[[i, i]] = 0.0;
            if i != 2 {
                array[[i, 2]] = f64::INFINITY;
                array[[2, i]] = f64::INFINITY;
            }
        }
        let matrix = DistanceMatrix::from_array(array).unwrap();
        assert!(held_karp(&matrix, 0).unwrap_err().is_infeasible());
    }
}
