use fixedbitset::FixedBitSet;

use crate::{
    cost::Cost,
    error::{Error, Result},
    matrix::DistanceMatrix,
    tour::Tour,
};

/// Builds a tour greedily: from `start`, always move to the closest unvisited point, then return
/// to `start`.
///
/// Each step scans one matrix row by increasing index and keeps a candidate only if it is strictly
/// closer, so ties go to the lowest index. Weights that do not compare below infinity (NaN,
/// infinite) are never taken.
pub fn nearest_neighbor(matrix: &DistanceMatrix, start: usize) -> Result<Tour> {
    let n = matrix.n();
    if start >= n {
        return Err(Error::invalid_input(format!(
            "start index {} out of range for {} points",
            start, n
        )));
    }

    log::info!(
        "Start computing tour by nearest neighbor on {} points from {}.",
        n,
        start
    );

    let mut visited = FixedBitSet::with_capacity(n);
    visited.insert(start);
    let mut order = Vec::with_capacity(n);
    order.push(start);

    let mut current = start;
    let mut cost = Cost::zero();

    while order.len() < n {
        let mut next: Option<usize> = None;
        let mut min_edge = f64::INFINITY;
        for (i, &edge) in matrix.row(current).iter().enumerate() {
            if i != current && !visited.contains(i) && edge < min_edge {
                min_edge = edge;
                next = Some(i);
            }
        }

        let next = next.ok_or_else(|| {
            Error::infeasible(format!(
                "no unvisited point reachable from {} at finite cost",
                current
            ))
        })?;
        log::trace!("Nearest neighbor: {} -> {} ({})", current, next, min_edge);

        visited.insert(next);
        order.push(next);
        cost += Cost::new(min_edge);
        current = next;
    }

    cost += matrix.cost(current, start);
    if !cost.is_finite() {
        return Err(Error::infeasible(format!(
            "nearest neighbor tour has non-finite cost {}",
            cost
        )));
    }

    log::info!("Finished computing tour by nearest neighbor: {}", cost);

    Ok(Tour::new(order, cost))
}
