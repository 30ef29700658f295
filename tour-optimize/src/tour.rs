use fixedbitset::FixedBitSet;

use crate::{
    cost::Cost,
    error::{Error, Result},
    matrix::DistanceMatrix,
};

/// A closed tour through matrix indices. `order` lists every index exactly once, the edge from the
/// last index back to the first is implied and included in `cost`.
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    order: Vec<usize>,
    cost: Cost,
}

impl IntoIterator for Tour {
    type Item = usize;
    type IntoIter = std::vec::IntoIter<usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.into_iter()
    }
}

impl<'a> IntoIterator for &'a Tour {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter()
    }
}

impl Tour {
    pub fn new(order: Vec<usize>, cost: Cost) -> Self {
        debug_assert!(is_permutation(&order, order.len()));
        Self { order, cost }
    }

    /// The tour of a single point.
    pub fn singleton() -> Self {
        Self {
            order: vec![0],
            cost: Cost::zero(),
        }
    }

    /// Evaluates a given visiting order against a distance matrix, closing edge included.
    pub fn with_cost_from(order: Vec<usize>, matrix: &DistanceMatrix) -> Result<Self> {
        if !is_permutation(&order, matrix.n()) {
            return Err(Error::invalid_input(format!(
                "order of length {} is not a permutation of 0..{}",
                order.len(),
                matrix.n()
            )));
        }
        let cost = cycle_cost(&order, matrix);
        Ok(Self { order, cost })
    }

    pub fn cost(&self) -> Cost {
        self.cost
    }

    pub fn order(&self) -> &[usize] {
        self.order.as_slice()
    }

    pub fn into_order(self) -> Vec<usize> {
        self.order
    }

    pub fn first(&self) -> usize {
        self.order[0]
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<usize> {
        self.order.get(idx).copied()
    }

    pub fn is_permutation_of(&self, n: usize) -> bool {
        is_permutation(&self.order, n)
    }

    /// The edges of the cycle as `(from, to)` pairs, closing edge last.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.order.len();
        (0..n).map(move |i| (self.order[i], self.order[(i + 1) % n]))
    }

    /// Rotates the cycle so that it begins at `start`. Order of visits and cost are unchanged.
    pub fn rotate_to(mut self, start: usize) -> Result<Self> {
        let pos = self
            .order
            .iter()
            .position(|&v| v == start)
            .ok_or_else(|| Error::invalid_input(format!("start {} is not part of the tour", start)))?;
        self.order.rotate_left(pos);
        Ok(self)
    }
}

fn is_permutation(order: &[usize], n: usize) -> bool {
    if order.len() != n {
        return false;
    }
    let mut seen = FixedBitSet::with_capacity(n);
    for &v in order {
        if v >= n || seen.put(v) {
            return false;
        }
    }
    true
}

pub(crate) fn cycle_cost(order: &[usize], matrix: &DistanceMatrix) -> Cost {
    let n = order.len();
    (0..n)
        .map(|i| matrix.cost(order[i], order[(i + 1) % n]))
        .sum()
}
