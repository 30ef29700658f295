use std::{hash::Hash, ops::Index};

use ndarray::{Array2, ArrayView1};
use rustc_hash::FxHashMap;

use crate::{
    coordinate::{haversine, Coordinate},
    cost::Cost,
    error::{Error, Result},
};

/// Square matrix of travel distances between points `0..n`.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    matrix: Array2<f64>,
}

impl DistanceMatrix {
    /// Builds the haversine distance matrix of the given points. The iteration order of `points`
    /// assigns the matrix indices: the first pair becomes index 0 and so on.
    pub fn from_points<K, I, C>(points: I) -> Result<(Self, PointIndex<K>)>
    where
        K: Clone + Eq + Hash,
        I: IntoIterator<Item = (K, C)>,
        C: Into<Coordinate>,
    {
        let mut ids: Vec<K> = vec![];
        let mut coords: Vec<Coordinate> = vec![];
        for (id, coord) in points {
            let coord: Coordinate = coord.into();
            if !coord.is_valid() {
                return Err(Error::invalid_input(format!(
                    "point {} has an invalid coordinate ({}, {})",
                    ids.len(),
                    coord.latitude,
                    coord.longitude
                )));
            }
            ids.push(id);
            coords.push(coord);
        }

        let index = PointIndex::init(ids)?;

        log::debug!("Building distance matrix for {} points.", coords.len());
        let matrix = Self::from_fn(coords.len(), |i, j| haversine(&coords[i], &coords[j]))?;
        Ok((matrix, index))
    }

    /// Builds a matrix from a symmetric distance function. Only the upper triangle is evaluated and
    /// mirrored, and the diagonal is zero.
    pub fn from_fn<F>(n: usize, mut dist: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> f64,
    {
        if n == 0 {
            return Err(Error::invalid_input("cannot build a distance matrix of zero points"));
        }
        let mut matrix = Array2::<f64>::zeros((n, n));
        for i in 0..n {
            for j in i + 1..n {
                let d = dist(i, j);
                matrix[[i, j]] = d;
                matrix[[j, i]] = d;
            }
        }
        Ok(Self { matrix })
    }

    /// Wraps a precomputed matrix. The entries are taken as they are; unusable weights are only
    /// detected by the solvers.
    pub fn from_array(matrix: Array2<f64>) -> Result<Self> {
        let (rows, cols) = matrix.dim();
        if rows == 0 {
            return Err(Error::invalid_input("distance matrix is empty"));
        }
        if rows != cols {
            return Err(Error::invalid_input(format!(
                "distance matrix must be square, got {}x{}",
                rows, cols
            )));
        }
        Ok(Self { matrix })
    }

    pub fn n(&self) -> usize {
        self.matrix.nrows()
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.matrix[[i, j]]
    }

    pub fn cost(&self, i: usize, j: usize) -> Cost {
        Cost::new(self.matrix[[i, j]])
    }

    pub fn row(&self, i: usize) -> ArrayView1<'_, f64> {
        self.matrix.row(i)
    }

    pub fn as_array(&self) -> &Array2<f64> {
        &self.matrix
    }
}

impl Index<(usize, usize)> for DistanceMatrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        &self.matrix[[i, j]]
    }
}

/// Correspondence between matrix indices and the caller's point identifiers.
#[derive(Debug, Clone)]
pub struct PointIndex<K> {
    ids: Vec<K>,
    index: FxHashMap<K, usize>,
}

impl<K> PointIndex<K>
where
    K: Clone + Eq + Hash,
{
    pub fn init(ids: Vec<K>) -> Result<Self> {
        if ids.is_empty() {
            return Err(Error::invalid_input("no points given"));
        }
        let mut index = FxHashMap::default();
        index.reserve(ids.len());
        for (i, id) in ids.iter().enumerate() {
            if index.insert(id.clone(), i).is_some() {
                return Err(Error::invalid_input(format!(
                    "duplicate point identifier at index {}",
                    i
                )));
            }
        }
        Ok(Self { ids, index })
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn get(&self, id: &K) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn id(&self, idx: usize) -> Option<&K> {
        self.ids.get(idx)
    }

    pub fn ids(&self) -> &[K] {
        &self.ids
    }

    /// Maps matrix indices back to identifiers.
    pub fn resolve(&self, order: &[usize]) -> Vec<K> {
        order.iter().map(|&i| self.ids[i].clone()).collect()
    }
}
