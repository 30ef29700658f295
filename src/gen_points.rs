use rand::{rngs::StdRng, Rng, SeedableRng};
use tour_optimize::Coordinate;

/// Area the random points are drawn from, in degrees.
#[derive(Debug, Clone, Copy)]
pub struct BoundingBox {
    pub min: Coordinate,
    pub max: Coordinate,
}

impl BoundingBox {
    /// Roughly the size of a city.
    pub fn city() -> Self {
        BoundingBox {
            min: Coordinate::new(40.70, -74.02),
            max: Coordinate::new(40.80, -73.93),
        }
    }
}

/// Yields random point sets of a fixed size.
pub struct RandomPointGenerator {
    n: usize,
    bbox: BoundingBox,
    rng: StdRng,
}

impl RandomPointGenerator {
    pub fn city(n: usize, seed: u64) -> Self {
        RandomPointGenerator {
            n,
            bbox: BoundingBox::city(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn random_coordinate(&mut self) -> Coordinate {
        let min = self.bbox.min;
        let max = self.bbox.max;
        Coordinate::new(
            self.rng.gen_range(min.latitude..max.latitude),
            self.rng.gen_range(min.longitude..max.longitude),
        )
    }
}

impl Iterator for RandomPointGenerator {
    type Item = Vec<(usize, Coordinate)>;

    fn next(&mut self) -> Option<Self::Item> {
        Some((0..self.n).map(|i| (i, self.random_coordinate())).collect())
    }
}
