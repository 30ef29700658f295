use serde::{Deserialize, Serialize};

/// Mean radius of the earth in miles.
pub const EARTH_RADIUS_MILES: f64 = 3958.8;

/// A position given as latitude/longitude in decimal degrees.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Finite and inside [-90, 90] x [-180, 180].
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        haversine(self, other)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Coordinate::new(latitude, longitude)
    }
}

impl From<::geo::Point<f64>> for Coordinate {
    fn from(point: ::geo::Point<f64>) -> Self {
        Coordinate::new(point.y(), point.x())
    }
}

impl From<Coordinate> for ::geo::Point<f64> {
    fn from(coord: Coordinate) -> Self {
        ::geo::Point::new(coord.longitude, coord.latitude)
    }
}

/// Great-circle distance in miles between two coordinates.
///
/// Both differences enter the formula as absolute values and the latitude cosines are multiplied,
/// so swapping the arguments yields the bit-identical result.
pub fn haversine(a: &Coordinate, b: &Coordinate) -> f64 {
    let to_rad = std::f64::consts::PI / 180.0;

    let d_lat = (b.latitude - a.latitude).abs() * to_rad;
    let d_lon = (b.longitude - a.longitude).abs() * to_rad;
    let cos_lats = (a.latitude * to_rad).cos() * (b.latitude * to_rad).cos();

    let h = 0.5 - d_lat.cos() / 2.0 + cos_lats * (1.0 - d_lon.cos()) / 2.0;

    // rounding can push `h` just outside [0, 1] for identical or antipodal points
    2.0 * EARTH_RADIUS_MILES * h.clamp(0.0, 1.0).sqrt().asin()
}
