use std::{error::Error, path::Path};

use serde::Deserialize;
use tour_optimize::Coordinate;

/// A stored tour location as exported from the location table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Location {
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

pub fn import_locations<P: AsRef<Path>>(filename: P) -> Result<Vec<Location>, Box<dyn Error>> {
    log::info!("Importing locations from {:?}.", filename.as_ref());
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(filename)?;

    let mut locations = vec![];
    for record in reader.deserialize() {
        let location: Location = record?;
        locations.push(location);
    }
    log::info!("Imported {} locations.", locations.len());
    Ok(locations)
}

/// The identifier/coordinate pairs in file order, as expected by the solver.
pub fn to_points(locations: &[Location]) -> Vec<(String, Coordinate)> {
    locations
        .iter()
        .map(|l| (l.name.clone(), l.coordinate()))
        .collect()
}
