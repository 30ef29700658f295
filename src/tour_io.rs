use std::{collections::HashSet, error::Error, path::Path};

use serde::{Deserialize, Serialize};

use crate::points_io::Location;

/// One visited location; `position` is the index in the computed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct TourRow {
    position: usize,
    name: String,
}

pub fn import_tour<P: AsRef<Path>>(filename: P) -> Result<Vec<String>, Box<dyn Error>> {
    let mut reader = csv::Reader::from_path(filename)?;
    let mut rows: Vec<TourRow> = vec![];
    for row in reader.deserialize() {
        rows.push(row?);
    }
    rows.sort_by_key(|row| row.position);
    Ok(rows.into_iter().map(|row| row.name).collect())
}

/// A stored order is usable if it names every location exactly once.
pub fn check_tour(locations: &[Location], tour: &[String]) -> bool {
    let names = tour.iter().collect::<HashSet<&String>>();
    names.len() == tour.len()
        && tour.len() == locations.len()
        && locations.iter().all(|l| names.contains(&l.name))
}

pub fn export_tour<P: AsRef<Path>>(filename: P, tour: &[String]) -> Result<(), Box<dyn Error>> {
    log::info!("Writing tour to {:?}.", filename.as_ref());
    let mut writer = csv::Writer::from_path(filename)?;
    for (position, name) in tour.iter().enumerate() {
        writer.serialize(TourRow {
            position,
            name: name.clone(),
        })?;
    }
    writer.flush()?;

    Ok(())
}
