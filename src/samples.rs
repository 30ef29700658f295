use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    path::Path,
};

use csv::WriterBuilder;
use serde::Serialize;
use tour_optimize::{Algorithm, Cost};

#[derive(Debug, Clone)]
pub struct AlgResult {
    name: String,
    pub(crate) cost: Cost,
}

impl AlgResult {
    pub fn new(name: String, cost: Cost) -> Self {
        Self { name, cost }
    }

    pub fn of(algorithm: Algorithm, cost: Cost) -> Self {
        Self::new(algorithm.to_string(), cost)
    }
}

impl Display for AlgResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.cost)
    }
}

pub trait ResultRow {
    type RowType: Serialize;
    fn to_row(&self) -> Self::RowType;

    fn headers(&self) -> Vec<&str>;
}

/// Results of all compared algorithms on one random instance. The first result is the reference
/// the others are measured against.
#[derive(Debug, Clone)]
pub struct Sample {
    pub n: usize,
    pub seed: u64,
    pub results: Vec<AlgResult>,
}

impl Sample {
    /// Ratio of the last result to the reference result.
    pub fn ratio(&self) -> f64 {
        match (self.results.first(), self.results.last()) {
            (Some(reference), Some(other)) if reference.cost.as_float() > 0.0 => {
                other.cost.as_float() / reference.cost.as_float()
            }
            _ => 1.0,
        }
    }
}

#[derive(Serialize, Clone)]
pub struct Row {
    n: usize,
    seed: u64,
    results: Vec<Cost>,
    ratio: f64,
}

impl ResultRow for Sample {
    type RowType = Row;

    fn to_row(&self) -> Self::RowType {
        Row {
            n: self.n,
            seed: self.seed,
            results: self.results.iter().map(|r| r.cost).collect(),
            ratio: self.ratio(),
        }
    }

    fn headers(&self) -> Vec<&str> {
        let mut header = vec!["n", "seed"];
        header.append(&mut self.results.iter().map(|res| res.name.as_str()).collect());
        header.push("ratio");
        header
    }
}

impl Display for Sample {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n: {}, {}, ratio: {:.4}",
            self.n,
            self.results
                .iter()
                .map(|res| format!("{}", res))
                .collect::<Vec<String>>()
                .join(", "),
            self.ratio()
        )
    }
}

pub fn export<I: ResultRow, P: AsRef<Path>>(
    samples: Vec<I>,
    path: P,
) -> Result<(), Box<dyn Error>> {
    log::info!("Exporting results to {:?}.", path.as_ref());
    let headers = match samples.first() {
        Some(sample) => sample.headers(),
        None => {
            log::warn!("There are no samples. Nothing to export.");
            return Ok(());
        }
    };
    let mut wtr = WriterBuilder::new().has_headers(false).from_path(path)?;
    wtr.write_record(headers)?;
    for sample in samples {
        let row = sample.to_row();
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod test_samples {
    use super::*;

    fn sample() -> Sample {
        Sample {
            n: 5,
            seed: 3,
            results: vec![
                AlgResult::of(Algorithm::HeldKarp, 10.0.into()),
                AlgResult::of(Algorithm::NearestNeighbor, 12.5.into()),
            ],
        }
    }

    #[test]
    fn test_ratio() {
        assert_eq!(sample().ratio(), 1.25);
        let empty = Sample {
            n: 1,
            seed: 0,
            results: vec![],
        };
        assert_eq!(empty.ratio(), 1.0);
    }

    #[test]
    fn test_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.csv");
        export(vec![sample()], &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next(),
            Some("n,seed,held-karp,nearest-neighbor,ratio")
        );
        assert_eq!(lines.next(), Some("5,3,10.0,12.5,1.25"));
    }
}
