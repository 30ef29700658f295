use std::{error::Error, path::Path};

use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use tour_optimize::{held_karp::MAX_EXACT_NODES, solve_with, Algorithm, DistanceMatrix};

use crate::{
    gen_points::RandomPointGenerator,
    samples::{self, AlgResult, Sample},
};

/// Compares the exact solver with the heuristic on `num` random city-sized instances for every
/// size `step, 2 * step, ..` up to `n_max`.
pub fn execute_random_points<P: AsRef<Path>>(
    n_max: usize,
    step: usize,
    num: usize,
    output: P,
) -> Result<(), Box<dyn Error>> {
    if step == 0 {
        return Err("step must be positive".into());
    }
    let n_max = if n_max > MAX_EXACT_NODES {
        log::warn!(
            "Limiting instance size to {} points, the exact solver limit.",
            MAX_EXACT_NODES
        );
        MAX_EXACT_NODES
    } else {
        n_max
    };

    let mut instances = vec![];
    let mut n = step;
    while n <= n_max {
        for k in 0..num {
            let seed = (n * 1000 + k) as u64;
            instances.push((n, seed));
        }
        n += step;
    }

    let pb = ProgressBar::new(instances.len() as u64);
    pb.set_style(ProgressStyle::default_bar().template(
        "{msg} {spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] ({pos}/{len})",
    ));
    pb.enable_steady_tick(20);
    pb.set_message("Random instances");

    log::info!("Starting to evaluate {} random instances.", instances.len());

    let samples = instances
        .into_par_iter()
        .progress_with(pb)
        .map(|(n, seed)| evaluate_instance(n, seed))
        .collect::<Result<Vec<Sample>, tour_optimize::Error>>()?;

    for sample in &samples {
        log::info!("{}", sample);
    }
    println!("Random instances: ✔️");

    samples::export(samples, output)
}

fn evaluate_instance(n: usize, seed: u64) -> Result<Sample, tour_optimize::Error> {
    let points = RandomPointGenerator::city(n, seed)
        .next()
        .unwrap_or_default();
    let (matrix, _) = DistanceMatrix::from_points(points)?;

    let mut results = vec![];
    for algorithm in [Algorithm::HeldKarp, Algorithm::NearestNeighbor] {
        let solution = solve_with(&matrix, 0, algorithm)?;
        results.push(AlgResult::of(algorithm, solution.cost()));
    }

    Ok(Sample { n, seed, results })
}

#[cfg(test)]
mod test_result_random {
    use super::*;

    #[test]
    fn test_evaluate_instance() {
        let sample = evaluate_instance(7, 1).unwrap();
        assert_eq!(sample.n, 7);
        assert_eq!(sample.results.len(), 2);
        assert!(sample.ratio() >= 1.0);
    }

    #[test]
    fn test_execute_random_points() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("random.csv");
        execute_random_points(6, 3, 2, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        // header plus two instances for n = 3 and n = 6
        assert_eq!(content.lines().count(), 5);
    }
}
