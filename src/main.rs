mod gen_points;
mod points_io;
mod result_random;
mod samples;
mod tour_io;

use std::{error::Error, path::PathBuf};

use clap::{Args, Parser};
use points_io::{import_locations, to_points};
use result_random::execute_random_points;
use tour_io::{check_tour, export_tour, import_tour};
use tour_optimize::{
    solve_points, Algorithm, DistanceMatrix, SolverConfig, Tour, DEFAULT_CUTOFF,
};

#[derive(Parser)]
#[command(name = "tourguide", about = "Plans the visiting order of tour locations")]
enum Cli {
    /// Computes a short round trip through all locations of a file
    Solve(Solve),
    /// Evaluates the length of a stored visiting order
    Cost(CostOfTour),
    /// Compares the exact solver with the heuristic on random instances
    Random(Random),
}

#[derive(Args)]
struct Solve {
    /// CSV file with name, address, latitude and longitude columns
    input: PathBuf,

    /// Name of the location to start at. Defaults to the first location.
    #[arg(short, long)]
    start: Option<String>,

    /// Largest number of locations solved exactly
    #[arg(short, long, default_value_t = DEFAULT_CUTOFF)]
    cutoff: usize,

    /// Always use this algorithm (held-karp, nearest-neighbor)
    #[arg(short, long)]
    algorithm: Option<Algorithm>,

    /// Write the order as position,name rows
    #[arg(short, long)]
    write_tour: Option<PathBuf>,
}

#[derive(Args)]
struct CostOfTour {
    input: PathBuf,

    /// Order as written by `solve --write-tour`
    tour: PathBuf,
}

#[derive(Args)]
struct Random {
    n_max: usize,

    #[arg(short, long, default_value = "1")]
    step: usize,

    #[arg(short, long, default_value = "10")]
    num: usize,

    #[arg(short, long, default_value = "random.csv")]
    output: PathBuf,
}

fn execute_solve(solve: Solve) -> Result<(), Box<dyn Error>> {
    let locations = import_locations(&solve.input)?;
    let start = match solve.start {
        Some(start) => start,
        None => locations
            .first()
            .map(|l| l.name.clone())
            .ok_or("No locations given.")?,
    };

    let mut config = SolverConfig::new(solve.cutoff)?;
    if let Some(algorithm) = solve.algorithm {
        config = config.with_algorithm(algorithm);
    }

    let route = solve_points(to_points(&locations), &start, &config)?;

    println!(
        "Tour through {} locations ({}): {} miles",
        route.order.len(),
        route.algorithm,
        route.cost
    );
    for (position, name) in route.order.iter().enumerate() {
        println!("{:>4}  {}", position, name);
    }

    if let Some(path) = solve.write_tour {
        export_tour(&path, &route.order)?;
    }
    Ok(())
}

fn execute_cost(cost: CostOfTour) -> Result<(), Box<dyn Error>> {
    let locations = import_locations(&cost.input)?;
    let tour = import_tour(&cost.tour)?;
    if !check_tour(&locations, &tour) {
        return Err(format!(
            "Tour {:?} does not visit every location of {:?} exactly once.",
            cost.tour, cost.input
        )
        .into());
    }

    let (matrix, index) = DistanceMatrix::from_points(to_points(&locations))?;
    let order = tour
        .iter()
        .map(|name| index.get(name).ok_or_else(|| format!("Unknown location {}", name)))
        .collect::<Result<Vec<usize>, String>>()?;
    let tour = Tour::with_cost_from(order, &matrix)?;

    println!("Tour length: {} miles", tour.cost());
    Ok(())
}

fn set_up_logging() -> Result<(), fern::InitError> {
    std::fs::create_dir_all("logs")?;
    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{date}][{level}] {message}",
                date = chrono::Local::now().format("%H:%M:%S"),
                level = record.level(),
                message = message
            ));
        })
        .level(log::LevelFilter::Info)
        .chain(fern::log_file(format!(
            "logs/{}.log",
            chrono::Local::now().format("%d%m%Y-%H%M")
        ))?)
        .apply()?;

    log::info!("Logger set up!");

    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    set_up_logging()?;
    let cli = Cli::parse();

    match cli {
        Cli::Solve(solve) => execute_solve(solve)?,
        Cli::Cost(cost) => execute_cost(cost)?,
        Cli::Random(r) => execute_random_points(r.n_max, r.step, r.num, r.output)?,
    }
    Ok(())
}
