//! `gridpath` — run grid searches from the command line.
//!
//! Usage:
//!   gridpath --map maze.txt --algorithm astar
//!   gridpath --rows 20 --cols 40 --density 0.3 --seed 7 --json
//!   RUST_LOG=debug gridpath   # random 20x40 grid, all strategies

mod placement;
mod render;

use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::Parser;
use gridpath_core::{Grid, Layout};
use gridpath_search::{Algorithm, SearchResult, Searcher, UnknownAlgorithm};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Grid pathfinding demo
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Text map (`#` wall, `.` open, `S` start, `E` end) or `.json` layout
    #[arg(short, long)]
    map: Option<PathBuf>,

    /// Rows of a generated grid
    #[arg(long, default_value_t = 20)]
    rows: usize,

    /// Columns of a generated grid
    #[arg(long, default_value_t = 40)]
    cols: usize,

    /// Wall probability per cell of a generated grid, in [0, 1]
    #[arg(short, long, default_value_t = 0.25, value_parser = parse_density)]
    density: f64,

    /// Seed for the generated grid (random if omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Strategy to run: dijkstra, astar, dfs or all
    #[arg(short, long, default_value = "all")]
    algorithm: Selection,

    /// Print the layout and results as JSON instead of text maps
    #[arg(long)]
    json: bool,
}

/// The strategies picked on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Selection {
    All,
    One(Algorithm),
}

impl Selection {
    fn algorithms(self) -> Vec<Algorithm> {
        match self {
            Selection::All => Algorithm::ALL.to_vec(),
            Selection::One(a) => vec![a],
        }
    }
}

impl FromStr for Selection {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(Selection::All);
        }
        s.parse().map(Selection::One)
    }
}

fn parse_density(s: &str) -> Result<f64, String> {
    let density: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if !(0.0..=1.0).contains(&density) {
        return Err(format!("{s} is not a probability in [0, 1]"));
    }
    Ok(density)
}

fn load_layout(path: &Path) -> Result<Layout, Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(path)?;
    let layout: Layout = if path.extension().is_some_and(|e| e == "json") {
        serde_json::from_str(&text)?
    } else {
        Layout::parse(&text)?
    };
    Ok(layout)
}

fn make_grid(args: &Args) -> Result<Grid, Box<dyn std::error::Error>> {
    if let Some(path) = &args.map {
        log::info!("loading {}", path.display());
        return Ok(load_layout(path)?.build()?);
    }
    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!(
        "generating {}x{} grid, density {}, seed {seed}",
        args.rows,
        args.cols,
        args.density
    );
    let mut rng = StdRng::seed_from_u64(seed);
    Ok(placement::random_grid(&mut rng, args.rows, args.cols, args.density)?)
}

/// The layout plus, per run, the result and its visit-then-path replay.
fn json_report(grid: &Grid, results: &[(Algorithm, SearchResult)]) -> serde_json::Value {
    let runs: Vec<_> = results
        .iter()
        .map(|(a, r)| {
            let replay: Vec<_> = r.replay().collect();
            serde_json::json!({ "algorithm": a, "result": r, "replay": replay })
        })
        .collect();
    serde_json::json!({ "layout": grid.to_layout(), "runs": runs })
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let grid = make_grid(args)?;

    let mut searcher = Searcher::for_grid(&grid);
    let results: Vec<(Algorithm, SearchResult)> = args
        .algorithm
        .algorithms()
        .into_iter()
        .map(|a| (a, searcher.run(a, &grid, grid.start(), grid.end())))
        .collect();

    if args.json {
        let doc = json_report(&grid, &results);
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    for (a, r) in &results {
        if r.is_reachable() {
            println!(
                "{a}: {} steps, {} cells visited",
                r.steps(),
                r.all_visited.len()
            );
        } else {
            println!("{a}: no route, {} cells visited", r.all_visited.len());
        }
        println!("{}\n", render::overlay(&grid, r));
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(e) = run(&args) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("maps").join(name)
    }

    #[test]
    fn bundled_text_map_is_solvable() {
        let grid = load_layout(&map("corridors.txt")).unwrap().build().unwrap();
        let mut searcher = Searcher::for_grid(&grid);
        let d = searcher.dijkstra(&grid, grid.start(), grid.end());
        let a = searcher.astar(&grid, grid.start(), grid.end());
        assert!(d.is_reachable());
        assert_eq!(d.steps(), a.steps());
    }

    #[test]
    fn bundled_json_map_is_walled() {
        let grid = load_layout(&map("walled.json")).unwrap().build().unwrap();
        for a in Algorithm::ALL {
            assert!(!searcher_run(a, &grid).is_reachable());
        }
    }

    fn searcher_run(a: Algorithm, grid: &Grid) -> SearchResult {
        Searcher::for_grid(grid).run(a, grid, grid.start(), grid.end())
    }

    #[test]
    fn generated_grid_respects_args() {
        let args = Args::parse_from(["gridpath", "--rows", "8", "--cols", "12", "--seed", "5"]);
        let grid = make_grid(&args).unwrap();
        assert_eq!(grid.rows(), 8);
        assert_eq!(grid.cols(), 12);
        assert_eq!(make_grid(&args).unwrap(), grid);
        assert_eq!(args.algorithm, Selection::All);
        assert_eq!(args.density, 0.25);
    }

    #[test]
    fn algorithm_flag_accepts_all_and_single_names() {
        let args = Args::parse_from(["gridpath", "--algorithm", "all"]);
        assert_eq!(args.algorithm.algorithms(), Algorithm::ALL.to_vec());
        let args = Args::parse_from(["gridpath", "-a", "astar"]);
        assert_eq!(args.algorithm, Selection::One(Algorithm::AStar));
        assert_eq!(args.algorithm.algorithms(), vec![Algorithm::AStar]);
        assert!(Args::try_parse_from(["gridpath", "--algorithm", "bfs"]).is_err());
    }

    #[test]
    fn density_must_be_a_probability() {
        for bad in ["NaN", "inf", "-0.1", "1.5", "lots"] {
            assert!(
                Args::try_parse_from(["gridpath", "--density", bad]).is_err(),
                "{bad} accepted"
            );
        }
        let args = Args::parse_from(["gridpath", "--density", "1"]);
        assert_eq!(args.density, 1.0);
    }

    #[test]
    fn json_report_includes_replay() {
        let grid = load_layout(&map("corridors.txt")).unwrap().build().unwrap();
        let result = searcher_run(Algorithm::AStar, &grid);
        let doc = json_report(&grid, &[(Algorithm::AStar, result.clone())]);
        let run = &doc["runs"][0];
        assert_eq!(run["algorithm"], "a-star");
        let replay = run["replay"].as_array().unwrap();
        assert_eq!(replay.len(), result.all_visited.len() + result.shortest.len());
        assert_eq!(doc["layout"]["rows"], grid.rows());
    }
}
