//! mazewalk: solve a maze image and draw the route on a copy of it.

mod args;
mod display;

use std::io;
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use log::debug;
use mazewalk_core::{Grid, Point};
use mazewalk_image::{DecodeOptions, RenderOptions};
use mazewalk_paths::{Revisit, SolveError, Solver, SolverConfig};
use tracing_subscriber::EnvFilter;

use args::Args;
use display::FrontierDisplay;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    println!("Reading maze: {}", args.maze.display());
    let grid = load_maze(&args.maze, args.threshold)?;

    let config = SolverConfig::default()
        .with_heuristic(args.heuristic.into())
        .with_revisit(if args.forbid_revisits {
            Revisit::Forbid
        } else {
            Revisit::Allow
        });
    let solver = Solver::new(config);

    println!("Solving maze using best-first junction search...");
    let result = if args.show_numerical_solution {
        let mut display = FrontierDisplay::new(io::stdout().lock());
        let result = solver.solve_observed(&grid, &mut display);
        display.finish()?;
        result
    } else {
        solver.solve(&grid)
    };

    let solution = match result {
        Ok(solution) => solution,
        Err(SolveError::Unsolvable { explored }) => {
            println!("Tried {explored} paths.");
            return Err(SolveError::Unsolvable { explored }.into());
        }
        Err(e) => return Err(e.into()),
    };

    println!("Tried {} paths.", solution.explored);
    if args.show_numerical_solution {
        println!("Solution: {}", format_path(&solution.path));
    }

    if !args.prevent_writing_output {
        println!("Creating maze solution: {}", args.output.display());
        mazewalk_image::save(&grid, &solution.path, &RenderOptions::default(), &args.output)?;
    }
    Ok(())
}

fn load_maze(path: &Path, threshold: u8) -> Result<Grid, Box<dyn std::error::Error>> {
    let is_text = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"));
    let grid = if is_text {
        Grid::parse(&std::fs::read_to_string(path)?)?
    } else {
        let opts = DecodeOptions::default().with_threshold(threshold);
        mazewalk_image::load(path, &opts)?
    };
    debug!("loaded {}x{} maze", grid.width(), grid.height());
    Ok(grid)
}

fn format_path(path: &[Point]) -> String {
    let nodes: Vec<String> = path.iter().map(Point::to_string).collect();
    format!("[{}]", nodes.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_prints_as_a_bracketed_list() {
        let path = [Point::new(2, 0), Point::new(2, 4)];
        assert_eq!(format_path(&path), "[(2, 0) (2, 4)]");
        assert_eq!(format_path(&[]), "[]");
    }
}
