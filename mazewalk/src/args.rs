use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use mazewalk_paths::Heuristic;

#[derive(Parser, Debug)]
#[command(name = "mazewalk")]
#[command(about = "Find a route through a maze image and draw it in red")]
pub struct Args {
    /// Maze to solve: an image, or a text maze if the name ends in .txt
    #[arg(short, long, value_name = "FILE", default_value = "maze.png")]
    pub maze: PathBuf,

    /// Where to write the solved maze image
    #[arg(short, long, value_name = "FILE", default_value = "maze_output.png")]
    pub output: PathBuf,

    /// Print the junction list of the solution and show the frontier live
    /// while searching (large output for large mazes)
    #[arg(short, long)]
    pub show_numerical_solution: bool,

    /// Do not write the output image
    #[arg(short, long)]
    pub prevent_writing_output: bool,

    /// Hop cost used to order candidate routes
    #[arg(long, value_enum, default_value_t = HeuristicArg::Legacy)]
    pub heuristic: HeuristicArg,

    /// Never extend a route through a junction it already passed
    #[arg(long)]
    pub forbid_revisits: bool,

    /// Pixels whose red channel is at or below this value are walls
    #[arg(short, long, value_name = "RED", default_value = "0")]
    pub threshold: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum HeuristicArg {
    Legacy,
    Manhattan,
}

impl From<HeuristicArg> for Heuristic {
    fn from(h: HeuristicArg) -> Self {
        match h {
            HeuristicArg::Legacy => Heuristic::Legacy,
            HeuristicArg::Manhattan => Heuristic::Manhattan,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_names() {
        let args = Args::parse_from(["mazewalk"]);
        assert_eq!(args.maze, PathBuf::from("maze.png"));
        assert_eq!(args.output, PathBuf::from("maze_output.png"));
        assert!(!args.show_numerical_solution);
        assert!(!args.prevent_writing_output);
        assert_eq!(args.heuristic, HeuristicArg::Legacy);
        assert_eq!(args.threshold, 0);
    }

    #[test]
    fn flags_parse() {
        let args = Args::parse_from([
            "mazewalk",
            "--maze",
            "big.png",
            "--heuristic",
            "manhattan",
            "--forbid-revisits",
            "-p",
            "--threshold",
            "30",
        ]);
        assert_eq!(args.maze, PathBuf::from("big.png"));
        assert_eq!(Heuristic::from(args.heuristic), Heuristic::Manhattan);
        assert!(args.forbid_revisits);
        assert!(args.prevent_writing_output);
        assert_eq!(args.threshold, 30);
    }
}
