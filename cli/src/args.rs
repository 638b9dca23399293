use bisearch_core::Cell;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "bisearch")]
#[command(about = "Watch a bidirectional breadth-first search meet in the middle")]
pub struct Args {
    #[command(subcommand)]
    pub view: View,

    /// Milliseconds between search steps (10-2000); each view has its own default
    #[arg(short = 's', long, value_name = "MS", global = true)]
    pub speed: Option<u64>,

    /// Skip the animation and print only the final frame
    #[arg(long, global = true)]
    pub no_animate: bool,

    /// Print a JSON report instead of frames
    #[arg(long, global = true)]
    pub json: bool,

    /// Seed for reproducible random walls
    #[arg(long, value_name = "N", global = true)]
    pub seed: Option<u64>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbose mode - show search info, the event log and statistics
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode - only show the path flow
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum View {
    /// Twelve-node showcase graph (nodes A to L)
    Graph {
        #[arg(long, default_value_t = 'A')]
        start: char,

        #[arg(long, default_value_t = 'L')]
        goal: char,

        /// Mark a node as an obstacle (repeatable)
        #[arg(long = "block", value_name = "NODE")]
        blocked: Vec<char>,
    },

    /// 2D maze with random walls
    Maze {
        /// Side length of the square maze (15, 25 and 35 are the usual sizes)
        #[arg(long, default_value_t = 25)]
        size: usize,

        /// Percentage of cells turned into walls
        #[arg(short = 'd', long, default_value_t = 30.0)]
        density: f64,

        /// Load the maze from a text file ('#' wall, '.' floor, 'S' start, 'G' goal)
        #[arg(short = 'f', long, value_name = "PATH")]
        maze_file: Option<PathBuf>,

        /// Start cell as ROW,COL
        #[arg(long, value_parser = parse_cell)]
        start: Option<Cell>,

        /// Goal cell as ROW,COL
        #[arg(long, value_parser = parse_cell)]
        goal: Option<Cell>,

        /// Toggle a wall at ROW,COL after generation (repeatable)
        #[arg(long = "wall", value_name = "ROW,COL", value_parser = parse_cell)]
        walls: Vec<Cell>,
    },

    /// Multi-level 3D maze
    Maze3d {
        /// Preset side length: 5 (5x5x3), 7 (7x7x3) or 9 (9x9x5)
        #[arg(long, default_value_t = 7)]
        size: usize,

        /// Override the number of levels from the preset
        #[arg(long)]
        levels: Option<usize>,

        /// Percentage of nodes turned into walls (0-40)
        #[arg(short = 'd', long, default_value_t = 20.0)]
        density: f64,
    },

    /// Linear analysis pipeline processed from both ends
    Pipeline {
        #[arg(long, default_value_t = 11)]
        stages: usize,
    },
}

pub fn parse_cell(value: &str) -> Result<Cell, String> {
    let (row, col) = value
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL but got '{}'", value))?;
    let row = row
        .trim()
        .parse()
        .map_err(|_| format!("invalid row in '{}'", value))?;
    let col = col
        .trim()
        .parse()
        .map_err(|_| format!("invalid column in '{}'", value))?;
    Ok(Cell::new(row, col))
}
