//! CLI for maze solving

use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use maze_search::{render, Maze, QueueFrontier, SearchError, StackFrontier};

/// Search for a path through a text-format maze
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Traversal strategy
    #[arg(short, long, value_enum, default_value = "dfs")]
    strategy: Strategy,

    /// Mark explored cells in the output
    #[arg(short = 'e', long)]
    show_explored: bool,

    /// Write a bitmap rendering to this file
    #[arg(short, long)]
    image: Option<PathBuf>,

    /// File, where to read the maze. Use `-` for stdin.
    file: PathBuf,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Strategy {
    /// Depth-first search (stack frontier)
    Dfs,
    /// Breadth-first search (queue frontier); finds a shortest path
    Bfs,
}

/// Read maze from file, print output
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let text = if args.file.to_str() == Some("-") {
        let mut buf = String::new();
        io::stdin().lock().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(&args.file)?
    };
    let mut maze = Maze::parse(&text)?;

    println!("Maze:");
    println!("{}", render::render_ascii(&maze, false));

    let outcome = match args.strategy {
        Strategy::Dfs => maze.solve(StackFrontier::new()).map(drop),
        Strategy::Bfs => maze.solve(QueueFrontier::new()).map(drop),
    };

    println!("States expanded: {}", maze.num_expanded());
    match outcome {
        Ok(()) => {
            println!("Solution:");
            println!("{}", render::render_ascii(&maze, args.show_explored));
            if let Some(solution) = maze.solution() {
                solution.print_report();
            }
        }
        // Still render and export below, so a dead end can be inspected.
        Err(SearchError::NoSolution) => println!("No path from start to goal."),
        Err(err) => return Err(err.into()),
    }

    if let Some(path) = &args.image {
        render::save_image(&maze, path, true, args.show_explored)
            .with_context(|| format!("could not write image to {}", path.display()))?;
        println!("Image written to {}", path.display());
    }
    Ok(())
}
