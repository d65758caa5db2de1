//! ASCII and bitmap renderings of a maze and its search results
//!
//! Renderers only read the maze through [`Maze::classify`], so they
//! work the same on unsolved, solved, and unsolvable mazes.

use std::path::Path;

use image::{Rgb, RgbImage};
use itertools::Itertools;

use crate::{Cell, CellKind, Maze};

/// Side length of one cell in the bitmap, in pixels.
const CELL_SIZE: u32 = 50;
/// Gap left between cells in the bitmap, in pixels.
const CELL_BORDER: u32 = 2;

const WALL_FILL: Rgb<u8> = Rgb([40, 40, 40]);
const START_FILL: Rgb<u8> = Rgb([0, 255, 0]);
const GOAL_FILL: Rgb<u8> = Rgb([255, 0, 0]);
const PATH_FILL: Rgb<u8> = Rgb([255, 255, 0]);
const EXPLORED_FILL: Rgb<u8> = Rgb([212, 97, 85]);
const OPEN_FILL: Rgb<u8> = Rgb([0, 0, 0]);

/// Render the maze as text, one character per cell, rows separated by
/// newlines.
///
/// Walls are `█`, the start and goal keep their parse symbols, cells
/// on the solution path are `*`, and explored cells are `.` when
/// `show_explored` is set.
pub fn render_ascii(maze: &Maze, show_explored: bool) -> String {
    let symbols = maze.symbols();
    (0..maze.height())
        .map(|row| {
            (0..maze.width())
                .map(|col| match maze.classify(Cell::new(row, col)) {
                    CellKind::Wall => '█',
                    CellKind::Start => symbols.start,
                    CellKind::Goal => symbols.goal,
                    CellKind::Path => '*',
                    CellKind::Explored if show_explored => '.',
                    CellKind::Explored | CellKind::Open => ' ',
                })
                .collect::<String>()
        })
        .join("\n")
}

/// Render the maze as a bitmap, one 50-pixel square per cell with a
/// 2-pixel border between cells.
pub fn render_image(maze: &Maze, show_solution: bool, show_explored: bool) -> RgbImage {
    let mut img = RgbImage::from_pixel(
        maze.width() as u32 * CELL_SIZE,
        maze.height() as u32 * CELL_SIZE,
        OPEN_FILL,
    );

    for row in 0..maze.height() {
        for col in 0..maze.width() {
            let fill = match maze.classify(Cell::new(row, col)) {
                CellKind::Wall => WALL_FILL,
                CellKind::Start => START_FILL,
                CellKind::Goal => GOAL_FILL,
                CellKind::Path if show_solution => PATH_FILL,
                // With the solution hidden, path cells were still explored.
                CellKind::Path | CellKind::Explored if show_explored => EXPLORED_FILL,
                CellKind::Path | CellKind::Explored | CellKind::Open => OPEN_FILL,
            };

            let x0 = col as u32 * CELL_SIZE;
            let y0 = row as u32 * CELL_SIZE;
            for dy in 0..CELL_SIZE - CELL_BORDER {
                for dx in 0..CELL_SIZE - CELL_BORDER {
                    img.put_pixel(x0 + dx, y0 + dy, fill);
                }
            }
        }
    }

    img
}

/// Render the maze and write the bitmap to `path`. The image format is
/// chosen from the file extension.
pub fn save_image(
    maze: &Maze,
    path: &Path,
    show_solution: bool,
    show_explored: bool,
) -> image::ImageResult<()> {
    render_image(maze, show_solution, show_explored).save(path)
}
