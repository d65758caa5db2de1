//! Maze generation

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::Symbols;

/// Generator for random mazes in the solver's text format.
pub struct MazeGenerator {
    random: StdRng,
    symbols: Symbols,
}

impl MazeGenerator {
    const DIRECTIONS: [(i32, i32); 4] = [(0, 2), (2, 0), (0, -2), (-2, 0)];
    const WALL: char = '#';

    pub fn new(seed: Option<u64>) -> Self {
        Self {
            random: match seed {
                Some(state) => StdRng::seed_from_u64(state),
                None => StdRng::from_entropy(),
            },
            symbols: Symbols::default(),
        }
    }

    /// Generate a simple imperfect maze (a maze with loops).
    ///
    /// The start marker lands on a carved floor cell near the top of
    /// the grid and the goal on one near the bottom. Carved cells form
    /// a single connected region, so the result is always solvable.
    /// `height` and `width` should be odd and at least 7.
    pub fn generate_maze(&mut self, height: usize, width: usize) -> Vec<Vec<char>> {
        let mut grid: Vec<Vec<char>> = vec![vec![Self::WALL; width]; height];

        // Carve from a random odd cell
        let carve_col = 1 + self.random.gen_range(1..(width / 2 - 1)) * 2;
        let carve_row = 1 + self.random.gen_range(1..(height / 2 - 1)) * 2;
        grid[carve_row][carve_col] = self.symbols.floor;

        self.build_maze(&mut grid, carve_col, carve_row, width, height);

        // Place the start in the top quarter and the goal in the
        // bottom quarter, scanning to the nearest carved floor cell.
        let mut s_pos = self.random.gen_range(0..(width * height) / 4);
        while grid[s_pos / width][s_pos % width] != self.symbols.floor {
            s_pos += 1;
        }
        grid[s_pos / width][s_pos % width] = self.symbols.start;

        let mut g_pos = self
            .random
            .gen_range((width * height) * 3 / 4..width * height);
        while grid[g_pos / width][g_pos % width] != self.symbols.floor {
            g_pos -= 1;
        }
        grid[g_pos / width][g_pos % width] = self.symbols.goal;

        grid
    }

    /// Build maze recursively
    ///
    /// From the current position, go into random directions. Carve out
    /// walls if there is wall behind the carved area (or at random,
    /// skip this check). This randomness allows creation of imperfect
    /// mazes.
    fn build_maze(
        &mut self,
        grid: &mut Vec<Vec<char>>,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    ) {
        let mut directions = Self::DIRECTIONS.to_vec();
        directions.shuffle(&mut self.random);

        for (dx, dy) in directions {
            let nx = (x as i32 + dx) as usize;
            let ny = (y as i32 + dy) as usize;

            if nx < width
                && ny < height
                && (grid[ny][nx] == Self::WALL || self.random.gen_bool(0.05))
            {
                // Remove wall between current cell and neighbor
                grid[(y as i32 + dy / 2) as usize][(x as i32 + dx / 2) as usize] =
                    self.symbols.floor;
                grid[ny][nx] = self.symbols.floor;

                self.build_maze(grid, nx, ny, width, height);
            }
        }
    }
}
