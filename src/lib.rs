//! Find a path through a maze described as a character grid
//!
//! A [`Maze`] is parsed from line-delimited text: one start marker, one
//! goal marker, blanks for open floor, and any other character for a
//! wall. [`Maze::solve`] then runs an uninformed search over the grid,
//! driven by an interchangeable [`Frontier`]: a [`StackFrontier`] gives
//! depth-first traversal, a [`QueueFrontier`] breadth-first (whose first
//! hit is also a path with the fewest actions).
//!
//! # Examples
//! ## Solving a corridor
//! ```
//! use maze_search::{Maze, QueueFrontier};
//!
//! let text = "\
//! #A#
//! ## #
//! #B#";
//! let mut maze = Maze::parse(text).unwrap();
//! let solution = maze.solve(QueueFrontier::new()).unwrap();
//! assert_eq!(solution.actions.len(), 2);
//! ```
//!
//! ## An unreachable goal is an expected outcome
//! ```
//! use maze_search::{Maze, SearchError, StackFrontier};
//!
//! let mut maze = Maze::parse("A#B").unwrap();
//! assert_eq!(maze.solve(StackFrontier::new()).err(), Some(SearchError::NoSolution));
//! assert_eq!(maze.num_expanded(), 1);
//! ```

use std::collections::HashSet;
use std::fmt;

use itertools::Itertools;

pub mod frontier;
#[cfg(feature = "mapgen")]
pub mod maze_generator;
pub mod render;

pub use frontier::{EmptyFrontierError, Frontier, QueueFrontier, SearchNode, StackFrontier};

/// Location in the maze, 0-indexed, row increasing downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A move between two adjacent cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Action::Up => "up",
                Action::Down => "down",
                Action::Left => "left",
                Action::Right => "right",
            }
        )
    }
}

/// Characters used to interpret the maze text.
///
/// Any in-bounds character that is not the start, goal, or floor symbol
/// is a wall, and so is every position past the end of a short row.
#[derive(Debug, Clone, Copy)]
pub struct Symbols {
    pub start: char,
    pub goal: char,
    pub floor: char,
}

impl Default for Symbols {
    fn default() -> Self {
        Self {
            start: 'A',
            goal: 'B',
            floor: ' ',
        }
    }
}

/// The maze text does not describe a usable maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedMazeError {
    /// The text did not contain exactly one start marker.
    StartMarkers(usize),
    /// The text did not contain exactly one goal marker.
    GoalMarkers(usize),
}

impl fmt::Display for MalformedMazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedMazeError::StartMarkers(n) => {
                write!(f, "maze must have exactly one start marker, found {n}")
            }
            MalformedMazeError::GoalMarkers(n) => {
                write!(f, "maze must have exactly one goal marker, found {n}")
            }
        }
    }
}

impl std::error::Error for MalformedMazeError {}

/// Why a [`Maze::solve`] call produced no solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// The frontier was exhausted: the goal is unreachable from the
    /// start. The explored set and expansion count remain readable on
    /// the maze afterwards.
    NoSolution,
    /// A node was removed from an empty frontier. The search loop
    /// checks for emptiness before every removal, so this only signals
    /// a broken [`Frontier`] implementation.
    EmptyFrontier(EmptyFrontierError),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::NoSolution => write!(f, "no path from start to goal"),
            SearchError::EmptyFrontier(e) => write!(f, "frontier contract violated: {e}"),
        }
    }
}

impl std::error::Error for SearchError {}

impl From<EmptyFrontierError> for SearchError {
    fn from(e: EmptyFrontierError) -> Self {
        SearchError::EmptyFrontier(e)
    }
}

/// What a renderer should draw at a cell.
///
/// Variants are listed in decreasing priority: the start cell is
/// reported as `Start` even though it was also explored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Wall,
    Start,
    Goal,
    /// On the solution path (start and goal excluded).
    Path,
    /// Expanded during the last search, but not on the path.
    Explored,
    Open,
}

/// The path found by a search, from start (exclusive) to goal
/// (inclusive), in traversal order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub actions: Vec<Action>,
    pub cells: Vec<Cell>,
}

impl Solution {
    /// Print a one-line summary to the console.
    pub fn print_report(&self) {
        println!(
            "Found a path of {} steps: {}",
            self.actions.len(),
            self.actions.iter().join(", ")
        );
    }
}

/// A rectangular maze with one start and one goal cell.
///
/// The grid itself is immutable after parsing; solving stores the
/// resulting [`Solution`], the explored set, and the expansion count
/// on the maze for later rendering and inspection.
pub struct Maze {
    height: usize,
    width: usize,
    /// `true` marks an impassable cell.
    walls: Vec<Vec<bool>>,
    start: Cell,
    goal: Cell,
    symbols: Symbols,
    solution: Option<Solution>,
    explored: HashSet<Cell>,
    num_expanded: usize,
}

impl Maze {
    /// Parse maze text with the default symbols (`A`, `B`, space).
    pub fn parse(text: &str) -> Result<Self, MalformedMazeError> {
        Self::parse_with(text, Symbols::default())
    }

    /// Parse maze text with custom symbols.
    ///
    /// The width is the length of the longest line; lines shorter than
    /// that are padded with walls rather than floor, so ragged input
    /// never opens an accidental corridor along the right edge.
    pub fn parse_with(text: &str, symbols: Symbols) -> Result<Self, MalformedMazeError> {
        let starts = text.chars().filter(|&c| c == symbols.start).count();
        if starts != 1 {
            return Err(MalformedMazeError::StartMarkers(starts));
        }
        let goals = text.chars().filter(|&c| c == symbols.goal).count();
        if goals != 1 {
            return Err(MalformedMazeError::GoalMarkers(goals));
        }

        let rows: Vec<Vec<char>> = text.lines().map(|line| line.chars().collect()).collect();
        let height = rows.len();
        let width = rows.iter().map(|row| row.len()).max().unwrap_or(0);

        let mut start = None;
        let mut goal = None;
        let mut walls = Vec::with_capacity(height);
        for (row, chars) in rows.iter().enumerate() {
            let mut mask = Vec::with_capacity(width);
            for col in 0..width {
                let wall = match chars.get(col) {
                    Some(&c) if c == symbols.start => {
                        start = Some(Cell::new(row, col));
                        false
                    }
                    Some(&c) if c == symbols.goal => {
                        goal = Some(Cell::new(row, col));
                        false
                    }
                    Some(&c) if c == symbols.floor => false,
                    // Missing characters on short rows are walls too.
                    _ => true,
                };
                mask.push(wall);
            }
            walls.push(mask);
        }

        match (start, goal) {
            (Some(start), Some(goal)) => Ok(Maze {
                height,
                width,
                walls,
                start,
                goal,
                symbols,
                solution: None,
                explored: HashSet::new(),
                num_expanded: 0,
            }),
            (None, _) => Err(MalformedMazeError::StartMarkers(0)),
            (_, None) => Err(MalformedMazeError::GoalMarkers(0)),
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn goal(&self) -> Cell {
        self.goal
    }

    pub fn symbols(&self) -> Symbols {
        self.symbols
    }

    /// The solution found by the most recent [`solve`](Self::solve),
    /// if any search has run and succeeded.
    pub fn solution(&self) -> Option<&Solution> {
        self.solution.as_ref()
    }

    /// States expanded by the most recent search.
    pub fn explored(&self) -> &HashSet<Cell> {
        &self.explored
    }

    /// Number of nodes removed from the frontier by the most recent
    /// search. Diagnostic only; does not affect the result.
    pub fn num_expanded(&self) -> usize {
        self.num_expanded
    }

    /// True if `cell` is out of bounds or marked as a wall.
    pub fn is_wall(&self, cell: Cell) -> bool {
        cell.row >= self.height || cell.col >= self.width || self.walls[cell.row][cell.col]
    }

    /// The in-bounds, non-wall cells adjacent to `cell`, each paired
    /// with the action that reaches it.
    ///
    /// Always in up, down, left, right order. The order is observable:
    /// it decides which of several equally long paths a depth-first
    /// search commits to.
    pub fn neighbors(&self, cell: Cell) -> Vec<(Action, Cell)> {
        let Cell { row, col } = cell;
        let candidates = [
            (Action::Up, row.checked_sub(1).map(|r| Cell::new(r, col))),
            (Action::Down, Some(Cell::new(row + 1, col))),
            (Action::Left, col.checked_sub(1).map(|c| Cell::new(row, c))),
            (Action::Right, Some(Cell::new(row, col + 1))),
        ];
        candidates
            .into_iter()
            .filter_map(|(action, cell)| cell.filter(|&c| !self.is_wall(c)).map(|c| (action, c)))
            .collect()
    }

    /// Classification of `cell` for rendering.
    pub fn classify(&self, cell: Cell) -> CellKind {
        if self.is_wall(cell) {
            CellKind::Wall
        } else if cell == self.start {
            CellKind::Start
        } else if cell == self.goal {
            CellKind::Goal
        } else if self
            .solution
            .as_ref()
            .is_some_and(|solution| solution.cells.contains(&cell))
        {
            CellKind::Path
        } else if self.explored.contains(&cell) {
            CellKind::Explored
        } else {
            CellKind::Open
        }
    }

    /// Search for a path from the start to the goal.
    ///
    /// `frontier` decides the traversal order and should be freshly
    /// constructed; any previous solution, explored set, and expansion
    /// count on the maze are discarded first.
    ///
    /// On [`SearchError::NoSolution`] the explored set and expansion
    /// count still describe the finished search, so an unsolved maze
    /// can be rendered afterwards.
    pub fn solve<F: Frontier>(&mut self, mut frontier: F) -> Result<&Solution, SearchError> {
        self.solution = None;
        self.explored.clear();
        self.num_expanded = 0;

        // Expanded nodes move from the frontier into this arena;
        // parent links are indices into it, so a child node stays
        // valid after its parent has left the frontier.
        let mut expanded: Vec<SearchNode> = Vec::new();

        frontier.add(SearchNode {
            state: self.start,
            parent: None,
            action: None,
        });

        loop {
            if frontier.is_empty() {
                return Err(SearchError::NoSolution);
            }
            let node = frontier.remove()?;
            self.num_expanded += 1;

            if node.state == self.goal {
                // Walk the parent chain back to the root, which itself
                // contributes neither an action nor a cell.
                let mut actions = Vec::new();
                let mut cells = Vec::new();
                let mut current = node;
                while let (Some(parent), Some(action)) = (current.parent, current.action) {
                    actions.push(action);
                    cells.push(current.state);
                    current = expanded[parent];
                }
                actions.reverse();
                cells.reverse();
                return Ok(self.solution.insert(Solution { actions, cells }));
            }

            // States are marked explored when removed, not when added;
            // the contains_state check below covers the queued ones.
            self.explored.insert(node.state);
            let index = expanded.len();
            expanded.push(node);

            for (action, state) in self.neighbors(node.state) {
                if !self.explored.contains(&state) && !frontier.contains_state(state) {
                    frontier.add(SearchNode {
                        state,
                        parent: Some(index),
                        action: Some(action),
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_single_row() {
        let maze = Maze::parse("A B").unwrap();
        assert_eq!(maze.height(), 1);
        assert_eq!(maze.width(), 3);
        assert_eq!(maze.start(), Cell::new(0, 0));
        assert_eq!(maze.goal(), Cell::new(0, 2));
        assert!(!maze.is_wall(Cell::new(0, 1)));
    }

    #[test]
    fn parse_rejects_duplicate_start() {
        assert_eq!(
            Maze::parse("AA B").err(),
            Some(MalformedMazeError::StartMarkers(2))
        );
    }

    #[test]
    fn parse_rejects_missing_goal() {
        assert_eq!(
            Maze::parse("A  ").err(),
            Some(MalformedMazeError::GoalMarkers(0))
        );
    }

    #[test]
    fn parse_with_custom_symbols() {
        let symbols = Symbols {
            start: 'S',
            goal: 'G',
            floor: '.',
        };
        let maze = Maze::parse_with("S.G", symbols).unwrap();
        assert_eq!(maze.start(), Cell::new(0, 0));
        assert_eq!(maze.goal(), Cell::new(0, 2));
        assert!(!maze.is_wall(Cell::new(0, 1)));
    }

    #[test]
    fn short_rows_pad_as_walls() {
        let maze = Maze::parse("A\n  B").unwrap();
        assert_eq!(maze.width(), 3);
        assert!(maze.is_wall(Cell::new(0, 1)));
        assert!(maze.is_wall(Cell::new(0, 2)));
        assert!(!maze.is_wall(Cell::new(1, 0)));
    }

    #[test]
    fn out_of_bounds_is_wall() {
        let maze = Maze::parse("AB").unwrap();
        assert!(maze.is_wall(Cell::new(0, 2)));
        assert!(maze.is_wall(Cell::new(1, 0)));
    }

    #[test]
    fn neighbors_order_is_fixed() {
        let maze = Maze::parse("A  \n   \n  B").unwrap();
        let expected = vec![
            (Action::Down, Cell::new(1, 0)),
            (Action::Right, Cell::new(0, 1)),
        ];
        assert_eq!(maze.neighbors(Cell::new(0, 0)), expected);
        // Repeated queries on an unmodified maze are identical.
        assert_eq!(maze.neighbors(Cell::new(0, 0)), expected);

        assert_eq!(
            maze.neighbors(Cell::new(1, 1)),
            vec![
                (Action::Up, Cell::new(0, 1)),
                (Action::Down, Cell::new(2, 1)),
                (Action::Left, Cell::new(1, 0)),
                (Action::Right, Cell::new(1, 2)),
            ]
        );
    }

    #[test]
    fn bfs_solves_straight_corridor() {
        let mut maze = Maze::parse("A B").unwrap();
        let solution = maze.solve(QueueFrontier::new()).unwrap().clone();
        assert_eq!(solution.actions, vec![Action::Right, Action::Right]);
        assert_eq!(solution.cells, vec![Cell::new(0, 1), Cell::new(0, 2)]);
        assert_eq!(maze.num_expanded(), 3);
    }

    #[test]
    fn bfs_finds_shortest_path_on_open_grid() {
        let mut maze = Maze::parse("A  \n   \nB  ").unwrap();
        let solution = maze.solve(QueueFrontier::new()).unwrap().clone();
        // Manhattan distance from (0,0) to (2,0).
        assert_eq!(solution.actions, vec![Action::Down, Action::Down]);
    }

    #[test]
    fn dfs_follows_neighbor_order() {
        let mut maze = Maze::parse("A  \n   \nB  ").unwrap();
        let solution = maze.solve(StackFrontier::new()).unwrap().clone();
        // The stack pops the most recently added neighbor first, so
        // depth-first heads right along the top edge and comes back
        // along the bottom.
        assert_eq!(
            solution.actions,
            vec![
                Action::Right,
                Action::Right,
                Action::Down,
                Action::Down,
                Action::Left,
                Action::Left,
            ]
        );
        assert_eq!(maze.num_expanded(), 7);
    }

    #[test]
    fn solution_cells_are_adjacent_floor() {
        let text = "#A###\n#   #\n### #\n#B  #\n#####";
        let mut maze = Maze::parse(text).unwrap();
        let solution = maze.solve(StackFrontier::new()).unwrap().clone();

        let mut previous = maze.start();
        for &cell in &solution.cells {
            assert!(!maze.is_wall(cell));
            assert!(maze.neighbors(previous).iter().any(|&(_, c)| c == cell));
            previous = cell;
        }
        assert_eq!(previous, maze.goal());
    }

    #[test]
    fn unreachable_goal_reports_no_solution() {
        let mut maze = Maze::parse("A \n##\n B").unwrap();
        assert_eq!(
            maze.solve(QueueFrontier::new()).err(),
            Some(SearchError::NoSolution)
        );
        // Every cell reachable from the start was expanded exactly once.
        assert_eq!(maze.num_expanded(), 2);
        assert_eq!(maze.explored().len(), 2);
        assert!(maze.explored().contains(&Cell::new(0, 0)));
        assert!(maze.explored().contains(&Cell::new(0, 1)));
        assert!(maze.solution().is_none());
    }

    #[test]
    fn solve_resets_previous_results() {
        let mut maze = Maze::parse("A  \n   \nB  ").unwrap();
        maze.solve(StackFrontier::new()).unwrap();
        let dfs_expanded = maze.num_expanded();

        let solution = maze.solve(QueueFrontier::new()).unwrap().clone();
        assert_eq!(solution.actions.len(), 2);
        assert!(maze.num_expanded() < dfs_expanded);
    }

    #[test]
    fn classify_after_solving() {
        let mut maze = Maze::parse("A #\n  #\n# B").unwrap();
        maze.solve(QueueFrontier::new()).unwrap();
        assert_eq!(maze.classify(Cell::new(0, 0)), CellKind::Start);
        assert_eq!(maze.classify(Cell::new(2, 2)), CellKind::Goal);
        assert_eq!(maze.classify(Cell::new(0, 2)), CellKind::Wall);
        assert_eq!(maze.classify(Cell::new(1, 0)), CellKind::Path);
        assert_eq!(maze.classify(Cell::new(0, 1)), CellKind::Explored);
    }

    #[test]
    fn action_display_is_lowercase() {
        assert_eq!(Action::Up.to_string(), "up");
        assert_eq!(Action::Right.to_string(), "right");
    }
}
