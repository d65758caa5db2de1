//! Search nodes and the frontier orderings that drive the search

use std::collections::VecDeque;
use std::fmt;

use crate::{Action, Cell};

/// One step of a candidate path.
///
/// `parent` is an index into the search's arena of expanded nodes.
/// The root node carries neither a parent nor an action; every other
/// node carries both. Nodes are never mutated after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchNode {
    pub state: Cell,
    pub parent: Option<usize>,
    pub action: Option<Action>,
}

/// `remove` was called on an empty frontier.
///
/// The search loop checks [`Frontier::is_empty`] before every removal,
/// so this error only occurs when that contract is broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyFrontierError;

impl fmt::Display for EmptyFrontierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "remove called on an empty frontier")
    }
}

impl std::error::Error for EmptyFrontierError {}

/// An ordered collection of nodes waiting to be expanded.
///
/// Insertion order is preserved as given; duplicate states are not
/// suppressed here, so callers check
/// [`contains_state`](Frontier::contains_state) before adding.
pub trait Frontier {
    /// Append a node.
    fn add(&mut self, node: SearchNode);

    /// Take the next node per this frontier's removal policy.
    fn remove(&mut self) -> Result<SearchNode, EmptyFrontierError>;

    /// True if any held node has the given state.
    fn contains_state(&self, state: Cell) -> bool;

    /// True if no nodes are held.
    fn is_empty(&self) -> bool;
}

/// Last in, first out: drives a depth-first search, which follows one
/// branch to exhaustion before backtracking. Makes no shortest-path
/// promise.
#[derive(Debug, Default)]
pub struct StackFrontier {
    nodes: Vec<SearchNode>,
}

impl StackFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for StackFrontier {
    fn add(&mut self, node: SearchNode) {
        self.nodes.push(node);
    }

    fn remove(&mut self) -> Result<SearchNode, EmptyFrontierError> {
        self.nodes.pop().ok_or(EmptyFrontierError)
    }

    fn contains_state(&self, state: Cell) -> bool {
        self.nodes.iter().any(|node| node.state == state)
    }

    fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// First in, first out: drives a breadth-first search. All states at
/// distance `d` are expanded before any at `d + 1`, so the first
/// solution found uses the fewest actions possible.
#[derive(Debug, Default)]
pub struct QueueFrontier {
    nodes: VecDeque<SearchNode>,
}

impl QueueFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for QueueFrontier {
    fn add(&mut self, node: SearchNode) {
        self.nodes.push_back(node);
    }

    fn remove(&mut self) -> Result<SearchNode, EmptyFrontierError> {
        self.nodes.pop_front().ok_or(EmptyFrontierError)
    }

    fn contains_state(&self, state: Cell) -> bool {
        self.nodes.iter().any(|node| node.state == state)
    }

    fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(row: usize, col: usize) -> SearchNode {
        SearchNode {
            state: Cell::new(row, col),
            parent: None,
            action: None,
        }
    }

    #[test]
    fn stack_removes_last_added() {
        let mut frontier = StackFrontier::new();
        frontier.add(node(0, 0));
        frontier.add(node(0, 1));
        frontier.add(node(0, 2));

        assert_eq!(frontier.remove().unwrap().state, Cell::new(0, 2));
        assert_eq!(frontier.remove().unwrap().state, Cell::new(0, 1));
        assert_eq!(frontier.remove().unwrap().state, Cell::new(0, 0));
        assert!(frontier.is_empty());
    }

    #[test]
    fn queue_removes_first_added() {
        let mut frontier = QueueFrontier::new();
        frontier.add(node(0, 0));
        frontier.add(node(0, 1));
        frontier.add(node(0, 2));

        assert_eq!(frontier.remove().unwrap().state, Cell::new(0, 0));
        assert_eq!(frontier.remove().unwrap().state, Cell::new(0, 1));
        assert_eq!(frontier.remove().unwrap().state, Cell::new(0, 2));
        assert!(frontier.is_empty());
    }

    #[test]
    fn contains_state_tracks_membership() {
        let mut frontier = QueueFrontier::new();
        frontier.add(node(1, 2));

        assert!(frontier.contains_state(Cell::new(1, 2)));
        assert!(!frontier.contains_state(Cell::new(2, 1)));

        frontier.remove().unwrap();
        assert!(!frontier.contains_state(Cell::new(1, 2)));
    }

    #[test]
    fn remove_on_empty_fails() {
        let mut stack = StackFrontier::new();
        assert_eq!(stack.remove(), Err(EmptyFrontierError));

        let mut queue = QueueFrontier::new();
        assert_eq!(queue.remove(), Err(EmptyFrontierError));
    }
}
