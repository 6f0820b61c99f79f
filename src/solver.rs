//! Solver driver: orchestrates a search and exposes the outcome.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use crate::{
    puzzle::Board,
    search::{SearchTree, Step},
};

/// Default maximum number of nodes a search may create before giving up.
pub const DEFAULT_NODE_BUDGET: usize = 100_000;

/// Configuration for a solver run.
///
/// # Examples
///
/// ```
/// use tiles::solver::SolverConfig;
///
/// let config = SolverConfig::new().with_node_budget(50_000);
/// assert_eq!(config.node_budget, 50_000);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SolverConfig {
    /// Maximum number of search nodes to create before returning a
    /// best-effort result.
    pub node_budget: usize,
    /// Cooperative cancellation flag, checked between expansion steps.
    /// A caller running the solve on a worker thread sets it to abandon an
    /// unbounded search; cancellation reports the same best-effort
    /// semantics as budget exhaustion.
    pub cancel: Option<Arc<AtomicBool>>,
}

impl SolverConfig {
    /// Create a configuration with the default node budget and no
    /// cancellation flag.
    pub fn new() -> Self {
        Self {
            node_budget: DEFAULT_NODE_BUDGET,
            cancel: None,
        }
    }

    /// Set the node budget.
    pub fn with_node_budget(mut self, budget: usize) -> Self {
        self.node_budget = budget;
        self
    }

    /// Attach a cancellation flag.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }
}

/// Where the solver currently is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Idle,
    Searching,
    Solved,
    Unsolvable,
}

/// Final result of a solve, as a tagged variant rather than a nullable
/// current node.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// The goal was reached; the path holds the board after each move,
    /// ordered from the first move to the goal.
    Solved { path: Vec<Board> },
    /// The board is structurally unsolvable, or the search ran out of
    /// budget / was cancelled. The best-effort board is the
    /// lowest-heuristic configuration seen.
    Unsolvable { best_effort: Board },
}

/// Everything a presentation layer needs after a solve: the outcome, the
/// search tree (for size queries and path playback), and the total node
/// count.
#[derive(Debug)]
pub struct Solution {
    pub outcome: Outcome,
    pub tree: SearchTree,
    pub nodes_created: usize,
}

impl Solution {
    /// Length of the solution path; zero for unsolvable outcomes.
    pub fn path_len(&self) -> usize {
        match &self.outcome {
            Outcome::Solved { path } => path.len(),
            Outcome::Unsolvable { .. } => 0,
        }
    }

    /// True if the outcome is [`Outcome::Solved`].
    pub fn is_solved(&self) -> bool {
        matches!(self.outcome, Outcome::Solved { .. })
    }
}

/// Drives a best-first search to completion or exhaustion.
///
/// The lifecycle is `Idle -> Searching -> {Solved, Unsolvable}`; a solver
/// can be reused, returning to a terminal status after each [`solve`] call.
/// Given identical input board and budget, `solve` always produces the
/// same path.
///
/// A solve may be long-running on large budgets; invoke it off the thread
/// that drives presentation and hand the [`Solution`] back when finished.
///
/// [`solve`]: Solver::solve
#[derive(Debug)]
pub struct Solver {
    config: SolverConfig,
    status: Status,
}

impl Solver {
    /// Create an idle solver with the given configuration.
    pub fn new(config: SolverConfig) -> Self {
        Solver {
            config,
            status: Status::Idle,
        }
    }

    /// Current lifecycle status.
    pub fn status(&self) -> Status {
        self.status
    }

    fn cancelled(&self) -> bool {
        self.config
            .cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    /// Search for a move sequence from `initial` to the goal.
    ///
    /// A structurally unsolvable board is rejected by the analytic parity
    /// check up front, without creating any search frontier beyond the
    /// root; the initial board itself is the best-effort result. Otherwise
    /// the search expands until the goal is found, the reachable space is
    /// exhausted, the node budget is hit, or the cancellation flag is set.
    /// Budget and cancellation cut-offs are a safety net: the parity check
    /// normally guarantees a solvable input terminates with a solution.
    pub fn solve(&mut self, initial: Board) -> Solution {
        self.status = Status::Searching;

        let mut tree = SearchTree::with_root(initial);

        if !initial.is_solvable() {
            self.status = Status::Unsolvable;
            return Solution {
                outcome: Outcome::Unsolvable {
                    best_effort: initial,
                },
                nodes_created: tree.size(),
                tree,
            };
        }

        loop {
            if self.cancelled() || tree.size() >= self.config.node_budget {
                break;
            }
            match tree.step() {
                Step::Found => {
                    let goal = tree.current().expect("found step sets the current node");
                    tree.set_solution_path(goal);
                    let path = tree
                        .solution_path()
                        .expect("path was just materialized")
                        .to_vec();
                    self.status = Status::Solved;
                    return Solution {
                        outcome: Outcome::Solved { path },
                        nodes_created: tree.size(),
                        tree,
                    };
                }
                Step::Continue => {}
                Step::Exhausted => break,
            }
        }

        self.status = Status::Unsolvable;
        Solution {
            outcome: Outcome::Unsolvable {
                best_effort: tree.best_board(),
            },
            nodes_created: tree.size(),
            tree,
        }
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new(SolverConfig::new())
    }
}
