//! Arena-owned search tree with a best-first frontier and visited index.

use std::{
    cmp::Ordering,
    collections::{BinaryHeap, HashMap},
};

use super::node::{Node, NodeId};
use crate::puzzle::Board;

/// Result of one frontier expansion step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The popped node satisfies the goal test; the search is over.
    Found,
    /// The frontier still holds unexpanded nodes.
    Continue,
    /// The frontier is empty; the reachable space is exhausted.
    Exhausted,
}

/// Frontier entry ordered for a min-heap on `(f, g, seq)`.
///
/// `seq` is the insertion sequence number. Children are pushed in the fixed
/// move-generation order, so the sequence tie-break makes repeated runs on
/// identical input pop identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FrontierEntry {
    f: u32,
    g: u32,
    seq: u64,
    id: NodeId,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so that std's max-heap pops the smallest entry:
        // lowest f first, then lowest g, then earliest insertion.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.g.cmp(&self.g))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The full state of one best-first search.
///
/// The tree owns every node created during expansion in an arena; nodes are
/// never freed individually mid-search and parent links are arena indices.
/// Alongside the arena it maintains the frontier, the visited-configuration
/// index (board -> lowest `g` reached), a running best-node tracker for
/// best-effort results, and - once the goal is found - the materialized
/// solution path with a playback cursor.
#[derive(Debug, Clone)]
pub struct SearchTree {
    nodes: Vec<Node>,
    frontier: BinaryHeap<FrontierEntry>,
    visited: HashMap<Board, u32>,
    seq: u64,
    current: Option<NodeId>,
    best: NodeId,
    path: Option<Vec<Board>>,
    cursor: usize,
}

impl SearchTree {
    /// Initialize a tree with a single root node at `g = 0`.
    ///
    /// The root is pushed onto the frontier and registered in the visited
    /// index, ready for [`step`] to drive the search.
    ///
    /// [`step`]: SearchTree::step
    pub fn with_root(board: Board) -> Self {
        let root = Node::root(board);
        let mut tree = SearchTree {
            nodes: Vec::new(),
            frontier: BinaryHeap::new(),
            visited: HashMap::new(),
            seq: 0,
            current: None,
            best: NodeId(0),
            path: None,
            cursor: 0,
        };
        tree.register(root);
        tree
    }

    /// Store a node in the arena, index it as visited, and push it onto the
    /// frontier.
    fn register(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.visited.insert(node.board, node.g);
        self.frontier.push(FrontierEntry {
            f: node.f(),
            g: node.g,
            seq: self.seq,
            id,
        });
        self.seq += 1;
        self.nodes.push(node);
        id
    }

    /// Pop the most promising frontier node and expand it.
    ///
    /// If the popped node's board is the goal, the current node is set and
    /// [`Step::Found`] is returned without expanding further. Otherwise each
    /// candidate child whose configuration is new, or reached at a strictly
    /// lower `g` than before, is registered and pushed; the running
    /// minimum-heuristic tracker is updated as children appear.
    pub fn step(&mut self) -> Step {
        let id = loop {
            let Some(entry) = self.frontier.pop() else {
                return Step::Exhausted;
            };
            let node = self.nodes[entry.id.index()];
            // A configuration re-reached at lower g leaves its older, deeper
            // frontier entry behind; skip such stale entries on pop.
            if self
                .visited
                .get(&node.board)
                .is_some_and(|&best_g| node.g > best_g)
            {
                continue;
            }
            break entry.id;
        };

        let node = self.nodes[id.index()];
        if node.board.is_goal() {
            self.current = Some(id);
            return Step::Found;
        }

        for child in node.expand(id) {
            let keep = match self.visited.get(&child.board) {
                None => true,
                Some(&best_g) => child.g < best_g,
            };
            if !keep {
                continue;
            }
            let child_id = self.register(child);
            if child.h < self.nodes[self.best.index()].h {
                self.best = child_id;
            }
        }

        if self.frontier.is_empty() {
            Step::Exhausted
        } else {
            Step::Continue
        }
    }

    /// Count of nodes ever created, including the root.
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// The goal-satisfying node, once [`step`] has returned [`Step::Found`].
    ///
    /// [`step`]: SearchTree::step
    pub fn current(&self) -> Option<NodeId> {
        self.current
    }

    /// Read a node from the arena.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Board of the lowest-heuristic node seen so far.
    ///
    /// Serves as the best-effort result when the search is cut off by
    /// budget or cancellation.
    pub fn best_board(&self) -> Board {
        self.nodes[self.best.index()].board
    }

    /// Materialize the solution path by walking parent links from
    /// `goal_node` back to the root and reversing.
    ///
    /// The path holds the board after each move, ordered root-to-goal; the
    /// root board itself is not part of the path, so an already-solved root
    /// yields an empty path. Resets the playback cursor.
    pub fn set_solution_path(&mut self, goal_node: NodeId) {
        let mut boards = Vec::new();
        let mut walk = Some(goal_node);
        while let Some(id) = walk {
            let node = self.node(id);
            if node.parent.is_some() {
                boards.push(node.board);
            }
            walk = node.parent;
        }
        boards.reverse();
        self.path = Some(boards);
        self.cursor = 0;
    }

    /// The materialized solution path, if any.
    pub fn solution_path(&self) -> Option<&[Board]> {
        self.path.as_deref()
    }

    /// Length of the materialized solution path.
    pub fn path_len(&self) -> usize {
        self.path.as_ref().map_or(0, Vec::len)
    }

    /// Advance the playback cursor one step and return the next board.
    ///
    /// The consumer is expected to call this exactly [`path_len`] times.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NoSolutionPath`] before a path has been set,
    /// and [`crate::Error::PathExhausted`] once the cursor passes the final
    /// element; the latter is a caller contract violation.
    ///
    /// [`path_len`]: SearchTree::path_len
    pub fn next_board(&mut self) -> Result<Board, crate::Error> {
        let path = self.path.as_ref().ok_or(crate::Error::NoSolutionPath)?;
        let board = *path.get(self.cursor).ok_or(crate::Error::PathExhausted {
            length: path.len(),
        })?;
        self.cursor += 1;
        Ok(board)
    }
}
