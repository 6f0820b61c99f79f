//! Best-first search over board configurations: nodes, arena tree, frontier.

pub mod node;
pub mod tree;

pub use node::{Node, NodeId};
pub use tree::{SearchTree, Step};
