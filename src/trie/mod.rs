mod error;
mod insert;
mod node;
mod traversal;
mod tree;

pub use error::{TrieError, TrieResult};
pub use tree::{RouteEntry, RouteTree};
