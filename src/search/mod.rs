//! Search module
//!
//! Contains:
//! - Scoped move placement with guaranteed undo
//! - Minimax with alpha-beta pruning and root move selection

pub mod alphabeta;
pub mod scoped;

pub use alphabeta::{SearchConfig, SearchResult, SearchStats, Searcher, INF};
pub use scoped::ScopedMove;
