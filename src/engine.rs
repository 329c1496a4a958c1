//! AI engine wrapping the search for the computer side
//!
//! The engine owns a [`Searcher`], runs it on a scratch copy of the position,
//! and reports the chosen move together with timing and node counts.
//!
//! # Example
//!
//! ```
//! use duel::board::Player;
//! use duel::rules::{ConnectFour, Rules};
//! use duel::AiEngine;
//!
//! let mut board = ConnectFour::new_board();
//! board.drop_disc(3, Player::First).unwrap();
//!
//! let mut engine = AiEngine::<ConnectFour>::with_max_depth(Some(3));
//! let result = engine.get_move_with_stats(&board);
//! println!("Best column: {:?}", result.best_move);
//! println!("Nodes: {} in {}ms", result.nodes, result.time_ms);
//! ```

use std::time::Instant;

use tracing::debug;

use crate::rules::Rules;
use crate::search::{SearchConfig, SearchResult, Searcher};

/// Result of a move search with statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult<M> {
    /// Best move found, if any
    pub best_move: Option<M>,
    /// Score of the position after the move
    pub score: i32,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of positions evaluated
    pub nodes: u64,
    /// Number of pruned sibling runs
    pub cutoffs: u64,
}

impl<M> MoveResult<M> {
    #[inline]
    fn from_search(result: SearchResult<M>, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            time_ms,
            nodes: result.stats.nodes,
            cutoffs: result.stats.cutoffs,
        }
    }
}

/// Computer opponent for one game.
#[derive(Debug, Clone)]
pub struct AiEngine<R: Rules> {
    searcher: Searcher<R>,
}

impl<R: Rules> AiEngine<R> {
    /// Engine with the game's default depth limit
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SearchConfig::for_rules::<R>())
    }

    #[must_use]
    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            searcher: Searcher::new(config),
        }
    }

    /// Engine with a custom depth limit (`None` searches to the end)
    #[must_use]
    pub fn with_max_depth(max_depth: Option<u8>) -> Self {
        Self::with_config(SearchConfig::for_rules::<R>().with_max_depth(max_depth))
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.searcher.config()
    }

    #[inline]
    pub fn max_depth(&self) -> Option<u8> {
        self.searcher.config().max_depth
    }

    pub fn set_max_depth(&mut self, max_depth: Option<u8>) {
        let config = self.searcher.config().with_max_depth(max_depth);
        self.searcher.set_config(config);
    }

    /// Best move for the computer, or `None` if the board is full.
    #[must_use]
    pub fn get_move(&mut self, board: &R::Board) -> Option<R::Move> {
        self.get_move_with_stats(board).best_move
    }

    /// Best move with search statistics.
    ///
    /// The caller's board is not touched; the search runs on a copy.
    pub fn get_move_with_stats(&mut self, board: &R::Board) -> MoveResult<R::Move> {
        let start = Instant::now();
        let mut work_board = board.clone();

        let result = self.searcher.select_move(&mut work_board);
        debug_assert_eq!(&work_board, board, "search left the board modified");

        let time_ms = start.elapsed().as_millis() as u64;
        debug!(
            game = R::NAME,
            best_move = ?result.best_move,
            score = result.score,
            nodes = result.stats.nodes,
            cutoffs = result.stats.cutoffs,
            time_ms,
            "computer move selected"
        );
        MoveResult::from_search(result, time_ms)
    }
}

impl<R: Rules> Default for AiEngine<R> {
    fn default() -> Self {
        Self::new()
    }
}
