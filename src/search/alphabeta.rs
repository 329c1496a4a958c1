//! Minimax search with alpha-beta pruning
//!
//! One search routine serves both games. It is parameterized by the
//! [`Rules`] of the game (board shape, run length, move order) and an
//! optional depth cutoff from [`SearchConfig`].
//!
//! # Scoring
//!
//! Scores are from the maximizing player's point of view:
//! - maximizer has won: `WIN_BASE - depth`
//! - minimizer has won: `depth - WIN_BASE`
//! - full board, or depth cutoff reached: `0`
//!
//! Shallower wins score higher, so the engine prefers fast wins and slow
//! losses.
//!
//! # Example
//!
//! ```
//! use duel::board::Player;
//! use duel::rules::{Rules, TicTacToe};
//! use duel::search::{SearchConfig, Searcher};
//!
//! let mut board = TicTacToe::new_board();
//! board.place(4, Player::First).unwrap();
//!
//! let mut searcher = Searcher::<TicTacToe>::new(SearchConfig::for_rules::<TicTacToe>());
//! let result = searcher.select_move(&mut board);
//! assert_eq!(result.best_move, Some(0));
//! assert_eq!(result.score, 0);
//! ```

use std::marker::PhantomData;

use crate::board::Player;
use crate::rules::Rules;

use super::ScopedMove;

/// Infinity score for alpha-beta bounds
pub const INF: i32 = 1_000_000;

/// Search parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Depth at which an undecided position scores 0. `None` searches to the
    /// end of the game.
    pub max_depth: Option<u8>,
    /// Skip siblings once `beta <= alpha`
    pub pruning: bool,
}

impl SearchConfig {
    /// Defaults for a game: its own depth limit, pruning on
    pub fn for_rules<R: Rules>() -> Self {
        Self {
            max_depth: R::DEFAULT_MAX_DEPTH,
            pruning: true,
        }
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: Option<u8>) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }
}

/// Search statistics for diagnostics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions evaluated
    pub nodes: u64,
    /// Times the remaining siblings of a node were skipped
    pub cutoffs: u64,
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult<M> {
    /// Best move found, `None` when no legal move exists
    pub best_move: Option<M>,
    /// Score of the position after the best move
    pub score: i32,
    pub stats: SearchStats,
}

/// Minimax searcher for one game.
///
/// The searcher borrows the caller's board, plays hypothetical moves into it
/// and always hands it back unchanged.
#[derive(Debug, Clone)]
pub struct Searcher<R: Rules> {
    config: SearchConfig,
    maximizer: Player,
    stats: SearchStats,
    _rules: PhantomData<fn() -> R>,
}

impl<R: Rules> Searcher<R> {
    /// Searcher that chooses moves for [`Player::Second`], the computer
    pub fn new(config: SearchConfig) -> Self {
        Self::for_player(config, Player::Second)
    }

    /// Searcher that maximizes for `maximizer`
    pub fn for_player(config: SearchConfig, maximizer: Player) -> Self {
        Self {
            config,
            maximizer,
            stats: SearchStats::default(),
            _rules: PhantomData,
        }
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    #[inline]
    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    #[inline]
    pub fn maximizer(&self) -> Player {
        self.maximizer
    }

    /// Statistics accumulated since the last [`Searcher::select_move`]
    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Score the position reached by the mark at `last`.
    ///
    /// `maximizing` tells whose turn it is in this position: `true` when the
    /// maximizer is to move (so `last` was played by the minimizer).
    pub fn evaluate(
        &mut self,
        board: &mut R::Board,
        last: R::Pos,
        depth: i32,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.stats.nodes += 1;

        let side = if maximizing { self.maximizer } else { self.maximizer.opponent() };
        let mover = side.opponent();

        // Terminal: the previous mover just won
        if R::is_winning_move(board, last, mover) {
            return if mover == self.maximizer {
                R::WIN_BASE - depth
            } else {
                depth - R::WIN_BASE
            };
        }
        if R::is_board_full(board) {
            return 0;
        }
        if let Some(limit) = self.config.max_depth {
            if depth >= i32::from(limit) {
                return 0;
            }
        }

        let moves = R::legal_moves(board);
        if moves.is_empty() {
            return 0;
        }

        let mut best = if maximizing { -INF } else { INF };
        for mv in moves {
            let score = match ScopedMove::<R>::place(board, mv, side) {
                Ok(mut placed) => {
                    let pos = placed.pos();
                    self.evaluate(&mut *placed, pos, depth + 1, !maximizing, alpha, beta)
                }
                Err(_) => continue,
            };

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }

            if self.config.pruning && beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }
        best
    }

    /// Pick the best move for the maximizer.
    ///
    /// Every legal move is scored with a full window; the first move with the
    /// strictly highest score wins, so ties go to the earliest move in
    /// enumeration order.
    pub fn select_move(&mut self, board: &mut R::Board) -> SearchResult<R::Move> {
        self.stats = SearchStats::default();

        let mut best_move = None;
        let mut best_score = -INF;

        for mv in R::legal_moves(board) {
            let score = match ScopedMove::<R>::place(board, mv, self.maximizer) {
                Ok(mut placed) => {
                    let pos = placed.pos();
                    self.evaluate(&mut *placed, pos, 0, false, -INF, INF)
                }
                Err(_) => continue,
            };

            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
        }

        SearchResult {
            best_move,
            score: if best_move.is_some() { best_score } else { 0 },
            stats: self.stats,
        }
    }

    /// Score every legal root move, in enumeration order
    pub fn score_moves(&mut self, board: &mut R::Board) -> Vec<(R::Move, i32)> {
        let mut scored = Vec::new();
        for mv in R::legal_moves(board) {
            if let Ok(mut placed) = ScopedMove::<R>::place(board, mv, self.maximizer) {
                let pos = placed.pos();
                let score = self.evaluate(&mut *placed, pos, 0, false, -INF, INF);
                scored.push((mv, score));
            }
        }
        scored
    }
}
