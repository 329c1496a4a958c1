//! Game rules for tic-tac-toe and connect-four
//!
//! Each game supplies the same small capability set through [`Rules`]:
//! - Move generation in a fixed order
//! - Move application and undo
//! - Win detection through the last played cell
//! - Full-board detection

pub mod connect_four;
pub mod tictactoe;
pub mod win;

use std::fmt::Debug;
use std::hash::Hash;

use crate::board::Player;
use crate::error::MoveError;

// Re-exports for convenient access
pub use connect_four::ConnectFour;
pub use tictactoe::TicTacToe;
pub use win::{
    connect_four_line_at, has_connect_four_win, has_connect_four_win_at, has_tictactoe_win_at,
    tictactoe_line_at, tictactoe_winner, CONNECT_FOUR_RUN, TICTACTOE_RUN, WINNING_LINES,
};

/// Capability set the search engine and turn controller need from a game.
///
/// Implementors are zero-sized markers; all state lives in `Self::Board`.
pub trait Rules: 'static {
    /// Board representation
    type Board: Clone + PartialEq + Eq + Hash + Debug + Default;
    /// What a player chooses (cell index, column)
    type Move: Copy + PartialEq + Eq + Debug;
    /// The cell a move actually filled
    type Pos: Copy + PartialEq + Eq + Debug;

    /// Human-readable game name
    const NAME: &'static str;
    /// Base score for a win; shallower wins score closer to this
    const WIN_BASE: i32;
    /// Search depth limit, `None` when the whole tree is searched
    const DEFAULT_MAX_DEPTH: Option<u8>;
    /// Total number of cells
    const CAPACITY: usize;

    /// Fresh empty board
    fn new_board() -> Self::Board {
        Self::Board::default()
    }

    /// Legal moves in enumeration order
    fn legal_moves(board: &Self::Board) -> Vec<Self::Move>;

    /// Place a mark for `player`, returning the cell filled
    fn apply(board: &mut Self::Board, mv: Self::Move, player: Player) -> Result<Self::Pos, MoveError>;

    /// Reset a cell filled by [`Rules::apply`] back to empty
    fn undo(board: &mut Self::Board, pos: Self::Pos);

    /// Did the mark at `pos` win for `player`?
    fn is_winning_move(board: &Self::Board, pos: Self::Pos, player: Player) -> bool;

    /// Cells of the completed line through `pos`, if any
    fn winning_line(board: &Self::Board, pos: Self::Pos, player: Player) -> Option<Vec<Self::Pos>>;

    fn is_board_full(board: &Self::Board) -> bool;

    fn filled_count(board: &Self::Board) -> usize;

    /// Full board and the triggering move did not win
    fn is_draw(board: &Self::Board, pos: Self::Pos, player: Player) -> bool {
        Self::is_board_full(board) && !Self::is_winning_move(board, pos, player)
    }
}
