//! Tic-tac-toe rules: direct cell placement, three in a line wins

use super::win::{has_tictactoe_win_at, tictactoe_line_at};
use super::Rules;
use crate::board::{Player, TicTacToeBoard, CELL_COUNT};
use crate::error::MoveError;

/// Tic-tac-toe on a 3x3 board. Moves and positions are cell indices 0-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TicTacToe;

impl Rules for TicTacToe {
    type Board = TicTacToeBoard;
    type Move = usize;
    type Pos = usize;

    const NAME: &'static str = "Tic-tac-toe";
    const WIN_BASE: i32 = 10;
    // At most 9 plies: always solved exactly
    const DEFAULT_MAX_DEPTH: Option<u8> = None;
    const CAPACITY: usize = CELL_COUNT;

    fn legal_moves(board: &TicTacToeBoard) -> Vec<usize> {
        board.empty_cells()
    }

    fn apply(board: &mut TicTacToeBoard, mv: usize, player: Player) -> Result<usize, MoveError> {
        board.place(mv, player)
    }

    fn undo(board: &mut TicTacToeBoard, pos: usize) {
        board.remove(pos);
    }

    fn is_winning_move(board: &TicTacToeBoard, pos: usize, player: Player) -> bool {
        has_tictactoe_win_at(board, pos, player)
    }

    fn winning_line(board: &TicTacToeBoard, pos: usize, player: Player) -> Option<Vec<usize>> {
        tictactoe_line_at(board, pos, player).map(|line| line.to_vec())
    }

    fn is_board_full(board: &TicTacToeBoard) -> bool {
        board.is_full()
    }

    fn filled_count(board: &TicTacToeBoard) -> usize {
        board.filled_count()
    }
}
