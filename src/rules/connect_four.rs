//! Connect-four rules: gravity placement, four in a row wins

use super::win::{connect_four_line_at, has_connect_four_win_at};
use super::Rules;
use crate::board::{ConnectFourBoard, Player, Pos, COLS, ROWS};
use crate::error::MoveError;

/// Connect-four on a 6x7 grid. Moves are columns; positions are the cell the
/// disc landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConnectFour;

impl Rules for ConnectFour {
    type Board = ConnectFourBoard;
    type Move = usize;
    type Pos = Pos;

    const NAME: &'static str = "Connect Four";
    const WIN_BASE: i32 = 100;
    const DEFAULT_MAX_DEPTH: Option<u8> = Some(5);
    const CAPACITY: usize = ROWS * COLS;

    fn legal_moves(board: &ConnectFourBoard) -> Vec<usize> {
        board.legal_columns()
    }

    fn apply(board: &mut ConnectFourBoard, mv: usize, player: Player) -> Result<Pos, MoveError> {
        board.drop_disc(mv, player)
    }

    fn undo(board: &mut ConnectFourBoard, pos: Pos) {
        board.remove(pos);
    }

    fn is_winning_move(board: &ConnectFourBoard, pos: Pos, player: Player) -> bool {
        has_connect_four_win_at(board, pos, player)
    }

    fn winning_line(board: &ConnectFourBoard, pos: Pos, player: Player) -> Option<Vec<Pos>> {
        connect_four_line_at(board, pos, player)
    }

    fn is_board_full(board: &ConnectFourBoard) -> bool {
        board.is_full()
    }

    fn filled_count(board: &ConnectFourBoard) -> usize {
        board.filled_count()
    }
}
