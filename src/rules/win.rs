//! Win condition checking
//!
//! Tic-tac-toe wins are matched against the fixed table of eight lines.
//! Connect-four wins are found by counting the run through the last disc in
//! each of the four directions.

use crate::board::{Cell, ConnectFourBoard, Player, Pos, TicTacToeBoard};

/// Run length needed on the 3x3 board
pub const TICTACTOE_RUN: usize = 3;

/// Run length needed on the 6x7 grid
pub const CONNECT_FOUR_RUN: usize = 4;

/// All winning triples: 3 rows, 3 columns, 2 diagonals
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Direction vectors for line checking (4 directions)
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Winner of the 3x3 board, checking both players against every line
pub fn tictactoe_winner(board: &TicTacToeBoard) -> Option<Player> {
    WINNING_LINES.iter().find_map(|&[a, b, c]| {
        let owner = board.get(a).player()?;
        (board.get(b) == Cell::Mark(owner) && board.get(c) == Cell::Mark(owner)).then_some(owner)
    })
}

/// Completed line through `index` owned by `player`
pub fn tictactoe_line_at(board: &TicTacToeBoard, index: usize, player: Player) -> Option<[usize; 3]> {
    WINNING_LINES
        .iter()
        .filter(|line| line.contains(&index))
        .find(|line| line.iter().all(|&i| board.get(i) == Cell::Mark(player)))
        .copied()
}

/// Did marking `index` complete a line for `player`?
#[inline]
pub fn has_tictactoe_win_at(board: &TicTacToeBoard, index: usize, player: Player) -> bool {
    tictactoe_line_at(board, index, player).is_some()
}

/// Count consecutive `player` discs from `pos` (exclusive) stepping by (dr, dc)
#[inline]
fn count_run(board: &ConnectFourBoard, pos: Pos, dr: i32, dc: i32, player: Player) -> usize {
    let mut count = 0;
    let mut r = pos.row as i32 + dr;
    let mut c = pos.col as i32 + dc;
    while Pos::is_valid(r, c) && board.get(Pos::new(r as u8, c as u8)) == Cell::Mark(player) {
        count += 1;
        r += dr;
        c += dc;
    }
    count
}

/// Fast four-in-a-row check at a specific position.
///
/// Only checks the 4 directions through `pos`. No allocation.
#[inline]
pub fn has_connect_four_win_at(board: &ConnectFourBoard, pos: Pos, player: Player) -> bool {
    if board.get(pos) != Cell::Mark(player) {
        return false;
    }
    DIRECTIONS.iter().any(|&(dr, dc)| {
        1 + count_run(board, pos, dr, dc, player) + count_run(board, pos, -dr, -dc, player)
            >= CONNECT_FOUR_RUN
    })
}

/// Cells of the winning run through `pos`, ordered from one end to the other
pub fn connect_four_line_at(board: &ConnectFourBoard, pos: Pos, player: Player) -> Option<Vec<Pos>> {
    if board.get(pos) != Cell::Mark(player) {
        return None;
    }
    for &(dr, dc) in &DIRECTIONS {
        let back = count_run(board, pos, -dr, -dc, player) as i32;
        let forward = count_run(board, pos, dr, dc, player) as i32;
        if (back + forward + 1) as usize >= CONNECT_FOUR_RUN {
            let line = (-back..=forward)
                .map(|i| Pos::new((pos.row as i32 + dr * i) as u8, (pos.col as i32 + dc * i) as u8))
                .collect();
            return Some(line);
        }
    }
    None
}

/// Full-board scan: does `player` own any run of four?
pub fn has_connect_four_win(board: &ConnectFourBoard, player: Player) -> bool {
    (0..crate::board::ROWS as u8).any(|row| {
        (0..crate::board::COLS as u8).any(|col| has_connect_four_win_at(board, Pos::new(row, col), player))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{COLS, ROWS};

    fn grid(cells: &[(u8, u8)], player: Player) -> ConnectFourBoard {
        // Fill bottom-up so gravity holds for any set of cells
        let mut sorted = cells.to_vec();
        sorted.sort_by(|a, b| b.0.cmp(&a.0));
        let mut board = ConnectFourBoard::new();
        for (row, col) in sorted {
            while board.available_row(col as usize) != Some(row as usize) {
                board.drop_disc(col as usize, player.opponent()).unwrap();
            }
            board.drop_disc(col as usize, player).unwrap();
        }
        board
    }

    #[test]
    fn test_tictactoe_lines() {
        for line in WINNING_LINES {
            let mut board = TicTacToeBoard::new();
            for i in line {
                board.place(i, Player::Second).unwrap();
            }
            assert_eq!(tictactoe_winner(&board), Some(Player::Second));
            for i in line {
                assert!(has_tictactoe_win_at(&board, i, Player::Second));
                assert!(!has_tictactoe_win_at(&board, i, Player::First));
            }
        }
    }

    #[test]
    fn test_tictactoe_two_in_line_is_not_win() {
        let mut board = TicTacToeBoard::new();
        board.place(0, Player::First).unwrap();
        board.place(1, Player::First).unwrap();
        board.place(2, Player::Second).unwrap();
        assert_eq!(tictactoe_winner(&board), None);
        assert!(!has_tictactoe_win_at(&board, 1, Player::First));
    }

    #[test]
    fn test_tictactoe_line_through_move() {
        let mut board = TicTacToeBoard::new();
        for i in [2, 4, 6] {
            board.place(i, Player::First).unwrap();
        }
        assert_eq!(tictactoe_line_at(&board, 6, Player::First), Some([2, 4, 6]));
        assert_eq!(tictactoe_line_at(&board, 0, Player::First), None);
    }

    #[test]
    fn test_horizontal_four_at_edges() {
        let board = grid(&[(5, 0), (5, 1), (5, 2), (5, 3)], Player::First);
        assert!(has_connect_four_win_at(&board, Pos::new(5, 0), Player::First));
        assert!(has_connect_four_win_at(&board, Pos::new(5, 3), Player::First));

        let board = grid(&[(5, 3), (5, 4), (5, 5), (5, 6)], Player::First);
        assert!(has_connect_four_win_at(&board, Pos::new(5, 6), Player::First));
    }

    #[test]
    fn test_horizontal_three_is_not_win() {
        let board = grid(&[(5, 4), (5, 5), (5, 6)], Player::Second);
        for col in 4..COLS as u8 {
            assert!(!has_connect_four_win_at(&board, Pos::new(5, col), Player::Second));
        }
        assert!(!has_connect_four_win(&board, Player::Second));
    }

    #[test]
    fn test_vertical_four_at_top() {
        let board = grid(&[(0, 6), (1, 6), (2, 6), (3, 6)], Player::Second);
        assert!(has_connect_four_win_at(&board, Pos::new(0, 6), Player::Second));
        assert!(has_connect_four_win(&board, Player::Second));
        assert!(!has_connect_four_win(&board, Player::First));
    }

    #[test]
    fn test_vertical_three_is_not_win() {
        let board = grid(&[(3, 0), (4, 0), (5, 0)], Player::First);
        assert!(!has_connect_four_win_at(&board, Pos::new(3, 0), Player::First));
    }

    #[test]
    fn test_diagonal_fours() {
        let se = grid(&[(2, 0), (3, 1), (4, 2), (5, 3)], Player::First);
        assert!(has_connect_four_win_at(&se, Pos::new(2, 0), Player::First));
        assert!(has_connect_four_win_at(&se, Pos::new(4, 2), Player::First));

        let sw = grid(&[(2, 6), (3, 5), (4, 4), (5, 3)], Player::Second);
        assert!(has_connect_four_win_at(&sw, Pos::new(5, 3), Player::Second));

        let corner = grid(&[(0, 3), (1, 4), (2, 5), (3, 6)], Player::First);
        assert!(has_connect_four_win_at(&corner, Pos::new(0, 3), Player::First));
    }

    #[test]
    fn test_diagonal_three_is_not_win() {
        let board = grid(&[(3, 4), (4, 5), (5, 6)], Player::First);
        assert!(!has_connect_four_win_at(&board, Pos::new(5, 6), Player::First));
        assert!(!has_connect_four_win_at(&board, Pos::new(3, 4), Player::First));
    }

    #[test]
    fn test_wrong_owner_or_empty_cell() {
        let board = grid(&[(5, 0), (5, 1), (5, 2), (5, 3)], Player::First);
        assert!(!has_connect_four_win_at(&board, Pos::new(5, 0), Player::Second));
        assert!(!has_connect_four_win_at(&board, Pos::new(0, 0), Player::First));
    }

    #[test]
    fn test_line_positions() {
        let board = grid(&[(5, 2), (5, 3), (5, 4), (5, 5), (5, 6)], Player::Second);
        let line = connect_four_line_at(&board, Pos::new(5, 4), Player::Second).unwrap();
        assert_eq!(line.len(), 5);
        assert_eq!(line.first(), Some(&Pos::new(5, 2)));
        assert_eq!(line.last(), Some(&Pos::new(5, 6)));
        assert!(connect_four_line_at(&board, Pos::new(5, 4), Player::First).is_none());
    }

    #[test]
    fn test_empty_board_has_no_win() {
        let board = ConnectFourBoard::new();
        assert!(!has_connect_four_win(&board, Player::First));
        assert!(!has_connect_four_win(&board, Player::Second));
        assert_eq!(ROWS * COLS, 42);
        assert_eq!(tictactoe_winner(&TicTacToeBoard::new()), None);
    }
}
