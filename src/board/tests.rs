use super::*;
use crate::error::MoveError;

#[test]
fn test_player_opponent() {
    assert_eq!(Player::First.opponent(), Player::Second);
    assert_eq!(Player::Second.opponent(), Player::First);
}

#[test]
fn test_cell_owner() {
    assert!(Cell::Empty.is_empty());
    assert_eq!(Cell::Empty.player(), None);
    assert_eq!(Cell::Mark(Player::Second).player(), Some(Player::Second));
    assert_eq!(Cell::default(), Cell::Empty);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(5, 6));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(6, 0));
    assert!(!Pos::is_valid(0, 7));
}

#[test]
fn test_pos_ordering() {
    assert!(Pos::new(0, 6) < Pos::new(1, 0));
    assert_eq!(Pos::new(5, 6).to_index(), ROWS * COLS - 1);
}

#[test]
fn test_tictactoe_place_and_remove() {
    let mut board = TicTacToeBoard::new();
    assert_eq!(board.place(4, Player::First), Ok(4));
    assert_eq!(board.get(4), Cell::Mark(Player::First));
    assert_eq!(board.filled_count(), 1);

    board.remove(4);
    assert_eq!(board, TicTacToeBoard::new());
}

#[test]
fn test_tictactoe_rejects_occupied_and_out_of_range() {
    let mut board = TicTacToeBoard::new();
    board.place(0, Player::First).unwrap();
    assert_eq!(board.place(0, Player::Second), Err(MoveError::Occupied(0)));
    assert_eq!(board.place(9, Player::Second), Err(MoveError::OutOfRange(9)));
    assert_eq!(board.get(0), Cell::Mark(Player::First));
}

#[test]
fn test_tictactoe_empty_cells_ascending() {
    let mut board = TicTacToeBoard::new();
    board.place(4, Player::First).unwrap();
    board.place(0, Player::Second).unwrap();
    assert_eq!(board.empty_cells(), vec![1, 2, 3, 5, 6, 7, 8]);
}

#[test]
fn test_tictactoe_full() {
    let mut board = TicTacToeBoard::new();
    for i in 0..CELL_COUNT {
        assert!(!board.is_full());
        let player = if i % 2 == 0 { Player::First } else { Player::Second };
        board.place(i, player).unwrap();
    }
    assert!(board.is_full());
    assert!(board.empty_cells().is_empty());
}

#[test]
fn test_connect_four_gravity() {
    let mut board = ConnectFourBoard::new();
    assert_eq!(board.drop_disc(3, Player::First), Ok(Pos::new(5, 3)));
    assert_eq!(board.drop_disc(3, Player::Second), Ok(Pos::new(4, 3)));
    assert_eq!(board.available_row(3), Some(3));
    assert_eq!(board.available_row(0), Some(5));
    assert!(board.is_settled());
}

#[test]
fn test_connect_four_column_full() {
    let mut board = ConnectFourBoard::new();
    for i in 0..ROWS {
        let player = if i % 2 == 0 { Player::First } else { Player::Second };
        board.drop_disc(0, player).unwrap();
    }
    assert!(board.is_column_full(0));
    assert_eq!(board.available_row(0), None);
    assert_eq!(board.drop_disc(0, Player::First), Err(MoveError::ColumnFull(0)));
    assert_eq!(board.drop_disc(7, Player::First), Err(MoveError::OutOfRange(7)));
    assert!(!board.legal_columns().contains(&0));
}

#[test]
fn test_connect_four_legal_order() {
    let board = ConnectFourBoard::new();
    assert_eq!(board.legal_columns(), vec![3, 2, 4, 1, 5, 0, 6]);
}

#[test]
fn test_connect_four_remove_top_disc() {
    let mut board = ConnectFourBoard::new();
    board.drop_disc(2, Player::First).unwrap();
    let before = board;
    let pos = board.drop_disc(2, Player::Second).unwrap();
    board.remove(pos);
    assert_eq!(board, before);
}

#[test]
fn test_connect_four_full() {
    let mut board = ConnectFourBoard::new();
    for col in 0..COLS {
        for row in 0..ROWS {
            let player = if (row + col) % 2 == 0 { Player::First } else { Player::Second };
            board.drop_disc(col, player).unwrap();
        }
    }
    assert!(board.is_full());
    assert_eq!(board.filled_count(), ROWS * COLS);
    assert!(board.legal_columns().is_empty());
}
