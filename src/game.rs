//! Turn controller
//!
//! [`GameState`] owns the board and the turn phase and is the only thing that
//! commits moves. The human always moves first; the computer reply is a
//! separate call so the front end decides when it happens.
//!
//! ```text
//! HumanTurn --human move--> Won | Drawn | ComputerTurn
//! ComputerTurn --search + move--> Won | Drawn | HumanTurn
//! Won | Drawn --reset--> HumanTurn
//! ```

use tracing::{debug, info, instrument};

use crate::board::Player;
use crate::engine::{AiEngine, MoveResult};
use crate::error::MoveError;
use crate::rules::Rules;

/// Side controlled by the person at the keyboard
pub const HUMAN: Player = Player::First;

/// Side controlled by the search engine
pub const COMPUTER: Player = Player::Second;

/// Turn phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    HumanTurn,
    ComputerTurn,
    Won(Player),
    Drawn,
}

impl Phase {
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Won(_) | Phase::Drawn)
    }
}

/// What a move request did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Move applied, game goes on
    Continued,
    /// Move applied and won the game
    Won(Player),
    /// Move applied and filled the board without a winner
    Drawn,
    /// Request ignored; nothing changed
    Rejected,
}

/// One game in progress
#[derive(Debug, Clone)]
pub struct GameState<R: Rules> {
    board: R::Board,
    phase: Phase,
    last_move: Option<R::Pos>,
    winning_line: Option<Vec<R::Pos>>,
    move_count: usize,
    engine: AiEngine<R>,
    last_ai_result: Option<MoveResult<R::Move>>,
}

/// Fresh game with the default engine: empty board, human to move
pub fn new_game<R: Rules>() -> GameState<R> {
    GameState::new()
}

impl<R: Rules> GameState<R> {
    pub fn new() -> Self {
        Self::with_engine(AiEngine::new())
    }

    pub fn with_engine(engine: AiEngine<R>) -> Self {
        info!(game = R::NAME, "new game");
        Self {
            board: R::new_board(),
            phase: Phase::HumanTurn,
            last_move: None,
            winning_line: None,
            move_count: 0,
            engine,
            last_ai_result: None,
        }
    }

    /// Start over with an empty board, keeping the engine settings
    pub fn reset(&mut self) {
        info!(game = R::NAME, "game reset");
        self.board = R::new_board();
        self.phase = Phase::HumanTurn;
        self.last_move = None;
        self.winning_line = None;
        self.move_count = 0;
        self.last_ai_result = None;
    }

    #[inline]
    pub fn board(&self) -> &R::Board {
        &self.board
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Player to move, `None` once the game is over
    pub fn current_player(&self) -> Option<Player> {
        match self.phase {
            Phase::HumanTurn => Some(HUMAN),
            Phase::ComputerTurn => Some(COMPUTER),
            Phase::Won(_) | Phase::Drawn => None,
        }
    }

    #[inline]
    pub fn last_move(&self) -> Option<R::Pos> {
        self.last_move
    }

    /// Cells of the winning line once the game is won
    #[inline]
    pub fn winning_line(&self) -> Option<&[R::Pos]> {
        self.winning_line.as_deref()
    }

    #[inline]
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    #[inline]
    pub fn last_ai_result(&self) -> Option<&MoveResult<R::Move>> {
        self.last_ai_result.as_ref()
    }

    #[inline]
    pub fn engine(&self) -> &AiEngine<R> {
        &self.engine
    }

    #[inline]
    pub fn engine_mut(&mut self) -> &mut AiEngine<R> {
        &mut self.engine
    }

    /// Apply the human's move. Ignored unless it is the human's turn and
    /// the target is legal.
    #[instrument(level = "debug", skip(self), fields(game = R::NAME))]
    pub fn play_human_move(&mut self, mv: R::Move) -> Outcome {
        self.try_play(HUMAN, mv).unwrap_or_else(|err| {
            debug!(%err, "human move rejected");
            Outcome::Rejected
        })
    }

    /// Search for and apply the computer's reply. Ignored unless it is the
    /// computer's turn.
    #[instrument(level = "debug", skip(self), fields(game = R::NAME))]
    pub fn play_computer_move(&mut self) -> Outcome {
        if let Err(err) = self.check_turn(COMPUTER) {
            debug!(%err, "computer move rejected");
            return Outcome::Rejected;
        }

        let result = self.engine.get_move_with_stats(&self.board);
        self.last_ai_result = Some(result);

        let Some(mv) = result.best_move else {
            debug!("computer found no legal move");
            return Outcome::Rejected;
        };
        self.try_play(COMPUTER, mv).unwrap_or_else(|err| {
            debug!(%err, "computer move rejected");
            Outcome::Rejected
        })
    }

    fn check_turn(&self, player: Player) -> Result<(), MoveError> {
        match (self.phase, player) {
            (Phase::Won(_) | Phase::Drawn, _) => Err(MoveError::GameOver),
            (Phase::HumanTurn, p) if p == HUMAN => Ok(()),
            (Phase::ComputerTurn, p) if p == COMPUTER => Ok(()),
            _ => Err(MoveError::OutOfTurn(player)),
        }
    }

    /// Commit `mv` for `player` and advance the phase.
    ///
    /// Win is checked before draw, so a move that both completes a line and
    /// fills the board is a win.
    fn try_play(&mut self, player: Player, mv: R::Move) -> Result<Outcome, MoveError> {
        self.check_turn(player)?;
        let pos = R::apply(&mut self.board, mv, player)?;

        self.last_move = Some(pos);
        self.move_count += 1;
        debug!(?player, ?mv, ?pos, "move applied");

        let outcome = if R::is_winning_move(&self.board, pos, player) {
            self.winning_line = R::winning_line(&self.board, pos, player);
            self.phase = Phase::Won(player);
            Outcome::Won(player)
        } else if R::is_board_full(&self.board) {
            self.phase = Phase::Drawn;
            Outcome::Drawn
        } else {
            self.phase = if player == HUMAN {
                Phase::ComputerTurn
            } else {
                Phase::HumanTurn
            };
            Outcome::Continued
        };

        if self.phase.is_terminal() {
            info!(game = R::NAME, ?outcome, moves = self.move_count, "game over");
        }
        Ok(outcome)
    }
}

impl<R: Rules> Default for GameState<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, Pos};
    use crate::rules::{ConnectFour, TicTacToe};

    #[test]
    fn test_new_game_is_empty_human_to_move() {
        let game = new_game::<TicTacToe>();
        assert_eq!(game.phase(), Phase::HumanTurn);
        assert_eq!(game.current_player(), Some(HUMAN));
        assert_eq!(game.board().filled_count(), 0);
        assert_eq!(game.last_move(), None);
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = GameState::<TicTacToe>::new();
        assert_eq!(game.play_human_move(4), Outcome::Continued);
        assert_eq!(game.phase(), Phase::ComputerTurn);

        assert_eq!(game.play_computer_move(), Outcome::Continued);
        assert_eq!(game.phase(), Phase::HumanTurn);
        assert_eq!(game.board().get(0), Cell::Mark(COMPUTER));
        assert_eq!(game.move_count(), 2);
        assert!(game.last_ai_result().is_some());
    }

    #[test]
    fn test_out_of_turn_requests_are_ignored() {
        let mut game = GameState::<TicTacToe>::new();
        assert_eq!(game.play_computer_move(), Outcome::Rejected);
        assert_eq!(game.board().filled_count(), 0);

        game.play_human_move(0);
        let before = game.board().clone();
        assert_eq!(game.play_human_move(1), Outcome::Rejected);
        assert_eq!(game.board(), &before);
        assert_eq!(game.phase(), Phase::ComputerTurn);
    }

    #[test]
    fn test_occupied_cell_is_ignored() {
        let mut game = GameState::<TicTacToe>::new();
        game.play_human_move(4);
        game.play_computer_move();
        let before = game.board().clone();

        assert_eq!(game.play_human_move(4), Outcome::Rejected);
        assert_eq!(game.play_human_move(0), Outcome::Rejected);
        assert_eq!(game.play_human_move(42), Outcome::Rejected);
        assert_eq!(game.board(), &before);
        assert_eq!(game.phase(), Phase::HumanTurn);
    }

    #[test]
    fn test_full_column_is_ignored() {
        let mut game = GameState::<ConnectFour>::new();
        for i in 0..crate::board::ROWS {
            let player = if i % 2 == 0 { HUMAN } else { COMPUTER };
            game.board.drop_disc(0, player).unwrap();
        }
        let before = game.board().clone();
        assert_eq!(game.play_human_move(0), Outcome::Rejected);
        assert_eq!(game.board(), &before);
        assert_eq!(game.phase(), Phase::HumanTurn);
        assert_eq!(game.play_human_move(1), Outcome::Continued);
    }

    #[test]
    fn test_terminal_game_ignores_requests() {
        let mut game = GameState::<TicTacToe>::new();
        // Human always takes the lowest free cell
        while game.phase() == Phase::HumanTurn {
            let mv = (0..9).find(|&i| game.board().is_empty(i)).unwrap();
            if game.play_human_move(mv) == Outcome::Continued {
                game.play_computer_move();
            }
        }
        assert!(game.is_terminal());
        assert_ne!(game.phase(), Phase::Won(HUMAN));

        let before = game.board().clone();
        if let Some(i) = (0..9).find(|&i| game.board().is_empty(i)) {
            assert_eq!(game.play_human_move(i), Outcome::Rejected);
        }
        assert_eq!(game.play_computer_move(), Outcome::Rejected);
        assert_eq!(game.board(), &before);
    }

    #[test]
    fn test_win_on_last_cell_reports_winner_not_draw() {
        let mut game = GameState::<TicTacToe>::new();
        // X O O
        // O X X
        // X O .   human completes 0-4-8 with the last free cell
        for (i, player) in [
            (0, HUMAN),
            (1, COMPUTER),
            (2, COMPUTER),
            (3, COMPUTER),
            (4, HUMAN),
            (5, HUMAN),
            (6, HUMAN),
            (7, COMPUTER),
        ] {
            game.board.place(i, player).unwrap();
        }
        game.move_count = 8;

        assert_eq!(game.play_human_move(8), Outcome::Won(HUMAN));
        assert!(game.board().is_full());
        assert_eq!(game.phase(), Phase::Won(HUMAN));
        assert_eq!(game.winning_line(), Some(&[0, 4, 8][..]));
    }

    #[test]
    fn test_full_board_without_winner_is_drawn() {
        let mut game = GameState::<TicTacToe>::new();
        // X O X
        // X O O
        // O X .   human fills 8 without completing a line
        for (i, player) in [
            (0, HUMAN),
            (1, COMPUTER),
            (2, HUMAN),
            (3, HUMAN),
            (4, COMPUTER),
            (5, COMPUTER),
            (6, COMPUTER),
            (7, HUMAN),
        ] {
            game.board.place(i, player).unwrap();
        }

        assert_eq!(game.play_human_move(8), Outcome::Drawn);
        assert_eq!(game.phase(), Phase::Drawn);
        assert_eq!(game.current_player(), None);
        assert_eq!(game.winning_line(), None);
    }

    #[test]
    fn test_reset_restores_fresh_state() {
        let mut game = GameState::<ConnectFour>::new();
        game.play_human_move(3);
        game.play_computer_move();
        game.reset();

        assert_eq!(game.phase(), Phase::HumanTurn);
        assert_eq!(game.board(), &ConnectFour::new_board());
        assert_eq!(game.move_count(), 0);
        assert!(game.last_ai_result().is_none());
    }

    #[test]
    fn test_connect_four_computer_completes_row() {
        let mut game = GameState::<ConnectFour>::new();
        for (col, player) in [
            (5, HUMAN),
            (0, COMPUTER),
            (6, HUMAN),
            (1, COMPUTER),
            (5, HUMAN),
            (2, COMPUTER),
        ] {
            game.board.drop_disc(col, player).unwrap();
        }

        assert_eq!(game.play_human_move(6), Outcome::Continued);
        assert_eq!(game.play_computer_move(), Outcome::Won(COMPUTER));
        assert_eq!(game.last_move(), Some(Pos::new(5, 3)));
        assert_eq!(game.winning_line().map(<[Pos]>::len), Some(4));
    }
}
