//! Tic-tac-toe and connect-four against a minimax computer opponent
//!
//! Both games share one search: exhaustive minimax with alpha-beta pruning,
//! scoring wins by depth so the computer takes the fastest win and delays
//! the slowest loss. Tic-tac-toe is searched to the end; connect-four stops
//! at a fixed depth and treats the horizon as neutral.
//!
//! # Architecture
//!
//! - [`board`]: Grids, cells and players
//! - [`rules`]: Per-game move generation and win detection
//! - [`search`]: Minimax with alpha-beta pruning
//! - [`engine`]: Computer opponent wrapping the search
//! - [`game`]: Turn controller
//! - [`config`]: TOML configuration
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use duel::{GameState, Outcome, TicTacToe, Rules};
//!
//! let mut game = GameState::<TicTacToe>::new();
//! assert_eq!(game.play_human_move(4), Outcome::Continued);
//! assert_eq!(game.play_computer_move(), Outcome::Continued);
//! assert_eq!(TicTacToe::filled_count(game.board()), 2);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Cell, Player, Pos};
pub use engine::{AiEngine, MoveResult};
pub use error::{ConfigError, MoveError};
pub use game::{new_game, GameState, Outcome, Phase};
pub use rules::{ConnectFour, Rules, TicTacToe};
