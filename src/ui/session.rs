//! One game as seen by the front end
//!
//! Wraps a [`GameState`] with the deferred computer reply: a human move that
//! keeps the game going arms a single deadline, and the reply is played the
//! first time the deadline is polled after it passes.

use std::time::{Duration, Instant};

use crate::board::Player;
use crate::game::{GameState, Outcome, Phase};
use crate::rules::Rules;

pub struct Session<R: Rules> {
    state: GameState<R>,
    delay: Duration,
    reply_at: Option<Instant>,
    labels: [&'static str; 2],
}

impl<R: Rules> Session<R> {
    /// `labels` name the first and second player in status text
    pub fn new(state: GameState<R>, delay: Duration, labels: [&'static str; 2]) -> Self {
        Self {
            state,
            delay,
            reply_at: None,
            labels,
        }
    }

    #[inline]
    pub fn state(&self) -> &GameState<R> {
        &self.state
    }

    /// Is a computer reply scheduled?
    #[inline]
    pub fn is_thinking(&self) -> bool {
        self.reply_at.is_some()
    }

    /// Forward a click to the turn controller. Ignored while a reply is
    /// pending.
    pub fn human_move(&mut self, mv: R::Move, now: Instant) -> Outcome {
        if self.is_thinking() {
            return Outcome::Rejected;
        }
        let outcome = self.state.play_human_move(mv);
        if outcome == Outcome::Continued && self.state.phase() == Phase::ComputerTurn {
            self.reply_at = Some(now + self.delay);
        }
        outcome
    }

    /// Play the computer reply once its deadline has passed
    pub fn poll_reply(&mut self, now: Instant) -> Option<Outcome> {
        match self.reply_at {
            Some(at) if now >= at => {
                self.reply_at = None;
                Some(self.state.play_computer_move())
            }
            _ => None,
        }
    }

    /// Time left before the pending reply fires
    pub fn time_until_reply(&self, now: Instant) -> Option<Duration> {
        self.reply_at.map(|at| at.saturating_duration_since(now))
    }

    /// New game; drops any pending reply
    pub fn reset(&mut self) {
        self.reply_at = None;
        self.state.reset();
    }

    pub fn label(&self, player: Player) -> &'static str {
        match player {
            Player::First => self.labels[0],
            Player::Second => self.labels[1],
        }
    }

    pub fn status(&self) -> String {
        match self.state.phase() {
            Phase::HumanTurn => format!("{}'s turn", self.label(Player::First)),
            Phase::ComputerTurn => format!("{}'s turn", self.label(Player::Second)),
            Phase::Won(player) => format!("{} wins!", self.label(player)),
            Phase::Drawn => "It's a draw!".to_string(),
        }
    }
}
