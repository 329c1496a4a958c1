//! Desktop front end built on egui/eframe
//!
//! Renders the active board, turns clicks into human moves, and plays the
//! computer's reply after a short delay.

mod app;
mod board_view;
mod session;
mod theme;

pub use app::DuelApp;
pub use session::Session;
