//! deckview TUI — terminal slide presenter.
//!
//! The binary in `main.rs` owns the terminal; everything here is plain state
//! and rendering so it can be driven from tests with a `TestBackend`.

pub mod app;
pub mod input;
pub mod keymap;
pub mod logging;
pub mod surface;
pub mod theme;
pub mod ui;

pub use app::AppState;
pub use surface::DeckView;
pub use theme::Theme;

#[cfg(test)]
mod test_helpers;
