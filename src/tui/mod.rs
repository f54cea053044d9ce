//! Terminal User Interface module
//!
//! A ratatui front-end with four screens: registration, login,
//! current-month overview, and add-expense. All navigation flows through
//! the screen gate; requests are performed synchronously by the API
//! client, one per user action.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Screens
pub mod screens;

// Widgets
pub mod widgets;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
