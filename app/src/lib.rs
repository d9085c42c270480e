//! Mortality application shell
//!
//! Owns the store for a presentation layer and exposes it as plain command
//! functions, plus the reveal effect the views use.

pub mod cli;
pub mod commands;
pub mod reveal;
pub mod state;

pub use state::AppState;
