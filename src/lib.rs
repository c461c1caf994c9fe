//! # Alpha-beta Connect Four
//!
//! Connect Four on the classic 6x7 board against a human or a computer
//! opponent. The computer chooses moves with depth-limited minimax search
//! and alpha-beta pruning over a four-cell-window heuristic.
//!
//! ## Modules
//!
//! - [`game`] — Board, sides, windows, game state
//! - [`ai`] — Heuristic, alpha-beta search, human and computer players
//! - [`session`] — Turn loop driving a game through a view
//! - [`ui`] — Text view and terminal UI
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod session;
pub mod ui;
