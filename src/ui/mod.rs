//! Views: the line-oriented text view and the terminal UI.

mod app;
mod game_view;
mod view;

pub use app::App;
pub use view::{TextView, View};

#[cfg(test)]
pub(crate) use view::scripted::ScriptedView;
