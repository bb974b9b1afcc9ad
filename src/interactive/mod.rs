//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, GRID_WIDTH, Message, MessageStyle, run_tui};
