//! Per-game undo/redo history.
//!
//! - `Command`: old/new snapshot pair for one transition
//! - `CommandLog`: linear history with a cursor, one per game

pub mod command;
pub mod log;

pub use command::{Command, CommandKind};
pub use log::CommandLog;
