//! Event-Typen des Intent→Command-Flusses.

mod command;
mod intent;

pub use command::AppCommand;
pub use intent::AppIntent;
