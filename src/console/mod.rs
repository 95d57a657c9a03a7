// src/console/mod.rs
//! The console input subsystem: a declarative grammar of commands and
//! options, and a matcher that checks one raw argument vector against it.

pub mod args;
pub mod definition;
pub mod input;

pub use args::{ConsoleArgs, OptionValue};
pub use definition::{CommandSpec, Definition, OptionSpec, ValueRule};
pub use input::ConsoleInput;
