// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Misuse of the console grammar registry. These signal a mistake in the
/// tool's own setup code, not bad user input, and are never caught by task
/// logic.
#[derive(Error, Debug)]
pub enum DefinitionError {
  #[error("A command named '{0}' is already registered.")]
  DuplicateCommand(String),

  #[error("Cannot register option '--{option}' for unknown command '{command}'.")]
  UnknownCommand { command: String, option: String },

  #[error("The option '{name}' is already registered for command '{command}'.")]
  DuplicateOption { command: String, name: String },

  #[error("No command named '{0}' is registered.")]
  CommandNotFound(String),

  #[error("No option named '{name}' is registered for command '{command}'.")]
  OptionNotFound { command: String, name: String },

  #[error("Invalid format pattern '{pattern}': {source}")]
  InvalidPattern {
    pattern: String,
    #[source]
    source: regex::Error,
  },
}

/// User-input mismatch against the registered grammar. Caught once at the
/// top level and rendered as the literal message text; the exact wording is
/// load-bearing for the console tests.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConsoleError {
  #[error("Unknown command '{0}' given.")]
  UnknownCommand(String),

  #[error("No command given.")]
  MissingCommand,

  #[error("The option '--{0}' is marked as mandatory and not set.")]
  MandatoryOptionNotSet(String),

  /// Carries the token form the user actually typed (`-b` or `--bar`).
  #[error("The option '{0}' requires an additional value.")]
  MissingOptionValue(String),

  #[error("The value for option --{option} must match one of these values {}.", quoted_list(.allowed))]
  ValueNotInList { option: String, allowed: Vec<String> },

  #[error("The value for option '--{0}' has an invalid format.")]
  InvalidValueFormat(String),
}

fn quoted_list(values: &[String]) -> String {
  values
    .iter()
    .map(|value| format!("\"{}\"", value))
    .collect::<Vec<_>>()
    .join(", ")
}

/// Failures raised by installer tasks during their validate or execute
/// phase.
#[derive(Error, Debug)]
pub enum TaskError {
  #[error("No CI server installation directory given.")]
  MissingInstallDir,

  #[error("CI server installation directory not found: {0}")]
  InstallDirNotFound(PathBuf),

  #[error("Missing projects directory in '{0}'.")]
  ProjectsDirNotFound(PathBuf),

  #[error("A project named '{0}' already exists.")]
  ProjectExists(String),

  #[error("No project named '{0}' exists.")]
  ProjectNotFound(String),

  #[error("Server configuration not found: {0}")]
  ServerConfigNotFound(PathBuf),

  #[error("Server configuration '{0}' has no closing root element.")]
  ServerConfigMalformed(PathBuf),

  #[error("IO Error: {0}")]
  Io(#[from] std::io::Error),

  #[error("Error walking project directory: {0}")]
  WalkDir(#[from] walkdir::Error),
}

/// Top-level error for the run path.
#[derive(Error, Debug)]
pub enum StagehandError {
  #[error(transparent)]
  Definition(#[from] DefinitionError),

  #[error(transparent)]
  Console(#[from] ConsoleError),

  #[error(transparent)]
  Task(#[from] TaskError),
}
