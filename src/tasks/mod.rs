// src/tasks/mod.rs
//! Installer tasks with a two-phase lifecycle: every task of a command is
//! validated before any of them executes, so a bad invocation fails before
//! the first side effect.

mod clean;
mod delete;
mod project;
mod server_config;

pub use clean::CleanTask;
pub use delete::DeleteTask;
pub use project::ProjectTask;

use std::path::{Path, PathBuf};

use crate::error::TaskError;

pub trait Task {
  /// Checks preconditions without touching the file system.
  fn validate(&self) -> Result<(), TaskError>;

  /// Performs the task's side effects. Called only after a successful
  /// validate pass over all tasks of the command.
  fn execute(&self) -> Result<(), TaskError>;
}

/// The CI server installation root comes in as the first leftover
/// positional argument of the invocation.
pub(crate) fn require_install_dir(dir: Option<&Path>) -> Result<&Path, TaskError> {
  dir.ok_or(TaskError::MissingInstallDir)
}

pub(crate) fn project_dir(install: &Path, project_name: &str) -> PathBuf {
  install.join("projects").join(project_name)
}

/// Shared validation for tasks operating on an existing installation.
pub(crate) fn check_installation(install: &Path) -> Result<(), TaskError> {
  if !install.is_dir() {
    return Err(TaskError::InstallDirNotFound(install.to_path_buf()));
  }
  if !install.join("projects").is_dir() {
    return Err(TaskError::ProjectsDirNotFound(install.to_path_buf()));
  }
  server_config::check_present(install)
}
