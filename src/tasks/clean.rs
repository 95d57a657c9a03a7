// src/tasks/clean.rs
use std::fs;
use std::path::PathBuf;
use std::time::SystemTime;

use log::info;
use walkdir::WalkDir;

use crate::console::ConsoleArgs;
use crate::error::TaskError;
use crate::tasks::{self, Task};

/// Prunes old build logs of one project, keeping only the newest N files
/// under `build/logs`.
pub struct CleanTask {
  project_name: String,
  keep: usize,
  install_dir: Option<PathBuf>,
}

impl CleanTask {
  pub fn from_args(args: &ConsoleArgs) -> Self {
    CleanTask {
      project_name: args.value("project-name").unwrap_or_default().to_string(),
      // Digits-only in the grammar; an out-of-range count keeps everything.
      keep: args
        .value("keep")
        .and_then(|keep| keep.parse().ok())
        .unwrap_or(usize::MAX),
      install_dir: args.arguments().first().map(PathBuf::from),
    }
  }
}

impl Task for CleanTask {
  fn validate(&self) -> Result<(), TaskError> {
    let install = tasks::require_install_dir(self.install_dir.as_deref())?;
    tasks::check_installation(install)?;
    if !tasks::project_dir(install, &self.project_name).is_dir() {
      return Err(TaskError::ProjectNotFound(self.project_name.clone()));
    }
    Ok(())
  }

  fn execute(&self) -> Result<(), TaskError> {
    let install = tasks::require_install_dir(self.install_dir.as_deref())?;
    let logs_dir = tasks::project_dir(install, &self.project_name)
      .join("build")
      .join("logs");
    if !logs_dir.is_dir() {
      info!("No build logs for project '{}', nothing to clean.", self.project_name);
      return Ok(());
    }

    let mut logs: Vec<(SystemTime, PathBuf)> = Vec::new();
    for entry in WalkDir::new(&logs_dir).min_depth(1) {
      let entry = entry?;
      if !entry.file_type().is_file() {
        continue;
      }
      let modified = entry.metadata()?.modified()?;
      logs.push((modified, entry.into_path()));
    }

    // Newest first; ties fall back to the name ordering, which for
    // timestamped log files matches their age as well.
    logs.sort_by(|a, b| b.cmp(a));

    let stale = logs.iter().skip(self.keep);
    let mut removed = 0usize;
    for (_, path) in stale {
      info!("Removing old build log {}", path.display());
      fs::remove_file(path)?;
      removed += 1;
    }
    info!(
      "Cleaned project '{}': removed {} log file(s), kept {}.",
      self.project_name,
      removed,
      logs.len() - removed
    );
    Ok(())
  }
}
