// src/tasks/delete.rs
use std::fs;
use std::path::PathBuf;

use log::{info, warn};

use crate::console::ConsoleArgs;
use crate::error::TaskError;
use crate::tasks::{self, server_config, Task};

/// Removes a project tree and its `config.xml` registration. Without
/// `--force` the task only reports what it would remove.
pub struct DeleteTask {
  project_name: String,
  force: bool,
  install_dir: Option<PathBuf>,
}

impl DeleteTask {
  pub fn from_args(args: &ConsoleArgs) -> Self {
    DeleteTask {
      project_name: args.value("project-name").unwrap_or_default().to_string(),
      force: args.is_set("force"),
      install_dir: args.arguments().first().map(PathBuf::from),
    }
  }
}

impl Task for DeleteTask {
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
    let project = tasks::project_dir(install, &self.project_name);

    if !self.force {
      info!(
        "Would remove {} and the '{}' entry in {}.",
        project.display(),
        self.project_name,
        server_config::config_path(install).display()
      );
      info!("Pass --force to remove the project.");
      return Ok(());
    }

    if server_config::unregister_project(install, &self.project_name)? {
      info!("Removed project '{}' from the server configuration.", self.project_name);
    } else {
      warn!(
        "Project '{}' was not registered in the server configuration.",
        self.project_name
      );
    }

    info!("Removing project directory {}", project.display());
    fs::remove_dir_all(&project)?;
    Ok(())
  }
}
