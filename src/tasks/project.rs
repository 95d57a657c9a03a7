// src/tasks/project.rs
use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::console::ConsoleArgs;
use crate::error::TaskError;
use crate::tasks::{self, server_config, Task};

/// Scaffolds one build project inside the server installation: the project
/// directory tree, a build file skeleton, and the `config.xml`
/// registration.
pub struct ProjectTask {
  project_name: String,
  version_control: String,
  interval: String,
  install_dir: Option<PathBuf>,
}

impl ProjectTask {
  pub fn from_args(args: &ConsoleArgs) -> Self {
    ProjectTask {
      // Mandatory in the grammar, present after any successful parse.
      project_name: args.value("project-name").unwrap_or_default().to_string(),
      version_control: args.value("version-control").unwrap_or_default().to_string(),
      interval: args.value("interval").unwrap_or_default().to_string(),
      install_dir: args.arguments().first().map(PathBuf::from),
    }
  }

  fn project_dir(&self, install: &Path) -> PathBuf {
    tasks::project_dir(install, &self.project_name)
  }
}

impl Task for ProjectTask {
  fn validate(&self) -> Result<(), TaskError> {
    let install = tasks::require_install_dir(self.install_dir.as_deref())?;
    tasks::check_installation(install)?;
    if self.project_dir(install).exists() {
      return Err(TaskError::ProjectExists(self.project_name.clone()));
    }
    Ok(())
  }

  fn execute(&self) -> Result<(), TaskError> {
    let install = tasks::require_install_dir(self.install_dir.as_deref())?;
    let project = self.project_dir(install);

    info!("Creating project directory {}", project.display());
    fs::create_dir_all(project.join("source"))?;
    fs::create_dir_all(project.join("build").join("logs"))?;

    let build_file = project.join("build.xml");
    info!("Writing build file {}", build_file.display());
    fs::write(&build_file, build_xml(&self.project_name))?;

    info!(
      "Registering project '{}' in {}",
      self.project_name,
      server_config::config_path(install).display()
    );
    server_config::register_project(
      install,
      &project_element(&self.project_name, &self.version_control, &self.interval),
    )?;
    Ok(())
  }
}

fn build_xml(name: &str) -> String {
  format!(
    "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
     <project name=\"{name}\" default=\"build\" basedir=\".\">\n  \
     <target name=\"build\" />\n\
     </project>\n"
  )
}

fn project_element(name: &str, vcs: &str, interval: &str) -> String {
  format!(
    "  <project name=\"{name}\">\n    \
     <schedule interval=\"{interval}\" />\n    \
     <modificationset>\n      \
     <{vcs} localWorkingCopy=\"projects/{name}/source\" />\n    \
     </modificationset>\n  \
     </project>\n"
  )
}
