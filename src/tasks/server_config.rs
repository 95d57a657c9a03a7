// src/tasks/server_config.rs
//! Text-level edits to the CI server's `config.xml`. The file is treated
//! as plain text: registration splices a project element in front of the
//! closing root tag, removal cuts the element back out. A freshly
//! installed server ships a self-closing `<cruisecontrol />` root, which
//! gets expanded into an open/close pair on the first registration.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::TaskError;

pub(crate) const SERVER_CONFIG: &str = "config.xml";
const ROOT: &str = "cruisecontrol";

pub(crate) fn config_path(install: &Path) -> PathBuf {
  install.join(SERVER_CONFIG)
}

pub(crate) fn check_present(install: &Path) -> Result<(), TaskError> {
  let path = config_path(install);
  if path.is_file() {
    Ok(())
  } else {
    Err(TaskError::ServerConfigNotFound(path))
  }
}

/// Adds `element` inside the root element of the server config.
pub(crate) fn register_project(install: &Path, element: &str) -> Result<(), TaskError> {
  let path = config_path(install);
  if !path.is_file() {
    return Err(TaskError::ServerConfigNotFound(path));
  }
  let content = fs::read_to_string(&path)?;

  let closing = format!("</{}>", ROOT);
  let updated = if let Some(at) = content.find(&closing) {
    format!("{}{}{}", &content[..at], element, &content[at..])
  } else if let Some((start, slash)) = self_closing_root(&content) {
    format!(
      "{}{}>\n{}{}{}",
      &content[..start],
      content[start..slash].trim_end(),
      element,
      closing,
      &content[slash + 2..]
    )
  } else {
    return Err(TaskError::ServerConfigMalformed(path));
  };

  fs::write(&path, updated)?;
  Ok(())
}

/// Removes the project element registered under `name`. Returns whether an
/// element was found and removed.
pub(crate) fn unregister_project(install: &Path, name: &str) -> Result<bool, TaskError> {
  let path = config_path(install);
  if !path.is_file() {
    return Err(TaskError::ServerConfigNotFound(path));
  }
  let content = fs::read_to_string(&path)?;

  let marker = format!("<project name=\"{}\"", name);
  let Some(start) = content.find(&marker) else {
    return Ok(false);
  };
  let tail = &content[start..];
  let mut end = if let Some(close) = tail.find("</project>") {
    start + close + "</project>".len()
  } else if let Some(close) = tail.find("/>") {
    start + close + 2
  } else {
    return Err(TaskError::ServerConfigMalformed(path));
  };
  if content[end..].starts_with('\n') {
    end += 1;
  }

  fs::write(&path, format!("{}{}", &content[..start], &content[end..]))?;
  Ok(true)
}

/// Start of the root tag and position of its `/>`, when the root element
/// is self-closing.
fn self_closing_root(content: &str) -> Option<(usize, usize)> {
  let start = content.find(&format!("<{}", ROOT))?;
  let slash = start + content[start..].find("/>")?;
  // A '>' in between means the root is an ordinary open tag.
  if content[start..slash].contains('>') {
    return None;
  }
  Some((start, slash))
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;

  fn install_with_config(content: &str) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(SERVER_CONFIG), content).unwrap();
    dir
  }

  #[test]
  fn register_expands_a_self_closing_root() {
    let dir = install_with_config("<cruisecontrol />\n");
    register_project(dir.path(), "  <project name=\"x\" />\n").unwrap();
    let content = fs::read_to_string(dir.path().join(SERVER_CONFIG)).unwrap();
    assert_eq!(
      content,
      "<cruisecontrol>\n  <project name=\"x\" />\n</cruisecontrol>\n"
    );
  }

  #[test]
  fn register_splices_before_the_closing_tag() {
    let dir = install_with_config("<cruisecontrol>\n</cruisecontrol>\n");
    register_project(dir.path(), "  <project name=\"x\" />\n").unwrap();
    let content = fs::read_to_string(dir.path().join(SERVER_CONFIG)).unwrap();
    assert_eq!(
      content,
      "<cruisecontrol>\n  <project name=\"x\" />\n</cruisecontrol>\n"
    );
  }

  #[test]
  fn register_without_a_root_element_fails() {
    let dir = install_with_config("<something-else />\n");
    let err = register_project(dir.path(), "x").unwrap_err();
    assert!(matches!(err, TaskError::ServerConfigMalformed(_)));
  }

  #[test]
  fn unregister_removes_the_named_element_only() {
    let dir = install_with_config(
      "<cruisecontrol>\n  <project name=\"keep\">\n  </project>\n  <project name=\"drop\">\n  </project>\n</cruisecontrol>\n",
    );
    assert!(unregister_project(dir.path(), "drop").unwrap());
    let content = fs::read_to_string(dir.path().join(SERVER_CONFIG)).unwrap();
    assert!(content.contains("<project name=\"keep\">"));
    assert!(!content.contains("<project name=\"drop\">"));
  }

  #[test]
  fn unregister_reports_a_missing_element() {
    let dir = install_with_config("<cruisecontrol>\n</cruisecontrol>\n");
    assert!(!unregister_project(dir.path(), "ghost").unwrap());
  }
}
