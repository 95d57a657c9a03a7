// src/commands.rs
//! Maps console verbs to their grammar and their installer tasks.

use std::fmt::Write as _;

use crate::console::{ConsoleArgs, Definition, ValueRule};
use crate::error::DefinitionError;
use crate::tasks::{CleanTask, DeleteTask, ProjectTask, Task};

/// Declares the full console grammar. Any error here is a mistake in this
/// file, not in user input.
pub fn build_definition() -> Result<Definition, DefinitionError> {
  let mut definition = Definition::new();

  definition.add_command("project", "Register and scaffold a new build project.")?;
  definition.add_option(
    "project",
    Some('p'),
    "project-name",
    "Name of the new project.",
    ValueRule::Free,
    None,
    true,
  )?;
  definition.add_option(
    "project",
    Some('v'),
    "version-control",
    "Version control system backing the project.",
    ValueRule::one_of(["git", "svn"]),
    Some("git"),
    false,
  )?;
  definition.add_option(
    "project",
    Some('i'),
    "interval",
    "Schedule interval in seconds.",
    ValueRule::matches("[0-9]+")?,
    Some("60"),
    false,
  )?;

  definition.add_command("clean", "Prune old build logs of a project.")?;
  definition.add_option(
    "clean",
    Some('p'),
    "project-name",
    "Name of the project to clean.",
    ValueRule::Free,
    None,
    true,
  )?;
  definition.add_option(
    "clean",
    Some('k'),
    "keep",
    "Number of newest build logs to keep.",
    ValueRule::matches("[0-9]+")?,
    Some("10"),
    false,
  )?;

  definition.add_command("delete", "Remove a project and its server registration.")?;
  definition.add_option(
    "delete",
    Some('p'),
    "project-name",
    "Name of the project to remove.",
    ValueRule::Free,
    None,
    true,
  )?;
  definition.add_option(
    "delete",
    Some('f'),
    "force",
    "Actually remove; without it the task only reports.",
    ValueRule::None,
    None,
    false,
  )?;

  Ok(definition)
}

/// Tasks for the resolved command, in execution order.
pub fn tasks_for(args: &ConsoleArgs) -> Vec<Box<dyn Task>> {
  match args.command() {
    "project" => vec![Box::new(ProjectTask::from_args(args))],
    "clean" => vec![Box::new(CleanTask::from_args(args))],
    "delete" => vec![Box::new(DeleteTask::from_args(args))],
    // parse() only resolves registered commands.
    _ => Vec::new(),
  }
}

/// Renders the command and option overview from the grammar's display
/// texts.
pub fn usage(definition: &Definition) -> String {
  let mut out = String::new();
  out.push_str("Usage: stagehand <command> [options] <ci-install-dir>\n");
  for command in definition.commands() {
    let _ = writeln!(out, "\n{:<10} {}", command.name, command.description);
    for option in definition.options_for(&command.name) {
      let short = option
        .short
        .map(|c| format!("-{}, ", c))
        .unwrap_or_else(|| "    ".to_string());
      let name = format!("{}--{}", short, option.long);
      let required = if option.mandatory && option.default.is_none() {
        " [required]"
      } else {
        ""
      };
      let _ = writeln!(out, "  {:<24} {}{}", name, option.description, required);
    }
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::console::ConsoleInput;

  #[test]
  fn grammar_builds_without_definition_errors() {
    let definition = build_definition().unwrap();
    assert!(definition.has_command("project"));
    assert!(definition.has_command("clean"));
    assert!(definition.has_command("delete"));
  }

  #[test]
  fn every_command_dispatches_to_one_task() {
    let definition = build_definition().unwrap();
    for (verb, extra) in [
      ("project", vec!["--project-name", "x"]),
      ("clean", vec!["--project-name", "x"]),
      ("delete", vec!["--project-name", "x"]),
    ] {
      let mut argv = vec![verb.to_string()];
      argv.extend(extra.into_iter().map(str::to_string));
      let args = ConsoleInput::new(&definition, argv).parse().unwrap();
      assert_eq!(tasks_for(&args).len(), 1, "command {}", verb);
    }
  }

  #[test]
  fn usage_lists_commands_and_marks_required_options() {
    let definition = build_definition().unwrap();
    let usage = usage(&definition);
    assert!(usage.contains("project"));
    assert!(usage.contains("-p, --project-name"));
    assert!(usage.contains("[required]"));
  }
}
