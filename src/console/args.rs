// src/console/args.rs
use std::collections::HashMap;

/// Resolved value for one option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
  /// A switch that was present on the command line.
  Set,
  /// A value-taking option with its consumed (or defaulted) text.
  Text(String),
}

/// The outcome of one successful parse: the selected command, the resolved
/// option values keyed by long name, and the leftover positional arguments
/// in input order.
///
/// Each parse produces a fresh, independently owned instance; nothing here
/// points back into the matcher or the grammar definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleArgs {
  command: String,
  options: HashMap<String, OptionValue>,
  aliases: HashMap<String, String>,
  arguments: Vec<String>,
}

impl ConsoleArgs {
  pub(crate) fn new(
    command: String,
    options: HashMap<String, OptionValue>,
    aliases: HashMap<String, String>,
    arguments: Vec<String>,
  ) -> Self {
    ConsoleArgs {
      command,
      options,
      aliases,
      arguments,
    }
  }

  pub fn command(&self) -> &str {
    &self.command
  }

  /// Looks an option up by long name or short alias.
  pub fn option(&self, name: &str) -> Option<&OptionValue> {
    self.options.get(self.resolve(name))
  }

  /// The text value of a value-taking option, if it was set or defaulted.
  pub fn value(&self, name: &str) -> Option<&str> {
    match self.option(name) {
      Some(OptionValue::Text(text)) => Some(text),
      _ => None,
    }
  }

  /// True when the option was given on the command line or defaulted.
  pub fn is_set(&self, name: &str) -> bool {
    self.option(name).is_some()
  }

  /// Leftover positional arguments, in input order.
  pub fn arguments(&self) -> &[String] {
    &self.arguments
  }

  fn resolve<'a>(&'a self, name: &'a str) -> &'a str {
    self.aliases.get(name).map(String::as_str).unwrap_or(name)
  }
}
