// src/console/input.rs
use std::collections::HashMap;

use crate::console::args::{ConsoleArgs, OptionValue};
use crate::console::definition::{Definition, OptionSpec, ValueRule};
use crate::error::ConsoleError;

/// Matches one raw argument vector against a grammar definition.
///
/// The matcher is a single greedy left-to-right pass: each token is the
/// command, a known option, the value demanded by the preceding option, or
/// a leftover positional argument. No backtracking, no lookahead beyond one
/// token, so every error is attributable to a single offending token.
pub struct ConsoleInput<'a> {
  definition: &'a Definition,
  argv: Vec<String>,
}

impl<'a> ConsoleInput<'a> {
  /// `argv` is the raw argument vector, excluding the program name. It is
  /// passed in explicitly; the matcher never reads ambient process state.
  pub fn new(definition: &'a Definition, argv: Vec<String>) -> Self {
    ConsoleInput { definition, argv }
  }

  /// Runs the match. The matcher holds no state across calls; parsing the
  /// same input twice yields two equal, independent results.
  pub fn parse(&self) -> Result<ConsoleArgs, ConsoleError> {
    let command = self.resolve_command()?;

    let mut options: HashMap<String, OptionValue> = HashMap::new();
    let mut arguments: Vec<String> = Vec::new();

    let mut index = 1;
    while index < self.argv.len() {
      let token = &self.argv[index];
      index += 1;

      let Some(option) = self.lookup(command, token) else {
        // Unmatched tokens are residual positionals, not errors. Commands
        // accept trailing positional arguments such as a target directory.
        arguments.push(token.clone());
        continue;
      };

      if !option.rule.takes_value() {
        options.insert(option.long.clone(), OptionValue::Set);
        continue;
      }

      let value = match self.argv.get(index) {
        // A following token with an option prefix is never a value.
        Some(next) if !next.starts_with('-') => next,
        _ => return Err(ConsoleError::MissingOptionValue(token.clone())),
      };
      index += 1;

      check_value(option, value)?;
      options.insert(option.long.clone(), OptionValue::Text(value.clone()));
    }

    self.settle_absent_options(command, &mut options)?;

    let aliases = self
      .definition
      .options_for(command)
      .filter_map(|option| option.short.map(|short| (short.to_string(), option.long.clone())))
      .collect();

    Ok(ConsoleArgs::new(
      command.to_string(),
      options,
      aliases,
      arguments,
    ))
  }

  fn resolve_command(&self) -> Result<&str, ConsoleError> {
    let Some(first) = self.argv.first() else {
      return Err(ConsoleError::MissingCommand);
    };
    if self.definition.has_command(first) {
      Ok(first)
    } else {
      Err(ConsoleError::UnknownCommand(first.clone()))
    }
  }

  /// Resolves a `--long` or `-s` token to an option of `command`. Tokens
  /// without an option prefix, and prefixed tokens naming no registered
  /// option, resolve to nothing and fall through as positionals.
  fn lookup(&self, command: &str, token: &str) -> Option<&OptionSpec> {
    if let Some(long) = token.strip_prefix("--") {
      self
        .definition
        .options_for(command)
        .find(|option| option.long == long)
    } else if let Some(short) = token.strip_prefix('-') {
      let mut chars = short.chars();
      match (chars.next(), chars.next()) {
        (Some(c), None) => self
          .definition
          .options_for(command)
          .find(|option| option.short == Some(c)),
        _ => None,
      }
    } else {
      None
    }
  }

  /// Post-scan pass over the command's registered options: absent options
  /// take their default, and a mandatory option with no default fails.
  /// Runs only after a clean scan, so a malformed early option always
  /// preempts a missing-mandatory report.
  fn settle_absent_options(
    &self,
    command: &str,
    options: &mut HashMap<String, OptionValue>,
  ) -> Result<(), ConsoleError> {
    for option in self.definition.options_for(command) {
      if options.contains_key(&option.long) {
        continue;
      }
      match &option.default {
        Some(default) => {
          options.insert(option.long.clone(), OptionValue::Text(default.clone()));
        }
        None if option.mandatory => {
          return Err(ConsoleError::MandatoryOptionNotSet(option.long.clone()));
        }
        None => {}
      }
    }
    Ok(())
  }
}

fn check_value(option: &OptionSpec, value: &str) -> Result<(), ConsoleError> {
  match &option.rule {
    ValueRule::OneOf(allowed) => {
      if allowed.iter().any(|member| member == value) {
        Ok(())
      } else {
        Err(ConsoleError::ValueNotInList {
          option: option.long.clone(),
          allowed: allowed.clone(),
        })
      }
    }
    ValueRule::Matches(regex) => {
      if regex.is_match(value) {
        Ok(())
      } else {
        Err(ConsoleError::InvalidValueFormat(option.long.clone()))
      }
    }
    ValueRule::None | ValueRule::Free => Ok(()),
  }
}
