// src/console/definition.rs
use regex::Regex;

use crate::error::DefinitionError;

/// Value constraint for one option, fixed at registration time.
#[derive(Debug, Clone)]
pub enum ValueRule {
  /// Boolean switch; consumes no value token.
  None,
  /// Consumes one value token; any string accepted.
  Free,
  /// Consumes one value token which must equal a member, case-sensitive.
  /// Declaration order is preserved for error rendering.
  OneOf(Vec<String>),
  /// Consumes one value token which must match the pattern in full.
  Matches(Regex),
}

impl ValueRule {
  /// Builds a whitelist rule from string literals.
  pub fn one_of<I, S>(values: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    ValueRule::OneOf(values.into_iter().map(Into::into).collect())
  }

  /// Builds a full-match pattern rule. The pattern is anchored here, so
  /// callers write bare patterns and partial matches never pass.
  pub fn matches(pattern: &str) -> Result<Self, DefinitionError> {
    let regex =
      Regex::new(&format!("^(?:{})$", pattern)).map_err(|source| DefinitionError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
      })?;
    Ok(ValueRule::Matches(regex))
  }

  /// True when the option consumes a following value token.
  pub fn takes_value(&self) -> bool {
    !matches!(self, ValueRule::None)
  }
}

#[derive(Debug, Clone)]
pub struct CommandSpec {
  pub name: String,
  pub description: String,
}

#[derive(Debug, Clone)]
pub struct OptionSpec {
  pub command: String,
  pub short: Option<char>,
  pub long: String,
  pub description: String,
  pub rule: ValueRule,
  pub default: Option<String>,
  pub mandatory: bool,
}

impl OptionSpec {
  /// True when `name` is this option's long name or short alias.
  pub fn answers_to(&self, name: &str) -> bool {
    if self.long == name {
      return true;
    }
    let mut chars = name.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if self.short == Some(c))
  }
}

/// Static console grammar: every known command and the options scoped to
/// it. Built once during startup, read-only while matching.
#[derive(Debug, Default)]
pub struct Definition {
  commands: Vec<CommandSpec>,
  options: Vec<OptionSpec>,
}

impl Definition {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn add_command(&mut self, name: &str, description: &str) -> Result<(), DefinitionError> {
    if self.has_command(name) {
      return Err(DefinitionError::DuplicateCommand(name.to_string()));
    }
    self.commands.push(CommandSpec {
      name: name.to_string(),
      description: description.to_string(),
    });
    Ok(())
  }

  /// Registers an option under an existing command. The long name and the
  /// short alias (when given) must both be unused within that command.
  #[allow(clippy::too_many_arguments)]
  pub fn add_option(
    &mut self,
    command: &str,
    short: Option<char>,
    long: &str,
    description: &str,
    rule: ValueRule,
    default: Option<&str>,
    mandatory: bool,
  ) -> Result<(), DefinitionError> {
    if !self.has_command(command) {
      return Err(DefinitionError::UnknownCommand {
        command: command.to_string(),
        option: long.to_string(),
      });
    }
    let clash = self
      .options_for(command)
      .find(|option| option.long == long || (short.is_some() && option.short == short));
    if let Some(existing) = clash {
      let name = if existing.long == long {
        long.to_string()
      } else {
        short.map(|c| c.to_string()).unwrap_or_default()
      };
      return Err(DefinitionError::DuplicateOption {
        command: command.to_string(),
        name,
      });
    }
    self.options.push(OptionSpec {
      command: command.to_string(),
      short,
      long: long.to_string(),
      description: description.to_string(),
      rule,
      default: default.map(str::to_string),
      mandatory,
    });
    Ok(())
  }

  pub fn has_command(&self, name: &str) -> bool {
    self.commands.iter().any(|command| command.name == name)
  }

  pub fn command(&self, name: &str) -> Result<&CommandSpec, DefinitionError> {
    self
      .commands
      .iter()
      .find(|command| command.name == name)
      .ok_or_else(|| DefinitionError::CommandNotFound(name.to_string()))
  }

  /// Looks an option up by long name or short alias.
  pub fn option(&self, command: &str, name: &str) -> Result<&OptionSpec, DefinitionError> {
    self
      .options_for(command)
      .find(|option| option.answers_to(name))
      .ok_or_else(|| DefinitionError::OptionNotFound {
        command: command.to_string(),
        name: name.to_string(),
      })
  }

  /// Options registered for `command`, in registration order.
  pub fn options_for<'a, 'c>(
    &'a self,
    command: &'c str,
  ) -> impl Iterator<Item = &'a OptionSpec> + use<'a, 'c> {
    self.options.iter().filter(move |option| option.command == command)
  }

  pub fn commands(&self) -> &[CommandSpec] {
    &self.commands
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn definition_with_foo() -> Definition {
    let mut definition = Definition::new();
    definition.add_command("foo", "The foo command.").unwrap();
    definition
  }

  #[test]
  fn duplicate_command_is_rejected() {
    let mut definition = definition_with_foo();
    let err = definition.add_command("foo", "Again.").unwrap_err();
    assert!(matches!(err, DefinitionError::DuplicateCommand(name) if name == "foo"));
  }

  #[test]
  fn option_for_unknown_command_is_rejected() {
    let mut definition = definition_with_foo();
    let err = definition
      .add_option("nope", None, "bar", "", ValueRule::Free, None, false)
      .unwrap_err();
    assert!(matches!(err, DefinitionError::UnknownCommand { .. }));
  }

  #[test]
  fn duplicate_long_name_is_rejected() {
    let mut definition = definition_with_foo();
    definition
      .add_option("foo", Some('b'), "bar", "", ValueRule::Free, None, false)
      .unwrap();
    let err = definition
      .add_option("foo", None, "bar", "", ValueRule::Free, None, false)
      .unwrap_err();
    assert!(matches!(err, DefinitionError::DuplicateOption { name, .. } if name == "bar"));
  }

  #[test]
  fn duplicate_short_alias_is_rejected() {
    let mut definition = definition_with_foo();
    definition
      .add_option("foo", Some('b'), "bar", "", ValueRule::Free, None, false)
      .unwrap();
    let err = definition
      .add_option("foo", Some('b'), "baz", "", ValueRule::Free, None, false)
      .unwrap_err();
    assert!(matches!(err, DefinitionError::DuplicateOption { name, .. } if name == "b"));
  }

  #[test]
  fn same_option_name_is_allowed_on_different_commands() {
    let mut definition = definition_with_foo();
    definition.add_command("other", "Another command.").unwrap();
    definition
      .add_option("foo", None, "bar", "", ValueRule::Free, None, false)
      .unwrap();
    definition
      .add_option("other", None, "bar", "", ValueRule::Free, None, false)
      .unwrap();
  }

  #[test]
  fn lookup_by_short_alias_finds_the_option() {
    let mut definition = definition_with_foo();
    definition
      .add_option("foo", Some('b'), "bar", "", ValueRule::Free, None, false)
      .unwrap();
    assert_eq!(definition.option("foo", "b").unwrap().long, "bar");
    assert_eq!(definition.option("foo", "bar").unwrap().long, "bar");
    assert!(definition.option("foo", "baz").is_err());
  }

  #[test]
  fn command_lookup_fails_for_unregistered_names() {
    let definition = definition_with_foo();
    assert_eq!(definition.command("foo").unwrap().description, "The foo command.");
    let err = definition.command("missing").unwrap_err();
    assert!(matches!(err, DefinitionError::CommandNotFound(name) if name == "missing"));
  }

  #[test]
  fn invalid_pattern_fails_at_registration() {
    let err = ValueRule::matches("[unclosed").unwrap_err();
    assert!(matches!(err, DefinitionError::InvalidPattern { .. }));
  }
}
