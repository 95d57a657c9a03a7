// src/main.rs
use std::env;
use std::process::ExitCode;

use stagehand::commands;
use stagehand::console::{ConsoleInput, Definition};
use stagehand::error::StagehandError;

fn main() -> ExitCode {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

  let definition = match commands::build_definition() {
    Ok(definition) => definition,
    Err(err) => {
      // Grammar construction errors are programming mistakes; abort.
      eprintln!("{}", err);
      return ExitCode::FAILURE;
    }
  };

  let argv: Vec<String> = env::args().skip(1).collect();
  log::debug!("Raw console args: {:?}", argv);

  match run(&definition, argv) {
    Ok(()) => ExitCode::SUCCESS,
    Err(StagehandError::Console(err)) => {
      eprintln!("{}", err);
      eprintln!();
      eprint!("{}", commands::usage(&definition));
      ExitCode::from(2)
    }
    Err(err) => {
      eprintln!("{}", err);
      ExitCode::FAILURE
    }
  }
}

fn run(definition: &Definition, argv: Vec<String>) -> Result<(), StagehandError> {
  let input = ConsoleInput::new(definition, argv);
  let args = input.parse()?;
  log::debug!("Parsed console args: {:?}", args);

  let tasks = commands::tasks_for(&args);
  for task in &tasks {
    task.validate()?;
  }
  for task in &tasks {
    task.execute()?;
  }
  Ok(())
}
