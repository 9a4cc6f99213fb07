use super::diagnostics::Message;

use tiny_compiler::{Config, Driver};

use anstream::{eprintln, println};

pub enum CommandStatus {
  /// Command was successful, no errors were found
  Success,
  /// Command completed, but errors were found in the program
  Failure,
}

pub fn compile(filename: &str, config: Config) -> Result<CommandStatus, ()> {
  let mut driver = Driver::new(config);

  let outcome = match driver.compile(filename) {
    Ok(outcome) => outcome,
    Err(error) => {
      eprintln!("{}", Message::from(&error));
      return Err(());
    }
  };

  if outcome.error {
    eprintln!(
      "{}",
      Message::warning(format!("Errors found in `{filename}`")).with_hint(format!(
        "see the listing `{}`",
        outcome.listing.display()
      ))
    );
    return Ok(CommandStatus::Failure);
  }

  println!("Listing written to `{}`", outcome.listing.display());
  Ok(CommandStatus::Success)
}
