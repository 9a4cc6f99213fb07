//! State shared by the stages of a compilation.

/// The position of the scanner and whether any stage has recorded an error
///
/// The line is written by the scanner and read by the node factory and diagnostics.
/// The error flag can be raised by any stage, and is checked before a later stage runs.
/// Once raised it is never cleared.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanContext {
  line: u32,
  error: bool,
}
impl ScanContext {
  /// Create a context positioned before the first line, with no errors
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// The line the scanner is currently on
  #[must_use]
  pub fn line(&self) -> u32 {
    self.line
  }

  /// Move the scanner to a line
  pub fn set_line(&mut self, line: u32) {
    self.line = line;
  }

  /// Has an error been recorded?
  #[must_use]
  pub fn has_error(&self) -> bool {
    self.error
  }

  /// Record that an error occurred
  pub fn flag_error(&mut self) {
    if !self.error {
      log::debug!("error flag raised at line {}", self.line);
    }
    self.error = true;
  }
}
