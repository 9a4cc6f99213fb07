use owo_colors::OwoColorize;
use std::fmt;

#[derive(Debug)]
pub enum Severity {
  Error,
  Warning,
}
pub struct Message {
  pub title: String,
  pub body: String,
  pub hint: Option<String>,
  pub severity: Severity,
}
impl Message {
  pub fn warning(message: String) -> Self {
    Self {
      title: message,
      body: String::new(),
      hint: None,
      severity: Severity::Warning,
    }
  }

  pub fn with_hint(mut self, hint: String) -> Self {
    self.hint = Some(hint);
    self
  }
}
impl fmt::Display for Message {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.severity {
      Severity::Error => write!(f, "{}", "✕ Error".bold().red()),
      Severity::Warning => write!(f, "{}", "⚠ Warning".bold().yellow()),
    }?;
    writeln!(f, "{} {}", ":".bold(), &self.title.bold())?;

    if !self.body.is_empty() {
      writeln!(f, "{}", &self.body)?;
    }

    if let Some(hint) = &self.hint {
      writeln!(f, "{} {}", "hint:".italic().cyan(), hint)?;
    }

    Ok(())
  }
}
impl From<&tiny_compiler::CompileError> for Message {
  fn from(error: &tiny_compiler::CompileError) -> Self {
    Self {
      title: error.title().to_owned(),
      body: error.message(),
      hint: error.suggestion(),
      severity: Severity::Error,
    }
  }
}
