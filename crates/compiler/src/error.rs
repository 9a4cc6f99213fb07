use crate::Phase;
use std::{io, path::PathBuf};
use thiserror::Error;

/// An error which stops a compilation
#[derive(Debug, Error)]
pub enum CompileError {
  /// A stage needed by the phase has not been provided
  #[error("No {stage} is available to run the {phase} phase")]
  MissingStage {
    /// The name of the missing stage
    stage: &'static str,
    /// The phase which was requested
    phase: Phase,
  },
  /// The source file could not be read
  #[error("File {} not found", path.display())]
  SourceNotFound {
    /// The path which was tried
    path: PathBuf,
    /// Why it could not be read
    source: io::Error,
  },
  /// The listing file could not be created
  #[error("Unable to create listing file {}", path.display())]
  ListingCreate {
    /// The path of the listing
    path: PathBuf,
    /// Why it could not be created
    source: io::Error,
  },
  /// The code file could not be created
  #[error("Unable to open {}", path.display())]
  CodeCreate {
    /// The path of the code file
    path: PathBuf,
    /// Why it could not be created
    source: io::Error,
  },
  /// Writing to the code file failed
  #[error("Unable to write to {}", path.display())]
  CodeWrite {
    /// The path of the code file
    path: PathBuf,
    /// Why the write failed
    source: io::Error,
  },
  /// Writing to the listing failed
  #[error("Unable to write to the listing")]
  ListingWrite(#[from] io::Error),
}
impl CompileError {
  /// The title of the error
  #[must_use]
  pub fn title(&self) -> &'static str {
    match self {
      Self::MissingStage { .. } => "Missing Stage",
      Self::SourceNotFound { .. } => "File Not Found",
      Self::ListingCreate { .. } | Self::CodeCreate { .. } => "Unable To Create File",
      Self::CodeWrite { .. } | Self::ListingWrite(_) => "Unable To Write File",
    }
  }

  /// The full message of the error
  #[must_use]
  pub fn message(&self) -> String {
    match self {
      Self::MissingStage { .. } => self.to_string(),
      Self::SourceNotFound { source, .. }
      | Self::ListingCreate { source, .. }
      | Self::CodeCreate { source, .. }
      | Self::CodeWrite { source, .. }
      | Self::ListingWrite(source) => format!("{self} ({source})"),
    }
  }

  /// A suggestion of how to fix the error
  #[must_use]
  pub fn suggestion(&self) -> Option<String> {
    match self {
      Self::MissingStage { phase, .. } => {
        Some(format!("run an earlier phase than {phase}, or provide the stage"))
      }
      Self::SourceNotFound { .. } => {
        Some("a `.tny` extension is added when the file name has none".to_owned())
      }
      _ => None,
    }
  }
}
