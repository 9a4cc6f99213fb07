//! The configuration options for a compilation
use std::fmt;

/// Configuration for a compilation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
  /// The last phase to run
  pub phase: Phase,
  /// Echo each source line into the listing
  pub echo_source: bool,
  /// Write each token into the listing as it is scanned
  pub trace_scan: bool,
  /// Write the syntax tree into the listing after parsing
  pub trace_parse: bool,
  /// Write progress messages into the listing during analysis
  pub trace_analyze: bool,
  /// Ask the code generator to annotate its output
  pub trace_code: bool,
}
impl Default for Config {
  fn default() -> Self {
    Self {
      phase: Phase::Scan,
      echo_source: false,
      trace_scan: true,
      trace_parse: false,
      trace_analyze: false,
      trace_code: false,
    }
  }
}

/// How far through the pipeline a compilation goes
///
/// Each phase includes all of the phases before it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
  /// Only scan the source into tokens
  #[default]
  Scan,
  /// Scan and parse into a syntax tree
  Parse,
  /// Parse, then build the symbol table and check types
  Analyze,
  /// Analyze, then generate code
  Generate,
}
impl fmt::Display for Phase {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Scan => write!(f, "scan"),
      Self::Parse => write!(f, "parse"),
      Self::Analyze => write!(f, "analyze"),
      Self::Generate => write!(f, "generate"),
    }
  }
}
