//! The stages after scanning, which are provided by the caller
//!
//! The driver only orchestrates them. Each stage reports problems it finds by raising
//! the error flag on the [`ScanContext`], after which no later stage is run.

use std::{io, path::Path};
use tiny_syntax::{Forest, OutOfMemory, ScanContext, Scanner};

/// Builds a syntax forest from a stream of tokens
pub trait Parser {
  /// Pull tokens from the scanner until the end of file, building a forest
  ///
  /// # Errors
  /// If a node or name can't be allocated, which abandons the forest
  fn parse<'source>(
    &mut self,
    scanner: &mut dyn Scanner<'source>,
    context: &mut ScanContext,
  ) -> Result<Forest, OutOfMemory>;
}

/// Checks the meaning of a syntax forest
pub trait Analyzer {
  /// Build the symbol table for a forest
  ///
  /// # Errors
  /// If writing to the listing fails
  fn build_symbol_table(
    &mut self,
    forest: &Forest,
    context: &mut ScanContext,
    listing: &mut dyn io::Write,
  ) -> io::Result<()>;

  /// Check and annotate the types of expressions in a forest
  ///
  /// # Errors
  /// If writing to the listing fails
  fn type_check(
    &mut self,
    forest: &mut Forest,
    context: &mut ScanContext,
    listing: &mut dyn io::Write,
  ) -> io::Result<()>;
}

/// Writes target code for a checked syntax forest
pub trait CodeGenerator {
  /// Generate code for the forest into `code`, which is the file at `path`
  ///
  /// # Errors
  /// If writing the code fails
  fn generate(
    &mut self,
    forest: &Forest,
    path: &Path,
    code: &mut dyn io::Write,
    trace_code: bool,
  ) -> io::Result<()>;
}
