//! Naming of the files a compilation reads and writes
//!
//! All output files sit next to the source file and share its stem.

use std::path::{Path, PathBuf};

/// Extension added to a program name which has none
pub const DEFAULT_EXTENSION: &str = "tny";
/// Suffix added to the stem of the source for the listing file
pub const LISTING_SUFFIX: &str = "_listing.txt";
/// Extension of the generated code file
pub const CODE_EXTENSION: &str = "tm";

/// The source file for a program name, adding the default extension if there is none
#[must_use]
pub fn source_path(program: &str) -> PathBuf {
  let path = PathBuf::from(program);

  if path.extension().is_some() {
    path
  } else {
    path.with_extension(DEFAULT_EXTENSION)
  }
}

/// The listing file for a source file
#[must_use]
pub fn listing_path(source: &Path) -> PathBuf {
  let stem = source.file_stem().unwrap_or_default().to_string_lossy();
  source.with_file_name(format!("{stem}{LISTING_SUFFIX}"))
}

/// The code file for a source file
#[must_use]
pub fn code_path(source: &Path) -> PathBuf {
  source.with_extension(CODE_EXTENSION)
}
