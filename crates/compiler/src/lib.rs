//! # Compiler
//! Drives a compilation of a Tiny program
//!
//! A compilation reads a source file and writes a listing file next to it, tracing
//! each phase which is configured in the [`Config`]. Scanning is built in; parsing,
//! analysis and code generation are provided as [`Parser`], [`Analyzer`] and
//! [`CodeGenerator`] implementations.
//!
//! ```no_run
//! use tiny_compiler::{Config, Driver};
//!
//! let mut driver = Driver::new(Config::default());
//! let outcome = driver.compile("program")?;
//!
//! println!("listing written to {}", outcome.listing.display());
//! # Ok::<(), tiny_compiler::CompileError>(())
//! ```

mod config;
mod driver;
mod error;
pub mod paths;
mod stages;
mod trace;


pub use config::{Config, Phase};
pub use driver::{Driver, Outcome};
pub use error::CompileError;
pub use stages::{Analyzer, CodeGenerator, Parser};
pub use trace::TracingScanner;
