//! Run the phases of a compilation, writing a listing as they go
//!
//! Scanning always uses the [`Tokeniser`]; the later stages are provided to the
//! [`Driver`] by the caller. Once the error flag is raised, no further stage is run,
//! but everything already written to the listing is kept. A parser which runs out of
//! memory has the error written to the listing, and leaves an empty forest.

use crate::{
  CompileError, Config, Phase, paths,
  stages::{Analyzer, CodeGenerator, Parser},
  trace::TracingScanner,
};
use log::{debug, info, warn};
use std::{
  fs::{self, File},
  io::{BufWriter, Write},
  path::{Path, PathBuf},
};
use tiny_syntax::{Forest, ScanContext, Scanner, TokenKind, Tokeniser, token::COLUMN_WIDTH};

/// Width of the divider under the scan trace header
const SCAN_DIVIDER_WIDTH: usize = 3 * COLUMN_WIDTH;

/// The result of a compilation which ran to completion
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
  /// The listing file which was written
  pub listing: PathBuf,
  /// The code file, if code was generated
  pub code: Option<PathBuf>,
  /// Was an error found in the program?
  pub error: bool,
}

/// Runs a compilation with the stages it has been given
pub struct Driver<'stages> {
  config: Config,
  parser: Option<Box<dyn Parser + 'stages>>,
  analyzer: Option<Box<dyn Analyzer + 'stages>>,
  code_generator: Option<Box<dyn CodeGenerator + 'stages>>,
}
impl<'stages> Driver<'stages> {
  /// Create a driver with no stages beyond scanning
  #[must_use]
  pub fn new(config: Config) -> Self {
    Self {
      config,
      parser: None,
      analyzer: None,
      code_generator: None,
    }
  }

  /// Use a parser for the parse phase
  #[must_use]
  pub fn with_parser(mut self, parser: impl Parser + 'stages) -> Self {
    self.parser = Some(Box::new(parser));
    self
  }

  /// Use an analyzer for the analyze phase
  #[must_use]
  pub fn with_analyzer(mut self, analyzer: impl Analyzer + 'stages) -> Self {
    self.analyzer = Some(Box::new(analyzer));
    self
  }

  /// Use a code generator for the generate phase
  #[must_use]
  pub fn with_code_generator(mut self, code_generator: impl CodeGenerator + 'stages) -> Self {
    self.code_generator = Some(Box::new(code_generator));
    self
  }

  /// The configuration of the compilation
  #[must_use]
  pub fn config(&self) -> &Config {
    &self.config
  }

  /// Compile a program, writing the listing next to the source file
  ///
  /// The program name has `.tny` added if it has no extension.
  ///
  /// # Errors
  /// If a stage needed by the phase is missing, or a file can't be read or written
  pub fn compile(&mut self, program: &str) -> Result<Outcome, CompileError> {
    self.check_stages()?;

    let source_path = paths::source_path(program);
    let source = fs::read_to_string(&source_path).map_err(|error| {
      CompileError::SourceNotFound {
        path: source_path.clone(),
        source: error,
      }
    })?;

    let listing_path = paths::listing_path(&source_path);
    let file = File::create(&listing_path).map_err(|error| CompileError::ListingCreate {
      path: listing_path.clone(),
      source: error,
    })?;
    let mut listing = BufWriter::new(file);
    info!(
      "compiling `{}` into `{}`",
      source_path.display(),
      listing_path.display()
    );

    writeln!(listing, "\nTINY COMPILATION: {}", source_path.display())?;

    let mut context = ScanContext::new();
    let code_path = paths::code_path(&source_path);
    let code = self.run(&source, &mut context, &mut listing, &code_path)?;
    listing.flush()?;

    Ok(Outcome {
      listing: listing_path,
      code,
      error: context.has_error(),
    })
  }

  /// Run the phases over some source, writing into a listing
  ///
  /// Returns the path of the code file if code was generated, which is `code_path`.
  ///
  /// # Errors
  /// If a stage needed by the phase is missing, or writing fails
  pub fn run(
    &mut self,
    source: &str,
    context: &mut ScanContext,
    listing: &mut dyn Write,
    code_path: &Path,
  ) -> Result<Option<PathBuf>, CompileError> {
    self.check_stages()?;
    let config = self.config;

    if config.phase == Phase::Scan {
      scan(&config, source, context, listing)?;
      return Ok(None);
    }

    let mut forest = self.parse(source, context, listing)?;

    if config.trace_parse {
      writeln!(listing, "\nSyntax tree:")?;
      write!(listing, "{forest}")?;
    }

    if config.phase < Phase::Analyze || skip_after_error(context, "analysis") {
      return Ok(None);
    }
    self.analyze(&mut forest, context, listing)?;

    if config.phase < Phase::Generate || skip_after_error(context, "code generation") {
      return Ok(None);
    }
    self.generate(&forest, code_path).map(Some)
  }

  fn check_stages(&self) -> Result<(), CompileError> {
    let phase = self.config.phase;

    let missing = if phase >= Phase::Parse && self.parser.is_none() {
      Some("parser")
    } else if phase >= Phase::Analyze && self.analyzer.is_none() {
      Some("analyzer")
    } else if phase >= Phase::Generate && self.code_generator.is_none() {
      Some("code generator")
    } else {
      None
    };

    match missing {
      Some(stage) => Err(CompileError::MissingStage { stage, phase }),
      None => Ok(()),
    }
  }

  fn missing_stage(&self, stage: &'static str) -> CompileError {
    CompileError::MissingStage {
      stage,
      phase: self.config.phase,
    }
  }

  fn parse(
    &mut self,
    source: &str,
    context: &mut ScanContext,
    listing: &mut dyn Write,
  ) -> Result<Forest, CompileError> {
    let config = self.config;
    let error = self.missing_stage("parser");
    let parser = self.parser.as_deref_mut().ok_or(error)?;

    let mut tokeniser = Tokeniser::from(source);
    let mut scanner = tracing_scanner(&config, &mut tokeniser, listing, source);

    debug!("parsing");
    let result = parser.parse(&mut scanner, context);
    scanner.finish()?;

    match result {
      Ok(forest) => {
        debug!("parsed {} nodes", forest.len());
        Ok(forest)
      }
      Err(error) => {
        warn!("parsing abandoned: {error}");
        writeln!(listing, "{error}")?;
        context.flag_error();
        Ok(Forest::new())
      }
    }
  }

  fn analyze(
    &mut self,
    forest: &mut Forest,
    context: &mut ScanContext,
    listing: &mut dyn Write,
  ) -> Result<(), CompileError> {
    let trace = self.config.trace_analyze;
    let error = self.missing_stage("analyzer");
    let analyzer = self.analyzer.as_deref_mut().ok_or(error)?;

    if trace {
      writeln!(listing, "\nBuilding Symbol Table...")?;
    }
    analyzer.build_symbol_table(forest, context, listing)?;

    if trace {
      writeln!(listing, "\nChecking Types...")?;
    }
    analyzer.type_check(forest, context, listing)?;

    if trace {
      writeln!(listing, "\nType Checking Finished")?;
    }

    Ok(())
  }

  fn generate(&mut self, forest: &Forest, code_path: &Path) -> Result<PathBuf, CompileError> {
    let trace = self.config.trace_code;
    let error = self.missing_stage("code generator");
    let code_generator = self.code_generator.as_deref_mut().ok_or(error)?;

    let file = File::create(code_path).map_err(|error| CompileError::CodeCreate {
      path: code_path.to_owned(),
      source: error,
    })?;
    let mut code = BufWriter::new(file);

    info!("generating code into `{}`", code_path.display());
    code_generator
      .generate(forest, code_path, &mut code, trace)
      .and_then(|()| code.flush())
      .map_err(|error| CompileError::CodeWrite {
        path: code_path.to_owned(),
        source: error,
      })?;

    Ok(code_path.to_owned())
  }
}

fn scan(
  config: &Config,
  source: &str,
  context: &mut ScanContext,
  listing: &mut dyn Write,
) -> Result<(), CompileError> {
  if config.trace_scan {
    writeln!(
      listing,
      "\n{:<width$}{:<width$}{:<width$}",
      "line number",
      "token",
      "lexeme",
      width = COLUMN_WIDTH
    )?;
    writeln!(listing, "{}", "=".repeat(SCAN_DIVIDER_WIDTH))?;
  }

  let mut tokeniser = Tokeniser::from(source);
  let mut scanner = tracing_scanner(config, &mut tokeniser, listing, source);
  while scanner.next_token(context).kind != TokenKind::EndOfFile {}
  scanner.finish()?;

  debug!("scanned up to line {}", context.line());
  Ok(())
}

fn tracing_scanner<'a, 'source>(
  config: &Config,
  tokeniser: &'a mut Tokeniser<'source>,
  listing: &'a mut dyn Write,
  source: &'source str,
) -> TracingScanner<'a, 'source> {
  let scanner = TracingScanner::new(tokeniser, listing).trace_scan(config.trace_scan);

  if config.echo_source {
    scanner.echo_source(source)
  } else {
    scanner
  }
}

fn skip_after_error(context: &ScanContext, stage: &str) -> bool {
  if context.has_error() {
    info!("errors were found, skipping {stage}");
  }

  context.has_error()
}
