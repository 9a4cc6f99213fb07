//! # Tiny
//! A compiler front end for the Tiny language.
//!
//! Scans a source file, writing a listing of its tokens next to it.

#![allow(clippy::print_stdout)]

mod commands;
mod diagnostics;

use clap::Parser;
use clap::builder::styling::{AnsiColor, Style, Styles};
use commands::CommandStatus;
use log::{Level, LevelFilter, trace};
use owo_colors::*;
use std::{io, process};
use tiny_compiler::Config;

const STYLES: Styles = Styles::styled()
  .usage(Style::new().italic())
  .header(AnsiColor::BrightYellow.on_default().bold());

fn coloured_header() -> String {
  format!(
    "{} {}",
    "Tiny".fg::<owo_colors::colors::css::Orange>().bold(),
    concat!("(v", env!("CARGO_PKG_VERSION"), ")").italic().dimmed()
  )
}

fn about() -> String {
  format!(
    "{}\nCompiles a Tiny program, writing a listing file next to the source.",
    coloured_header()
  )
}

#[derive(Debug, Parser)]
#[clap(name = "tiny", version, about = about(), styles = STYLES)]
struct App {
  /// The file to compile. If it has no extension, `.tny` is added
  file: String,

  /// Echo each source line into the listing
  #[clap(long)]
  echo_source: bool,
  /// Don't write the scanned tokens into the listing
  #[clap(long)]
  no_trace_scan: bool,

  /// The level of log messages to show [default: warn]
  #[clap(long, env = "TINY_LOG")]
  log_level: Option<LevelFilter>,
}

fn init_logging(level: LevelFilter) -> Result<(), log::SetLoggerError> {
  let stderr: Box<dyn io::Write + Send> = Box::new(anstream::stderr());

  fern::Dispatch::new()
    .format(|out, message, record| {
      let level = format!("{:>5}", record.level());
      let level = match record.level() {
        Level::Error => level.bright_red().to_string(),
        Level::Warn => level.yellow().to_string(),
        Level::Info => level.green().to_string(),
        Level::Debug => level.blue().to_string(),
        Level::Trace => level.dimmed().to_string(),
      };

      out.finish(format_args!(
        "{level} {}{}{} {message}",
        "[".dimmed(),
        record.target().dimmed(),
        "]".dimmed()
      ));
    })
    .level(level)
    .chain(stderr)
    .apply()
}

fn main() -> process::ExitCode {
  let app = App::parse();

  if let Err(error) = init_logging(app.log_level.unwrap_or(LevelFilter::Warn)) {
    anstream::eprintln!("{}", diagnostics::Message::warning(error.to_string()));
  }
  trace!("starting tiny with {app:?}");

  let config = Config {
    echo_source: app.echo_source,
    trace_scan: !app.no_trace_scan,
    ..Config::default()
  };

  match commands::compile(&app.file, config) {
    Ok(CommandStatus::Success) => process::ExitCode::from(0),
    Ok(CommandStatus::Failure) => process::ExitCode::from(1),
    Err(()) => process::ExitCode::from(2),
  }
}
