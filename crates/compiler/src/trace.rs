//! Write tokens and source lines into the listing as a scanner produces them
//!
//! The adapter sits between a scanner and whatever pulls tokens from it, so the scan
//! trace is the same whether the tokens are consumed by the driver or by a parser.

use log::warn;
use std::{io, str::Lines};
use tiny_syntax::{ScanContext, Scanner, Token, TokenKind, token::COLUMN_WIDTH};

/// Wraps a scanner, tracing every token it returns into the listing
pub struct TracingScanner<'a, 'source> {
  scanner: &'a mut dyn Scanner<'source>,
  listing: &'a mut dyn io::Write,
  echo: Option<Echo<'source>>,
  trace_scan: bool,
  error: Option<io::Error>,
}
impl<'a, 'source> TracingScanner<'a, 'source> {
  /// Wrap a scanner, with nothing traced until enabled
  pub fn new(scanner: &'a mut dyn Scanner<'source>, listing: &'a mut dyn io::Write) -> Self {
    Self {
      scanner,
      listing,
      echo: None,
      trace_scan: false,
      error: None,
    }
  }

  /// Echo each line of the source before the first token on it
  pub fn echo_source(mut self, source: &'source str) -> Self {
    self.echo = Some(Echo {
      lines: source.lines(),
      echoed: 0,
    });
    self
  }

  /// Write each token with the line it is on
  pub fn trace_scan(mut self, enabled: bool) -> Self {
    self.trace_scan = enabled;
    self
  }

  /// Stop tracing, returning the first write error if there was one
  pub fn finish(self) -> io::Result<()> {
    self.error.map_or(Ok(()), Err)
  }

  fn trace(&mut self, token: &Token) -> io::Result<()> {
    if let Some(echo) = &mut self.echo {
      let line = match token.kind {
        TokenKind::EndOfFile => u32::MAX,
        _ => token.line,
      };
      echo.write_through(line, self.listing)?;
    }

    if self.trace_scan {
      write!(
        self.listing,
        "{:<width$}{}",
        token.line,
        token.full_form(),
        width = COLUMN_WIDTH
      )?;
    }

    Ok(())
  }
}
impl<'source> Scanner<'source> for TracingScanner<'_, 'source> {
  fn next_token(&mut self, context: &mut ScanContext) -> Token<'source> {
    let token = self.scanner.next_token(context);

    // after a failed write the listing is abandoned, the error is reported by `finish`
    if self.error.is_some() {
      return token;
    }

    if let Err(error) = self.trace(&token) {
      warn!("stopped tracing into the listing: {error}");
      self.error = Some(error);
    }

    token
  }
}

struct Echo<'source> {
  lines: Lines<'source>,
  echoed: u32,
}
impl Echo<'_> {
  fn write_through(&mut self, line: u32, listing: &mut dyn io::Write) -> io::Result<()> {
    while self.echoed < line {
      let Some(text) = self.lines.next() else {
        break;
      };

      self.echoed += 1;
      writeln!(listing, "{:>4}: {text}", self.echoed)?;
    }

    Ok(())
  }
}
