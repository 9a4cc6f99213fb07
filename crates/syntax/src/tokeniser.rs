use crate::{
  context::ScanContext,
  token::{Token, TokenKind},
};

/// Something which produces [`Token`]s one at a time
///
/// Once the end of the source is reached, it keeps producing [`TokenKind::EndOfFile`].
pub trait Scanner<'source> {
  /// Get the next token, updating the line of the context
  fn next_token(&mut self, context: &mut ScanContext) -> Token<'source>;
}

/// Convert a string of source code into [`Token`]s
pub struct Tokeniser<'source> {
  /// The source code to tokenise
  source: &'source str,
  /// The current position in the source code
  position: usize,
  /// The line of the current position
  line: u32,
}
impl<'source> From<&'source str> for Tokeniser<'source> {
  /// Create a new [Tokeniser] from a source code string
  fn from(value: &'source str) -> Self {
    Self {
      source: value,
      position: 0,
      line: u32::from(!value.is_empty()),
    }
  }
}
impl Tokeniser<'_> {
  /// Has the end of the source code been reached?
  fn is_end(&self, position: usize) -> bool {
    position >= self.source.len()
  }

  fn peek(&self, offset: usize) -> Option<u8> {
    self.source.as_bytes().get(self.position + offset).copied()
  }

  /// Step over a newline, the line only advances if there is more source after it
  fn newline(&mut self) {
    self.position += 1;
    if !self.is_end(self.position) {
      self.line += 1;
    }
  }

  /// Skip whitespace and comments
  ///
  /// If a comment is never closed, returns the position it started at.
  fn skip_trivia(&mut self) -> Result<(), usize> {
    loop {
      match self.peek(0) {
        Some(b' ' | b'\r' | b'\t') => self.position += 1,
        Some(b'\n') => self.newline(),
        Some(b'/') if self.peek(1) == Some(b'*') => {
          let start = self.position;
          self.position += 2;

          loop {
            match self.peek(0) {
              None => return Err(start),
              Some(b'*') if self.peek(1) == Some(b'/') => {
                self.position += 2;
                break;
              }
              Some(b'\n') => self.newline(),
              Some(_) => self.position += 1,
            }
          }
        }
        _ => return Ok(()),
      }
    }
  }

  /// Get the kind and length of the token at the current position
  fn get_next_token(&self) -> (TokenKind, usize) {
    let character = self.source.as_bytes()[self.position];
    let next_character = self.peek(1);

    match character {
      // Values
      b'0'..=b'9' => (TokenKind::Number, self.count_while(|c| c.is_ascii_digit())),
      b'a'..=b'z' | b'A'..=b'Z' => self.identifier(),

      // Brackets + Separators
      b'(' => (TokenKind::LeftParen, 1),
      b')' => (TokenKind::RightParen, 1),
      b'[' => (TokenKind::LeftSquare, 1),
      b']' => (TokenKind::RightSquare, 1),
      b'{' => (TokenKind::LeftCurly, 1),
      b'}' => (TokenKind::RightCurly, 1),
      b';' => (TokenKind::Semicolon, 1),
      b':' => (TokenKind::Colon, 1),
      b',' => (TokenKind::Comma, 1),

      // Operators
      b'+' => (TokenKind::Plus, 1),
      b'-' => (TokenKind::Minus, 1),
      b'*' => (TokenKind::Star, 1),
      b'/' => (TokenKind::Slash, 1),

      // Equalities
      b'!' if next_character == Some(b'=') => (TokenKind::BangEqual, 2),
      b'=' if next_character == Some(b'=') => (TokenKind::EqualEqual, 2),
      b'<' if next_character == Some(b'=') => (TokenKind::LessEqual, 2),
      b'>' if next_character == Some(b'=') => (TokenKind::GreaterEqual, 2),
      b'=' => (TokenKind::Equal, 1),
      b'<' => (TokenKind::Less, 1),
      b'>' => (TokenKind::Greater, 1),

      // Unknown character, consume the whole UTF-8 sequence
      x if (x & 0b1111_0000) == 0b1111_0000 => (TokenKind::Error, 4),
      x if (x & 0b1110_0000) == 0b1110_0000 => (TokenKind::Error, 3),
      x if (x & 0b1100_0000) == 0b1100_0000 => (TokenKind::Error, 2),
      _ => (TokenKind::Error, 1),
    }
  }

  fn count_while(&self, predicate: impl Fn(u8) -> bool) -> usize {
    self.source.as_bytes()[self.position..]
      .iter()
      .take_while(|c| predicate(**c))
      .count()
  }

  /// Get an identifier token, a sequence of letters, which may be a keyword
  fn identifier(&self) -> (TokenKind, usize) {
    let length = self.count_while(|c| c.is_ascii_alphabetic());
    let text = &self.source[self.position..self.position + length];

    (TokenKind::keyword(text).unwrap_or(TokenKind::Identifier), length)
  }
}
impl<'source> Scanner<'source> for Tokeniser<'source> {
  fn next_token(&mut self, context: &mut ScanContext) -> Token<'source> {
    let source = self.source;
    let token = match self.skip_trivia() {
      Err(start) => Token::new(
        TokenKind::CommentError,
        &source[start..start + 2],
        self.line,
      ),
      Ok(()) if self.is_end(self.position) => Token::new(TokenKind::EndOfFile, "", self.line),
      Ok(()) => {
        let (kind, length) = self.get_next_token();
        let start = self.position;
        self.position = (start + length).min(source.len());

        Token::new(kind, &source[start..self.position], self.line)
      }
    };

    context.set_line(self.line);
    if token.kind.is_error() {
      log::debug!("lexical error `{}` at line {}", token.lexeme, token.line);
      context.flag_error();
    }

    token
  }
}
