//! # Tokens
//!
//! The closed set of lexical categories, and the two ways they are rendered into a
//! listing: the full form used by scan traces, and the symbol form used inside syntax
//! tree dumps.

use std::fmt;

/// Width of each column in a scan trace
pub const COLUMN_WIDTH: usize = 20;

/// Marker written by the symbol form for a kind which is not an operator
pub const NOT_AN_OPERATOR: &str = "Not assigned OP token";

/// A token produced by a scanner, a lexeme of the language
///
/// With the category of the token, the matched text and the line it ends on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'source> {
  /// The category of the token
  pub kind: TokenKind,
  /// The text matched for the token
  pub lexeme: &'source str,
  /// The 1-based line number the token ends on
  pub line: u32,
}
impl<'source> Token<'source> {
  /// Create a new token
  pub const fn new(kind: TokenKind, lexeme: &'source str, line: u32) -> Self {
    Self { kind, lexeme, line }
  }

  /// The full form of the token, see [`print_token`]
  pub fn full_form(&self) -> FullForm<'source> {
    FullForm {
      kind: self.kind,
      lexeme: self.lexeme,
    }
  }
}

/// The label and lexeme of a token, displayed in fixed width columns
#[derive(Clone, Copy, Debug)]
pub struct FullForm<'source> {
  kind: TokenKind,
  lexeme: &'source str,
}
impl fmt::Display for FullForm<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    print_token(f, self.kind, self.lexeme)
  }
}

/// The type of a token
///
/// Each kind has a stable integer code, starting with [`TokenKind::EndOfFile`] at `0`
/// and following the declaration order.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
  // Bookkeeping
  /// The end of the source
  EndOfFile,
  /// A character which could not be recognised
  Error,
  /// A comment which is never closed
  CommentError,

  // Keywords
  /// `if`
  If,
  /// `else`
  Else,
  /// `return`
  Return,
  /// `while`
  While,
  /// `for`
  For,
  /// `int`
  Int,
  /// `void`
  Void,
  /// `char`
  Char,

  // Values
  /// An identifier, a sequence of letters
  Identifier,
  /// A number, a sequence of digits
  Number,

  // Assignment + Comparators
  /// `=`
  Equal,
  /// `==`
  EqualEqual,
  /// `!=`
  BangEqual,
  /// `<`
  Less,
  /// `<=`
  LessEqual,
  /// `>`
  Greater,
  /// `>=`
  GreaterEqual,

  // Operators
  /// `+`
  Plus,
  /// `-`
  Minus,
  /// `*`
  Star,
  /// `/`
  Slash,

  // Brackets + Separators
  /// `(`
  LeftParen,
  /// `)`
  RightParen,
  /// `[`
  LeftSquare,
  /// `]`
  RightSquare,
  /// `{`
  LeftCurly,
  /// `}`
  RightCurly,
  /// `;`
  Semicolon,
  /// `:`
  Colon,
  /// `,`
  Comma,
}
impl TokenKind {
  /// Every token kind, ordered by code
  pub const ALL: [Self; 33] = [
    Self::EndOfFile,
    Self::Error,
    Self::CommentError,
    Self::If,
    Self::Else,
    Self::Return,
    Self::While,
    Self::For,
    Self::Int,
    Self::Void,
    Self::Char,
    Self::Identifier,
    Self::Number,
    Self::Equal,
    Self::EqualEqual,
    Self::BangEqual,
    Self::Less,
    Self::LessEqual,
    Self::Greater,
    Self::GreaterEqual,
    Self::Plus,
    Self::Minus,
    Self::Star,
    Self::Slash,
    Self::LeftParen,
    Self::RightParen,
    Self::LeftSquare,
    Self::RightSquare,
    Self::LeftCurly,
    Self::RightCurly,
    Self::Semicolon,
    Self::Colon,
    Self::Comma,
  ];

  /// The integer code of the kind
  #[must_use]
  pub const fn code(self) -> u8 {
    self as u8
  }

  /// Get the kind for an integer code, if the code is mapped
  #[must_use]
  pub fn from_code(code: i32) -> Option<Self> {
    usize::try_from(code)
      .ok()
      .and_then(|index| Self::ALL.get(index))
      .copied()
  }

  /// The fixed label used in listings, independent of the lexeme
  #[must_use]
  pub const fn label(self) -> &'static str {
    match self {
      Self::EndOfFile => "EOF",
      Self::Error => "ERROR",
      Self::CommentError => "COMMENT_ERROR",

      Self::If => "IF",
      Self::Else => "ELSE",
      Self::Return => "RETURN",
      Self::While => "WHILE",
      Self::For => "FOR",
      Self::Int => "INT",
      Self::Void => "VOID",
      Self::Char => "CHAR",

      Self::Identifier => "ID",
      Self::Number => "NUM",

      Self::Equal => "ASSIGN",
      Self::EqualEqual => "EQ",
      Self::BangEqual => "NEQ",
      Self::Less => "LT",
      Self::LessEqual => "LTE",
      Self::Greater => "GT",
      Self::GreaterEqual => "GTE",

      Self::Plus => "PLUS",
      Self::Minus => "MINUS",
      Self::Star => "TIMES",
      Self::Slash => "OVER",

      Self::LeftParen => "LPAREN",
      Self::RightParen => "RPAREN",
      Self::LeftSquare => "LSQUAREB",
      Self::RightSquare => "RSQUAREB",
      Self::LeftCurly => "LCURLY",
      Self::RightCurly => "RCURLY",
      Self::Semicolon => "SEMICOLON",
      Self::Colon => "COLON",
      Self::Comma => "COMMA",
    }
  }

  /// The glyph of an operator, or `None` if the kind is not an operator
  #[must_use]
  pub const fn symbol(self) -> Option<&'static str> {
    match self {
      Self::Equal => Some("="),
      Self::EqualEqual => Some("=="),
      Self::BangEqual => Some("!="),
      Self::Less => Some("<"),
      Self::LessEqual => Some("<="),
      Self::Greater => Some(">"),
      Self::GreaterEqual => Some(">="),
      Self::Plus => Some("+"),
      Self::Minus => Some("-"),
      Self::Star => Some("*"),
      Self::Slash => Some("/"),
      _ => None,
    }
  }

  /// Is the kind an operator?
  #[must_use]
  pub const fn is_operator(self) -> bool {
    self.symbol().is_some()
  }

  /// Is the kind a reserved word?
  #[must_use]
  pub const fn is_keyword(self) -> bool {
    matches!(
      self,
      Self::If
        | Self::Else
        | Self::Return
        | Self::While
        | Self::For
        | Self::Int
        | Self::Void
        | Self::Char
    )
  }

  /// Is the kind one of the lexical error kinds?
  #[must_use]
  pub const fn is_error(self) -> bool {
    matches!(self, Self::Error | Self::CommentError)
  }

  /// Get the keyword kind for an identifier, if it is a reserved word
  #[must_use]
  pub fn keyword(identifier: &str) -> Option<Self> {
    match identifier {
      "if" => Some(Self::If),
      "else" => Some(Self::Else),
      "return" => Some(Self::Return),
      "while" => Some(Self::While),
      "for" => Some(Self::For),
      "int" => Some(Self::Int),
      "void" => Some(Self::Void),
      "char" => Some(Self::Char),
      _ => None,
    }
  }
}
impl fmt::Display for TokenKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.label())
  }
}

/// Write the full form of a token: the label and the lexeme in fixed width columns
pub fn print_token(out: &mut impl fmt::Write, kind: TokenKind, lexeme: &str) -> fmt::Result {
  writeln!(
    out,
    "{:<width$}{:<width$}",
    kind.label(),
    lexeme,
    width = COLUMN_WIDTH
  )
}

/// Write the full form of a token given by its raw integer code
///
/// Codes which do not map to a [`TokenKind`] write a diagnostic naming the code.
pub fn print_token_code(out: &mut impl fmt::Write, code: i32, lexeme: &str) -> fmt::Result {
  match TokenKind::from_code(code) {
    Some(kind) => print_token(out, kind, lexeme),
    None => writeln!(out, "Unknown token: {code}"),
  }
}

/// Write the operator glyph of a token kind, as embedded in syntax tree dumps
pub fn print_operator_symbol(out: &mut impl fmt::Write, kind: TokenKind) -> fmt::Result {
  writeln!(out, "{}", kind.symbol().unwrap_or(NOT_AN_OPERATOR))
}
