//! # Syntax
//! Tokens and syntax trees for the Tiny language
//!
//! The taxonomy of tokens, and how they are rendered into a listing, lives in [`token`].
//! Tokens are produced one at a time by a [`Scanner`]; the [`Tokeniser`] is the scanner
//! used by default.
//!
//! A parser builds a [`Forest`], an arena of nodes which reference each other with
//! integer handles. Nodes are stamped with the line the scanner is on when they are
//! created, which is tracked in the [`ScanContext`] along with whether any stage has
//! found an error. The forest can be printed back as an indented listing.

pub mod ast;
mod context;
pub mod token;
mod tokeniser;

#[cfg(test)]
mod test;

pub use ast::{Forest, LinkError, NodeIdx, OutOfMemory, copy_string, print_tree};
pub use context::ScanContext;
pub use token::{Token, TokenKind, print_operator_symbol, print_token, print_token_code};
pub use tokeniser::{Scanner, Tokeniser};

/// Get every token of a source code string, up to and including the end of file
///
/// # Examples
/// ```
/// use tiny_syntax::{ScanContext, TokenKind, tokenise};
///
/// let mut context = ScanContext::new();
/// let kinds: Vec<_> = tokenise("x = 1;", &mut context).map(|token| token.kind).collect();
///
/// assert_eq!(kinds.last(), Some(&TokenKind::EndOfFile));
/// assert!(!context.has_error());
/// ```
pub fn tokenise<'source, 'context>(
  source: &'source str,
  context: &'context mut ScanContext,
) -> impl Iterator<Item = Token<'source>> {
  let mut tokeniser = Tokeniser::from(source);
  let mut finished = false;

  std::iter::from_fn(move || {
    if finished {
      return None;
    }

    let token = tokeniser.next_token(context);
    finished = token.kind == TokenKind::EndOfFile;
    Some(token)
  })
}
