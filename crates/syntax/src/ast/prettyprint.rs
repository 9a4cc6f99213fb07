//! Print the syntax forest into an indented listing.
//!
//! Each node is printed on its own line, followed by its children one level deeper,
//! then by its siblings at the same level. The top level chain is indented once.

use super::{Forest, NodeIdx, node::*};
use crate::token::{TokenKind, print_operator_symbol};
use std::fmt;

/// Spaces added for each level of nesting
const INDENT: usize = 2;

impl fmt::Display for Forest {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    print_chain(f, self, self.root(), 1)
  }
}

/// Write the forest, starting from its root, as an indented listing
pub fn print_tree(out: &mut impl fmt::Write, forest: &Forest) -> fmt::Result {
  write!(out, "{forest}")
}

/// A chain of nodes starting from any node in a [`Forest`], which can be displayed
#[derive(Clone, Copy)]
pub struct Subtree<'forest> {
  forest: &'forest Forest,
  start: NodeIdx,
}
impl Forest {
  /// Display the chain starting at `start`, as if it were the top level
  pub fn subtree(&self, start: NodeIdx) -> Subtree<'_> {
    Subtree {
      forest: self,
      start,
    }
  }
}
impl fmt::Display for Subtree<'_> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    print_chain(f, self.forest, Some(self.start), 1)
  }
}

fn print_chain(
  f: &mut fmt::Formatter,
  forest: &Forest,
  start: Option<NodeIdx>,
  depth: usize,
) -> fmt::Result {
  for node in forest.siblings(start) {
    let node = &forest[node];
    node.pretty(f, depth)?;

    for child in node.children().iter().flatten() {
      print_chain(f, forest, Some(*child), depth + 1)?;
    }
  }

  Ok(())
}

trait PrettyPrint {
  fn pretty(&self, f: &mut fmt::Formatter, depth: usize) -> fmt::Result;
}

impl PrettyPrint for TreeNode {
  fn pretty(&self, f: &mut fmt::Formatter, depth: usize) -> fmt::Result {
    let indent = depth * INDENT;
    write!(f, "{:indent$}", "")?;

    match (self.kind(), &self.attribute) {
      (NodeKind::Statement(kind), _) => match kind {
        StmtKind::If => writeln!(f, "If"),
        StmtKind::Loop => writeln!(f, "While"),
        StmtKind::Return => writeln!(f, "Return"),
        StmtKind::Compound => writeln!(f, "Compound Statement"),
      },

      (NodeKind::Expression(ExpKind::Op), Attribute::Operator(operator)) => {
        writeln!(f, "Simple Expression")?;
        write!(f, "{:width$}Operator : ", "", width = indent + INDENT)?;
        print_operator_symbol(f, *operator)
      }
      (NodeKind::Expression(ExpKind::Const), Attribute::Value(value)) => {
        writeln!(f, "Constant : {value}")
      }
      (NodeKind::Expression(ExpKind::Id), Attribute::Name(name)) => {
        writeln!(f, "Variable : {name}")
      }
      (
        NodeKind::Expression(ExpKind::ArrayId),
        Attribute::Name(name) | Attribute::Array(ArrayAttribute { name, .. }),
      ) => writeln!(f, "Array ID : {name}"),
      (NodeKind::Expression(ExpKind::Call), Attribute::Name(name)) => writeln!(f, "Call to {name}"),
      (NodeKind::Expression(ExpKind::Assign), _) => writeln!(f, "Assign : ="),
      (NodeKind::Expression(_), _) => writeln!(f, "Unknown ExpNode kind"),

      (NodeKind::Declaration(DeclKind::Func), Attribute::Name(name)) => {
        writeln!(f, "Function Declare : {name}")
      }
      (NodeKind::Declaration(DeclKind::Var), Attribute::Name(name)) => {
        writeln!(f, "Variable Declare : {name}")
      }
      (NodeKind::Declaration(DeclKind::ArrVar), Attribute::Array(array)) if array.is_sized() => {
        writeln!(
          f,
          "Array Variable Allocate : {} of size {}",
          array.name, array.size
        )
      }
      (NodeKind::Declaration(DeclKind::ArrVar), Attribute::Array(array)) => {
        writeln!(f, "Array Variable Declare : {}", array.name)
      }
      // Parameters have no rendering of their own
      (NodeKind::Declaration(_), _) => writeln!(f, "Unknown Declaration Node Kind"),

      (NodeKind::Type(TypeKind::TypeName), Attribute::Type(token)) => match token {
        TokenKind::Int => writeln!(f, "Type : int"),
        TokenKind::Void => writeln!(f, "Type : void"),
        _ => writeln!(f, "Type : Unknown Variable Type"),
      },
      (NodeKind::Type(_), _) => writeln!(f, "Unknown Type Node Kind"),
    }
  }
}
