//! # Nodes
//!
//! A node of the syntax forest: its kind, the up to [`MAX_CHILDREN`] children, the
//! next node at the same level, and the payload written by the parser.

use super::NodeIdx;
use crate::token::TokenKind;

/// The number of child slots each node has
pub const MAX_CHILDREN: usize = 3;

/// A node of the syntax forest
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
  kind: NodeKind,
  line: u32,
  pub(super) children: [Option<NodeIdx>; MAX_CHILDREN],
  pub(super) sibling: Option<NodeIdx>,
  /// The node which owns this node, as its child or as its previous sibling
  pub(super) owner: Option<NodeIdx>,

  /// The payload of the node, set by the parser
  pub attribute: Attribute,
  /// The type of the node, set by the type checker
  pub exp_type: ExpType,
}
impl TreeNode {
  pub(super) fn new(kind: NodeKind, line: u32) -> Self {
    Self {
      kind,
      line,
      children: [None; MAX_CHILDREN],
      sibling: None,
      owner: None,
      attribute: Attribute::Empty,
      exp_type: ExpType::Void,
    }
  }

  /// The kind of node, fixed when the node was created
  pub fn kind(&self) -> NodeKind {
    self.kind
  }

  /// The source line the node was created on
  #[must_use]
  pub fn line(&self) -> u32 {
    self.line
  }

  /// The child slots of the node, in order
  #[must_use]
  pub fn children(&self) -> &[Option<NodeIdx>; MAX_CHILDREN] {
    &self.children
  }

  /// The child in a slot, if the slot is filled
  #[must_use]
  pub fn child(&self, slot: usize) -> Option<NodeIdx> {
    self.children.get(slot).copied().flatten()
  }

  /// The next node at the same level
  #[must_use]
  pub fn sibling(&self) -> Option<NodeIdx> {
    self.sibling
  }

  /// The identifier text of the node, if it has one
  #[must_use]
  pub fn name(&self) -> Option<&str> {
    match &self.attribute {
      Attribute::Name(name) | Attribute::Array(ArrayAttribute { name, .. }) => Some(name),
      _ => None,
    }
  }
}

/// The kind of a node, with the sub-kind for its category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
  /// A statement
  Statement(StmtKind),
  /// An expression
  Expression(ExpKind),
  /// A declaration
  Declaration(DeclKind),
  /// A type annotation
  Type(TypeKind),
}

/// The kinds of statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StmtKind {
  /// `if (..) .. else ..`
  If,
  /// `while (..) ..`
  Loop,
  /// `return ..;`
  Return,
  /// `{ .. }`
  Compound,
}

/// The kinds of expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpKind {
  /// A binary operation, e.g. `a <= b`
  Op,
  /// An assignment, e.g. `a = 1`
  Assign,
  /// An integer constant
  Const,
  /// A variable
  Id,
  /// An element of an array, e.g. `a[1]`
  ArrayId,
  /// A function call, e.g. `f(1)`
  Call,
}

/// The kinds of declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclKind {
  /// A function
  Func,
  /// A variable
  Var,
  /// An array variable
  ArrVar,
  /// A function parameter
  Param,
  /// An array function parameter
  ArrParam,
}

/// The kinds of type annotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
  /// A primitive type name, such as `int` or `void`
  TypeName,
}

/// The payload of a node, which variant is used depends on the kind of the node
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Attribute {
  /// No payload has been set
  #[default]
  Empty,
  /// An identifier
  Name(String),
  /// An integer constant
  Value(i32),
  /// The operator of an expression
  Operator(TokenKind),
  /// The primitive type token of a type annotation
  Type(TokenKind),
  /// An array name with its declared size
  Array(ArrayAttribute),
}

/// The name and size of an array declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayAttribute {
  /// The identifier of the array
  pub name: String,
  /// The declared size. A negative size means it is not given, as for parameters
  pub size: i32,
}
impl ArrayAttribute {
  /// An array without a declared size
  pub fn r#unsized(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      size: -1,
    }
  }

  /// Does the declaration give a size?
  #[must_use]
  pub fn is_sized(&self) -> bool {
    self.size >= 0
  }
}

/// The type of an expression, for type checking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ExpType {
  /// No value
  #[default]
  Void,
  /// An integer value
  Integer,
}
