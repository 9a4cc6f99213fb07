//! # AST
//!
//! The syntax forest built by a parser.
//!
//! All nodes are stored in a single arena owned by the [`Forest`], and refer to each
//! other with [`NodeIdx`] handles, so the whole forest is dropped at once. Each node has
//! up to [`MAX_CHILDREN`] children and a sibling, the next node at the same level. A
//! program is the sibling chain starting at the root.
//!
//! Every child or sibling edge is an ownership edge: a node can only be linked in one
//! place, and a node can never be linked below itself, so the forest can not contain
//! cycles.

use crate::context::ScanContext;
use std::{fmt, iter, num::NonZero, ops};
use thiserror::Error;

pub mod node;
mod prettyprint;

pub use node::{
  ArrayAttribute, Attribute, DeclKind, ExpKind, ExpType, MAX_CHILDREN, NodeKind, StmtKind,
  TreeNode, TypeKind,
};
pub use prettyprint::{Subtree, print_tree};

/// A forest of syntax tree nodes
#[must_use]
#[derive(Debug, Default, Clone)]
pub struct Forest {
  nodes: Vec<TreeNode>,
  root: Option<NodeIdx>,
}
impl Forest {
  /// Create an empty forest
  pub fn new() -> Self {
    Self::default()
  }

  /// Create a statement node on the current line of the context
  ///
  /// # Errors
  /// If the node can't be allocated
  pub fn new_statement(
    &mut self,
    kind: StmtKind,
    context: &ScanContext,
  ) -> Result<NodeIdx, OutOfMemory> {
    self.add_node(NodeKind::Statement(kind), context)
  }

  /// Create an expression node on the current line of the context, with type `Void`
  ///
  /// # Errors
  /// If the node can't be allocated
  pub fn new_expression(
    &mut self,
    kind: ExpKind,
    context: &ScanContext,
  ) -> Result<NodeIdx, OutOfMemory> {
    self.add_node(NodeKind::Expression(kind), context)
  }

  /// Create a declaration node on the current line of the context
  ///
  /// # Errors
  /// If the node can't be allocated
  pub fn new_declaration(
    &mut self,
    kind: DeclKind,
    context: &ScanContext,
  ) -> Result<NodeIdx, OutOfMemory> {
    self.add_node(NodeKind::Declaration(kind), context)
  }

  /// Create a type node on the current line of the context
  ///
  /// # Errors
  /// If the node can't be allocated
  pub fn new_type(&mut self, kind: TypeKind, context: &ScanContext) -> Result<NodeIdx, OutOfMemory> {
    self.add_node(NodeKind::Type(kind), context)
  }

  fn add_node(&mut self, kind: NodeKind, context: &ScanContext) -> Result<NodeIdx, OutOfMemory> {
    let line = context.line();

    self.nodes.try_reserve(1).map_err(|_| OutOfMemory { line })?;
    let id = u32::try_from(self.nodes.len() + 1)
      .ok()
      .and_then(NonZero::new)
      .ok_or(OutOfMemory { line })?;

    self.nodes.push(TreeNode::new(kind, line));
    Ok(NodeIdx(id))
  }

  /// The first node of the top level chain
  #[must_use]
  pub fn root(&self) -> Option<NodeIdx> {
    self.root
  }

  /// Make a node the start of the top level chain
  ///
  /// # Errors
  /// If the node is already linked elsewhere
  pub fn set_root(&mut self, node: NodeIdx) -> Result<(), LinkError> {
    if self.root == Some(node) {
      return Ok(());
    }
    if self[node].owner.is_some() {
      return Err(LinkError::AlreadyOwned(node));
    }

    self.root = Some(node);
    Ok(())
  }

  /// Put a node into a child slot of a parent
  ///
  /// Returns the node previously in the slot, which is now detached.
  ///
  /// # Errors
  /// If the slot doesn't exist, the child is already linked, or the child is an
  /// ancestor of the parent
  pub fn set_child(
    &mut self,
    parent: NodeIdx,
    slot: usize,
    child: NodeIdx,
  ) -> Result<Option<NodeIdx>, LinkError> {
    if slot >= MAX_CHILDREN {
      return Err(LinkError::SlotOutOfRange(slot));
    }
    if self[parent].children[slot] == Some(child) {
      return Ok(None);
    }
    self.check_link(parent, child)?;

    let previous = self[parent].children[slot].replace(child);
    self.take_ownership(parent, child, previous);
    Ok(previous)
  }

  /// Set the next node at the same level as a node
  ///
  /// Returns the node which was previously next, which is now detached.
  ///
  /// # Errors
  /// If the next node is already linked, or is an ancestor of the node
  pub fn set_sibling(
    &mut self,
    node: NodeIdx,
    next: NodeIdx,
  ) -> Result<Option<NodeIdx>, LinkError> {
    if self[node].sibling == Some(next) {
      return Ok(None);
    }
    self.check_link(node, next)?;

    let previous = self[node].sibling.replace(next);
    self.take_ownership(node, next, previous);
    Ok(previous)
  }

  /// Add a node to the end of the chain starting at `head`
  ///
  /// # Errors
  /// If the node is already linked, or is an ancestor of the chain
  pub fn append_sibling(&mut self, head: NodeIdx, node: NodeIdx) -> Result<(), LinkError> {
    let last = self.siblings(Some(head)).last().unwrap_or(head);
    self.set_sibling(last, node).map(|_| ())
  }

  fn check_link(&self, owner: NodeIdx, target: NodeIdx) -> Result<(), LinkError> {
    if self[target].owner.is_some() || self.root == Some(target) {
      return Err(LinkError::AlreadyOwned(target));
    }

    // The target has no owner, so it is an ancestor only if it is reached from the owner
    let mut current = Some(owner);
    while let Some(node) = current {
      if node == target {
        return Err(LinkError::Cycle(target));
      }
      current = self[node].owner;
    }

    Ok(())
  }

  fn take_ownership(&mut self, owner: NodeIdx, target: NodeIdx, previous: Option<NodeIdx>) {
    if let Some(previous) = previous {
      self[previous].owner = None;
    }
    self[target].owner = Some(owner);
  }

  /// Iterate over a chain of siblings, starting with `start`
  pub fn siblings(&self, start: Option<NodeIdx>) -> impl Iterator<Item = NodeIdx> + '_ {
    iter::successors(start, |node| self[*node].sibling)
  }

  /// All nodes in the forest, linked or not, in the order they were created
  pub fn nodes(&self) -> impl Iterator<Item = (NodeIdx, &TreeNode)> {
    // nodes are only stored if their id fits, so every node is paired with its id
    (1..=u32::MAX)
      .filter_map(NonZero::new)
      .map(NodeIdx)
      .zip(&self.nodes)
  }

  /// The number of nodes in the forest
  #[must_use]
  pub fn len(&self) -> usize {
    self.nodes.len()
  }

  /// Does the forest have no nodes?
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.nodes.is_empty()
  }
}

impl ops::Index<NodeIdx> for Forest {
  type Output = TreeNode;

  fn index(&self, index: NodeIdx) -> &Self::Output {
    &self.nodes[index.position()]
  }
}
impl ops::IndexMut<NodeIdx> for Forest {
  fn index_mut(&mut self, index: NodeIdx) -> &mut Self::Output {
    &mut self.nodes[index.position()]
  }
}

/// A handle to a node within a [`Forest`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIdx(NonZero<u32>);
impl NodeIdx {
  fn position(self) -> usize {
    self.0.get() as usize - 1
  }
}
impl fmt::Display for NodeIdx {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "#{}", self.0)
  }
}

/// Memory for a node or string could not be allocated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Out of memory error at line {line}")]
pub struct OutOfMemory {
  /// The line being scanned when the allocation failed
  pub line: u32,
}

/// A link between two nodes which would break the shape of the forest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LinkError {
  /// There is no child slot with this index
  #[error("child slot {0} does not exist, nodes have {MAX_CHILDREN} children")]
  SlotOutOfRange(usize),
  /// The node is already a child, sibling, or root
  #[error("node {0} is already linked into the forest")]
  AlreadyOwned(NodeIdx),
  /// The node is an ancestor of where it would be linked
  #[error("linking node {0} would create a cycle")]
  Cycle(NodeIdx),
}

/// Make an owned copy of a name, so it can outlive the buffer it came from
///
/// # Errors
/// If the copy can't be allocated
pub fn copy_string(
  source: Option<&str>,
  context: &ScanContext,
) -> Result<Option<String>, OutOfMemory> {
  let Some(source) = source else {
    return Ok(None);
  };

  let mut copy = String::new();
  copy
    .try_reserve_exact(source.len())
    .map_err(|_| OutOfMemory {
      line: context.line(),
    })?;
  copy.push_str(source);

  Ok(Some(copy))
}
