//! Composite behavior nodes.
//!
//! Composite nodes control the execution flow of an ordered list of children.
//! This module provides the two combinators: [`Sequence`] (AND logic) and
//! [`Selector`] (OR logic). Both share [`Composite`], which owns the children
//! and enforces that no [`Root`](crate::Root) is ever placed below them.

use crate::{Node, NodeKind, Result, Status, StructureViolation};

/// Ordered, append-only list of children shared by every composite.
///
/// Insertion order is evaluation order.
#[derive(Default)]
pub struct Composite {
    children: Vec<Box<dyn Node>>,
}

impl Composite {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `child`, rejecting a root.
    ///
    /// A rejected call leaves the child list untouched.
    pub fn push(&mut self, child: Box<dyn Node>) -> Result<()> {
        if child.kind() == NodeKind::Root {
            return Err(StructureViolation::RootInComposite.into());
        }
        self.children.push(child);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    fn iter_mut(&mut self) -> impl Iterator<Item = &mut Box<dyn Node>> {
        self.children.iter_mut()
    }
}

/// Executes children in order until one fails.
///
/// # Semantics
///
/// A `Sequence` node evaluates its children from first to last:
/// - If a child returns `Failure`, the sequence **stops immediately** and returns `Failure`
/// - If a child returns `Success`, the sequence **continues** to the next child
/// - If all children return `Success`, the sequence returns `Success`
/// - An empty sequence returns `Success`
///
/// This is analogous to a short-circuited logical AND (&&) operation.
#[derive(Default)]
pub struct Sequence {
    composite: Composite,
}

impl Sequence {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sequence holding `children`, in order.
    ///
    /// Fails on the first root found among them.
    pub fn with_children(children: Vec<Box<dyn Node>>) -> Result<Self> {
        let mut sequence = Self::new();
        for child in children {
            sequence.add_child(child)?;
        }
        Ok(sequence)
    }

    pub fn len(&self) -> usize {
        self.composite.len()
    }

    pub fn is_empty(&self) -> bool {
        self.composite.is_empty()
    }
}

impl Node for Sequence {
    fn kind(&self) -> NodeKind {
        NodeKind::Sequence
    }

    fn execute(&mut self) -> Status {
        for (index, child) in self.composite.iter_mut().enumerate() {
            if child.execute().is_failure() {
                tracing::trace!(index, "sequence short-circuited on failure");
                return Status::Failure;
            }
        }
        Status::Success
    }

    fn add_child(&mut self, child: Box<dyn Node>) -> Result<()> {
        let kind = child.kind();
        self.composite.push(child)?;
        tracing::debug!(child = %kind, len = self.len(), "attached child to sequence");
        Ok(())
    }
}

/// Executes children in order until one succeeds.
///
/// # Semantics
///
/// A `Selector` node evaluates its children from first to last:
/// - If a child returns `Success`, the selector **stops immediately** and returns `Success`
/// - If a child returns `Failure`, the selector **continues** to the next child
/// - If all children return `Failure`, the selector returns `Failure`
/// - An empty selector returns `Failure`
///
/// This is analogous to a short-circuited logical OR (||) operation. Children
/// after the first success are never executed, so their side effects do not
/// happen.
#[derive(Default)]
pub struct Selector {
    composite: Composite,
}

impl Selector {
    /// Creates an empty selector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a selector holding `children`, in order.
    ///
    /// Fails on the first root found among them.
    pub fn with_children(children: Vec<Box<dyn Node>>) -> Result<Self> {
        let mut selector = Self::new();
        for child in children {
            selector.add_child(child)?;
        }
        Ok(selector)
    }

    pub fn len(&self) -> usize {
        self.composite.len()
    }

    pub fn is_empty(&self) -> bool {
        self.composite.is_empty()
    }
}

impl Node for Selector {
    fn kind(&self) -> NodeKind {
        NodeKind::Selector
    }

    fn execute(&mut self) -> Status {
        for (index, child) in self.composite.iter_mut().enumerate() {
            if child.execute().is_success() {
                tracing::trace!(index, "selector short-circuited on success");
                return Status::Success;
            }
        }
        Status::Failure
    }

    fn add_child(&mut self, child: Box<dyn Node>) -> Result<()> {
        let kind = child.kind();
        self.composite.push(child)?;
        tracing::debug!(child = %kind, len = self.len(), "attached child to selector");
        Ok(())
    }
}
