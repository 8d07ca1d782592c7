//! Core node trait.
//!
//! This module defines the [`Node`] trait, the single capability every
//! behavior tree element implements, and [`NodeKind`], the tag used to
//! enforce structural rules when children are attached.

use crate::{Result, Status, StructureViolation};

/// The concrete family a node belongs to.
///
/// Structural rules (no root below a composite, no children below a task)
/// are checked against this tag at attachment time only, never during
/// execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Root,
    Selector,
    Sequence,
    Task,
}

impl NodeKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Root => "root",
            NodeKind::Selector => "selector",
            NodeKind::Sequence => "sequence",
            NodeKind::Task => "task",
        }
    }

    /// Returns true for the composite kinds (selector and sequence).
    pub const fn is_composite(&self) -> bool {
        matches!(self, NodeKind::Selector | NodeKind::Sequence)
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A behavior tree node that can be executed.
///
/// Nodes exclusively own their children, so a tree is always a tree: no
/// sharing, no cycles.
pub trait Node: Send {
    /// The family this node belongs to.
    fn kind(&self) -> NodeKind;

    /// Execute this node and its subtree to completion.
    ///
    /// # Returns
    ///
    /// - `Status::Success` if the node succeeded
    /// - `Status::Failure` if the node failed
    ///
    /// Leaves may read or mutate their own state here but never another
    /// node's.
    fn execute(&mut self) -> Status;

    /// Attach `child` as the last child of this node.
    ///
    /// Kinds that do not accept children keep this default, which rejects
    /// the call with [`StructureViolation::ChildOfTask`].
    fn add_child(&mut self, child: Box<dyn Node>) -> Result<()> {
        let _ = child;
        Err(StructureViolation::ChildOfTask.into())
    }
}
