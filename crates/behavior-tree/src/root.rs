//! Root node, the entry point of a tree.

use crate::{Node, NodeKind, Result, Status, StructureViolation};

/// Single entry point of a behavior tree.
///
/// A root holds at most one child, which is never another root. Executing a
/// root without a child fails instead of raising an error: "nothing to do"
/// is a valid tree, only a malformed one is an error.
#[derive(Default)]
pub struct Root {
    child: Option<Box<dyn Node>>,
}

impl Root {
    /// Creates a root with no child.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the subtree this root delegates to.
    ///
    /// Replaces any child set earlier. Rejects another root with
    /// [`StructureViolation::RootInRoot`], leaving the current child in place.
    pub fn set_child(&mut self, child: Box<dyn Node>) -> Result<()> {
        let kind = child.kind();
        if kind == NodeKind::Root {
            return Err(StructureViolation::RootInRoot.into());
        }
        if self.child.replace(child).is_some() {
            tracing::debug!(child = %kind, "replaced existing root child");
        } else {
            tracing::debug!(child = %kind, "attached root child");
        }
        Ok(())
    }

    pub fn has_child(&self) -> bool {
        self.child.is_some()
    }
}

impl Node for Root {
    fn kind(&self) -> NodeKind {
        NodeKind::Root
    }

    fn execute(&mut self) -> Status {
        match self.child.as_mut() {
            Some(child) => child.execute(),
            None => {
                tracing::trace!("root has no child");
                Status::Failure
            }
        }
    }

    fn add_child(&mut self, child: Box<dyn Node>) -> Result<()> {
        let _ = child;
        Err(StructureViolation::ChildOfRoot.into())
    }
}
