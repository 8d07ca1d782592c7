//! The tree wrapper handed to callers.

use crate::{Node, Result, Root, Status, TreeError};

/// A complete behavior tree, owning exactly one [`Root`].
///
/// Construction is the only place a tree can be rejected; once built it can
/// be executed any number of times. Execution never changes the structure,
/// though stateful leaves may change their own state between runs.
pub struct BehaviourTree {
    root: Root,
}

impl BehaviourTree {
    /// Wraps `root` in a tree.
    ///
    /// Fails with [`TreeError::InvalidArgument`] when no root is supplied.
    pub fn new(root: impl Into<Option<Root>>) -> Result<Self> {
        let root = root
            .into()
            .ok_or(TreeError::InvalidArgument("behaviour tree requires a root"))?;
        Ok(Self { root })
    }

    /// Executes the whole tree once and returns the root's result unchanged.
    pub fn execute(&mut self) -> Status {
        let status = self.root.execute();
        tracing::debug!(?status, "behaviour tree executed");
        status
    }

    pub fn root(&self) -> &Root {
        &self.root
    }

    /// Mutable access to the root, e.g. to attach a subtree after wrapping.
    pub fn root_mut(&mut self) -> &mut Root {
        &mut self.root
    }

    pub fn into_root(self) -> Root {
        self.root
    }
}

impl From<Root> for BehaviourTree {
    fn from(root: Root) -> Self {
        Self { root }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::CheckEvenNumber;
    use crate::{Selector, Sequence, TaskNode};

    fn even(n: i64) -> Box<dyn Node> {
        Box::new(TaskNode::new(CheckEvenNumber::new(n)))
    }

    #[test]
    fn requires_a_root() {
        let result = BehaviourTree::new(None::<Root>);
        assert!(matches!(result, Err(TreeError::InvalidArgument(_))));
    }

    #[test]
    fn accepts_an_empty_root() {
        let tree = BehaviourTree::new(Root::new()).unwrap();
        assert!(!tree.root().has_child());
    }

    #[test]
    fn execute_follows_root_child() {
        let mut tree = BehaviourTree::new(Root::new()).unwrap();

        // Empty root
        assert_eq!(tree.execute(), Status::Failure);

        // Single succeeding task
        tree.root_mut().set_child(even(4)).unwrap();
        assert_eq!(tree.execute(), Status::Success);

        // Sequence [true, false]
        let seq = Sequence::with_children(vec![even(2), even(3)]).unwrap();
        tree.root_mut().set_child(Box::new(seq)).unwrap();
        assert_eq!(tree.execute(), Status::Failure);

        // Selector [false, true]
        let sel = Selector::with_children(vec![even(3), even(4)]).unwrap();
        tree.root_mut().set_child(Box::new(sel)).unwrap();
        assert_eq!(tree.execute(), Status::Success);
    }

    #[test]
    fn from_root_skips_validation() {
        let mut tree = BehaviourTree::from(Root::new());
        assert_eq!(tree.execute(), Status::Failure);
        assert!(!tree.into_root().has_child());
    }
}
