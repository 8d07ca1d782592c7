//! Builder utilities for ergonomic behavior tree construction.
//!
//! This module provides helper functions to reduce boilerplate when building
//! behavior trees. Instead of writing verbose
//! `Box::new(Sequence::with_children(vec![...])?)`, you can use shorter
//! functions like `sequence(vec![...])?`.
//!
//! ```rust
//! use behavior_tree::builder::{root, selector, sequence, task};
//! use behavior_tree::tasks::CheckEvenNumber;
//! use behavior_tree::{BehaviourTree, Status};
//!
//! let tree = root(selector(vec![
//!     sequence(vec![task(CheckEvenNumber::new(2)), task(CheckEvenNumber::new(3))])?,
//!     task(CheckEvenNumber::new(4)),
//! ])?)?;
//!
//! assert_eq!(BehaviourTree::new(tree)?.execute(), Status::Success);
//! # Ok::<(), behavior_tree::TreeError>(())
//! ```

use crate::{Node, Result, Root, Selector, Sequence, Task, TaskNode};

/// Creates a sequence node.
///
/// Shorthand for `Box::new(Sequence::with_children(children)?)`.
#[inline]
pub fn sequence(children: Vec<Box<dyn Node>>) -> Result<Box<dyn Node>> {
    Ok(Box::new(Sequence::with_children(children)?))
}

/// Creates a selector node.
///
/// Shorthand for `Box::new(Selector::with_children(children)?)`.
#[inline]
pub fn selector(children: Vec<Box<dyn Node>>) -> Result<Box<dyn Node>> {
    Ok(Box::new(Selector::with_children(children)?))
}

/// Creates a task node.
///
/// Shorthand for `Box::new(TaskNode::new(task))`.
#[inline]
pub fn task<T: Task + 'static>(task: T) -> Box<dyn Node> {
    Box::new(TaskNode::new(task))
}

/// Creates a root holding `child`.
#[inline]
pub fn root(child: Box<dyn Node>) -> Result<Root> {
    let mut root = Root::new();
    root.set_child(child)?;
    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::CheckEvenNumber;
    use crate::{NodeKind, StructureViolation};

    #[test]
    fn helpers_build_expected_kinds() {
        assert_eq!(sequence(vec![]).unwrap().kind(), NodeKind::Sequence);
        assert_eq!(selector(vec![]).unwrap().kind(), NodeKind::Selector);
        assert_eq!(task(CheckEvenNumber::new(1)).kind(), NodeKind::Task);
        assert!(root(task(CheckEvenNumber::new(1))).unwrap().has_child());
    }

    #[test]
    fn helpers_propagate_structure_errors() {
        let err = sequence(vec![Box::new(Root::new())]).err().unwrap();
        assert_eq!(err.violation(), Some(StructureViolation::RootInComposite));

        let err = root(Box::new(Root::new())).err().unwrap();
        assert_eq!(err.violation(), Some(StructureViolation::RootInRoot));
    }
}
