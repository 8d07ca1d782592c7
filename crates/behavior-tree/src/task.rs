//! Leaf task contract.
//!
//! Concrete work (condition checks, actions, waits) is supplied by the
//! embedding application through the [`Task`] trait. [`TaskNode`] adapts any
//! task into a childless [`Node`].

use crate::{Node, NodeKind, Status};

/// A unit of work executed at a leaf of the tree.
///
/// A task may read and mutate its own state when run, but has no access to
/// any other node.
pub trait Task: Send {
    /// Name used in trace output.
    fn name(&self) -> &str;

    /// Perform the task.
    fn run(&mut self) -> Status;
}

/// Leaf node wrapping a [`Task`].
///
/// Keeps the default [`Node::add_child`], so attaching anything to a task
/// node always fails.
pub struct TaskNode<T> {
    task: T,
}

impl<T: Task> TaskNode<T> {
    pub fn new(task: T) -> Self {
        Self { task }
    }

    /// Borrow the wrapped task, e.g. to inspect its state between ticks.
    pub fn task(&self) -> &T {
        &self.task
    }

    pub fn into_inner(self) -> T {
        self.task
    }
}

impl<T: Task> Node for TaskNode<T> {
    fn kind(&self) -> NodeKind {
        NodeKind::Task
    }

    fn execute(&mut self) -> Status {
        let status = self.task.run();
        tracing::trace!(task = self.task.name(), ?status, "task finished");
        status
    }
}

/// Task backed by a closure.
///
/// ```
/// use behavior_tree::{FnTask, Node, Status, TaskNode};
///
/// let mut node = TaskNode::new(FnTask::new("always", || true));
/// assert_eq!(node.execute(), Status::Success);
/// ```
pub struct FnTask<F> {
    name: String,
    f: F,
}

impl<F> FnTask<F>
where
    F: FnMut() -> bool + Send,
{
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }
}

impl<F> Task for FnTask<F>
where
    F: FnMut() -> bool + Send,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn run(&mut self) -> Status {
        (self.f)().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Root, Selector, StructureViolation, TreeError};

    #[test]
    fn task_node_reports_task_kind() {
        let node = TaskNode::new(FnTask::new("noop", || true));
        assert_eq!(node.kind(), NodeKind::Task);
        assert_eq!(node.task().name(), "noop");
    }

    #[test]
    fn task_node_rejects_any_child() {
        let mut node = TaskNode::new(FnTask::new("leaf", || true));

        let children: Vec<Box<dyn Node>> = vec![
            Box::new(TaskNode::new(FnTask::new("other", || false))),
            Box::new(Selector::new()),
            Box::new(Root::new()),
        ];
        for child in children {
            assert_eq!(
                node.add_child(child),
                Err(TreeError::InvalidStructure(StructureViolation::ChildOfTask))
            );
        }
    }

    #[test]
    fn fn_task_keeps_its_own_state() {
        let mut calls = 0;
        let mut node = TaskNode::new(FnTask::new("every_other", move || {
            calls += 1;
            calls % 2 == 0
        }));

        assert_eq!(node.execute(), Status::Failure);
        assert_eq!(node.execute(), Status::Success);
        assert_eq!(node.execute(), Status::Failure);
    }
}
