//! Lightweight, synchronous behavior tree engine.
//!
//! A behavior tree is built from a single [`Root`], composite combinators and
//! leaf tasks, then wrapped in a [`BehaviourTree`] and executed as often as
//! the caller likes.
//!
//! - **No Running state**: every execution runs the subtree to completion
//! - **Exclusive ownership**: each node owns its children, no sharing or cycles
//! - **Checked structure**: illegal attachments are rejected when they happen,
//!   never during execution
//!
//! # Architecture
//!
//! - [`Node`]: Core trait for all nodes, tagged by [`NodeKind`]
//! - [`Status`]: Success or Failure
//! - Composite nodes: [`Sequence`], [`Selector`]
//! - Entry point: [`Root`], wrapped by [`BehaviourTree`]
//! - Leaves: any [`Task`], adapted by [`TaskNode`]; ready-made ones in [`tasks`]
//!
//! # Structural rules
//!
//! | Receiver   | Operation   | Rejected child | Error                                 |
//! |------------|-------------|----------------|---------------------------------------|
//! | composite  | `add_child` | root           | [`StructureViolation::RootInComposite`] |
//! | task       | `add_child` | anything       | [`StructureViolation::ChildOfTask`]     |
//! | root       | `add_child` | anything       | [`StructureViolation::ChildOfRoot`]     |
//! | root       | `set_child` | root           | [`StructureViolation::RootInRoot`]      |

pub mod builder;
pub mod composite;
pub mod error;
pub mod node;
pub mod root;
pub mod status;
pub mod task;
pub mod tasks;
pub mod tree;

// Re-export core types for ergonomic API
pub use composite::{Composite, Selector, Sequence};
pub use error::{Result, StructureViolation, TreeError};
pub use node::{Node, NodeKind};
pub use root::Root;
pub use status::Status;
pub use task::{FnTask, Task, TaskNode};
pub use tree::BehaviourTree;
