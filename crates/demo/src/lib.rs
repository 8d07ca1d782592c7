//! Approach-or-wait agent built on the behavior tree engine.
//!
//! ```text
//! Root
//!   └─ Selector
//!       ├─ Sequence
//!       │   ├─ CheckDistance   (is the object close enough?)
//!       │   └─ MoveToTarget    (step toward it)
//!       └─ Wait                (otherwise wait)
//! ```

pub mod config;

use behavior_tree::builder::{root, selector, sequence, task};
use behavior_tree::tasks::{CheckDistance, MoveToTarget, Wait};
use behavior_tree::{BehaviourTree, Result};

pub use config::DemoConfig;

/// Builds the approach-or-wait tree from `config`.
pub fn build_tree(config: &DemoConfig) -> Result<BehaviourTree> {
    let approach = sequence(vec![
        task(CheckDistance::new(
            config.object_distance,
            config.valid_distance,
        )),
        task(MoveToTarget::new(config.object_distance, config.move_speed)),
    ])?;

    let behaviour = selector(vec![approach, task(Wait::new(config.wait))])?;

    BehaviourTree::new(root(behaviour)?)
}
