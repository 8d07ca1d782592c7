//! Ready-made leaf tasks.
//!
//! Conditions ([`CheckEvenNumber`], [`CheckDistance`]) are pure checks over
//! values fixed at construction. Actions ([`MoveToTarget`], [`Wait`]) change
//! only their own state or block the calling thread.

use std::time::Duration;

use crate::{Status, Task};

/// Succeeds when the stored number is even.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckEvenNumber {
    number: i64,
}

impl CheckEvenNumber {
    pub const fn new(number: i64) -> Self {
        Self { number }
    }
}

impl Task for CheckEvenNumber {
    fn name(&self) -> &str {
        "check_even_number"
    }

    fn run(&mut self) -> Status {
        (self.number % 2 == 0).into()
    }
}

/// Succeeds when an object lies within the valid distance.
///
/// # Example
///
/// ```rust
/// use behavior_tree::tasks::CheckDistance;
/// use behavior_tree::{Status, Task};
///
/// let mut check = CheckDistance::new(7.0, 5.0);
/// assert_eq!(check.run(), Status::Failure);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckDistance {
    /// Current distance to the object.
    pub object_distance: f32,
    /// Largest distance considered in range (inclusive).
    pub valid_distance: f32,
}

impl CheckDistance {
    pub const fn new(object_distance: f32, valid_distance: f32) -> Self {
        Self {
            object_distance,
            valid_distance,
        }
    }
}

impl Task for CheckDistance {
    fn name(&self) -> &str {
        "check_distance"
    }

    fn run(&mut self) -> Status {
        if self.object_distance <= self.valid_distance {
            tracing::info!(
                distance = self.object_distance,
                valid = self.valid_distance,
                "object within valid distance"
            );
            Status::Success
        } else {
            tracing::info!(
                distance = self.object_distance,
                valid = self.valid_distance,
                "object out of valid distance"
            );
            Status::Failure
        }
    }
}

/// Moves toward a target by a fixed step per run.
///
/// Each run shortens the remaining distance by `speed`, never below zero.
/// Returns `Success` once the target has been reached and `Failure` while
/// still on the way.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveToTarget {
    remaining: f32,
    speed: f32,
}

impl MoveToTarget {
    /// Negative inputs are treated as zero.
    pub fn new(distance: f32, speed: f32) -> Self {
        Self {
            remaining: distance.max(0.0),
            speed: speed.max(0.0),
        }
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    pub fn has_arrived(&self) -> bool {
        self.remaining <= 0.0
    }
}

impl Task for MoveToTarget {
    fn name(&self) -> &str {
        "move_to_target"
    }

    fn run(&mut self) -> Status {
        self.remaining = (self.remaining - self.speed).max(0.0);
        tracing::info!(remaining = self.remaining, "moving to target");
        self.has_arrived().into()
    }
}

/// Blocks the calling thread for a fixed duration, then succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wait {
    duration: Duration,
}

impl Wait {
    pub const fn new(duration: Duration) -> Self {
        Self { duration }
    }

    pub const fn duration(&self) -> Duration {
        self.duration
    }
}

impl Task for Wait {
    fn name(&self) -> &str {
        "wait"
    }

    fn run(&mut self) -> Status {
        tracing::info!(duration_ms = self.duration.as_millis() as u64, "waiting");
        if !self.duration.is_zero() {
            std::thread::sleep(self.duration);
        }
        Status::Success
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;

    #[test]
    fn even_numbers_succeed() {
        assert_eq!(CheckEvenNumber::new(4).run(), Status::Success);
        assert_eq!(CheckEvenNumber::new(0).run(), Status::Success);
        assert_eq!(CheckEvenNumber::new(-2).run(), Status::Success);
    }

    #[test]
    fn odd_numbers_fail() {
        assert_eq!(CheckEvenNumber::new(3).run(), Status::Failure);
        assert_eq!(CheckEvenNumber::new(-7).run(), Status::Failure);
    }

    #[test]
    fn distance_boundary_is_inclusive() {
        assert_eq!(CheckDistance::new(5.0, 5.0).run(), Status::Success);
        assert_eq!(CheckDistance::new(3.0, 10.0).run(), Status::Success);
        assert_eq!(CheckDistance::new(7.0, 5.0).run(), Status::Failure);
    }

    #[test]
    fn move_reaches_target_in_steps() {
        let mut mv = MoveToTarget::new(5.0, 2.0);

        assert_eq!(mv.run(), Status::Failure);
        assert_eq!(mv.remaining(), 3.0);
        assert_eq!(mv.run(), Status::Failure);
        assert_eq!(mv.remaining(), 1.0);
        assert_eq!(mv.run(), Status::Success);
        assert_eq!(mv.remaining(), 0.0);
        assert!(mv.has_arrived());

        // Staying on target keeps succeeding.
        assert_eq!(mv.run(), Status::Success);
    }

    #[test]
    fn move_with_zero_speed_never_arrives() {
        let mut mv = MoveToTarget::new(1.0, -3.0);
        assert_eq!(mv.run(), Status::Failure);
        assert_eq!(mv.remaining(), 1.0);
    }

    #[test]
    fn wait_blocks_for_its_duration() {
        let mut wait = Wait::new(Duration::from_millis(20));
        let started = Instant::now();

        assert_eq!(wait.run(), Status::Success);
        assert!(started.elapsed() >= Duration::from_millis(20));
    }
}
