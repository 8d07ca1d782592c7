//! Demo configuration loaded from the environment.
use std::env;
use std::time::Duration;

/// Parameters of the approach-or-wait scenario.
#[derive(Clone, Debug, PartialEq)]
pub struct DemoConfig {
    /// Distance between the agent and the object.
    pub object_distance: f32,
    /// Largest distance at which the agent starts moving.
    pub valid_distance: f32,
    /// Distance covered per move.
    pub move_speed: f32,
    /// How long the wait fallback blocks.
    pub wait: Duration,
    /// Number of times the tree is executed.
    pub ticks: u32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            object_distance: 7.0,
            valid_distance: 5.0,
            move_speed: 2.0,
            wait: Duration::from_millis(250),
            ticks: 3,
        }
    }
}

impl DemoConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BT_OBJECT_DISTANCE` - Distance to the object (default: 7.0)
    /// - `BT_VALID_DISTANCE` - Distance considered in range (default: 5.0)
    /// - `BT_MOVE_SPEED` - Distance covered per move (default: 2.0)
    /// - `BT_WAIT_MS` - Wait fallback duration in milliseconds (default: 250)
    /// - `BT_TICKS` - Number of executions (default: 3, minimum 1)
    pub fn from_env() -> Self {
        Self::from_source(|key| env::var(key).ok())
    }

    /// Same as [`DemoConfig::from_env`], reading values through `lookup`.
    /// Unparsable values fall back to the default.
    pub fn from_source(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(distance) = parse::<f32>(lookup("BT_OBJECT_DISTANCE")) {
            config.object_distance = distance;
        }
        if let Some(distance) = parse::<f32>(lookup("BT_VALID_DISTANCE")) {
            config.valid_distance = distance;
        }
        if let Some(speed) = parse::<f32>(lookup("BT_MOVE_SPEED")) {
            config.move_speed = speed;
        }
        if let Some(ms) = parse::<u64>(lookup("BT_WAIT_MS")) {
            config.wait = Duration::from_millis(ms);
        }
        if let Some(ticks) = parse::<u32>(lookup("BT_TICKS")) {
            config.ticks = ticks.max(1);
        }

        config
    }
}

fn parse<T>(value: Option<String>) -> Option<T>
where
    T: std::str::FromStr,
{
    value?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn from_pairs(pairs: &[(&str, &str)]) -> DemoConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        DemoConfig::from_source(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        assert_eq!(from_pairs(&[]), DemoConfig::default());
    }

    #[test]
    fn reads_all_variables() {
        let config = from_pairs(&[
            ("BT_OBJECT_DISTANCE", "3.5"),
            ("BT_VALID_DISTANCE", "4"),
            ("BT_MOVE_SPEED", "1.5"),
            ("BT_WAIT_MS", "0"),
            ("BT_TICKS", "5"),
        ]);

        assert_eq!(config.object_distance, 3.5);
        assert_eq!(config.valid_distance, 4.0);
        assert_eq!(config.move_speed, 1.5);
        assert_eq!(config.wait, Duration::ZERO);
        assert_eq!(config.ticks, 5);
    }

    #[test]
    fn invalid_values_fall_back_and_ticks_clamp() {
        let config = from_pairs(&[("BT_MOVE_SPEED", "fast"), ("BT_TICKS", "0")]);
        assert_eq!(config.move_speed, 2.0);
        assert_eq!(config.ticks, 1);
    }
}
