//! Planner configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigLoadError;

mod defaults {
    pub fn tolerance() -> f64 {
        25.0
    }

    pub fn agent_radius() -> f64 {
        25.0
    }

    pub fn agent_speed() -> f64 {
        15.0
    }

    pub fn enabled() -> bool {
        true
    }
}

/// Distances used to build the waypoint graph and test corridors.
///
/// All distances are in layout units.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Proposed waypoints closer than this to an existing node are merged
    /// into it.
    /// Default: 25.0
    #[serde(default = "defaults::tolerance")]
    pub merge_tolerance: f64,

    /// Distance beyond a row's half-extent at which corner waypoints are
    /// placed.
    /// Default: 25.0
    #[serde(default = "defaults::tolerance")]
    pub waypoint_offset: f64,

    /// Half-width of the corridor swept between two waypoints.
    /// Default: 25.0
    #[serde(default = "defaults::tolerance")]
    pub corridor_tolerance: f64,

    /// Radius given to occupants created by the planner.
    /// Default: 25.0
    #[serde(default = "defaults::agent_radius")]
    pub agent_radius: f64,

    /// Walking speed given to occupants created by the planner.
    /// Default: 15.0
    #[serde(default = "defaults::agent_speed")]
    pub agent_speed: f64,

    /// Distance in front of a seat's edge where its occupant starts.
    /// Default: 25.0
    #[serde(default = "defaults::tolerance")]
    pub seat_clearance: f64,

    /// Abort the whole planning pass on the first occupant with no
    /// reachable exit. When false the failure is recorded and the pass
    /// continues.
    /// Default: true
    #[serde(default = "defaults::enabled")]
    pub stop_on_unreachable: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            merge_tolerance: defaults::tolerance(),
            waypoint_offset: defaults::tolerance(),
            corridor_tolerance: defaults::tolerance(),
            agent_radius: defaults::agent_radius(),
            agent_speed: defaults::agent_speed(),
            seat_clearance: defaults::tolerance(),
            stop_on_unreachable: defaults::enabled(),
        }
    }
}

impl PlannerConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Parse from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Builder-style setter for merge tolerance.
    pub fn with_merge_tolerance(mut self, tolerance: f64) -> Self {
        self.merge_tolerance = tolerance;
        self
    }

    /// Builder-style setter for waypoint offset.
    pub fn with_waypoint_offset(mut self, offset: f64) -> Self {
        self.waypoint_offset = offset;
        self
    }

    /// Builder-style setter for corridor half-width.
    pub fn with_corridor_tolerance(mut self, tolerance: f64) -> Self {
        self.corridor_tolerance = tolerance;
        self
    }

    /// Builder-style setter for occupant radius.
    pub fn with_agent_radius(mut self, radius: f64) -> Self {
        self.agent_radius = radius;
        self
    }

    /// Builder-style setter for occupant speed.
    pub fn with_agent_speed(mut self, speed: f64) -> Self {
        self.agent_speed = speed;
        self
    }

    /// Builder-style setter for seat clearance.
    pub fn with_seat_clearance(mut self, clearance: f64) -> Self {
        self.seat_clearance = clearance;
        self
    }

    /// Builder-style setter for the unreachable-occupant policy.
    pub fn with_stop_on_unreachable(mut self, stop: bool) -> Self {
        self.stop_on_unreachable = stop;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = PlannerConfig::default();
        assert_eq!(config.merge_tolerance, 25.0);
        assert_eq!(config.waypoint_offset, 25.0);
        assert_eq!(config.corridor_tolerance, 25.0);
        assert_eq!(config.agent_radius, 25.0);
        assert_eq!(config.agent_speed, 15.0);
        assert_eq!(config.seat_clearance, 25.0);
        assert!(config.stop_on_unreachable);
    }

    #[test]
    fn test_builder_pattern() {
        let config = PlannerConfig::new()
            .with_corridor_tolerance(10.0)
            .with_stop_on_unreachable(false);

        assert_eq!(config.corridor_tolerance, 10.0);
        assert!(!config.stop_on_unreachable);
        assert_eq!(config.merge_tolerance, 25.0);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = PlannerConfig::from_yaml("corridor_tolerance: 12.5\nagent_speed: 3.0\n").unwrap();
        assert_eq!(config.corridor_tolerance, 12.5);
        assert_eq!(config.agent_speed, 3.0);
        assert_eq!(config.merge_tolerance, 25.0);
        assert!(config.stop_on_unreachable);
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = PlannerConfig::default().with_waypoint_offset(30.0);
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed = PlannerConfig::from_yaml(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_load_errors() {
        assert!(matches!(
            PlannerConfig::from_yaml("merge_tolerance: [1, 2]"),
            Err(ConfigLoadError::Parse(_))
        ));
        assert!(matches!(
            PlannerConfig::load(Path::new("/nonexistent/planner.yaml")),
            Err(ConfigLoadError::Io(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "stop_on_unreachable: false").unwrap();
        let config = PlannerConfig::load(file.path()).unwrap();
        assert!(!config.stop_on_unreachable);
    }
}
