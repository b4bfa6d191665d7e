use serde::{Deserialize, Serialize};

/// Search parameters.
///
/// The defaults reproduce the historical behaviour: an unbounded full-tree
/// walk, with `max_plies` only as a stack-safety guard well above the cell
/// count of any reasonable reduced board.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Hard recursion guard; exceeding it aborts the search with an error
    /// rather than risking stack exhaustion.
    pub max_plies: u32,
    /// Opt-in heuristic cutoff: when set, positions at this ply are scored
    /// with the static utility instead of being expanded. `None` searches to
    /// terminal states.
    pub cutoff_plies: Option<u32>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_plies: 64,
            cutoff_plies: None,
        }
    }
}

impl EngineConfig {
    pub fn load_from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config_default() {
        let config = EngineConfig::load_from_json("{}").unwrap();
        assert_eq!(config.max_plies, 64);
        assert_eq!(config.cutoff_plies, None);
    }

    #[test]
    fn test_load_config_partial() {
        let json = r#"{ "cutoff_plies": 6 }"#;
        let config = EngineConfig::load_from_json(json).unwrap();
        assert_eq!(config.cutoff_plies, Some(6));
        // Untouched fields keep their defaults.
        assert_eq!(config.max_plies, 64);
    }

    #[test]
    fn test_load_config_full() {
        let json = r#"{ "max_plies": 10, "cutoff_plies": 4 }"#;
        let config = EngineConfig::load_from_json(json).unwrap();
        assert_eq!(config.max_plies, 10);
        assert_eq!(config.cutoff_plies, Some(4));
    }

    #[test]
    fn test_load_config_invalid_json() {
        assert!(EngineConfig::load_from_json("{ invalid json }").is_err());
    }
}
