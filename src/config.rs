//! Per-machine provisioning configuration.
//!
//! The customization list is declared externally (one JSON document per
//! machine) and read once per run. Entry order is the user's declaration
//! order and is preserved through dispatch.

use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::errors::{HvError, HvResult};

/// One user-declared customization: run `command` with `params` when the
/// machine reaches lifecycle point `event`.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomizationEntry {
    /// Lifecycle event this entry applies to, e.g. "before_boot". Treated as
    /// an opaque key, not a closed enum.
    pub event: String,
    /// Command name resolved against the handler registry.
    pub command: String,
    /// Free-form command parameters.
    #[serde(default)]
    pub params: Map<String, Value>,
}

/// Customization list for one machine.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProvisionConfig {
    #[serde(default)]
    pub customizations: Vec<CustomizationEntry>,
}

impl ProvisionConfig {
    /// Load the configuration from a JSON file.
    pub fn load(path: &Path) -> HvResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        serde_json::from_str(&raw).map_err(|e| {
            HvError::Config(format!(
                "invalid provisioning config {}: {}",
                path.display(),
                e
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_preserve_declaration_order() {
        let raw = r#"{
            "customizations": [
                {"event": "before_boot", "command": "virtual_switch", "params": {"type": "external", "name": "ext1", "bridge": "Eth0"}},
                {"event": "after_boot", "command": "virtual_switch", "params": {"type": "private"}},
                {"event": "before_boot", "command": "something_else"}
            ]
        }"#;

        let config: ProvisionConfig = serde_json::from_str(raw).unwrap();
        assert_eq!(config.customizations.len(), 3);
        assert_eq!(config.customizations[0].event, "before_boot");
        assert_eq!(
            config.customizations[0].params.get("bridge").and_then(|v| v.as_str()),
            Some("Eth0")
        );
        assert_eq!(
            config.customizations[1].params.get("type").and_then(|v| v.as_str()),
            Some("private")
        );
        // Missing params defaults to an empty map
        assert!(config.customizations[2].params.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("provision.json");
        std::fs::write(
            &path,
            r#"{"customizations": [{"event": "after_boot", "command": "virtual_switch"}]}"#,
        )
        .unwrap();

        let config = ProvisionConfig::load(&path).unwrap();
        assert_eq!(config.customizations.len(), 1);
        assert_eq!(config.customizations[0].command, "virtual_switch");
    }

    #[test]
    fn test_load_invalid_json_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("provision.json");
        std::fs::write(&path, "{ not json").unwrap();

        let result = ProvisionConfig::load(&path);
        assert!(matches!(result, Err(HvError::Config(_))));
    }
}
