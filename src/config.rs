use serde::Deserialize;
use serde_json::Value as JsonValue;

use crate::commands::Command;

/// Client settings, fixed once the service is built.
///
/// Deserializes from the same block the host reads
/// (`tauri.conf.json > plugins > windows`); unknown keys are ignored and
/// missing ones fall back to [`ServiceConfig::default`].
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServiceConfig {
    /// Plugin namespace used in `plugin:<name>|<command>`.
    pub plugin: String,
    /// Log full argument records at TRACE level.
    pub trace_payloads: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            plugin: "windows".to_string(),
            trace_payloads: false,
        }
    }
}

impl ServiceConfig {
    pub fn from_json(value: JsonValue) -> serde_json::Result<Self> {
        // A missing plugin block shows up as null.
        if value.is_null() {
            return Ok(Self::default());
        }
        serde_json::from_value(value)
    }

    pub fn command(&self, command: Command) -> String {
        format!("plugin:{}|{}", self.plugin, command.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_namespace() {
        let config = ServiceConfig::default();
        assert_eq!(config.command(Command::OpenWindow), "plugin:windows|open_window");
        assert_eq!(
            config.command(Command::GetLastActiveWindow),
            "plugin:windows|get_last_active_window"
        );
    }

    #[test]
    fn from_json_fills_defaults() {
        let config = ServiceConfig::from_json(json!({ "tracePayloads": true })).unwrap();
        assert_eq!(config.plugin, "windows");
        assert!(config.trace_payloads);

        assert_eq!(
            ServiceConfig::from_json(JsonValue::Null).unwrap(),
            ServiceConfig::default()
        );
    }

    #[test]
    fn custom_plugin_name() {
        let config = ServiceConfig::from_json(json!({ "plugin": "win", "extra": 1 })).unwrap();
        assert_eq!(config.command(Command::SendToAll), "plugin:win|send_to_all");
    }

    #[test]
    fn rejects_wrong_types() {
        assert!(ServiceConfig::from_json(json!({ "plugin": 3 })).is_err());
    }
}
