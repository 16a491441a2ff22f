use serde::Deserialize;

use crate::core::NgError;

/// Serializable form of a fetcher's configuration.
///
/// Useful when the output location comes from a settings file rather than code.
/// Both path fields must be present for CSV output to be enabled.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SnapshotConfig {
    /// Directory holding the CSV file. Created on first write if missing.
    pub output_directory: Option<String>,
    /// CSV file name inside `output_directory`; must end in `.csv`.
    pub file_name: Option<String>,
    /// Report progress stages. Defaults to `true`.
    pub verbose: bool,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            output_directory: None,
            file_name: None,
            verbose: true,
        }
    }
}

impl SnapshotConfig {
    /// Parses a JSON object such as `{"output_directory": "out", "file_name": "demand.csv"}`.
    ///
    /// Fields of the wrong type (e.g. `"file_name": 123`) are rejected here,
    /// before anything touches the network.
    pub fn from_json_str(s: &str) -> Result<Self, NgError> {
        serde_json::from_str(s).map_err(|e| NgError::Config(e.to_string()))
    }

    /// Same as [`SnapshotConfig::from_json_str`] for an already-parsed value.
    pub fn from_json_value(v: serde_json::Value) -> Result<Self, NgError> {
        serde_json::from_value(v).map_err(|e| NgError::Config(e.to_string()))
    }

    /// Both path components, if and only if both are set and non-empty.
    pub(crate) fn output_parts(&self) -> Option<(&str, &str)> {
        match (self.output_directory.as_deref(), self.file_name.as_deref()) {
            (Some(dir), Some(file)) if !dir.is_empty() && !file.is_empty() => Some((dir, file)),
            _ => None,
        }
    }

    pub(crate) fn is_half_configured(&self) -> bool {
        self.output_parts().is_none()
            && (self.output_directory.is_some() || self.file_name.is_some())
    }
}
