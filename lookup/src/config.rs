//! Widget configuration accepted at construction

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::ConfigError;
use crate::filter::DEFAULT_RESULT_LIMIT;
use crate::record::{records_from_values, Record};

/// Debounce delay applied when none is configured
pub const DEFAULT_DEBOUNCE_MS: u64 = 1000;

/// Everything a host supplies when it creates a lookup.
///
/// `label`, `placeholder`, `icon_name`, `empty_message` and `disabled` are
/// presentational: the widget core stores them for the rendering layer but
/// never acts on them. In particular a disabled lookup still accepts
/// operations; the host input surface is expected to be inert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LookupConfig {
    pub label: String,
    pub placeholder: String,
    pub icon_name: Option<String>,
    pub default_record_id: Option<String>,
    pub empty_message: String,
    #[serde(deserialize_with = "lenient_records")]
    pub records: Vec<Record>,
    pub disabled: bool,
    pub debounce_ms: u64,
    pub result_limit: usize,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            label: String::new(),
            placeholder: "Search...".to_string(),
            icon_name: None,
            default_record_id: None,
            empty_message: "No results found".to_string(),
            records: Vec::new(),
            disabled: false,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            result_limit: DEFAULT_RESULT_LIMIT,
        }
    }
}

/// Skip malformed entries instead of failing the whole config
fn lenient_records<'de, D>(deserializer: D) -> Result<Vec<Record>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(records_from_values(values))
}

impl LookupConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON config document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.result_limit == 0 {
            return Err(ConfigError::InvalidResultLimit);
        }
        Ok(())
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_icon(mut self, icon_name: impl Into<String>) -> Self {
        self.icon_name = Some(icon_name.into());
        self
    }

    pub fn with_default_record_id(mut self, id: impl Into<String>) -> Self {
        self.default_record_id = Some(id.into());
        self
    }

    pub fn with_empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    pub fn with_records(mut self, records: Vec<Record>) -> Self {
        self.records = records;
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_debounce(mut self, delay: Duration) -> Self {
        self.debounce_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn with_result_limit(mut self, limit: usize) -> Self {
        self.result_limit = limit;
        self
    }
}
