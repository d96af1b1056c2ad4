use serde::{Deserialize, Serialize};

use crate::PaletteError;

/// Results shown per group when nothing is configured
pub const DEFAULT_MAX_RESULTS_PER_GROUP: usize = 5;

/// Palette configuration as supplied by the host
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteConfig {
    /// Kept signed so out-of-range host values clamp instead of failing to decode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results_per_group: Option<i64>,
}

impl PaletteConfig {
    pub fn with_max_results(max: i64) -> Self {
        Self {
            max_results_per_group: Some(max),
        }
    }

    /// Effective per-group cap: the default when unset, never negative.
    pub fn cap(&self) -> usize {
        match self.max_results_per_group {
            None => DEFAULT_MAX_RESULTS_PER_GROUP,
            Some(n) => usize::try_from(n.max(0)).unwrap_or(usize::MAX),
        }
    }

    pub fn from_json(json: &str) -> crate::Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if !value.is_object() {
            return Err(PaletteError::Config(format!(
                "expected a JSON object, got {}",
                value
            )));
        }
        Ok(serde_json::from_value(value)?)
    }
}
