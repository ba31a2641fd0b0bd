//! Widget configuration.
//!
//! The configuration is embedded alongside the document feed by the site
//! build. Every field has a default, so an absent or empty config object
//! yields the stock widget.

use serde::{Deserialize, Serialize};

use crate::{
    document::FieldKind,
    error::{CoreError, Result},
};

/// Configuration for the typeahead widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Maximum number of suggestions retained for rendering.
    #[serde(default = "default_result_count")]
    pub result_count: usize,

    /// Fields included in the index. The same list drives both indexing and
    /// querying, so the two can never diverge.
    #[serde(default = "default_fields")]
    pub fields: Vec<FieldKind>,

    /// Maximum indexed key length, in characters. Tuning input only; it
    /// bounds index size, not which documents can match.
    #[serde(default = "default_resolution")]
    pub resolution: usize,

    /// Query cache capacity in entries. Zero disables the cache.
    #[serde(default = "default_cache_entries")]
    pub cache_entries: usize,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            result_count: default_result_count(),
            fields: default_fields(),
            resolution: default_resolution(),
            cache_entries: default_cache_entries(),
        }
    }
}

impl WidgetConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.result_count == 0 {
            return Err(CoreError::config("result_count must be at least 1"));
        }
        if self.fields.is_empty() {
            return Err(CoreError::config("at least one search field is required"));
        }
        if self.resolution == 0 {
            return Err(CoreError::config("resolution must be at least 1"));
        }
        Ok(())
    }
}

fn default_result_count() -> usize {
    5
}

fn default_fields() -> Vec<FieldKind> {
    FieldKind::ALL.to_vec()
}

fn default_resolution() -> usize {
    9
}

fn default_cache_entries() -> usize {
    100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WidgetConfig::default();
        assert_eq!(config.result_count, 5);
        assert_eq!(config.fields.len(), 4);
        assert_eq!(config.resolution, 9);
        assert_eq!(config.cache_entries, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial() {
        let config: WidgetConfig = serde_json::from_str(r#"{"result_count": 3}"#).unwrap();
        assert_eq!(config.result_count, 3);
        assert_eq!(config.fields, FieldKind::ALL.to_vec());
    }

    #[test]
    fn test_deserialize_fields() {
        let config: WidgetConfig =
            serde_json::from_str(r#"{"fields": ["title", "tags"]}"#).unwrap();
        assert_eq!(config.fields, vec![FieldKind::Title, FieldKind::Tags]);
    }

    #[test]
    fn test_validate_rejects_empty_fields() {
        let config = WidgetConfig {
            fields: Vec::new(),
            ..WidgetConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_results() {
        let config = WidgetConfig {
            result_count: 0,
            ..WidgetConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
