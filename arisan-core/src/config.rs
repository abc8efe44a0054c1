use crate::error::{ArisanError, Result};
use crate::sanitize::DedupPolicy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArisanConfig {
    /// Header of the roster column, matched case-insensitively
    pub name_column: String,
    pub dedup: DedupPolicy,
    pub template_names: Vec<String>,
    pub template_sheet: String,
    pub history_sheet: String,
}

impl Default for ArisanConfig {
    fn default() -> Self {
        Self {
            name_column: "nama".to_string(),
            dedup: DedupPolicy::CaseInsensitive,
            template_names: ["Ani", "Budi", "Cici", "Dedi"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            template_sheet: "Peserta".to_string(),
            history_sheet: "Riwayat".to_string(),
        }
    }
}

impl ArisanConfig {
    pub fn validate(&self) -> Result<()> {
        if self.name_column.trim().is_empty() {
            return Err(ArisanError::config("Roster column name cannot be empty"));
        }

        for sheet in [&self.template_sheet, &self.history_sheet] {
            // xlsx limit
            if sheet.trim().is_empty() || sheet.chars().count() > 31 {
                return Err(ArisanError::config(format!(
                    "Sheet name '{}' must be 1-31 characters",
                    sheet
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ArisanConfig::default();
        config.validate().unwrap();
        assert_eq!(config.name_column, "nama");
        assert_eq!(config.template_names.len(), 4);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ArisanConfig =
            serde_json::from_str(r#"{"dedup": "case_sensitive", "history_sheet": "History"}"#)
                .unwrap();
        assert_eq!(config.dedup, DedupPolicy::CaseSensitive);
        assert_eq!(config.history_sheet, "History");
        assert_eq!(config.name_column, "nama");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = ArisanConfig {
            name_column: " ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ArisanConfig {
            history_sheet: "x".repeat(32),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
