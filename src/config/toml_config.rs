use crate::core::batch::BatchOptions;
use crate::domain::model::{NumberKind, PositionWeights, Purpose, SequencePosition, StarKey};
use crate::domain::ports::ResponseFactorProvider;
use crate::utils::error::{EngineError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

pub const MIN_RESPONSE_FACTOR: f64 = 0.1;
pub const MAX_RESPONSE_FACTOR: f64 = 5.0;

/// Engine settings read from a TOML file. Every section is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub analysis: AnalysisConfig,
    /// Star key (e.g. `SINH_KHI`) to weighted-score multiplier.
    #[serde(default)]
    pub response_factors: BTreeMap<String, f64>,
    /// Energy multipliers for the opening, middle and closing matches.
    #[serde(default)]
    pub position_weights: PositionWeights,
    pub batch: Option<BatchConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default = "default_kind")]
    pub default_kind: String,
    pub default_purpose: Option<String>,
    #[serde(default = "default_true")]
    pub purpose_fallback: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            default_kind: default_kind(),
            default_purpose: None,
            purpose_fallback: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    pub input_path: String,
    pub output_path: String,
    #[serde(default = "default_number_column")]
    pub number_column: String,
    pub purpose_column: Option<String>,
}

fn default_kind() -> String {
    NumberKind::Phone.key().to_string()
}

fn default_true() -> bool {
    true
}

fn default_number_column() -> String {
    "number".to_string()
}

impl EngineConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(EngineError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content)?;

        toml::from_str(&processed).map_err(|e| EngineError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are
    /// left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| EngineError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn validate_config(&self) -> Result<()> {
        self.default_kind()?;

        if let Some(purpose) = &self.analysis.default_purpose {
            let keys: Vec<&str> = Purpose::ALL.iter().map(|p| p.key()).collect();
            validation::validate_one_of("analysis.default_purpose", purpose, &keys)?;
        }

        for (star, factor) in &self.response_factors {
            let field = format!("response_factors.{}", star);
            star.parse::<StarKey>().map_err(|_| EngineError::InvalidConfigValueError {
                field: field.clone(),
                value: star.clone(),
                reason: format!(
                    "Unknown star. Valid stars: {}",
                    StarKey::ALL.map(StarKey::as_str).join(", ")
                ),
            })?;
            validation::validate_range(&field, *factor, MIN_RESPONSE_FACTOR, MAX_RESPONSE_FACTOR)?;
        }

        for (field, weight) in [
            ("position_weights.start", self.position_weights.start),
            ("position_weights.middle", self.position_weights.middle),
            ("position_weights.end", self.position_weights.end),
        ] {
            validation::validate_range(field, weight, MIN_RESPONSE_FACTOR, MAX_RESPONSE_FACTOR)?;
        }

        if let Some(batch) = &self.batch {
            validation::validate_path("batch.input_path", &batch.input_path)?;
            validation::validate_path("batch.output_path", &batch.output_path)?;
            validation::validate_non_empty_string("batch.number_column", &batch.number_column)?;
            if let Some(column) = &batch.purpose_column {
                validation::validate_non_empty_string("batch.purpose_column", column)?;
            }
        }

        Ok(())
    }

    pub fn default_kind(&self) -> Result<NumberKind> {
        self.analysis.default_kind.parse().map_err(|_| EngineError::InvalidConfigValueError {
            field: "analysis.default_kind".to_string(),
            value: self.analysis.default_kind.clone(),
            reason: "Valid kinds: phone, national_id".to_string(),
        })
    }

    pub fn default_purpose(&self) -> Option<&str> {
        self.analysis.default_purpose.as_deref()
    }

    /// Batch settings for the runner; `batch.input_path` and
    /// `batch.output_path` are read by the caller.
    pub fn batch_options(&self) -> Result<BatchOptions> {
        let batch = validation::validate_required_field("batch", &self.batch)?;
        Ok(BatchOptions {
            kind: self.default_kind()?,
            number_column: batch.number_column.clone(),
            purpose_column: batch.purpose_column.clone(),
            default_purpose: self.analysis.default_purpose.clone(),
            purpose_fallback: self.analysis.purpose_fallback,
        })
    }
}

impl ResponseFactorProvider for EngineConfig {
    fn response_factor(&self, star: StarKey) -> f64 {
        self.response_factors
            .iter()
            .find(|(key, _)| key.trim().eq_ignore_ascii_case(star.as_str()))
            .map_or(1.0, |(_, factor)| *factor)
    }

    fn position_weight(&self, position: SequencePosition) -> f64 {
        self.position_weights.weight(position)
    }
}

impl Validate for EngineConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(config.default_kind().unwrap(), NumberKind::Phone);
        assert!(config.analysis.purpose_fallback);
        assert_eq!(config.response_factor(StarKey::SinhKhi), 1.0);
        assert_eq!(config.position_weights, PositionWeights::default());
        assert!(config.validate().is_ok());
        assert!(config.batch_options().is_err());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[analysis]
default_kind = "national_id"
default_purpose = "career"
purpose_fallback = false

[response_factors]
SINH_KHI = 1.5
TUYET_MENH = 0.5

[batch]
input_path = "./numbers.csv"
output_path = "./out/report.csv"
purpose_column = "purpose"
"#;

        let config = EngineConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.default_kind().unwrap(), NumberKind::NationalId);
        assert_eq!(config.default_purpose(), Some("career"));
        assert_eq!(config.response_factor(StarKey::SinhKhi), 1.5);
        assert_eq!(config.response_factor(StarKey::TuyetMenh), 0.5);
        assert_eq!(config.response_factor(StarKey::ThienY), 1.0);

        let options = config.batch_options().unwrap();
        assert_eq!(options.number_column, "number");
        assert_eq!(options.purpose_column.as_deref(), Some("purpose"));
        assert!(!options.purpose_fallback);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("BATCUC_TEST_INPUT", "/data/in.csv");

        let toml_content = r#"
[batch]
input_path = "${BATCUC_TEST_INPUT}"
output_path = "${BATCUC_TEST_UNSET_OUTPUT}"
"#;

        let config = EngineConfig::from_toml_str(toml_content).unwrap();
        let batch = config.batch.unwrap();
        assert_eq!(batch.input_path, "/data/in.csv");
        assert_eq!(batch.output_path, "${BATCUC_TEST_UNSET_OUTPUT}");

        std::env::remove_var("BATCUC_TEST_INPUT");
    }

    #[test]
    fn test_config_validation() {
        let out_of_range = EngineConfig::from_toml_str("[response_factors]\nSINH_KHI = 9.0\n").unwrap();
        assert!(out_of_range.validate().is_err());

        let unknown_star = EngineConfig::from_toml_str("[response_factors]\nSAO_LA = 1.0\n").unwrap();
        assert!(matches!(
            unknown_star.validate(),
            Err(EngineError::InvalidConfigValueError { .. })
        ));

        let bad_purpose =
            EngineConfig::from_toml_str("[analysis]\ndefault_purpose = \"health\"\n").unwrap();
        assert!(bad_purpose.validate().is_err());

        let bad_kind = EngineConfig::from_toml_str("[analysis]\ndefault_kind = \"fax\"\n").unwrap();
        assert!(bad_kind.validate().is_err());

        let empty_path =
            EngineConfig::from_toml_str("[batch]\ninput_path = \"\"\noutput_path = \"out.csv\"\n")
                .unwrap();
        assert!(empty_path.validate().is_err());
    }

    #[test]
    fn test_position_weights_section() {
        let config =
            EngineConfig::from_toml_str("[position_weights]\nend = 2.5\n").unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.position_weight(SequencePosition::End), 2.5);
        assert_eq!(
            config.position_weight(SequencePosition::Start),
            PositionWeights::default().start
        );

        let zero_weight =
            EngineConfig::from_toml_str("[position_weights]\nmiddle = 0.0\n").unwrap();
        assert!(matches!(
            zero_weight.validate(),
            Err(EngineError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            EngineConfig::from_toml_str("[analysis\n"),
            Err(EngineError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[response_factors]\nTHIEN_Y = 2.0\n")
            .unwrap();

        let config = EngineConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.response_factor(StarKey::ThienY), 2.0);
    }
}
