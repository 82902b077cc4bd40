//! Decoder, speech and input tuning.
//!
//! The defaults ship inside the crate. A host may swap in its own TOML once,
//! before anything reads `settings()`; after that the values are fixed for
//! the life of the process.

use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static OVERRIDE: OnceLock<String> = OnceLock::new();
static SETTINGS: OnceLock<Settings> = OnceLock::new();

/// Validate `toml_content` and install it in place of the defaults.
///
/// Fails if an override was already installed. Has no effect on a process
/// that has already read `settings()`.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    OVERRIDE
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

pub fn settings() -> &'static Settings {
    SETTINGS.get_or_init(|| {
        let source = OVERRIDE.get().map_or(DEFAULT_SETTINGS_TOML, String::as_str);
        // Overrides are validated on install and the default by build.rs.
        parse_settings_toml(source).expect("settings TOML must be valid")
    })
}

pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("settings TOML: {0}")]
    Parse(String),
    #[error("{field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("custom settings already installed")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub split: SplitSettings,
    pub ranking: RankingSettings,
    pub confidence: ConfidenceSettings,
    pub speech: SpeechSettings,
    pub input: InputSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SplitSettings {
    pub min_threshold_ms: u64,
    pub max_flagged: usize,
}

/// How valid split sets are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankStrategy {
    /// Mean boundary delay, descending.
    MeanDelay,
    /// Mean banded split confidence, descending; ties by mean delay.
    SplitConfidence,
}

/// Sort position of the split with no internal boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptySplitRank {
    /// Always after every non-empty valid split.
    Last,
    /// Scored as a mean of zero.
    Zero,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RankingSettings {
    pub strategy: RankStrategy,
    pub empty_split: EmptySplitRank,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConfidenceSettings {
    pub threshold_ms: u64,
    pub max_threshold_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpeechSettings {
    pub interval_ms: u64,
    pub prolong_mark: String,
    pub empty_text: String,
    pub clear_text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputSettings {
    pub debounce: bool,
    pub debounce_ms: u64,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_positive {
        ($section:ident . $field:ident) => {
            if s.$section.$field == 0 {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must be positive".to_string(),
                });
            }
        };
    }

    check_positive!(split.max_flagged);
    check_positive!(speech.interval_ms);

    // Bands must nest: min < threshold < max.
    if s.confidence.threshold_ms <= s.split.min_threshold_ms {
        return Err(SettingsError::InvalidValue {
            field: "confidence.threshold_ms".to_string(),
            reason: "must exceed split.min_threshold_ms".to_string(),
        });
    }
    if s.confidence.max_threshold_ms <= s.confidence.threshold_ms {
        return Err(SettingsError::InvalidValue {
            field: "confidence.max_threshold_ms".to_string(),
            reason: "must exceed confidence.threshold_ms".to_string(),
        });
    }

    // 2^max_flagged split sets must stay addressable.
    if s.split.max_flagged > 20 {
        return Err(SettingsError::InvalidValue {
            field: "split.max_flagged".to_string(),
            reason: "must be at most 20".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_split(min_threshold_ms: u64, max_flagged: usize) -> String {
        DEFAULT_SETTINGS_TOML
            .replace(
                "min_threshold_ms = 1800",
                &format!("min_threshold_ms = {min_threshold_ms}"),
            )
            .replace("max_flagged = 12", &format!("max_flagged = {max_flagged}"))
    }

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.split.min_threshold_ms, 1800);
        assert_eq!(s.split.max_flagged, 12);
        assert_eq!(s.ranking.strategy, RankStrategy::MeanDelay);
        assert_eq!(s.ranking.empty_split, EmptySplitRank::Last);
        assert_eq!(s.confidence.threshold_ms, 2500);
        assert_eq!(s.confidence.max_threshold_ms, 4000);
        assert_eq!(s.speech.interval_ms, 250);
        assert_eq!(s.speech.prolong_mark, "ー");
        assert_eq!(s.speech.empty_text, "文字がないです");
        assert!(!s.input.debounce);
        assert_eq!(s.input.debounce_ms, 600);
    }

    #[test]
    fn parse_custom_strategy() {
        let toml = DEFAULT_SETTINGS_TOML
            .replace("\"mean_delay\"", "\"split_confidence\"")
            .replace("empty_split = \"last\"", "empty_split = \"zero\"");
        let s = parse_settings_toml(&toml).unwrap();
        assert_eq!(s.ranking.strategy, RankStrategy::SplitConfidence);
        assert_eq!(s.ranking.empty_split, EmptySplitRank::Zero);
    }

    #[test]
    fn error_zero_max_flagged() {
        let err = parse_settings_toml(&with_split(1800, 0)).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
        assert!(err.to_string().contains("split.max_flagged"));
    }

    #[test]
    fn error_huge_max_flagged() {
        let err = parse_settings_toml(&with_split(1800, 64)).unwrap_err();
        assert!(err.to_string().contains("split.max_flagged"));
    }

    #[test]
    fn error_bands_out_of_order() {
        let err = parse_settings_toml(&with_split(3000, 12)).unwrap_err();
        assert!(err.to_string().contains("confidence.threshold_ms"));
    }

    #[test]
    fn error_unknown_strategy() {
        let toml = DEFAULT_SETTINGS_TOML.replace("\"mean_delay\"", "\"loudest\"");
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_settings_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_missing_section() {
        let toml = r#"
[split]
min_threshold_ms = 1800
max_flagged = 12
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
