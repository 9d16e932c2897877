//! Engine defaults loaded from TOML.
//!
//! - `Settings::default()` parses the embedded `default_settings.toml`
//! - `parse_settings_toml` / `Settings::open` read a user file
//! - `Settings::set(name, value)` applies a single `name=value` override
//!
//! Unrecognized keys are rejected rather than ignored.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::wsd::{Scheme, TraceLevel};

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("unknown parameter {0:?}")]
    UnknownParameter(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub disambiguation: DisambiguationSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisambiguationSettings {
    pub window: usize,
    pub scheme: Scheme,
    pub pair_threshold: f64,
    pub context_threshold: f64,
    pub coerce_pos: bool,
    pub trace: TraceLevel,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        parse_settings_toml(DEFAULT_SETTINGS_TOML).expect("embedded settings TOML must be valid")
    }
}

impl Settings {
    pub fn open(path: &Path) -> Result<Self, SettingsError> {
        parse_settings_toml(&fs::read_to_string(path)?)
    }

    /// Override one parameter by name, e.g. `set("window", "5")`.
    pub fn set(&mut self, name: &str, value: &str) -> Result<(), SettingsError> {
        fn parsed<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, SettingsError>
        where
            T::Err: std::fmt::Display,
        {
            value
                .trim()
                .parse()
                .map_err(|e: T::Err| SettingsError::InvalidValue {
                    field: name.to_string(),
                    reason: e.to_string(),
                })
        }

        let d = &mut self.disambiguation;
        match name {
            "window" => d.window = parsed(name, value)?,
            "scheme" => d.scheme = parsed(name, value)?,
            "pair_threshold" => d.pair_threshold = parsed(name, value)?,
            "context_threshold" => d.context_threshold = parsed(name, value)?,
            "coerce_pos" => d.coerce_pos = parsed(name, value)?,
            "trace" => {
                let bits: u8 = parsed(name, value)?;
                d.trace = TraceLevel::new(bits).ok_or_else(|| SettingsError::InvalidValue {
                    field: name.to_string(),
                    reason: "must be between 0 and 15".to_string(),
                })?;
            }
            "seed" => d.seed = Some(parsed(name, value)?),
            _ => return Err(SettingsError::UnknownParameter(name.to_string())),
        }
        validate(self)
    }

    /// Apply a `name=value` override string.
    pub fn set_pair(&mut self, assignment: &str) -> Result<(), SettingsError> {
        let (name, value) =
            assignment
                .split_once('=')
                .ok_or_else(|| SettingsError::InvalidValue {
                    field: assignment.to_string(),
                    reason: "expected name=value".to_string(),
                })?;
        self.set(name.trim(), value)
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

pub(crate) fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_finite {
        ($field:ident) => {
            if !s.disambiguation.$field.is_finite() {
                return Err(SettingsError::InvalidValue {
                    field: concat!("disambiguation.", stringify!($field)).to_string(),
                    reason: "must be a finite number".to_string(),
                });
            }
        };
    }

    check_finite!(pair_threshold);
    check_finite!(context_threshold);

    if TraceLevel::new(s.disambiguation.trace.bits()).is_none() {
        return Err(SettingsError::InvalidValue {
            field: "disambiguation.trace".to_string(),
            reason: "must be between 0 and 15".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        let d = &s.disambiguation;
        assert_eq!(d.window, 3);
        assert_eq!(d.scheme, Scheme::Normal);
        assert_eq!(d.pair_threshold, 0.0);
        assert_eq!(d.context_threshold, 0.0);
        assert!(!d.coerce_pos);
        assert!(d.trace.is_off());
        assert_eq!(d.seed, None);
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn parse_valid_custom_toml() {
        let toml = r#"
[disambiguation]
window = 2
scheme = "sense1"
pair_threshold = 1.0
context_threshold = 1.0
coerce_pos = true
trace = 6
seed = 42
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert_eq!(s.disambiguation.scheme, Scheme::FirstSense);
        assert_eq!(s.disambiguation.trace.bits(), 6);
        assert_eq!(s.disambiguation.seed, Some(42));
    }

    #[test]
    fn error_unknown_key() {
        let toml = r#"
[disambiguation]
window = 2
scheme = "normal"
pair_threshold = 0.0
context_threshold = 0.0
coerce_pos = false
trace = 0
windw = 3
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
        assert!(err.to_string().contains("windw"));
    }

    #[test]
    fn error_trace_out_of_range() {
        let toml = r#"
[disambiguation]
window = 2
scheme = "normal"
pair_threshold = 0.0
context_threshold = 0.0
coerce_pos = false
trace = 16
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("disambiguation.trace"));
    }

    #[test]
    fn error_non_finite_threshold() {
        let toml = r#"
[disambiguation]
window = 2
scheme = "normal"
pair_threshold = nan
context_threshold = 0.0
coerce_pos = false
trace = 0
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("disambiguation.pair_threshold"));
    }

    #[test]
    fn error_missing_section() {
        let err = parse_settings_toml("").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn set_overrides() {
        let mut s = Settings::default();
        s.set("window", "5").unwrap();
        s.set("scheme", "random").unwrap();
        s.set_pair("pair_threshold = 0.5").unwrap();
        s.set("coerce_pos", "true").unwrap();
        s.set("trace", "15").unwrap();
        s.set("seed", "9").unwrap();
        let d = &s.disambiguation;
        assert_eq!(d.window, 5);
        assert_eq!(d.scheme, Scheme::Random);
        assert_eq!(d.pair_threshold, 0.5);
        assert!(d.coerce_pos);
        assert_eq!(d.trace, TraceLevel::ALL);
        assert_eq!(d.seed, Some(9));
    }

    #[test]
    fn set_unknown_parameter() {
        let mut s = Settings::default();
        let err = s.set("contextScore", "1").unwrap_err();
        assert!(matches!(err, SettingsError::UnknownParameter(ref n) if n == "contextScore"));
    }

    #[test]
    fn set_invalid_values() {
        let mut s = Settings::default();
        assert!(matches!(
            s.set("window", "-1"),
            Err(SettingsError::InvalidValue { .. })
        ));
        assert!(matches!(
            s.set("trace", "32"),
            Err(SettingsError::InvalidValue { .. })
        ));
        assert!(matches!(
            s.set("context_threshold", "inf"),
            Err(SettingsError::InvalidValue { .. })
        ));
        assert!(matches!(
            s.set_pair("window"),
            Err(SettingsError::InvalidValue { .. })
        ));
    }
}
