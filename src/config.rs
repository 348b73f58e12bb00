use serde::{Deserialize, Serialize};

use crate::format::FormatOptions;
use crate::parser::ParseOptions;
use crate::report::ReportLabels;

/// Everything a caller can tune. Missing fields fall back to their defaults, so a host can send
/// just `{"parse": {"decimal_separator": ","}}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub parse: ParseOptions,
    pub format: FormatOptions,
    pub labels: ReportLabels,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json() {
        let config: EngineConfig =
            serde_json::from_str(r#"{"parse": {"decimal_separator": ","}}"#).unwrap();
        assert_eq!(config.parse.decimal_separator(), ',');
        assert_eq!(config.format, FormatOptions::default());
        assert_eq!(config.labels, ReportLabels::default());
    }

    #[test]
    fn test_clashing_separator_is_rejected() {
        for json in [
            r#"{"parse": {"decimal_separator": "-"}}"#,
            r#"{"parse": {"decimal_separator": "7"}}"#,
            r#"{"parse": {"decimal_separator": " "}}"#,
        ] {
            let err = serde_json::from_str::<EngineConfig>(json).unwrap_err();
            assert!(err.to_string().contains("cannot be a decimal separator"), "{err}");
        }
    }

    #[test]
    fn test_empty_json_is_default() {
        let config: EngineConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_round_trip() {
        let mut config = EngineConfig::default();
        config.format.max_fraction_digits = 3;
        config.labels.solution = "Решение:".to_string();
        let json = serde_json::to_string(&config).unwrap();
        let back: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
