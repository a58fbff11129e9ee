//! Chart description loaded from JSON

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::circumplex::{LABEL_CHARS, NUM_AXES};

pub const DEFAULT_WIDTH: u32 = 400;
pub const DEFAULT_HEIGHT: u32 = 400;

/// Octant codes of the Leary interpersonal circle, clockwise from the top
pub const LEARY_LEGEND: [&str; NUM_AXES] = ["AP", "BC", "DE", "FG", "HI", "JK", "LM", "NO"];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid chart JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("score {value} of axis {axis} is outside [0, 1]")]
    ScoreOutOfRange { axis: usize, value: f64 },

    #[error("label {label:?} of axis {axis} must be exactly 2 characters")]
    BadLabel { axis: usize, label: String },
}

/// Scores, labels and initial window size of one chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub title: String,
    pub scores: [f64; NUM_AXES],
    pub legend: [String; NUM_AXES],
    pub width: u32,
    pub height: u32,
}

impl ChartConfig {
    /// Parse and validate a chart from JSON text
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a chart from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Check the values the renderer would otherwise reject with a panic
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (axis, &value) in self.scores.iter().enumerate() {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ScoreOutOfRange { axis, value });
            }
        }
        for (axis, label) in self.legend.iter().enumerate() {
            if label.chars().count() != LABEL_CHARS as usize {
                return Err(ConfigError::BadLabel {
                    axis,
                    label: label.clone(),
                });
            }
        }
        Ok(())
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: "Leary circumplex".to_string(),
            scores: [0.5; NUM_AXES],
            legend: LEARY_LEGEND.map(String::from),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_is_valid() {
        let config = ChartConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.legend[0], "AP");
        assert_eq!(config.legend[7], "NO");
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = ChartConfig::from_json(r#"{ "scores": [1, 0.9, 0.8, 0.7, 0.6, 0.5, 0.4, 0.3] }"#)
            .unwrap();
        assert_eq!(config.scores[1], 0.9);
        assert_eq!(config.legend, ChartConfig::default().legend);
        assert_eq!((config.width, config.height), (400, 400));
    }

    #[test]
    fn test_full_json() {
        let json = r#"{
            "title": "test",
            "scores": [1, 1, 1, 1, 1, 1, 1, 1],
            "legend": ["AB", "CD", "EF", "GH", "IJ", "KL", "MN", "OP"],
            "width": 640,
            "height": 480
        }"#;
        let config = ChartConfig::from_json(json).unwrap();
        assert_eq!(config.title, "test");
        assert_eq!(config.legend[4], "IJ");
        assert_eq!(config.width, 640);
    }

    #[test]
    fn test_wrong_score_count_is_a_parse_error() {
        let err = ChartConfig::from_json(r#"{ "scores": [1, 1, 1] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_score_out_of_range() {
        let mut config = ChartConfig::default();
        config.scores[5] = -0.1;
        match config.validate() {
            Err(ConfigError::ScoreOutOfRange { axis, .. }) => assert_eq!(axis, 5),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_label_length_counts_characters() {
        let mut config = ChartConfig::default();
        // Two characters, more than two bytes
        config.legend[0] = "\u{e9}\u{e8}".to_string();
        assert!(config.validate().is_ok());

        config.legend[2] = "X".to_string();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::BadLabel { axis: 2, .. }));
        assert!(err.to_string().contains("exactly 2 characters"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "title": "from disk" }}"#).unwrap();
        let config = ChartConfig::load(file.path()).unwrap();
        assert_eq!(config.title, "from disk");
    }

    #[test]
    fn test_load_missing_file() {
        let err = ChartConfig::load("/nonexistent/chart.json").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
