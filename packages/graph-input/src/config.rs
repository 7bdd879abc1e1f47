//! Edgelist loader configuration
//!
//! Mirrors the knobs of the edgelist format: column delimiter, comment prefix,
//! header flag, plus the duplicate-edge policy used when building the CSR.
//!
//! # Examples
//!
//! ```rust
//! use graph_input::config::{DuplicatePolicy, EdgelistConfig};
//!
//! let config = EdgelistConfig::default()
//!     .with_delimiter('\t')
//!     .with_header(true)
//!     .with_duplicate_policy(DuplicatePolicy::KeepFirst);
//! assert!(config.validate().is_ok());
//! ```
//!
//! Configs can also be loaded from YAML or JSON:
//!
//! ```yaml
//! delimiter: ","
//! comment: "%"
//! has_header: true
//! duplicate_policy: sum
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Delimiter/comment must be a single ASCII byte
    #[error("{field} must be a single-byte ASCII character, got {value:?}")]
    NonAscii { field: &'static str, value: char },

    /// Character that would collide with vertex ID digits or line breaks
    #[error("{field} cannot be {value:?}: it is part of the data or line syntax")]
    Reserved { field: &'static str, value: char },

    /// Delimiter and comment prefix collide
    #[error("delimiter and comment prefix are both {0:?}")]
    SameDelimiterAndComment(char),

    /// Unrecognized config file extension
    #[error("Unsupported config file extension for '{0}'. Use .yaml, .yml or .json")]
    UnsupportedFormat(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration result type
pub type ConfigResult<T> = Result<T, ConfigError>;

/// How repeated `(source, destination)` pairs are stored in the CSR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// One entry whose value is the sum of all copies (`k * (source + 1)`)
    #[default]
    Sum,
    /// One entry holding the value of the first copy (`source + 1`)
    KeepFirst,
}

/// Edgelist loader configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EdgelistConfig {
    /// Column delimiter (default: space)
    pub delimiter: char,

    /// Lines starting with this character are ignored (default: `#`)
    pub comment: char,

    /// Skip the first non-comment line
    pub has_header: bool,

    /// Duplicate edge handling during CSR construction
    pub duplicate_policy: DuplicatePolicy,
}

impl Default for EdgelistConfig {
    fn default() -> Self {
        Self {
            delimiter: ' ',
            comment: '#',
            has_header: false,
            duplicate_policy: DuplicatePolicy::Sum,
        }
    }
}

impl EdgelistConfig {
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_comment(mut self, comment: char) -> Self {
        self.comment = comment;
        self
    }

    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    /// Check that delimiter and comment are usable by the byte-oriented reader.
    pub fn validate(&self) -> ConfigResult<()> {
        check_byte("delimiter", self.delimiter)?;
        check_byte("comment", self.comment)?;

        if self.delimiter == self.comment {
            return Err(ConfigError::SameDelimiterAndComment(self.delimiter));
        }
        Ok(())
    }

    /// Delimiter as the byte handed to the reader. Call after `validate()`.
    pub(crate) fn delimiter_byte(&self) -> u8 {
        self.delimiter as u8
    }

    pub(crate) fn comment_byte(&self) -> u8 {
        self.comment as u8
    }

    /// Parse and validate a YAML document
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON document
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a `.yaml`/`.yml`/`.json` file
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&std::fs::read_to_string(path)?),
            Some("json") => Self::from_json_str(&std::fs::read_to_string(path)?),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    pub fn to_yaml(&self) -> ConfigResult<String> {
        serde_yaml::to_string(self).map_err(ConfigError::Yaml)
    }
}

fn check_byte(field: &'static str, value: char) -> ConfigResult<()> {
    if !value.is_ascii() {
        return Err(ConfigError::NonAscii { field, value });
    }
    if value.is_ascii_digit() || matches!(value, '-' | '+' | '\n' | '\r') {
        return Err(ConfigError::Reserved { field, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = EdgelistConfig::default();
        assert_eq!(config.delimiter, ' ');
        assert_eq!(config.comment, '#');
        assert!(!config.has_header);
        assert_eq!(config.duplicate_policy, DuplicatePolicy::Sum);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let config = EdgelistConfig::default()
            .with_delimiter(',')
            .with_comment('%')
            .with_header(true)
            .with_duplicate_policy(DuplicatePolicy::KeepFirst);

        assert_eq!(config.delimiter_byte(), b',');
        assert_eq!(config.comment_byte(), b'%');
        assert!(config.has_header);
        assert_eq!(config.duplicate_policy, DuplicatePolicy::KeepFirst);
    }

    #[test]
    fn test_rejects_non_ascii_delimiter() {
        let config = EdgelistConfig::default().with_delimiter('→');
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonAscii {
                field: "delimiter",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_digit_and_sign() {
        let digit = EdgelistConfig::default().with_delimiter('1');
        assert!(matches!(digit.validate(), Err(ConfigError::Reserved { .. })));

        let minus = EdgelistConfig::default().with_comment('-');
        assert!(matches!(minus.validate(), Err(ConfigError::Reserved { .. })));
    }

    #[test]
    fn test_rejects_same_delimiter_and_comment() {
        let config = EdgelistConfig::default().with_delimiter('#');
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SameDelimiterAndComment('#'))
        ));
    }

    #[test]
    fn test_yaml_loading() {
        let yaml = r#"
delimiter: ","
has_header: true
duplicate_policy: keep_first
"#;
        let config = EdgelistConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.delimiter, ',');
        assert_eq!(config.comment, '#');
        assert!(config.has_header);
        assert_eq!(config.duplicate_policy, DuplicatePolicy::KeepFirst);
    }

    #[test]
    fn test_yaml_unknown_field() {
        let result = EdgelistConfig::from_yaml_str("weighted: true\n");
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_yaml_invalid_values_fail_validation() {
        let result = EdgelistConfig::from_yaml_str("delimiter: \"#\"\n");
        assert!(matches!(
            result,
            Err(ConfigError::SameDelimiterAndComment('#'))
        ));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = EdgelistConfig::default().with_delimiter('\t');
        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("duplicate_policy: sum"));
        assert_eq!(EdgelistConfig::from_yaml_str(&yaml).unwrap(), config);
    }

    #[test]
    fn test_from_file_dispatch() {
        let mut json_file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        json_file
            .write_all(br#"{"delimiter": "\t", "comment": "%"}"#)
            .unwrap();
        let config = EdgelistConfig::from_file(json_file.path()).unwrap();
        assert_eq!(config.delimiter, '\t');
        assert_eq!(config.comment, '%');

        let mut yaml_file = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
        yaml_file.write_all(b"has_header: true\n").unwrap();
        assert!(EdgelistConfig::from_file(yaml_file.path()).unwrap().has_header);

        let other = NamedTempFile::new().unwrap();
        assert!(matches!(
            EdgelistConfig::from_file(other.path()),
            Err(ConfigError::UnsupportedFormat(_))
        ));
    }
}
