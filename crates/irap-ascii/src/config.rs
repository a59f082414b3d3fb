//! Configuration for the ASCII writer.

use serde::{Deserialize, Serialize};

use crate::error::{IrapError, Result};
use crate::MAX_PER_LINE;

/// Configuration for [`AsciiWriter`](crate::AsciiWriter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AsciiWriterConfig {
    /// Number of value tokens written per line before wrapping.
    ///
    /// Readers of the format expect the default; only change this when the
    /// consumer is known to accept a different cadence.
    pub values_per_line: usize,
}

impl Default for AsciiWriterConfig {
    fn default() -> Self {
        Self {
            values_per_line: MAX_PER_LINE,
        }
    }
}

impl AsciiWriterConfig {
    /// Create a configuration with a custom line width.
    pub fn with_values_per_line(values_per_line: usize) -> Self {
        Self { values_per_line }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.values_per_line == 0 {
            return Err(IrapError::InvalidConfig(
                "values_per_line must be > 0".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_format_line_width() {
        let config = AsciiWriterConfig::default();
        assert_eq!(config.values_per_line, MAX_PER_LINE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let config: AsciiWriterConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, AsciiWriterConfig::default());

        let config: AsciiWriterConfig =
            serde_json::from_str(r#"{"values_per_line": 6}"#).unwrap();
        assert_eq!(config.values_per_line, 6);
    }

    #[test]
    fn test_zero_values_per_line_rejected() {
        let config = AsciiWriterConfig::with_values_per_line(0);
        assert!(matches!(
            config.validate(),
            Err(IrapError::InvalidConfig(_))
        ));
    }
}
