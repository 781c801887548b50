//! Digester configuration

use serde::{Deserialize, Serialize};

use crate::error::{HashError, Result};
use crate::format::HexStyle;
use crate::message::{DEFAULT_TEXT_ENCODING, resolve_encoding};

/// Settings of a [`Digester`](crate::Digester)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HashConfig {
    /// Hex rendering of digests
    #[serde(default)]
    pub hex_style: HexStyle,
    /// WHATWG label of the encoding applied to text messages
    #[serde(default = "default_text_encoding")]
    pub text_encoding: String,
}

fn default_text_encoding() -> String {
    DEFAULT_TEXT_ENCODING.to_string()
}

impl Default for HashConfig {
    fn default() -> Self {
        Self {
            hex_style: HexStyle::default(),
            text_encoding: default_text_encoding(),
        }
    }
}

impl HashConfig {
    /// Parse and validate a JSON configuration document.
    ///
    /// Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::InvalidConfig`] when the document is malformed or
    /// fails [`HashConfig::validate`].
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the text encoding label resolves.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::InvalidConfig`] for an unknown encoding label.
    pub fn validate(&self) -> Result<()> {
        resolve_encoding(&self.text_encoding)
            .map_err(|e| HashError::invalid_config(format!("text_encoding: {e}")))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_takes_defaults() {
        let config = HashConfig::from_json("{}").unwrap();
        assert_eq!(config, HashConfig::default());
        assert_eq!(config.hex_style, HexStyle::Fixed);
        assert_eq!(config.text_encoding, "utf-8");
    }

    #[test]
    fn fields_are_read() {
        let config =
            HashConfig::from_json(r#"{"hex_style":"legacy","text_encoding":"utf-16le"}"#).unwrap();
        assert_eq!(config.hex_style, HexStyle::Legacy);
        assert_eq!(config.text_encoding, "utf-16le");
    }

    #[test]
    fn malformed_documents_are_invalid_config() {
        for json in [
            "not json",
            r#"{"hex_style":"wide"}"#,
            r#"{"colour":"blue"}"#,
            r#"{"text_encoding":"klingon"}"#,
        ] {
            assert!(
                matches!(HashConfig::from_json(json), Err(HashError::InvalidConfig(_))),
                "{json}"
            );
        }
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = HashConfig {
            hex_style: HexStyle::Legacy,
            text_encoding: "shift_jis".to_string(),
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(HashConfig::from_json(&json).unwrap(), config);
    }
}
