//! Configured façade

use tracing::{debug, warn};

use crate::algorithm::Algorithm;
use crate::config::HashConfig;
use crate::format::HexStyle;
use crate::message::encode_text;
use crate::{HashResult, Result};

/// Digest front end bound to a [`HashConfig`].
///
/// Holds no per-call state; one instance can serve any number of threads.
#[derive(Clone, Debug, Default)]
pub struct Digester {
    config: HashConfig,
}

impl Digester {
    /// Build a digester from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::InvalidConfig`](crate::HashError::InvalidConfig)
    /// when the configuration names an unknown text encoding.
    pub fn new(config: HashConfig) -> Result<Self> {
        config.validate()?;
        if config.hex_style == HexStyle::Legacy {
            warn!(
                hex_style = ?config.hex_style,
                "legacy hex style drops leading zeros and is not comparable to published digests"
            );
        }
        Ok(Self { config })
    }

    /// Active configuration
    #[must_use]
    pub fn config(&self) -> &HashConfig {
        &self.config
    }

    /// Hash `data` and render it in the configured hex style.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::UnknownAlgorithm`](crate::HashError::UnknownAlgorithm)
    /// for an unrecognized tag.
    pub fn digest(&self, tag: &str, data: impl AsRef<[u8]>) -> Result<String> {
        let digest = self.digest_bytes(tag, data)?;
        Ok(digest.to_hex_styled(self.config.hex_style))
    }

    /// Encode `text` with the configured encoding, hash it and render hex.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::UnknownAlgorithm`](crate::HashError::UnknownAlgorithm)
    /// for an unrecognized tag and [`HashError::Encoding`](crate::HashError::Encoding)
    /// when `text` cannot be encoded. Both are raised before hashing starts.
    pub fn digest_text(&self, tag: &str, text: &str) -> Result<String> {
        let algorithm = Algorithm::from_tag(tag)?;
        let message = encode_text(text, &self.config.text_encoding)?;
        let digest = self.compute(algorithm, &message);
        Ok(digest.to_hex_styled(self.config.hex_style))
    }

    /// Hash `data` and return the raw digest.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::UnknownAlgorithm`](crate::HashError::UnknownAlgorithm)
    /// for an unrecognized tag.
    pub fn digest_bytes(&self, tag: &str, data: impl AsRef<[u8]>) -> Result<HashResult> {
        let algorithm = Algorithm::from_tag(tag)?;
        Ok(self.compute(algorithm, data.as_ref()))
    }

    fn compute(&self, algorithm: Algorithm, message: &[u8]) -> HashResult {
        debug!(
            %algorithm,
            message_len = message.len(),
            hex_style = ?self.config.hex_style,
            "computing digest"
        );
        algorithm.compute(message)
    }
}
