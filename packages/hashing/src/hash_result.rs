//! Digest value with encoding support

use crate::algorithm::Algorithm;
use crate::format::{self, HexStyle};

/// Finished digest of one hash call
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HashResult {
    algorithm: Algorithm,
    /// Canonical digest bytes
    bytes: Vec<u8>,
}

impl HashResult {
    /// Wrap canonical digest bytes produced by `algorithm`
    #[must_use]
    pub(crate) fn new(algorithm: Algorithm, bytes: Vec<u8>) -> Self {
        debug_assert_eq!(bytes.len(), algorithm.output_len());
        Self { algorithm, bytes }
    }

    /// Algorithm that produced this digest
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Get the raw bytes of the digest
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Convert to a Vec<u8>
    #[must_use]
    pub fn to_vec(self) -> Vec<u8> {
        self.bytes
    }

    /// Fixed-width lowercase hex
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    /// Hex in the requested style, see [`HexStyle`]
    #[must_use]
    pub fn to_hex_styled(&self, style: HexStyle) -> String {
        format::render_hex(self.algorithm, &self.bytes, style)
    }

    /// Get the digest as a base64 string
    #[must_use]
    pub fn to_base64(&self) -> String {
        use base64::{Engine as _, engine::general_purpose};
        general_purpose::STANDARD.encode(&self.bytes)
    }

    /// Get the length of the digest in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if the digest is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl From<HashResult> for Vec<u8> {
    fn from(result: HashResult) -> Self {
        result.bytes
    }
}

impl AsRef<[u8]> for HashResult {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl std::fmt::Display for HashResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use crate::api::{fnv1_32_hash, md2_hash, ripemd320_hash, sha512_hash};

    use super::*;

    #[test]
    fn results_carry_their_declared_width() {
        for result in [
            md2_hash(b"abc"),
            sha512_hash(b"abc"),
            ripemd320_hash(b"abc"),
            fnv1_32_hash(b"abc"),
        ] {
            let algorithm = result.algorithm();
            assert_eq!(result.len(), algorithm.output_len(), "{algorithm}");
            assert_eq!(result.to_hex().len(), algorithm.output_len() * 2, "{algorithm}");
        }
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.compute(b"").algorithm(), algorithm);
        }
    }
}
