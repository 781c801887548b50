//! Entry point for the hex-returning façade

use crate::algorithm::Algorithm;
use crate::{HashResult, Result};

use super::hash_functions::{
    adler32_hash, fnv1_32_hash, md2_hash, md4_hash, md5_hash, ripemd128_hash, ripemd160_hash,
    ripemd256_hash, ripemd320_hash, sha1_hash, sha224_hash, sha256_hash, sha384_hash, sha512_hash,
};

/// Entry point for hash operations
///
/// Every method returns fixed-width lowercase hex. Use
/// [`Digester`](crate::Digester) for text encodings or the legacy hex style.
pub struct Hash;

impl Hash {
    /// MD2 of `data` as hex
    #[must_use]
    pub fn md2(data: impl AsRef<[u8]>) -> String {
        md2_hash(data.as_ref()).to_hex()
    }

    /// MD4 of `data` as hex
    #[must_use]
    pub fn md4(data: impl AsRef<[u8]>) -> String {
        md4_hash(data.as_ref()).to_hex()
    }

    /// MD5 of `data` as hex
    #[must_use]
    pub fn md5(data: impl AsRef<[u8]>) -> String {
        md5_hash(data.as_ref()).to_hex()
    }

    /// SHA-1 of `data` as hex
    #[must_use]
    pub fn sha1(data: impl AsRef<[u8]>) -> String {
        sha1_hash(data.as_ref()).to_hex()
    }

    /// SHA-224 of `data` as hex
    #[must_use]
    pub fn sha224(data: impl AsRef<[u8]>) -> String {
        sha224_hash(data.as_ref()).to_hex()
    }

    /// SHA-256 of `data` as hex
    #[must_use]
    pub fn sha256(data: impl AsRef<[u8]>) -> String {
        sha256_hash(data.as_ref()).to_hex()
    }

    /// SHA-384 of `data` as hex
    #[must_use]
    pub fn sha384(data: impl AsRef<[u8]>) -> String {
        sha384_hash(data.as_ref()).to_hex()
    }

    /// SHA-512 of `data` as hex
    #[must_use]
    pub fn sha512(data: impl AsRef<[u8]>) -> String {
        sha512_hash(data.as_ref()).to_hex()
    }

    /// RIPEMD-128 of `data` as hex
    #[must_use]
    pub fn ripemd128(data: impl AsRef<[u8]>) -> String {
        ripemd128_hash(data.as_ref()).to_hex()
    }

    /// RIPEMD-160 of `data` as hex
    #[must_use]
    pub fn ripemd160(data: impl AsRef<[u8]>) -> String {
        ripemd160_hash(data.as_ref()).to_hex()
    }

    /// RIPEMD-256 of `data` as hex
    #[must_use]
    pub fn ripemd256(data: impl AsRef<[u8]>) -> String {
        ripemd256_hash(data.as_ref()).to_hex()
    }

    /// RIPEMD-320 of `data` as hex
    #[must_use]
    pub fn ripemd320(data: impl AsRef<[u8]>) -> String {
        ripemd320_hash(data.as_ref()).to_hex()
    }

    /// Adler-32 of `data` as hex
    #[must_use]
    pub fn adler32(data: impl AsRef<[u8]>) -> String {
        adler32_hash(data.as_ref()).to_hex()
    }

    /// FNV-1 32-bit of `data` as hex
    #[must_use]
    pub fn fnv1_32(data: impl AsRef<[u8]>) -> String {
        fnv1_32_hash(data.as_ref()).to_hex()
    }

    /// Hash `data` with the algorithm named by `tag` and return hex.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::UnknownAlgorithm`](crate::HashError::UnknownAlgorithm)
    /// before hashing when `tag` is not recognized.
    pub fn digest(tag: &str, data: impl AsRef<[u8]>) -> Result<String> {
        Self::digest_bytes(tag, data).map(|digest| digest.to_hex())
    }

    /// Hash `data` with the algorithm named by `tag`.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::UnknownAlgorithm`](crate::HashError::UnknownAlgorithm)
    /// before hashing when `tag` is not recognized.
    pub fn digest_bytes(tag: &str, data: impl AsRef<[u8]>) -> Result<HashResult> {
        let algorithm = Algorithm::from_tag(tag)?;
        let data = data.as_ref();
        tracing::debug!(%algorithm, message_len = data.len(), "computing digest");
        Ok(algorithm.compute(data))
    }
}
