//! Algorithm tags and the dispatch table behind the façade

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::algorithms::{
    Adler32, Fnv1_32, Md2, Md4, Md5, Ripemd128, Ripemd160, Ripemd256, Ripemd320, Sha1, Sha224,
    Sha256, Sha384, Sha512,
};
use crate::error::{HashError, Result};

/// A digest algorithm implemented from first principles.
///
/// Implementors are zero-sized markers; all state lives on the stack of a
/// single [`HashAlgorithm::digest`] call, so every implementation is reentrant.
pub trait HashAlgorithm {
    /// Tag of this algorithm
    const ALGORITHM: Algorithm;

    /// Hash `message` and return the canonical digest bytes
    fn digest(message: &[u8]) -> Vec<u8>;
}

type DigestFn = fn(&[u8]) -> Vec<u8>;

/// Supported digest algorithms
///
/// Serialized as the canonical display name; deserialized through
/// [`Algorithm::from_tag`], so any accepted tag spelling round-trips.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Algorithm {
    /// MD2 (RFC 1319)
    Md2,
    /// MD4 (RFC 1320)
    Md4,
    /// MD5 (RFC 1321)
    Md5,
    /// SHA-1 (FIPS 180-4)
    Sha1,
    /// SHA-224 (FIPS 180-4)
    Sha224,
    /// SHA-256 (FIPS 180-4)
    Sha256,
    /// SHA-384 (FIPS 180-4)
    Sha384,
    /// SHA-512 (FIPS 180-4)
    Sha512,
    /// RIPEMD-128
    Ripemd128,
    /// RIPEMD-160
    Ripemd160,
    /// RIPEMD-256
    Ripemd256,
    /// RIPEMD-320
    Ripemd320,
    /// Adler-32 checksum (RFC 1950)
    Adler32,
    /// FNV-1, 32-bit
    Fnv1_32,
}

impl Algorithm {
    /// Every supported algorithm, in declaration order
    pub const ALL: [Algorithm; 14] = [
        Algorithm::Md2,
        Algorithm::Md4,
        Algorithm::Md5,
        Algorithm::Sha1,
        Algorithm::Sha224,
        Algorithm::Sha256,
        Algorithm::Sha384,
        Algorithm::Sha512,
        Algorithm::Ripemd128,
        Algorithm::Ripemd160,
        Algorithm::Ripemd256,
        Algorithm::Ripemd320,
        Algorithm::Adler32,
        Algorithm::Fnv1_32,
    ];

    /// Canonical display name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Md2 => "MD2",
            Self::Md4 => "MD4",
            Self::Md5 => "MD5",
            Self::Sha1 => "SHA-1",
            Self::Sha224 => "SHA-224",
            Self::Sha256 => "SHA-256",
            Self::Sha384 => "SHA-384",
            Self::Sha512 => "SHA-512",
            Self::Ripemd128 => "RIPEMD-128",
            Self::Ripemd160 => "RIPEMD-160",
            Self::Ripemd256 => "RIPEMD-256",
            Self::Ripemd320 => "RIPEMD-320",
            Self::Adler32 => "Adler-32",
            Self::Fnv1_32 => "FNV-1-32",
        }
    }

    /// Digest width in bytes
    #[must_use]
    pub const fn output_len(self) -> usize {
        match self {
            Self::Adler32 | Self::Fnv1_32 => 4,
            Self::Md2 | Self::Md4 | Self::Md5 | Self::Ripemd128 => 16,
            Self::Sha1 | Self::Ripemd160 => 20,
            Self::Sha224 => 28,
            Self::Sha256 | Self::Ripemd256 => 32,
            Self::Ripemd320 => 40,
            Self::Sha384 => 48,
            Self::Sha512 => 64,
        }
    }

    /// Whether the historical hex output of this algorithm dropped leading
    /// zeros of each 32-bit unit.
    #[must_use]
    pub const fn has_variable_width_legacy_hex(self) -> bool {
        matches!(
            self,
            Self::Md4
                | Self::Md5
                | Self::Sha1
                | Self::Sha224
                | Self::Ripemd128
                | Self::Ripemd160
                | Self::Adler32
                | Self::Fnv1_32
        )
    }

    fn digest_fn(self) -> DigestFn {
        match self {
            Self::Md2 => Md2::digest,
            Self::Md4 => Md4::digest,
            Self::Md5 => Md5::digest,
            Self::Sha1 => Sha1::digest,
            Self::Sha224 => Sha224::digest,
            Self::Sha256 => Sha256::digest,
            Self::Sha384 => Sha384::digest,
            Self::Sha512 => Sha512::digest,
            Self::Ripemd128 => Ripemd128::digest,
            Self::Ripemd160 => Ripemd160::digest,
            Self::Ripemd256 => Ripemd256::digest,
            Self::Ripemd320 => Ripemd320::digest,
            Self::Adler32 => Adler32::digest,
            Self::Fnv1_32 => Fnv1_32::digest,
        }
    }

    /// Run this algorithm over `message`
    #[must_use]
    pub fn compute(self, message: &[u8]) -> crate::HashResult {
        crate::HashResult::new(self, (self.digest_fn())(message))
    }

    /// Resolve a dispatch tag such as `"md5"`, `"SHA-1"` or `"ripemd_160"`.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::UnknownAlgorithm`] when the tag names nothing we
    /// implement.
    pub fn from_tag(tag: &str) -> Result<Self> {
        let key: String = tag
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        let algorithm = match key.as_str() {
            "md2" => Self::Md2,
            "md4" => Self::Md4,
            "md5" => Self::Md5,
            "sha1" => Self::Sha1,
            "sha224" => Self::Sha224,
            "sha256" => Self::Sha256,
            "sha384" => Self::Sha384,
            "sha512" => Self::Sha512,
            "ripemd128" | "rmd128" => Self::Ripemd128,
            "ripemd160" | "rmd160" => Self::Ripemd160,
            "ripemd256" | "rmd256" => Self::Ripemd256,
            "ripemd320" | "rmd320" => Self::Ripemd320,
            "adler32" => Self::Adler32,
            "fnv132" | "fnv32" => Self::Fnv1_32,
            _ => return Err(HashError::unknown_algorithm(tag)),
        };
        Ok(algorithm)
    }
}

impl FromStr for Algorithm {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_tag(s)
    }
}

impl TryFrom<String> for Algorithm {
    type Error = HashError;

    fn try_from(tag: String) -> Result<Self> {
        Self::from_tag(&tag)
    }
}

impl From<Algorithm> for &'static str {
    fn from(algorithm: Algorithm) -> Self {
        algorithm.name()
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
