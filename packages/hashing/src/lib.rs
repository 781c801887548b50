//! Message digests and checksums implemented from first principles
//!
//! MD2, MD4, MD5, SHA-1, SHA-224/256/384/512, RIPEMD-128/160/256/320,
//! Adler-32 and FNV-1 (32-bit). Every algorithm is a pure function of its
//! input bytes.
//!
//! ```
//! use mdkit_hashing::Hash;
//!
//! assert_eq!(Hash::md5("abc"), "900150983cd24fb0d6963f7d28e17f72");
//! assert_eq!(
//!     Hash::digest("ripemd160", "").unwrap(),
//!     "9c1185a5c5e9fc54612808977ee8f548b2258d31"
//! );
//! ```

#![forbid(unsafe_code)]

pub mod algorithm;
pub mod algorithms;
pub mod api;
pub mod config;
pub mod error;
pub mod format;
pub mod hash_result;
pub mod message;
pub mod padding;

// Re-export error types
pub use error::{HashError, Result};

// Re-export the main APIs
pub use algorithm::{Algorithm, HashAlgorithm};
pub use api::{
    Digester, Hash, adler32_hash, fnv1_32_hash, md2_hash, md4_hash, md5_hash, ripemd128_hash,
    ripemd160_hash, ripemd256_hash, ripemd320_hash, sha1_hash, sha224_hash, sha256_hash,
    sha384_hash, sha512_hash,
};
pub use config::HashConfig;
pub use format::HexStyle;
pub use hash_result::HashResult;
pub use message::encode_text;
