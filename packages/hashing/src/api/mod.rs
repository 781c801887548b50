//! Hashing façade
//!
//! Usage: `Hash::md5(data)`, `Hash::digest("ripemd160", data)?` or a
//! [`Digester`] built from a [`HashConfig`](crate::HashConfig).

pub mod digester;
pub mod hash_entry;
pub mod hash_functions;

pub use digester::Digester;
pub use hash_entry::Hash;
pub use hash_functions::{
    adler32_hash, fnv1_32_hash, md2_hash, md4_hash, md5_hash, ripemd128_hash, ripemd160_hash,
    ripemd256_hash, ripemd320_hash, sha1_hash, sha224_hash, sha256_hash, sha384_hash, sha512_hash,
};
