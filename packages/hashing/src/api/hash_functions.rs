//! Raw-digest entry points, one per algorithm
//!
//! These are infallible: every byte sequence is a valid message.

use crate::HashResult;
use crate::algorithm::HashAlgorithm;
use crate::algorithms::{
    Adler32, Fnv1_32, Md2, Md4, Md5, Ripemd128, Ripemd160, Ripemd256, Ripemd320, Sha1, Sha224,
    Sha256, Sha384, Sha512,
};

fn compute<A: HashAlgorithm>(data: &[u8]) -> HashResult {
    HashResult::new(A::ALGORITHM, A::digest(data))
}

/// MD2 digest of `data`
#[must_use]
pub fn md2_hash(data: &[u8]) -> HashResult {
    compute::<Md2>(data)
}

/// MD4 digest of `data`
#[must_use]
pub fn md4_hash(data: &[u8]) -> HashResult {
    compute::<Md4>(data)
}

/// MD5 digest of `data`
#[must_use]
pub fn md5_hash(data: &[u8]) -> HashResult {
    compute::<Md5>(data)
}

/// SHA-1 digest of `data`
#[must_use]
pub fn sha1_hash(data: &[u8]) -> HashResult {
    compute::<Sha1>(data)
}

/// SHA-224 digest of `data`
#[must_use]
pub fn sha224_hash(data: &[u8]) -> HashResult {
    compute::<Sha224>(data)
}

/// SHA-256 digest of `data`
#[must_use]
pub fn sha256_hash(data: &[u8]) -> HashResult {
    compute::<Sha256>(data)
}

/// SHA-384 digest of `data`
#[must_use]
pub fn sha384_hash(data: &[u8]) -> HashResult {
    compute::<Sha384>(data)
}

/// SHA-512 digest of `data`
#[must_use]
pub fn sha512_hash(data: &[u8]) -> HashResult {
    compute::<Sha512>(data)
}

/// RIPEMD-128 digest of `data`
#[must_use]
pub fn ripemd128_hash(data: &[u8]) -> HashResult {
    compute::<Ripemd128>(data)
}

/// RIPEMD-160 digest of `data`
#[must_use]
pub fn ripemd160_hash(data: &[u8]) -> HashResult {
    compute::<Ripemd160>(data)
}

/// RIPEMD-256 digest of `data`
#[must_use]
pub fn ripemd256_hash(data: &[u8]) -> HashResult {
    compute::<Ripemd256>(data)
}

/// RIPEMD-320 digest of `data`
#[must_use]
pub fn ripemd320_hash(data: &[u8]) -> HashResult {
    compute::<Ripemd320>(data)
}

/// Adler-32 checksum of `data`
#[must_use]
pub fn adler32_hash(data: &[u8]) -> HashResult {
    compute::<Adler32>(data)
}

/// FNV-1 32-bit hash of `data`
#[must_use]
pub fn fnv1_32_hash(data: &[u8]) -> HashResult {
    compute::<Fnv1_32>(data)
}
