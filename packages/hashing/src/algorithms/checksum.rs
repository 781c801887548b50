//! Non-cryptographic 32-bit checksums
//!
//! Both fold the message byte by byte into a single register and emit it
//! big-endian.

use crate::algorithm::{Algorithm, HashAlgorithm};
use crate::format::{RegisterOrder, serialize_registers};

/// Largest prime below 2^16
const ADLER_MOD: u32 = 65_521;

/// Bytes that can be summed before `b` may overflow a `u32`
const ADLER_NMAX: usize = 5_552;

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// Adler-32 checksum (RFC 1950)
#[derive(Debug, Clone, Copy)]
pub struct Adler32;

impl HashAlgorithm for Adler32 {
    const ALGORITHM: Algorithm = Algorithm::Adler32;

    fn digest(message: &[u8]) -> Vec<u8> {
        let mut a = 1u32;
        let mut b = 0u32;
        for chunk in message.chunks(ADLER_NMAX) {
            for &byte in chunk {
                a += u32::from(byte);
                b += a;
            }
            a %= ADLER_MOD;
            b %= ADLER_MOD;
        }
        serialize_registers(&[(b << 16) | a], RegisterOrder::BigEndian)
    }
}

/// FNV-1 hash, 32-bit
#[derive(Debug, Clone, Copy)]
pub struct Fnv1_32;

impl HashAlgorithm for Fnv1_32 {
    const ALGORITHM: Algorithm = Algorithm::Fnv1_32;

    fn digest(message: &[u8]) -> Vec<u8> {
        let hash = message.iter().fold(FNV_OFFSET_BASIS, |hash, &byte| {
            hash.wrapping_mul(FNV_PRIME) ^ u32::from(byte)
        });
        serialize_registers(&[hash], RegisterOrder::BigEndian)
    }
}
