//! Register serialization and hex rendering
//!
//! Each algorithm fixes its own register byte order: the MD and RIPEMD
//! families emit registers little-endian, the SHA family and the checksums
//! big-endian. Hex rendering is separate and offered in two styles.

use serde::{Deserialize, Serialize};

use crate::algorithm::Algorithm;

/// Byte order used when writing digest registers
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegisterOrder {
    /// Lowest-order byte of each register first (MD4, MD5, RIPEMD)
    LittleEndian,
    /// Highest-order byte of each register first (SHA, Adler-32, FNV-1)
    BigEndian,
}

/// How digest bytes are rendered as hex.
///
/// `Fixed` matches the published test vectors of every algorithm. `Legacy`
/// reproduces only the historical hex width, where several algorithms printed
/// each 32-bit unit without leading zeros. The digest bytes underneath are the
/// standard ones under either style: FNV-1 still reads bytes as unsigned and
/// MD2 still uses the RFC 1319 checksum, so legacy strings match old output
/// only where the old bytes were already correct. Such strings are shorter
/// than the digest and ambiguous.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HexStyle {
    /// Two hex digits per byte
    #[default]
    Fixed,
    /// Variable-width hex per 32-bit unit where it was historically emitted
    Legacy,
}

/// Serialize 32-bit registers in the given byte order
#[must_use]
pub fn serialize_registers(registers: &[u32], order: RegisterOrder) -> Vec<u8> {
    let mut out = Vec::with_capacity(registers.len() * 4);
    for &register in registers {
        match order {
            RegisterOrder::LittleEndian => out.extend_from_slice(&register.to_le_bytes()),
            RegisterOrder::BigEndian => out.extend_from_slice(&register.to_be_bytes()),
        }
    }
    out
}

/// Serialize 64-bit registers big-endian (SHA-384 / SHA-512)
#[must_use]
pub fn serialize_wide_registers(registers: &[u64]) -> Vec<u8> {
    registers.iter().flat_map(|r| r.to_be_bytes()).collect()
}

/// Render canonical digest bytes of `algorithm` as lowercase hex
#[must_use]
pub fn render_hex(algorithm: Algorithm, bytes: &[u8], style: HexStyle) -> String {
    match style {
        HexStyle::Legacy if algorithm.has_variable_width_legacy_hex() => bytes
            .chunks(4)
            .map(|unit| {
                let value = unit.iter().fold(0u32, |acc, &b| (acc << 8) | u32::from(b));
                format!("{value:x}")
            })
            .collect(),
        _ => hex::encode(bytes),
    }
}
