//! Message padding shared by the block-oriented algorithms
//!
//! The MD/SHA/RIPEMD families pad a message with a single `1` bit, zero bits
//! up to a fixed residue, and the message length. MD2 instead pads to a
//! multiple of 16 bytes PKCS#7-style and appends a checksum block.

use crate::algorithms::md2::PI_SUBST;

/// Block size in bytes of the 32-bit word algorithms
pub const BLOCK_LEN: usize = 64;

/// Number of 32-bit words in one block
pub const BLOCK_WORDS: usize = BLOCK_LEN / 4;

/// Block size in bytes of SHA-384 / SHA-512
pub const WIDE_BLOCK_LEN: usize = 128;

/// Block size in bytes of MD2
pub const MD2_BLOCK_LEN: usize = 16;

/// Padded message as little-endian packed 32-bit words.
///
/// The last two words always hold the bit length of the original message,
/// low word first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaddedWords {
    words: Vec<u32>,
}

impl PaddedWords {
    /// All padded words
    #[must_use]
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    /// Padded length in bytes
    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.words.len() * 4
    }

    /// Number of 16-word blocks
    #[must_use]
    pub fn block_count(&self) -> usize {
        self.words.len() / BLOCK_WORDS
    }

    /// Iterate the padded stream one block at a time
    pub fn blocks(&self) -> impl Iterator<Item = [u32; BLOCK_WORDS]> + '_ {
        self.words.chunks_exact(BLOCK_WORDS).map(|chunk| {
            let mut block = [0u32; BLOCK_WORDS];
            block.copy_from_slice(chunk);
            block
        })
    }

    /// Re-read the stream in the big-endian convention of the SHA family.
    ///
    /// Message words are byte-swapped; the two length words are numeric and
    /// only trade places so the high word comes first.
    #[must_use]
    pub fn into_big_endian(mut self) -> Self {
        let n = self.words.len();
        for word in &mut self.words[..n - 2] {
            *word = word.swap_bytes();
        }
        self.words.swap(n - 2, n - 1);
        self
    }
}

/// Length in bytes of `message_len` bytes once padded to 64-byte blocks
#[must_use]
pub const fn padded_len(message_len: usize) -> usize {
    (message_len + 8) / BLOCK_LEN * BLOCK_LEN + BLOCK_LEN
}

/// Pad `message` for the 64-byte block algorithms (MD4, MD5, SHA-1, SHA-224,
/// SHA-256 and the RIPEMD family).
#[must_use]
pub fn pad_words(message: &[u8]) -> PaddedWords {
    let bit_len = (message.len() as u64).wrapping_mul(8);
    let total = padded_len(message.len());

    let mut bytes = Vec::with_capacity(total);
    bytes.extend_from_slice(message);
    bytes.push(0x80);
    bytes.resize(total - 8, 0);

    let mut words: Vec<u32> = bytes
        .chunks_exact(4)
        .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect();
    words.push(bit_len as u32);
    words.push((bit_len >> 32) as u32);

    tracing::trace!(
        message_len = message.len(),
        blocks = words.len() / BLOCK_WORDS,
        "padded message"
    );

    PaddedWords { words }
}

/// Pad `message` for SHA-384 / SHA-512 and read it as big-endian 64-bit words.
#[must_use]
pub fn pad_wide_words(message: &[u8]) -> Vec<u64> {
    let bit_len = (message.len() as u128).wrapping_mul(8);
    let total = (message.len() + 16) / WIDE_BLOCK_LEN * WIDE_BLOCK_LEN + WIDE_BLOCK_LEN;

    let mut bytes = Vec::with_capacity(total);
    bytes.extend_from_slice(message);
    bytes.push(0x80);
    bytes.resize(total - 16, 0);
    bytes.extend_from_slice(&bit_len.to_be_bytes());

    bytes
        .chunks_exact(8)
        .map(|c| u64::from_be_bytes([c[0], c[1], c[2], c[3], c[4], c[5], c[6], c[7]]))
        .collect()
}

/// Append `i` bytes of value `i` so the length becomes a multiple of 16.
/// A full block of `16`s is added when the message is already aligned.
pub fn md2_pad_into(data: &mut Vec<u8>) {
    let pad = MD2_BLOCK_LEN - data.len() % MD2_BLOCK_LEN;
    data.resize(data.len() + pad, pad as u8);
}

/// 16-byte MD2 checksum of an already padded message.
///
/// `L` threads through every block in order, so the blocks cannot be
/// checksummed independently.
#[must_use]
pub fn md2_checksum(padded: &[u8]) -> [u8; MD2_BLOCK_LEN] {
    debug_assert_eq!(padded.len() % MD2_BLOCK_LEN, 0);

    let mut checksum = [0u8; MD2_BLOCK_LEN];
    let mut l = 0u8;
    for block in padded.chunks_exact(MD2_BLOCK_LEN) {
        for (c, &byte) in checksum.iter_mut().zip(block) {
            *c ^= PI_SUBST[usize::from(byte ^ l)];
            l = *c;
        }
    }
    checksum
}

/// Pad `message` and append its checksum: the full MD2 input stream.
#[must_use]
pub fn md2_prepare(message: &[u8]) -> Vec<u8> {
    let mut data = Vec::with_capacity(message.len() + 2 * MD2_BLOCK_LEN);
    data.extend_from_slice(message);
    md2_pad_into(&mut data);
    let checksum = md2_checksum(&data);
    data.extend_from_slice(&checksum);
    data
}
