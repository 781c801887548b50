use crate::algorithm::{Algorithm, HashAlgorithm};
use crate::format::{RegisterOrder, serialize_registers};
use crate::padding::{BLOCK_WORDS, pad_words};

use super::{IV, LEFT, RIGHT_SHORT, round4};

/// RIPEMD-128 message digest
#[derive(Debug, Clone, Copy)]
pub struct Ripemd128;

fn compress(h: &mut [u32; 4], x: &[u32; BLOCK_WORDS]) {
    let mut left = [h[0], h[1], h[2], h[3]];
    let mut right = left;
    for round in 0..4 {
        round4(&mut left, x, &LEFT, round);
        round4(&mut right, x, &RIGHT_SHORT, round);
    }

    let t = h[1].wrapping_add(left[2]).wrapping_add(right[3]);
    h[1] = h[2].wrapping_add(left[3]).wrapping_add(right[0]);
    h[2] = h[3].wrapping_add(left[0]).wrapping_add(right[1]);
    h[3] = h[0].wrapping_add(left[1]).wrapping_add(right[2]);
    h[0] = t;
}

impl HashAlgorithm for Ripemd128 {
    const ALGORITHM: Algorithm = Algorithm::Ripemd128;

    fn digest(message: &[u8]) -> Vec<u8> {
        let mut state = [IV[0], IV[1], IV[2], IV[3]];
        for block in pad_words(message).blocks() {
            compress(&mut state, &block);
        }
        serialize_registers(&state, RegisterOrder::LittleEndian)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ripemd128_reference_vectors() {
        let test_vectors = [
            ("", "cdf26213a150dc3ecb610f18f6b38b46"),
            ("a", "86be7afa339d0fc7cfc785e72f578d33"),
            ("abc", "c14a12199c66e4ba84636b0f69144c77"),
            ("message digest", "9e327b3d6e523062afc1132d7df9d1b8"),
            (
                "abcdefghijklmnopqrstuvwxyz",
                "fd2aa607f71dc8f510714922b371834e",
            ),
            (
                "12345678901234567890123456789012345678901234567890123456789012345678901234567890",
                "3f45ef194732c2dbb2c4a2c769795fa3",
            ),
        ];
        for (test, correct) in test_vectors {
            assert_eq!(hex::encode(Ripemd128::digest(test.as_bytes())), correct, "{test:?}");
        }
    }
}
