use crate::algorithm::{Algorithm, HashAlgorithm};
use crate::format::{RegisterOrder, serialize_registers};
use crate::padding::{BLOCK_WORDS, pad_words};

use super::{IV, LEFT, RIGHT_LONG, round5};

/// RIPEMD-160 message digest
#[derive(Debug, Clone, Copy)]
pub struct Ripemd160;

fn compress(h: &mut [u32; 5], x: &[u32; BLOCK_WORDS]) {
    let mut left = *h;
    let mut right = *h;
    for round in 0..5 {
        round5(&mut left, x, &LEFT, round);
        round5(&mut right, x, &RIGHT_LONG, round);
    }

    // combine the lines, rotating the chaining registers by one
    let t = h[1].wrapping_add(left[2]).wrapping_add(right[3]);
    h[1] = h[2].wrapping_add(left[3]).wrapping_add(right[4]);
    h[2] = h[3].wrapping_add(left[4]).wrapping_add(right[0]);
    h[3] = h[4].wrapping_add(left[0]).wrapping_add(right[1]);
    h[4] = h[0].wrapping_add(left[1]).wrapping_add(right[2]);
    h[0] = t;
}

impl HashAlgorithm for Ripemd160 {
    const ALGORITHM: Algorithm = Algorithm::Ripemd160;

    fn digest(message: &[u8]) -> Vec<u8> {
        let mut state = IV;
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
    fn test_ripemd160_reference_vectors() {
        let test_vectors = [
            ("", "9c1185a5c5e9fc54612808977ee8f548b2258d31"),
            ("a", "0bdc9d2d256b3ee9daae347be6f4dc835a467ffe"),
            ("abc", "8eb208f7e05d987a9b044a8e98c6b087f15a0bfc"),
            ("message digest", "5d0689ef49d2fae572b881b123a85ffa21595f36"),
            (
                "abcdefghijklmnopqrstuvwxyz",
                "f71c27109c692c1b56bbdceb5b9d2865b3708dbc",
            ),
            (
                "12345678901234567890123456789012345678901234567890123456789012345678901234567890",
                "9b752e45573d4b39f4dbd3323cab82bf63326bfb",
            ),
        ];
        for (test, correct) in test_vectors {
            assert_eq!(hex::encode(Ripemd160::digest(test.as_bytes())), correct, "{test:?}");
        }
    }
}
