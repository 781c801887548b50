use crate::algorithm::{Algorithm, HashAlgorithm};
use crate::format::{RegisterOrder, serialize_registers};
use crate::padding::{BLOCK_WORDS, pad_words};

use super::{IV, IV_WIDE, LEFT, RIGHT_SHORT, round4};

/// RIPEMD-256 message digest
#[derive(Debug, Clone, Copy)]
pub struct Ripemd256;

fn compress(h: &mut [u32; 8], x: &[u32; BLOCK_WORDS]) {
    let mut left = [h[0], h[1], h[2], h[3]];
    let mut right = [h[4], h[5], h[6], h[7]];

    // after round i the lines exchange register i (A, B, C, D)
    for round in 0..4 {
        round4(&mut left, x, &LEFT, round);
        round4(&mut right, x, &RIGHT_SHORT, round);
        std::mem::swap(&mut left[round], &mut right[round]);
    }

    for i in 0..4 {
        h[i] = h[i].wrapping_add(left[i]);
        h[i + 4] = h[i + 4].wrapping_add(right[i]);
    }
}

impl HashAlgorithm for Ripemd256 {
    const ALGORITHM: Algorithm = Algorithm::Ripemd256;

    fn digest(message: &[u8]) -> Vec<u8> {
        let mut state = [
            IV[0], IV[1], IV[2], IV[3], IV_WIDE[0], IV_WIDE[1], IV_WIDE[2], IV_WIDE[3],
        ];
        for block in pad_words(message).blocks() {
            compress(&mut state, &block);
        }
        serialize_registers(&state, RegisterOrder::LittleEndian)
    }
}
