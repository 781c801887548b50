//! MD4 as per RFC 1320: https://www.rfc-editor.org/rfc/rfc1320

use crate::algorithm::{Algorithm, HashAlgorithm};
use crate::format::{RegisterOrder, serialize_registers};
use crate::padding::{BLOCK_WORDS, pad_words};

pub(crate) mod constants {
    pub const WORD_A: u32 = u32::from_le_bytes([0x01, 0x23, 0x45, 0x67]);
    pub const WORD_B: u32 = u32::from_le_bytes([0x89, 0xab, 0xcd, 0xef]);
    pub const WORD_C: u32 = u32::from_le_bytes([0xfe, 0xdc, 0xba, 0x98]);
    pub const WORD_D: u32 = u32::from_le_bytes([0x76, 0x54, 0x32, 0x10]);

    pub const INIT_STATE: [u32; 4] = [WORD_A, WORD_B, WORD_C, WORD_D];
}
use constants::INIT_STATE;

/// MD4 message digest
#[derive(Debug, Clone, Copy)]
pub struct Md4;

#[allow(non_snake_case)]
#[rustfmt::skip]
fn process_block(state: &mut [u32; 4], X: &[u32; BLOCK_WORDS]) {
    let [mut a, mut b, mut c, mut d] = *state;

    // F(X,Y,Z) = XY v not(X) Z
    macro_rules! F {
        ($x:ident, $y:ident, $z:ident) => {
            ($x & $y) | (!$x & $z)
        };
    }

    // G(X,Y,Z) = XY v XZ v YZ
    macro_rules! G {
        ($x:ident, $y:ident, $z:ident) => {
            ($x & $y) | ($x & $z) | ($y & $z)
        };
    }

    // H(X,Y,Z) = X xor Y xor Z
    macro_rules! H {
        ($x:ident, $y:ident, $z:ident) => {
            $x ^ $y ^ $z
        };
    }

    /* Round 1: a = (a + F(b,c,d) + X[k]) <<< s */
    macro_rules! r1 {
        ($a:ident $b:ident $c:ident $d:ident $k:literal $s:literal) => {
            $a = $a.wrapping_add(F!($b, $c, $d)).wrapping_add(X[$k]).rotate_left($s);
        };
    }

    r1!(a b c d  0  3); r1!(d a b c  1  7); r1!(c d a b  2 11); r1!(b c d a  3 19);
    r1!(a b c d  4  3); r1!(d a b c  5  7); r1!(c d a b  6 11); r1!(b c d a  7 19);
    r1!(a b c d  8  3); r1!(d a b c  9  7); r1!(c d a b 10 11); r1!(b c d a 11 19);
    r1!(a b c d 12  3); r1!(d a b c 13  7); r1!(c d a b 14 11); r1!(b c d a 15 19);

    /* Round 2: a = (a + G(b,c,d) + X[k] + 5A827999) <<< s */
    macro_rules! r2 {
        ($a:ident $b:ident $c:ident $d:ident $k:literal $s:literal) => {
            $a = $a
                .wrapping_add(G!($b, $c, $d))
                .wrapping_add(X[$k])
                .wrapping_add(0x5A82_7999)
                .rotate_left($s);
        };
    }

    r2!(a b c d  0  3); r2!(d a b c  4  5); r2!(c d a b  8  9); r2!(b c d a 12 13);
    r2!(a b c d  1  3); r2!(d a b c  5  5); r2!(c d a b  9  9); r2!(b c d a 13 13);
    r2!(a b c d  2  3); r2!(d a b c  6  5); r2!(c d a b 10  9); r2!(b c d a 14 13);
    r2!(a b c d  3  3); r2!(d a b c  7  5); r2!(c d a b 11  9); r2!(b c d a 15 13);

    /* Round 3: a = (a + H(b,c,d) + X[k] + 6ED9EBA1) <<< s */
    macro_rules! r3 {
        ($a:ident $b:ident $c:ident $d:ident $k:literal $s:literal) => {
            $a = $a
                .wrapping_add(H!($b, $c, $d))
                .wrapping_add(X[$k])
                .wrapping_add(0x6ED9_EBA1)
                .rotate_left($s);
        };
    }

    r3!(a b c d  0  3); r3!(d a b c  8  9); r3!(c d a b  4 11); r3!(b c d a 12 15);
    r3!(a b c d  2  3); r3!(d a b c 10  9); r3!(c d a b  6 11); r3!(b c d a 14 15);
    r3!(a b c d  1  3); r3!(d a b c  9  9); r3!(c d a b  5 11); r3!(b c d a 13 15);
    r3!(a b c d  3  3); r3!(d a b c 11  9); r3!(c d a b  7 11); r3!(b c d a 15 15);

    /* Increment each register by the value it had before this block. */
    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
}

impl HashAlgorithm for Md4 {
    const ALGORITHM: Algorithm = Algorithm::Md4;

    fn digest(message: &[u8]) -> Vec<u8> {
        let mut state = INIT_STATE;
        for block in pad_words(message).blocks() {
            process_block(&mut state, &block);
        }
        serialize_registers(&state, RegisterOrder::LittleEndian)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // test vectors from https://www.rfc-editor.org/rfc/rfc1320
    #[test]
    fn test_md4_rfc_vectors() {
        let test_vectors = [
            ("", "31d6cfe0d16ae931b73c59d7e0c089c0"),
            ("a", "bde52cb31de33e46245e05fbdbd6fb24"),
            ("abc", "a448017aaf21d8525fc10ae87aa6729d"),
            ("message digest", "d9130a8164549fe818874806e1c7014b"),
            (
                "abcdefghijklmnopqrstuvwxyz",
                "d79e1c308aa5bbcdeea8ed63df412da9",
            ),
            (
                "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789",
                "043f8582f241db351ce627e153e7f0e4",
            ),
            (
                "12345678901234567890123456789012345678901234567890123456789012345678901234567890",
                "e33b4ddc9c38f2199c3e7b164fcc0536",
            ),
        ];
        for (test, correct) in test_vectors {
            assert_eq!(hex::encode(Md4::digest(test.as_bytes())), correct, "{test:?}");
        }
    }

    #[test]
    fn test_md4_initial_state_is_rfc_words() {
        assert_eq!(INIT_STATE, [0x6745_2301, 0xefcd_ab89, 0x98ba_dcfe, 0x1032_5476]);
    }
}
