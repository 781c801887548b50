//! SHA-1 as per FIPS 180-4: https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.180-4.pdf

use crate::algorithm::{Algorithm, HashAlgorithm};
use crate::format::{RegisterOrder, serialize_registers};
use crate::padding::{BLOCK_WORDS, pad_words};

use super::{Ch, Maj, Parity};

const H0: u32 = 0x67452301;
const H1: u32 = 0xEFCDAB89;
const H2: u32 = 0x98BADCFE;
const H3: u32 = 0x10325476;
const H4: u32 = 0xC3D2E1F0;

const INIT_STATE: [u32; 5] = [H0, H1, H2, H3, H4];

const ROUNDS: usize = 80;

const K: [u32; 4] = [0x5A827999, 0x6ED9EBA1, 0x8F1BBCDC, 0xCA62C1D6];

/// SHA-1 message digest
#[derive(Debug, Clone, Copy)]
pub struct Sha1;

#[allow(non_snake_case)]
fn process_block(state: &mut [u32; 5], block: &[u32; BLOCK_WORDS]) {
    // The message schedule
    let mut W = [0u32; ROUNDS];
    W[..BLOCK_WORDS].copy_from_slice(block);

    // Expand the message into the rest of the schedule
    for t in BLOCK_WORDS..ROUNDS {
        W[t] = (W[t - 3] ^ W[t - 8] ^ W[t - 14] ^ W[t - 16]).rotate_left(1);
    }

    // Working variables
    let [mut a, mut b, mut c, mut d, mut e] = *state;

    for (t, &w) in W.iter().enumerate() {
        let f = match t {
            0..=19 => Ch!(b, c, d),
            20..=39 => Parity!(b, c, d),
            40..=59 => Maj!(b, c, d),
            _ => Parity!(b, c, d),
        };
        let T = a
            .rotate_left(5)
            .wrapping_add(f)
            .wrapping_add(e)
            .wrapping_add(K[t / 20])
            .wrapping_add(w);
        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = T;
    }

    // Compute the intermediate hash values
    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
}

impl HashAlgorithm for Sha1 {
    const ALGORITHM: Algorithm = Algorithm::Sha1;

    fn digest(message: &[u8]) -> Vec<u8> {
        let mut state = INIT_STATE;
        for block in pad_words(message).into_big_endian().blocks() {
            process_block(&mut state, &block);
        }
        serialize_registers(&state, RegisterOrder::BigEndian)
    }
}
