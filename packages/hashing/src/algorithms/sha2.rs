//! SHA-224 and SHA-256 as per FIPS 180-4: https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.180-4.pdf

use crate::algorithm::{Algorithm, HashAlgorithm};
use crate::format::{RegisterOrder, serialize_registers};
use crate::padding::{BLOCK_WORDS, pad_words};

use super::{Ch, Maj};

#[rustfmt::skip]
const K: [u32; 64] = [
    0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
    0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
    0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
    0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
    0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13, 0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
    0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
    0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
    0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];

const SHA224_INIT: [u32; 8] = [
    0xc1059ed8, 0x367cd507, 0x3070dd17, 0xf70e5939, 0xffc00b31, 0x68581511, 0x64f98fa7, 0xbefa4fa4,
];

const SHA256_INIT: [u32; 8] = [
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

const ROUNDS: usize = 64;

const fn big_sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

const fn big_sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

const fn sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

const fn sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

#[allow(non_snake_case)]
fn process_block(state: &mut [u32; 8], block: &[u32; BLOCK_WORDS]) {
    let mut W = [0u32; ROUNDS];
    W[..BLOCK_WORDS].copy_from_slice(block);
    for t in BLOCK_WORDS..ROUNDS {
        W[t] = sigma1(W[t - 2])
            .wrapping_add(W[t - 7])
            .wrapping_add(sigma0(W[t - 15]))
            .wrapping_add(W[t - 16]);
    }

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    for t in 0..ROUNDS {
        let T1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(Ch!(e, f, g))
            .wrapping_add(K[t])
            .wrapping_add(W[t]);
        let T2 = big_sigma0(a).wrapping_add(Maj!(a, b, c));
        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(T1);
        d = c;
        c = b;
        b = a;
        a = T1.wrapping_add(T2);
    }

    for (register, working) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
        *register = register.wrapping_add(working);
    }
}

fn sha256_family(message: &[u8], init: [u32; 8], output_words: usize) -> Vec<u8> {
    let mut state = init;
    for block in pad_words(message).into_big_endian().blocks() {
        process_block(&mut state, &block);
    }
    serialize_registers(&state[..output_words], RegisterOrder::BigEndian)
}

/// SHA-224 message digest
#[derive(Debug, Clone, Copy)]
pub struct Sha224;

impl HashAlgorithm for Sha224 {
    const ALGORITHM: Algorithm = Algorithm::Sha224;

    fn digest(message: &[u8]) -> Vec<u8> {
        sha256_family(message, SHA224_INIT, 7)
    }
}

/// SHA-256 message digest
#[derive(Debug, Clone, Copy)]
pub struct Sha256;

impl HashAlgorithm for Sha256 {
    const ALGORITHM: Algorithm = Algorithm::Sha256;

    fn digest(message: &[u8]) -> Vec<u8> {
        sha256_family(message, SHA256_INIT, 8)
    }
}
