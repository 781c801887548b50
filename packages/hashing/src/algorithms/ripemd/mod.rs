//! The RIPEMD family: https://homes.esat.kuleuven.be/~bosselae/ripemd160.html
//!
//! Every variant runs two independent lines over each block. The 128 and 256
//! bit variants use four-register lines of four rounds, the 160 and 320 bit
//! variants five-register lines of five rounds. The double-width variants
//! trade one register between the lines after every round instead of mixing
//! them at the end.

mod rmd128;
mod rmd160;
mod rmd256;
mod rmd320;

pub use rmd128::Ripemd128;
pub use rmd160::Ripemd160;
pub use rmd256::Ripemd256;
pub use rmd320::Ripemd320;

use crate::padding::BLOCK_WORDS;

const STEPS_PER_ROUND: usize = 16;

const IV: [u32; 5] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0];

/// Second set of chaining values for the double-width variants
const IV_WIDE: [u32; 5] = [0x76543210, 0xfedcba98, 0x89abcdef, 0x01234567, 0x3c2d1e0f];

#[rustfmt::skip]
const WORDS_LEFT: [usize; 80] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15,
    7, 4, 13, 1, 10, 6, 15, 3, 12, 0, 9, 5, 2, 14, 11, 8,
    3, 10, 14, 4, 9, 15, 8, 1, 2, 7, 0, 6, 13, 11, 5, 12,
    1, 9, 11, 10, 0, 8, 12, 4, 13, 3, 7, 15, 14, 5, 6, 2,
    4, 0, 5, 9, 7, 12, 2, 10, 14, 1, 3, 8, 11, 6, 15, 13,
];

#[rustfmt::skip]
const WORDS_RIGHT: [usize; 80] = [
    5, 14, 7, 0, 9, 2, 11, 4, 13, 6, 15, 8, 1, 10, 3, 12,
    6, 11, 3, 7, 0, 13, 5, 10, 14, 15, 8, 12, 4, 9, 1, 2,
    15, 5, 1, 3, 7, 14, 6, 9, 11, 8, 12, 2, 10, 0, 4, 13,
    8, 6, 4, 1, 3, 11, 15, 0, 5, 12, 2, 13, 9, 7, 10, 14,
    12, 15, 10, 4, 1, 5, 8, 7, 6, 2, 13, 14, 0, 3, 9, 11,
];

#[rustfmt::skip]
const SHIFTS_LEFT: [u32; 80] = [
    11, 14, 15, 12, 5, 8, 7, 9, 11, 13, 14, 15, 6, 7, 9, 8,
    7, 6, 8, 13, 11, 9, 7, 15, 7, 12, 15, 9, 11, 7, 13, 12,
    11, 13, 6, 7, 14, 9, 13, 15, 14, 8, 13, 6, 5, 12, 7, 5,
    11, 12, 14, 15, 14, 15, 9, 8, 9, 14, 5, 6, 8, 6, 5, 12,
    9, 15, 5, 11, 6, 8, 13, 12, 5, 12, 13, 14, 11, 8, 5, 6,
];

#[rustfmt::skip]
const SHIFTS_RIGHT: [u32; 80] = [
    8, 9, 9, 11, 13, 15, 15, 5, 7, 7, 8, 11, 14, 14, 12, 6,
    9, 13, 15, 7, 12, 8, 9, 11, 7, 7, 12, 7, 6, 15, 13, 11,
    9, 7, 15, 11, 8, 6, 6, 14, 12, 13, 5, 14, 13, 13, 7, 5,
    15, 5, 8, 11, 14, 14, 6, 14, 6, 9, 12, 9, 12, 5, 15, 8,
    8, 5, 12, 9, 12, 5, 14, 6, 8, 13, 6, 5, 15, 13, 11, 11,
];

type BoolFn = fn(u32, u32, u32) -> u32;

fn f1(x: u32, y: u32, z: u32) -> u32 {
    x ^ y ^ z
}

fn f2(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (!x & z)
}

fn f3(x: u32, y: u32, z: u32) -> u32 {
    (x | !y) ^ z
}

fn f4(x: u32, y: u32, z: u32) -> u32 {
    (x & z) | (y & !z)
}

fn f5(x: u32, y: u32, z: u32) -> u32 {
    x ^ (y | !z)
}

/// Everything that distinguishes one line from another
struct Line {
    words: &'static [usize; 80],
    shifts: &'static [u32; 80],
    functions: [BoolFn; 5],
    constants: [u32; 5],
}

const LEFT: Line = Line {
    words: &WORDS_LEFT,
    shifts: &SHIFTS_LEFT,
    functions: [f1, f2, f3, f4, f5],
    constants: [0x00000000, 0x5a827999, 0x6ed9eba1, 0x8f1bbcdc, 0xa953fd4e],
};

/// Right line of the four-round variants
const RIGHT_SHORT: Line = Line {
    words: &WORDS_RIGHT,
    shifts: &SHIFTS_RIGHT,
    functions: [f4, f3, f2, f1, f1],
    constants: [0x50a28be6, 0x5c4dd124, 0x6d703ef3, 0x00000000, 0x00000000],
};

/// Right line of the five-round variants
const RIGHT_LONG: Line = Line {
    words: &WORDS_RIGHT,
    shifts: &SHIFTS_RIGHT,
    functions: [f5, f4, f3, f2, f1],
    constants: [0x50a28be6, 0x5c4dd124, 0x6d703ef3, 0x7a6d76e9, 0x00000000],
};

/// One round of sixteen steps on a four-register line
fn round4(regs: &mut [u32; 4], x: &[u32; BLOCK_WORDS], line: &Line, round: usize) {
    let f = line.functions[round];
    let k = line.constants[round];
    let [mut a, mut b, mut c, mut d] = *regs;

    for j in round * STEPS_PER_ROUND..(round + 1) * STEPS_PER_ROUND {
        let t = a
            .wrapping_add(f(b, c, d))
            .wrapping_add(x[line.words[j]])
            .wrapping_add(k)
            .rotate_left(line.shifts[j]);
        a = d;
        d = c;
        c = b;
        b = t;
    }

    *regs = [a, b, c, d];
}

/// One round of sixteen steps on a five-register line
fn round5(regs: &mut [u32; 5], x: &[u32; BLOCK_WORDS], line: &Line, round: usize) {
    let f = line.functions[round];
    let k = line.constants[round];
    let [mut a, mut b, mut c, mut d, mut e] = *regs;

    for j in round * STEPS_PER_ROUND..(round + 1) * STEPS_PER_ROUND {
        let t = a
            .wrapping_add(f(b, c, d))
            .wrapping_add(x[line.words[j]])
            .wrapping_add(k)
            .rotate_left(line.shifts[j])
            .wrapping_add(e);
        a = e;
        e = d;
        d = c.rotate_left(10);
        c = b;
        b = t;
    }

    *regs = [a, b, c, d, e];
}
