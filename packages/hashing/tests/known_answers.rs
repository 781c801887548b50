//! Published test vectors through the public façade

use hex_literal::hex;
use mdkit_hashing::{Algorithm, Hash};

const DIGITS: &str =
    "12345678901234567890123456789012345678901234567890123456789012345678901234567890";
const ALNUM: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
const SHA_TWO_BLOCKS: &str = "abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";

fn check(tag: &str, vectors: &[(&str, &str)]) {
    for (message, expected) in vectors {
        assert_eq!(
            Hash::digest(tag, message).expect("known tag"),
            *expected,
            "{tag}({message:?})"
        );
    }
}

#[test]
fn md2_vectors() {
    check(
        "md2",
        &[
            ("", "8350e5a3e24c153df2275c9f80692773"),
            ("abc", "da853b0d3f88d99b30283a69e6ded6bb"),
            ("message digest", "ab4f496bfb2a530b219ff33031fe06b0"),
            (DIGITS, "d5976f79d83d3a0dc9806c3c66f3efd8"),
        ],
    );
}

#[test]
fn md4_vectors() {
    check(
        "md4",
        &[
            ("", "31d6cfe0d16ae931b73c59d7e0c089c0"),
            ("abc", "a448017aaf21d8525fc10ae87aa6729d"),
            (ALNUM, "043f8582f241db351ce627e153e7f0e4"),
            (DIGITS, "e33b4ddc9c38f2199c3e7b164fcc0536"),
        ],
    );
}

#[test]
fn md5_vectors() {
    check(
        "md5",
        &[
            ("", "d41d8cd98f00b204e9800998ecf8427e"),
            ("abc", "900150983cd24fb0d6963f7d28e17f72"),
            (DIGITS, "57edf4a22be3c955ac49da2e2107b67a"),
        ],
    );
}

#[test]
fn sha1_vectors() {
    check(
        "sha1",
        &[
            ("", "da39a3ee5e6b4b0d3255bfef95601890afd80709"),
            ("abc", "a9993e364706816aba3e25717850c26c9cd0d89d"),
            (SHA_TWO_BLOCKS, "84983e441c3bd26ebaae4aa1f95129e5e54670f1"),
        ],
    );
}

#[test]
fn sha224_vectors() {
    check(
        "sha224",
        &[
            ("", "d14a028c2a3a2bc9476102bb288234c415a2b01f828ea62ac5b3e42f"),
            ("abc", "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7"),
            (
                SHA_TWO_BLOCKS,
                "75388b16512776cc5dba5da1fd890150b0c6455cb4f58b1952522525",
            ),
        ],
    );
}

#[test]
fn sha256_vectors() {
    check(
        "sha256",
        &[
            (
                "abc",
                "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
            ),
            (
                SHA_TWO_BLOCKS,
                "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
            ),
        ],
    );
}

#[test]
fn sha384_and_sha512_empty() {
    assert_eq!(
        Hash::sha384(""),
        "38b060a751ac96384cd9327eb1b1e36a21fdb71114be07434c0cc7bf63f6e1da274edebfe76f65fbd51ad2f14898b95b"
    );
    assert_eq!(
        Hash::sha512("abc"),
        "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
    );
}

#[test]
fn ripemd_vectors() {
    check(
        "ripemd128",
        &[
            ("", "cdf26213a150dc3ecb610f18f6b38b46"),
            ("abc", "c14a12199c66e4ba84636b0f69144c77"),
            (DIGITS, "3f45ef194732c2dbb2c4a2c769795fa3"),
        ],
    );
    check(
        "ripemd160",
        &[
            ("", "9c1185a5c5e9fc54612808977ee8f548b2258d31"),
            ("abc", "8eb208f7e05d987a9b044a8e98c6b087f15a0bfc"),
            (DIGITS, "9b752e45573d4b39f4dbd3323cab82bf63326bfb"),
        ],
    );
    check(
        "ripemd256",
        &[
            (
                "",
                "02ba4c4e5f8ecd1877fc52d64d30e37a2d9774fb1e5d026380ae0168e3c5522d",
            ),
            (
                DIGITS,
                "06fdcc7a409548aaf91368c06a6275b553e3f099bf0ea4edfd6778df89a890dd",
            ),
        ],
    );
    check(
        "ripemd320",
        &[
            (
                "",
                "22d65d5661536cdc75c1fdf5c6de7b41b9f27325ebc61e8557177d705a0ec880151c3a32a00899b8",
            ),
            (
                "abc",
                "de4c01b3054f8930a79d09ae738e92301e5a17085beffdc1b8d116713e74f82fa942d64cdbc4682d",
            ),
            (
                "abcdefghijklmnopqrstuvwxyz",
                "cabdb1810b92470a2093aa6bce05952c28348cf43ff60841975166bb40ed234004b8824463e6b009",
            ),
            (
                SHA_TWO_BLOCKS,
                "d034a7950cf722021ba4b84df769a5de2060e259df4c9bb4a4268c0e935bbc7470a969c9d072a1ac",
            ),
            (
                DIGITS,
                "557888af5f6d8ed62ab66945c6d2a0a47ecd5341e915eb8fea1d0524955f825dc717e4a008ab2d42",
            ),
        ],
    );
}

#[test]
fn checksum_vectors() {
    check("adler32", &[("", "00000001"), ("Wikipedia", "11e60398")]);
    check("fnv1_32", &[("", "811c9dc5"), ("foobar", "31f0b262")]);
}

#[test]
fn raw_bytes_match_hex() {
    let digest = mdkit_hashing::ripemd160_hash(b"abc");
    assert_eq!(digest.algorithm(), Algorithm::Ripemd160);
    assert_eq!(
        digest.as_bytes(),
        hex!("8eb208f7e05d987a9b044a8e98c6b087f15a0bfc")
    );
    assert_eq!(
        mdkit_hashing::sha1_hash(b"abc").as_bytes(),
        hex!("a9993e364706816aba3e25717850c26c9cd0d89d")
    );
    assert_eq!(mdkit_hashing::fnv1_32_hash(b"a").as_bytes(), hex!("050c5d7e"));
}

#[test]
fn base64_output() {
    assert_eq!(
        mdkit_hashing::md5_hash(b"").to_base64(),
        "1B2M2Y8AsgTpgAmY7PhCfg=="
    );
}
