//! Word block processors, one module per algorithm family

mod checksum;
pub(crate) mod md2;
mod md4;
mod md5;
mod ripemd;
mod sha1;
mod sha2;
mod sha512;

pub use checksum::{Adler32, Fnv1_32};
pub use md2::Md2;
pub use md4::Md4;
pub use md5::Md5;
pub use ripemd::{Ripemd128, Ripemd160, Ripemd256, Ripemd320};
pub use sha1::Sha1;
pub use sha2::{Sha224, Sha256};
pub use sha512::{Sha384, Sha512};

// Logical functions shared by the SHA family, FIPS 180-4 section 4.1

/// Ch(x, y, z) = (x ∧ y) ⊕ (¬x ∧ z)
macro_rules! Ch {
    ($x:expr, $y:expr, $z:expr) => {
        ($x & $y) ^ (!$x & $z)
    };
}

/// Maj(x, y, z) = (x ∧ y) ⊕ (x ∧ z) ⊕ (y ∧ z)
macro_rules! Maj {
    ($x:expr, $y:expr, $z:expr) => {
        ($x & $y) ^ ($x & $z) ^ ($y & $z)
    };
}

/// Parity(x, y, z) = x ⊕ y ⊕ z
macro_rules! Parity {
    ($x:expr, $y:expr, $z:expr) => {
        $x ^ $y ^ $z
    };
}

pub(crate) use Ch;
pub(crate) use Maj;
pub(crate) use Parity;
