//! Fixed-width 3072-bit integers with arithmetic modulo a near-Mersenne
//! prime.
//!
//! [`Num3072`] stores a non-negative integer below `2^3072` as a
//! little-endian limb array and provides the group arithmetic modulo
//! `P = 2^3072 - 1103717`: multiplication and squaring with a folded
//! double reduction, and a fixed-exponent multiplicative inverse. The
//! accumulator facade on top of this layer stays free of limb-level
//! concerns.

mod inverse;
mod limbs;
mod mul;


use limbs::{Accum2, LIMB_BYTES};
pub use limbs::{Limb, LIMBS, LIMB_BITS};

/// Total bit width of a [`Num3072`].
pub const BIT_SIZE: usize = 3072;

/// Byte length of the canonical little-endian encoding.
pub const BYTE_SIZE: usize = BIT_SIZE / 8;

/// Distance between `2^3072` and the modulus: `P = 2^3072 - PRIME_DIFF`
/// with `PRIME_DIFF = 1103717`, the smallest offset making `P` a safe
/// prime. The near-Mersenne shape is what keeps reduction to a handful of
/// single-limb multiplies.
pub const PRIME_DIFF: Limb = 1103717;

/// A non-negative integer in `[0, 2^3072)`, little-endian in limb order.
///
/// The value is *canonical* when it lies in `[0, P)`. [`multiply`] and
/// [`square`] keep canonical inputs canonical; only values loaded from
/// raw bytes can sit in the overflow window `[P, 2^3072)`, which
/// [`is_overflow`] detects and [`full_reduce`] collapses.
///
/// [`multiply`]: Num3072::multiply
/// [`square`]: Num3072::square
/// [`is_overflow`]: Num3072::is_overflow
/// [`full_reduce`]: Num3072::full_reduce
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Num3072 {
    limbs: [Limb; LIMBS],
}

impl Num3072 {
    /// Returns the multiplicative identity.
    pub fn one() -> Self {
        let mut limbs = [0; LIMBS];
        limbs[0] = 1;
        Self { limbs }
    }

    /// Constructs a value directly from raw limbs, least significant first.
    ///
    /// No reduction is performed; the result may lie in the overflow
    /// window. Intended for tests and benchmarks that need precise control
    /// over the internal representation.
    pub fn from_limbs(limbs: [Limb; LIMBS]) -> Self {
        Self { limbs }
    }

    /// Exposes the raw limbs, least significant first.
    pub fn limbs(&self) -> &[Limb; LIMBS] {
        &self.limbs
    }

    /// Decodes a little-endian byte string.
    ///
    /// The value is taken as-is; callers that require a canonical value
    /// must check [`is_overflow`](Num3072::is_overflow) themselves.
    pub fn from_le_bytes(bytes: &[u8; BYTE_SIZE]) -> Self {
        let mut limbs = [0; LIMBS];
        for (i, limb) in limbs.iter_mut().enumerate() {
            let mut word = [0u8; LIMB_BYTES];
            word.copy_from_slice(&bytes[i * LIMB_BYTES..(i + 1) * LIMB_BYTES]);
            *limb = Limb::from_le_bytes(word);
        }
        Self { limbs }
    }

    /// Encodes the value as a little-endian byte string.
    ///
    /// Both limb backends produce the identical byte sequence for the same
    /// integer, so the encoding is stable across builds.
    pub fn to_le_bytes(&self) -> [u8; BYTE_SIZE] {
        let mut bytes = [0u8; BYTE_SIZE];
        for (i, limb) in self.limbs.iter().enumerate() {
            bytes[i * LIMB_BYTES..(i + 1) * LIMB_BYTES].copy_from_slice(&limb.to_le_bytes());
        }
        bytes
    }

    /// Reports whether the value lies in the overflow window `[P, 2^3072)`.
    ///
    /// Exactly the values `P + k` for `k < PRIME_DIFF` have every upper
    /// limb saturated and the low limb within `PRIME_DIFF` of the limb
    /// maximum.
    pub fn is_overflow(&self) -> bool {
        if self.limbs[0] <= Limb::MAX - PRIME_DIFF {
            return false;
        }
        self.limbs[1..].iter().all(|&limb| limb == Limb::MAX)
    }

    /// Subtracts `P` once by adding `PRIME_DIFF` and dropping the carry out
    /// of the top limb.
    ///
    /// Must only be invoked when [`is_overflow`](Num3072::is_overflow)
    /// holds, or immediately after a multiply or square whose final carry
    /// bit was set; on other values it changes the residue class.
    pub fn full_reduce(&mut self) {
        let mut acc = Accum2 {
            c0: PRIME_DIFF,
            c1: 0,
        };
        for limb in self.limbs.iter_mut() {
            acc.add(*limb);
            *limb = acc.shift_out();
        }
    }
}
