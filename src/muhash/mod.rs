//! Rolling multiset hash with order-independent updates.
//!
//! [`MuHash3072`] maintains a running fingerprint of a multiset of byte
//! strings as a single group element modulo the 3072-bit prime. Elements
//! are mapped to group elements by expanding a 32-byte fingerprint with a
//! ChaCha20 keystream; insertion multiplies the element into the
//! accumulator and deletion multiplies its inverse, so any interleaving of
//! the same updates finalises to the same digest.
//!
//! The group law is commutative and associative, which makes the
//! accumulator parallel-friendly: disjoint subsets can be hashed into
//! independent accumulators and combined afterwards with a single
//! multiplication.
//!
//! Deletion pays for an eager modular inversion. Keeping the state as a
//! numerator/denominator pair would defer that cost to finalisation;
//! TODO: evaluate the fraction representation once deletion shows up in
//! profiles.

use core::fmt;
use core::ops::{DivAssign, MulAssign};

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};

use crate::num3072::{self, Num3072};


/// Byte length of the seeds accepted by [`MuHash3072::from_seed`].
pub const SEED_SIZE: usize = 32;

/// Byte length of a finalised digest.
pub const DIGEST_SIZE: usize = num3072::BYTE_SIZE;

/// Incremental multiset hash over the units modulo `2^3072 - 1103717`.
///
/// The accumulator does not track membership: removing an element that was
/// never inserted simply multiplies in an inverse, and inserting it later
/// cancels out. Callers that need set semantics must enforce them.
#[derive(Clone)]
pub struct MuHash3072 {
    data: Num3072,
}

impl MuHash3072 {
    /// Returns the accumulator of the empty multiset.
    pub fn new() -> Self {
        Self {
            data: Num3072::one(),
        }
    }

    /// Returns the accumulator holding the single element named by `seed`.
    ///
    /// The seed is expanded to a uniform 3072-bit group element with a
    /// ChaCha20 keystream (seed as key, zero stream, counter starting at
    /// zero). The value is not reduced on construction: the odds of landing
    /// in the overflow window are about `2^-3051`, and finalisation handles
    /// the window.
    pub fn from_seed(seed: &[u8; SEED_SIZE]) -> Self {
        Self {
            data: element_from_seed(seed),
        }
    }

    /// Inserts an arbitrary byte string into the multiset.
    ///
    /// The element is reduced to a 32-byte fingerprint with SHA-256 before
    /// keystream expansion, so arbitrary-length data is supported.
    pub fn insert(&mut self, data: &[u8]) {
        let element = element_from_data(data);
        self.data.multiply(&element);
    }

    /// Removes an arbitrary byte string from the multiset.
    ///
    /// Inverse of [`insert`](MuHash3072::insert) for the same bytes.
    pub fn remove(&mut self, data: &[u8]) {
        let element = element_from_data(data).inverse();
        self.data.multiply(&element);
    }

    /// Produces the canonical 384-byte digest of the current multiset.
    ///
    /// Non-destructive: the accumulator keeps its value and can continue
    /// receiving updates. The digest is the little-endian encoding of the
    /// canonical representative, identical across limb backends.
    pub fn finalize(&self) -> [u8; DIGEST_SIZE] {
        let mut value = self.data;
        if value.is_overflow() {
            value.full_reduce();
        }
        value.to_le_bytes()
    }

    /// Restores an accumulator from a finalised digest.
    ///
    /// Rejects encodings of values at or above the modulus; finalised
    /// digests are always canonical, so such bytes were never produced by
    /// [`finalize`](MuHash3072::finalize).
    pub fn from_digest(digest: &[u8; DIGEST_SIZE]) -> Result<Self, DigestDecodeError> {
        let value = Num3072::from_le_bytes(digest);
        if value.is_overflow() {
            return Err(DigestDecodeError);
        }
        Ok(Self { data: value })
    }
}

impl Default for MuHash3072 {
    fn default() -> Self {
        Self::new()
    }
}

/// Union of multisets: the digest of `self` afterwards covers every element
/// counted by either accumulator.
impl MulAssign<&MuHash3072> for MuHash3072 {
    fn mul_assign(&mut self, rhs: &MuHash3072) {
        self.data.multiply(&rhs.data);
    }
}

/// Difference of multisets: inverts the operand and multiplies it in; the
/// accumulator itself is never inverted.
///
/// An operand holding the value zero is outside the group; dividing by it
/// silently degenerates the accumulator to zero.
impl DivAssign<&MuHash3072> for MuHash3072 {
    fn div_assign(&mut self, rhs: &MuHash3072) {
        let inverse = rhs.data.inverse();
        self.data.multiply(&inverse);
    }
}

impl fmt::Debug for MuHash3072 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digest = self.finalize();
        let prefix: String = digest[..8].iter().map(|byte| format!("{byte:02x}")).collect();
        write!(f, "MuHash3072({prefix}..)")
    }
}

impl Serialize for MuHash3072 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_bytes(&self.finalize())
    }
}

impl<'de> Deserialize<'de> for MuHash3072 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DigestVisitor;

        impl<'de> Visitor<'de> for DigestVisitor {
            type Value = MuHash3072;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a {DIGEST_SIZE}-byte canonical muhash digest")
            }

            fn visit_bytes<E>(self, value: &[u8]) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                if value.len() != DIGEST_SIZE {
                    return Err(E::invalid_length(value.len(), &self));
                }
                let mut digest = [0u8; DIGEST_SIZE];
                digest.copy_from_slice(value);
                MuHash3072::from_digest(&digest).map_err(E::custom)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut digest = [0u8; DIGEST_SIZE];
                for (index, slot) in digest.iter_mut().enumerate() {
                    *slot = seq
                        .next_element()?
                        .ok_or_else(|| de::Error::invalid_length(index, &self))?;
                }
                if seq.next_element::<u8>()?.is_some() {
                    return Err(de::Error::invalid_length(DIGEST_SIZE + 1, &self));
                }
                MuHash3072::from_digest(&digest).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_bytes(DigestVisitor)
    }
}

/// Error returned when digest bytes encode a value outside `[0, P)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigestDecodeError;

impl fmt::Display for DigestDecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "digest encodes a value outside the canonical range")
    }
}

impl std::error::Error for DigestDecodeError {}

/// Expands a 32-byte seed into a uniform 3072-bit group element.
fn element_from_seed(seed: &[u8; SEED_SIZE]) -> Num3072 {
    let mut stream = ChaCha20Rng::from_seed(*seed);
    let mut bytes = [0u8; DIGEST_SIZE];
    stream.fill_bytes(&mut bytes);
    Num3072::from_le_bytes(&bytes)
}

/// Fingerprints arbitrary data and expands it into a group element.
fn element_from_data(data: &[u8]) -> Num3072 {
    let fingerprint: [u8; SEED_SIZE] = Sha256::digest(data).into();
    element_from_seed(&fingerprint)
}
