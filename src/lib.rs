#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

//! Incremental multiset hashing over a 3072-bit prime group.
//!
//! The crate maintains a running fingerprint of a multiset of byte
//! strings that can be updated in any order. Inserting an element
//! multiplies a per-element group element into an accumulator and deleting
//! divides it out; finalisation emits a fixed 384-byte digest that depends
//! only on the multiset. The group is the units modulo the safe prime
//! `P = 2^3072 - 1103717`, whose near-Mersenne shape keeps modular
//! reduction to a few single-limb multiplies.
//!
//! Two layers are exposed:
//!
//! - [`num3072`]: the fixed-width arithmetic core, with limb-level
//!   multiplication and squaring under a folded reduction and a
//!   fixed-exponent modular inverse.
//! - [`MuHash3072`]: the accumulator facade covering identity and seeded
//!   construction, multiplicative and divisive updates, element
//!   insert/remove over arbitrary bytes, and canonical finalisation.
//!
//! A typical use is summarising a large, mutating set (for example the
//! unspent-output set of a ledger) so that independently maintained copies
//! can cheaply compare digests:
//!
//! ```
//! use muhash3072::MuHash3072;
//!
//! let mut set = MuHash3072::new();
//! set.insert(b"alpha");
//! set.insert(b"beta");
//! set.remove(b"alpha");
//!
//! let mut beta_only = MuHash3072::new();
//! beta_only.insert(b"beta");
//! assert_eq!(set.finalize(), beta_only.finalize());
//! ```

pub mod muhash;
pub mod num3072;

pub use muhash::{DigestDecodeError, MuHash3072, DIGEST_SIZE, SEED_SIZE};
pub use num3072::Num3072;
