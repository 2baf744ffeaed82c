//! Carry-accumulator primitives for the schoolbook passes.
//!
//! The limb width and the existence of a double-width product appear only
//! here. The multiply, square and reduction routines in the rest of the
//! module are expressed entirely in terms of the two accumulators below, so
//! switching between the wide and narrow backends never touches them.

#[cfg(all(target_pointer_width = "64", not(feature = "u32-backend")))]
mod backend {
    /// Machine word holding one limb of the 3072-bit value.
    pub type Limb = u64;
    /// Intermediate wide enough for a full limb-by-limb product.
    pub type DoubleLimb = u128;
    /// Number of limbs in a 3072-bit value.
    pub const LIMBS: usize = 48;
    /// Bit width of a single limb.
    pub const LIMB_BITS: usize = 64;
}

#[cfg(any(not(target_pointer_width = "64"), feature = "u32-backend"))]
mod backend {
    /// Machine word holding one limb of the 3072-bit value.
    pub type Limb = u32;
    /// Intermediate wide enough for a full limb-by-limb product.
    pub type DoubleLimb = u64;
    /// Number of limbs in a 3072-bit value.
    pub const LIMBS: usize = 96;
    /// Bit width of a single limb.
    pub const LIMB_BITS: usize = 32;
}

use backend::DoubleLimb;
pub use backend::{Limb, LIMBS, LIMB_BITS};

/// Byte length of a single limb in the canonical encoding.
pub(crate) const LIMB_BYTES: usize = LIMB_BITS / 8;

// Layout sanity checks.
const _: () = assert!(LIMB_BITS * LIMBS == 3072);
const _: () = assert!(core::mem::size_of::<DoubleLimb>() == 2 * core::mem::size_of::<Limb>());

/// Three-limb carry accumulator `[c0, c1, c2]`, least significant first.
///
/// Collects one output column of a schoolbook product together with the
/// carries spilling into the next two columns.
#[derive(Clone, Copy, Default)]
pub(crate) struct Accum3 {
    pub(crate) c0: Limb,
    pub(crate) c1: Limb,
    pub(crate) c2: Limb,
}

impl Accum3 {
    /// Adds `a * b` to the accumulator.
    #[inline(always)]
    pub(crate) fn add_product(&mut self, a: Limb, b: Limb) {
        let product = DoubleLimb::from(a) * DoubleLimb::from(b);
        let low = product as Limb;
        let high = (product >> LIMB_BITS) as Limb;

        let (c0, carry) = self.c0.overflowing_add(low);
        self.c0 = c0;
        // The high word of a limb product is at most 2^w - 2, so absorbing
        // the carry cannot overflow it.
        let high = high + Limb::from(carry);
        let (c1, carry) = self.c1.overflowing_add(high);
        self.c1 = c1;
        self.c2 = self.c2.wrapping_add(Limb::from(carry));
    }

    /// Adds `2 * a * b` to the accumulator.
    ///
    /// Used by the squaring pass to fold the symmetric cross products
    /// `a[i] * a[k]` and `a[k] * a[i]` with a single limb multiply.
    #[inline(always)]
    pub(crate) fn add_double_product(&mut self, a: Limb, b: Limb) {
        let product = DoubleLimb::from(a) * DoubleLimb::from(b);
        let low = product as Limb;
        let mut high = (product >> LIMB_BITS) as Limb;

        let (c0, carry) = self.c0.overflowing_add(low);
        self.c0 = c0;
        let first_high = high + Limb::from(carry);
        let (c1, carry) = self.c1.overflowing_add(first_high);
        self.c1 = c1;
        self.c2 = self.c2.wrapping_add(Limb::from(carry));

        let (c0, carry) = self.c0.overflowing_add(low);
        self.c0 = c0;
        high += Limb::from(carry);
        let (c1, carry) = self.c1.overflowing_add(high);
        self.c1 = c1;
        self.c2 = self.c2.wrapping_add(Limb::from(carry));
    }

    /// Adds `other * n` to the accumulator, where `n` is a single limb.
    ///
    /// The top limb must be clear on entry; `other.c2 * n` lands there
    /// without further carry propagation.
    #[inline(always)]
    pub(crate) fn add_scaled(&mut self, other: &Accum3, n: Limb) {
        debug_assert!(self.c2 == 0);
        let mut t = DoubleLimb::from(other.c0) * DoubleLimb::from(n) + DoubleLimb::from(self.c0);
        self.c0 = t as Limb;
        t >>= LIMB_BITS;
        t += DoubleLimb::from(other.c1) * DoubleLimb::from(n) + DoubleLimb::from(self.c1);
        self.c1 = t as Limb;
        t >>= LIMB_BITS;
        self.c2 = (t as Limb).wrapping_add(other.c2.wrapping_mul(n));
    }

    /// Shifts the accumulator right by one limb, returning the limb
    /// shifted out.
    #[inline(always)]
    pub(crate) fn shift_out(&mut self) -> Limb {
        let low = self.c0;
        self.c0 = self.c1;
        self.c1 = self.c2;
        self.c2 = 0;
        low
    }

    /// Narrows to the two-limb accumulator once the top limb is exhausted.
    #[inline(always)]
    pub(crate) fn into_pair(self) -> Accum2 {
        debug_assert!(self.c2 == 0);
        Accum2 {
            c0: self.c0,
            c1: self.c1,
        }
    }
}

/// Two-limb carry accumulator `[c0, c1]` for the final reduction pass.
#[derive(Clone, Copy, Default)]
pub(crate) struct Accum2 {
    pub(crate) c0: Limb,
    pub(crate) c1: Limb,
}

impl Accum2 {
    /// Multiplies the accumulator by a single limb in place.
    #[inline(always)]
    pub(crate) fn scale(&mut self, n: Limb) {
        let mut t = DoubleLimb::from(self.c0) * DoubleLimb::from(n);
        self.c0 = t as Limb;
        t >>= LIMB_BITS;
        t += DoubleLimb::from(self.c1) * DoubleLimb::from(n);
        self.c1 = t as Limb;
    }

    /// Adds a single limb, carrying into the upper half.
    #[inline(always)]
    pub(crate) fn add(&mut self, a: Limb) {
        let (c0, carry) = self.c0.overflowing_add(a);
        self.c0 = c0;
        self.c1 = self.c1.wrapping_add(Limb::from(carry));
    }

    /// Shifts the accumulator right by one limb, returning the limb
    /// shifted out.
    #[inline(always)]
    pub(crate) fn shift_out(&mut self) -> Limb {
        let low = self.c0;
        self.c0 = self.c1;
        self.c1 = 0;
        low
    }
}
