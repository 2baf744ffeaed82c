//! Schoolbook multiplication and squaring with folded reduction.
//!
//! Both routines interleave the reduction with the product accumulation:
//! limb columns that would land at or above `2^3072` are folded back into
//! the low half by multiplying with `PRIME_DIFF` while the column is still
//! in a carry accumulator. A second fold handles the two-limb carry
//! surviving the main loop, and at most one subtraction of the modulus
//! restores canonical form.

use super::limbs::{Accum3, Limb, LIMBS};
use super::{Num3072, PRIME_DIFF};

impl Num3072 {
    /// Computes `self <- (self * other) mod P`.
    ///
    /// Both operands must be canonical; the result is canonical.
    pub fn multiply(&mut self, other: &Num3072) {
        let mut carry = Accum3::default();
        let mut tmp = [0; LIMBS];

        // Limbs 0..N-2 of the product, folding the high diagonal (the part
        // wrapping past 2^3072) into the running column via PRIME_DIFF.
        for j in 0..LIMBS - 1 {
            let mut high = Accum3::default();
            for i in (j + 1)..LIMBS {
                high.add_product(self.limbs[i], other.limbs[LIMBS + j - i]);
            }
            carry.add_scaled(&high, PRIME_DIFF);
            for i in 0..=j {
                carry.add_product(self.limbs[i], other.limbs[j - i]);
            }
            tmp[j] = carry.shift_out();
        }

        // Limb N-1 has no wrapped counterpart.
        for i in 0..LIMBS {
            carry.add_product(self.limbs[i], other.limbs[LIMBS - 1 - i]);
        }
        tmp[LIMBS - 1] = carry.shift_out();

        self.fold_carry(&tmp, carry);
    }

    /// Computes `self <- self^2 mod P`.
    ///
    /// Same outer structure as [`multiply`](Num3072::multiply), but each
    /// column accumulates symmetric cross products once with a doubling add
    /// and the lone midpoint square (present when the column has odd
    /// length) with a plain add, halving the limb multiplies.
    pub fn square(&mut self) {
        let mut carry = Accum3::default();
        let mut tmp = [0; LIMBS];

        for j in 0..LIMBS - 1 {
            let mut high = Accum3::default();
            for i in 0..(LIMBS - 1 - j) / 2 {
                high.add_double_product(self.limbs[i + j + 1], self.limbs[LIMBS - 1 - i]);
            }
            if (j + 1) & 1 != 0 {
                high.add_product(
                    self.limbs[(LIMBS - 1 - j) / 2 + j + 1],
                    self.limbs[LIMBS - 1 - (LIMBS - 1 - j) / 2],
                );
            }
            carry.add_scaled(&high, PRIME_DIFF);
            for i in 0..(j + 1) / 2 {
                carry.add_double_product(self.limbs[i], self.limbs[j - i]);
            }
            if (j + 1) & 1 != 0 {
                carry.add_product(self.limbs[(j + 1) / 2], self.limbs[j - (j + 1) / 2]);
            }
            tmp[j] = carry.shift_out();
        }

        for i in 0..LIMBS / 2 {
            carry.add_double_product(self.limbs[i], self.limbs[LIMBS - 1 - i]);
        }
        tmp[LIMBS - 1] = carry.shift_out();

        self.fold_carry(&tmp, carry);
    }

    /// Second and third reduction passes shared by multiply and square.
    ///
    /// Folds the surviving two-limb carry into the low limbs via
    /// `PRIME_DIFF`, leaving a value in `[0, 2 * P)` plus a single surplus
    /// bit, then subtracts `P` once if that bit is set.
    fn fold_carry(&mut self, tmp: &[Limb; LIMBS], carry: Accum3) {
        let mut fold = carry.into_pair();
        fold.scale(PRIME_DIFF);
        for (out, &limb) in self.limbs.iter_mut().zip(tmp.iter()) {
            fold.add(limb);
            *out = fold.shift_out();
        }
        debug_assert!(fold.c1 == 0);
        debug_assert!(fold.c0 <= 1);
        if fold.c0 != 0 {
            self.full_reduce();
        }
    }
}
