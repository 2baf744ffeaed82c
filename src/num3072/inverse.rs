//! Multiplicative inverse by fixed exponentiation.
//!
//! With `P` prime, `a^(P - 2) mod P` inverts any nonzero `a` (Fermat).
//! The exponent `2^3072 - 1103719` is evaluated with a sliding-window
//! addition chain over repunit powers `a^(2^(2^i) - 1)`, following the
//! decompression technique of Brumley and Järvinen, "Fast Point
//! Decompression for Standard Elliptic Curves" (2008).

use super::Num3072;

/// Number of repunit powers in the precomputed table.
const TABLE_SIZE: usize = 12;

/// Window schedule applied after the table is built: each entry squares
/// the running value the given number of times, then multiplies in the
/// table entry at the given index. The schedule encodes the binary
/// structure of `P - 2` and is valid only for this modulus.
const SCHEDULE: [(u32, usize); 14] = [
    (512, 9),
    (256, 8),
    (128, 7),
    (64, 6),
    (32, 5),
    (8, 3),
    (2, 1),
    (1, 0),
    (5, 2),
    (3, 0),
    (2, 0),
    (4, 0),
    (4, 1),
    (3, 0),
];

impl Num3072 {
    /// Returns the multiplicative inverse of `self` modulo `P`.
    ///
    /// `self` must be canonical and nonzero; inverting zero yields zero,
    /// which is outside the group.
    pub fn inverse(&self) -> Num3072 {
        // table[i] = self^(2^(2^i) - 1): square table[i] exactly 2^i times
        // and multiply by itself to obtain table[i + 1].
        let mut table = [*self; TABLE_SIZE];
        for i in 0..TABLE_SIZE - 1 {
            let mut power = table[i];
            for _ in 0..(1u32 << i) {
                power.square();
            }
            power.multiply(&table[i]);
            table[i + 1] = power;
        }

        // Start from a^(2^2048 - 1) and assemble the remaining bits.
        let mut x = table[TABLE_SIZE - 1];
        for &(squarings, index) in SCHEDULE.iter() {
            for _ in 0..squarings {
                x.square();
            }
            x.multiply(&table[index]);
        }
        x
    }
}
