//! Boundary behaviour of the overflow window `[P, 2^3072)` exercised
//! through the public arithmetic surface by direct limb injection.

use muhash3072::num3072::{Limb, Num3072, BYTE_SIZE, LIMBS, PRIME_DIFF};

/// Limbs of the modulus `P = 2^3072 - PRIME_DIFF`.
fn prime_limbs() -> [Limb; LIMBS] {
    let mut limbs = [Limb::MAX; LIMBS];
    limbs[0] = PRIME_DIFF.wrapping_neg();
    limbs
}

fn small(value: u64) -> Num3072 {
    let mut bytes = [0u8; BYTE_SIZE];
    bytes[..8].copy_from_slice(&value.to_le_bytes());
    Num3072::from_le_bytes(&bytes)
}

#[test]
fn window_bounds_are_exact() {
    let mut below = prime_limbs();
    below[0] -= 1;
    assert!(!Num3072::from_limbs(below).is_overflow());

    assert!(Num3072::from_limbs(prime_limbs()).is_overflow());
    assert!(Num3072::from_limbs([Limb::MAX; LIMBS]).is_overflow());

    // Saturating only the low limb is not enough.
    let mut low_only = [0; LIMBS];
    low_only[0] = Limb::MAX;
    assert!(!Num3072::from_limbs(low_only).is_overflow());
}

#[test]
fn reduction_maps_window_to_offset() {
    for k in [0u64, 1, 17, 1_103_716] {
        let mut limbs = prime_limbs();
        limbs[0] = limbs[0].wrapping_add(k as Limb);
        let mut value = Num3072::from_limbs(limbs);
        assert!(value.is_overflow());
        value.full_reduce();
        assert_eq!(value, small(k));
    }
}

#[test]
fn canonical_values_pass_through_multiplication() {
    // The largest canonical value times one must come back unchanged: the
    // folded reduction may not fire on values just below the modulus.
    let mut below = prime_limbs();
    below[0] -= 1;
    let largest = Num3072::from_limbs(below);

    let mut product = largest;
    product.multiply(&Num3072::one());
    assert_eq!(product, largest);
}

#[test]
fn window_value_keeps_residue_class_through_multiplication() {
    // 2^3072 - 1 = P + (PRIME_DIFF - 1): multiplying out of the window
    // must land in the same residue class as the canonical representative.
    let mut bytes = [0u8; BYTE_SIZE];
    for (i, byte) in bytes.iter_mut().enumerate() {
        *byte = (i.wrapping_mul(59) ^ 0xa4) as u8;
    }
    let element = Num3072::from_le_bytes(&bytes);
    assert!(!element.is_overflow());

    let mut from_window = Num3072::from_limbs([Limb::MAX; LIMBS]);
    from_window.multiply(&element);
    let mut from_offset = small(1_103_716);
    from_offset.multiply(&element);

    if from_window.is_overflow() {
        from_window.full_reduce();
    }
    if from_offset.is_overflow() {
        from_offset.full_reduce();
    }
    assert_eq!(from_window, from_offset);
}

#[test]
fn encoding_is_width_stable() {
    // The canonical encoding walks limbs least significant first, so the
    // byte image equals the little-endian integer regardless of backend.
    let mut bytes = [0u8; BYTE_SIZE];
    for (i, byte) in bytes.iter_mut().enumerate() {
        *byte = (i % 251) as u8;
    }
    let value = Num3072::from_le_bytes(&bytes);
    assert_eq!(value.to_le_bytes(), bytes);
}
