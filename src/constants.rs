// -*- mode: rust; -*-
//
// This file is part of curve25519-x4.
// Copyright (c) 2016-2021 isis lovecruft
// Copyright (c) 2016-2019 Henry de Valence
// See LICENSE for licensing information.

//! Various constants, such as the X25519 basepoint and the precomputed
//! table of Ed25519 basepoint multiples.

#![allow(non_snake_case)]

use crate::montgomery::MontgomeryPoint;

mod basepoint_table;

pub(crate) use self::basepoint_table::ED25519_BASEPOINT_TABLE;

/// The X25519 basepoint, in `MontgomeryPoint` format.
pub const X25519_BASEPOINT: MontgomeryPoint = MontgomeryPoint([
    0x09, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
]);

/// \\( (A + 2)/4 = 121666 \\), where \\(A = 486662\\) is the Montgomery
/// curve constant.
pub(crate) const APLUS2_OVER_FOUR: u32 = 121666;

/// \\( 1/2 = (p + 1)/2 \\) as four little-endian 64-bit words.  Both
/// halved coordinates of the Edwards identity take this value in Duif
/// form.
pub(crate) const HALF_WORDS: [u64; 4] = [
    0xffff_ffff_ffff_fff7,
    0xffff_ffff_ffff_ffff,
    0xffff_ffff_ffff_ffff,
    0x3fff_ffff_ffff_ffff,
];

/// Edwards `d` value, equal to `-121665/121666 mod p`, in radix \\(2\^{29}\\).
#[cfg(test)]
pub(crate) const EDWARDS_D: [u32; 9] = [
    0x135978a3, 0x0f5a6e50, 0x10762add, 0x00149a82, 0x1e898007, 0x003cbbbc, 0x19ce331d,
    0x1dc56dff, 0x0052036c,
];

/// The affine \\(x\\)-coordinate of the Ed25519 basepoint, in radix \\(2\^{29}\\).
#[cfg(test)]
pub(crate) const ED25519_BASEPOINT_X: [u32; 9] = [
    0x0f25d51a, 0x0ab16b04, 0x0969ecb2, 0x198ec12a, 0x0dc5c692, 0x1118feeb, 0x0ffb0293,
    0x1a79adca, 0x00216936,
];

/// The affine \\(y\\)-coordinate \\(4/5\\) of the Ed25519 basepoint, in radix \\(2\^{29}\\).
#[cfg(test)]
pub(crate) const ED25519_BASEPOINT_Y: [u32; 9] = [
    0x06666658, 0x13333333, 0x19999999, 0x0ccccccc, 0x06666666, 0x13333333, 0x19999999,
    0x0ccccccc, 0x00666666,
];

#[cfg(test)]
mod test {
    use super::*;
    use crate::backend::vector::packed_simd::u64x4;
    use crate::field::FieldElement;

    fn splat(limbs: &[u32; 9]) -> FieldElement {
        FieldElement::new(&[*limbs; 4])
    }

    fn from_words(w: &[u64; 4]) -> FieldElement {
        FieldElement::from_u64_words(&[
            u64x4::splat(w[0]),
            u64x4::splat(w[1]),
            u64x4::splat(w[2]),
            u64x4::splat(w[3]),
        ])
    }

    /// Test that d = -121665/121666
    #[test]
    fn test_d_vs_ratio() {
        let a = -&FieldElement::ONE.mul_small(121665);
        let b = FieldElement::ONE.mul_small(121666);
        let d = &a * &b.invert();
        assert_eq!(d, splat(&EDWARDS_D));
    }

    #[test]
    fn half_doubles_to_one() {
        let half = from_words(&HALF_WORDS);
        assert_eq!(half.mul_small(2), FieldElement::ONE);
    }

    #[test]
    fn basepoint_is_on_the_curve() {
        // -x^2 + y^2 = 1 + d x^2 y^2
        let x2 = splat(&ED25519_BASEPOINT_X).square();
        let y2 = splat(&ED25519_BASEPOINT_Y).square();
        let lhs = &y2 - &x2;
        let rhs = &FieldElement::ONE + &(&splat(&EDWARDS_D) * &(&x2 * &y2));
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn first_table_entry_is_the_basepoint() {
        let half = from_words(&HALF_WORDS);
        let x = splat(&ED25519_BASEPOINT_X);
        let y = splat(&ED25519_BASEPOINT_Y);
        let entry = &ED25519_BASEPOINT_TABLE.0[0].0[0];

        assert_eq!(from_words(&entry.y_plus_x), &(&y + &x) * &half);
        assert_eq!(from_words(&entry.y_minus_x), &(&y - &x) * &half);
        assert_eq!(from_words(&entry.xy_d), &splat(&EDWARDS_D) * &(&x * &y));
    }

    #[test]
    fn x25519_basepoint_is_nine() {
        assert_eq!(X25519_BASEPOINT.to_bytes()[0], 9);
        assert!(X25519_BASEPOINT.to_bytes()[1..].iter().all(|b| *b == 0));
    }
}
