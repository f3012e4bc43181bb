// -*- mode: rust; -*-
//
// This file is part of curve25519-x4.
// Copyright (c) 2016-2021 isis agora lovecruft
// Copyright (c) 2016-2019 Henry de Valence
// See LICENSE for licensing information.

//! Field arithmetic modulo \\(p = 2\^{255} - 19\\), four lanes at a time.
//!
//! The `field` module provides a type alias `FieldElement` to the
//! lane-batched field element defined in the `backend` module.
//!
//! Field operations defined in terms of machine operations, such as
//! field multiplication or squaring, are defined in the backend
//! implementation.
//!
//! Field operations defined in terms of other field operations, such as
//! field inversion, equality, and the conversions to and from bytes, are
//! defined here.

#![allow(unused_qualifications)]

use core::cmp::{Eq, PartialEq};

use subtle::Choice;
use subtle::ConstantTimeEq;

use crate::backend;
use crate::radix;

/// A `FieldElement` holds four elements of the field
/// \\( \mathbb Z / (2\^{255} - 19)\\), one per lane.
pub(crate) type FieldElement = backend::vector::field::FieldElement29x4;

impl Eq for FieldElement {}

impl PartialEq for FieldElement {
    fn eq(&self, other: &FieldElement) -> bool {
        self.ct_eq(other).into()
    }
}

impl ConstantTimeEq for FieldElement {
    /// Test equality of all four lanes.  Since the internal
    /// representation is not canonical, the field elements are
    /// normalized to wire format before comparison.
    fn ct_eq(&self, other: &FieldElement) -> Choice {
        let (a, b) = (self.to_bytes(), other.to_bytes());
        a.iter()
            .zip(b.iter())
            .fold(Choice::from(1), |acc, (x, y)| acc & x[..].ct_eq(&y[..]))
    }
}

impl FieldElement {
    /// Load four 256-bit little-endian integers given as 32-bit words.
    ///
    /// All 256 bits are used: a value at or above \\(2\^{255}\\) is
    /// reduced mod p rather than truncated.
    pub(crate) fn from_words(words: &[[u32; 8]; 4]) -> FieldElement {
        let mut limbs = [[0u32; 9]; 4];
        for (l, w) in limbs.iter_mut().zip(words.iter()) {
            radix::conv_32_to_29(l, w);
        }
        FieldElement::new(&limbs)
    }

    /// Write the canonical value of each lane as eight 32-bit words.
    pub(crate) fn to_words(&self) -> [[u32; 8]; 4] {
        let limbs = self.normalize().split();
        let mut words = [[0u32; 8]; 4];
        for (w, l) in words.iter_mut().zip(limbs.iter()) {
            radix::conv_29_to_32(w, l);
        }
        words
    }

    /// Load four field elements from their little-endian encodings.
    ///
    /// The high bit of each encoding is ignored, as for a Montgomery
    /// u-coordinate.  Non-canonical values are accepted.
    pub(crate) fn from_bytes(bytes: &[[u8; 32]; 4]) -> FieldElement {
        let mut words = [[0u32; 8]; 4];
        for (w, b) in words.iter_mut().zip(bytes.iter()) {
            *w = radix::words_from_le_bytes(b);
            w[7] &= 0x7fff_ffff;
        }
        FieldElement::from_words(&words)
    }

    /// Serialize each lane to its canonical 32-byte encoding.
    pub(crate) fn to_bytes(&self) -> [[u8; 32]; 4] {
        let words = self.to_words();
        let mut bytes = [[0u8; 32]; 4];
        for (b, w) in bytes.iter_mut().zip(words.iter()) {
            for (chunk, word) in b.chunks_exact_mut(4).zip(w.iter()) {
                chunk.copy_from_slice(&word.to_le_bytes());
            }
        }
        bytes
    }

    /// Compute (self^(2^250-1), self^11), used as a helper function
    /// within invert().
    #[rustfmt::skip] // keep alignment of explanatory comments
    fn pow22501(&self) -> (FieldElement, FieldElement) {
        // Instead of managing which temporary variables are used
        // for what, we define as many as we need and leave stack
        // allocation to the compiler
        //
        // Each temporary variable t_i is of the form (self)^e_i.
        // Squaring t_i corresponds to multiplying e_i by 2,
        // so the pow2k function shifts e_i left by k places.
        // Multiplying t_i and t_j corresponds to adding e_i + e_j.
        //
        // Temporary t_i                      Nonzero bits of e_i
        //
        let t0  = self.square();           // 1         e_0 = 2^1
        let t1  = t0.square().square();    // 3         e_1 = 2^3
        let t2  = self * &t1;              // 3,0       e_2 = 2^3 + 2^0
        let t3  = &t0 * &t2;               // 3,1,0
        let t4  = t3.square();             // 4,2,1
        let t5  = &t2 * &t4;               // 4,3,2,1,0
        let t6  = t5.pow2k(5);             // 9,8,7,6,5
        let t7  = &t6 * &t5;               // 9,8,7,6,5,4,3,2,1,0
        let t8  = t7.pow2k(10);            // 19..10
        let t9  = &t8 * &t7;               // 19..0
        let t10 = t9.pow2k(20);            // 39..20
        let t11 = &t10 * &t9;              // 39..0
        let t12 = t11.pow2k(10);           // 49..10
        let t13 = &t12 * &t7;              // 49..0
        let t14 = t13.pow2k(50);           // 99..50
        let t15 = &t14 * &t13;             // 99..0
        let t16 = t15.pow2k(100);          // 199..100
        let t17 = &t16 * &t15;             // 199..0
        let t18 = t17.pow2k(50);           // 249..50
        let t19 = &t18 * &t13;             // 249..0

        (t19, t3)
    }

    /// Given a nonzero field element, compute its inverse.
    ///
    /// The inverse is computed as self^(p-2), since
    /// x^(p-2)x = x^(p-1) = 1 (mod p).
    ///
    /// This function returns zero on input zero.
    #[rustfmt::skip] // keep alignment of explanatory comments
    #[allow(clippy::let_and_return)]
    pub(crate) fn invert(&self) -> FieldElement {
        // The bits of p-2 = 2^255 -19 -2 are 11010111111...11.
        //
        //                                 nonzero bits of exponent
        let (t19, t3) = self.pow22501();   // t19: 249..0 ; t3: 3,1,0
        let t20 = t19.pow2k(5);            // 254..5
        let t21 = &t20 * &t3;              // 254..5,3,1,0

        t21
    }
}

#[cfg(test)]
mod test {
    use super::*;

    /// Random element a of GF(2^255-19), from Sage
    /// a = 1070314506888354081329385823235218444233221\
    ///     2228051251926706380353716438957572
    static A_BYTES: [u8; 32] = [
        0x04, 0xfe, 0xdf, 0x98, 0xa7, 0xfa, 0x0a, 0x68, 0x84, 0x92, 0xbd, 0x59, 0x08, 0x07, 0xa7,
        0x03, 0x9e, 0xd1, 0xf6, 0xf2, 0xe1, 0xd9, 0xe2, 0xa4, 0xa4, 0x51, 0x47, 0x36, 0xf3, 0xc3,
        0xa9, 0x17,
    ];

    /// Byte representation of a**2
    static ASQ_BYTES: [u8; 32] = [
        0x75, 0x97, 0x24, 0x9e, 0xe6, 0x06, 0xfe, 0xab, 0x24, 0x04, 0x56, 0x68, 0x07, 0x91, 0x2d,
        0x5d, 0x0b, 0x0f, 0x3f, 0x1c, 0xb2, 0x6e, 0xf2, 0xe2, 0x63, 0x9c, 0x12, 0xba, 0x73, 0x0b,
        0xe3, 0x62,
    ];

    /// Byte representation of 1/a
    static AINV_BYTES: [u8; 32] = [
        0x96, 0x1b, 0xcd, 0x8d, 0x4d, 0x5e, 0xa2, 0x3a, 0xe9, 0x36, 0x37, 0x93, 0xdb, 0x7b, 0x4d,
        0x70, 0xb8, 0x0d, 0xc0, 0x55, 0xd0, 0x4c, 0x1d, 0x7b, 0x90, 0x71, 0xd8, 0xe9, 0xb6, 0x18,
        0xe6, 0x30,
    ];

    /// Byte representation of a - a**2
    static A_MINUS_ASQ_BYTES: [u8; 32] = [
        0x7c, 0x66, 0xbb, 0xfa, 0xc0, 0xf3, 0x0c, 0xbc, 0x5f, 0x8e, 0x67, 0xf1, 0x00, 0x76, 0x79,
        0xa6, 0x92, 0xc2, 0xb7, 0xd6, 0x2f, 0x6b, 0xf0, 0xc1, 0x40, 0xb5, 0x34, 0x7c, 0x7f, 0xb8,
        0xc6, 0x34,
    ];

    fn splat(bytes: &[u8; 32]) -> FieldElement {
        FieldElement::from_bytes(&[*bytes; 4])
    }

    #[test]
    fn a_mul_a_vs_a_squared_constant() {
        let a = splat(&A_BYTES);
        let asq = splat(&ASQ_BYTES);
        assert_eq!(asq, &a * &a);
        assert_eq!(asq, a.square());
    }

    #[test]
    fn a_invert_vs_inverse_of_a_constant() {
        let a = splat(&A_BYTES);
        let ainv = splat(&AINV_BYTES);
        let should_be_inverse = a.invert();
        assert_eq!(ainv, should_be_inverse);
        assert_eq!(FieldElement::ONE, &a * &should_be_inverse);
    }

    #[test]
    fn invert_of_zero_is_zero() {
        assert_eq!(FieldElement::ZERO.invert(), FieldElement::ZERO);
    }

    #[test]
    fn equality_checks_every_lane() {
        let a = splat(&A_BYTES);
        for lane in 0..4 {
            let mut bytes = [A_BYTES; 4];
            bytes[lane] = ASQ_BYTES;
            let b = FieldElement::from_bytes(&bytes);
            assert!(!bool::from(a.ct_eq(&b)));
            assert_ne!(a, b);
        }
        // p + 1 in lane 2 still equals 1.
        let mut p_plus_one = [0xffu8; 32];
        p_plus_one[0] = 0xee;
        p_plus_one[31] = 0x7f;
        let mut one = [0u8; 32];
        one[0] = 1;
        let x = FieldElement::from_bytes(&[one, one, p_plus_one, one]);
        assert!(bool::from(x.ct_eq(&FieldElement::ONE)));
    }

    #[test]
    fn lanes_are_independent() {
        let x = FieldElement::from_bytes(&[A_BYTES, ASQ_BYTES, [0u8; 32], A_BYTES]);
        let y = FieldElement::from_bytes(&[ASQ_BYTES, A_BYTES, A_BYTES, [0u8; 32]]);
        let prod = (&x * &y).to_bytes();
        let asq_a = (&splat(&ASQ_BYTES) * &splat(&A_BYTES)).to_bytes()[0];
        assert_eq!(prod[0], asq_a);
        assert_eq!(prod[1], asq_a);
        assert_eq!(prod[2], [0u8; 32]);
        assert_eq!(prod[3], [0u8; 32]);

        let diff = (&x - &y).to_bytes();
        assert_eq!(diff[0], A_MINUS_ASQ_BYTES);
        assert_eq!(diff[3], A_BYTES);
    }

    #[test]
    fn lazy_sum_multiplies_correctly() {
        // (a + a^2) * a = a^2 + a^3, with the sum left unreduced.
        let a = splat(&A_BYTES);
        let asq = splat(&ASQ_BYTES);
        let lhs = &(&a + &asq) * &a;
        let rhs = &asq + &(&asq * &a);
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn from_bytes_highbit_is_ignored() {
        let mut cleared_bytes = A_BYTES;
        cleared_bytes[31] &= 127u8;
        let with_highbit_set = {
            let mut bytes = A_BYTES;
            bytes[31] |= 128u8;
            splat(&bytes)
        };
        let without_highbit_set = splat(&cleared_bytes);
        assert_eq!(without_highbit_set, with_highbit_set);
    }

    #[test]
    fn encoding_is_canonical() {
        // Encode 1 wrongly as 1 + (2^255 - 19) = 2^255 - 18
        let one_encoded_wrongly_bytes: [u8; 32] = [
            0xee, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
            0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
            0xff, 0xff, 0xff, 0x7f,
        ];
        // Decode to a field element
        let one = splat(&one_encoded_wrongly_bytes);
        // .. then check that the encoding is correct
        let one_bytes = one.to_bytes();
        for lane in one_bytes.iter() {
            assert_eq!(lane[0], 1);
            assert!(lane[1..].iter().all(|b| *b == 0));
        }
    }

    #[test]
    fn words_use_all_256_bits() {
        // 2^255 + 1 = 20 (mod p)
        let mut w = [0u32; 8];
        w[0] = 1;
        w[7] = 0x8000_0000;
        let x = FieldElement::from_words(&[w; 4]);
        let mut twenty = [0u32; 8];
        twenty[0] = 20;
        assert_eq!(x.to_words(), [twenty; 4]);
    }
}
