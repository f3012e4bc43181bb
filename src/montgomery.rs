// -*- mode: rust; -*-
//
// This file is part of curve25519-x4.
// Copyright (c) 2016-2021 isis lovecruft
// Copyright (c) 2016-2019 Henry de Valence
// See LICENSE for licensing information.

//! Scalar multiplication on the Montgomery form of Curve25519.
//!
//! To avoid notational confusion with the Edwards code, we use
//! variables \\( u, v \\) for the Montgomery curve, so that “Montgomery
//! \\(u\\)” here corresponds to “Montgomery \\(x\\)” elsewhere.
//!
//! Montgomery arithmetic works not on the curve itself, but on the
//! \\(u\\)-line, which discards sign information and unifies the curve
//! and its quadratic twist.  See [_Montgomery curves and their
//! arithmetic_][costello-smith] by Costello and Smith for more details.
//!
//! The `MontgomeryPoint` struct contains the affine \\(u\\)-coordinate
//! \\(u\_0(P)\\) of a point \\(P\\) on either the curve or the twist.
//! Here the map \\(u\_0 : \mathcal M \rightarrow \mathbb F\_p \\) is
//! defined by \\(u\_0((u,v)) = u\\); \\(u\_0(\mathcal O) = 0\\).  See
//! section 5.4 of Costello-Smith for more details.
//!
//! # Scalar Multiplication
//!
//! Both multiplications here take four scalars and return four
//! points.
//!
//! * `mul_variable_base` runs the Montgomery ladder and accepts any
//!   32-byte string as a \\(u\\)-coordinate, so it is the one to use on
//!   peer input.
//!
//! * `mul_base` multiplies the basepoint \\(u = 9\\) with the Edwards
//!   comb, then maps the result to the \\(u\\)-line with
//!   \\( u = (1+y)/(1-y) \\).
//!
//! [costello-smith]: https://eprint.iacr.org/2017/212.pdf

// We allow non snake_case names because coordinates in projective space are
// traditionally denoted by the capitalisation of their respective
// counterparts in affine space.  Yeah, you heard me, rustc, I'm gonna have my
// affine and projective cakes and eat both of them too.
#![allow(non_snake_case)]

use core::array::TryFromSliceError;
use core::hash::{Hash, Hasher};

use crate::backend::vector::packed_simd::u64x4;
use crate::constants::APLUS2_OVER_FOUR;
use crate::edwards::ExtendedPoint;
use crate::field::FieldElement;
use crate::scalar::Scalar32x4;
use crate::traits::Identity;

use subtle::Choice;
use subtle::ConstantTimeEq;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// Holds the \\(u\\)-coordinate of a point on the Montgomery form of
/// Curve25519 or its twist.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MontgomeryPoint(pub [u8; 32]);

/// Reduce two encodings to their canonical form in one pass.
fn canonical_pair(a: &[u8; 32], b: &[u8; 32]) -> ([u8; 32], [u8; 32]) {
    let lanes = FieldElement::from_bytes(&[*a, *b, [0u8; 32], [0u8; 32]]).to_bytes();
    (lanes[0], lanes[1])
}

/// Equality of `MontgomeryPoint`s is defined mod p.
impl ConstantTimeEq for MontgomeryPoint {
    fn ct_eq(&self, other: &MontgomeryPoint) -> Choice {
        let (self_bytes, other_bytes) = canonical_pair(&self.0, &other.0);
        self_bytes.ct_eq(&other_bytes)
    }
}

impl PartialEq for MontgomeryPoint {
    fn eq(&self, other: &MontgomeryPoint) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for MontgomeryPoint {}

// Equal MontgomeryPoints must hash to the same value. So we have to get them into a canonical
// encoding first
impl Hash for MontgomeryPoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Do a round trip through a `FieldElement`. `to_bytes` is guaranteed to give a canonical
        // 32-byte encoding
        let (canonical_bytes, _) = canonical_pair(&self.0, &[0u8; 32]);
        canonical_bytes.hash(state);
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for MontgomeryPoint {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl MontgomeryPoint {
    /// View this `MontgomeryPoint` as an array of bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert this `MontgomeryPoint` to an array of bytes.
    pub const fn to_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Construct a `MontgomeryPoint` from a slice of bytes.
    ///
    /// # Errors
    ///
    /// Returns [`TryFromSliceError`] if the input `bytes` slice does not have
    /// a length of 32.
    pub fn from_slice(bytes: &[u8]) -> Result<MontgomeryPoint, TryFromSliceError> {
        bytes.try_into().map(MontgomeryPoint)
    }
}

impl From<[u8; 32]> for MontgomeryPoint {
    fn from(bytes: [u8; 32]) -> MontgomeryPoint {
        MontgomeryPoint(bytes)
    }
}

/// Given four scalars \\(n\\) and four encoded points \\(u\_0(P)\\),
/// return \\( u\_0(\[n\]P) \\) in each lane.
///
/// The scalars are clamped first, so the ladder always runs over bits
/// 254 down to 0.  The high bit of each \\(u\\) is ignored, and no other
/// check is made: points on the twist and points of small order are
/// multiplied like any other, and an output of \\(0\\) is possible.
pub(crate) fn mul_variable_base(
    scalar: &Scalar32x4,
    points: &[MontgomeryPoint; 4],
) -> [MontgomeryPoint; 4] {
    #[allow(unused_mut)]
    let mut k = scalar.clamp();
    let affine_u = FieldElement::from_bytes(&points.map(|p| p.0));

    let x0 = mul_bits_be(&affine_u, (0..255).rev().map(|i| k.bit(i)));

    #[cfg(feature = "zeroize")]
    k.zeroize();

    x0.as_affine()
}

/// Multiply the X25519 basepoint by four scalars, which are clamped.
///
/// This uses the precomputed Edwards table, so it must only be used
/// with the fixed basepoint.
pub(crate) fn mul_base(scalar: &Scalar32x4) -> [MontgomeryPoint; 4] {
    ExtendedPoint::mul_base(scalar).to_montgomery().as_affine()
}

/// Given `affine_u` \\( = u\_0(P) \\) in each lane, and a big-endian
/// sequence of bit vectors \\(n\\), one bit per lane, return
/// \\( u\_0(\[n\]P) \\) in projective form.
///
/// This is constant time in the length of `bits`.
fn mul_bits_be(affine_u: &FieldElement, bits: impl Iterator<Item = u64x4>) -> ProjectivePoint {
    // Algorithm 8 of Costello-Smith 2017
    let mut x0 = ProjectivePoint::identity();
    let mut x1 = ProjectivePoint {
        U: *affine_u,
        W: FieldElement::ONE,
    };

    // Go through the bits from most to least significant, using a sliding window of 2
    let mut prev_bit = u64x4::ZERO;
    for cur_bit in bits {
        let choice = (prev_bit ^ cur_bit).bit_to_mask();

        ProjectivePoint::conditional_swap(&mut x0, &mut x1, choice);
        differential_add_and_double(&mut x0, &mut x1, affine_u);

        prev_bit = cur_bit;
    }
    // The final value of prev_bit above is the LSB of each scalar
    ProjectivePoint::conditional_swap(&mut x0, &mut x1, prev_bit.bit_to_mask());
    // Don't leave the bit in the stack
    #[cfg(feature = "zeroize")]
    prev_bit.zeroize();

    x0
}

/// A `ProjectivePoint` holds four points on the projective line
/// \\( \mathbb P(\mathbb F\_p) \\), which we identify with the Kummer
/// line of the Montgomery curve.
#[derive(Copy, Clone, Debug)]
pub(crate) struct ProjectivePoint {
    pub U: FieldElement,
    pub W: FieldElement,
}

impl Identity for ProjectivePoint {
    fn identity() -> ProjectivePoint {
        ProjectivePoint {
            U: FieldElement::ONE,
            W: FieldElement::ZERO,
        }
    }
}

impl ProjectivePoint {
    /// Swap `a` and `b` in the lanes where `mask` is all ones.
    fn conditional_swap(a: &mut ProjectivePoint, b: &mut ProjectivePoint, mask: u64x4) {
        FieldElement::conditional_swap(&mut a.U, &mut b.U, mask);
        FieldElement::conditional_swap(&mut a.W, &mut b.W, mask);
    }

    /// Dehomogenize this point to affine coordinates.
    ///
    /// # Return
    ///
    /// * \\( u = U / W \\) if \\( W \neq 0 \\);
    /// * \\( 0 \\) if \\( W = 0 \\).
    pub(crate) fn as_affine(&self) -> [MontgomeryPoint; 4] {
        let u = &self.U * &self.W.invert();
        u.to_bytes().map(MontgomeryPoint)
    }
}

/// Perform the double-and-add step of the Montgomery ladder.
///
/// Given projective points
/// \\( (U\_P : W\_P) = u(P) \\),
/// \\( (U\_Q : W\_Q) = u(Q) \\),
/// and the affine difference
/// \\(      u\_{P-Q} = u(P-Q) \\), set
/// $$
///     (U\_P : W\_P) \gets u(\[2\]P)
/// $$
/// and
/// $$
///     (U\_Q : W\_Q) \gets u(P + Q).
/// $$
#[rustfmt::skip] // keep alignment of explanatory comments
fn differential_add_and_double(
    P: &mut ProjectivePoint,
    Q: &mut ProjectivePoint,
    affine_PmQ: &FieldElement,
) {
    let t0 = &P.U + &P.W;
    let t1 = &P.U - &P.W;
    let t2 = &Q.U + &Q.W;
    let t3 = &Q.U - &Q.W;

    let t4 = t0.square();   // (U_P + W_P)^2 = U_P^2 + 2 U_P W_P + W_P^2
    let t5 = t1.square();   // (U_P - W_P)^2 = U_P^2 - 2 U_P W_P + W_P^2

    let t6 = &t4 - &t5;     // 4 U_P W_P

    let t7 = &t0 * &t3;     // (U_P + W_P) (U_Q - W_Q) = U_P U_Q + W_P U_Q - U_P W_Q - W_P W_Q
    let t8 = &t1 * &t2;     // (U_P - W_P) (U_Q + W_Q) = U_P U_Q - W_P U_Q + U_P W_Q - W_P W_Q

    let t9  = &t7 + &t8;    // 2 (U_P U_Q - W_P W_Q)
    let t10 = &t7 - &t8;    // 2 (W_P U_Q - U_P W_Q)

    let t11 =  t9.square(); // 4 (U_P U_Q - W_P W_Q)^2
    let t12 = t10.square(); // 4 (W_P U_Q - U_P W_Q)^2

    let t13 = t6.mul_small(APLUS2_OVER_FOUR); // (A + 2) U_P U_Q

    let t14 = &t4 * &t5;    // ((U_P + W_P)(U_P - W_P))^2 = (U_P^2 - W_P^2)^2
    let t15 = &t13 + &t5;   // (U_P - W_P)^2 + (A + 2) U_P W_P

    let t16 = &t6 * &t15;   // 4 (U_P W_P) ((U_P - W_P)^2 + (A + 2) U_P W_P)

    let t17 = affine_PmQ * &t12; // U_D * 4 (W_P U_Q - U_P W_Q)^2
    let t18 = t11;               // W_D * 4 (U_P U_Q - W_P W_Q)^2

    P.U = t14;  // U_{P'} = (U_P + W_P)^2 (U_P - W_P)^2
    P.W = t16;  // W_{P'} = (4 U_P W_P) ((U_P - W_P)^2 + ((A + 2)/4) 4 U_P W_P)
    Q.U = t18;  // U_{Q'} = W_D * 4 (U_P U_Q - W_P W_Q)^2
    Q.W = t17;  // W_{Q'} = U_D * 4 (W_P U_Q - U_P W_Q)^2
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::constants;

    use core::hash::BuildHasher;
    use std::collections::hash_map::RandomState;

    /// u-coordinate of 2 * basepoint, computed independently.
    const TWO_B: [u8; 32] = [
        0xfb, 0x4e, 0x68, 0xdd, 0x9c, 0x46, 0xae, 0x5c, 0x5c, 0x0b, 0x35, 0x1e, 0xed, 0x5c, 0x3f,
        0x8f, 0x14, 0x71, 0x15, 0x7d, 0x68, 0x0c, 0x75, 0xd9, 0xb7, 0xf1, 0x73, 0x18, 0xd5, 0x42,
        0xd3, 0x20,
    ];

    #[test]
    fn identity_in_different_coordinates() {
        let id_projective = ProjectivePoint {
            U: FieldElement::ZERO,
            W: FieldElement::ONE,
        };
        assert_eq!(id_projective.as_affine(), [MontgomeryPoint([0u8; 32]); 4]);
        assert_eq!(ProjectivePoint::identity().as_affine(), [MontgomeryPoint([0u8; 32]); 4]);
    }

    #[test]
    fn equality_is_mod_p() {
        // 2^255 - 19 + 9 encodes 9 non-canonically.
        let mut nine_plus_p = [0xffu8; 32];
        nine_plus_p[0] = 0xf6;
        nine_plus_p[31] = 0x7f;
        let nine = MontgomeryPoint(nine_plus_p);
        assert_eq!(nine, constants::X25519_BASEPOINT);
        assert_ne!(nine.as_bytes(), constants::X25519_BASEPOINT.as_bytes());

        // Bit 255 is not part of the encoding.
        let mut high = constants::X25519_BASEPOINT.to_bytes();
        high[31] |= 0x80;
        assert_eq!(MontgomeryPoint(high), constants::X25519_BASEPOINT);
    }

    #[test]
    fn equal_points_hash_equal() {
        let state = RandomState::new();
        let mut nine_plus_p = [0xffu8; 32];
        nine_plus_p[0] = 0xf6;
        nine_plus_p[31] = 0x7f;
        assert_eq!(
            state.hash_one(MontgomeryPoint(nine_plus_p)),
            state.hash_one(constants::X25519_BASEPOINT)
        );
    }

    #[test]
    fn from_slice_checks_length() {
        let bytes = [9u8; 33];
        assert!(MontgomeryPoint::from_slice(&bytes).is_err());
        assert!(MontgomeryPoint::from_slice(&bytes[..31]).is_err());
        assert_eq!(
            MontgomeryPoint::from_slice(&bytes[..32]).unwrap(),
            MontgomeryPoint([9u8; 32])
        );
    }

    #[test]
    fn ladder_step_doubles_the_basepoint() {
        let u = FieldElement::from_bytes(&[constants::X25519_BASEPOINT.0; 4]);
        let mut P = ProjectivePoint { U: u, W: FieldElement::ONE };
        let mut Q = ProjectivePoint::identity();
        // Q - P = -P, which has the same u.
        differential_add_and_double(&mut P, &mut Q, &u);
        assert_eq!(P.as_affine(), [MontgomeryPoint(TWO_B); 4]);
        assert_eq!(Q.as_affine(), [constants::X25519_BASEPOINT; 4]);
    }

    #[test]
    fn bits_ladder_multiplies_by_small_integers() {
        let u = FieldElement::from_bytes(&[constants::X25519_BASEPOINT.0; 4]);
        // Lanes multiply by 1, 2, 0, and 2 respectively.
        let bits = [u64x4::new(0, 1, 0, 1), u64x4::new(1, 0, 0, 0)];
        let r = mul_bits_be(&u, bits.iter().copied()).as_affine();
        assert_eq!(r[0], constants::X25519_BASEPOINT);
        assert_eq!(r[1], MontgomeryPoint(TWO_B));
        assert_eq!(r[2], MontgomeryPoint([0u8; 32]));
        assert_eq!(r[3], MontgomeryPoint(TWO_B));
    }

    #[test]
    fn mul_base_matches_variable_base() {
        let secrets = [[0x11u8; 32], [0x80u8; 32], [0u8; 32], [0xfeu8; 32]];
        let k = Scalar32x4::from_bytes(&secrets);
        assert_eq!(
            mul_base(&k),
            mul_variable_base(&k, &[constants::X25519_BASEPOINT; 4])
        );
    }
}
