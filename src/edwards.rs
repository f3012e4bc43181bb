// -*- mode: rust; -*-
//
// This file is part of curve25519-x4.
// Copyright (c) 2016-2021 isis lovecruft
// Copyright (c) 2016-2020 Henry de Valence
// See LICENSE for licensing information.

//! Group operations for Curve25519, in twisted Edwards form, four
//! points at a time.
//!
//! This model is only used for fixed-base multiplication of the trusted
//! Ed25519 basepoint, by the comb method over the precomputed
//! [`EdwardsBasepointTable`].  Variable-base multiplication against
//! untrusted input happens on the Montgomery \\(u\\)-line instead.
//!
//! ## Implementation
//!
//! The arithmetic uses the “extended twisted coordinates” of Hisil,
//! Wong, Carter, and Dawson for \\(a = -1\\).  A point is held as
//! \\((X : Y : Z : E : H)\\) with \\(x = X/Z\\), \\(y = Y/Z\\) and
//! \\(XY/Z = EH\\): the \\(T\\) coordinate is kept factored, so that
//! neither addition nor doubling has to spend a multiplication forming
//! it.
//!
//! Table entries are affine points in Duif form
//! \\(((y+x)/2, (y-x)/2, dxy)\\), which is the affine Niels form with
//! every coordinate halved.  The halving cancels projectively and saves
//! the doubling of \\(Z\\) in the mixed addition.

// We allow non snake_case names because coordinates in projective space are
// traditionally denoted by the capitalisation of their respective
// counterparts in affine space.  Yeah, you heard me, rustc, I'm gonna have my
// affine and projective cakes and eat both of them too.
#![allow(non_snake_case)]

use core::ops::{Add, AddAssign};

use subtle::Choice;
use subtle::ConstantTimeEq;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::backend::vector::packed_simd::u64x4;
use crate::constants;
use crate::field::FieldElement;
use crate::montgomery::ProjectivePoint;
use crate::scalar::Scalar32x4;
use crate::traits::Identity;
use crate::window::{abs_and_sign, LaneSelectable, LookupTable};

// ------------------------------------------------------------------------
// Table points
// ------------------------------------------------------------------------

/// A precomputed point in Duif form, stored as the canonical residues of
/// its three coordinates, each as four little-endian 64-bit words.
#[derive(Copy, Clone, Debug)]
pub(crate) struct CompressedDuifPoint {
    pub(crate) y_plus_x: [u64; 4],
    pub(crate) y_minus_x: [u64; 4],
    pub(crate) xy_d: [u64; 4],
}

/// The words of four table points, one per lane, as gathered by a
/// constant-time table scan.
#[derive(Copy, Clone, Debug)]
pub(crate) struct DuifWordsx4 {
    y_plus_x: [u64x4; 4],
    y_minus_x: [u64x4; 4],
    xy_d: [u64x4; 4],
}

impl Identity for DuifWordsx4 {
    fn identity() -> DuifWordsx4 {
        let half = constants::HALF_WORDS;
        let half = [
            u64x4::splat(half[0]),
            u64x4::splat(half[1]),
            u64x4::splat(half[2]),
            u64x4::splat(half[3]),
        ];
        DuifWordsx4 {
            y_plus_x: half,
            y_minus_x: half,
            xy_d: [u64x4::ZERO; 4],
        }
    }
}

impl LaneSelectable<CompressedDuifPoint> for DuifWordsx4 {
    #[inline]
    fn assign_lanes(&mut self, entry: &CompressedDuifPoint, mask: u64x4) {
        for i in 0..4 {
            self.y_plus_x[i] ^= (self.y_plus_x[i] ^ u64x4::splat(entry.y_plus_x[i])) & mask;
            self.y_minus_x[i] ^= (self.y_minus_x[i] ^ u64x4::splat(entry.y_minus_x[i])) & mask;
            self.xy_d[i] ^= (self.xy_d[i] ^ u64x4::splat(entry.xy_d[i])) & mask;
        }
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for DuifWordsx4 {
    fn zeroize(&mut self) {
        self.y_plus_x.zeroize();
        self.y_minus_x.zeroize();
        self.xy_d.zeroize();
    }
}

/// Four affine points in Duif form, ready to be added to an
/// [`ExtendedPoint`].
#[derive(Copy, Clone, Debug)]
pub(crate) struct DuifPoint {
    pub(crate) y_plus_x: FieldElement,
    pub(crate) y_minus_x: FieldElement,
    pub(crate) xy_d: FieldElement,
}

impl From<&DuifWordsx4> for DuifPoint {
    fn from(w: &DuifWordsx4) -> DuifPoint {
        DuifPoint {
            y_plus_x: FieldElement::from_u64_words(&w.y_plus_x),
            y_minus_x: FieldElement::from_u64_words(&w.y_minus_x),
            xy_d: FieldElement::from_u64_words(&w.xy_d),
        }
    }
}

impl DuifPoint {
    /// Negate the points in the lanes selected by `mask`.
    ///
    /// Negating \\(x\\) swaps \\((y+x)/2\\) with \\((y-x)/2\\) and
    /// negates \\(dxy\\).
    pub(crate) fn conditional_negate(&mut self, mask: u64x4) {
        FieldElement::conditional_swap(&mut self.y_plus_x, &mut self.y_minus_x, mask);
        self.xy_d.conditional_negate(mask);
    }
}

/// A precomputed table of multiples of the Ed25519 basepoint \\(B\\),
/// for constant-time fixed-base scalar multiplication.
///
/// Window `j` holds \\( [v \cdot 256\^j] B \\) for \\( 1 \leq v \leq 8 \\).
#[derive(Clone)]
pub(crate) struct EdwardsBasepointTable(pub(crate) [LookupTable<CompressedDuifPoint>; 32]);

impl EdwardsBasepointTable {
    /// Return \\( [x \cdot 256\^{pos}] B \\) in each lane, for signed
    /// digits \\( -8 \leq x \leq 8 \\) held in two's complement.
    ///
    /// Every entry of window `pos` is read for every lane; the digits
    /// only steer masks.
    pub(crate) fn query(&self, pos: usize, x: u64x4) -> DuifPoint {
        let (xabs, neg_mask) = abs_and_sign(x);
        #[allow(unused_mut)]
        let mut words: DuifWordsx4 = self.0[pos].select(xabs);
        let mut t = DuifPoint::from(&words);
        t.conditional_negate(neg_mask);

        #[cfg(feature = "zeroize")]
        words.zeroize();

        t
    }

    /// Construct \\([a]B\\) in each lane, for the clamped scalars \\(a\\).
    ///
    /// Write the scalar \\(a\\) in radix 16 with coefficients in
    /// \\([-8, 8)\\), i.e.,
    /// $$
    ///     a = a\_0 + a\_1 16\^1 + \cdots + a\_{63} 16\^{63}.
    /// $$
    /// Splitting the digits by parity,
    /// $$
    ///     a B = \sum\_{j} a\_{2j} 256\^j B + 16 \sum\_{j} a\_{2j+1} 256\^j B,
    /// $$
    /// so one table of \\( [v \cdot 256\^j] B \\) serves both sums: the
    /// odd digits are added first, the accumulator is multiplied by 16
    /// with four doublings, and then the even digits are added.
    ///
    /// The scalar is clamped before it is recoded.
    pub(crate) fn mul_base(&self, scalar: &Scalar32x4) -> ExtendedPoint {
        #[allow(unused_mut)]
        let mut a = scalar.clamp().as_radix_16();

        let mut P = ExtendedPoint::identity();
        for i in (0..64).filter(|x| x % 2 == 1) {
            P += &self.query(i / 2, a[i]);
        }

        P = P.mul_by_pow_2(4);

        for i in (0..64).filter(|x| x % 2 == 0) {
            P += &self.query(i / 2, a[i]);
        }

        #[cfg(feature = "zeroize")]
        a.zeroize();

        P
    }
}

// ------------------------------------------------------------------------
// Extended points
// ------------------------------------------------------------------------

/// Four points on the Edwards form of Curve25519, in extended
/// coordinates with a factored \\(T = EH\\).
#[derive(Copy, Clone, Debug)]
pub(crate) struct ExtendedPoint {
    pub(crate) X: FieldElement,
    pub(crate) Y: FieldElement,
    pub(crate) Z: FieldElement,
    pub(crate) E: FieldElement,
    pub(crate) H: FieldElement,
}

impl Identity for ExtendedPoint {
    fn identity() -> ExtendedPoint {
        ExtendedPoint {
            X: FieldElement::ZERO,
            Y: FieldElement::ONE,
            Z: FieldElement::ONE,
            E: FieldElement::ZERO,
            H: FieldElement::ONE,
        }
    }
}

impl ConstantTimeEq for ExtendedPoint {
    fn ct_eq(&self, other: &ExtendedPoint) -> Choice {
        // We would like to check that the point (X/Z, Y/Z) is equal to
        // the point (X'/Z', Y'/Z') without converting into affine
        // coordinates (x, y) and (x', y'), which requires two inversions.
        // We have that X = xZ and X' = x'Z'. Thus, x = x' is equivalent to
        // (xZ)Z' = (x'Z')Z, and similarly for the y-coordinate.

        (&self.X * &other.Z).ct_eq(&(&other.X * &self.Z))
            & (&self.Y * &other.Z).ct_eq(&(&other.Y * &self.Z))
    }
}

impl PartialEq for ExtendedPoint {
    fn eq(&self, other: &ExtendedPoint) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for ExtendedPoint {}

impl ExtendedPoint {
    /// Fixed-base scalar multiplication by the Ed25519 basepoint, in
    /// every lane.
    pub(crate) fn mul_base(scalar: &Scalar32x4) -> ExtendedPoint {
        constants::ED25519_BASEPOINT_TABLE.mul_base(scalar)
    }

    /// Add this point to itself.
    #[rustfmt::skip] // keep alignment of explanatory comments
    pub(crate) fn double(&self) -> ExtendedPoint {
        let XX = self.X.square();                // A = X^2
        let YY = self.Y.square();                // B = Y^2
        let G = &XX - &YY;                       // A - B
        let H = &XX + &YY;                       // A + B
        let XpY_sq = (&self.X + &self.Y).square();
        let E = &H - &XpY_sq;                    // A + B - (X + Y)^2 = -2XY
        let ZZ2 = self.Z.square().mul_small(2);  // C = 2 Z^2
        let F = &G + &ZZ2;                       // A - B + C

        ExtendedPoint {
            X: &E * &F,
            Y: &G * &H,
            Z: &F * &G,
            E,
            H,
        }
    }

    /// Compute \\([2\^k] P \\) by successive doublings. Requires \\( k > 0 \\).
    pub(crate) fn mul_by_pow_2(&self, k: u32) -> ExtendedPoint {
        debug_assert!(k > 0);
        let mut r = *self;
        for _ in 0..k {
            r = r.double();
        }
        r
    }

    /// Map to the Montgomery \\(u\\)-line with
    /// \\( u = (1+y)/(1-y) = (Z+Y)/(Z-Y) \\).
    ///
    /// The identity, with \\(Z = Y\\), maps to \\(u = 0\\).
    pub(crate) fn to_montgomery(&self) -> ProjectivePoint {
        ProjectivePoint {
            U: &self.Z + &self.Y,
            W: &self.Z - &self.Y,
        }
    }
}

impl<'a, 'b> Add<&'b DuifPoint> for &'a ExtendedPoint {
    type Output = ExtendedPoint;

    /// Mixed addition of an extended point and an affine Duif point.
    #[rustfmt::skip] // keep alignment of explanatory comments
    fn add(self, other: &'b DuifPoint) -> ExtendedPoint {
        let T = &self.E * &self.H;               // T = XY/Z
        let YmX = &self.Y - &self.X;
        let YpX = &self.Y + &self.X;
        let MM = &YmX * &other.y_minus_x;        // (Y - X)(y - x)/2
        let PP = &YpX * &other.y_plus_x;         // (Y + X)(y + x)/2
        let E = &PP - &MM;                       // XY' + X'Y, i.e. the new E
        let H = &PP + &MM;                       // YY' + XX', i.e. the new H
        let Txyd = &T * &other.xy_d;             // d T x y
        let F = &self.Z - &Txyd;
        let G = &self.Z + &Txyd;

        ExtendedPoint {
            X: &E * &F,
            Y: &G * &H,
            Z: &F * &G,
            E,
            H,
        }
    }
}

impl<'b> AddAssign<&'b DuifPoint> for ExtendedPoint {
    fn add_assign(&mut self, rhs: &'b DuifPoint) {
        *self = (self as &ExtendedPoint) + rhs;
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::constants::{EDWARDS_D, ED25519_BASEPOINT_X, ED25519_BASEPOINT_Y, HALF_WORDS};
    use crate::montgomery::mul_variable_base;
    use crate::montgomery::MontgomeryPoint;

    fn splat(limbs: &[u32; 9]) -> FieldElement {
        FieldElement::new(&[*limbs; 4])
    }

    fn half() -> FieldElement {
        FieldElement::from_u64_words(&HALF_WORDS.map(u64x4::splat))
    }

    fn basepoint() -> ExtendedPoint {
        let x = splat(&ED25519_BASEPOINT_X);
        let y = splat(&ED25519_BASEPOINT_Y);
        ExtendedPoint {
            X: x,
            Y: y,
            Z: FieldElement::ONE,
            E: x,
            H: y,
        }
    }

    /// Convert to Duif form, by way of affine coordinates.
    fn to_duif(P: &ExtendedPoint) -> DuifPoint {
        let zinv = P.Z.invert();
        let x = &P.X * &zinv;
        let y = &P.Y * &zinv;
        let half = half();
        DuifPoint {
            y_plus_x: &(&y + &x) * &half,
            y_minus_x: &(&y - &x) * &half,
            xy_d: &splat(&EDWARDS_D) * &(&x * &y),
        }
    }

    /// Check that `T = EH` is consistent with `XY = TZ`.
    fn is_valid(P: &ExtendedPoint) -> bool {
        let T = &P.E * &P.H;
        &P.X * &P.Y == &T * &P.Z
    }

    #[test]
    fn identity_is_a_two_sided_identity() {
        let B = basepoint();
        let id = ExtendedPoint::identity();
        assert_eq!(&B + &to_duif(&id), B);
        assert_eq!(&id + &to_duif(&B), B);
        assert_eq!(id.double(), id);
    }

    #[test]
    fn addition_commutes() {
        let B = basepoint();
        let B2 = B.double();
        let B3 = &B2 + &to_duif(&B);
        assert!(is_valid(&B3));
        assert_eq!(B3, &B + &to_duif(&B2));
    }

    #[test]
    fn double_matches_self_addition() {
        let B = basepoint();
        let B2 = B.double();
        assert!(is_valid(&B2));
        assert_eq!(B2, &B + &to_duif(&B));

        let B16 = B.mul_by_pow_2(4);
        let mut acc = B;
        for _ in 1..16 {
            acc += &to_duif(&B);
        }
        assert_eq!(B16, acc);
    }

    #[test]
    fn query_zero_is_identity() {
        let table = &constants::ED25519_BASEPOINT_TABLE;
        let id = ExtendedPoint::identity();
        for pos in [0, 17, 31] {
            assert_eq!(&id + &table.query(pos, u64x4::ZERO), id);
        }
    }

    #[test]
    fn query_negative_digits() {
        // 3B + (-3B) = 0, lane by lane, with the other lanes at 3B + 3B.
        let table = &constants::ED25519_BASEPOINT_TABLE;
        let three = u64x4::splat(3);
        let digits = u64x4::new((-3i64) as u64, 3, (-3i64) as u64, 3);
        let mut P = ExtendedPoint::identity();
        P += &table.query(0, three);
        P += &table.query(0, digits);

        let u = P.to_montgomery().as_affine();
        let six = (&ExtendedPoint::identity() + &table.query(0, u64x4::splat(6)))
            .to_montgomery()
            .as_affine();
        assert_eq!(u[0], MontgomeryPoint([0u8; 32]));
        assert_eq!(u[1], six[1]);
        assert_eq!(u[2], MontgomeryPoint([0u8; 32]));
        assert_eq!(u[3], six[3]);
    }

    #[test]
    fn table_windows_step_by_256() {
        let table = &constants::ED25519_BASEPOINT_TABLE;
        let one = u64x4::splat(1);
        for pos in 0..31 {
            let mut lo = ExtendedPoint::identity();
            lo += &table.query(pos, one);
            let mut hi = ExtendedPoint::identity();
            hi += &table.query(pos + 1, one);
            assert_eq!(lo.mul_by_pow_2(8), hi);
        }
    }

    #[test]
    fn mul_base_matches_ladder() {
        let scalars = [[0u8; 32], [0xffu8; 32], [0x5au8; 32], [0x01u8; 32]];
        let k = Scalar32x4::from_bytes(&scalars);
        let comb = ExtendedPoint::mul_base(&k).to_montgomery().as_affine();
        let ladder = mul_variable_base(&k, &[constants::X25519_BASEPOINT; 4]);
        assert_eq!(comb, ladder);
    }
}
