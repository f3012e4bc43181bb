// -*- mode: rust; -*-
//
// This file is part of curve25519-x4.
// Copyright (c) 2016-2021 isis lovecruft
// Copyright (c) 2016-2019 Henry de Valence
// See LICENSE for licensing information.

//! An implementation of 4-way vectorized field arithmetic modulo
//! \\(p = 2\^{255} - 19\\), in radix \\(2\^{29}\\).
//!
//! The `FieldElement29x4` struct provides a vector of four field
//! elements.  A field element is represented as nine limbs
//! $$
//! x = \sum\_{i=0}\^8 x\_i 2\^{29 i},
//! $$
//! and each limb is a `u64x4`, holding that limb of all four
//! elements.  Products use the \\(32 \times 32 \rightarrow 64\\)-bit
//! lane multiply, so every limb fed into a multiplication must be
//! below \\(2\^{32}\\).
//!
//! At this level, the API is optimized for speed and not safety.  The
//! `FieldElement29x4` does not always perform reductions.  Two bound
//! classes are used throughout the curve code:
//!
//! * *reduced*: limbs \\(0, 2, \ldots, 7 < 2\^{29}\\), limb \\(1 <
//!   2\^{29} + 2\^{17}\\), limb \\(8 < 2\^{23}\\).  Every operation except
//!   `Add` returns a reduced element.
//!
//! * *sum*: the lazy sum of two reduced elements, with limbs below
//!   \\(2\^{30} + 2\^{18}\\) and limb \\(8 < 2\^{24}\\).
//!
//! Multiplication, squaring, and subtraction accept either class for
//! both operands; addition accepts only reduced operands.  It is the
//! caller's responsibility to respect these bounds.

#![allow(non_snake_case)]

use core::ops::{Add, Mul, Neg, Sub};

use crate::backend::vector::packed_simd::u64x4;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

const LOW_29_BITS: u64 = (1 << 29) - 1;
const LOW_23_BITS: u64 = (1 << 23) - 1;

/// \\(2\^{261} \equiv 2\^6 \cdot 19 \pmod p\\): the weight of limb 9
/// folded back onto limb 0.
const WRAP_261: u64 = 1216;

/// The limbs of \\(4p\\), added before subtracting so that every limb
/// stays non-negative.
const P_TIMES_4: [u64; 9] = [
    0x7fff_ffb4,
    0x7fff_fffc,
    0x7fff_fffc,
    0x7fff_fffc,
    0x7fff_fffc,
    0x7fff_fffc,
    0x7fff_fffc,
    0x7fff_fffc,
    0x01ff_fffc,
];

/// A vector of four field elements.
///
/// Each operation on a `FieldElement29x4` has documented effects on
/// the bounds of the limbs.  This API is designed for speed
/// and not safety; it is the caller's responsibility to ensure that
/// the post-conditions of one operation are compatible with the
/// pre-conditions of the next.
#[derive(Clone, Copy, Debug)]
pub(crate) struct FieldElement29x4(pub(crate) [u64x4; 9]);

impl FieldElement29x4 {
    /// The element \\( 0 \\) in every lane.
    pub(crate) const ZERO: FieldElement29x4 = FieldElement29x4([u64x4::ZERO; 9]);
    /// The element \\( 1 \\) in every lane.
    pub(crate) const ONE: FieldElement29x4 =
        FieldElement29x4::splat_limbs_const([1, 0, 0, 0, 0, 0, 0, 0, 0]);

    /// Build a constant with the same limbs in every lane.
    pub(crate) const fn splat_limbs_const(limbs: [u64; 9]) -> FieldElement29x4 {
        FieldElement29x4([
            u64x4::splat_value(limbs[0]),
            u64x4::splat_value(limbs[1]),
            u64x4::splat_value(limbs[2]),
            u64x4::splat_value(limbs[3]),
            u64x4::splat_value(limbs[4]),
            u64x4::splat_value(limbs[5]),
            u64x4::splat_value(limbs[6]),
            u64x4::splat_value(limbs[7]),
            u64x4::splat_value(limbs[8]),
        ])
    }

    /// Pack four sets of 29-bit limbs, one per lane.
    ///
    /// The limbs are carried and reduced, so any `u32` values are
    /// accepted.
    pub(crate) fn new(lanes: &[[u32; 9]; 4]) -> FieldElement29x4 {
        let mut z = [u64x4::ZERO; 9];
        for (i, limb) in z.iter_mut().enumerate() {
            *limb = u64x4::new(
                lanes[0][i] as u64,
                lanes[1][i] as u64,
                lanes[2][i] as u64,
                lanes[3][i] as u64,
            );
        }
        FieldElement29x4::reduce(z)
    }

    /// Split this vector into the limbs of its four lanes.
    ///
    /// The limbs are returned as they are, so this should only be
    /// called on a normalized element when a canonical value is
    /// wanted.
    pub(crate) fn split(&self) -> [[u32; 9]; 4] {
        let mut out = [[0u32; 9]; 4];
        for (i, limb) in self.0.iter().enumerate() {
            for (lane, x) in limb.to_array().iter().enumerate() {
                out[lane][i] = *x as u32;
            }
        }
        out
    }

    /// Unpack a 256-bit integer given as four little-endian 64-bit words
    /// per lane into radix \\(2\^{29}\\).
    ///
    /// The input must be below \\(2\^{255}\\); the output is in the reduced class.
    #[rustfmt::skip] // keep alignment of the bit offsets
    pub(crate) fn from_u64_words(w: &[u64x4; 4]) -> FieldElement29x4 {
        let mask = u64x4::splat(LOW_29_BITS);

        FieldElement29x4([
             w[0]                                & mask, //   0
             w[0].shr::<29>()                    & mask, //  29
            (w[0].shr::<58>() | w[1].shl::<6>())  & mask, //  58
             w[1].shr::<23>()                    & mask, //  87
            (w[1].shr::<52>() | w[2].shl::<12>()) & mask, // 116
             w[2].shr::<17>()                    & mask, // 145
            (w[2].shr::<46>() | w[3].shl::<18>()) & mask, // 174
             w[3].shr::<11>()                    & mask, // 203
             w[3].shr::<40>(),                           // 232
        ])
    }

    /// Given unreduced limbs `z[0], ..., z[8]` below \\(2\^{63}\\),
    /// carry and reduce them mod p to obtain a reduced
    /// `FieldElement29x4`.
    ///
    /// The top limb keeps 23 bits; the carry out of it has weight
    /// \\(2\^{255} \equiv 19\\) and is folded back onto limb 0.
    #[inline]
    fn reduce(mut z: [u64x4; 9]) -> FieldElement29x4 {
        let low_29_bits = u64x4::splat(LOW_29_BITS);
        let low_23_bits = u64x4::splat(LOW_23_BITS);

        for i in 0..8 {
            z[i + 1] += z[i].shr::<29>();
            z[i] &= low_29_bits;
        }

        let c = z[8].shr::<23>();
        z[8] &= low_23_bits;
        // 19 * c, without the 32-bit multiplier: c may be wider than 32 bits.
        z[0] += c.shl::<4>() + c.shl::<1>() + c;

        z[1] += z[0].shr::<29>();
        z[0] &= low_29_bits;

        FieldElement29x4(z)
    }

    /// Fold the 18 product columns of a multiplication onto 9 limbs
    /// and reduce.
    ///
    /// Columns `0..17` hold 29-bit values and column 17 holds the
    /// final carry, which stays below \\(2\^{32}\\) for operands of
    /// either bound class.
    #[inline]
    fn reduce_wide(z: [u64x4; 18]) -> FieldElement29x4 {
        let wrap = u64x4::splat(WRAP_261);
        let mut r = [u64x4::ZERO; 9];
        for (i, limb) in r.iter_mut().enumerate() {
            *limb = z[i] + z[i + 9].mul32(wrap);
        }
        FieldElement29x4::reduce(r)
    }

    /// Compute `self^2`.
    ///
    /// Column sums are built on top of the carry from the previous
    /// column, so that no accumulator exceeds \\(9 \cdot 2\^{60} +
    /// 2\^{35} < 2\^{64}\\).
    pub(crate) fn square(&self) -> FieldElement29x4 {
        let x = &self.0;
        let mask = u64x4::splat(LOW_29_BITS);

        let mut x_2 = [u64x4::ZERO; 9];
        for (d, a) in x_2.iter_mut().zip(x.iter()) {
            *d = a.shl::<1>();
        }

        let mut z = [u64x4::ZERO; 18];
        let mut acc = u64x4::ZERO;
        for k in 0usize..17 {
            for i in k.saturating_sub(8)..=(k / 2) {
                let j = k - i;
                acc += if i == j {
                    x[i].mul32(x[i])
                } else {
                    x[i].mul32(x_2[j])
                };
            }
            z[k] = acc & mask;
            acc = acc.shr::<29>();
        }
        z[17] = acc;

        FieldElement29x4::reduce_wide(z)
    }

    /// Given `k > 0`, return `self^(2^k)`.
    pub(crate) fn pow2k(&self, k: u32) -> FieldElement29x4 {
        debug_assert!(k > 0);
        let mut z = self.square();
        for _ in 1..k {
            z = z.square();
        }
        z
    }

    /// Multiply by a small constant `c`.
    ///
    /// Each limb of `self` times `c` must stay below \\(2\^{63}\\); in
    /// practice `c` is at most 17 bits wide.
    pub(crate) fn mul_small(&self, c: u32) -> FieldElement29x4 {
        let c = u64x4::splat(c as u64);
        let mut z = self.0;
        for limb in z.iter_mut() {
            *limb = limb.mul32(c);
        }
        FieldElement29x4::reduce(z)
    }

    /// Reduce every lane to its canonical representative in \\([0, p)\\).
    ///
    /// The result has every limb below \\(2\^{29}\\) and the top limb
    /// below \\(2\^{23}\\).
    #[rustfmt::skip] // keep alignment of the carry chain
    pub(crate) fn normalize(&self) -> FieldElement29x4 {
        let low_29_bits = u64x4::splat(LOW_29_BITS);
        let low_23_bits = u64x4::splat(LOW_23_BITS);

        // Reduce the value represented by `self` to the range [0, 2p).
        let mut h = FieldElement29x4::reduce(self.0).0;

        // Let h be the value to normalize.  Since h < 2p, h = pq + r
        // with q = 0 or 1, and h >= p <==> h + 19 >= 2^255.  Therefore q
        // can be computed as the carry bit of h + 19.
        let mut q = (h[0] + u64x4::splat(19)).shr::<29>();
        for limb in &h[1..8] {
            q = (*limb + q).shr::<29>();
        }
        q = (h[8] + q).shr::<23>();

        // Now we can compute r as r = h - pq = h + 19q - 2^255 q
        h[0] += q.shl::<4>() + q.shl::<1>() + q;
        for i in 0..8 {
            h[i + 1] += h[i].shr::<29>();
            h[i] &= low_29_bits;
        }
        // Discard the 2^255 q carried into the top of h[8].
        h[8] &= low_23_bits;

        FieldElement29x4(h)
    }

    /// Return `b` in the lanes where `mask` is all ones and `a`
    /// elsewhere.
    #[inline]
    pub(crate) fn conditional_select(
        a: &FieldElement29x4,
        b: &FieldElement29x4,
        mask: u64x4,
    ) -> FieldElement29x4 {
        let mut out = *a;
        for (o, y) in out.0.iter_mut().zip(b.0.iter()) {
            *o ^= (*o ^ *y) & mask;
        }
        out
    }

    /// Swap `a` and `b` in the lanes where `mask` is all ones.
    #[inline]
    pub(crate) fn conditional_swap(a: &mut FieldElement29x4, b: &mut FieldElement29x4, mask: u64x4) {
        for (x, y) in a.0.iter_mut().zip(b.0.iter_mut()) {
            let t = (*x ^ *y) & mask;
            *x ^= t;
            *y ^= t;
        }
    }

    /// Negate the lanes where `mask` is all ones.
    #[inline]
    pub(crate) fn conditional_negate(&mut self, mask: u64x4) {
        let negated = -&*self;
        *self = FieldElement29x4::conditional_select(self, &negated, mask);
    }
}

impl<'a, 'b> Add<&'b FieldElement29x4> for &'a FieldElement29x4 {
    type Output = FieldElement29x4;

    /// Add limb-wise, without carrying.
    ///
    /// Both operands must be reduced; the output is in the *sum* class.
    #[inline]
    fn add(self, rhs: &'b FieldElement29x4) -> FieldElement29x4 {
        let mut z = self.0;
        for (x, y) in z.iter_mut().zip(rhs.0.iter()) {
            *x += *y;
        }
        FieldElement29x4(z)
    }
}

impl<'a, 'b> Sub<&'b FieldElement29x4> for &'a FieldElement29x4 {
    type Output = FieldElement29x4;

    /// Subtract with borrow correction.
    ///
    /// Computes `(4p + self) - rhs` limb-wise, which is non-negative in
    /// every limb for operands of either bound class, then carries.
    #[inline]
    fn sub(self, rhs: &'b FieldElement29x4) -> FieldElement29x4 {
        let mut z = self.0;
        for ((x, y), p4) in z.iter_mut().zip(rhs.0.iter()).zip(P_TIMES_4.iter()) {
            *x = (*x + u64x4::splat(*p4)) - *y;
        }
        FieldElement29x4::reduce(z)
    }
}

impl<'a> Neg for &'a FieldElement29x4 {
    type Output = FieldElement29x4;

    #[inline]
    fn neg(self) -> FieldElement29x4 {
        &FieldElement29x4::ZERO - self
    }
}

impl<'a, 'b> Mul<&'b FieldElement29x4> for &'a FieldElement29x4 {
    type Output = FieldElement29x4;

    /// Multiply by product scanning.
    ///
    /// Each column of partial products is accumulated on top of the
    /// carry out of the previous column and then masked to 29 bits, so
    /// the accumulator never holds more than nine products plus a
    /// carry: \\(9 (2\^{30} + 2\^{18})\^2 + 2\^{35} < 2\^{64}\\).
    #[inline]
    fn mul(self, rhs: &'b FieldElement29x4) -> FieldElement29x4 {
        let (x, y) = (&self.0, &rhs.0);
        let mask = u64x4::splat(LOW_29_BITS);

        let mut z = [u64x4::ZERO; 18];
        let mut acc = u64x4::ZERO;
        for k in 0usize..17 {
            for i in k.saturating_sub(8)..=k.min(8) {
                acc += x[i].mul32(y[k - i]);
            }
            z[k] = acc & mask;
            acc = acc.shr::<29>();
        }
        z[17] = acc;

        FieldElement29x4::reduce_wide(z)
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for FieldElement29x4 {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

#[cfg(test)]
mod test {
    use super::*;

    /// p = 2^255 - 19 in radix 2^29.
    const P_LIMBS: [u32; 9] = [
        0x1fff_ffed, 0x1fff_ffff, 0x1fff_ffff, 0x1fff_ffff, 0x1fff_ffff, 0x1fff_ffff, 0x1fff_ffff,
        0x1fff_ffff, 0x007f_ffff,
    ];

    /// The largest limbs a reduced element may carry.
    const MAX_REDUCED: [u32; 9] = [
        0x1fff_ffff, 0x2001_ffff, 0x1fff_ffff, 0x1fff_ffff, 0x1fff_ffff, 0x1fff_ffff, 0x1fff_ffff,
        0x1fff_ffff, 0x007f_ffff,
    ];

    fn lanes(limbs: [u32; 9]) -> FieldElement29x4 {
        // Bypass `new`, which would reduce.
        let mut z = [u64x4::ZERO; 9];
        for (i, limb) in z.iter_mut().enumerate() {
            *limb = u64x4::splat(limbs[i] as u64);
        }
        FieldElement29x4(z)
    }

    fn small(lanes: [u32; 4]) -> FieldElement29x4 {
        let mut l = [[0u32; 9]; 4];
        for (out, x) in l.iter_mut().zip(lanes.iter()) {
            out[0] = *x;
        }
        FieldElement29x4::new(&l)
    }

    #[test]
    fn normalize_maps_p_to_zero() {
        let p = lanes(P_LIMBS);
        assert_eq!(p.normalize().split(), [[0u32; 9]; 4]);
    }

    #[test]
    fn normalize_is_idempotent() {
        let x = lanes(MAX_REDUCED);
        let n = x.normalize();
        assert_eq!(n.split(), n.normalize().split());
        for lane in n.split() {
            assert!(lane[..8].iter().all(|l| *l < (1 << 29)));
            assert!(lane[8] < (1 << 23));
        }
    }

    #[test]
    fn small_values_multiply_per_lane() {
        let a = small([2, 3, 5, 7]);
        let b = small([11, 13, 17, 19]);
        let c = (&a * &b).normalize().split();
        assert_eq!([c[0][0], c[1][0], c[2][0], c[3][0]], [22, 39, 85, 133]);
        assert!(c.iter().all(|lane| lane[1..].iter().all(|l| *l == 0)));
    }

    #[test]
    fn subtraction_wraps_mod_p() {
        let a = small([1, 0, 5, 9]);
        let b = small([2, 0, 5, 4]);
        let c = (&a - &b).normalize().split();
        // 1 - 2 = p - 1
        let mut p_minus_1 = P_LIMBS;
        p_minus_1[0] -= 1;
        assert_eq!(c[0], p_minus_1);
        assert_eq!(c[1], [0; 9]);
        assert_eq!(c[2], [0; 9]);
        assert_eq!(c[3][0], 5);
    }

    #[test]
    fn square_matches_mul_at_the_bounds() {
        // A lazy sum of two maximal reduced elements is the widest operand
        // a multiplication has to accept.
        let x = lanes(MAX_REDUCED);
        let s = &x + &x;
        assert_eq!((&s * &s).normalize().split(), s.square().normalize().split());
        assert_eq!(
            (&s * &x).normalize().split(),
            (&x * &s).normalize().split()
        );
    }

    #[test]
    fn negation_adds_back_to_zero() {
        let x = lanes(MAX_REDUCED);
        let sum = &x + &(-&x);
        assert_eq!(sum.normalize().split(), [[0u32; 9]; 4]);
    }

    #[test]
    fn mul_small_matches_mul() {
        let x = lanes(MAX_REDUCED);
        let c = small([121666; 4]);
        assert_eq!(
            x.mul_small(121666).normalize().split(),
            (&x * &c).normalize().split()
        );
    }

    #[test]
    fn conditional_ops_respect_lane_masks() {
        let a = small([1, 2, 3, 4]);
        let b = small([5, 6, 7, 8]);
        let mask = u64x4::new(0, u64::MAX, 0, u64::MAX);

        let s = FieldElement29x4::conditional_select(&a, &b, mask).split();
        assert_eq!([s[0][0], s[1][0], s[2][0], s[3][0]], [1, 6, 3, 8]);

        let (mut x, mut y) = (a, b);
        FieldElement29x4::conditional_swap(&mut x, &mut y, mask);
        let (x, y) = (x.split(), y.split());
        assert_eq!([x[0][0], x[1][0], x[2][0], x[3][0]], [1, 6, 3, 8]);
        assert_eq!([y[0][0], y[1][0], y[2][0], y[3][0]], [5, 2, 7, 4]);

        let mut n = a;
        n.conditional_negate(mask);
        let n = n.normalize().split();
        assert_eq!(n[0][0], 1);
        assert_eq!(n[1][0], P_LIMBS[0] - 2);
    }

    #[test]
    fn u64_words_unpack() {
        // 2^255 - 20 = p - 1.
        let w = [
            u64x4::splat(0xffff_ffff_ffff_ffec),
            u64x4::splat(u64::MAX),
            u64x4::splat(u64::MAX),
            u64x4::splat(0x7fff_ffff_ffff_ffff),
        ];
        let mut p_minus_1 = P_LIMBS;
        p_minus_1[0] -= 1;
        assert_eq!(FieldElement29x4::from_u64_words(&w).split(), [p_minus_1; 4]);
    }
}
