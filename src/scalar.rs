// -*- mode: rust; -*-
//
// This file is part of curve25519-x4.
// Copyright (c) 2016-2021 isis lovecruft
// Copyright (c) 2016-2019 Henry de Valence
// Portions Copyright 2017 Brian Smith
// See LICENSE for licensing information.

//! Four X25519 scalars, clamping, and the signed radix-16 recoding used
//! by the fixed-base comb.
//!
//! Unlike curve25519-dalek's `Scalar`, a `Scalar32x4` is never reduced
//! modulo the group order: the only thing done with it is scalar-point
//! multiplication, which is well defined for any integer below
//! \\(2\^{255}\\).  Clamping guarantees that bound.
//!
//! Every operation here is lane-wise, and the control flow of each
//! depends only on bit positions, never on the bits themselves.

use crate::backend::vector::packed_simd::u64x4;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// Four 256-bit integers, each held as eight little-endian 32-bit words
/// with one word per lane of a `u64x4`.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Scalar32x4(pub(crate) [u64x4; 8]);

impl Scalar32x4 {
    /// Load four scalars from their 32-byte little-endian encodings.
    ///
    /// No bits are cleared or set; see [`Scalar32x4::clamp`].
    pub(crate) fn from_bytes(bytes: &[[u8; 32]; 4]) -> Scalar32x4 {
        let word = |lane: usize, i: usize| -> u64 {
            let b = &bytes[lane][4 * i..4 * i + 4];
            u32::from_le_bytes([b[0], b[1], b[2], b[3]]) as u64
        };

        let mut w = [u64x4::ZERO; 8];
        for (i, wi) in w.iter_mut().enumerate() {
            *wi = u64x4::new(word(0, i), word(1, i), word(2, i), word(3, i));
        }
        Scalar32x4(w)
    }

    /// Clamp every lane the way X25519 does: clear the three low bits,
    /// clear bit 255 and set bit 254.
    ///
    /// The result is a multiple of the cofactor 8 in
    /// \\([2\^{254}, 2\^{255})\\), so the ladder and the comb always run
    /// over the same number of bits.  Clamping is idempotent.
    pub(crate) fn clamp(&self) -> Scalar32x4 {
        let mut w = self.0;
        w[0] &= u64x4::splat(0xffff_fff8);
        w[7] &= u64x4::splat(0x7fff_ffff);
        w[7] |= u64x4::splat(0x4000_0000);
        Scalar32x4(w)
    }

    /// Bit `i` of every lane, as `0` or `1`.
    ///
    /// The position `i` is public; only the lane values are secret.
    #[inline(always)]
    pub(crate) fn bit(&self, i: usize) -> u64x4 {
        debug_assert!(i < 256);
        self.0[i / 32].shr_var((i % 32) as u32) & u64x4::splat(1)
    }

    /// Write every lane in radix 16, with coefficients in \\([-8,8)\\),
    /// i.e., compute \\(a\_i\\) such that
    /// $$
    ///    a = a\_0 + a\_1 16\^1 + \cdots + a_{63} 16\^{63},
    /// $$
    /// with \\(-8 \leq a_i < 8\\) for \\(0 \leq i < 63\\) and \\(-8 \leq a_{63} \leq 8\\).
    ///
    /// Negative digits are returned in two's complement across the full
    /// 64-bit lane.  Every lane MUST be less than \\(2\^{255}\\), which
    /// clamping guarantees.
    pub(crate) fn as_radix_16(&self) -> [u64x4; 64] {
        let nibble = u64x4::splat(15);
        let mut output = [u64x4::ZERO; 64];

        // Step 1: change radix.
        // Convert from radix 2^32 (words) to radix 16 (nibbles)
        for (i, w) in self.0.iter().enumerate() {
            for j in 0..8 {
                output[8 * i + j] = w.shr_var(4 * j as u32) & nibble;
            }
        }
        // Precondition note: since every lane is below 2^255, output[63] <= 7

        // Step 2: recenter coefficients from [0,16) to [-8,8)
        let eight = u64x4::splat(8);
        for i in 0..63 {
            // output[i] is in [0, 16] here, so the shift sees a small
            // non-negative value.
            let carry = (output[i] + eight).shr::<4>();
            output[i] -= carry.shl::<4>();
            output[i + 1] += carry;
        }
        // Precondition note: output[63] is not recentered.  It
        // increases by carry <= 1.  Thus output[63] <= 8.

        output
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for Scalar32x4 {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

/// _Clamps_ the given little-endian representation of a 32-byte integer. Clamping the value puts
/// it in the range:
///
/// **n ∈ 2^254 + 8\*{0, 1, 2, 3, . . ., 2^251 − 1}**
///
/// # Explanation of clamping
///
/// For Curve25519, h = 8, and multiplying by 8 is the same as a binary left-shift by 3 bits.
/// If you take a secret scalar value between 2^251 and 2^252 – 1 and left-shift by 3 bits
/// then you end up with a 255-bit number with the most significant bit set to 1 and
/// the least-significant three bits set to 0.
///
/// The Curve25519 clamping operation takes **an arbitrary 256-bit random value** and
/// clears the most-significant bit (making it a 255-bit number), sets the next bit, and then
/// clears the 3 least-significant bits. In other words, it directly creates a scalar value that is
/// in the right form and pre-multiplied by the cofactor.
///
/// See [here](https://neilmadden.blog/2020/05/28/whats-the-curve25519-clamping-all-about/) for
/// more details.
#[must_use]
pub const fn clamp_integer(mut bytes: [u8; 32]) -> [u8; 32] {
    bytes[0] &= 0b1111_1000;
    bytes[31] &= 0b0111_1111;
    bytes[31] |= 0b0100_0000;
    bytes
}

#[cfg(test)]
mod test {
    use super::*;

    /// x = 2238329342913194256032495932344128051776374960164957527413114840482143558222
    static X_BYTES: [u8; 32] = [
        0x4e, 0x5a, 0xb4, 0x34, 0x5d, 0x47, 0x08, 0x84, 0x59, 0x13, 0xb4, 0x64, 0x1b, 0xc2, 0x7d,
        0x52, 0x52, 0xa5, 0x85, 0x10, 0x1b, 0xcc, 0x42, 0x44, 0xd4, 0x49, 0xf4, 0xa8, 0x79, 0xd9,
        0xf2, 0x04,
    ];

    fn lanes() -> [[u8; 32]; 4] {
        let mut high = [0xffu8; 32];
        high[0] = 0xf7;
        [X_BYTES, [0u8; 32], high, clamp_integer(X_BYTES)]
    }

    fn lane_bytes(s: &Scalar32x4) -> [[u8; 32]; 4] {
        let mut out = [[0u8; 32]; 4];
        for (i, w) in s.0.iter().enumerate() {
            for (lane, word) in w.to_array().iter().enumerate() {
                out[lane][4 * i..4 * i + 4].copy_from_slice(&(*word as u32).to_le_bytes());
            }
        }
        out
    }

    #[test]
    fn from_bytes_keeps_every_bit() {
        assert_eq!(lane_bytes(&Scalar32x4::from_bytes(&lanes())), lanes());
    }

    #[test]
    fn clamp_matches_clamp_integer() {
        let clamped = lane_bytes(&Scalar32x4::from_bytes(&lanes()).clamp());
        for (c, b) in clamped.iter().zip(lanes().iter()) {
            assert_eq!(*c, clamp_integer(*b));
        }
    }

    #[test]
    fn clamp_is_idempotent() {
        let once = Scalar32x4::from_bytes(&lanes()).clamp();
        assert_eq!(lane_bytes(&once.clamp()), lane_bytes(&once));
        for b in lanes() {
            assert_eq!(clamp_integer(clamp_integer(b)), clamp_integer(b));
        }
    }

    #[test]
    fn clamped_bits() {
        let s = Scalar32x4::from_bytes(&lanes()).clamp();
        for i in 0..3 {
            assert_eq!(s.bit(i).to_array(), [0; 4]);
        }
        assert_eq!(s.bit(254).to_array(), [1; 4]);
        assert_eq!(s.bit(255).to_array(), [0; 4]);
        // 0x4e clamps to 0b0100_1000 and 0xf7 to 0b1111_0000.
        assert_eq!(s.bit(3).to_array(), [1, 0, 0, 1]);
        assert_eq!(s.bit(4).to_array(), [0, 0, 1, 0]);
    }

    #[test]
    fn radix_16_digits_are_balanced_and_exact() {
        let s = Scalar32x4::from_bytes(&lanes()).clamp();
        let digits = s.as_radix_16();
        let bytes = lane_bytes(&s);

        for lane in 0..4 {
            let e: [i64; 64] = core::array::from_fn(|i| digits[i].to_array()[lane] as i64);
            for d in &e[..63] {
                assert!((-8..8).contains(d));
            }
            assert!((-8..=8).contains(&e[63]));

            // Undo the recentring and compare nibble by nibble.
            let mut carry = 0i64;
            for (i, d) in e.iter().enumerate() {
                let v = d + carry;
                let nibble = v.rem_euclid(16);
                carry = v.div_euclid(16);
                let expected = (bytes[lane][i / 2] >> (4 * (i % 2))) & 15;
                assert_eq!(nibble, expected as i64);
            }
            assert_eq!(carry, 0);
        }
    }
}
