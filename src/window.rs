// -*- mode: rust; -*-
//
// This file is part of curve25519-x4.
// Copyright (c) 2016-2021 isis lovecruft
// Copyright (c) 2016-2019 Henry de Valence
// See LICENSE for licensing information.

//! Code for fixed-window functionality

#![allow(non_snake_case)]

use crate::backend::vector::packed_simd::u64x4;
use crate::traits::Identity;

/// A type that a table entry can be copied onto, lane by lane.
///
/// This is the lane-batched counterpart of `ConditionallySelectable`:
/// instead of one `Choice`, the condition is a mask holding all ones in
/// the lanes that take `entry` and all zeros in the lanes that keep
/// their value.
pub(crate) trait LaneSelectable<Entry>: Identity {
    /// Overwrite the lanes of `self` selected by `mask` with `entry`.
    fn assign_lanes(&mut self, entry: &Entry, mask: u64x4);
}

/// A lookup table of precomputed multiples of a point \\(P\\), used to
/// compute \\( xP \\) for \\( -8 \leq x \leq 8 \\).
///
/// The computation of \\( xP \\) is done in constant time by the `select` function.
///
/// Since `LookupTable` does not implement `Index`, it's more difficult
/// to accidentally use the table directly.  Unfortunately the table is
/// only `pub(crate)` so that we can write hardcoded constants, so it's
/// still technically possible.  It would be nice to prevent direct
/// access to the table.
#[derive(Copy, Clone, Debug)]
pub(crate) struct LookupTable<T>(pub(crate) [T; 8]);

impl<E> LookupTable<E> {
    /// Given a vector of magnitudes \\( 0 \leq |x| \leq 8 \\), return
    /// \\( |x| P \\) in every lane, in constant time.
    ///
    /// Every entry is read for every lane.  A magnitude of zero gives
    /// the identity.
    pub(crate) fn select<T: LaneSelectable<E>>(&self, xabs: u64x4) -> T {
        // Set t = 0 * P = identity
        let mut t = T::identity();
        for j in 1..9 {
            // Copy `points[j-1] == j*P` onto `t` in the lanes where `|x| == j`.
            let c = xabs.eq_mask(u64x4::splat(j as u64));
            t.assign_lanes(&self.0[j - 1], c);
        }
        // Now t == |x| * P.
        t
    }
}

/// Split a vector of signed digits, held in two's complement, into
/// their magnitudes and a mask of the negative lanes.
#[inline]
pub(crate) fn abs_and_sign(x: u64x4) -> (u64x4, u64x4) {
    let sign = x.shr::<63>().bit_to_mask();
    let xabs = (x ^ sign) - sign;
    (xabs, sign)
}

#[cfg(test)]
mod test {
    use super::*;
    use std::vec::Vec;

    /// Records every entry it is offered, and which lanes took it.
    struct Recorder {
        visited: Vec<u8>,
        lanes: [u8; 4],
    }

    impl Identity for Recorder {
        fn identity() -> Recorder {
            Recorder {
                visited: Vec::new(),
                lanes: [0; 4],
            }
        }
    }

    impl LaneSelectable<u8> for Recorder {
        fn assign_lanes(&mut self, entry: &u8, mask: u64x4) {
            self.visited.push(*entry);
            for (lane, m) in self.lanes.iter_mut().zip(mask.to_array().iter()) {
                assert!(*m == 0 || *m == u64::MAX);
                if *m != 0 {
                    *lane = *entry;
                }
            }
        }
    }

    const TABLE: LookupTable<u8> = LookupTable([1, 2, 3, 4, 5, 6, 7, 8]);

    fn digits(x: [i64; 4]) -> u64x4 {
        u64x4::new(x[0] as u64, x[1] as u64, x[2] as u64, x[3] as u64)
    }

    #[test]
    fn every_digit_visits_every_entry() {
        for x in -8i64..=8 {
            let (xabs, _) = abs_and_sign(digits([x, -x, 0, x]));
            let r: Recorder = TABLE.select(xabs);
            assert_eq!(r.visited, [1, 2, 3, 4, 5, 6, 7, 8]);
            let a = x.unsigned_abs() as u8;
            assert_eq!(r.lanes, [a, a, 0, a]);
        }
    }

    #[test]
    fn sign_mask_marks_negative_lanes() {
        let (xabs, sign) = abs_and_sign(digits([-8, 8, 0, -1]));
        assert_eq!(xabs.to_array(), [8, 8, 0, 1]);
        assert_eq!(sign.to_array(), [u64::MAX, 0, 0, u64::MAX]);
    }
}
