// -*- mode: rust; -*-
//
// This file is part of curve25519-x4.
// See LICENSE for licensing information.

//! This module defines a wrapper over four packed 64-bit lanes, so that the
//! field arithmetic can be written once and run on either the AVX2 registers
//! or a portable array.
//!
//! Every operation is lane-wise.  There is no operation that moves data
//! between lanes, so the four instances carried by a `u64x4` can never
//! observe each other.
//!
//! UNSAFETY: The AVX2 implementation is only compiled when the `avx2` target
//!           feature is statically enabled for the whole crate, so the
//!           intrinsics are always available where they are called.

#![allow(non_camel_case_types)]

use core::ops::{Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign};
use core::ops::{Sub, SubAssign};

use cfg_if::cfg_if;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

cfg_if! {
    if #[cfg(all(
        target_arch = "x86_64",
        target_feature = "avx2",
        not(curve25519_x4_backend = "portable")
    ))] {
        use core::arch::x86_64::__m256i;

        /// Four packed `u64` lanes held in an AVX2 register.
        #[derive(Copy, Clone, Debug)]
        #[repr(transparent)]
        pub(crate) struct u64x4(__m256i);

        // We define SIMD functionality over packed unsigned integer types. However, all the
        // integer intrinsics deal with signed integers. Wrapping add/sub and logical shifts give
        // the same bits for two's complement signed and unsigned integers, so casting between
        // them at the boundary is sound.
        macro_rules! impl_binop {
            ($trait:ident, $fn:ident, $assign_trait:ident, $assign_fn:ident, $intrinsic:ident) => {
                impl $trait for u64x4 {
                    type Output = u64x4;

                    #[inline(always)]
                    #[allow(unused_unsafe)]
                    fn $fn(self, rhs: u64x4) -> u64x4 {
                        // SAFETY: avx2 is statically enabled for this build.
                        unsafe { u64x4(core::arch::x86_64::$intrinsic(self.0, rhs.0)) }
                    }
                }

                impl $assign_trait for u64x4 {
                    #[inline(always)]
                    fn $assign_fn(&mut self, rhs: u64x4) {
                        *self = $trait::$fn(*self, rhs);
                    }
                }
            };
        }

        impl_binop!(Add, add, AddAssign, add_assign, _mm256_add_epi64);
        impl_binop!(Sub, sub, SubAssign, sub_assign, _mm256_sub_epi64);
        impl_binop!(BitAnd, bitand, BitAndAssign, bitand_assign, _mm256_and_si256);
        impl_binop!(BitOr, bitor, BitOrAssign, bitor_assign, _mm256_or_si256);
        impl_binop!(BitXor, bitxor, BitXorAssign, bitxor_assign, _mm256_xor_si256);

        #[allow(unused_unsafe)]
        impl u64x4 {
            /// A constified variant of `new`.
            ///
            /// Should only be called from `const` contexts. At runtime `new` is going to be faster.
            #[inline]
            pub(crate) const fn new_const(x0: u64, x1: u64, x2: u64, x3: u64) -> u64x4 {
                // SAFETY: Transmuting between an array and a SIMD type is safe
                // https://rust-lang.github.io/unsafe-code-guidelines/layout/packed-simd-vectors.html
                unsafe { u64x4(core::mem::transmute::<[u64; 4], __m256i>([x0, x1, x2, x3])) }
            }

            /// Constructs a new instance.
            #[inline]
            pub(crate) fn new(x0: u64, x1: u64, x2: u64, x3: u64) -> u64x4 {
                // SAFETY: avx2 is statically enabled for this build.
                unsafe {
                    // _mm256_set_epi64 sets the underlying vector in reverse order of the args
                    u64x4(core::arch::x86_64::_mm256_set_epi64x(
                        x3 as i64, x2 as i64, x1 as i64, x0 as i64,
                    ))
                }
            }

            /// Constructs a new instance with all of the elements initialized to the given value.
            #[inline]
            pub(crate) fn splat(x: u64) -> u64x4 {
                // SAFETY: avx2 is statically enabled for this build.
                unsafe { u64x4(core::arch::x86_64::_mm256_set1_epi64x(x as i64)) }
            }

            /// Copy the four lanes out into an array, lane 0 first.
            #[inline]
            pub(crate) fn to_array(self) -> [u64; 4] {
                let mut out = [0u64; 4];
                // SAFETY: `out` is 32 bytes long and the store is unaligned.
                unsafe {
                    core::arch::x86_64::_mm256_storeu_si256(out.as_mut_ptr() as *mut __m256i, self.0);
                }
                out
            }

            /// Multiply the low unsigned 32 bits of each lane, producing
            /// full 64-bit products.
            #[inline(always)]
            pub(crate) fn mul32(self, rhs: u64x4) -> u64x4 {
                // SAFETY: avx2 is statically enabled for this build.
                unsafe { u64x4(core::arch::x86_64::_mm256_mul_epu32(self.0, rhs.0)) }
            }

            /// Logical left shift of every lane by `N`.
            #[inline(always)]
            pub(crate) fn shl<const N: i32>(self) -> u64x4 {
                // SAFETY: avx2 is statically enabled for this build.
                unsafe { u64x4(core::arch::x86_64::_mm256_slli_epi64::<N>(self.0)) }
            }

            /// Logical right shift of every lane by `N`.
            #[inline(always)]
            pub(crate) fn shr<const N: i32>(self) -> u64x4 {
                // SAFETY: avx2 is statically enabled for this build.
                unsafe { u64x4(core::arch::x86_64::_mm256_srli_epi64::<N>(self.0)) }
            }

            /// Logical right shift of every lane by a runtime amount `n < 64`.
            ///
            /// The amount is the same for every lane, so it must not be secret.
            #[inline(always)]
            pub(crate) fn shr_var(self, n: u32) -> u64x4 {
                debug_assert!(n < 64);
                // SAFETY: avx2 is statically enabled for this build.
                unsafe {
                    u64x4(core::arch::x86_64::_mm256_srlv_epi64(
                        self.0,
                        core::arch::x86_64::_mm256_set1_epi64x(n as i64),
                    ))
                }
            }
        }
    } else {
        /// Four `u64` lanes held in an ordinary array.
        ///
        /// This has exactly the semantics of the AVX2 variant; the compiler
        /// is free to vectorize the lane loops.
        #[derive(Copy, Clone, Debug)]
        #[repr(transparent)]
        pub(crate) struct u64x4([u64; 4]);

        macro_rules! impl_binop {
            ($trait:ident, $fn:ident, $assign_trait:ident, $assign_fn:ident, |$a:ident, $b:ident| $op:expr) => {
                impl $trait for u64x4 {
                    type Output = u64x4;

                    #[inline(always)]
                    fn $fn(self, rhs: u64x4) -> u64x4 {
                        self.zip(rhs, |$a, $b| $op)
                    }
                }

                impl $assign_trait for u64x4 {
                    #[inline(always)]
                    fn $assign_fn(&mut self, rhs: u64x4) {
                        *self = $trait::$fn(*self, rhs);
                    }
                }
            };
        }

        impl_binop!(Add, add, AddAssign, add_assign, |a, b| a.wrapping_add(b));
        impl_binop!(Sub, sub, SubAssign, sub_assign, |a, b| a.wrapping_sub(b));
        impl_binop!(BitAnd, bitand, BitAndAssign, bitand_assign, |a, b| a & b);
        impl_binop!(BitOr, bitor, BitOrAssign, bitor_assign, |a, b| a | b);
        impl_binop!(BitXor, bitxor, BitXorAssign, bitxor_assign, |a, b| a ^ b);

        impl u64x4 {
            /// A constified variant of `new`.
            #[inline]
            pub(crate) const fn new_const(x0: u64, x1: u64, x2: u64, x3: u64) -> u64x4 {
                u64x4([x0, x1, x2, x3])
            }

            /// Constructs a new instance.
            #[inline]
            pub(crate) fn new(x0: u64, x1: u64, x2: u64, x3: u64) -> u64x4 {
                u64x4([x0, x1, x2, x3])
            }

            /// Constructs a new instance with all of the elements initialized to the given value.
            #[inline]
            pub(crate) fn splat(x: u64) -> u64x4 {
                u64x4([x; 4])
            }

            /// Copy the four lanes out into an array, lane 0 first.
            #[inline]
            pub(crate) fn to_array(self) -> [u64; 4] {
                self.0
            }

            #[inline(always)]
            fn map(self, f: impl Fn(u64) -> u64) -> u64x4 {
                let [a0, a1, a2, a3] = self.0;
                u64x4([f(a0), f(a1), f(a2), f(a3)])
            }

            #[inline(always)]
            fn zip(self, rhs: u64x4, f: impl Fn(u64, u64) -> u64) -> u64x4 {
                let [a0, a1, a2, a3] = self.0;
                let [b0, b1, b2, b3] = rhs.0;
                u64x4([f(a0, b0), f(a1, b1), f(a2, b2), f(a3, b3)])
            }

            /// Multiply the low unsigned 32 bits of each lane, producing
            /// full 64-bit products.
            #[inline(always)]
            pub(crate) fn mul32(self, rhs: u64x4) -> u64x4 {
                self.zip(rhs, |a, b| (a & 0xffff_ffff) * (b & 0xffff_ffff))
            }

            /// Logical left shift of every lane by `N`.
            #[inline(always)]
            pub(crate) fn shl<const N: i32>(self) -> u64x4 {
                self.map(|a| a << N)
            }

            /// Logical right shift of every lane by `N`.
            #[inline(always)]
            pub(crate) fn shr<const N: i32>(self) -> u64x4 {
                self.map(|a| a >> N)
            }

            /// Logical right shift of every lane by a runtime amount `n < 64`.
            ///
            /// The amount is the same for every lane, so it must not be secret.
            #[inline(always)]
            pub(crate) fn shr_var(self, n: u32) -> u64x4 {
                debug_assert!(n < 64);
                self.map(|a| a >> n)
            }
        }
    }
}

impl u64x4 {
    /// All lanes zero.
    pub(crate) const ZERO: u64x4 = u64x4::splat_const::<0>();

    /// A constified variant of `splat`.
    ///
    /// Should only be called from `const` contexts. At runtime `splat` is going to be faster.
    #[inline]
    pub(crate) const fn splat_const<const N: u64>() -> u64x4 {
        u64x4::new_const(N, N, N, N)
    }

    /// Like `splat_const`, for values that are not const generic arguments.
    #[inline]
    pub(crate) const fn splat_value(x: u64) -> u64x4 {
        u64x4::new_const(x, x, x, x)
    }

    /// Return an all-ones lane wherever `self` and `other` agree, and an
    /// all-zeros lane elsewhere.
    #[inline(always)]
    pub(crate) fn eq_mask(self, other: u64x4) -> u64x4 {
        let x = self ^ other;
        // The top bit of x | -x is set exactly when x is nonzero.
        let nonzero = (x | (u64x4::ZERO - x)).shr::<63>();
        nonzero - u64x4::splat(1)
    }

    /// Turn lanes holding `0` or `1` into all-zeros or all-ones masks.
    #[inline(always)]
    pub(crate) fn bit_to_mask(self) -> u64x4 {
        u64x4::ZERO - self
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for u64x4 {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn lanes_round_trip_in_order() {
        let x = u64x4::new(1, 2, 3, u64::MAX);
        assert_eq!(x.to_array(), [1, 2, 3, u64::MAX]);
        assert_eq!(u64x4::new_const(1, 2, 3, u64::MAX).to_array(), x.to_array());
        assert_eq!(u64x4::splat(7).to_array(), [7; 4]);
    }

    #[test]
    fn arithmetic_wraps_per_lane() {
        let a = u64x4::new(0, 1, u64::MAX, 5);
        let b = u64x4::new(1, 1, 1, 7);
        assert_eq!((a + b).to_array(), [1, 2, 0, 12]);
        assert_eq!((a - b).to_array(), [u64::MAX, 0, u64::MAX - 1, u64::MAX - 1]);
    }

    #[test]
    fn mul32_uses_low_halves() {
        let a = u64x4::new(0xffff_ffff, 3, (1 << 32) | 2, 0);
        let b = u64x4::new(0xffff_ffff, 5, 7, 9);
        assert_eq!(
            a.mul32(b).to_array(),
            [0xffff_fffe_0000_0001, 15, 14, 0]
        );
    }

    #[test]
    fn shifts() {
        let a = u64x4::new(1, 1 << 63, 0xff, 3);
        assert_eq!(a.shl::<4>().to_array(), [16, 0, 0xff0, 48]);
        assert_eq!(a.shr::<63>().to_array(), [0, 1, 0, 0]);
        assert_eq!(a.shr_var(1).to_array(), [0, 1 << 62, 0x7f, 1]);
    }

    #[test]
    fn eq_mask_is_all_or_nothing() {
        let a = u64x4::new(0, 5, u64::MAX, 1 << 63);
        let b = u64x4::new(0, 6, u64::MAX, 0);
        assert_eq!(a.eq_mask(b).to_array(), [u64::MAX, 0, u64::MAX, 0]);
        assert_eq!(
            u64x4::new(0, 1, 1, 0).bit_to_mask().to_array(),
            [0, u64::MAX, u64::MAX, 0]
        );
    }
}
