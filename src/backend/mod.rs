// -*- mode: rust; -*-
//
// This file is part of curve25519-x4.
// Copyright (c) 2016-2021 isis lovecruft
// Copyright (c) 2016-2019 Henry de Valence
// See LICENSE for licensing information.

//! **INTERNALS:** Lane implementations for different architectures.
//!
//! All arithmetic is written once, against the four-lane `u64x4` type
//! of the `vector` backend.  What changes between targets is only how
//! a `u64x4` is held:
//!
//! * on `x86_64` with the `avx2` target feature enabled at compile time,
//!   a `u64x4` is a 256-bit AVX2 register;
//! * everywhere else, it is a `[u64; 4]` with the same semantics.
//!
//! The portable lanes can be forced on any target with
//! `RUSTFLAGS='--cfg curve25519_x4_backend="portable"'`.  There is no
//! runtime detection: build with `-C target-feature=+avx2` (or
//! `-C target-cpu=native`) to get the AVX2 lanes.

pub(crate) mod vector;

/// The lane implementation compiled into this build.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BackendKind {
    /// Four 64-bit lanes in one AVX2 register.
    Avx2,
    /// Four 64-bit lanes in an array.
    Portable,
}

/// Report which lane implementation this build uses.
#[inline]
pub const fn selected_backend() -> BackendKind {
    if cfg!(all(
        target_arch = "x86_64",
        target_feature = "avx2",
        not(curve25519_x4_backend = "portable")
    )) {
        BackendKind::Avx2
    } else {
        BackendKind::Portable
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn backend_follows_target_features() {
        #[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
        let expected = if cfg!(curve25519_x4_backend = "portable") {
            BackendKind::Portable
        } else {
            BackendKind::Avx2
        };
        #[cfg(not(all(target_arch = "x86_64", target_feature = "avx2")))]
        let expected = BackendKind::Portable;

        assert_eq!(selected_backend(), expected);
    }
}
