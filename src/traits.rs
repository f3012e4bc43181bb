// -*- mode: rust; -*-
//
// This file is part of curve25519-x4.
// Copyright (c) 2016-2021 isis lovecruft
// Copyright (c) 2016-2019 Henry de Valence
// See LICENSE for licensing information.

//! Module for common traits.

#![allow(non_snake_case)]

// ------------------------------------------------------------------------
// Point traits
// ------------------------------------------------------------------------

/// Trait for getting the identity element of a point type.
pub(crate) trait Identity {
    /// Returns the identity element of the curve.
    /// Can be used as a constructor.
    fn identity() -> Self;
}
