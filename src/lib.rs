// -*- mode: rust; -*-
//
// This file is part of curve25519-x4.
// Copyright (c) 2016-2021 isis lovecruft
// Copyright (c) 2016-2019 Henry de Valence
// See LICENSE for licensing information.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg, doc_cfg_hide))]
#![cfg_attr(docsrs, doc(cfg_hide(docsrs)))]
//------------------------------------------------------------------------
// Documentation:
//------------------------------------------------------------------------
#![doc = include_str!("../README.md")]
//------------------------------------------------------------------------
// Linting:
//------------------------------------------------------------------------
#![cfg_attr(allow_unused_unsafe, allow(unused_unsafe))]
#![warn(
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

//------------------------------------------------------------------------
// External dependencies:
//------------------------------------------------------------------------

#[cfg(test)]
#[macro_use]
extern crate std;

//------------------------------------------------------------------------
// curve25519-x4 public modules
//------------------------------------------------------------------------

// X25519 key agreement over four lanes
pub mod x25519;

// The Montgomery u-line, and the encoded points exchanged as public keys
pub mod montgomery;

// Scalar clamping
pub mod scalar;

// Useful constants, like the X25519 basepoint
pub mod constants;

// Conversions between 32-bit words and 29-bit limbs, and hex output
pub mod radix;

// Lane implementations (AVX2 or portable)
pub mod backend;

//------------------------------------------------------------------------
// curve25519-x4 internal modules
//------------------------------------------------------------------------

// Finite field arithmetic mod p = 2^255 - 19
pub(crate) mod field;

// Point operations on the Edwards form, for the fixed-base comb
pub(crate) mod edwards;

// Generic code for window lookups
pub(crate) mod window;

// Traits shared by the point types
pub(crate) mod traits;

//------------------------------------------------------------------------
// Re-exports
//------------------------------------------------------------------------

pub use crate::backend::{selected_backend, BackendKind};
pub use crate::montgomery::MontgomeryPoint;
pub use crate::scalar::clamp_integer;
pub use crate::x25519::{keygen, shared_secret, x25519, SharedSecret, X25519_BASEPOINT_BYTES};
