// -*- mode: rust; -*-
//
// This file is part of curve25519-x4.
// Copyright (c) 2016-2021 isis lovecruft
// Copyright (c) 2016-2019 Henry de Valence
// See LICENSE for licensing information.

//! Four-way vectorized field arithmetic.
//!
//! Each value carries four independent instances, one per 64-bit lane.
//! Nothing in this module moves data between lanes.

pub(crate) mod packed_simd;

pub(crate) mod field;
