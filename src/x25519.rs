// -*- mode: rust; -*-
//
// This file is part of curve25519-x4.
// See LICENSE for licensing information.

//! X25519 key agreement, four exchanges per call.
//!
//! Every function here takes and returns arrays of four independent
//! values, one per SIMD lane.  The lanes never interact, so the four
//! entries may belong to unrelated sessions.
//!
//! ```
//! use curve25519_x4::x25519::{keygen, shared_secret};
//!
//! let alice = [[0x11u8; 32], [0x22u8; 32], [0x33u8; 32], [0x44u8; 32]];
//! let bob = [[0x55u8; 32], [0x66u8; 32], [0x77u8; 32], [0x88u8; 32]];
//!
//! let alice_public = keygen(&alice);
//! let bob_public = keygen(&bob);
//!
//! let alice_shared = shared_secret(&alice, &bob_public);
//! let bob_shared = shared_secret(&bob, &alice_public);
//! for (a, b) in alice_shared.iter().zip(bob_shared.iter()) {
//!     assert_eq!(a.as_bytes(), b.as_bytes());
//! }
//! ```
//!
//! No key derivation is applied to the shared secrets; hash them before
//! use as key material.

use subtle::Choice;
use subtle::ConstantTimeEq;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::montgomery::{self, MontgomeryPoint};
use crate::radix;
use crate::scalar::Scalar32x4;

/// The bytes representing the base point of the Montgomery curve, `u = 9`.
pub const X25519_BASEPOINT_BYTES: [u8; 32] = [
    9, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

/// The X25519 function of RFC 7748, in each lane.
///
/// Each scalar `k[i]` is clamped and each `u[i]` has its high bit
/// ignored.  Any input is accepted; an input of small order gives the
/// all-zero output.
pub fn x25519(k: &[[u8; 32]; 4], u: &[[u8; 32]; 4]) -> [[u8; 32]; 4] {
    #[allow(unused_mut)]
    let mut scalar = Scalar32x4::from_bytes(k);
    let out = montgomery::mul_variable_base(&scalar, &u.map(MontgomeryPoint));

    #[cfg(feature = "zeroize")]
    scalar.zeroize();

    out.map(|p| p.0)
}

/// Compute the public keys for four secret keys.
///
/// The secrets are clamped, then multiplied with the basepoint using the
/// precomputed table.  The result equals
/// `x25519(secrets, [X25519_BASEPOINT_BYTES; 4])`.
pub fn keygen(secrets: &[[u8; 32]; 4]) -> [MontgomeryPoint; 4] {
    #[allow(unused_mut)]
    let mut scalar = Scalar32x4::from_bytes(secrets);
    let public = montgomery::mul_base(&scalar);

    #[cfg(feature = "zeroize")]
    scalar.zeroize();

    if log::log_enabled!(log::Level::Trace) {
        for p in public.iter() {
            let words = radix::words_from_le_bytes(p.as_bytes());
            radix::print(log::Level::Trace, "x25519 public key: ", &words);
        }
    }

    public
}

/// Compute the shared secrets between four of our secret keys and four
/// peer public keys.
///
/// Peer keys are not validated.  Check
/// [`SharedSecret::was_contributory`] when the protocol requires it.
pub fn shared_secret(
    secrets: &[[u8; 32]; 4],
    peers: &[MontgomeryPoint; 4],
) -> [SharedSecret; 4] {
    x25519(secrets, &peers.map(|p| p.0)).map(|bytes| SharedSecret(MontgomeryPoint(bytes)))
}

/// The result of a Diffie-Hellman key exchange.
///
/// Each party computes this using their secret key and their
/// counterparty's public key.
///
/// With the `zeroize` feature, the secret is wiped when dropped.
pub struct SharedSecret(pub(crate) MontgomeryPoint);

impl SharedSecret {
    /// Convert this shared secret to a byte array.
    #[inline]
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0.to_bytes()
    }

    /// View this shared secret key as a byte array.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; 32] {
        self.0.as_bytes()
    }

    /// Ensure in constant-time that this shared secret did not result from a
    /// key exchange with non-contributory behaviour.
    ///
    /// In some more exotic protocols which need to guarantee "contributory"
    /// behaviour for both parties, that is, that each party contributed a public
    /// value which increased the security of the resulting shared secret.
    /// To take an example protocol attack where this could lead to undesirable
    /// results [from Thái "thaidn" Dương](https://vnhacker.blogspot.com/2015/09/why-not-validating-curve25519-public.html):
    ///
    /// > If Mallory replaces Alice's and Bob's public keys with zero, which is
    /// > a valid Curve25519 public key, he would be able to force the ECDH
    /// > shared value to be zero, which is the encoding of the point at infinity,
    /// > and thus get to dictate some publicly known values as the shared
    /// > keys. It still requires an active man-in-the-middle attack to pull the
    /// > trick, after which, however, not only Mallory can decode Alice's data,
    /// > but everyone too! It is also impossible for Alice and Bob to detect the
    /// > intrusion, as they still share the same keys, and can communicate with
    /// > each other as normal.
    ///
    /// The original Curve25519 specification argues that checks for
    /// non-contributory behaviour are "unnecessary for Diffie-Hellman".
    /// Whether this check is necessary for any particular given protocol is
    /// often a matter of debate, which we will not re-hash here, but simply
    /// cite some of the [relevant] [public] [discussions].
    ///
    /// # Returns
    ///
    /// Returns `true` if the key exchange was contributory (good), and `false`
    /// otherwise (can be bad for some protocols).
    ///
    /// [relevant]: https://tools.ietf.org/html/rfc7748#page-15
    /// [public]: https://vnhacker.blogspot.com/2015/09/why-not-validating-curve25519-public.html
    /// [discussions]: https://vnhacker.blogspot.com/2016/08/the-internet-of-broken-protocols.html
    #[must_use]
    pub fn was_contributory(&self) -> bool {
        // The output of the ladder is canonical, so comparing bytes is
        // comparing field elements.
        !bool::from(self.0.as_bytes().ct_eq(&[0u8; 32]))
    }
}

impl ConstantTimeEq for SharedSecret {
    fn ct_eq(&self, other: &SharedSecret) -> Choice {
        self.0.as_bytes().ct_eq(other.0.as_bytes())
    }
}

impl AsRef<[u8]> for SharedSecret {
    /// View this shared secret key as a byte array.
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

#[cfg(feature = "zeroize")]
impl Drop for SharedSecret {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::ZeroizeOnDrop for SharedSecret {}

#[cfg(test)]
mod test {
    use super::*;

    fn secrets() -> [[u8; 32]; 4] {
        [[0x01u8; 32], [0xa5u8; 32], [0xffu8; 32], [0u8; 32]]
    }

    #[test]
    fn keygen_matches_x25519_of_basepoint() {
        let public = keygen(&secrets());
        let expected = x25519(&secrets(), &[X25519_BASEPOINT_BYTES; 4]);
        for (p, e) in public.iter().zip(expected.iter()) {
            assert_eq!(p.as_bytes(), e);
        }
    }

    #[test]
    fn basepoint_bytes_match_the_point() {
        assert_eq!(X25519_BASEPOINT_BYTES, crate::constants::X25519_BASEPOINT.to_bytes());
    }

    #[test]
    fn low_order_peers_are_not_contributory() {
        let mut p = [0xffu8; 32];
        p[0] = 0xed;
        p[31] = 0x7f;
        let peers = [
            MontgomeryPoint([0u8; 32]),
            MontgomeryPoint(p),
            MontgomeryPoint({
                let mut one = [0u8; 32];
                one[0] = 1;
                one
            }),
            MontgomeryPoint(X25519_BASEPOINT_BYTES),
        ];
        let shared = shared_secret(&secrets(), &peers);
        assert_eq!(shared[0].as_bytes(), &[0u8; 32]);
        assert!(!shared[0].was_contributory());
        assert!(!shared[1].was_contributory());
        assert!(!shared[2].was_contributory());
        assert!(shared[3].was_contributory());
    }

    #[test]
    fn shared_secrets_compare_in_constant_time() {
        let peers = keygen(&secrets());
        let a = shared_secret(&secrets(), &peers);
        let b = shared_secret(&secrets(), &peers);
        assert!(bool::from(a[1].ct_eq(&b[1])));
        assert!(!bool::from(a[1].ct_eq(&b[2])));
        assert_eq!(a[0].as_ref(), &b[0].to_bytes()[..]);
    }
}
