// -*- mode: rust; -*-
//
// This file is part of curve25519-x4.
// See LICENSE for licensing information.

use curve25519_x4::{
    clamp_integer, keygen, shared_secret, x25519, MontgomeryPoint, X25519_BASEPOINT_BYTES,
};

use rand_core::{OsRng, RngCore};

fn bytes(s: &str) -> [u8; 32] {
    let mut out = [0u8; 32];
    hex::decode_to_slice(s, &mut out).unwrap();
    out
}

const ALICE_SECRET: &str = "77076d0a7318a57d3c16c17251b26645df4c2f87ebc0992ab177fba51db92c2a";
const ALICE_PUBLIC: &str = "8520f0098930a754748b7ddcb43ef75a0dbf3a0d26381af4eba4a98eaa9b4e6a";
const BOB_SECRET: &str = "5dab087e624a8a4b79e17f8b83800ee66f3bb1292618b6fd1c2f8b27ff88e0eb";
const BOB_PUBLIC: &str = "de9edb7d7b7dc1b4d35b61c2ece435373f8343c85b78674dadfc7e146f882b4f";
const ALICE_BOB_SHARED: &str = "4a5d9d5ba4ce2de1728e3bf480350f25e07e21c947d19e3376f09b3c1e161742";

/// RFC 7748 section 5.2 (scalar, u, output).
const RFC7748_VECTORS: [(&str, &str, &str); 2] = [
    (
        "a546e36bf0527c9d3b16154b82465edd62144c0ac1fc5a18506a2244ba449ac4",
        "e6db6867583030db3594c1a424b15f7c726624ec26b3353b10a903a6d0ab1c4c",
        "c3da55379de9c6908e94ea4df28d084f32eccf03491c71f754b4075577a28552",
    ),
    (
        "4b66e9d4d1b4673c5ad22691957d6af5c11b6421e0ea01d42ca4169e7918ba0d",
        "e5210f12786811d3f4b7959d0538ae2c31dbe7106fc03c3efc4cd549c715a493",
        "95cbde9476e8907d7aade45cb4b873f88b595a68799fa152e6f8f7647aac7957",
    ),
];

#[test]
fn rfc7748_ladder_vectors() {
    let (k0, u0, out0) = RFC7748_VECTORS[0];
    let (k1, u1, out1) = RFC7748_VECTORS[1];
    let k = [bytes(k0), bytes(k1), bytes(k1), bytes(k0)];
    let u = [bytes(u0), bytes(u1), bytes(u1), bytes(u0)];
    let out = x25519(&k, &u);
    assert_eq!(out[0], bytes(out0));
    assert_eq!(out[1], bytes(out1));
    assert_eq!(out[2], bytes(out1));
    assert_eq!(out[3], bytes(out0));
}

#[test]
fn rfc7748_key_agreement() {
    let secrets = [
        bytes(ALICE_SECRET),
        bytes(BOB_SECRET),
        bytes(ALICE_SECRET),
        bytes(BOB_SECRET),
    ];
    let public = keygen(&secrets);
    assert_eq!(public[0].to_bytes(), bytes(ALICE_PUBLIC));
    assert_eq!(public[1].to_bytes(), bytes(BOB_PUBLIC));
    assert_eq!(public[2], public[0]);
    assert_eq!(public[3], public[1]);

    let peers = [public[1], public[0], public[3], public[2]];
    let shared = shared_secret(&secrets, &peers);
    for s in shared.iter() {
        assert_eq!(s.as_bytes(), &bytes(ALICE_BOB_SHARED));
        assert!(s.was_contributory());
    }
}

#[test]
fn keygen_of_clamped_zero() {
    let public = keygen(&[[0u8; 32]; 4]);
    let expected = bytes("2fe57da347cd62431528daac5fbb290730fff684afc4cfc2ed90995f58cb3b74");
    for p in public.iter() {
        assert_eq!(p.to_bytes(), expected);
    }
    // Clamping is internal: the explicitly clamped scalar gives the same key.
    assert_eq!(keygen(&[clamp_integer([0u8; 32]); 4]), public);
}

/// RFC 7748 section 5.2, iterated: k, u <- x25519(k, u), k.
fn iterate(n: usize) -> [u8; 32] {
    // Run four copies of the chain, which also checks that the lanes
    // agree at every step.
    let mut k = [X25519_BASEPOINT_BYTES; 4];
    let mut u = [X25519_BASEPOINT_BYTES; 4];
    for _ in 0..n {
        let out = x25519(&k, &u);
        u = k;
        k = out;
    }
    assert!(k.iter().all(|lane| *lane == k[0]));
    k[0]
}

#[test]
fn rfc7748_iterated_once() {
    assert_eq!(
        iterate(1),
        bytes("422c8e7a6227d7bca1350b3e2bb7279f7897b87bb6854b783c60e80311ae3079")
    );
}

#[test]
fn rfc7748_iterated_1000_times() {
    assert_eq!(
        iterate(1000),
        bytes("684cf59ba83309552800ef566f2f4d3c1c3887c49360e3875f2eb94d99532c51")
    );
}

#[test]
fn random_key_agreement() {
    let mut a = [[0u8; 32]; 4];
    let mut b = [[0u8; 32]; 4];
    for lane in a.iter_mut().chain(b.iter_mut()) {
        OsRng.fill_bytes(lane);
    }

    let a_public = keygen(&a);
    let b_public = keygen(&b);
    let a_shared = shared_secret(&a, &b_public);
    let b_shared = shared_secret(&b, &a_public);
    for (x, y) in a_shared.iter().zip(b_shared.iter()) {
        assert_eq!(x.as_bytes(), y.as_bytes());
    }
}

#[test]
fn fixed_base_matches_ladder_on_random_scalars() {
    let mut k = [[0u8; 32]; 4];
    for lane in k.iter_mut() {
        OsRng.fill_bytes(lane);
    }
    let comb = keygen(&k);
    let ladder = x25519(&k, &[X25519_BASEPOINT_BYTES; 4]);
    for (c, l) in comb.iter().zip(ladder.iter()) {
        assert_eq!(c.as_bytes(), l);
    }
}

#[test]
fn lanes_are_independent() {
    let mut k = [[0u8; 32]; 4];
    let mut u = [[0u8; 32]; 4];
    for lane in k.iter_mut().chain(u.iter_mut()) {
        OsRng.fill_bytes(lane);
    }
    let mixed = x25519(&k, &u);
    let mixed_public = keygen(&k);
    for i in 0..4 {
        let alone = x25519(&[k[i]; 4], &[u[i]; 4]);
        assert!(alone.iter().all(|lane| *lane == mixed[i]));
        assert!(keygen(&[k[i]; 4]).iter().all(|p| *p == mixed_public[i]));
    }
}

#[test]
fn low_order_points_give_zero() {
    let k = [bytes(ALICE_SECRET); 4];
    let p = bytes("edffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff7f");
    let mut one = [0u8; 32];
    one[0] = 1;
    let out = shared_secret(
        &k,
        &[
            MontgomeryPoint([0u8; 32]),
            MontgomeryPoint(one),
            MontgomeryPoint(p),
            MontgomeryPoint(bytes(BOB_PUBLIC)),
        ],
    );
    for s in &out[..3] {
        assert_eq!(s.as_bytes(), &[0u8; 32]);
        assert!(!s.was_contributory());
    }
    assert_eq!(out[3].as_bytes(), &bytes(ALICE_BOB_SHARED));
}

#[test]
fn high_bit_of_peer_key_is_ignored() {
    let k = [bytes(ALICE_SECRET); 4];
    let mut high = bytes(BOB_PUBLIC);
    high[31] |= 0x80;
    let out = x25519(&k, &[high; 4]);
    assert_eq!(out[0], bytes(ALICE_BOB_SHARED));
}

#[test]
fn montgomery_point_from_slice() {
    let v = bytes(ALICE_PUBLIC).to_vec();
    let p = MontgomeryPoint::from_slice(&v).unwrap();
    assert_eq!(p.as_bytes(), &bytes(ALICE_PUBLIC));
    assert!(MontgomeryPoint::from_slice(&v[1..]).is_err());
}
