// -*- mode: rust; -*-
//
// This file is part of curve25519-x4.
// See LICENSE for licensing information.

//! Conversions between 32-bit words and 29-bit limbs, and a hex
//! formatter for debugging output.
//!
//! Both conversions treat their input as a little-endian multi-precision
//! integer.  The output length is always `r.len()`: input words past the
//! end of `a` read as zero, and bits that do not fit in `r` are dropped.
//! Neither conversion can fail.
//!
//! ```
//! use curve25519_x4::radix::{conv_29_to_32, conv_32_to_29};
//!
//! let words = [0xdead_beef, 0x0123_4567];
//! let mut limbs = [0u32; 3];
//! conv_32_to_29(&mut limbs, &words);
//! assert_eq!(limbs, [0x1ead_beef, 0x091a_2b3e, 0x0000_0000]);
//!
//! let mut back = [0u32; 2];
//! conv_29_to_32(&mut back, &limbs);
//! assert_eq!(back, words);
//! ```

use core::fmt;

/// Repack a stream of `FROM`-bit words into `TO`-bit words.
///
/// The control flow depends only on the two lengths.
#[inline]
fn repack<const FROM: u32, const TO: u32>(r: &mut [u32], a: &[u32]) {
    let from_mask = (1u64 << FROM) - 1;
    let to_mask = (1u64 << TO) - 1;

    let mut words = a.iter().copied();
    let mut acc = 0u64;
    let mut bits = 0u32;
    for out in r.iter_mut() {
        while bits < TO {
            let w = words.next().unwrap_or(0) as u64 & from_mask;
            acc |= w << bits;
            bits += FROM;
        }
        *out = (acc & to_mask) as u32;
        acc >>= TO;
        bits -= TO;
    }
}

/// Convert an integer given as 32-bit words into 29-bit limbs.
pub fn conv_32_to_29(r: &mut [u32], a: &[u32]) {
    repack::<32, 29>(r, a);
}

/// Convert an integer given as 29-bit limbs into 32-bit words.
///
/// Only the low 29 bits of each limb are read.
pub fn conv_29_to_32(r: &mut [u32], a: &[u32]) {
    repack::<29, 32>(r, a);
}

/// Read a 32-byte little-endian encoding as eight 32-bit words.
pub(crate) fn words_from_le_bytes(bytes: &[u8; 32]) -> [u32; 8] {
    let mut words = [0u32; 8];
    for (w, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
        *w = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    words
}

/// Formats a little-endian multi-precision integer as upper-case hex,
/// most significant word first, eight digits per word.
#[derive(Clone, Copy)]
pub struct HexWords<'a>(pub &'a [u32]);

impl fmt::Display for HexWords<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for w in self.0.iter().rev() {
            write!(f, "{:08X}", w)?;
        }
        Ok(())
    }
}

impl fmt::Debug for HexWords<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Emit `label` followed by `words` in hex through the `log` facade.
///
/// Debugging support only: never pass secret material.
pub fn print(level: log::Level, label: &str, words: &[u32]) {
    log::log!(level, "{}{}", label, HexWords(words));
}

#[cfg(test)]
mod test {
    use super::*;
    use std::format;

    #[test]
    fn round_trip_256_bits() {
        let words = [
            0x1a2b_3c4d, 0xffff_ffff, 0x0000_0001, 0x8000_0000, 0x7654_3210, 0xdead_beef, 0x0bad_f00d,
            0x7fff_ffff,
        ];
        let mut limbs = [0u32; 9];
        conv_32_to_29(&mut limbs, &words);
        assert!(limbs.iter().all(|l| *l < (1 << 29)));

        let mut back = [0u32; 8];
        conv_29_to_32(&mut back, &limbs);
        assert_eq!(back, words);
    }

    #[test]
    fn short_input_is_zero_padded() {
        let mut limbs = [0xffff_ffffu32; 9];
        conv_32_to_29(&mut limbs, &[0xffff_ffff]);
        assert_eq!(limbs, [0x1fff_ffff, 0x7, 0, 0, 0, 0, 0, 0, 0]);

        let mut words = [0xffff_ffffu32; 4];
        conv_29_to_32(&mut words, &[]);
        assert_eq!(words, [0; 4]);
    }

    #[test]
    fn short_output_truncates() {
        let limbs = [0x1fff_ffff; 9];
        let mut words = [0u32; 2];
        conv_29_to_32(&mut words, &limbs);
        assert_eq!(words, [0xffff_ffff; 2]);

        let mut limbs = [0u32; 1];
        conv_32_to_29(&mut limbs, &[0xffff_ffff, 0xffff_ffff]);
        assert_eq!(limbs, [0x1fff_ffff]);
    }

    #[test]
    fn excess_limb_bits_are_ignored() {
        let mut words = [0u32; 1];
        conv_29_to_32(&mut words, &[0xe000_0001]);
        assert_eq!(words, [1]);
    }

    #[test]
    fn bytes_read_as_little_endian_words() {
        let mut bytes = [0u8; 32];
        bytes[0] = 0x78;
        bytes[1] = 0x56;
        bytes[31] = 0x12;
        let w = words_from_le_bytes(&bytes);
        assert_eq!(w[0], 0x5678);
        assert_eq!(w[7], 0x1200_0000);
        assert!(w[1..7].iter().all(|x| *x == 0));
    }

    #[test]
    fn hex_is_most_significant_first() {
        assert_eq!(format!("{}", HexWords(&[0xabc, 0x1])), "0000000100000ABC");
        assert_eq!(format!("{:?}", HexWords(&[])), "");
    }
}
