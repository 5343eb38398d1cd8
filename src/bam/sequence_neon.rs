//! ARM NEON 4-bit sequence decoding.
//!
//! Expands 16 packed bytes into 32 decoded bases per step: split each byte
//! into its two nibbles, run both nibble vectors through a 16-entry table
//! lookup (`vqtbl1q_u8`), then interleave the results back into base order
//! with `vzip1q`/`vzip2q`. The sub-32-base tail goes through the scalar
//! table decoder.

use std::arch::aarch64::*;

use super::sequence::{decode_into_scalar, NUC_LOOKUP};

/// Decode `dest.len()` bases from `data` using NEON.
///
/// Caller guarantees `data.len() >= dest.len().div_ceil(2)`; the public
/// entry points in [`super`] validate this before dispatching.
pub(crate) fn decode_into_neon(data: &[u8], dest: &mut [u8]) {
    let full_blocks = dest.len() / 32;

    // SAFETY: NEON is baseline on aarch64 (this file only compiles there).
    // Each iteration reads 16 bytes at `data[block * 16..]` and writes 32
    // bytes at `dest[block * 32..]`; both stay in bounds because
    // full_blocks * 32 <= dest.len() and the caller guarantees data holds
    // at least dest.len() / 2 bytes. Loads and stores are unaligned.
    unsafe {
        let lookup = vld1q_u8(NUC_LOOKUP.as_ptr());
        let nibble_mask = vdupq_n_u8(0x0f);

        for block in 0..full_blocks {
            let packed = vld1q_u8(data.as_ptr().add(block * 16));

            let high_nibbles = vshrq_n_u8::<4>(packed);
            let low_nibbles = vandq_u8(packed, nibble_mask);

            let bases_high = vqtbl1q_u8(lookup, high_nibbles);
            let bases_low = vqtbl1q_u8(lookup, low_nibbles);

            // Interleave high/low back into sequence order:
            // [h0,l0,h1,l1,...] across two 16-byte stores.
            let out = dest.as_mut_ptr().add(block * 32);
            vst1q_u8(out, vzip1q_u8(bases_high, bases_low));
            vst1q_u8(out.add(16), vzip2q_u8(bases_high, bases_low));
        }
    }

    let decoded = full_blocks * 32;
    decode_into_scalar(&data[decoded / 2..], &mut dest[decoded..]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neon_one_full_block() {
        let data = [0x12u8; 16];
        let mut dest = [0u8; 32];
        decode_into_neon(&data, &mut dest);
        assert_eq!(&dest[..], b"ACACACACACACACACACACACACACACACAC".as_slice());
    }

    #[test]
    fn test_neon_block_plus_tail() {
        // 40 bases: one 32-base NEON block plus an 8-base scalar tail.
        let data = [0x48u8; 20];
        let mut dest = [0u8; 40];
        decode_into_neon(&data, &mut dest);
        assert!(dest.chunks(2).all(|pair| pair == b"GT"));
    }

    #[test]
    fn test_neon_odd_tail() {
        let data = [0x12u8, 0x48, 0x10];
        let mut dest = [0u8; 5];
        decode_into_neon(&data, &mut dest);
        assert_eq!(&dest, b"ACGTA");
    }

    #[test]
    fn test_neon_matches_scalar() {
        let data: Vec<u8> = (0..=255).collect();
        for length in [0, 1, 31, 32, 33, 64, 100, 511, 512] {
            let mut simd = vec![0u8; length];
            let mut scalar = vec![0u8; length];
            decode_into_neon(&data, &mut simd);
            decode_into_scalar(&data, &mut scalar);
            assert_eq!(simd, scalar, "length={}", length);
        }
    }
}
