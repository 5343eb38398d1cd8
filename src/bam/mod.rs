//! Decoders for the packed field encodings of BAM alignment records.
//!
//! BAM stores the two per-base tracks of a read in packed form:
//!
//! - **sequence**: 4 bits per base, two bases per byte, high nibble first.
//!   The 16 nibble values map onto the fixed IUPAC alphabet
//!   `=ACMGRSVTWYHKDBN` (SAM/BAM specification v1.6); every nibble value is
//!   a valid code, there is no "invalid" nibble.
//! - **qualities**: one raw (unoffset) Phred score per base, converted to
//!   the Phred+33 ASCII encoding by adding 33.
//!
//! Both decoders are pure functions over caller-owned buffers and are safe
//! to call concurrently from any number of threads.
//!
//! # Implementation selection
//!
//! The sequence decoder is chosen once per process from the CPU's runtime
//! capabilities and cached behind a function pointer, so detection cost is
//! never paid per call:
//!
//! - **aarch64**: NEON table lookup + interleave, 32 bases per step
//! - **x86_64 with SSSE3**: byte-shuffle nibble expansion, 32 bases per step
//! - **otherwise**: scalar 512-byte expansion table, 2 bases per step
//!
//! Racing threads may both compute the selection; the result is
//! deterministic, so the duplicate work is harmless.

mod qualities;
mod sequence;
#[cfg(target_arch = "aarch64")]
mod sequence_neon;
#[cfg(target_arch = "x86_64")]
mod sequence_ssse3;

use std::sync::OnceLock;

use crate::error::{CodecError, Result};

pub use qualities::{decode_qualities, decode_qualities_into};

/// Signature shared by all sequence decoder implementations.
///
/// Implementations require `data.len() >= dest.len().div_ceil(2)`; the
/// public entry points validate this before dispatching so the hot loop
/// never re-checks it.
type DecodeSequenceFn = fn(data: &[u8], dest: &mut [u8]);

fn select_decode_sequence_impl() -> DecodeSequenceFn {
    #[cfg(target_arch = "aarch64")]
    {
        // NEON is baseline on aarch64.
        return sequence_neon::decode_into_neon;
    }

    #[cfg(target_arch = "x86_64")]
    {
        if is_x86_feature_detected!("ssse3") {
            return sequence_ssse3::decode_into_ssse3;
        }
    }

    #[allow(unreachable_code)]
    sequence::decode_into_scalar
}

/// Return the cached sequence decoder, selecting it on first use.
#[inline]
fn decode_sequence_impl() -> DecodeSequenceFn {
    static IMPL: OnceLock<DecodeSequenceFn> = OnceLock::new();
    *IMPL.get_or_init(select_decode_sequence_impl)
}

/// Decode a 4-bit packed BAM sequence to ASCII bases.
///
/// Reads `length.div_ceil(2)` bytes from `data` and produces exactly
/// `length` bases. Within each byte the high nibble decodes first; for an
/// odd `length` the final base comes from the high nibble of the last byte
/// and that byte's low nibble is ignored.
///
/// The output buffer is allocated once at exactly `length` bytes.
///
/// # Errors
///
/// Returns [`CodecError::InsufficientData`] if `data` is too short for the
/// requested number of bases.
///
/// # Example
///
/// ```
/// use seqcodec::bam::decode_sequence;
///
/// // 0x12 encodes nibbles 1 ('A') and 2 ('C'), 0x48 encodes 4 ('G') and 8 ('T')
/// let sequence = decode_sequence(&[0x12, 0x48], 4).unwrap();
/// assert_eq!(sequence, b"ACGT");
/// ```
pub fn decode_sequence(data: &[u8], length: usize) -> Result<Vec<u8>> {
    check_packed_len(data, length)?;
    let mut dest = vec![0u8; length];
    decode_sequence_impl()(data, &mut dest);
    Ok(dest)
}

/// Decode a 4-bit packed BAM sequence into a caller-provided buffer.
///
/// Zero-allocation variant of [`decode_sequence`]; `dest.len()` is the
/// number of bases to decode.
///
/// # Errors
///
/// Returns [`CodecError::InsufficientData`] if `data` is too short for
/// `dest.len()` bases.
pub fn decode_sequence_into(data: &[u8], dest: &mut [u8]) -> Result<()> {
    check_packed_len(data, dest.len())?;
    decode_sequence_impl()(data, dest);
    Ok(())
}

fn check_packed_len(data: &[u8], length: usize) -> Result<()> {
    let needed = length.div_ceil(2);
    if data.len() < needed {
        return Err(CodecError::InsufficientData {
            needed,
            bases: length,
            got: data.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_decode_single_base() {
        // High nibble 1 ('A'); the low nibble is ignored for odd lengths.
        assert_eq!(decode_sequence(&[0x10], 1).unwrap(), b"A");
        assert_eq!(decode_sequence(&[0x1f], 1).unwrap(), b"A");
    }

    #[test]
    fn test_decode_two_bases() {
        assert_eq!(decode_sequence(&[0x12], 2).unwrap(), b"AC");
    }

    #[test]
    fn test_decode_acgt() {
        assert_eq!(decode_sequence(&[0x12, 0x48], 4).unwrap(), b"ACGT");
    }

    #[test]
    fn test_decode_odd_length() {
        assert_eq!(decode_sequence(&[0x12, 0x48, 0x10], 5).unwrap(), b"ACGTA");
    }

    #[test]
    fn test_decode_ambiguity_codes() {
        assert_eq!(decode_sequence(&[0xff], 2).unwrap(), b"NN");
    }

    #[test]
    fn test_decode_all_nibble_values() {
        let mut data = Vec::new();
        for i in 0u8..16 {
            data.push((i << 4) | i);
        }
        let seq = decode_sequence(&data, 32).unwrap();
        assert_eq!(seq, b"==AACCMMGGRRSSVVTTWWYYHHKKDDBBNN");
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode_sequence(&[], 0).unwrap(), b"");
    }

    #[test]
    fn test_insufficient_data() {
        let err = decode_sequence(&[0x12], 5).unwrap_err();
        assert_eq!(
            err,
            CodecError::InsufficientData {
                needed: 3,
                bases: 5,
                got: 1
            }
        );
    }

    #[test]
    fn test_decode_into_matches_allocating() {
        let data = vec![0x12u8; 40];
        let mut dest = vec![0u8; 80];
        decode_sequence_into(&data, &mut dest).unwrap();
        assert_eq!(dest, decode_sequence(&data, 80).unwrap());
    }

    #[test]
    fn test_decode_into_insufficient_data() {
        let mut dest = vec![0u8; 8];
        assert!(decode_sequence_into(&[0x12], &mut dest).is_err());
    }

    /// Re-pack ASCII bases into the 4-bit encoding (inverse of decode).
    fn encode_sequence(bases: &[u8]) -> Vec<u8> {
        let alphabet = b"=ACMGRSVTWYHKDBN";
        let nibble = |base: u8| alphabet.iter().position(|&b| b == base).unwrap() as u8;
        bases
            .chunks(2)
            .map(|pair| {
                let high = nibble(pair[0]);
                let low = if pair.len() > 1 { nibble(pair[1]) } else { 0 };
                (high << 4) | low
            })
            .collect()
    }

    proptest! {
        #[test]
        fn prop_roundtrip_through_packing(sequence in "[=ACMGRSVTWYHKDBN]{0,500}") {
            let bases = sequence.as_bytes();
            let packed = encode_sequence(bases);
            let decoded = decode_sequence(&packed, bases.len()).unwrap();
            prop_assert_eq!(decoded, bases);
        }

        #[test]
        fn prop_dispatched_matches_scalar(data in proptest::collection::vec(any::<u8>(), 0..256), odd in any::<bool>()) {
            // Differential test: the runtime-selected path must be
            // byte-identical to the portable table decoder.
            let length = if odd && !data.is_empty() {
                data.len() * 2 - 1
            } else {
                data.len() * 2
            };
            let dispatched = decode_sequence(&data, length).unwrap();
            let mut scalar = vec![0u8; length];
            sequence::decode_into_scalar(&data, &mut scalar);
            prop_assert_eq!(dispatched, scalar);
        }

        #[test]
        fn prop_output_length(data in proptest::collection::vec(any::<u8>(), 1..256)) {
            let length = data.len() * 2;
            prop_assert_eq!(decode_sequence(&data, length).unwrap().len(), length);
            prop_assert_eq!(decode_sequence(&data, length - 1).unwrap().len(), length - 1);
        }
    }
}
