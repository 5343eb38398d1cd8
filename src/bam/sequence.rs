//! Portable 4-bit sequence decoding.
//!
//! Decodes two bases per packed byte through a precomputed 512-byte
//! expansion table, the same trick htslib uses in `sam_internal.h`: each
//! packed byte indexes a table of two-character cells, so the inner loop is
//! a single lookup and a two-byte copy per input byte.

/// BAM 4-bit to ASCII base lookup (SAM/BAM specification v1.6).
///
/// - 0 = '=' (match to reference, rarely seen in practice)
/// - 1, 2, 4, 8 = A, C, G, T
/// - remaining values = IUPAC ambiguity codes
pub(crate) const NUC_LOOKUP: [u8; 16] = *b"=ACMGRSVTWYHKDBN";

/// Expansion table mapping one packed byte to its two decoded bases.
const CODE2BASE: [[u8; 2]; 256] = {
    let mut table = [[0u8; 2]; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = [NUC_LOOKUP[i >> 4], NUC_LOOKUP[i & 0x0f]];
        i += 1;
    }
    table
};

/// Decode `dest.len()` bases from `data`, two at a time.
///
/// Caller guarantees `data.len() >= dest.len().div_ceil(2)`; the public
/// entry points in [`super`] validate this before dispatching.
pub(crate) fn decode_into_scalar(data: &[u8], dest: &mut [u8]) {
    let length = dest.len();
    let pairs = length / 2;
    for (out, &packed) in dest[..pairs * 2].chunks_exact_mut(2).zip(&data[..pairs]) {
        out.copy_from_slice(&CODE2BASE[packed as usize]);
    }
    if length % 2 == 1 {
        // Final odd base lives in the high nibble of the last byte.
        dest[length - 1] = NUC_LOOKUP[(data[pairs] >> 4) as usize];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expansion_table_agrees_with_nibble_lookup() {
        for packed in 0..=255usize {
            assert_eq!(
                CODE2BASE[packed],
                [NUC_LOOKUP[packed >> 4], NUC_LOOKUP[packed & 0x0f]]
            );
        }
    }

    #[test]
    fn test_scalar_decode_even() {
        let mut dest = [0u8; 4];
        decode_into_scalar(&[0x12, 0x48], &mut dest);
        assert_eq!(&dest, b"ACGT");
    }

    #[test]
    fn test_scalar_decode_odd() {
        let mut dest = [0u8; 3];
        decode_into_scalar(&[0x12, 0x4f], &mut dest);
        assert_eq!(&dest, b"ACG");
    }

    #[test]
    fn test_scalar_decode_empty() {
        let mut dest = [0u8; 0];
        decode_into_scalar(&[], &mut dest);
    }
}
