//! x86_64 SSSE3 4-bit sequence decoding.
//!
//! Expands 16 packed bytes into 32 decoded bases per step. SSSE3 has no
//! zip/unzip, so nibble separation works by shuffling each packed byte into
//! both an even and an odd output slot, shifting the even copy down by four
//! bits, ORing the two, and masking to 4 bits:
//!
//! ```text
//! packed          |AB|CD|EF|GH|            (A = high nibble of byte 0, ...)
//! upper shuffle   |AB|00|CD|00|EF|00|GH|00|
//! lower shuffle   |00|AB|00|CD|00|EF|00|GH|
//! upper >> 4      |0A|B0|0C|D0|0E|F0|0G|H0|
//! or              |0A|XB|0C|XD|0E|XF|0G|XH|  (X = garbage)
//! and 0x0f        |0A|0B|0C|0D|0E|0F|0G|0H|
//! ```
//!
//! The 4-bit indexes then drive a `_mm_shuffle_epi8` lookup of the
//! nucleotide alphabet. The sub-32-base tail goes through the scalar table
//! decoder.

use std::arch::x86_64::*;

use super::sequence::{decode_into_scalar, NUC_LOOKUP};

/// Decode `dest.len()` bases from `data` using SSSE3.
///
/// Caller guarantees `data.len() >= dest.len().div_ceil(2)`. Selected by
/// the dispatcher in [`super`] only after `is_x86_feature_detected!` has
/// confirmed SSSE3 support.
pub(crate) fn decode_into_ssse3(data: &[u8], dest: &mut [u8]) {
    // SAFETY: the dispatcher installs this function only when runtime
    // detection has confirmed SSSE3, so the target-feature contract of the
    // inner function holds.
    unsafe { decode_into_ssse3_impl(data, dest) }
}

/// # Safety
///
/// Requires SSSE3. Bounds: each iteration reads 16 bytes at
/// `data[block * 16..]` and writes 32 bytes at `dest[block * 32..]`, both
/// in bounds because full_blocks * 32 <= dest.len() and the caller
/// guarantees data holds at least dest.len() / 2 bytes. All loads and
/// stores are unaligned.
#[target_feature(enable = "ssse3")]
unsafe fn decode_into_ssse3_impl(data: &[u8], dest: &mut [u8]) {
    let full_blocks = dest.len() / 32;

    let first_upper_shuffle =
        _mm_setr_epi8(0, -1, 1, -1, 2, -1, 3, -1, 4, -1, 5, -1, 6, -1, 7, -1);
    let first_lower_shuffle =
        _mm_setr_epi8(-1, 0, -1, 1, -1, 2, -1, 3, -1, 4, -1, 5, -1, 6, -1, 7);
    let second_upper_shuffle =
        _mm_setr_epi8(8, -1, 9, -1, 10, -1, 11, -1, 12, -1, 13, -1, 14, -1, 15, -1);
    let second_lower_shuffle =
        _mm_setr_epi8(-1, 8, -1, 9, -1, 10, -1, 11, -1, 12, -1, 13, -1, 14, -1, 15);
    let lookup = _mm_loadu_si128(NUC_LOOKUP.as_ptr() as *const __m128i);
    let nibble_mask = _mm_set1_epi8(0x0f);

    for block in 0..full_blocks {
        let packed = _mm_loadu_si128(data.as_ptr().add(block * 16) as *const __m128i);
        let out = dest.as_mut_ptr().add(block * 32);

        let first_upper = _mm_shuffle_epi8(packed, first_upper_shuffle);
        let first_lower = _mm_shuffle_epi8(packed, first_lower_shuffle);
        let first_merged = _mm_or_si128(_mm_srli_epi64(first_upper, 4), first_lower);
        let first_indexes = _mm_and_si128(first_merged, nibble_mask);
        _mm_storeu_si128(out as *mut __m128i, _mm_shuffle_epi8(lookup, first_indexes));

        let second_upper = _mm_shuffle_epi8(packed, second_upper_shuffle);
        let second_lower = _mm_shuffle_epi8(packed, second_lower_shuffle);
        let second_merged = _mm_or_si128(_mm_srli_epi64(second_upper, 4), second_lower);
        let second_indexes = _mm_and_si128(second_merged, nibble_mask);
        _mm_storeu_si128(
            out.add(16) as *mut __m128i,
            _mm_shuffle_epi8(lookup, second_indexes),
        );
    }

    let decoded = full_blocks * 32;
    decode_into_scalar(&data[decoded / 2..], &mut dest[decoded..]);
}
