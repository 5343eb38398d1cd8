//! Branch-free ASCII validation.
//!
//! Text-based record formats (FASTA, FASTQ) promise 7-bit ASCII content on
//! the fast serialization path, and validation runs once per record field,
//! so this check sits directly on the hot path of record construction.
//!
//! # Algorithm
//!
//! All implementations accumulate the bitwise OR of every byte into one or
//! more accumulators and test the high bit once at the end. The reduction
//! form is the contract, not an optimization detail: a per-byte early-exit
//! branch defeats vectorization and makes runtime vary with input content
//! within a chunk.
//!
//! # Platform-Specific Optimization
//!
//! - **aarch64**: NEON 16-byte lanes (`vorrq_u8` + `vmaxvq_u8`)
//! - **x86_64**: SSE2 16-byte lanes (`_mm_or_si128` + `_mm_movemask_epi8`)
//! - **other**: portable 8-byte machine-word accumulation
//!
//! All vector loads are unaligned; no alignment is assumed on the input.

/// High-bit mask for one byte.
const ASCII_MASK_1BYTE: u8 = 0x80;

/// High-bit mask replicated across an 8-byte machine word.
const ASCII_MASK_8BYTE: u64 = 0x8080_8080_8080_8080;

/// Check whether a byte slice contains only 7-bit ASCII.
///
/// Returns `true` iff every byte is `< 0x80`. The empty slice is vacuously
/// ASCII. Never reads past the slice and does not rely on any terminating
/// sentinel byte.
///
/// This is a pure, total function: it cannot fail and has no side effects.
/// It is safe to call concurrently from any number of threads.
///
/// # Example
///
/// ```
/// use seqcodec::ascii::is_ascii;
///
/// assert!(is_ascii(b"GATTACA"));
/// assert!(is_ascii(b""));
/// assert!(!is_ascii("nąme".as_bytes()));
/// ```
#[inline]
pub fn is_ascii(data: &[u8]) -> bool {
    #[cfg(target_arch = "aarch64")]
    {
        // NEON is baseline on all aarch64 CPUs.
        unsafe { is_ascii_neon(data) }
    }

    #[cfg(target_arch = "x86_64")]
    {
        // SSE2 is baseline on all x86_64 CPUs.
        unsafe { is_ascii_sse2(data) }
    }

    #[cfg(not(any(target_arch = "aarch64", target_arch = "x86_64")))]
    {
        is_ascii_scalar(data)
    }
}

/// Portable word-at-a-time implementation.
///
/// ORs whole 8-byte words together, then the tail bytes, and tests the
/// accumulated high bits once. Used directly on targets without a vector
/// path and as the reference implementation in differential tests.
pub fn is_ascii_scalar(data: &[u8]) -> bool {
    let mut chunks = data.chunks_exact(8);
    let mut all_words: u64 = 0;
    for chunk in chunks.by_ref() {
        // u64::from_ne_bytes compiles to a plain unaligned load.
        let word = u64::from_ne_bytes(chunk.try_into().unwrap());
        all_words |= word;
    }
    let mut all_chars: u8 = 0;
    for &byte in chunks.remainder() {
        all_chars |= byte;
    }
    (all_words & ASCII_MASK_8BYTE) == 0 && (all_chars & ASCII_MASK_1BYTE) == 0
}

/// NEON implementation: OR 16-byte lanes, reduce with a lane-max at the end.
///
/// # Safety
///
/// NEON is mandatory on aarch64, so feature availability is guaranteed by
/// the compile-time target check. All loads are unaligned (`vld1q_u8`) and
/// bounds are established by `chunks_exact` before any pointer is formed.
#[cfg(target_arch = "aarch64")]
unsafe fn is_ascii_neon(data: &[u8]) -> bool {
    use std::arch::aarch64::*;

    let mut chunks = data.chunks_exact(16);
    let mut all_lanes = vdupq_n_u8(0);
    for chunk in chunks.by_ref() {
        let lane = vld1q_u8(chunk.as_ptr());
        all_lanes = vorrq_u8(all_lanes, lane);
    }
    let mut all_chars: u8 = 0;
    for &byte in chunks.remainder() {
        all_chars |= byte;
    }
    vmaxvq_u8(all_lanes) < ASCII_MASK_1BYTE && (all_chars & ASCII_MASK_1BYTE) == 0
}

/// SSE2 implementation: OR 16-byte lanes, test sign bits with movemask.
///
/// # Safety
///
/// SSE2 is part of the x86_64 baseline, so feature availability is
/// guaranteed by the compile-time target check. All loads are unaligned
/// (`_mm_loadu_si128`) and bounds are established by `chunks_exact` before
/// any pointer is formed.
#[cfg(target_arch = "x86_64")]
unsafe fn is_ascii_sse2(data: &[u8]) -> bool {
    use std::arch::x86_64::*;

    let mut chunks = data.chunks_exact(16);
    let mut all_lanes = _mm_setzero_si128();
    for chunk in chunks.by_ref() {
        let lane = _mm_loadu_si128(chunk.as_ptr() as *const __m128i);
        all_lanes = _mm_or_si128(all_lanes, lane);
    }
    let mut all_chars: u8 = 0;
    for &byte in chunks.remainder() {
        all_chars |= byte;
    }
    _mm_movemask_epi8(all_lanes) == 0 && (all_chars & ASCII_MASK_1BYTE) == 0
}
