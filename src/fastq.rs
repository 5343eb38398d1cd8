//! Exact-layout FASTQ record serialization.
//!
//! Writing dominates many pipelines, so the serializer produces the full
//! wire format of one record in a single exactly-sized allocation filled by
//! positional writes. There is no intermediate concatenation and no buffer
//! resizing; that exactness is the reason this exists as a distinct fast
//! path instead of generic string formatting.
//!
//! The record layer ([`crate::record`]) enforces the preconditions (quality
//! track present and length-matched, ASCII-safe text for the text variant)
//! before any bytes are written here.

/// Serialize one FASTQ record to its literal wire bytes.
///
/// Output layout, newline is `\n` only:
///
/// ```text
/// @<name>\n<sequence>\n+[<name>]\n<qualities>\n
/// ```
///
/// The name after `+` appears only when `two_headers` is set. Total length
/// is exactly `name.len() + sequence.len() + qualities.len() + 6`, plus
/// `name.len()` again for the two-header variant; the buffer is allocated
/// once at that size. After the size computation, out-of-memory is the only
/// possible failure.
///
/// # Example
///
/// ```
/// use seqcodec::fastq::to_fastq_bytes;
///
/// assert_eq!(
///     to_fastq_bytes(b"read1", b"ACGT", b"!!!!", false),
///     b"@read1\nACGT\n+\n!!!!\n"
/// );
/// assert_eq!(
///     to_fastq_bytes(b"read1", b"ACGT", b"!!!!", true),
///     b"@read1\nACGT\n+read1\n!!!!\n"
/// );
/// ```
pub fn to_fastq_bytes(name: &[u8], sequence: &[u8], qualities: &[u8], two_headers: bool) -> Vec<u8> {
    // name + sequence + qualities + '@' + '+' + four newlines.
    let mut total_size = name.len() + sequence.len() + qualities.len() + 6;
    if two_headers {
        total_size += name.len();
    }

    let mut record = Vec::with_capacity(total_size);
    record.push(b'@');
    record.extend_from_slice(name);
    record.push(b'\n');
    record.extend_from_slice(sequence);
    record.push(b'\n');
    record.push(b'+');
    if two_headers {
        record.extend_from_slice(name);
    }
    record.push(b'\n');
    record.extend_from_slice(qualities);
    record.push(b'\n');

    debug_assert_eq!(record.len(), total_size);
    record
}
