//! Sequence transformation primitives backing the record methods.
//!
//! Complement and reverse complement over a 256-entry lookup table covering
//! upper- and lowercase IUPAC codes, with `U`/`u` treated as RNA thymine.
//! Bytes outside the alphabet pass through unchanged.

/// DNA/RNA complement lookup.
///
/// - A↔T (U→A for RNA input), G↔C, case preserved
/// - Ambiguity codes map to their complementary ambiguity:
///   R↔Y, K↔M, V↔B, H↔D; W, S, N are self-complementary
/// - Anything else is preserved as-is
const COMPLEMENT_TABLE: [u8; 256] = {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = i as u8;
        i += 1;
    }

    let pairs: [(u8, u8); 10] = [
        (b'A', b'T'),
        (b'C', b'G'),
        (b'G', b'C'),
        (b'T', b'A'),
        (b'U', b'A'),
        (b'R', b'Y'),
        (b'Y', b'R'),
        (b'K', b'M'),
        (b'M', b'K'),
        (b'N', b'N'),
    ];
    let mut p = 0;
    while p < pairs.len() {
        let (from, to) = pairs[p];
        table[from as usize] = to;
        table[from.to_ascii_lowercase() as usize] = to.to_ascii_lowercase();
        p += 1;
    }

    // Three-base ambiguity codes: V (ACG) <-> B (CGT), H (ACT) <-> D (AGT).
    table[b'V' as usize] = b'B';
    table[b'B' as usize] = b'V';
    table[b'H' as usize] = b'D';
    table[b'D' as usize] = b'H';
    table[b'v' as usize] = b'b';
    table[b'b' as usize] = b'v';
    table[b'h' as usize] = b'd';
    table[b'd' as usize] = b'h';

    // W (AT) and S (GC) are their own complements, already identity.
    table
};

/// Complement a sequence without reversing it.
///
/// # Example
///
/// ```
/// use seqcodec::operations::complement;
///
/// assert_eq!(complement(b"ATGC"), b"TACG");
/// ```
pub fn complement(seq: &[u8]) -> Vec<u8> {
    seq.iter().map(|&b| COMPLEMENT_TABLE[b as usize]).collect()
}

/// Reverse a sequence without complementing it.
pub fn reverse(seq: &[u8]) -> Vec<u8> {
    seq.iter().rev().copied().collect()
}

/// Reverse complement of a DNA/RNA sequence.
///
/// # Example
///
/// ```
/// use seqcodec::operations::reverse_complement;
///
/// assert_eq!(reverse_complement(b"ATGC"), b"GCAT");
/// assert_eq!(reverse_complement(b"GATTACA"), b"TGTAATC");
/// ```
pub fn reverse_complement(seq: &[u8]) -> Vec<u8> {
    seq.iter()
        .rev()
        .map(|&b| COMPLEMENT_TABLE[b as usize])
        .collect()
}
