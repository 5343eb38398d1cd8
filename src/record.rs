//! Sequencing record data model.
//!
//! Two record types share the same shape and behavior but differ in field
//! representation:
//!
//! - [`SequenceRecord`]: text fields. The quality track may legitimately be
//!   absent (FASTA has no qualities). Content is expected to be ASCII for
//!   the fast FASTQ serialization path, which verifies this before writing.
//! - [`BytesSequenceRecord`]: raw byte fields, all three always present.
//!   Binary-safe, FASTQ-only, no ASCII assumption at construction or
//!   serialization.
//!
//! Keeping these as distinct types makes comparing across representations a
//! compile-time type error rather than a silent `false`, which is the
//! strongest form of that guarantee.
//!
//! # Invariants
//!
//! - `name` and `sequence` are always present after construction; the
//!   fields are private and no operation can clear them.
//! - When qualities are present, `qualities.len() == sequence.len()`,
//!   checked at construction and by every setter that could break it.
//!
//! Records are plain owned values: clone to share, drop to destroy.
//! Equality, hashing, and ordering of fields are derived, so equal records
//! hash equally and absent qualities only compare equal to absent
//! qualities.

use std::fmt;
use std::ops::Range;

use crate::ascii::is_ascii;
use crate::error::{CodecError, Result};
use crate::fastq::to_fastq_bytes;
use crate::operations::reverse_complement;

/// A sequencing read with name, sequence, and optional qualities as text.
///
/// For FASTA data the `qualities` field is `None`. For FASTQ it holds the
/// Phred+33 encoded quality string, which must match the sequence in
/// length.
///
/// # Example
///
/// ```
/// use seqcodec::SequenceRecord;
///
/// # fn main() -> seqcodec::Result<()> {
/// let record = SequenceRecord::new("read1", "ACGT", Some("!!!!"))?;
/// assert_eq!(record.len(), 4);
/// assert_eq!(record.fastq_bytes()?, b"@read1\nACGT\n+\n!!!!\n");
///
/// let fasta = SequenceRecord::new("contig", "ACGT", None::<&str>)?;
/// assert!(fasta.qualities().is_none());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SequenceRecord {
    name: String,
    sequence: String,
    qualities: Option<String>,
}

impl SequenceRecord {
    /// Create a record, validating the sequence/qualities length invariant.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::LengthMismatch`] if qualities are present with
    /// a length different from the sequence.
    pub fn new(
        name: impl Into<String>,
        sequence: impl Into<String>,
        qualities: Option<impl Into<String>>,
    ) -> Result<Self> {
        let sequence = sequence.into();
        let qualities = qualities.map(Into::into);
        if let Some(quals) = &qualities {
            check_lengths(&sequence, quals)?;
        }
        Ok(Self {
            name: name.into(),
            sequence,
            qualities,
        })
    }

    /// The read name (full header line content, without the `@`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The nucleotide sequence.
    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    /// The Phred+33 quality string, or `None` for FASTA-style records.
    pub fn qualities(&self) -> Option<&str> {
        self.qualities.as_deref()
    }

    /// Replace the name. The name is always present; it cannot be cleared
    /// to an unset state (the empty string is a valid name).
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Replace the sequence, re-validating against present qualities.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::LengthMismatch`] if the new sequence length
    /// disagrees with present qualities.
    pub fn set_sequence(&mut self, sequence: impl Into<String>) -> Result<()> {
        let sequence = sequence.into();
        if let Some(quals) = &self.qualities {
            check_lengths(&sequence, quals)?;
        }
        self.sequence = sequence;
        Ok(())
    }

    /// Replace or remove the quality track.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::LengthMismatch`] if the new qualities disagree
    /// with the sequence length.
    pub fn set_qualities(&mut self, qualities: Option<impl Into<String>>) -> Result<()> {
        let qualities = qualities.map(Into::into);
        if let Some(quals) = &qualities {
            check_lengths(&self.sequence, quals)?;
        }
        self.qualities = qualities;
        Ok(())
    }

    /// The logical record length: the length of the sequence in bytes.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Whether the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Extract a sub-record covering `range` of the sequence.
    ///
    /// Produces a new record with the same name, the sequence restricted to
    /// the range, and, when present, the qualities restricted to the same
    /// range. The original record is not modified.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::SliceOutOfRange`] if the range does not lie
    /// within the sequence (or does not fall on character boundaries for
    /// non-ASCII content).
    ///
    /// # Example
    ///
    /// ```
    /// use seqcodec::SequenceRecord;
    ///
    /// # fn main() -> seqcodec::Result<()> {
    /// let record = SequenceRecord::new("read1", "ACGT", Some("!!#!"))?;
    /// let inner = record.slice(1..3)?;
    /// assert_eq!(inner.sequence(), "CG");
    /// assert_eq!(inner.qualities(), Some("!#"));
    /// assert_eq!(inner.name(), "read1");
    /// # Ok(())
    /// # }
    /// ```
    pub fn slice(&self, range: Range<usize>) -> Result<Self> {
        let out_of_range = || CodecError::SliceOutOfRange {
            start: range.start,
            end: range.end,
            len: self.sequence.len(),
        };
        let sequence = self
            .sequence
            .get(range.clone())
            .ok_or_else(out_of_range)?
            .to_string();
        let qualities = match &self.qualities {
            Some(quals) => Some(quals.get(range.clone()).ok_or_else(out_of_range)?.to_string()),
            None => None,
        };
        Ok(Self {
            name: self.name.clone(),
            sequence,
            qualities,
        })
    }

    /// The read id: everything in the name before the first whitespace.
    pub fn id(&self) -> &str {
        self.name
            .split_whitespace()
            .next()
            .unwrap_or(&self.name)
    }

    /// The comment: everything in the name after the first whitespace run,
    /// or `None` if there is none (or it is empty).
    pub fn comment(&self) -> Option<&str> {
        let rest = self.name.splitn(2, char::is_whitespace).nth(1)?;
        let rest = rest.trim_start();
        if rest.is_empty() {
            None
        } else {
            Some(rest)
        }
    }

    /// Whether `other` is this record's mate in a read pair.
    ///
    /// Read ids match when they are identical or differ only in a trailing
    /// `1`, `2`, or `3` (the common `name/1` / `name/2` convention reduces
    /// to this after the shared `/`).
    pub fn is_mate(&self, other: &SequenceRecord) -> bool {
        let (id1, id2) = (self.id(), other.id());
        if id1 == id2 {
            return true;
        }
        let mut chars1 = id1.chars();
        let mut chars2 = id2.chars();
        matches!(
            (chars1.next_back(), chars2.next_back()),
            (Some('1'..='3'), Some('1'..='3'))
        ) && chars1.as_str() == chars2.as_str()
    }

    /// Reverse complement of this record.
    ///
    /// The sequence is complemented and reversed, qualities (when present)
    /// are reversed, and the name is kept.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::NonAscii`] if the sequence contains non-ASCII
    /// characters.
    pub fn reverse_complement(&self) -> Result<Self> {
        if !is_ascii(self.sequence.as_bytes()) {
            return Err(CodecError::NonAscii { field: "sequence" });
        }
        let sequence = String::from_utf8(reverse_complement(self.sequence.as_bytes()))
            .map_err(|_| CodecError::NonAscii { field: "sequence" })?;
        let qualities = self
            .qualities
            .as_ref()
            .map(|quals| quals.chars().rev().collect());
        Ok(Self {
            name: self.name.clone(),
            sequence,
            qualities,
        })
    }

    /// The quality string as raw bytes, or `None` when absent.
    pub fn qualities_as_bytes(&self) -> Option<&[u8]> {
        self.qualities.as_deref().map(str::as_bytes)
    }

    /// Serialize this record to FASTQ wire bytes.
    ///
    /// # Errors
    ///
    /// Fails before any output allocation with
    /// [`CodecError::MissingQualities`] if the record has no quality track,
    /// or [`CodecError::NonAscii`] if any field is not ASCII-only (the byte
    /// writer copies raw bytes and performs no transcoding).
    pub fn fastq_bytes(&self) -> Result<Vec<u8>> {
        self.fastq_bytes_impl(false)
    }

    /// Like [`fastq_bytes`](Self::fastq_bytes), but repeats the name after
    /// the `+` separator.
    pub fn fastq_bytes_two_headers(&self) -> Result<Vec<u8>> {
        self.fastq_bytes_impl(true)
    }

    fn fastq_bytes_impl(&self, two_headers: bool) -> Result<Vec<u8>> {
        let qualities = self.qualities.as_ref().ok_or(CodecError::MissingQualities)?;
        for (field, content) in [
            ("name", self.name.as_str()),
            ("sequence", self.sequence.as_str()),
            ("qualities", qualities.as_str()),
        ] {
            if !is_ascii(content.as_bytes()) {
                return Err(CodecError::NonAscii { field });
            }
        }
        Ok(to_fastq_bytes(
            self.name.as_bytes(),
            self.sequence.as_bytes(),
            qualities.as_bytes(),
            two_headers,
        ))
    }
}

impl fmt::Display for SequenceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.qualities {
            Some(quals) => write!(
                f,
                "SequenceRecord({:?}, {:?}, {:?})",
                self.name, self.sequence, quals
            ),
            None => write!(f, "SequenceRecord({:?}, {:?})", self.name, self.sequence),
        }
    }
}

/// A sequencing read with name, sequence, and qualities as raw bytes.
///
/// FASTQ-only: all three fields are always present. Content is binary-safe;
/// no ASCII assumption is imposed at construction or serialization.
///
/// # Example
///
/// ```
/// use seqcodec::BytesSequenceRecord;
///
/// # fn main() -> seqcodec::Result<()> {
/// let record = BytesSequenceRecord::new(b"read1".to_vec(), b"ACGT".to_vec(), b"!!!!".to_vec())?;
/// assert_eq!(record.fastq_bytes(), b"@read1\nACGT\n+\n!!!!\n");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BytesSequenceRecord {
    name: Vec<u8>,
    sequence: Vec<u8>,
    qualities: Vec<u8>,
}

impl BytesSequenceRecord {
    /// Create a record, validating the sequence/qualities length invariant.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::LengthMismatch`] if the qualities length
    /// differs from the sequence length.
    pub fn new(name: Vec<u8>, sequence: Vec<u8>, qualities: Vec<u8>) -> Result<Self> {
        if sequence.len() != qualities.len() {
            return Err(CodecError::LengthMismatch {
                sequence: sequence.len(),
                qualities: qualities.len(),
            });
        }
        Ok(Self {
            name,
            sequence,
            qualities,
        })
    }

    /// The read name bytes.
    pub fn name(&self) -> &[u8] {
        &self.name
    }

    /// The sequence bytes.
    pub fn sequence(&self) -> &[u8] {
        &self.sequence
    }

    /// The Phred+33 quality bytes.
    pub fn qualities(&self) -> &[u8] {
        &self.qualities
    }

    /// The logical record length: the length of the sequence.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Whether the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Extract a sub-record covering `range`, as a new record with the same
    /// name and sequence/qualities restricted to the range.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::SliceOutOfRange`] if the range does not lie
    /// within the sequence.
    pub fn slice(&self, range: Range<usize>) -> Result<Self> {
        let out_of_range = || CodecError::SliceOutOfRange {
            start: range.start,
            end: range.end,
            len: self.sequence.len(),
        };
        let sequence = self.sequence.get(range.clone()).ok_or_else(out_of_range)?;
        let qualities = self.qualities.get(range.clone()).ok_or_else(out_of_range)?;
        Ok(Self {
            name: self.name.clone(),
            sequence: sequence.to_vec(),
            qualities: qualities.to_vec(),
        })
    }

    /// Serialize this record to FASTQ wire bytes.
    ///
    /// Infallible: the length invariant was checked at construction and the
    /// byte writer imposes no character-set restriction.
    pub fn fastq_bytes(&self) -> Vec<u8> {
        to_fastq_bytes(&self.name, &self.sequence, &self.qualities, false)
    }

    /// Like [`fastq_bytes`](Self::fastq_bytes), but repeats the name after
    /// the `+` separator.
    pub fn fastq_bytes_two_headers(&self) -> Vec<u8> {
        to_fastq_bytes(&self.name, &self.sequence, &self.qualities, true)
    }
}

impl fmt::Display for BytesSequenceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BytesSequenceRecord(b\"{}\", b\"{}\", b\"{}\")",
            self.name.escape_ascii(),
            self.sequence.escape_ascii(),
            self.qualities.escape_ascii()
        )
    }
}

fn check_lengths(sequence: &str, qualities: &str) -> Result<()> {
    if sequence.len() != qualities.len() {
        return Err(CodecError::LengthMismatch {
            sequence: sequence.len(),
            qualities: qualities.len(),
        });
    }
    Ok(())
}
