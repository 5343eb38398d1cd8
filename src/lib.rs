//! seqcodec: fast-path codecs for sequencing records
//!
//! # Overview
//!
//! seqcodec is the hot inner layer of a genomic-sequence I/O stack: it
//! validates, decodes, and serializes sequencing records (name, nucleotide
//! sequence, optional quality string) at a throughput suitable for millions
//! of reads. File readers, tokenizers, compression, and CLI tooling live in
//! surrounding crates; seqcodec only assumes byte/string buffers with known
//! length and ownership.
//!
//! ## Components
//!
//! - [`ascii`]: branch-free ASCII validation with SIMD acceleration
//! - [`bam`]: 4-bit packed sequence and raw Phred quality decoding with
//!   runtime CPU dispatch (NEON / SSSE3 / scalar)
//! - [`fastq`]: exact-layout single-allocation FASTQ serialization
//! - [`record`]: the [`SequenceRecord`] / [`BytesSequenceRecord`] data
//!   model with length validation, equality, hashing, and sub-slicing
//! - [`operations`]: complement and reverse-complement primitives
//!
//! ## Quick Start
//!
//! ```
//! use seqcodec::SequenceRecord;
//!
//! # fn main() -> seqcodec::Result<()> {
//! let record = SequenceRecord::new("read1", "ACGT", Some("!!!!"))?;
//! assert_eq!(record.fastq_bytes()?, b"@read1\nACGT\n+\n!!!!\n");
//!
//! let trimmed = record.slice(0..2)?;
//! assert_eq!(trimmed.sequence(), "AC");
//! # Ok(())
//! # }
//! ```
//!
//! Decoding a BAM-encoded read back into a record:
//!
//! ```
//! use seqcodec::bam::{decode_sequence, decode_qualities};
//! use seqcodec::BytesSequenceRecord;
//!
//! # fn main() -> seqcodec::Result<()> {
//! let sequence = decode_sequence(&[0x12, 0x48], 4)?;
//! let qualities = decode_qualities(&[30, 30, 20, 10]);
//! let record = BytesSequenceRecord::new(b"read1".to_vec(), sequence, qualities)?;
//! assert_eq!(record.fastq_bytes(), b"@read1\nACGT\n+\n??5+\n");
//! # Ok(())
//! # }
//! ```
//!
//! ## Concurrency
//!
//! Every operation is a pure, synchronous computation over caller-owned
//! buffers, safe to run from any number of threads without coordination.
//! The only shared state is the one-time CPU-capability dispatch cache in
//! [`bam`], which is idempotent and race-free.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod ascii;
pub mod bam;
pub mod error;
pub mod fastq;
pub mod operations;
pub mod record;

// Re-export commonly used types
pub use error::{CodecError, Result};
pub use record::{BytesSequenceRecord, SequenceRecord};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
