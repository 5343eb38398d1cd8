//! Benchmarks for the record codec hot paths.
//!
//! Covers the three throughput-critical components:
//! - ASCII validation (per-field cost of text record construction)
//! - BAM 4-bit sequence and quality decoding
//! - exact-layout FASTQ serialization
//!
//! Run with: cargo bench --bench codec_operations
//! Run specific: cargo bench --bench codec_operations -- decode_sequence

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use seqcodec::ascii::is_ascii;
use seqcodec::bam::{decode_qualities, decode_sequence, decode_sequence_into};
use seqcodec::fastq::to_fastq_bytes;
use seqcodec::SequenceRecord;

/// Read lengths spanning short Illumina reads to long reads.
const LENGTHS: [usize; 4] = [100, 150, 1_000, 10_000];

fn generate_sequence(len: usize) -> Vec<u8> {
    (0..len).map(|i| [b'A', b'C', b'G', b'T'][i % 4]).collect()
}

fn generate_packed(bases: usize) -> Vec<u8> {
    (0..bases.div_ceil(2)).map(|i| (i % 256) as u8).collect()
}

fn generate_quality(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 42) as u8).collect()
}

fn bench_is_ascii(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_ascii");
    for len in LENGTHS {
        let data = generate_sequence(len);
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &data, |b, data| {
            b.iter(|| is_ascii(black_box(data)))
        });
    }
    group.finish();
}

fn bench_decode_sequence(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_sequence");
    for len in LENGTHS {
        let packed = generate_packed(len);
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &packed, |b, packed| {
            b.iter(|| decode_sequence(black_box(packed), len).unwrap())
        });
    }
    group.finish();
}

fn bench_decode_sequence_into(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_sequence_into");
    for len in LENGTHS {
        let packed = generate_packed(len);
        let mut dest = vec![0u8; len];
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &packed, |b, packed| {
            b.iter(|| decode_sequence_into(black_box(packed), black_box(&mut dest)).unwrap())
        });
    }
    group.finish();
}

fn bench_decode_qualities(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_qualities");
    for len in LENGTHS {
        let raw = generate_quality(len);
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &raw, |b, raw| {
            b.iter(|| decode_qualities(black_box(raw)))
        });
    }
    group.finish();
}

fn bench_fastq_bytes(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_fastq_bytes");
    for len in LENGTHS {
        let sequence = generate_sequence(len);
        let qualities: Vec<u8> = generate_quality(len).iter().map(|q| q + 33).collect();
        group.throughput(Throughput::Bytes((len * 2) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(len),
            &(sequence, qualities),
            |b, (sequence, qualities)| {
                b.iter(|| to_fastq_bytes(black_box(b"read1"), sequence, qualities, false))
            },
        );
    }
    group.finish();
}

fn bench_record_fastq_bytes(c: &mut Criterion) {
    let mut group = c.benchmark_group("record_fastq_bytes");
    for len in LENGTHS {
        let sequence = String::from_utf8(generate_sequence(len)).unwrap();
        let qualities: String = generate_quality(len).iter().map(|q| (q + 33) as char).collect();
        let record = SequenceRecord::new("read1", sequence, Some(qualities)).unwrap();
        group.throughput(Throughput::Bytes((len * 2) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &record, |b, record| {
            b.iter(|| record.fastq_bytes().unwrap())
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_is_ascii,
    bench_decode_sequence,
    bench_decode_sequence_into,
    bench_decode_qualities,
    bench_fastq_bytes,
    bench_record_fastq_bytes
);
criterion_main!(benches);
