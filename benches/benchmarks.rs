//! Performance benchmarks for ferro-annotate
//!
//! Run with: cargo bench
//! Run specific benchmark: cargo bench -- describe

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ferro_annotate::reference::AnnotationDocument;
use ferro_annotate::translate::{translate, CodonTable};
use ferro_annotate::{
    reverse_complement, AnnotationDb, Exon, Gene, Strand, Transcript, VariantAnnotator,
};

const CDS: &str = "ATGGCTGAAAAACTGGGCTGGCGTACCGATTTCCAGAGCCCAGTTCATTATATCGAGAACAAGTAA";

/// `count` three-exon genes spaced 10 kb apart on contig "1"
///
/// Each gene starts at `i * 10_000 + 1` with exons at offsets 0-29, 100-129
/// and 200-229 and a 6 base 5' UTR, so the CDS begins at offset 6.
fn synthetic_db(count: u64) -> AnnotationDb {
    let mut document = AnnotationDocument::default();
    for i in 0..count {
        let base = i * 10_000 + 1;
        let gene_id = format!("ENSG{:08}", i);
        document.genes.push(Gene {
            id: gene_id.clone(),
            name: None,
            contig: "1".to_string(),
            start: base,
            end: base + 229,
            strand: Strand::Plus,
            biotype: "protein_coding".to_string(),
        });
        document.transcripts.push(Transcript {
            id: format!("ENST{:08}", i),
            name: None,
            gene_id,
            biotype: "protein_coding".to_string(),
            complete: true,
            contig: "1".to_string(),
            strand: Strand::Plus,
            exons: vec![
                Exon::new("1", base, base + 29),
                Exon::new("1", base + 100, base + 129),
                Exon::new("1", base + 200, base + 229),
            ],
            first_start_codon_spliced_offset: Some(6),
            coding_sequence: Some(CDS.to_string()),
        });
    }
    AnnotationDb::from_document(document)
}

// =============================================================================
// Describe benchmarks
// =============================================================================

/// Benchmark describe_variant for each outcome category
fn bench_describe(c: &mut Criterion) {
    let annotator = VariantAnnotator::new(synthetic_db(100));

    // gene 5 starts at 50_001; CDS offset 0 is 50_007, offset 30 is 50_107
    let cases = vec![
        ("intergenic", 55_000, "A", "G"),
        ("five_prime_utr", 50_003, "N", "G"),
        ("intronic", 50_050, "N", "G"),
        ("missense", 50_107, "T", "G"),
        ("frameshift", 50_107, "T", "TA"),
        ("inframe_deletion", 50_106, "TTTC", "T"),
    ];

    let mut group = c.benchmark_group("describe");

    for (name, position, reference, alternate) in cases {
        group.bench_function(name, |b| {
            b.iter(|| {
                annotator.describe_variant(
                    black_box("1"),
                    black_box(position),
                    black_box(reference),
                    black_box(alternate),
                )
            })
        });
    }

    group.finish();
}

/// Benchmark how describe_variant scales with database size
fn bench_describe_by_db_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("describe_by_db_size");

    for count in [10u64, 100, 1_000, 10_000] {
        let annotator = VariantAnnotator::new(synthetic_db(count));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| annotator.describe_variant(black_box("1"), black_box(107), "T", "G"))
        });
    }

    group.finish();
}

/// Benchmark throughput across many loci
fn bench_describe_throughput(c: &mut Criterion) {
    let annotator = VariantAnnotator::new(synthetic_db(1_000));
    let positions: Vec<u64> = (0..1_000u64).map(|i| i * 10_000 + 107).collect();

    let mut group = c.benchmark_group("describe_throughput");
    group.throughput(Throughput::Elements(positions.len() as u64));

    group.bench_function("snv_batch", |b| {
        b.iter(|| {
            for &position in &positions {
                let _ = annotator.describe_variant("1", black_box(position), "T", "G");
            }
        })
    });

    group.finish();
}

// =============================================================================
// Sequence benchmarks
// =============================================================================

fn bench_sequence(c: &mut Criterion) {
    let table = CodonTable::standard();
    let mut group = c.benchmark_group("sequence");

    for length in [3usize, 30, 300, 3_000] {
        let seq: String = CDS.chars().cycle().take(length).collect();
        group.throughput(Throughput::Bytes(length as u64));
        group.bench_with_input(
            BenchmarkId::new("reverse_complement", length),
            &seq,
            |b, s| b.iter(|| reverse_complement(black_box(s))),
        );
        group.bench_with_input(BenchmarkId::new("translate", length), &seq, |b, s| {
            b.iter(|| translate(&table, black_box(s)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_describe,
    bench_describe_by_db_size,
    bench_describe_throughput,
    bench_sequence,
);

criterion_main!(benches);
