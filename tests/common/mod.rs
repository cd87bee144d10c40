//! Shared annotation fixture for integration tests
//!
//! Contig "1" carries:
//! - ENSG01 (+), 1001-1230
//!   - ENST01 protein_coding, exons 1001-1030, 1101-1130, 1201-1230;
//!     6 base 5' UTR, 66 base CDS (1007-1030, 1101-1130, 1201-1212)
//!   - ENST02 lncRNA, exon 1001-1050
//!   - ENST03 protein_coding, incomplete, exon 1101-1130
//! - ENSG02 (-), 5001-5130
//!   - ENST04 protein_coding, exons 5101-5130, 5001-5030; 3 base 5' UTR,
//!     45 base CDS (5127-5101, 5030-5013)
//! - ENSG03, 9000-9100, with no transcripts
//!
//! Contig "2" has no annotation.

#![allow(dead_code)]

use ferro_annotate::reference::{AnnotationDb, AnnotationDocument};
use ferro_annotate::sequence::complement;
use ferro_annotate::{Exon, Gene, Strand, Transcript};

pub const PLUS_UTR5: &str = "GCCACC";
pub const PLUS_CDS: &str = "ATGGCTGAAAAACTGGGCTGGCGTACCGATTTCCAGAGCCCAGTTCATTATATCGAGAACAAGTAA";
pub const PLUS_UTR3: &str = "CTGACCTTGAGGCCTAAT";
pub const PLUS_EXONS: &[(u64, u64)] = &[(1001, 1030), (1101, 1130), (1201, 1230)];

pub const MINUS_UTR5: &str = "GCC";
pub const MINUS_CDS: &str = "ATGAAACCCGGGTTTGAATGGCATAACCGTTCAGATCTGATCTGA";
pub const MINUS_UTR3: &str = "CAGGTTAAGCAT";
/// Transcript order, 5' to 3'
pub const MINUS_EXONS: &[(u64, u64)] = &[(5101, 5130), (5001, 5030)];

fn exons(ranges: &[(u64, u64)]) -> Vec<Exon> {
    ranges
        .iter()
        .map(|&(start, end)| Exon::new("1", start, end))
        .collect()
}

fn gene(id: &str, name: &str, start: u64, end: u64, strand: Strand) -> Gene {
    Gene {
        id: id.to_string(),
        name: Some(name.to_string()),
        contig: "1".to_string(),
        start,
        end,
        strand,
        biotype: "protein_coding".to_string(),
    }
}

pub fn plus_transcript() -> Transcript {
    Transcript {
        id: "ENST01".to_string(),
        name: Some("GENE1-201".to_string()),
        gene_id: "ENSG01".to_string(),
        biotype: "protein_coding".to_string(),
        complete: true,
        contig: "1".to_string(),
        strand: Strand::Plus,
        exons: exons(PLUS_EXONS),
        first_start_codon_spliced_offset: Some(PLUS_UTR5.len() as u64),
        coding_sequence: Some(PLUS_CDS.to_string()),
    }
}

pub fn lnc_transcript() -> Transcript {
    Transcript {
        id: "ENST02".to_string(),
        name: Some("GENE1-202".to_string()),
        gene_id: "ENSG01".to_string(),
        biotype: "lncRNA".to_string(),
        complete: true,
        contig: "1".to_string(),
        strand: Strand::Plus,
        exons: exons(&[(1001, 1050)]),
        first_start_codon_spliced_offset: None,
        coding_sequence: None,
    }
}

pub fn incomplete_transcript() -> Transcript {
    Transcript {
        id: "ENST03".to_string(),
        name: Some("GENE1-203".to_string()),
        gene_id: "ENSG01".to_string(),
        biotype: "protein_coding".to_string(),
        complete: false,
        contig: "1".to_string(),
        strand: Strand::Plus,
        exons: exons(&[(1101, 1130)]),
        first_start_codon_spliced_offset: None,
        coding_sequence: None,
    }
}

pub fn minus_transcript() -> Transcript {
    Transcript {
        id: "ENST04".to_string(),
        name: Some("GENE2-201".to_string()),
        gene_id: "ENSG02".to_string(),
        biotype: "protein_coding".to_string(),
        complete: true,
        contig: "1".to_string(),
        strand: Strand::Minus,
        exons: exons(MINUS_EXONS),
        first_start_codon_spliced_offset: Some(MINUS_UTR5.len() as u64),
        coding_sequence: Some(MINUS_CDS.to_string()),
    }
}

pub fn annotation_document() -> AnnotationDocument {
    AnnotationDocument {
        genes: vec![
            gene("ENSG01", "GENE1", 1001, 1230, Strand::Plus),
            gene("ENSG02", "GENE2", 5001, 5130, Strand::Minus),
            gene("ENSG03", "GENE3", 9000, 9100, Strand::Plus),
        ],
        transcripts: vec![
            plus_transcript(),
            lnc_transcript(),
            incomplete_transcript(),
            minus_transcript(),
        ],
    }
}

pub fn annotation_db() -> AnnotationDb {
    AnnotationDb::from_document(annotation_document())
}

/// Plus-strand reference base on contig "1"; `N` outside the modelled exons
pub fn reference_base(position: u64) -> char {
    let plus = [PLUS_UTR5, PLUS_CDS, PLUS_UTR3].concat();
    let mut spliced = 0;
    for &(start, end) in PLUS_EXONS {
        if (start..=end).contains(&position) {
            return plus.as_bytes()[spliced + (position - start) as usize] as char;
        }
        spliced += (end - start + 1) as usize;
    }

    let minus = [MINUS_UTR5, MINUS_CDS, MINUS_UTR3].concat();
    let mut spliced = 0;
    for &(start, end) in MINUS_EXONS {
        if (start..=end).contains(&position) {
            return complement(minus.as_bytes()[spliced + (end - position) as usize] as char);
        }
        spliced += (end - start + 1) as usize;
    }

    'N'
}

/// Plus-strand reference sequence of `length` bases starting at `position`
pub fn reference_allele(position: u64, length: u64) -> String {
    (position..position + length).map(reference_base).collect()
}

/// Genomic position of a 0-based offset into ENST01's coding sequence
pub fn plus_cds_position(offset: u64) -> u64 {
    match offset {
        0..=23 => 1007 + offset,
        24..=53 => 1101 + offset - 24,
        _ => 1201 + offset - 54,
    }
}
