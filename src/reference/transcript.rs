//! Gene, transcript and exon models
//!
//! # Coordinate System
//!
//! | Field | Basis | Notes |
//! |-------|-------|-------|
//! | `Gene.start`, `Gene.end` | 1-based | Genomic, inclusive |
//! | `Exon.start`, `Exon.end` | 1-based | Genomic, inclusive, `start <= end` on both strands |
//! | `Transcript::spliced_offset` | 0-based | Distance from the transcript's 5' end along the mature sequence |
//! | `Transcript.first_start_codon_spliced_offset` | 0-based | Spliced offset of the first base of the start codon |
//!
//! Exons are listed in transcript order (5' to 3'), which on the minus strand
//! means descending genomic position. Offset calculations do not rely on that
//! order, so out-of-order input still maps correctly.

use serde::{Deserialize, Serialize};

/// Biotypes whose transcripts are translated.
pub const CODING_BIOTYPES: &[&str] = &[
    "protein_coding",
    "nonsense_mediated_decay",
    "non_stop_decay",
    "polymorphic_pseudogene",
    "IG_C_gene",
    "IG_D_gene",
    "IG_J_gene",
    "IG_V_gene",
    "IG_LV_gene",
    "TR_C_gene",
    "TR_D_gene",
    "TR_J_gene",
    "TR_V_gene",
];

/// Check a biotype against the built-in coding set
pub fn is_coding_biotype(biotype: &str) -> bool {
    CODING_BIOTYPES.contains(&biotype)
}

/// Strand orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Strand {
    #[serde(rename = "+")]
    #[default]
    Plus,
    #[serde(rename = "-")]
    Minus,
}

impl Strand {
    pub fn is_reverse(&self) -> bool {
        matches!(self, Strand::Minus)
    }
}

impl std::fmt::Display for Strand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strand::Plus => write!(f, "+"),
            Strand::Minus => write!(f, "-"),
        }
    }
}

/// Inclusive interval overlap on the same contig
fn overlaps(
    contig: &str,
    start: u64,
    end: u64,
    other_contig: &str,
    other_start: u64,
    other_end: u64,
) -> bool {
    contig == other_contig && start <= other_end && end >= other_start
}

/// A gene locus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gene {
    /// Stable identifier (e.g., "ENSG00000141510")
    pub id: String,
    /// Gene symbol (e.g., "TP53")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub contig: String,
    /// Genomic start (1-based, inclusive)
    pub start: u64,
    /// Genomic end (1-based, inclusive)
    pub end: u64,
    #[serde(default)]
    pub strand: Strand,
    #[serde(default)]
    pub biotype: String,
}

impl Gene {
    /// Check if this gene overlaps a genomic range (inclusive)
    pub fn overlaps(&self, contig: &str, start: u64, end: u64) -> bool {
        overlaps(&self.contig, self.start, self.end, contig, start, end)
    }
}

/// An exon with genomic coordinates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exon {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub contig: String,
    /// Genomic start (1-based, inclusive)
    pub start: u64,
    /// Genomic end (1-based, inclusive)
    pub end: u64,
}

impl Exon {
    /// Create an exon without an identifier
    pub fn new(contig: impl Into<String>, start: u64, end: u64) -> Self {
        Self {
            id: None,
            contig: contig.into(),
            start,
            end,
        }
    }

    /// Length of the exon
    pub fn len(&self) -> u64 {
        if self.end >= self.start {
            self.end - self.start + 1
        } else {
            0
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if a genomic position is within this exon
    pub fn contains(&self, pos: u64) -> bool {
        pos >= self.start && pos <= self.end
    }

    /// Check if this exon overlaps a genomic range (inclusive)
    pub fn overlaps(&self, contig: &str, start: u64, end: u64) -> bool {
        overlaps(&self.contig, self.start, self.end, contig, start, end)
    }
}

/// A transcript with its exon structure and coding annotation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    /// Stable identifier (e.g., "ENST00000269305")
    pub id: String,

    /// Transcript name (e.g., "TP53-201")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Parent gene identifier
    pub gene_id: String,

    /// Biotype string (e.g., "protein_coding", "lncRNA")
    pub biotype: String,

    /// Whether both start and stop codons are annotated
    #[serde(default)]
    pub complete: bool,

    pub contig: String,

    pub strand: Strand,

    /// Exons in transcript order (5' to 3')
    pub exons: Vec<Exon>,

    /// Length of the 5' UTR in spliced coordinates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_start_codon_spliced_offset: Option<u64>,

    /// Spliced coding sequence, start codon through stop codon, sense strand
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coding_sequence: Option<String>,
}

impl Transcript {
    /// Check if the biotype is in the built-in coding set
    pub fn is_coding(&self) -> bool {
        is_coding_biotype(&self.biotype)
    }

    /// Genomic span covered by the exons, `(start, end)` inclusive
    pub fn bounds(&self) -> Option<(u64, u64)> {
        let start = self.exons.iter().map(|e| e.start).min()?;
        let end = self.exons.iter().map(|e| e.end).max()?;
        Some((start, end))
    }

    /// First genomic position covered by an exon
    pub fn start(&self) -> Option<u64> {
        self.bounds().map(|(start, _)| start)
    }

    /// Last genomic position covered by an exon
    pub fn end(&self) -> Option<u64> {
        self.bounds().map(|(_, end)| end)
    }

    /// Check if the transcript's genomic span overlaps a range
    pub fn overlaps(&self, contig: &str, start: u64, end: u64) -> bool {
        match self.bounds() {
            Some((tx_start, tx_end)) => {
                overlaps(&self.contig, tx_start, tx_end, contig, start, end)
            }
            None => false,
        }
    }

    /// Check whether any exon overlaps a genomic range
    pub fn overlaps_any_exon(&self, contig: &str, start: u64, end: u64) -> bool {
        self.exons.iter().any(|exon| exon.overlaps(contig, start, end))
    }

    /// Length of the mature (spliced) transcript
    pub fn spliced_length(&self) -> u64 {
        self.exons.iter().map(Exon::len).sum()
    }

    /// Length of the annotated coding sequence
    pub fn coding_sequence_length(&self) -> Option<u64> {
        self.coding_sequence.as_ref().map(|s| s.len() as u64)
    }

    /// Strand-aware distance from the transcript's 5' end, ignoring splicing
    ///
    /// Negative when the position lies upstream of the first transcribed base.
    fn unspliced_offset(&self, position: u64, tx_start: u64, tx_end: u64) -> i64 {
        match self.strand {
            Strand::Plus => position as i64 - tx_start as i64,
            Strand::Minus => tx_end as i64 - position as i64,
        }
    }

    /// Map a genomic position onto the mature transcript
    ///
    /// Returns the 0-based spliced offset for exonic positions. Positions
    /// upstream of the transcript yield a negative offset and positions
    /// downstream extend past the last base, as if the terminal exons were
    /// longer. Intronic positions have no spliced offset and return `None`,
    /// as does a transcript without exons.
    pub fn spliced_offset(&self, position: u64) -> Option<i64> {
        let (tx_start, tx_end) = self.bounds()?;
        let offset = self.unspliced_offset(position, tx_start, tx_end);

        if offset < 0 {
            return Some(offset);
        }
        let unspliced_length = (tx_end - tx_start + 1) as i64;
        if offset >= unspliced_length {
            let past_end = offset - unspliced_length;
            return Some(self.spliced_length() as i64 + past_end);
        }

        let mut ranges: Vec<(i64, i64)> = self
            .exons
            .iter()
            .map(|exon| {
                let a = self.unspliced_offset(exon.start, tx_start, tx_end);
                let b = self.unspliced_offset(exon.end, tx_start, tx_end);
                (a.min(b), a.max(b))
            })
            .collect();
        ranges.sort_unstable();

        let mut spliced = 0i64;
        for (exon_start, exon_end) in ranges {
            if (exon_start..=exon_end).contains(&offset) {
                return Some(spliced + offset - exon_start);
            }
            spliced += exon_end - exon_start + 1;
        }
        None
    }
}
