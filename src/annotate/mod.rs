//! Variant annotation orchestrator
//!
//! [`VariantAnnotator`] queries an [`AnnotationProvider`] for the genes and
//! transcripts at a variant's span, classifies the variant against each
//! transcript, and folds the per-transcript effects into an [`Annotation`].
//!
//! # Example
//!
//! ```
//! use ferro_annotate::annotate::{VariantAnnotator, VariantType};
//! use ferro_annotate::reference::AnnotationDb;
//!
//! let annotator = VariantAnnotator::new(AnnotationDb::new());
//! let annotation = annotator.describe_variant("1", 1000, "A", "G").unwrap();
//! assert_eq!(annotation.variant_type, VariantType::Intergenic);
//! assert!(annotation.coding_effects.is_empty());
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::AnnotatorConfig;
use crate::effect::{CodingEffect, Consequence, TranscriptClassifier};
use crate::error::FerroError;
use crate::reference::{AnnotationProvider, Gene, Transcript};
use crate::variant::Variant;

/// Number of modified bases assumed by the locus helpers
pub const DEFAULT_MODIFIED_BASES: u64 = 1;

/// Variant-level summary of the per-transcript effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VariantType {
    /// No gene overlaps the variant
    Intergenic,
    /// Reserved for a finer-grained aggregation; never produced by
    /// [`aggregate_variant_type`]
    Intronic,
    /// At least one transcript's protein is changed
    Coding,
    /// Genes overlap but no protein is changed
    NonCoding,
}

impl VariantType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VariantType::Intergenic => "intergenic",
            VariantType::Intronic => "intronic",
            VariantType::Coding => "coding",
            VariantType::NonCoding => "non-coding",
        }
    }
}

impl fmt::Display for VariantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of describing one variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub variant: Variant,
    pub variant_type: VariantType,
    /// Genes overlapping the variant span
    pub overlapping_genes: Vec<Gene>,
    /// Overlapping transcripts keyed by gene identifier
    pub overlapping_transcripts: BTreeMap<String, Vec<Transcript>>,
    /// Effect per transcript identifier
    pub coding_effects: BTreeMap<String, CodingEffect>,
}

impl Annotation {
    fn intergenic(variant: Variant) -> Self {
        Self {
            variant,
            variant_type: VariantType::Intergenic,
            overlapping_genes: Vec::new(),
            overlapping_transcripts: BTreeMap::new(),
            coding_effects: BTreeMap::new(),
        }
    }

    pub fn is_intergenic(&self) -> bool {
        self.variant_type == VariantType::Intergenic
    }

    /// Identifiers of the overlapping genes
    pub fn gene_ids(&self) -> Vec<&str> {
        self.overlapping_genes.iter().map(|g| g.id.as_str()).collect()
    }

    pub fn effect(&self, transcript_id: &str) -> Option<&CodingEffect> {
        self.coding_effects.get(transcript_id)
    }

    /// Highest-impact consequence across all transcripts
    ///
    /// Ties keep the transcript that sorts first by identifier.
    pub fn most_severe_consequence(&self) -> Option<Consequence> {
        self.coding_effects
            .values()
            .map(CodingEffect::consequence)
            .reduce(|worst, next| {
                if next.impact() > worst.impact() {
                    next
                } else {
                    worst
                }
            })
    }
}

/// Collapse per-transcript effects into a single variant type
///
/// This is lossy: a variant that is a frameshift in one transcript and
/// intronic in another is simply `coding`, and UTR, intronic, incomplete
/// and non-coding outcomes all become `non-coding`.
pub fn aggregate_variant_type<'a, I>(effects: I) -> VariantType
where
    I: IntoIterator<Item = &'a CodingEffect>,
{
    if effects.into_iter().any(CodingEffect::is_coding) {
        VariantType::Coding
    } else {
        VariantType::NonCoding
    }
}

/// Group transcripts by their parent gene
pub fn group_by_gene(transcripts: Vec<Transcript>) -> BTreeMap<String, Vec<Transcript>> {
    let mut grouped: BTreeMap<String, Vec<Transcript>> = BTreeMap::new();
    for transcript in transcripts {
        grouped
            .entry(transcript.gene_id.clone())
            .or_default()
            .push(transcript);
    }
    grouped
}

/// Describes variants against an annotation provider
///
/// Holds only the provider and an immutable classifier, so it is
/// `Send + Sync` whenever the provider is.
#[derive(Debug, Clone)]
pub struct VariantAnnotator<P> {
    provider: P,
    classifier: TranscriptClassifier,
}

impl<P: AnnotationProvider> VariantAnnotator<P> {
    /// Create an annotator with default settings
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            classifier: TranscriptClassifier::new(),
        }
    }

    /// Create an annotator that applies `config`
    pub fn with_config(provider: P, config: &AnnotatorConfig) -> Self {
        Self {
            provider,
            classifier: TranscriptClassifier::from_config(config),
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn classifier(&self) -> &TranscriptClassifier {
        &self.classifier
    }

    /// Build a variant from its fields and describe it
    ///
    /// # Errors
    ///
    /// Returns [`FerroError::InvalidVariant`] for malformed input and
    /// propagates any error from [`describe`](Self::describe).
    pub fn describe_variant(
        &self,
        contig: &str,
        position: u64,
        reference_allele: &str,
        alternate_allele: &str,
    ) -> Result<Annotation, FerroError> {
        let variant = Variant::new(contig, position, reference_allele, alternate_allele)?;
        self.describe(&variant)
    }

    /// Describe an already-validated variant
    ///
    /// # Errors
    ///
    /// Fails with [`FerroError::NoTranscriptsForOverlappingGene`] when genes
    /// overlap the variant but no transcripts do, or with the first
    /// classification error raised by any overlapping transcript. No partial
    /// annotation is returned.
    pub fn describe(&self, variant: &Variant) -> Result<Annotation, FerroError> {
        let contig = variant.contig();
        let start = variant.position();
        let end = variant.end_position();

        let genes = self.provider.genes_overlapping(contig, start, end)?;
        if genes.is_empty() {
            debug!("{} is intergenic", variant);
            return Ok(Annotation::intergenic(variant.clone()));
        }

        let transcripts = self.provider.transcripts_overlapping(contig, start, end)?;
        if transcripts.is_empty() {
            return Err(FerroError::NoTranscriptsForOverlappingGene {
                variant: variant.to_string(),
                genes: genes.into_iter().map(|g| g.id).collect(),
            });
        }

        let coding_effects = transcripts
            .iter()
            .map(|tx| {
                self.classifier
                    .classify(variant, tx)
                    .map(|effect| (tx.id.clone(), effect))
            })
            .collect::<Result<BTreeMap<_, _>, FerroError>>()?;
        let variant_type = aggregate_variant_type(coding_effects.values());
        debug!(
            "{} overlaps {} genes and {} transcripts: {}",
            variant,
            genes.len(),
            coding_effects.len(),
            variant_type
        );

        Ok(Annotation {
            variant: variant.clone(),
            variant_type,
            overlapping_genes: genes,
            overlapping_transcripts: group_by_gene(transcripts),
            coding_effects,
        })
    }

    /// Genes overlapping a single modified base at `position`
    pub fn variant_gene_ids(&self, contig: &str, position: u64) -> Result<Vec<String>, FerroError> {
        self.variant_gene_ids_spanning(contig, position, DEFAULT_MODIFIED_BASES)
    }

    /// Genes overlapping `[position, position + number_modified_bases]`
    pub fn variant_gene_ids_spanning(
        &self,
        contig: &str,
        position: u64,
        number_modified_bases: u64,
    ) -> Result<Vec<String>, FerroError> {
        let end = locus_end(contig, position, number_modified_bases)?;
        self.provider.gene_ids_at_locus(contig, position, end)
    }

    /// Transcripts overlapping a single modified base at `position`
    pub fn variant_transcript_ids(
        &self,
        contig: &str,
        position: u64,
    ) -> Result<Vec<String>, FerroError> {
        self.variant_transcript_ids_spanning(contig, position, DEFAULT_MODIFIED_BASES)
    }

    /// Transcripts overlapping `[position, position + number_modified_bases]`
    pub fn variant_transcript_ids_spanning(
        &self,
        contig: &str,
        position: u64,
        number_modified_bases: u64,
    ) -> Result<Vec<String>, FerroError> {
        let end = locus_end(contig, position, number_modified_bases)?;
        self.provider.transcript_ids_at_locus(contig, position, end)
    }
}

/// Inclusive end of a locus query, rejecting spans past the coordinate range
fn locus_end(contig: &str, position: u64, number_modified_bases: u64) -> Result<u64, FerroError> {
    position.checked_add(number_modified_bases).ok_or_else(|| {
        FerroError::invalid_variant(format!(
            "{} modified bases at {}:{} overflow the coordinate range",
            number_modified_bases, contig, position
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::{AnnotationDb, Exon, Strand};

    fn gene(id: &str, start: u64, end: u64) -> Gene {
        Gene {
            id: id.to_string(),
            name: None,
            contig: "1".to_string(),
            start,
            end,
            strand: Strand::Plus,
            biotype: "protein_coding".to_string(),
        }
    }

    fn transcript(id: &str, gene_id: &str, biotype: &str) -> Transcript {
        Transcript {
            id: id.to_string(),
            name: None,
            gene_id: gene_id.to_string(),
            biotype: biotype.to_string(),
            complete: true,
            contig: "1".to_string(),
            strand: Strand::Plus,
            exons: vec![Exon::new("1", 101, 110), Exon::new("1", 201, 210)],
            first_start_codon_spliced_offset: Some(3),
            coding_sequence: Some("ATGAAAGAGGTGCCC".to_string()),
        }
    }

    #[test]
    fn test_aggregate_variant_type() {
        let frameshift = CodingEffect::Frameshift {
            amino_acid_position: 1,
        };
        assert_eq!(
            aggregate_variant_type([&CodingEffect::Intronic, &frameshift]),
            VariantType::Coding
        );
        assert_eq!(
            aggregate_variant_type([&CodingEffect::Intronic, &CodingEffect::FivePrimeUtr]),
            VariantType::NonCoding
        );
        assert_eq!(
            aggregate_variant_type(Vec::<&CodingEffect>::new()),
            VariantType::NonCoding
        );
    }

    #[test]
    fn test_group_by_gene() {
        let grouped = group_by_gene(vec![
            transcript("ENST02", "ENSG01", "protein_coding"),
            transcript("ENST03", "ENSG02", "lncRNA"),
            transcript("ENST01", "ENSG01", "protein_coding"),
        ]);
        assert_eq!(grouped.len(), 2);
        let ids: Vec<&str> = grouped["ENSG01"].iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["ENST02", "ENST01"]);
    }

    #[test]
    fn test_variant_type_serde() {
        assert_eq!(
            serde_json::to_string(&VariantType::NonCoding).unwrap(),
            "\"non-coding\""
        );
        assert_eq!(VariantType::Intergenic.to_string(), "intergenic");
    }

    #[test]
    fn test_most_severe_consequence() {
        let mut db = AnnotationDb::new();
        db.add_gene(gene("ENSG01", 100, 220));
        db.add_transcript(transcript("ENST01", "ENSG01", "protein_coding"));
        db.add_transcript(transcript("ENST02", "ENSG01", "lncRNA"));
        let annotator = VariantAnnotator::new(db);

        // offset 7 of the CDS, the A of GAG -> GTG (Glu -> Val)
        let annotation = annotator.describe_variant("1", 201, "A", "T").unwrap();
        assert_eq!(annotation.variant_type, VariantType::Coding);
        assert_eq!(
            annotation.most_severe_consequence(),
            Some(Consequence::MissenseVariant)
        );
        assert_eq!(annotation.effect("ENST02"), Some(&CodingEffect::NonCoding));
        assert_eq!(annotation.gene_ids(), vec!["ENSG01"]);
    }

    #[test]
    fn test_locus_helpers_use_inclusive_end() {
        let mut db = AnnotationDb::new();
        db.add_gene(gene("ENSG01", 100, 220));
        db.add_transcript(transcript("ENST01", "ENSG01", "protein_coding"));
        let annotator = VariantAnnotator::new(db);

        // [99, 100] touches the gene start
        assert_eq!(annotator.variant_gene_ids("1", 99).unwrap(), vec!["ENSG01"]);
        assert!(annotator.variant_gene_ids("1", 98).unwrap().is_empty());
        assert_eq!(
            annotator.variant_transcript_ids_spanning("1", 95, 6).unwrap(),
            vec!["ENST01"]
        );
        assert!(annotator
            .variant_transcript_ids_spanning("1", 95, 5)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_locus_helpers_reject_overflowing_span() {
        let annotator = VariantAnnotator::new(AnnotationDb::new());
        let err = annotator
            .variant_gene_ids_spanning("1", u64::MAX, 2)
            .unwrap_err();
        assert!(matches!(err, FerroError::InvalidVariant { .. }));
        assert!(matches!(
            annotator.variant_transcript_ids("1", u64::MAX),
            Err(FerroError::InvalidVariant { .. })
        ));
        assert!(annotator
            .variant_gene_ids_spanning("1", u64::MAX - 2, 2)
            .unwrap()
            .is_empty());
    }
}
