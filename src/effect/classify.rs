//! Classification of a variant against a single transcript.
//!
//! The classifier walks a fixed sequence of guards and stops at the first
//! that applies: biotype, completeness, exon overlap, UTR position, and
//! finally the reading-frame effect on the coding sequence.

use crate::config::AnnotatorConfig;
use crate::effect::CodingEffect;
use crate::error::FerroError;
use crate::reference::{is_coding_biotype, Transcript};
use crate::sequence::reverse_complement;
use crate::translate::{to_one_letter_string, translate, CodonTable};
use crate::variant::Variant;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// How the amino acids of an in-frame change are reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslationMode {
    /// Translate the affected codons with the standard genetic code
    #[default]
    Standard,
    /// Report every in-frame change as `V` -> `E`
    Placeholder,
}

const PLACEHOLDER_ORIGINAL: &str = "V";
const PLACEHOLDER_REPLACEMENT: &str = "E";

/// Classifies variants against transcripts
#[derive(Debug, Clone)]
pub struct TranscriptClassifier {
    codon_table: CodonTable,
    translation: TranslationMode,
    coding_biotypes: Option<HashSet<String>>,
}

impl Default for TranscriptClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl TranscriptClassifier {
    /// Classifier using the standard code and the built-in coding biotypes
    pub fn new() -> Self {
        Self {
            codon_table: CodonTable::standard(),
            translation: TranslationMode::default(),
            coding_biotypes: None,
        }
    }

    pub fn from_config(config: &AnnotatorConfig) -> Self {
        let classifier = Self::new().with_translation(config.translation);
        match &config.coding_biotypes {
            Some(biotypes) => classifier.with_coding_biotypes(biotypes.iter().cloned()),
            None => classifier,
        }
    }

    pub fn with_translation(mut self, translation: TranslationMode) -> Self {
        self.translation = translation;
        self
    }

    /// Replace the built-in coding biotype set
    pub fn with_coding_biotypes<I, S>(mut self, biotypes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.coding_biotypes = Some(biotypes.into_iter().map(Into::into).collect());
        self
    }

    pub fn translation(&self) -> TranslationMode {
        self.translation
    }

    fn is_coding_biotype(&self, biotype: &str) -> bool {
        match &self.coding_biotypes {
            Some(biotypes) => biotypes.contains(biotype),
            None => is_coding_biotype(biotype),
        }
    }

    /// Determine the effect of `variant` on `transcript`
    ///
    /// # Errors
    ///
    /// Fails when the transcript's coordinates or sequence are inconsistent
    /// with the variant: a position maps before the transcript start, an
    /// end of the span falls in an intron, the span straddles the start or
    /// stop boundary, or the coding sequence disagrees with the reference
    /// allele.
    pub fn classify(
        &self,
        variant: &Variant,
        transcript: &Transcript,
    ) -> Result<CodingEffect, FerroError> {
        if !self.is_coding_biotype(&transcript.biotype) {
            return Ok(CodingEffect::NonCoding);
        }

        if !transcript.complete {
            return Ok(CodingEffect::Incomplete);
        }
        let (utr5_length, coding_sequence) = match (
            transcript.first_start_codon_spliced_offset,
            transcript.coding_sequence.as_deref(),
        ) {
            (Some(offset), Some(sequence)) => (offset as i64, sequence),
            _ => {
                tracing::debug!(
                    "{} is flagged complete but lacks a start codon or coding sequence",
                    transcript.id
                );
                return Ok(CodingEffect::Incomplete);
            }
        };

        if !transcript.overlaps_any_exon(
            variant.contig(),
            variant.position(),
            variant.end_position(),
        ) {
            return Ok(CodingEffect::Intronic);
        }

        let (reference_allele, alternate_allele) = if transcript.strand.is_reverse() {
            (
                reverse_complement(variant.reference_allele()),
                reverse_complement(variant.alternate_allele()),
            )
        } else {
            (
                variant.reference_allele().to_string(),
                variant.alternate_allele().to_string(),
            )
        };

        let first = spliced_offset(transcript, variant, variant.position())?;
        let last = spliced_offset(transcript, variant, variant.end_position())?;
        let start_offset = first.min(last) - utr5_length;
        let end_offset = first.max(last) - utr5_length;

        if start_offset <= 0 && end_offset <= 0 {
            return Ok(CodingEffect::FivePrimeUtr);
        }
        let cds_length = coding_sequence.len() as i64;
        if start_offset >= cds_length && end_offset >= cds_length {
            return Ok(CodingEffect::ThreePrimeUtr);
        }
        if start_offset < 0 || end_offset >= cds_length {
            return Err(FerroError::UtrCdsBoundary {
                transcript: transcript.id.clone(),
                variant: variant.to_string(),
                start: start_offset,
                end: end_offset,
            });
        }

        let start = start_offset as usize;
        let end = end_offset as usize;
        let observed = coding_sequence.get(start..=end).unwrap_or_default();
        if !observed.eq_ignore_ascii_case(&reference_allele) {
            return Err(FerroError::ReferenceSequenceMismatch {
                transcript: transcript.id.clone(),
                variant: variant.to_string(),
                start: start_offset,
                end: end_offset,
                expected: reference_allele,
                found: observed.to_string(),
            });
        }

        let amino_acid_position = (start / 3) as u64;
        let length_difference = reference_allele.len() as i64 - alternate_allele.len() as i64;
        let effect = if length_difference % 3 != 0 {
            CodingEffect::Frameshift {
                amino_acid_position,
            }
        } else {
            let (original, replacement) = match self.translation {
                TranslationMode::Standard => {
                    self.translate_change(coding_sequence, start, end, &alternate_allele)
                }
                TranslationMode::Placeholder => (
                    PLACEHOLDER_ORIGINAL.to_string(),
                    PLACEHOLDER_REPLACEMENT.to_string(),
                ),
            };
            CodingEffect::Substitution {
                amino_acid_position,
                original,
                replacement,
            }
        };

        tracing::debug!("{} on {}: {}", variant, transcript.id, effect);
        Ok(effect)
    }

    /// Translate the codons touched by `[start, end]` before and after the edit
    fn translate_change(
        &self,
        coding_sequence: &str,
        start: usize,
        end: usize,
        alternate_allele: &str,
    ) -> (String, String) {
        let bases = coding_sequence.as_bytes();
        let codon_start = start - start % 3;
        let codon_end = ((end / 3 + 1) * 3).min(bases.len());

        let original = String::from_utf8_lossy(&bases[codon_start..codon_end]);
        let mut edited = String::with_capacity(codon_end - codon_start + alternate_allele.len());
        edited.push_str(&String::from_utf8_lossy(&bases[codon_start..start]));
        edited.push_str(alternate_allele);
        edited.push_str(&String::from_utf8_lossy(&bases[end + 1..codon_end]));

        (
            to_one_letter_string(&translate(&self.codon_table, &original.to_ascii_uppercase())),
            to_one_letter_string(&translate(&self.codon_table, &edited.to_ascii_uppercase())),
        )
    }
}

/// Spliced offset of a variant position, or the error explaining why it has none
fn spliced_offset(
    transcript: &Transcript,
    variant: &Variant,
    position: u64,
) -> Result<i64, FerroError> {
    match transcript.spliced_offset(position) {
        Some(offset) if offset < 0 => Err(FerroError::CoordinateOutOfRange {
            transcript: transcript.id.clone(),
            position,
            offset,
        }),
        Some(offset) => Ok(offset),
        None => Err(FerroError::ExonIntronBoundary {
            transcript: transcript.id.clone(),
            variant: variant.to_string(),
            position,
        }),
    }
}
