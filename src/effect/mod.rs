//! Per-transcript coding effects.
//!
//! A [`CodingEffect`] is the single outcome of classifying one variant
//! against one transcript. The categories are mutually exclusive; each maps
//! onto a Sequence Ontology [`Consequence`] and a VEP-style [`Impact`].
//!
//! # Example
//!
//! ```
//! use ferro_annotate::effect::{CodingEffect, Consequence, Impact};
//!
//! let effect = CodingEffect::Substitution {
//!     amino_acid_position: 599,
//!     original: "V".to_string(),
//!     replacement: "E".to_string(),
//! };
//!
//! assert_eq!(effect.to_string(), "coding V599E");
//! assert_eq!(effect.protein_position(), Some(600));
//! assert_eq!(effect.consequence(), Consequence::MissenseVariant);
//! assert_eq!(effect.consequence().impact(), Impact::Moderate);
//! ```

pub mod classify;

pub use classify::{TranscriptClassifier, TranslationMode};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Structural category of a per-transcript outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectCategory {
    NonCoding,
    Incomplete,
    Intronic,
    FivePrimeUtr,
    ThreePrimeUtr,
    Frameshift,
    Substitution,
}

impl EffectCategory {
    /// Label used in descriptors and text output
    pub fn as_str(&self) -> &'static str {
        match self {
            EffectCategory::NonCoding => "non-coding",
            EffectCategory::Incomplete => "incomplete",
            EffectCategory::Intronic => "intronic",
            EffectCategory::FivePrimeUtr => "5' UTR",
            EffectCategory::ThreePrimeUtr => "3' UTR",
            EffectCategory::Frameshift => "frameshift",
            EffectCategory::Substitution => "substitution",
        }
    }

    /// Whether this category carries a protein-level descriptor
    pub fn is_coding(&self) -> bool {
        matches!(
            self,
            EffectCategory::Frameshift | EffectCategory::Substitution
        )
    }
}

impl fmt::Display for EffectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of classifying a variant against one transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum CodingEffect {
    /// Transcript biotype is not translated
    NonCoding,
    /// Start or stop codon is not annotated
    Incomplete,
    /// Variant overlaps no exon
    Intronic,
    /// Variant lies entirely upstream of the start codon
    FivePrimeUtr,
    /// Variant lies entirely downstream of the coding sequence
    ThreePrimeUtr,
    /// Length change is not a multiple of three
    Frameshift {
        /// 0-based codon index, `coding_offset / 3`
        amino_acid_position: u64,
    },
    /// In-frame change of one or more codons
    Substitution {
        /// 0-based codon index, `coding_offset / 3`
        amino_acid_position: u64,
        /// Reference amino acids, 1-letter codes
        original: String,
        /// Alternate amino acids, 1-letter codes
        replacement: String,
    },
}

impl CodingEffect {
    pub fn category(&self) -> EffectCategory {
        match self {
            CodingEffect::NonCoding => EffectCategory::NonCoding,
            CodingEffect::Incomplete => EffectCategory::Incomplete,
            CodingEffect::Intronic => EffectCategory::Intronic,
            CodingEffect::FivePrimeUtr => EffectCategory::FivePrimeUtr,
            CodingEffect::ThreePrimeUtr => EffectCategory::ThreePrimeUtr,
            CodingEffect::Frameshift { .. } => EffectCategory::Frameshift,
            CodingEffect::Substitution { .. } => EffectCategory::Substitution,
        }
    }

    /// Whether the variant changes the protein of this transcript
    pub fn is_coding(&self) -> bool {
        self.category().is_coding()
    }

    /// 1-based protein position for coding effects
    pub fn protein_position(&self) -> Option<u64> {
        match self {
            CodingEffect::Frameshift {
                amino_acid_position,
            }
            | CodingEffect::Substitution {
                amino_acid_position,
                ..
            } => Some(amino_acid_position + 1),
            _ => None,
        }
    }

    /// Sequence Ontology consequence of this effect
    pub fn consequence(&self) -> Consequence {
        match self {
            CodingEffect::NonCoding => Consequence::NonCodingTranscriptVariant,
            CodingEffect::Incomplete => Consequence::CodingTranscriptVariant,
            CodingEffect::Intronic => Consequence::IntronVariant,
            CodingEffect::FivePrimeUtr => Consequence::FivePrimeUtrVariant,
            CodingEffect::ThreePrimeUtr => Consequence::ThreePrimeUtrVariant,
            CodingEffect::Frameshift { .. } => Consequence::FrameshiftVariant,
            CodingEffect::Substitution {
                amino_acid_position,
                original,
                replacement,
            } => substitution_consequence(*amino_acid_position, original, replacement),
        }
    }
}

fn substitution_consequence(position: u64, original: &str, replacement: &str) -> Consequence {
    let stop_in_original = original.contains('*');
    let stop_in_replacement = replacement.contains('*');

    if original == replacement {
        Consequence::SynonymousVariant
    } else if stop_in_replacement && !stop_in_original {
        Consequence::StopGained
    } else if stop_in_original && !stop_in_replacement {
        Consequence::StopLost
    } else if position == 0 && original.starts_with('M') && !replacement.starts_with('M') {
        Consequence::StartLost
    } else if replacement.len() > original.len() {
        Consequence::InframeInsertion
    } else if replacement.len() < original.len() {
        Consequence::InframeDeletion
    } else {
        Consequence::MissenseVariant
    }
}

impl fmt::Display for CodingEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodingEffect::Frameshift {
                amino_acid_position,
            } => write!(f, "coding {}fs", amino_acid_position),
            CodingEffect::Substitution {
                amino_acid_position,
                original,
                replacement,
            } => write!(
                f,
                "coding {}{}{}",
                original, amino_acid_position, replacement
            ),
            other => write!(f, "{}", other.category()),
        }
    }
}

/// Sequence Ontology consequence term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Consequence {
    /// Introduces a premature stop codon.
    StopGained,
    /// Insertion/deletion causing frameshift.
    FrameshiftVariant,
    /// Stop codon changed to amino acid.
    StopLost,
    /// Start codon changed to other.
    StartLost,
    /// Amino acid substitution.
    MissenseVariant,
    /// In-frame insertion of amino acids.
    InframeInsertion,
    /// In-frame deletion of amino acids.
    InframeDeletion,
    /// Silent change (codon change, same amino acid).
    SynonymousVariant,
    /// Variant in 5' UTR.
    FivePrimeUtrVariant,
    /// Variant in 3' UTR.
    ThreePrimeUtrVariant,
    /// Variant in intron.
    IntronVariant,
    /// Variant in a transcript that is not translated.
    NonCodingTranscriptVariant,
    /// Variant in a coding transcript whose CDS is not fully annotated.
    CodingTranscriptVariant,
}

impl Consequence {
    /// Get the Sequence Ontology term.
    pub fn so_term(&self) -> &'static str {
        match self {
            Consequence::StopGained => "stop_gained",
            Consequence::FrameshiftVariant => "frameshift_variant",
            Consequence::StopLost => "stop_lost",
            Consequence::StartLost => "start_lost",
            Consequence::MissenseVariant => "missense_variant",
            Consequence::InframeInsertion => "inframe_insertion",
            Consequence::InframeDeletion => "inframe_deletion",
            Consequence::SynonymousVariant => "synonymous_variant",
            Consequence::FivePrimeUtrVariant => "5_prime_UTR_variant",
            Consequence::ThreePrimeUtrVariant => "3_prime_UTR_variant",
            Consequence::IntronVariant => "intron_variant",
            Consequence::NonCodingTranscriptVariant => "non_coding_transcript_variant",
            Consequence::CodingTranscriptVariant => "coding_transcript_variant",
        }
    }

    /// Get the Sequence Ontology ID.
    pub fn so_id(&self) -> &'static str {
        match self {
            Consequence::StopGained => "SO:0001587",
            Consequence::FrameshiftVariant => "SO:0001589",
            Consequence::StopLost => "SO:0001578",
            Consequence::StartLost => "SO:0002012",
            Consequence::MissenseVariant => "SO:0001583",
            Consequence::InframeInsertion => "SO:0001821",
            Consequence::InframeDeletion => "SO:0001822",
            Consequence::SynonymousVariant => "SO:0001819",
            Consequence::FivePrimeUtrVariant => "SO:0001623",
            Consequence::ThreePrimeUtrVariant => "SO:0001624",
            Consequence::IntronVariant => "SO:0001627",
            Consequence::NonCodingTranscriptVariant => "SO:0001619",
            Consequence::CodingTranscriptVariant => "SO:0001968",
        }
    }

    /// Get the impact level.
    pub fn impact(&self) -> Impact {
        match self {
            Consequence::StopGained
            | Consequence::FrameshiftVariant
            | Consequence::StopLost
            | Consequence::StartLost => Impact::High,

            Consequence::MissenseVariant
            | Consequence::InframeInsertion
            | Consequence::InframeDeletion => Impact::Moderate,

            Consequence::SynonymousVariant => Impact::Low,

            Consequence::FivePrimeUtrVariant
            | Consequence::ThreePrimeUtrVariant
            | Consequence::IntronVariant
            | Consequence::NonCodingTranscriptVariant
            | Consequence::CodingTranscriptVariant => Impact::Modifier,
        }
    }
}

impl fmt::Display for Consequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.so_term())
    }
}

/// Variant impact level (VEP-style).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Impact {
    /// Modifier - minimal predicted impact.
    Modifier,
    /// Low impact.
    Low,
    /// Moderate impact.
    Moderate,
    /// High impact (likely deleterious).
    High,
}

impl Impact {
    /// Get the impact as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Impact::High => "HIGH",
            Impact::Moderate => "MODERATE",
            Impact::Low => "LOW",
            Impact::Modifier => "MODIFIER",
        }
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
