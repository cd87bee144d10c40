// Copyright (c) 2024-2025 Fulcrum Genomics LLC
// SPDX-License-Identifier: MIT

//! ferro-annotate: variant consequence annotator
//!
//! Part of the ferro bioinformatics toolkit.
//!
//! Given a VCF-style variant (contig, 1-based position, reference and
//! alternate alleles), finds the overlapping genes and transcripts through an
//! [`AnnotationProvider`] and classifies the variant against every transcript:
//! non-coding, incomplete, intronic, 5' UTR, 3' UTR, frameshift or in-frame
//! substitution.
//!
//! # Example
//!
//! ```
//! use ferro_annotate::{AnnotationDb, VariantAnnotator, VariantType};
//!
//! let db = AnnotationDb::from_json_str(r#"{
//!   "genes": [{"id": "ENSG01", "contig": "1", "start": 101, "end": 210}],
//!   "transcripts": [{
//!     "id": "ENST01", "gene_id": "ENSG01", "biotype": "protein_coding",
//!     "complete": true, "contig": "1", "strand": "+",
//!     "exons": [{"contig": "1", "start": 101, "end": 110},
//!               {"contig": "1", "start": 201, "end": 210}],
//!     "first_start_codon_spliced_offset": 3,
//!     "coding_sequence": "ATGAAAGAGGTGCCC"
//!   }]
//! }"#).unwrap();
//!
//! let annotator = VariantAnnotator::new(db);
//! let annotation = annotator.describe_variant("1", 201, "A", "T").unwrap();
//!
//! assert_eq!(annotation.variant_type, VariantType::Coding);
//! assert_eq!(annotation.coding_effects["ENST01"].to_string(), "coding E2V");
//! ```

pub mod annotate;
pub mod cli;
pub mod config;
pub mod effect;
pub mod error;
pub mod reference;
pub mod sequence;
pub mod translate;
pub mod variant;

// Re-export commonly used types
pub use annotate::{aggregate_variant_type, Annotation, VariantAnnotator, VariantType};
pub use config::AnnotatorConfig;
pub use effect::{CodingEffect, Consequence, Impact, TranscriptClassifier, TranslationMode};
pub use error::{ErrorCode, FerroError};
pub use reference::{AnnotationDb, AnnotationProvider, Exon, Gene, Strand, Transcript};
pub use sequence::reverse_complement;
pub use variant::Variant;

/// Result type alias for ferro-annotate operations
pub type Result<T> = std::result::Result<T, FerroError>;
