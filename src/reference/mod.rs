//! Genome annotation data
//!
//! Provides the [`AnnotationProvider`] trait the annotator consumes, the
//! gene/transcript model, and an in-memory implementation.

pub mod db;
pub mod provider;
pub mod transcript;

pub use db::{AnnotationDb, AnnotationDocument};
pub use provider::AnnotationProvider;
pub use transcript::{is_coding_biotype, Exon, Gene, Strand, Transcript, CODING_BIOTYPES};
