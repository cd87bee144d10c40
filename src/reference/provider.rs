//! Annotation provider trait
//!
//! Defines the read-only interface the annotator uses to find genes and
//! transcripts at a locus.

use crate::error::FerroError;
use crate::reference::transcript::{Gene, Transcript};

/// Trait for providing genome annotation data
///
/// Implementations might include:
/// - [`AnnotationDb`](crate::reference::AnnotationDb), an in-memory collection
/// - an interval-tree index over a GTF release
/// - a client for a remote annotation service
///
/// All ranges are 1-based and inclusive on both ends. Implementations must
/// be safe for concurrent reads if the annotator is shared across threads.
pub trait AnnotationProvider {
    /// Genes whose span overlaps `[start, end]` on `contig`
    fn genes_overlapping(&self, contig: &str, start: u64, end: u64)
        -> Result<Vec<Gene>, FerroError>;

    /// Transcripts whose span overlaps `[start, end]` on `contig`
    fn transcripts_overlapping(
        &self,
        contig: &str,
        start: u64,
        end: u64,
    ) -> Result<Vec<Transcript>, FerroError>;

    /// Identifiers of genes overlapping a locus
    fn gene_ids_at_locus(
        &self,
        contig: &str,
        start: u64,
        end: u64,
    ) -> Result<Vec<String>, FerroError> {
        Ok(self
            .genes_overlapping(contig, start, end)?
            .into_iter()
            .map(|gene| gene.id)
            .collect())
    }

    /// Identifiers of transcripts overlapping a locus
    fn transcript_ids_at_locus(
        &self,
        contig: &str,
        start: u64,
        end: u64,
    ) -> Result<Vec<String>, FerroError> {
        Ok(self
            .transcripts_overlapping(contig, start, end)?
            .into_iter()
            .map(|tx| tx.id)
            .collect())
    }
}

impl<P: AnnotationProvider + ?Sized> AnnotationProvider for &P {
    fn genes_overlapping(
        &self,
        contig: &str,
        start: u64,
        end: u64,
    ) -> Result<Vec<Gene>, FerroError> {
        (**self).genes_overlapping(contig, start, end)
    }

    fn transcripts_overlapping(
        &self,
        contig: &str,
        start: u64,
        end: u64,
    ) -> Result<Vec<Transcript>, FerroError> {
        (**self).transcripts_overlapping(contig, start, end)
    }

    fn gene_ids_at_locus(
        &self,
        contig: &str,
        start: u64,
        end: u64,
    ) -> Result<Vec<String>, FerroError> {
        (**self).gene_ids_at_locus(contig, start, end)
    }

    fn transcript_ids_at_locus(
        &self,
        contig: &str,
        start: u64,
        end: u64,
    ) -> Result<Vec<String>, FerroError> {
        (**self).transcript_ids_at_locus(contig, start, end)
    }
}

/// Blanket implementation for boxed trait objects
impl AnnotationProvider for Box<dyn AnnotationProvider + Send + Sync> {
    fn genes_overlapping(
        &self,
        contig: &str,
        start: u64,
        end: u64,
    ) -> Result<Vec<Gene>, FerroError> {
        (**self).genes_overlapping(contig, start, end)
    }

    fn transcripts_overlapping(
        &self,
        contig: &str,
        start: u64,
        end: u64,
    ) -> Result<Vec<Transcript>, FerroError> {
        (**self).transcripts_overlapping(contig, start, end)
    }

    fn gene_ids_at_locus(
        &self,
        contig: &str,
        start: u64,
        end: u64,
    ) -> Result<Vec<String>, FerroError> {
        (**self).gene_ids_at_locus(contig, start, end)
    }

    fn transcript_ids_at_locus(
        &self,
        contig: &str,
        start: u64,
        end: u64,
    ) -> Result<Vec<String>, FerroError> {
        (**self).transcript_ids_at_locus(contig, start, end)
    }
}
