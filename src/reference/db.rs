//! In-memory annotation database
//!
//! Holds genes and transcripts per contig and answers overlap queries by
//! scanning the contig's records. Suitable for tests, small panels and the
//! command-line tool; large genomes want an interval index behind the same
//! [`AnnotationProvider`] trait.
//!
//! # JSON format
//!
//! ```json
//! {
//!   "genes": [
//!     {"id": "ENSG01", "name": "GENE1", "contig": "1", "start": 100, "end": 400, "strand": "+", "biotype": "protein_coding"}
//!   ],
//!   "transcripts": [
//!     {"id": "ENST01", "gene_id": "ENSG01", "biotype": "protein_coding", "complete": true,
//!      "contig": "1", "strand": "+",
//!      "exons": [{"contig": "1", "start": 100, "end": 200}],
//!      "first_start_codon_spliced_offset": 10, "coding_sequence": "ATG..."}
//!   ]
//! }
//! ```

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::FerroError;
use crate::reference::provider::AnnotationProvider;
use crate::reference::transcript::{Gene, Transcript};

/// Serialized form of an [`AnnotationDb`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnnotationDocument {
    #[serde(default)]
    pub genes: Vec<Gene>,
    #[serde(default)]
    pub transcripts: Vec<Transcript>,
}

/// Genes and transcripts grouped by contig
#[derive(Debug, Clone, Default)]
pub struct AnnotationDb {
    genes: HashMap<String, Vec<Gene>>,
    transcripts: HashMap<String, Vec<Transcript>>,
}

impl AnnotationDb {
    /// Create an empty database
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a database from a JSON file
    pub fn from_json(path: &Path) -> Result<Self, FerroError> {
        let content = std::fs::read_to_string(path)?;
        let db = Self::from_json_str(&content)?;
        debug!(
            "Loaded {} genes and {} transcripts from {}",
            db.gene_count(),
            db.transcript_count(),
            path.display()
        );
        Ok(db)
    }

    /// Parse a database from JSON text
    pub fn from_json_str(content: &str) -> Result<Self, FerroError> {
        let document: AnnotationDocument = serde_json::from_str(content)?;
        Ok(Self::from_document(document))
    }

    /// Build a database from a deserialized document
    pub fn from_document(document: AnnotationDocument) -> Self {
        let mut db = Self::new();
        for gene in document.genes {
            db.add_gene(gene);
        }

        let gene_ids: HashSet<String> = db
            .genes
            .values()
            .flatten()
            .map(|gene| gene.id.clone())
            .collect();
        for transcript in document.transcripts {
            if !gene_ids.contains(&transcript.gene_id) {
                warn!(
                    "Transcript {} references unknown gene {}",
                    transcript.id, transcript.gene_id
                );
            }
            db.add_transcript(transcript);
        }
        db
    }

    /// Export the database contents
    pub fn to_document(&self) -> AnnotationDocument {
        let mut genes: Vec<Gene> = self.genes.values().flatten().cloned().collect();
        genes.sort_by(|a, b| a.id.cmp(&b.id));
        let mut transcripts: Vec<Transcript> =
            self.transcripts.values().flatten().cloned().collect();
        transcripts.sort_by(|a, b| a.id.cmp(&b.id));
        AnnotationDocument { genes, transcripts }
    }

    /// Add a gene
    pub fn add_gene(&mut self, gene: Gene) {
        self.genes.entry(gene.contig.clone()).or_default().push(gene);
    }

    /// Add a transcript
    pub fn add_transcript(&mut self, transcript: Transcript) {
        if transcript.exons.is_empty() {
            warn!("Transcript {} has no exons and will never overlap", transcript.id);
        }
        if let Some(exon) = transcript
            .exons
            .iter()
            .find(|exon| exon.contig != transcript.contig)
        {
            warn!(
                "Transcript {} on {} has an exon on {}",
                transcript.id, transcript.contig, exon.contig
            );
        }
        self.transcripts
            .entry(transcript.contig.clone())
            .or_default()
            .push(transcript);
    }

    pub fn gene_count(&self) -> usize {
        self.genes.values().map(Vec::len).sum()
    }

    pub fn transcript_count(&self) -> usize {
        self.transcripts.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.gene_count() == 0 && self.transcript_count() == 0
    }
}

impl AnnotationProvider for AnnotationDb {
    fn genes_overlapping(
        &self,
        contig: &str,
        start: u64,
        end: u64,
    ) -> Result<Vec<Gene>, FerroError> {
        let mut genes: Vec<Gene> = self
            .genes
            .get(contig)
            .map(|genes| {
                genes
                    .iter()
                    .filter(|gene| gene.overlaps(contig, start, end))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        genes.sort_by(|a, b| a.id.cmp(&b.id));
        genes.dedup_by(|a, b| a.id == b.id);
        Ok(genes)
    }

    fn transcripts_overlapping(
        &self,
        contig: &str,
        start: u64,
        end: u64,
    ) -> Result<Vec<Transcript>, FerroError> {
        let mut transcripts: Vec<Transcript> = self
            .transcripts
            .get(contig)
            .map(|transcripts| {
                transcripts
                    .iter()
                    .filter(|tx| tx.overlaps(contig, start, end))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        transcripts.sort_by(|a, b| a.id.cmp(&b.id));
        transcripts.dedup_by(|a, b| a.id == b.id);
        Ok(transcripts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::transcript::{Exon, Strand};

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

    fn transcript(id: &str, gene_id: &str, exons: &[(u64, u64)]) -> Transcript {
        Transcript {
            id: id.to_string(),
            name: None,
            gene_id: gene_id.to_string(),
            biotype: "protein_coding".to_string(),
            complete: true,
            contig: "1".to_string(),
            strand: Strand::Plus,
            exons: exons.iter().map(|&(s, e)| Exon::new("1", s, e)).collect(),
            first_start_codon_spliced_offset: None,
            coding_sequence: None,
        }
    }

    fn test_db() -> AnnotationDb {
        let mut db = AnnotationDb::new();
        db.add_gene(gene("G2", 500, 900));
        db.add_gene(gene("G1", 100, 400));
        db.add_transcript(transcript("T1b", "G1", &[(150, 200), (300, 400)]));
        db.add_transcript(transcript("T1a", "G1", &[(100, 200), (300, 350)]));
        db.add_transcript(transcript("T2", "G2", &[(500, 900)]));
        db
    }

    #[test]
    fn test_genes_overlapping() {
        let db = test_db();
        let ids: Vec<String> = db
            .genes_overlapping("1", 390, 510)
            .unwrap()
            .into_iter()
            .map(|g| g.id)
            .collect();
        assert_eq!(ids, vec!["G1", "G2"]);
        assert!(db.genes_overlapping("1", 401, 499).unwrap().is_empty());
        assert!(db.genes_overlapping("2", 100, 200).unwrap().is_empty());
    }

    #[test]
    fn test_transcripts_overlapping_sorted() {
        let db = test_db();
        let ids = db.transcript_ids_at_locus("1", 120, 160).unwrap();
        assert_eq!(ids, vec!["T1a", "T1b"]);
    }

    #[test]
    fn test_transcript_overlap_uses_span_not_exons() {
        let db = test_db();
        // 250 is intronic for both G1 transcripts but inside their spans
        let ids = db.transcript_ids_at_locus("1", 250, 250).unwrap();
        assert_eq!(ids, vec!["T1a", "T1b"]);
    }

    #[test]
    fn test_gene_ids_at_locus() {
        let db = test_db();
        assert_eq!(db.gene_ids_at_locus("1", 600, 601).unwrap(), vec!["G2"]);
    }

    #[test]
    fn test_counts() {
        let db = test_db();
        assert_eq!(db.gene_count(), 2);
        assert_eq!(db.transcript_count(), 3);
        assert!(!db.is_empty());
        assert!(AnnotationDb::new().is_empty());
    }

    #[test]
    fn test_document_round_trip() {
        let db = test_db();
        let json = serde_json::to_string(&db.to_document()).unwrap();
        let reloaded = AnnotationDb::from_json_str(&json).unwrap();
        assert_eq!(reloaded.transcript_count(), 3);
        assert_eq!(
            reloaded.transcript_ids_at_locus("1", 600, 600).unwrap(),
            vec!["T2"]
        );
    }

    #[test]
    fn test_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("annotations.json");
        std::fs::write(
            &path,
            r#"{"genes": [{"id": "G9", "contig": "X", "start": 1, "end": 10}]}"#,
        )
        .unwrap();
        let db = AnnotationDb::from_json(&path).unwrap();
        assert_eq!(db.gene_ids_at_locus("X", 5, 5).unwrap(), vec!["G9"]);
        assert_eq!(db.transcript_count(), 0);
    }

    #[test]
    fn test_from_json_errors() {
        assert!(matches!(
            AnnotationDb::from_json_str("{not json"),
            Err(FerroError::Json { .. })
        ));
        assert!(matches!(
            AnnotationDb::from_json(Path::new("/nonexistent/annotations.json")),
            Err(FerroError::Io { .. })
        ));
    }
}
