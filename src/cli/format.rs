//! Output formatting utilities for CLI operations

use crate::annotate::Annotation;
use crate::error::FerroError;
use std::io::{self, Write};
use std::str::FromStr;

/// Output format for CLI results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Tab-separated text (default)
    #[default]
    Text,
    /// JSON format
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    /// Parse an output format from a string
    ///
    /// # Examples
    ///
    /// ```
    /// use ferro_annotate::cli::OutputFormat;
    /// use std::str::FromStr;
    ///
    /// assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
    /// assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
    /// assert!(OutputFormat::from_str("vcf").is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{}'", other)),
        }
    }
}

/// Write an annotation
///
/// Text output is one header line with the variant and its type, one
/// `gene` line per overlapping gene, and one `transcript` line per
/// classified transcript with its SO consequence and impact.
///
/// # Examples
///
/// ```
/// use ferro_annotate::annotate::VariantAnnotator;
/// use ferro_annotate::cli::{output_annotation, OutputFormat};
/// use ferro_annotate::reference::AnnotationDb;
/// use std::io::Cursor;
///
/// let annotation = VariantAnnotator::new(AnnotationDb::new())
///     .describe_variant("1", 100, "A", "G")
///     .unwrap();
/// let mut buffer = Cursor::new(Vec::new());
/// output_annotation(&mut buffer, &annotation, OutputFormat::Text).unwrap();
/// let result = String::from_utf8(buffer.into_inner()).unwrap();
/// assert_eq!(result, "1:100 A>G\tintergenic\n");
/// ```
pub fn output_annotation<W: Write>(
    writer: &mut W,
    annotation: &Annotation,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, annotation)?;
            writeln!(writer)
        }
        OutputFormat::Text => {
            writeln!(
                writer,
                "{}\t{}",
                annotation.variant, annotation.variant_type
            )?;
            for gene in &annotation.overlapping_genes {
                writeln!(
                    writer,
                    "gene\t{}\t{}",
                    gene.id,
                    gene.name.as_deref().unwrap_or(".")
                )?;
            }
            for (gene_id, transcripts) in &annotation.overlapping_transcripts {
                for transcript in transcripts {
                    let Some(effect) = annotation.coding_effects.get(&transcript.id) else {
                        continue;
                    };
                    let consequence = effect.consequence();
                    writeln!(
                        writer,
                        "transcript\t{}\t{}\t{}\t{}\t{}",
                        gene_id,
                        transcript.id,
                        effect,
                        consequence,
                        consequence.impact()
                    )?;
                }
            }
            Ok(())
        }
    }
}

/// Write a list of gene or transcript identifiers
pub fn output_ids<W: Write>(writer: &mut W, ids: &[String], format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut *writer, ids)?;
            writeln!(writer)
        }
        OutputFormat::Text => {
            for id in ids {
                writeln!(writer, "{}", id)?;
            }
            Ok(())
        }
    }
}

/// Write an error to the output
///
/// # Examples
///
/// ```
/// use ferro_annotate::cli::{output_error, OutputFormat};
/// use ferro_annotate::FerroError;
/// use std::io::Cursor;
///
/// let mut buffer = Cursor::new(Vec::new());
/// let error = FerroError::invalid_variant("reference allele is empty");
/// output_error(&mut buffer, "1:100 >G", &error, OutputFormat::Text).unwrap();
/// let result = String::from_utf8(buffer.into_inner()).unwrap();
/// assert!(result.starts_with("ERROR [E1001]: 1:100 >G"));
/// ```
pub fn output_error<W: Write>(
    writer: &mut W,
    input: &str,
    error: &FerroError,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "input": input,
                "code": error.code().as_str(),
                "error": error.to_string(),
                "status": "error",
            });
            serde_json::to_writer(&mut *writer, &value)?;
            writeln!(writer)
        }
        OutputFormat::Text => writeln!(writer, "ERROR [{}]: {} - {}", error.code(), input, error),
    }
}
