//! Error types for ferro-annotate
//!
//! Every failure the annotator can surface is a [`FerroError`]. Each variant
//! maps onto an [`ErrorCode`] so callers can branch on a stable identifier
//! instead of matching message text.
//!
//! Classification errors signal that the annotation provider's coordinates
//! and sequence disagree for a locus. They abort the whole
//! `describe_variant` call; there is no partial result.

use std::fmt;
use thiserror::Error;

/// Error codes for categorizing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ErrorCode {
    // Input errors (E1xxx)
    /// Variant alleles or position are malformed
    InvalidVariant = 1001,

    // Annotation data errors (E2xxx)
    /// Genes overlap the variant but no transcripts do
    NoTranscriptsForOverlappingGene = 2001,

    // Classification errors (E3xxx)
    /// Spliced offset precedes the transcript's first base
    CoordinateOutOfRange = 3001,
    /// Coding sequence disagrees with the reference allele
    ReferenceMismatch = 3002,
    /// Variant span ends inside an intron
    ExonIntronBoundary = 3003,
    /// Variant span crosses the UTR/CDS boundary
    UtrCdsBoundary = 3004,

    // IO errors (E9xxx)
    /// File IO error
    IoError = 9001,
    /// JSON parsing error
    JsonError = 9002,
    /// Configuration error
    ConfigError = 9003,
}

impl ErrorCode {
    /// Get the error code as a string (e.g., "E3002")
    pub fn as_str(&self) -> String {
        format!("E{:04}", *self as u16)
    }

    /// Get a brief description of this error code
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::InvalidVariant => "invalid variant",
            ErrorCode::NoTranscriptsForOverlappingGene => "no transcripts for overlapping gene",
            ErrorCode::CoordinateOutOfRange => "coordinate out of range",
            ErrorCode::ReferenceMismatch => "reference sequence mismatch",
            ErrorCode::ExonIntronBoundary => "variant crosses exon-intron boundary",
            ErrorCode::UtrCdsBoundary => "variant crosses UTR-CDS boundary",
            ErrorCode::IoError => "file I/O error",
            ErrorCode::JsonError => "JSON parsing error",
            ErrorCode::ConfigError => "configuration error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Main error type for ferro-annotate operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FerroError {
    /// Variant could not be constructed from the given fields
    #[error("Invalid variant: {msg}")]
    InvalidVariant { msg: String },

    /// Gene annotation claims coverage that transcript annotation does not back up
    #[error("No transcripts found for variant {variant} overlapping genes {genes:?}")]
    NoTranscriptsForOverlappingGene { variant: String, genes: Vec<String> },

    /// A genomic position mapped upstream of the transcript's first base
    #[error("Position {position} is before start of transcript {transcript} (spliced offset {offset})")]
    CoordinateOutOfRange {
        transcript: String,
        position: u64,
        offset: i64,
    },

    /// Coding sequence at the computed offsets differs from the reference allele
    #[error(
        "Reference mismatch in {transcript} for {variant} (offset {start}:{end}): expected {expected}, found {found}"
    )]
    ReferenceSequenceMismatch {
        transcript: String,
        variant: String,
        start: i64,
        end: i64,
        expected: String,
        found: String,
    },

    /// Variant span ends in an intron, so it has no spliced offset
    #[error("Variant {variant} spans an exon-intron boundary of {transcript} at position {position}")]
    ExonIntronBoundary {
        transcript: String,
        variant: String,
        position: u64,
    },

    /// Variant span covers both UTR and coding sequence
    #[error("Variant {variant} spans a UTR-CDS boundary of {transcript} (offset {start}:{end})")]
    UtrCdsBoundary {
        transcript: String,
        variant: String,
        start: i64,
        end: i64,
    },

    /// IO error (for file operations)
    #[error("IO error: {msg}")]
    Io { msg: String },

    /// JSON parsing error
    #[error("JSON error: {msg}")]
    Json { msg: String },

    /// Configuration could not be read or is invalid
    #[error("Configuration error: {msg}")]
    Config { msg: String },
}

impl FerroError {
    /// Create an invalid-variant error
    pub fn invalid_variant(msg: impl Into<String>) -> Self {
        FerroError::InvalidVariant { msg: msg.into() }
    }

    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            FerroError::InvalidVariant { .. } => ErrorCode::InvalidVariant,
            FerroError::NoTranscriptsForOverlappingGene { .. } => {
                ErrorCode::NoTranscriptsForOverlappingGene
            }
            FerroError::CoordinateOutOfRange { .. } => ErrorCode::CoordinateOutOfRange,
            FerroError::ReferenceSequenceMismatch { .. } => ErrorCode::ReferenceMismatch,
            FerroError::ExonIntronBoundary { .. } => ErrorCode::ExonIntronBoundary,
            FerroError::UtrCdsBoundary { .. } => ErrorCode::UtrCdsBoundary,
            FerroError::Io { .. } => ErrorCode::IoError,
            FerroError::Json { .. } => ErrorCode::JsonError,
            FerroError::Config { .. } => ErrorCode::ConfigError,
        }
    }

    /// Get a formatted error prefixed with its code
    pub fn detailed_message(&self) -> String {
        format!("[{}] {}", self.code(), self)
    }

    /// Whether this error means the provider's data for the locus is inconsistent
    pub fn is_data_inconsistency(&self) -> bool {
        matches!(
            self,
            FerroError::NoTranscriptsForOverlappingGene { .. }
                | FerroError::CoordinateOutOfRange { .. }
                | FerroError::ReferenceSequenceMismatch { .. }
        )
    }
}

impl From<std::io::Error> for FerroError {
    fn from(err: std::io::Error) -> Self {
        FerroError::Io {
            msg: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for FerroError {
    fn from(err: serde_json::Error) -> Self {
        FerroError::Json {
            msg: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for FerroError {
    fn from(err: toml::de::Error) -> Self {
        FerroError::Config {
            msg: err.to_string(),
        }
    }
}
