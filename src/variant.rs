//! Genomic variant value type
//!
//! A [`Variant`] is a VCF-style allele pair anchored at a 1-based reference
//! position. Both alleles are non-empty, so an insertion carries its anchor
//! base in the reference allele (`A` -> `ACGT`) and a deletion carries it in
//! the alternate allele (`ACGT` -> `A`).

use crate::error::FerroError;
use crate::sequence::is_dna;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single sequence variant on a reference contig
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Variant {
    contig: String,
    position: u64,
    reference_allele: String,
    alternate_allele: String,
}

impl Variant {
    /// Create a variant, validating and upper-casing the alleles
    ///
    /// # Errors
    ///
    /// Returns [`FerroError::InvalidVariant`] when the contig is empty, the
    /// position is 0, either allele is empty or contains characters outside
    /// `ACGTN`, or the reference allele runs past the coordinate range.
    pub fn new(
        contig: impl Into<String>,
        position: u64,
        reference_allele: impl AsRef<str>,
        alternate_allele: impl AsRef<str>,
    ) -> Result<Self, FerroError> {
        let contig = contig.into();
        let reference_allele = reference_allele.as_ref();
        let alternate_allele = alternate_allele.as_ref();

        if contig.is_empty() {
            return Err(FerroError::invalid_variant("contig name is empty"));
        }
        if position == 0 {
            return Err(FerroError::invalid_variant(format!(
                "position on {} must be 1-based, got 0",
                contig
            )));
        }
        for (label, allele) in [
            ("reference", reference_allele),
            ("alternate", alternate_allele),
        ] {
            if allele.is_empty() {
                return Err(FerroError::invalid_variant(format!(
                    "{} allele at {}:{} is empty",
                    label, contig, position
                )));
            }
            if !is_dna(allele) {
                return Err(FerroError::invalid_variant(format!(
                    "{} allele '{}' at {}:{} is not DNA",
                    label, allele, contig, position
                )));
            }
        }

        if position
            .checked_add(reference_allele.len() as u64 - 1)
            .is_none()
        {
            return Err(FerroError::invalid_variant(format!(
                "reference allele at {}:{} overflows the coordinate range",
                contig, position
            )));
        }

        Ok(Self {
            contig,
            position,
            reference_allele: reference_allele.to_ascii_uppercase(),
            alternate_allele: alternate_allele.to_ascii_uppercase(),
        })
    }

    /// Contig (chromosome) name
    pub fn contig(&self) -> &str {
        &self.contig
    }

    /// 1-based position of the first reference base
    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn reference_allele(&self) -> &str {
        &self.reference_allele
    }

    pub fn alternate_allele(&self) -> &str {
        &self.alternate_allele
    }

    /// Last reference coordinate covered by the reference allele (inclusive)
    pub fn end_position(&self) -> u64 {
        self.position
            .saturating_add(self.reference_allele.len() as u64 - 1)
    }

    /// Net change in length, alternate minus reference
    pub fn length_change(&self) -> i64 {
        self.alternate_allele.len() as i64 - self.reference_allele.len() as i64
    }

    /// Whether the length change keeps the reading frame
    pub fn is_inframe(&self) -> bool {
        self.length_change().rem_euclid(3) == 0
    }

    /// Single-nucleotide substitution
    pub fn is_snv(&self) -> bool {
        self.reference_allele.len() == 1 && self.alternate_allele.len() == 1
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{} {}>{}",
            self.contig, self.position, self.reference_allele, self.alternate_allele
        )
    }
}
