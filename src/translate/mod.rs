//! Translation of coding sequence into amino acids.
//!
//! Only the standard genetic code (NCBI translation table 1) is provided.
//!
//! # Example
//!
//! ```
//! use ferro_annotate::translate::{translate, AminoAcid, CodonTable};
//!
//! let table = CodonTable::standard();
//! let peptide = translate(&table, "ATGGTGTAA");
//! assert_eq!(peptide, vec![AminoAcid::Met, AminoAcid::Val, AminoAcid::Ter]);
//! ```

pub mod codon;

pub use codon::{Base, Codon, CodonTable};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Amino acid enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AminoAcid {
    Ala, // A
    Arg, // R
    Asn, // N
    Asp, // D
    Cys, // C
    Gln, // Q
    Glu, // E
    Gly, // G
    His, // H
    Ile, // I
    Leu, // L
    Lys, // K
    Met, // M
    Phe, // F
    Pro, // P
    Ser, // S
    Thr, // T
    Trp, // W
    Tyr, // Y
    Val, // V
    Ter, // * (stop codon)
    Xaa, // X (unknown)
}

impl AminoAcid {
    /// Get 3-letter code
    pub fn to_three_letter(&self) -> &'static str {
        match self {
            Self::Ala => "Ala",
            Self::Arg => "Arg",
            Self::Asn => "Asn",
            Self::Asp => "Asp",
            Self::Cys => "Cys",
            Self::Gln => "Gln",
            Self::Glu => "Glu",
            Self::Gly => "Gly",
            Self::His => "His",
            Self::Ile => "Ile",
            Self::Leu => "Leu",
            Self::Lys => "Lys",
            Self::Met => "Met",
            Self::Phe => "Phe",
            Self::Pro => "Pro",
            Self::Ser => "Ser",
            Self::Thr => "Thr",
            Self::Trp => "Trp",
            Self::Tyr => "Tyr",
            Self::Val => "Val",
            Self::Ter => "Ter",
            Self::Xaa => "Xaa",
        }
    }

    /// Get 1-letter code
    pub fn to_one_letter(&self) -> char {
        match self {
            Self::Ala => 'A',
            Self::Arg => 'R',
            Self::Asn => 'N',
            Self::Asp => 'D',
            Self::Cys => 'C',
            Self::Gln => 'Q',
            Self::Glu => 'E',
            Self::Gly => 'G',
            Self::His => 'H',
            Self::Ile => 'I',
            Self::Leu => 'L',
            Self::Lys => 'K',
            Self::Met => 'M',
            Self::Phe => 'F',
            Self::Pro => 'P',
            Self::Ser => 'S',
            Self::Thr => 'T',
            Self::Trp => 'W',
            Self::Tyr => 'Y',
            Self::Val => 'V',
            Self::Ter => '*',
            Self::Xaa => 'X',
        }
    }

    /// Parse from 1-letter code (uppercase only)
    pub fn from_one_letter(c: char) -> Option<Self> {
        match c {
            'A' => Some(Self::Ala),
            'R' => Some(Self::Arg),
            'N' => Some(Self::Asn),
            'D' => Some(Self::Asp),
            'C' => Some(Self::Cys),
            'Q' => Some(Self::Gln),
            'E' => Some(Self::Glu),
            'G' => Some(Self::Gly),
            'H' => Some(Self::His),
            'I' => Some(Self::Ile),
            'L' => Some(Self::Leu),
            'K' => Some(Self::Lys),
            'M' => Some(Self::Met),
            'F' => Some(Self::Phe),
            'P' => Some(Self::Pro),
            'S' => Some(Self::Ser),
            'T' => Some(Self::Thr),
            'W' => Some(Self::Trp),
            'Y' => Some(Self::Tyr),
            'V' => Some(Self::Val),
            '*' => Some(Self::Ter),
            'X' => Some(Self::Xaa),
            _ => None,
        }
    }
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_three_letter())
    }
}

/// Translate a coding-sequence fragment codon by codon
///
/// A trailing partial codon is dropped. Codons containing anything other
/// than `ACGTU` translate to [`AminoAcid::Xaa`].
pub fn translate(table: &CodonTable, seq: &str) -> Vec<AminoAcid> {
    seq.as_bytes()
        .chunks_exact(3)
        .map(|chunk| {
            std::str::from_utf8(chunk)
                .ok()
                .and_then(Codon::parse)
                .map(|codon| table.amino_acid_for(&codon))
                .unwrap_or(AminoAcid::Xaa)
        })
        .collect()
}

/// Render amino acids as a compact 1-letter string
pub fn to_one_letter_string(peptide: &[AminoAcid]) -> String {
    peptide.iter().map(AminoAcid::to_one_letter).collect()
}
