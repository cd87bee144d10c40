//! Genetic code and codon table.

use super::AminoAcid;
use std::collections::HashMap;

/// A single nucleotide base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Base {
    A,
    T,
    G,
    C,
}

impl Base {
    /// Parse a base from a character.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Base::A),
            'T' | 'U' => Some(Base::T), // U is treated as T
            'G' => Some(Base::G),
            'C' => Some(Base::C),
            _ => None,
        }
    }

    /// Convert to character.
    pub fn to_char(self) -> char {
        match self {
            Base::A => 'A',
            Base::T => 'T',
            Base::G => 'G',
            Base::C => 'C',
        }
    }
}

impl std::fmt::Display for Base {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A codon (three nucleotides).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Codon([Base; 3]);

impl Codon {
    /// Create a new codon from three bases.
    pub fn new(b1: Base, b2: Base, b3: Base) -> Self {
        Self([b1, b2, b3])
    }

    /// Parse a codon from a string.
    pub fn parse(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        let b1 = Base::from_char(chars.next()?)?;
        let b2 = Base::from_char(chars.next()?)?;
        let b3 = Base::from_char(chars.next()?)?;
        if chars.next().is_some() {
            return None;
        }
        Some(Self([b1, b2, b3]))
    }

    /// Get the three bases.
    pub fn bases(&self) -> &[Base; 3] {
        &self.0
    }
}

impl std::fmt::Display for Codon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.0[0], self.0[1], self.0[2])
    }
}

/// Base order of the NCBI translation table layout.
const TABLE_BASE_ORDER: [Base; 4] = [Base::T, Base::C, Base::A, Base::G];

/// NCBI translation table 1, one amino acid per codon in TCAG order.
const STANDARD_CODE: &str = "FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG";

/// Standard genetic code table.
#[derive(Debug, Clone)]
pub struct CodonTable {
    /// Codon to amino acid mapping, stop codons map to `Ter`.
    codon_to_aa: HashMap<Codon, AminoAcid>,
    /// Start codon(s).
    start_codons: Vec<Codon>,
}

impl CodonTable {
    /// Create the standard genetic code.
    pub fn standard() -> Self {
        let codon_to_aa = STANDARD_CODE
            .chars()
            .enumerate()
            .map(|(i, letter)| {
                let codon = Codon::new(
                    TABLE_BASE_ORDER[i / 16],
                    TABLE_BASE_ORDER[(i / 4) % 4],
                    TABLE_BASE_ORDER[i % 4],
                );
                let aa = AminoAcid::from_one_letter(letter).unwrap_or(AminoAcid::Xaa);
                (codon, aa)
            })
            .collect();

        Self {
            codon_to_aa,
            start_codons: vec![Codon::new(Base::A, Base::T, Base::G)],
        }
    }

    /// Get the amino acid encoded by a codon.
    pub fn amino_acid_for(&self, codon: &Codon) -> AminoAcid {
        self.codon_to_aa
            .get(codon)
            .copied()
            .unwrap_or(AminoAcid::Xaa)
    }

    /// Check if a codon is a stop codon.
    pub fn is_stop(&self, codon: &Codon) -> bool {
        self.amino_acid_for(codon) == AminoAcid::Ter
    }

    /// Check if a codon is a start codon.
    pub fn is_start(&self, codon: &Codon) -> bool {
        self.start_codons.contains(codon)
    }

    /// Number of codons in the table.
    pub fn len(&self) -> usize {
        self.codon_to_aa.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codon_to_aa.is_empty()
    }
}

impl Default for CodonTable {
    fn default() -> Self {
        Self::standard()
    }
}
