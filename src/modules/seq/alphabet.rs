//! Nucleotide alphabets
//!
//! A sequence type is bound to exactly one static alphabet, which knows
//! its valid symbols, how they pair and which codon table translates them.
//! Code downstream of [`Sequence`](super::Sequence) construction only asks
//! the bound alphabet and never branches on the type itself.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::codon::{CodonTable, DNA_CODONS, RNA_CODONS};
use super::sequence::SequenceError;

/// Declared type of a nucleotide sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SequenceType {
    #[serde(rename = "DNA", alias = "dna")]
    Dna,
    #[serde(rename = "RNA", alias = "rna")]
    Rna,
}

impl SequenceType {
    /// The alphabet bound to this sequence type
    pub fn alphabet(self) -> &'static dyn Alphabet {
        match self {
            SequenceType::Dna => &DNA_ALPHABET,
            SequenceType::Rna => &RNA_ALPHABET,
        }
    }

    pub fn name(self) -> &'static str {
        self.alphabet().name()
    }
}

impl fmt::Display for SequenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SequenceType {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("DNA") {
            Ok(SequenceType::Dna)
        } else if s.eq_ignore_ascii_case("RNA") {
            Ok(SequenceType::Rna)
        } else {
            Err(SequenceError::InvalidArgument(format!(
                "Unknown sequence type: {}",
                s
            )))
        }
    }
}

/// Symbol set, pairing rules and codon table of a nucleotide type
pub trait Alphabet: Send + Sync + fmt::Debug {
    /// Get the alphabet name
    fn name(&self) -> &'static str;

    /// The sequence type this alphabet belongs to
    fn sequence_type(&self) -> SequenceType;

    /// Valid uppercase symbols, in reporting order
    fn symbols(&self) -> &'static [u8; 4];

    /// Complement of an uppercase symbol
    fn complement(&self, symbol: u8) -> Option<u8>;

    /// Codon table used for translation
    fn codon_table(&self) -> &'static CodonTable;

    /// Check a single symbol, ignoring case
    fn is_valid_symbol(&self, symbol: u8) -> bool {
        self.symbols().contains(&symbol.to_ascii_uppercase())
    }

    /// Check that every symbol of a sequence belongs to this alphabet
    ///
    /// The empty sequence is valid.
    fn is_valid_sequence(&self, sequence: &[u8]) -> bool {
        sequence.iter().all(|&symbol| self.is_valid_symbol(symbol))
    }
}

/// Deoxyribonucleic acid: A, G, T, C
#[derive(Debug, Clone, Copy, Default)]
pub struct DnaAlphabet;

/// Ribonucleic acid: A, G, U, C
#[derive(Debug, Clone, Copy, Default)]
pub struct RnaAlphabet;

pub static DNA_ALPHABET: DnaAlphabet = DnaAlphabet;
pub static RNA_ALPHABET: RnaAlphabet = RnaAlphabet;

impl Alphabet for DnaAlphabet {
    fn name(&self) -> &'static str {
        "DNA"
    }

    fn sequence_type(&self) -> SequenceType {
        SequenceType::Dna
    }

    fn symbols(&self) -> &'static [u8; 4] {
        b"AGTC"
    }

    fn complement(&self, symbol: u8) -> Option<u8> {
        match symbol {
            b'A' => Some(b'T'),
            b'T' => Some(b'A'),
            b'G' => Some(b'C'),
            b'C' => Some(b'G'),
            _ => None,
        }
    }

    fn codon_table(&self) -> &'static CodonTable {
        &DNA_CODONS
    }
}

impl Alphabet for RnaAlphabet {
    fn name(&self) -> &'static str {
        "RNA"
    }

    fn sequence_type(&self) -> SequenceType {
        SequenceType::Rna
    }

    fn symbols(&self) -> &'static [u8; 4] {
        b"AGUC"
    }

    fn complement(&self, symbol: u8) -> Option<u8> {
        match symbol {
            b'A' => Some(b'U'),
            b'U' => Some(b'A'),
            b'G' => Some(b'C'),
            b'C' => Some(b'G'),
            _ => None,
        }
    }

    fn codon_table(&self) -> &'static CodonTable {
        &RNA_CODONS
    }
}

/// Check whether `sequence` only contains symbols of `seq_type`, ignoring case
pub fn is_valid_sequence(sequence: &[u8], seq_type: SequenceType) -> bool {
    seq_type.alphabet().is_valid_sequence(sequence)
}
