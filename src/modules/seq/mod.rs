//! Sequence module
//!
//! This module provides the nucleotide sequence type and every analysis
//! built on top of it.

pub mod alphabet;
pub mod analysis;
pub mod codon;
pub mod report;
pub mod sequence;

/// Convenience re-exports
pub use alphabet::{is_valid_sequence, Alphabet, DnaAlphabet, RnaAlphabet, SequenceType};
pub use codon::{CodonTable, DNA_CODONS, RNA_CODONS, START_SYMBOL, STOP_SYMBOL};
pub use report::{analyze, analyze_batch, AnalysisConfig, SequenceReport};
pub use sequence::{NucleotideCounts, Sequence, SequenceError, SequenceResult};
pub use crate::engines::compute::translation::{ReadingFrame, Strand};
