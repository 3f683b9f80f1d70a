//! Nucleotide sequence analysis
//!
//! Validation, nucleotide statistics, complements, GC content, codon
//! translation over six reading frames and protein discovery for short
//! DNA and RNA sequences.
//!
//! ```
//! use nucleo_toolkit::Sequence;
//!
//! let seq = Sequence::new_dna("atgaaatag").unwrap();
//! assert_eq!(seq.reverse_complement().unwrap().as_str(), "CTATTTCAT");
//! assert_eq!(seq.find_all_proteins(0, 0, true).unwrap(), vec!["K"]);
//! ```

pub mod engines;
pub mod modules;

pub use modules::io::{read_fasta, read_fasta_string, write_fasta, write_fasta_string, FastaRecord};
pub use modules::seq::analysis;
pub use modules::seq::{
    analyze, analyze_batch, AnalysisConfig, Alphabet, NucleotideCounts, ReadingFrame, Sequence,
    SequenceError, SequenceReport, SequenceResult, SequenceType, Strand,
};
