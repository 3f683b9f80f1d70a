//! I/O module
//!
//! Reading and writing sequence files. The analysis core never touches the
//! filesystem itself; this is the input source that feeds it.

pub mod fasta;

/// Convenience re-exports
pub use fasta::{
    parse_fasta, read_fasta, read_fasta_string, write_fasta, write_fasta_string, FastaRecord,
};
