//! String-level analysis functions
//!
//! Thin entry points for callers that hold a plain string and a declared
//! type. Every function validates its input first, so nothing here trusts
//! the caller to have done so.

use std::collections::BTreeMap;

use super::alphabet::{self, SequenceType};
use super::sequence::{NucleotideCounts, Sequence, SequenceResult};
use crate::engines::compute::orf;

fn residues_to_string(residues: &[u8]) -> String {
    residues.iter().map(|&b| b as char).collect()
}

/// Check that `sequence` only uses symbols of `seq_type`, ignoring case
pub fn validate(sequence: &str, seq_type: SequenceType) -> bool {
    alphabet::is_valid_sequence(sequence.as_bytes(), seq_type)
}

pub fn count_nucleotides(sequence: &str, seq_type: SequenceType) -> SequenceResult<NucleotideCounts> {
    Ok(Sequence::new(sequence, seq_type)?.count_nucleotides())
}

/// Transcribe DNA into RNA; any other type is `NotApplicable`
pub fn transcribe(sequence: &str, seq_type: SequenceType) -> SequenceResult<String> {
    Ok(Sequence::new(sequence, seq_type)?.transcribe()?.to_string())
}

pub fn complement(sequence: &str, seq_type: SequenceType) -> SequenceResult<String> {
    Ok(Sequence::new(sequence, seq_type)?.complement()?.to_string())
}

pub fn reverse_complement(sequence: &str, seq_type: SequenceType) -> SequenceResult<String> {
    Ok(Sequence::new(sequence, seq_type)?.reverse_complement()?.to_string())
}

/// Whole-sequence GC percentage; the empty sequence gives 0
pub fn gc_content(sequence: &str, seq_type: SequenceType) -> SequenceResult<u32> {
    Ok(Sequence::new(sequence, seq_type)?.gc_content())
}

pub fn gc_content_windowed(
    sequence: &str,
    seq_type: SequenceType,
    window_size: usize,
) -> SequenceResult<Vec<u32>> {
    Sequence::new(sequence, seq_type)?.gc_content_windowed(window_size)
}

pub fn translate(sequence: &str, offset: usize, seq_type: SequenceType) -> SequenceResult<String> {
    let residues = Sequence::new(sequence, seq_type)?.translate(offset)?;
    Ok(residues_to_string(&residues))
}

/// Six reading frames as amino-acid strings, forward strand first
pub fn generate_reading_frames(sequence: &str, seq_type: SequenceType) -> SequenceResult<Vec<String>> {
    let frames = Sequence::new(sequence, seq_type)?.reading_frames()?;
    Ok(frames.iter().map(|frame| frame.as_string()).collect())
}

pub fn codon_frequency(
    sequence: &str,
    seq_type: SequenceType,
    amino_acid: char,
) -> SequenceResult<BTreeMap<String, f64>> {
    Sequence::new(sequence, seq_type)?.codon_frequency(amino_acid)
}

/// Proteins in one translated frame, given as amino-acid symbols
pub fn find_proteins_in_frame(frame: &str) -> Vec<String> {
    orf::find_proteins_in_frame(frame.as_bytes())
}

pub fn find_all_proteins(
    sequence: &str,
    seq_type: SequenceType,
    start: usize,
    end: usize,
    ordered: bool,
) -> SequenceResult<Vec<String>> {
    Sequence::new(sequence, seq_type)?.find_all_proteins(start, end, ordered)
}
