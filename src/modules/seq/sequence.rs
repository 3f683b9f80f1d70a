//! Core sequence type
//!
//! A [`Sequence`] is a validated, uppercase nucleotide string bound to a
//! [`SequenceType`]. It is never modified after construction; every
//! operation returns a new value.

use std::collections::BTreeMap;
use std::fmt;

use serde::ser::{Serialize, Serializer};
use thiserror::Error;

use super::alphabet::{Alphabet, SequenceType};
use crate::engines::compute::orf;
use crate::engines::compute::string_ops;
use crate::engines::compute::translation::{self, ReadingFrame};
use crate::engines::compute::ComputeError;

/// Error type for sequence operations
#[derive(Error, Debug)]
pub enum SequenceError {
    #[error("Invalid sequence: {0}")]
    InvalidSequence(String),

    #[error("Operation not applicable: {0}")]
    NotApplicable(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid range {start}..{end} for sequence of length {len}")]
    InvalidRange { start: usize, end: usize, len: usize },

    #[error("Unknown codon: {0}")]
    UnknownCodon(String),

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ComputeError> for SequenceError {
    fn from(err: ComputeError) -> Self {
        match err {
            ComputeError::InvalidInput(msg) => SequenceError::InvalidSequence(msg),
            ComputeError::InvalidArgument(msg) => SequenceError::InvalidArgument(msg),
            ComputeError::UnknownCodon(msg) => SequenceError::UnknownCodon(msg),
        }
    }
}

/// Result type for sequence operations
pub type SequenceResult<T> = Result<T, SequenceError>;

/// Per-symbol counts over exactly the symbols of one alphabet
///
/// Symbols that never occur are reported with a count of 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NucleotideCounts {
    symbols: &'static [u8; 4],
    counts: [usize; 4],
}

impl NucleotideCounts {
    /// Count of `symbol`, or `None` if it is not part of the alphabet
    pub fn get(&self, symbol: char) -> Option<usize> {
        let symbol = u8::try_from(symbol.to_ascii_uppercase()).ok()?;
        self.symbols
            .iter()
            .position(|&s| s == symbol)
            .map(|slot| self.counts[slot])
    }

    /// Symbols and their counts in alphabet order
    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.symbols
            .iter()
            .zip(self.counts.iter())
            .map(|(&s, &n)| (s as char, n))
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

impl Serialize for NucleotideCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Nucleotide sequence of a declared type
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Sequence {
    #[serde(rename = "sequence")]
    data: String,
    #[serde(rename = "type")]
    seq_type: SequenceType,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl Sequence {
    /// Create a new sequence, validating it against the alphabet of `seq_type`
    ///
    /// Input is accepted in any case and stored uppercase.
    pub fn new(data: impl AsRef<[u8]>, seq_type: SequenceType) -> SequenceResult<Self> {
        let data = data.as_ref();
        let alphabet = seq_type.alphabet();

        if let Some(pos) = data.iter().position(|&b| !alphabet.is_valid_symbol(b)) {
            return Err(SequenceError::InvalidSequence(format!(
                "Symbol '{}' at position {} is not valid for {} alphabet",
                data[pos].escape_ascii(),
                pos,
                alphabet.name()
            )));
        }

        let upper = data.iter().map(|&b| b.to_ascii_uppercase() as char).collect();
        Ok(Self::from_validated(upper, seq_type))
    }

    /// Create a new DNA sequence
    pub fn new_dna(data: impl AsRef<[u8]>) -> SequenceResult<Self> {
        Self::new(data, SequenceType::Dna)
    }

    /// Create a new RNA sequence
    pub fn new_rna(data: impl AsRef<[u8]>) -> SequenceResult<Self> {
        Self::new(data, SequenceType::Rna)
    }

    fn from_validated(data: String, seq_type: SequenceType) -> Self {
        Self {
            data,
            seq_type,
            id: None,
            description: None,
        }
    }

    fn derive(&self, bytes: Vec<u8>, seq_type: SequenceType, note: &str) -> Self {
        Self {
            data: bytes.into_iter().map(char::from).collect(),
            seq_type,
            id: self.id.clone(),
            description: self
                .description
                .as_ref()
                .map(|desc| format!("{} ({})", desc, note)),
        }
    }

    /// Set the sequence identifier
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    /// Set the sequence description
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the sequence as a string slice
    pub fn as_str(&self) -> &str {
        &self.data
    }

    /// Get the sequence as bytes
    pub fn as_bytes(&self) -> &[u8] {
        self.data.as_bytes()
    }

    pub fn seq_type(&self) -> SequenceType {
        self.seq_type
    }

    pub fn alphabet(&self) -> &'static dyn Alphabet {
        self.seq_type.alphabet()
    }

    /// Get the alphabet name
    pub fn alphabet_name(&self) -> &'static str {
        self.alphabet().name()
    }

    /// Get the identifier (if any)
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Get the description (if any)
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Get a subsequence covering `start..end`
    pub fn subsequence(&self, start: usize, end: usize) -> SequenceResult<Self> {
        if start > end || end > self.len() {
            return Err(SequenceError::InvalidRange {
                start,
                end,
                len: self.len(),
            });
        }

        let note = format!("subsequence {}..{}", start, end);
        Ok(self.derive(self.as_bytes()[start..end].to_vec(), self.seq_type, &note))
    }

    /// Count each symbol of the alphabet
    pub fn count_nucleotides(&self) -> NucleotideCounts {
        let symbols = self.alphabet().symbols();
        NucleotideCounts {
            symbols,
            counts: string_ops::count_symbols(self.as_bytes(), symbols),
        }
    }

    /// Transcribe a DNA sequence to RNA
    pub fn transcribe(&self) -> SequenceResult<Self> {
        if self.seq_type != SequenceType::Dna {
            return Err(SequenceError::NotApplicable(format!(
                "Transcription is only defined for DNA, not {}",
                self.alphabet_name()
            )));
        }

        let rna = string_ops::transcribe(self.as_bytes());
        Ok(self.derive(rna, SequenceType::Rna, "transcribed"))
    }

    /// Reverse-transcribe an RNA sequence back to DNA
    pub fn reverse_transcribe(&self) -> SequenceResult<Self> {
        if self.seq_type != SequenceType::Rna {
            return Err(SequenceError::NotApplicable(format!(
                "Reverse transcription is only defined for RNA, not {}",
                self.alphabet_name()
            )));
        }

        let dna = string_ops::reverse_transcribe(self.as_bytes());
        Ok(self.derive(dna, SequenceType::Dna, "reverse transcribed"))
    }

    /// Get the complement of the sequence
    pub fn complement(&self) -> SequenceResult<Self> {
        let alphabet = self.alphabet();
        let complemented = string_ops::complement_with(self.as_bytes(), |b| alphabet.complement(b))?;
        Ok(self.derive(complemented, self.seq_type, "complement"))
    }

    /// Get the reverse complement of the sequence
    pub fn reverse_complement(&self) -> SequenceResult<Self> {
        let alphabet = self.alphabet();
        let rev_comp =
            string_ops::reverse_complement_with(self.as_bytes(), |b| alphabet.complement(b))?;
        Ok(self.derive(rev_comp, self.seq_type, "reverse complement"))
    }

    /// GC content as a whole percentage, rounded half-to-even
    ///
    /// An empty sequence has a GC content of 0.
    pub fn gc_content(&self) -> u32 {
        string_ops::gc_percent(self.as_bytes())
    }

    /// GC content of each full, non-overlapping window of `window_size` symbols
    pub fn gc_content_windowed(&self, window_size: usize) -> SequenceResult<Vec<u32>> {
        Ok(string_ops::gc_percent_windows(self.as_bytes(), window_size)?)
    }

    /// Translate into amino-acid symbols starting at `offset`
    pub fn translate(&self, offset: usize) -> SequenceResult<Vec<u8>> {
        Ok(translation::translate(
            self.as_bytes(),
            offset,
            self.alphabet().codon_table(),
        )?)
    }

    /// The six reading frames: forward offsets 0..3, then reverse complement offsets 0..3
    pub fn reading_frames(&self) -> SequenceResult<Vec<ReadingFrame>> {
        Ok(translation::reading_frames(self.as_bytes(), self.alphabet())?)
    }

    /// Relative usage of the codons encoding `amino_acid`, to two decimals
    pub fn codon_frequency(&self, amino_acid: char) -> SequenceResult<BTreeMap<String, f64>> {
        let Ok(amino_acid) = u8::try_from(amino_acid) else {
            return Ok(BTreeMap::new());
        };

        Ok(translation::codon_frequency(
            self.as_bytes(),
            self.alphabet().codon_table(),
            amino_acid,
        )?)
    }

    /// Find proteins in all six reading frames of `start..end`
    ///
    /// `start == end == 0` selects the whole sequence. Otherwise `end` must
    /// be greater than `start`; a range running past the sequence is cut
    /// off at its end, the same way slicing a string would. Results are in
    /// frame order, then discovery order; with `ordered` they are sorted by
    /// length, longest first, keeping that order among equal lengths.
    pub fn find_all_proteins(
        &self,
        start: usize,
        end: usize,
        ordered: bool,
    ) -> SequenceResult<Vec<String>> {
        let region = match (start, end) {
            (0, 0) => self.as_bytes(),
            (start, end) if end > start => {
                let len = self.len();
                &self.as_bytes()[start.min(len)..end.min(len)]
            }
            (start, end) => {
                return Err(SequenceError::InvalidRange {
                    start,
                    end,
                    len: self.len(),
                })
            }
        };

        let mut proteins = Vec::new();
        for frame in translation::reading_frames(region, self.alphabet())? {
            proteins.extend(orf::find_proteins_in_frame(&frame.residues));
        }

        if ordered {
            proteins.sort_by_key(|protein| std::cmp::Reverse(protein.len()));
        }

        Ok(proteins)
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.data)
    }
}
