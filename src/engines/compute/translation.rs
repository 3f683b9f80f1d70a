//! Codon translation and reading frames
//!
//! Codons are read as consecutive, non-overlapping triplets. Whatever is
//! left over at the end of a sequence (one or two symbols) is never
//! translated.

use std::collections::BTreeMap;
use std::fmt;

use itertools::Itertools;
use serde::Serialize;

use super::string_ops::{self, round_hundredths};
use super::{ComputeError, ComputeResult};
use crate::modules::seq::alphabet::Alphabet;
use crate::modules::seq::codon::CodonTable;

/// Strand a reading frame was translated from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Strand {
    Forward,
    ReverseComplement,
}

/// Amino-acid symbols produced by translating one strand from one offset
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadingFrame {
    pub strand: Strand,
    pub offset: usize,
    pub residues: Vec<u8>,
}

impl ReadingFrame {
    /// Number of amino-acid symbols in the frame
    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    /// The frame as a string of amino-acid symbols
    pub fn as_string(&self) -> String {
        self.residues.iter().map(|&b| b as char).collect()
    }
}

impl fmt::Display for ReadingFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_string())
    }
}

/// Iterate over the codons of `sequence` starting at `offset`
///
/// An offset at or past the end yields no codons.
pub fn codons(sequence: &[u8], offset: usize) -> std::slice::ChunksExact<'_, u8> {
    sequence.get(offset..).unwrap_or_default().chunks_exact(3)
}

fn upper_codon(codon: &[u8]) -> [u8; 3] {
    [
        codon[0].to_ascii_uppercase(),
        codon[1].to_ascii_uppercase(),
        codon[2].to_ascii_uppercase(),
    ]
}

fn lookup(table: &CodonTable, codon: &[u8; 3]) -> ComputeResult<u8> {
    table.lookup(codon).ok_or_else(|| {
        ComputeError::UnknownCodon(format!(
            "'{}' is not in the {} codon table",
            codon.escape_ascii(),
            table.name()
        ))
    })
}

/// Translate `sequence` into amino-acid symbols starting at `offset`
pub fn translate(sequence: &[u8], offset: usize, table: &CodonTable) -> ComputeResult<Vec<u8>> {
    codons(sequence, offset)
        .map(|codon| lookup(table, &upper_codon(codon)))
        .collect()
}

/// Generate the six standard reading frames
///
/// The order is fixed: forward offsets 0, 1, 2 followed by reverse
/// complement offsets 0, 1, 2.
pub fn reading_frames(sequence: &[u8], alphabet: &dyn Alphabet) -> ComputeResult<Vec<ReadingFrame>> {
    let table = alphabet.codon_table();
    let reverse = string_ops::reverse_complement_with(sequence, |b| alphabet.complement(b))?;

    let mut frames = Vec::with_capacity(6);
    for (strand, source) in [
        (Strand::Forward, sequence),
        (Strand::ReverseComplement, reverse.as_slice()),
    ] {
        for offset in 0..3 {
            frames.push(ReadingFrame {
                strand,
                offset,
                residues: translate(source, offset, table)?,
            });
        }
    }

    Ok(frames)
}

/// Relative usage of each codon that encodes `amino_acid`
///
/// Codons are read from offset 0. Each frequency is the codon's share of
/// all matching codons as an `f64`, rounded to two decimal places by its
/// exact binary value (see [`round_hundredths`]); the
/// values are not renormalised afterwards, so they may not sum to exactly
/// 1.0. No matching codon gives an empty map.
pub fn codon_frequency(
    sequence: &[u8],
    table: &CodonTable,
    amino_acid: u8,
) -> ComputeResult<BTreeMap<String, f64>> {
    let mut matching = Vec::new();
    for codon in codons(sequence, 0) {
        let codon = upper_codon(codon);
        if lookup(table, &codon)? == amino_acid {
            matching.push(codon);
        }
    }

    let total = matching.len() as f64;
    Ok(matching
        .into_iter()
        .counts()
        .into_iter()
        .map(|(codon, count)| {
            let share = round_hundredths(count as f64 / total);
            (String::from_utf8_lossy(&codon).into_owned(), share)
        })
        .collect())
}
