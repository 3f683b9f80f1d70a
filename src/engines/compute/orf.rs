//! Protein discovery in translated reading frames
//!
//! A protein runs from a start symbol (`M`) up to, but not including, the
//! next stop symbol (`_`). Several starts may be open at once; they all
//! end at the same stop.

use crate::modules::seq::codon::{START_SYMBOL, STOP_SYMBOL};

/// Incremental protein finder for a single reading frame
///
/// Open proteins share one residue buffer. Each start records the buffer
/// length at the moment it was seen, so an open protein is always the
/// buffer slice from its start index to the end. A protein started later
/// is just a shorter suffix of the same buffer.
#[derive(Debug, Default)]
pub struct ProteinFinder {
    residues: Vec<u8>,
    starts: Vec<usize>,
    proteins: Vec<String>,
}

impl ProteinFinder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next amino-acid symbol of the frame
    pub fn push(&mut self, symbol: u8) {
        match symbol {
            START_SYMBOL => self.starts.push(self.residues.len()),
            STOP_SYMBOL => self.flush(),
            _ if !self.starts.is_empty() => self.residues.push(symbol),
            _ => {}
        }
    }

    /// Number of proteins currently open
    pub fn open(&self) -> usize {
        self.starts.len()
    }

    /// Proteins completed so far
    pub fn completed(&self) -> &[String] {
        &self.proteins
    }

    /// Finish the frame and return every protein closed by a stop
    ///
    /// Proteins still open at the end of the frame are dropped.
    pub fn finish(self) -> Vec<String> {
        self.proteins
    }

    fn flush(&mut self) {
        if self.starts.is_empty() {
            return;
        }

        for &start in &self.starts {
            let protein = self.residues[start..].iter().map(|&b| b as char).collect();
            self.proteins.push(protein);
        }
        self.starts.clear();
        self.residues.clear();
    }
}

/// Find every stop-terminated protein in one reading frame, in discovery order
pub fn find_proteins_in_frame(frame: &[u8]) -> Vec<String> {
    let mut finder = ProteinFinder::new();
    for &symbol in frame {
        finder.push(symbol);
    }
    finder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_starts() {
        assert_eq!(find_proteins_in_frame(b"MAAMC_"), vec!["AAC", "C"]);
    }

    #[test]
    fn test_stop_without_start() {
        assert!(find_proteins_in_frame(b"AA_C_").is_empty());
        assert_eq!(find_proteins_in_frame(b"A_MK_"), vec!["K"]);
    }

    #[test]
    fn test_unterminated_protein_is_dropped() {
        assert!(find_proteins_in_frame(b"MAAC").is_empty());
        assert_eq!(find_proteins_in_frame(b"MA_MCC"), vec!["A"]);
    }

    #[test]
    fn test_start_then_immediate_stop() {
        assert_eq!(find_proteins_in_frame(b"M_"), vec![""]);
    }

    #[test]
    fn test_multiple_runs() {
        assert_eq!(
            find_proteins_in_frame(b"MKV_GGMMW_"),
            vec!["KV", "W", "W"]
        );
    }

    #[test]
    fn test_incremental_state() {
        let mut finder = ProteinFinder::new();
        for &symbol in b"MAM" {
            finder.push(symbol);
        }
        assert_eq!(finder.open(), 2);
        assert!(finder.completed().is_empty());

        finder.push(b'_');
        assert_eq!(finder.open(), 0);
        assert_eq!(finder.completed(), ["A", ""]);
    }
}
