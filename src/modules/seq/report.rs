//! Full sequence reports
//!
//! Collects every derivation the toolkit offers for one sequence into a
//! single serializable value. Rendering is left to the caller.

use std::collections::BTreeMap;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::alphabet::{self, SequenceType};
use super::sequence::{NucleotideCounts, Sequence, SequenceResult};

/// Settings for [`analyze`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Window size for windowed GC content
    pub window_size: usize,
    /// Amino acid whose codon usage is reported
    pub codon_amino_acid: char,
    /// Start of the protein search range
    pub protein_start: usize,
    /// End of the protein search range; `0..0` means the whole sequence
    pub protein_end: usize,
    /// Sort proteins longest first
    pub ordered_proteins: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            window_size: 5,
            codon_amino_acid: 'L',
            protein_start: 0,
            protein_end: 0,
            ordered_proteins: true,
        }
    }
}

impl AnalysisConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the GC window size
    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    /// Set the amino acid used for codon usage
    pub fn with_codon_amino_acid(mut self, amino_acid: char) -> Self {
        self.codon_amino_acid = amino_acid;
        self
    }

    /// Restrict the protein search to `start..end`
    pub fn with_protein_range(mut self, start: usize, end: usize) -> Self {
        self.protein_start = start;
        self.protein_end = end;
        self
    }

    pub fn with_ordered_proteins(mut self, ordered: bool) -> Self {
        self.ordered_proteins = ordered;
        self
    }
}

/// Everything derived from one sequence
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SequenceReport {
    pub id: Option<String>,
    pub description: Option<String>,
    pub sequence: String,
    pub seq_type: SequenceType,
    pub is_valid: bool,
    pub length: usize,
    pub nucleotide_counts: NucleotideCounts,
    /// `None` for RNA input
    pub transcription: Option<String>,
    pub complement: String,
    pub reverse_complement: String,
    pub gc_content: u32,
    pub gc_content_windows: Vec<u32>,
    pub translation: String,
    pub codon_frequency: BTreeMap<String, f64>,
    pub reading_frames: Vec<String>,
    pub proteins: Vec<String>,
}

/// Run every analysis on `sequence`
pub fn analyze(sequence: &Sequence, config: &AnalysisConfig) -> SequenceResult<SequenceReport> {
    debug!(
        "Analyzing {} sequence {} of length {}",
        sequence.alphabet_name(),
        sequence.id().unwrap_or("<unnamed>"),
        sequence.len()
    );

    let transcription = match sequence.seq_type() {
        SequenceType::Dna => Some(sequence.transcribe()?.to_string()),
        SequenceType::Rna => None,
    };

    let translation = sequence
        .translate(0)?
        .into_iter()
        .map(char::from)
        .collect();

    let reading_frames = sequence
        .reading_frames()?
        .iter()
        .map(|frame| frame.as_string())
        .collect();

    let proteins = sequence.find_all_proteins(
        config.protein_start,
        config.protein_end,
        config.ordered_proteins,
    )?;

    Ok(SequenceReport {
        id: sequence.id().map(str::to_string),
        description: sequence.description().map(str::to_string),
        sequence: sequence.to_string(),
        seq_type: sequence.seq_type(),
        is_valid: alphabet::is_valid_sequence(sequence.as_bytes(), sequence.seq_type()),
        length: sequence.len(),
        nucleotide_counts: sequence.count_nucleotides(),
        transcription,
        complement: sequence.complement()?.to_string(),
        reverse_complement: sequence.reverse_complement()?.to_string(),
        gc_content: sequence.gc_content(),
        gc_content_windows: sequence.gc_content_windowed(config.window_size)?,
        translation,
        codon_frequency: sequence.codon_frequency(config.codon_amino_acid)?,
        reading_frames,
        proteins,
    })
}

/// Analyze many sequences, keeping input order
///
/// Each sequence succeeds or fails on its own. With the `parallel` feature
/// the work is spread over the shared thread pool.
pub fn analyze_batch(
    sequences: &[Sequence],
    config: &AnalysisConfig,
) -> Vec<SequenceResult<SequenceReport>> {
    info!("Analyzing batch of {} sequences", sequences.len());

    #[cfg(feature = "parallel")]
    let reports = {
        use rayon::prelude::*;

        crate::engines::core::parallel::install(|| {
            sequences
                .par_iter()
                .map(|sequence| analyze(sequence, config))
                .collect()
        })
    };

    #[cfg(not(feature = "parallel"))]
    let reports = sequences
        .iter()
        .map(|sequence| analyze(sequence, config))
        .collect();

    reports
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::seq::SequenceError;

    #[test]
    fn test_default_config() {
        let config = AnalysisConfig::default();
        assert_eq!(config.window_size, 5);
        assert_eq!(config.codon_amino_acid, 'L');
        assert_eq!((config.protein_start, config.protein_end), (0, 0));
        assert!(config.ordered_proteins);

        let config = AnalysisConfig::new()
            .with_window_size(3)
            .with_protein_range(2, 8)
            .with_ordered_proteins(false);
        assert_eq!(config.window_size, 3);
        assert_eq!((config.protein_start, config.protein_end), (2, 8));
        assert!(!config.ordered_proteins);
    }

    #[test]
    fn test_config_from_partial_json() {
        let config: AnalysisConfig =
            serde_json::from_str(r#"{"window_size": 3, "codon_amino_acid": "A"}"#).unwrap();
        assert_eq!(config.window_size, 3);
        assert_eq!(config.codon_amino_acid, 'A');
        assert!(config.ordered_proteins);
    }

    #[test]
    fn test_analyze_dna() {
        let seq = Sequence::new_dna("ATGGCCCTGTAAGC").unwrap().with_id("s1");
        let report = analyze(&seq, &AnalysisConfig::default()).unwrap();

        assert_eq!(report.id.as_deref(), Some("s1"));
        assert!(report.is_valid);
        assert_eq!(report.length, 14);
        assert_eq!(report.transcription.as_deref(), Some("AUGGCCCUGUAAGC"));
        assert_eq!(report.complement, "TACCGGGACATTCG");
        assert_eq!(report.reverse_complement, "GCTTACAGGGCCAT");
        assert_eq!(report.gc_content, 57);
        assert_eq!(report.gc_content_windows, vec![60, 60]);
        assert_eq!(report.translation, "MAL_");
        assert_eq!(report.codon_frequency.get("CTG"), Some(&1.0));
        assert_eq!(report.reading_frames.len(), 6);
        assert_eq!(report.proteins.first().map(String::as_str), Some("AL"));
        assert_eq!(report.nucleotide_counts.total(), 14);
    }

    #[test]
    fn test_analyze_rna_has_no_transcription() {
        let seq = Sequence::new_rna("AUGUAA").unwrap();
        let report = analyze(&seq, &AnalysisConfig::default()).unwrap();
        assert_eq!(report.transcription, None);
        assert_eq!(report.translation, "M_");
        assert_eq!(report.proteins, vec![""]);
    }

    #[test]
    fn test_analyze_propagates_config_errors() {
        let seq = Sequence::new_dna("ATGC").unwrap();
        let config = AnalysisConfig::new().with_window_size(0);
        assert!(matches!(
            analyze(&seq, &config),
            Err(SequenceError::InvalidArgument(_))
        ));

        let config = AnalysisConfig::new().with_protein_range(3, 1);
        assert!(matches!(
            analyze(&seq, &config),
            Err(SequenceError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_analyze_batch_keeps_order() {
        let sequences = vec![
            Sequence::new_dna("GGGG").unwrap(),
            Sequence::new_dna("AT").unwrap(),
            Sequence::new_rna("GCAU").unwrap(),
        ];
        let config = AnalysisConfig::new().with_window_size(3);
        let reports = analyze_batch(&sequences, &config);

        assert_eq!(reports.len(), 3);
        let gc: Vec<u32> = reports
            .iter()
            .map(|r| r.as_ref().unwrap().gc_content)
            .collect();
        assert_eq!(gc, vec![100, 0, 50]);
    }

    #[test]
    fn test_report_serializes() {
        let seq = Sequence::new_dna("ATGTAA").unwrap();
        let report = analyze(&seq, &AnalysisConfig::default()).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["seq_type"], "DNA");
        assert_eq!(json["is_valid"], true);
        assert_eq!(json["nucleotide_counts"]["A"], 3);
        assert_eq!(json["nucleotide_counts"]["C"], 0);
        assert_eq!(json["proteins"][0], "");
    }
}
