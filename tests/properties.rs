//! Property tests over randomly generated sequences.

use nucleo_toolkit::analysis;
use nucleo_toolkit::{Sequence, SequenceType};
use proptest::prelude::*;

fn dna_seq(max_len: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            Just('A'),
            Just('C'),
            Just('G'),
            Just('T'),
            Just('a'),
            Just('c'),
            Just('g'),
            Just('t')
        ],
        0..=max_len,
    )
    .prop_map(|v| v.into_iter().collect::<String>())
}

fn rna_seq(max_len: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![Just('A'), Just('C'), Just('G'), Just('U')],
        0..=max_len,
    )
    .prop_map(|v| v.into_iter().collect::<String>())
}

proptest! {
    #[test]
    fn complement_is_an_involution(s in dna_seq(200)) {
        let once = analysis::complement(&s, SequenceType::Dna).unwrap();
        let twice = analysis::complement(&once, SequenceType::Dna).unwrap();
        prop_assert_eq!(twice, s.to_uppercase());
    }

    #[test]
    fn reverse_complement_is_an_involution(s in dna_seq(200)) {
        let once = analysis::reverse_complement(&s, SequenceType::Dna).unwrap();
        let twice = analysis::reverse_complement(&once, SequenceType::Dna).unwrap();
        prop_assert_eq!(twice, s.to_uppercase());
    }

    #[test]
    fn transcription_keeps_length_and_drops_thymine(s in dna_seq(200)) {
        let rna = analysis::transcribe(&s, SequenceType::Dna).unwrap();
        prop_assert_eq!(rna.len(), s.len());
        prop_assert!(!rna.contains('T'));
        prop_assert!(analysis::validate(&rna, SequenceType::Rna));
    }

    #[test]
    fn counts_sum_to_length(s in dna_seq(200), r in rna_seq(200)) {
        let dna_counts = analysis::count_nucleotides(&s, SequenceType::Dna).unwrap();
        prop_assert_eq!(dna_counts.total(), s.len());
        let rna_counts = analysis::count_nucleotides(&r, SequenceType::Rna).unwrap();
        prop_assert_eq!(rna_counts.total(), r.len());
    }

    #[test]
    fn gc_windows_have_expected_shape(s in dna_seq(200), k in 1usize..20) {
        let windows = analysis::gc_content_windowed(&s, SequenceType::Dna, k).unwrap();
        prop_assert_eq!(windows.len(), s.len() / k);
        prop_assert!(windows.iter().all(|&gc| gc <= 100));
    }

    #[test]
    fn six_frames_of_expected_length(s in dna_seq(200)) {
        let seq = Sequence::new_dna(&s).unwrap();
        let frames = seq.reading_frames().unwrap();
        prop_assert_eq!(frames.len(), 6);
        for frame in &frames {
            prop_assert_eq!(frame.len(), s.len().saturating_sub(frame.offset) / 3);
        }
    }

    #[test]
    fn proteins_contain_no_start_or_stop(s in dna_seq(300)) {
        let seq = Sequence::new_dna(&s).unwrap();
        let proteins = seq.find_all_proteins(0, 0, true).unwrap();
        for protein in &proteins {
            prop_assert!(!protein.contains('_'));
            prop_assert!(!protein.contains('M'));
        }
        prop_assert!(proteins.windows(2).all(|w| w[0].len() >= w[1].len()));
    }

    #[test]
    fn invalid_symbols_are_rejected(s in dna_seq(50), junk in "[BDEFHIJKLMNOPQRSVWXYZ]") {
        let bad = format!("{}{}", s, junk);
        prop_assert!(!analysis::validate(&bad, SequenceType::Dna));
        prop_assert!(Sequence::new_dna(&bad).is_err());
    }
}
