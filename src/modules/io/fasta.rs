//! FASTA format I/O
//!
//! This module provides functions for reading and writing FASTA files.
//! Every record is validated against the sequence type the caller declares.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::{debug, warn};

use crate::modules::seq::{Sequence, SequenceError, SequenceResult, SequenceType};

const LINE_WIDTH: usize = 60;

/// A FASTA record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    /// Sequence identifier
    pub id: String,
    /// Optional sequence description
    pub description: Option<String>,
    /// The sequence
    pub sequence: Sequence,
}

impl FastaRecord {
    /// Create a new FASTA record
    pub fn new(id: &str, description: Option<&str>, sequence: Sequence) -> Self {
        let sequence = sequence.with_id(id);
        let sequence = match description {
            Some(desc) => sequence.with_description(desc),
            None => sequence,
        };

        Self {
            id: id.to_string(),
            description: description.map(|s| s.to_string()),
            sequence,
        }
    }

    /// Convert to a string in FASTA format
    pub fn to_fasta_string(&self) -> String {
        let mut output = String::new();

        match &self.description {
            Some(desc) => output.push_str(&format!(">{} {}\n", self.id, desc)),
            None => output.push_str(&format!(">{}\n", self.id)),
        };

        // Sequence is ASCII, so byte chunks are valid char boundaries
        let seq_str = self.sequence.as_str();
        for i in (0..seq_str.len()).step_by(LINE_WIDTH) {
            let end = (i + LINE_WIDTH).min(seq_str.len());
            output.push_str(&seq_str[i..end]);
            output.push('\n');
        }

        output
    }
}

struct PendingRecord {
    line: usize,
    id: String,
    description: Option<String>,
    data: Vec<u8>,
}

impl PendingRecord {
    fn finish(self, seq_type: SequenceType) -> SequenceResult<Option<FastaRecord>> {
        if self.data.is_empty() {
            warn!(
                "Skipping FASTA record '{}' on line {}: no sequence data",
                self.id, self.line
            );
            return Ok(None);
        }

        let sequence = Sequence::new(&self.data, seq_type).map_err(|err| SequenceError::Parse {
            line: self.line,
            message: format!("record '{}': {}", self.id, err),
        })?;

        Ok(Some(FastaRecord::new(
            &self.id,
            self.description.as_deref(),
            sequence,
        )))
    }
}

fn parse_header(header: &str) -> (String, Option<String>) {
    let header = header.trim();
    match header.split_once(char::is_whitespace) {
        Some((id, desc)) => {
            let desc = desc.trim();
            (id.to_string(), (!desc.is_empty()).then(|| desc.to_string()))
        }
        None => (header.to_string(), None),
    }
}

/// Parse FASTA records from any buffered reader
pub fn parse_fasta<R: BufRead>(reader: R, seq_type: SequenceType) -> SequenceResult<Vec<FastaRecord>> {
    let mut records = Vec::new();
    let mut pending: Option<PendingRecord> = None;

    for (idx, line_result) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line_result?;
        let line = line.trim_end();

        // Skip empty lines
        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix('>') {
            if let Some(record) = pending.take() {
                records.extend(record.finish(seq_type)?);
            }

            let (id, description) = parse_header(header);
            if id.is_empty() {
                return Err(SequenceError::Parse {
                    line: line_no,
                    message: "FASTA header without an identifier".to_string(),
                });
            }

            pending = Some(PendingRecord {
                line: line_no,
                id,
                description,
                data: Vec::new(),
            });
        } else {
            match pending.as_mut() {
                Some(record) => record.data.extend_from_slice(line.trim().as_bytes()),
                None => {
                    return Err(SequenceError::Parse {
                        line: line_no,
                        message: "sequence data before the first FASTA header".to_string(),
                    })
                }
            }
        }
    }

    if let Some(record) = pending.take() {
        records.extend(record.finish(seq_type)?);
    }

    debug!("Parsed {} {} FASTA records", records.len(), seq_type);
    Ok(records)
}

/// Read sequences from a FASTA file
pub fn read_fasta<P: AsRef<Path>>(path: P, seq_type: SequenceType) -> SequenceResult<Vec<FastaRecord>> {
    debug!("Reading FASTA file {}", path.as_ref().display());
    let file = File::open(path)?;
    parse_fasta(BufReader::new(file), seq_type)
}

/// Read sequences from a FASTA string
pub fn read_fasta_string(content: &str, seq_type: SequenceType) -> SequenceResult<Vec<FastaRecord>> {
    parse_fasta(content.as_bytes(), seq_type)
}

/// Write sequences to a FASTA string
pub fn write_fasta_string(records: &[FastaRecord]) -> String {
    records.iter().map(FastaRecord::to_fasta_string).collect()
}

/// Write sequences to a FASTA file
pub fn write_fasta<P: AsRef<Path>>(records: &[FastaRecord], path: P) -> SequenceResult<()> {
    debug!(
        "Writing {} FASTA records to {}",
        records.len(),
        path.as_ref().display()
    );
    let mut writer = BufWriter::new(File::create(path)?);
    for record in records {
        writer.write_all(record.to_fasta_string().as_bytes())?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_fasta_record() {
        let seq = Sequence::new_dna("ACGTACGT").unwrap();
        let record = FastaRecord::new("seq1", Some("Test sequence"), seq);

        assert_eq!(record.id, "seq1");
        assert_eq!(record.description, Some("Test sequence".to_string()));
        assert_eq!(record.sequence.id(), Some("seq1"));

        let fasta_str = record.to_fasta_string();
        assert_eq!(fasta_str, ">seq1 Test sequence\nACGTACGT\n");
    }

    #[test]
    fn test_line_wrapping() {
        let seq = Sequence::new_dna("A".repeat(130)).unwrap();
        let record = FastaRecord::new("long", None, seq);
        let lines: Vec<_> = record.to_fasta_string().lines().map(str::len).collect();
        assert_eq!(lines, vec![5, 60, 60, 10]);
    }

    #[test]
    fn test_read_fasta_string() {
        let content = ">seq1 First sequence\nacgt\nACGT\n\n>seq2\nGTAC\n";
        let records = read_fasta_string(content, SequenceType::Dna).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "seq1");
        assert_eq!(records[0].description.as_deref(), Some("First sequence"));
        assert_eq!(records[0].sequence.as_str(), "ACGTACGT");
        assert_eq!(records[1].id, "seq2");
        assert_eq!(records[1].description, None);
    }

    #[test]
    fn test_read_fasta_errors() {
        let err = read_fasta_string("ACGT\n>seq1\nACGT\n", SequenceType::Dna).unwrap_err();
        assert!(matches!(err, SequenceError::Parse { line: 1, .. }));

        let err = read_fasta_string(">seq1\nACGT\n>seq2\nACXT\n", SequenceType::Dna).unwrap_err();
        match err {
            SequenceError::Parse { line, message } => {
                assert_eq!(line, 3);
                assert!(message.contains("seq2"));
            }
            other => panic!("Expected Parse error, got {:?}", other),
        }

        // DNA records are not valid RNA
        assert!(read_fasta_string(">seq1\nACGT\n", SequenceType::Rna).is_err());
    }

    #[test]
    fn test_empty_records_are_skipped() {
        let records = read_fasta_string(">empty\n>seq1\nAUGC\n", SequenceType::Rna).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "seq1");
    }

    #[test]
    fn test_read_write_fasta() -> SequenceResult<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("test.fasta");

        let records = vec![
            FastaRecord::new("seq1", Some("First"), Sequence::new_dna("ACGTACGT")?),
            FastaRecord::new("seq2", None, Sequence::new_dna("GTACGTAC")?),
        ];
        write_fasta(&records, &file_path)?;

        let read_back = read_fasta(&file_path, SequenceType::Dna)?;
        assert_eq!(read_back, records);

        assert_eq!(
            write_fasta_string(&records),
            ">seq1 First\nACGTACGT\n>seq2\nGTACGTAC\n"
        );

        assert!(matches!(
            read_fasta(dir.path().join("missing.fasta"), SequenceType::Dna),
            Err(SequenceError::Io(_))
        ));
        Ok(())
    }
}
