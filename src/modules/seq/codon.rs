//! Codon tables
//!
//! The standard genetic code, spelled once and bound to the DNA (`T`) and
//! RNA (`U`) base sets. Both tables are total: all 64 codons map to an
//! amino-acid symbol, with `_` marking a stop.

/// Amino-acid symbol marking the start of a protein
pub const START_SYMBOL: u8 = b'M';

/// Amino-acid symbol for a stop codon
pub const STOP_SYMBOL: u8 = b'_';

// Codon order: AAA, AAC, AAG, AAT, ACA, ACC, ACG, ACT, AGA, AGC, AGG, AGT,
//              ATA, ATC, ATG, ATT, CAA, CAC, CAG, CAT, CCA, CCC, CCG, CCT,
//              CGA, CGC, CGG, CGT, CTA, CTC, CTG, CTT, GAA, GAC, GAG, GAT,
//              GCA, GCC, GCG, GCT, GGA, GGC, GGG, GGT, GTA, GTC, GTG, GTT,
//              TAA, TAC, TAG, TAT, TCA, TCC, TCG, TCT, TGA, TGC, TGG, TGT,
//              TTA, TTC, TTG, TTT
const STANDARD_CODE: &[u8; 64] =
    b"KNKNTTTTRSRSIIMIQHQHPPPPRRRRLLLLEDEDAAAAGGGGVVVV_Y_YSSSS_CWCLFLF";

/// DNA codon table
pub static DNA_CODONS: CodonTable = CodonTable {
    name: "DNA",
    bases: *b"ACGT",
    amino_acids: STANDARD_CODE,
};

/// RNA codon table
pub static RNA_CODONS: CodonTable = CodonTable {
    name: "RNA",
    bases: *b"ACGU",
    amino_acids: STANDARD_CODE,
};

/// Mapping from 3-symbol codons to amino-acid symbols
#[derive(Debug)]
pub struct CodonTable {
    name: &'static str,
    bases: [u8; 4],
    amino_acids: &'static [u8; 64],
}

impl CodonTable {
    pub fn name(&self) -> &'static str {
        self.name
    }

    fn base_index(&self, base: u8) -> Option<usize> {
        self.bases.iter().position(|&b| b == base)
    }

    fn codon_index(&self, codon: &[u8]) -> Option<usize> {
        match codon {
            [b1, b2, b3] => {
                let b1 = self.base_index(*b1)?;
                let b2 = self.base_index(*b2)?;
                let b3 = self.base_index(*b3)?;
                Some(b1 * 16 + b2 * 4 + b3)
            }
            _ => None,
        }
    }

    /// Look up an uppercase codon
    ///
    /// Lookup is exact: lower case symbols, bases from the other table and
    /// anything that is not three symbols long return `None`.
    pub fn lookup(&self, codon: &[u8]) -> Option<u8> {
        self.codon_index(codon).map(|idx| self.amino_acids[idx])
    }
}
