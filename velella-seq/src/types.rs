//! Concrete record type aliases and kind-specific operations.
//!
//! - [`DnaRecord`] — complement, reverse complement, transcription, GC content
//! - [`RnaRecord`] — translation
//! - [`ProteinRecord`] — molecular weight; terminal node of the pipeline
//!
//! Transforms produce a new, independently owned record carrying the same
//! identifier; the source record is never mutated.

use velella_core::{Result, Sequence, VelellaError};

use crate::alphabet::{DnaAlphabet, ProteinAlphabet, RnaAlphabet};
use crate::codon;
use crate::record::SeqRecord;

/// A DNA sequence record (alphabet `ATCG`).
pub type DnaRecord = SeqRecord<DnaAlphabet>;

/// An RNA sequence record (alphabet `AUCG`).
pub type RnaRecord = SeqRecord<RnaAlphabet>;

/// A protein sequence record (20 amino acids plus `X` and `*`).
pub type ProteinRecord = SeqRecord<ProteinAlphabet>;

// ---------------------------------------------------------------------------
// DNA
// ---------------------------------------------------------------------------

fn dna_complement(b: u8) -> Option<u8> {
    match b {
        b'A' => Some(b'T'),
        b'T' => Some(b'A'),
        b'C' => Some(b'G'),
        b'G' => Some(b'C'),
        _ => None,
    }
}

impl DnaRecord {
    /// The Watson-Crick complement strand (A↔T, C↔G) as a new byte string.
    ///
    /// # Errors
    ///
    /// [`VelellaError::AlphabetViolation`] if the data holds a byte outside
    /// the DNA alphabet — possible only through unvalidated construction.
    pub fn complement(&self) -> Result<Vec<u8>> {
        self.as_bytes()
            .iter()
            .map(|&b| {
                dna_complement(b).ok_or_else(|| {
                    VelellaError::AlphabetViolation(format!("unknown base '{}'", b as char))
                })
            })
            .collect()
    }

    /// The reverse complement as a new byte string.
    ///
    /// # Errors
    ///
    /// Same as [`complement`](Self::complement).
    pub fn reverse_complement(&self) -> Result<Vec<u8>> {
        let mut rc = self.complement()?;
        rc.reverse();
        Ok(rc)
    }

    /// Transcribe DNA to RNA (T → U).
    ///
    /// Returns a new record with the same identifier; every other byte is
    /// carried over unchanged.
    pub fn transcribe(&self) -> RnaRecord {
        let rna: Vec<u8> = self
            .as_bytes()
            .iter()
            .map(|&b| if b == b'T' { b'U' } else { b })
            .collect();
        RnaRecord::new(self.identifier(), rna)
    }

    /// GC content as a fraction in [0.0, 1.0].
    ///
    /// Returns 0.0 for empty sequences.
    pub fn gc_content(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let gc = self
            .as_bytes()
            .iter()
            .filter(|&&b| b == b'G' || b == b'C')
            .count();
        gc as f64 / self.len() as f64
    }
}

// ---------------------------------------------------------------------------
// RNA
// ---------------------------------------------------------------------------

impl RnaRecord {
    /// Translate RNA to protein using the standard genetic code.
    ///
    /// Scans codon by codon from offset 0, terminating at the first stop
    /// codon; an incomplete trailing codon is discarded. The result carries
    /// the same identifier and may be empty.
    ///
    /// # Errors
    ///
    /// [`VelellaError::AlphabetViolation`] if a codon falls outside the
    /// 64-entry table.
    pub fn translate(&self) -> Result<ProteinRecord> {
        let protein = codon::translate_sequence(self.as_bytes())?;
        Ok(ProteinRecord::new(self.identifier(), protein))
    }
}

// ---------------------------------------------------------------------------
// Protein
// ---------------------------------------------------------------------------

/// Average molecular weights (Da) for each amino acid.
fn amino_acid_weight(aa: u8) -> f64 {
    match aa {
        b'A' => 89.09, b'R' => 174.20, b'N' => 132.12, b'D' => 133.10,
        b'C' => 121.16, b'E' => 147.13, b'Q' => 146.15, b'G' => 75.03,
        b'H' => 155.16, b'I' => 131.17, b'L' => 131.17, b'K' => 146.19,
        b'M' => 149.21, b'F' => 165.19, b'P' => 115.13, b'S' => 105.09,
        b'T' => 119.12, b'W' => 204.23, b'Y' => 181.19, b'V' => 117.15,
        // Wildcard / stop — use the average of the standard twenty.
        _ => 128.16,
    }
}

impl ProteinRecord {
    /// Estimated molecular weight in Daltons.
    ///
    /// Sum of residue weights minus (n-1) water molecules lost in peptide
    /// bonds. Returns 0.0 for empty sequences.
    pub fn molecular_weight(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.as_bytes().iter().map(|&aa| amino_acid_weight(aa)).sum();
        let water = 18.015;
        sum - (self.len() as f64 - 1.0) * water
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Complement ---

    #[test]
    fn complement_basic() {
        let dna = DnaRecord::new("seq1", "ATGC");
        assert_eq!(dna.complement().unwrap(), b"TACG");
    }

    #[test]
    fn complement_is_involution() {
        let dna = DnaRecord::new("seq1", "ATGGCCATTGTAATGGGCCGC");
        let once = DnaRecord::new("seq1", dna.complement().unwrap());
        assert_eq!(once.complement().unwrap(), dna.as_bytes());
    }

    #[test]
    fn complement_unknown_base_is_internal_error() {
        let dna = DnaRecord::new("bad", "ATXG");
        assert!(matches!(
            dna.complement().unwrap_err(),
            VelellaError::AlphabetViolation(_)
        ));
    }

    #[test]
    fn complement_does_not_mutate_source() {
        let dna = DnaRecord::new("seq1", "ATGC");
        let _ = dna.complement().unwrap();
        assert_eq!(dna.as_bytes(), b"ATGC");
    }

    #[test]
    fn reverse_complement_basic() {
        let dna = DnaRecord::new("seq1", "AACG");
        assert_eq!(dna.reverse_complement().unwrap(), b"CGTT");
    }

    // --- Transcription ---

    #[test]
    fn transcription_replaces_t_with_u() {
        let dna = DnaRecord::new("seq1", "ATGTAA");
        let rna = dna.transcribe();
        assert_eq!(rna.as_bytes(), b"AUGUAA");
        assert_eq!(rna.identifier(), "seq1");
    }

    #[test]
    fn transcription_is_length_preserving() {
        let dna = DnaRecord::new("seq1", "TTTTACGT");
        let rna = dna.transcribe();
        assert_eq!(rna.len(), dna.len());
        assert!(!rna.as_bytes().contains(&b'T'));
    }

    #[test]
    fn transcription_does_not_mutate_source() {
        let dna = DnaRecord::new("seq1", "ATGT");
        let _ = dna.transcribe();
        assert_eq!(dna.as_bytes(), b"ATGT");
    }

    #[test]
    fn derived_record_is_independently_owned() {
        let dna = DnaRecord::new("seq1", "ATGT");
        let mut rna = dna.transcribe();
        rna.set(0, b'C').unwrap();
        assert_eq!(dna.as_bytes(), b"ATGT");
        assert_eq!(rna.as_bytes(), b"CUGU");
    }

    // --- Translation ---

    #[test]
    fn translation_stops_at_stop_codon() {
        let rna = RnaRecord::new("seq1", "AUGUAAUUU");
        let protein = rna.translate().unwrap();
        assert_eq!(protein.as_bytes(), b"M");
        assert_eq!(protein.len(), 1);
    }

    #[test]
    fn translation_full_frame_no_stop() {
        // 9 bases, no stop codon: 3 amino acids.
        let rna = RnaRecord::new("seq1", "AUGUUUGGG");
        let protein = rna.translate().unwrap();
        assert_eq!(protein.as_bytes(), b"MFG");
        assert_eq!(protein.len(), rna.len() / 3);
    }

    #[test]
    fn translation_short_rna_yields_empty_protein() {
        let rna = RnaRecord::new("seq1", "AU");
        let protein = rna.translate().unwrap();
        assert!(protein.is_empty());
        assert_eq!(protein.identifier(), "seq1");
    }

    #[test]
    fn translation_carries_identifier() {
        let rna = RnaRecord::new("sample_001", "AUGGCG");
        let protein = rna.translate().unwrap();
        assert_eq!(protein.identifier(), "sample_001");
    }

    #[test]
    fn translation_mutated_invalid_codon_is_internal_error() {
        let rna = RnaRecord::new("bad", "AUGTAA");
        assert!(matches!(
            rna.translate().unwrap_err(),
            VelellaError::AlphabetViolation(_)
        ));
    }

    // --- Pipeline ---

    #[test]
    fn dna_to_rna_to_protein_pipeline() {
        let dna = DnaRecord::new("gene", "ATGTAA");
        let rna = dna.transcribe();
        assert_eq!(rna.as_bytes(), b"AUGUAA");
        let protein = rna.translate().unwrap();
        assert_eq!(protein.as_bytes(), b"M");
        assert_eq!(protein.len(), 1);
        assert_eq!(protein.to_fasta(), ">gene\nM");
    }

    // --- GC content ---

    #[test]
    fn gc_content_basic() {
        let dna = DnaRecord::new("seq1", "ATGC");
        assert!((dna.gc_content() - 0.5).abs() < 1e-10);
    }

    #[test]
    fn gc_content_empty() {
        let dna = DnaRecord::new("seq1", "");
        assert_eq!(dna.gc_content(), 0.0);
    }

    // --- Molecular weight ---

    #[test]
    fn molecular_weight_empty() {
        let protein = ProteinRecord::new("p", "");
        assert_eq!(protein.molecular_weight(), 0.0);
    }

    #[test]
    fn molecular_weight_single_residue() {
        let protein = ProteinRecord::new("p", "G");
        assert!((protein.molecular_weight() - 75.03).abs() < 1e-10);
    }

    #[test]
    fn molecular_weight_dipeptide_loses_water() {
        let protein = ProteinRecord::new("p", "GG");
        assert!((protein.molecular_weight() - (2.0 * 75.03 - 18.015)).abs() < 1e-10);
    }
}
