//! Standard RNA codon table and stop-terminated translation.
//!
//! The table is a process-wide constant covering all 64 three-base RNA
//! codons: 61 sense codons map to one of the 20 amino acids (several codons
//! per amino acid — biological degeneracy), and UAA, UAG, UGA carry the
//! stop marker.

use velella_core::{Result, VelellaError};

/// Marker byte used for stop codons in the lookup table.
pub const STOP: u8 = b'*';

// ---------------------------------------------------------------------------
// Base encoding: A=0, C=1, G=2, U=3
// ---------------------------------------------------------------------------

fn base_index(b: u8) -> Option<usize> {
    match b {
        b'A' => Some(0),
        b'C' => Some(1),
        b'G' => Some(2),
        b'U' => Some(3),
        _ => None,
    }
}

/// Convert a 3-base RNA codon to an index in [0, 64).
fn codon_index(codon: &[u8]) -> Option<usize> {
    if codon.len() != 3 {
        return None;
    }
    let b1 = base_index(codon[0])?;
    let b2 = base_index(codon[1])?;
    let b3 = base_index(codon[2])?;
    Some(b1 * 16 + b2 * 4 + b3)
}

/// Convert an index in [0, 64) back to an RNA codon.
fn index_to_codon(idx: usize) -> [u8; 3] {
    const BASES: [u8; 4] = [b'A', b'C', b'G', b'U'];
    [BASES[idx >> 4], BASES[(idx >> 2) & 3], BASES[idx & 3]]
}

// ---------------------------------------------------------------------------
// Standard genetic code
// ---------------------------------------------------------------------------

// Codon order: AAA, AAC, AAG, AAU, ACA, ACC, ACG, ACU, AGA, AGC, AGG, AGU,
//              AUA, AUC, AUG, AUU, CAA, CAC, CAG, CAU, CCA, CCC, CCG, CCU,
//              CGA, CGC, CGG, CGU, CUA, CUC, CUG, CUU, GAA, GAC, GAG, GAU,
//              GCA, GCC, GCG, GCU, GGA, GGC, GGG, GGU, GUA, GUC, GUG, GUU,
//              UAA, UAC, UAG, UAU, UCA, UCC, UCG, UCU, UGA, UGC, UGG, UGU,
//              UUA, UUC, UUG, UUU

/// Standard genetic code, stop codons encoded as [`STOP`].
const STANDARD_AA: [u8; 64] = [
    b'K', b'N', b'K', b'N', b'T', b'T', b'T', b'T', b'R', b'S', b'R', b'S',
    b'I', b'I', b'M', b'I', b'Q', b'H', b'Q', b'H', b'P', b'P', b'P', b'P',
    b'R', b'R', b'R', b'R', b'L', b'L', b'L', b'L', b'E', b'D', b'E', b'D',
    b'A', b'A', b'A', b'A', b'G', b'G', b'G', b'G', b'V', b'V', b'V', b'V',
    b'*', b'Y', b'*', b'Y', b'S', b'S', b'S', b'S', b'*', b'C', b'W', b'C',
    b'L', b'F', b'L', b'F',
];

/// Product of decoding a single codon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodonProduct {
    /// A sense codon and its single-letter amino acid.
    AminoAcid(u8),
    /// One of the three stop codons (UAA, UAG, UGA).
    Stop,
}

/// Decode a single RNA codon against the standard genetic code.
///
/// # Errors
///
/// [`VelellaError::AlphabetViolation`] if the codon is not exactly three
/// bytes of `{A, C, G, U}` — a codon outside the table means an invariant
/// was broken upstream, most plausibly by unvalidated construction.
pub fn decode_codon(codon: &[u8]) -> Result<CodonProduct> {
    let idx = codon_index(codon).ok_or_else(|| {
        VelellaError::AlphabetViolation(format!(
            "unknown codon '{}'",
            String::from_utf8_lossy(codon)
        ))
    })?;
    match STANDARD_AA[idx] {
        STOP => Ok(CodonProduct::Stop),
        aa => Ok(CodonProduct::AminoAcid(aa)),
    }
}

/// Translate an RNA sequence, stopping at the first stop codon.
///
/// Scans non-overlapping 3-byte windows from offset 0. An incomplete
/// trailing codon is discarded. The stop codon itself contributes no amino
/// acid and everything after it is discarded.
///
/// # Errors
///
/// Propagates [`VelellaError::AlphabetViolation`] from [`decode_codon`].
pub fn translate_sequence(seq: &[u8]) -> Result<Vec<u8>> {
    let mut protein = Vec::with_capacity(seq.len() / 3);
    for codon in seq.chunks_exact(3) {
        match decode_codon(codon)? {
            CodonProduct::AminoAcid(aa) => protein.push(aa),
            CodonProduct::Stop => break,
        }
    }
    Ok(protein)
}

/// Check whether a codon is one of the three stop codons.
pub fn is_stop(codon: &[u8]) -> bool {
    codon_index(codon).map_or(false, |idx| STANDARD_AA[idx] == STOP)
}

/// Return all stop codons of the standard code.
pub fn stop_codons() -> Vec<[u8; 3]> {
    (0..64)
        .filter(|&i| STANDARD_AA[i] == STOP)
        .map(index_to_codon)
        .collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn rna_seq(max_codons: usize) -> impl Strategy<Value = Vec<u8>> {
        proptest::collection::vec(
            prop_oneof![Just(b'A'), Just(b'C'), Just(b'G'), Just(b'U')],
            0..=(max_codons * 3),
        )
    }

    proptest! {
        #[test]
        fn translation_never_errors_on_valid_rna(seq in rna_seq(20)) {
            prop_assert!(translate_sequence(&seq).is_ok());
        }

        #[test]
        fn translation_output_bounded_by_codon_count(seq in rna_seq(20)) {
            let protein = translate_sequence(&seq).unwrap();
            prop_assert!(protein.len() <= seq.len() / 3);
        }

        #[test]
        fn translation_output_is_sense_amino_acids(seq in rna_seq(20)) {
            let protein = translate_sequence(&seq).unwrap();
            for &aa in &protein {
                prop_assert!(aa != STOP);
                prop_assert!(b"ARNDCEQGHILKMFPSTWYV".contains(&aa));
            }
        }
    }
}
