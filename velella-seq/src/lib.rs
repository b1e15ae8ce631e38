//! Biological sequence records and the DNA → RNA → protein pipeline.
//!
//! Provides identifier-bearing, mutable sequence records parameterized by a
//! fixed alphabet, plus the classic transformation chain:
//!
//! - **Alphabets** — [`DnaAlphabet`], [`RnaAlphabet`], [`ProteinAlphabet`]
//! - **Records** — [`DnaRecord`], [`RnaRecord`], [`ProteinRecord`]
//! - **Transcription** — DNA → RNA (T → U), length-preserving
//! - **Translation** — RNA → protein via the standard codon table,
//!   terminated by the first stop codon
//! - **Inspection** — point mutation, motif search, FASTA rendering
//!
//! Construction is deliberately unchecked against the alphabet; point
//! mutation enforces it, and [`SeqRecord::validate`] offers an explicit
//! check. See [`record`] for the full contract.
//!
//! # Example
//!
//! ```
//! use velella_seq::{DnaRecord, RnaRecord};
//! use velella_core::Sequence;
//!
//! // Transcribe DNA to RNA
//! let dna = DnaRecord::new("sample_001", "ATGTAA");
//! let rna = dna.transcribe();
//! assert_eq!(rna.as_bytes(), b"AUGUAA");
//!
//! // Translate RNA to protein (AUG = Met, UAA = stop)
//! let protein = rna.translate().unwrap();
//! assert_eq!(protein.as_bytes(), b"M");
//! assert_eq!(protein.to_fasta(), ">sample_001\nM");
//!
//! // Point mutation is alphabet-checked
//! let mut rna = rna;
//! assert!(rna.set(2, b'A').is_ok());
//! assert!(rna.set(2, b'T').is_err());
//! ```

pub mod alphabet;
pub mod codon;
pub mod record;
pub mod types;

// Re-export alphabet types
pub use alphabet::{Alphabet, DnaAlphabet, ProteinAlphabet, RnaAlphabet};

// Re-export the generic record type
pub use record::SeqRecord;

// Re-export concrete type aliases and their methods
pub use types::{DnaRecord, ProteinRecord, RnaRecord};

// Re-export codon translation
pub use codon::{decode_codon, translate_sequence, CodonProduct};
