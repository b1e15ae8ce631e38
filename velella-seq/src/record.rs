//! Generic identifier-bearing sequence record.
//!
//! [`SeqRecord<A>`] pairs an identifier with a mutable byte sequence,
//! parameterized by an [`Alphabet`] marker type. `SeqRecord<DnaAlphabet>` is
//! a DNA record, `SeqRecord<RnaAlphabet>` is RNA, etc.
//!
//! Construction does not validate the initial data against the alphabet;
//! only point mutation via [`set`](SeqRecord::set) enforces it. Callers that
//! need a fully checked record can run [`validate`](SeqRecord::validate)
//! after construction. Transforms that require every symbol to be legal
//! (complement, translation) report a stray byte as
//! [`VelellaError::AlphabetViolation`].

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use velella_core::{Annotated, ContentAddressable, Result, Sequence, Summarizable, VelellaError};

use crate::alphabet::Alphabet;

/// An identifier plus a mutable symbol sequence over alphabet `A`.
#[derive(Clone)]
pub struct SeqRecord<A: Alphabet> {
    identifier: String,
    data: Vec<u8>,
    _alphabet: PhantomData<A>,
}

impl<A: Alphabet> SeqRecord<A> {
    /// Create a new record from an identifier and raw sequence data.
    ///
    /// The data is stored as given; it is not checked against the alphabet.
    /// Use [`validate`](Self::validate) for an explicit check.
    pub fn new(identifier: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            identifier: identifier.into(),
            data: data.into(),
            _alphabet: PhantomData,
        }
    }

    /// The record's identifier.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Check every byte of the data against the alphabet.
    ///
    /// Returns the first out-of-alphabet symbol as
    /// [`VelellaError::InvalidSymbol`].
    pub fn validate(&self) -> Result<()> {
        for &b in &self.data {
            if !A::is_valid(b) {
                return Err(VelellaError::InvalidSymbol {
                    symbol: b as char,
                    alphabet: A::NAME,
                });
            }
        }
        Ok(())
    }

    /// Replace the symbol at `position` with `symbol`.
    ///
    /// The position is checked before the symbol. On error the data is left
    /// byte-identical.
    ///
    /// # Errors
    ///
    /// [`VelellaError::PositionOutOfRange`] if `position >= len()`,
    /// [`VelellaError::InvalidSymbol`] if `symbol` is not in the alphabet.
    pub fn set(&mut self, position: usize, symbol: u8) -> Result<()> {
        if position >= self.data.len() {
            return Err(VelellaError::PositionOutOfRange {
                position,
                length: self.data.len(),
            });
        }
        if !A::is_valid(symbol) {
            return Err(VelellaError::InvalidSymbol {
                symbol: symbol as char,
                alphabet: A::NAME,
            });
        }
        self.data[position] = symbol;
        Ok(())
    }

    /// Position of the first occurrence of `motif` as a contiguous
    /// substring, or `None` if absent.
    ///
    /// An empty motif matches at position 0. A motif longer than the data
    /// never matches.
    pub fn find_motif(&self, motif: impl AsRef<[u8]>) -> Option<usize> {
        let motif = motif.as_ref();
        if motif.is_empty() {
            return Some(0);
        }
        if motif.len() > self.data.len() {
            return None;
        }
        self.data.windows(motif.len()).position(|w| w == motif)
    }

    /// Render the record as a single FASTA block: `>identifier\ndata`.
    ///
    /// No line wrapping is applied to long sequences.
    pub fn to_fasta(&self) -> String {
        format!(">{}\n{}", self.identifier, String::from_utf8_lossy(&self.data))
    }

    /// Consume the record and return the inner byte vector.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

impl<A: Alphabet> Sequence for SeqRecord<A> {
    fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl<A: Alphabet> Annotated for SeqRecord<A> {
    fn name(&self) -> &str {
        &self.identifier
    }
}

impl<A: Alphabet> ContentAddressable for SeqRecord<A> {
    fn content_hash(&self) -> String {
        velella_core::hash::sha256(&self.data)
    }
}

impl<A: Alphabet> Summarizable for SeqRecord<A> {
    fn summary(&self) -> String {
        format!(
            "{} record '{}' ({} residues)",
            A::NAME,
            self.identifier,
            self.data.len()
        )
    }
}

impl<A: Alphabet> fmt::Debug for SeqRecord<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = String::from_utf8_lossy(&self.data);
        write!(f, "{}({:?}, \"{}\")", A::NAME, self.identifier, s)
    }
}

impl<A: Alphabet> fmt::Display for SeqRecord<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_fasta())
    }
}

impl<A: Alphabet> PartialEq for SeqRecord<A> {
    fn eq(&self, other: &Self) -> bool {
        self.identifier == other.identifier && self.data == other.data
    }
}

impl<A: Alphabet> Eq for SeqRecord<A> {}

impl<A: Alphabet> Hash for SeqRecord<A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identifier.hash(state);
        self.data.hash(state);
    }
}

#[cfg(feature = "serde")]
impl<A: Alphabet> serde::Serialize for SeqRecord<A> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let data = std::str::from_utf8(&self.data).map_err(serde::ser::Error::custom)?;
        let mut s = serializer.serialize_struct("SeqRecord", 2)?;
        s.serialize_field("identifier", &self.identifier)?;
        s.serialize_field("data", data)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, A: Alphabet> serde::Deserialize<'de> for SeqRecord<A> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw {
            identifier: String,
            data: String,
        }
        let raw = Raw::deserialize(deserializer)?;
        Ok(Self::new(raw.identifier, raw.data.into_bytes()))
    }
}
