//! Core trait definitions for the velella workspace.
//!
//! These traits define the contracts that sequence types implement across
//! crates.

/// A biological sequence (DNA, RNA, protein, etc.).
pub trait Sequence {
    /// The raw byte representation of the sequence.
    fn as_bytes(&self) -> &[u8];

    /// Length in residues/bases.
    fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Whether the sequence is empty.
    fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }
}

/// A type that carries annotations (names, descriptions, metadata).
pub trait Annotated {
    /// A human-readable name or identifier.
    fn name(&self) -> &str;

    /// An optional description.
    fn description(&self) -> Option<&str> {
        None
    }
}

/// A type whose identity can be derived from its content via cryptographic hash.
pub trait ContentAddressable {
    /// Return the content hash as a hex string (e.g. SHA-256).
    fn content_hash(&self) -> String;
}

/// A type that can produce a summary of its contents.
pub trait Summarizable {
    /// A one-line summary suitable for display.
    fn summary(&self) -> String;
}
