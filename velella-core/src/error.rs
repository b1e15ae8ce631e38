//! Structured error types for the velella workspace.

use thiserror::Error;

/// Unified error type for all velella operations.
#[derive(Debug, Error)]
pub enum VelellaError {
    /// A point mutation addressed a position outside the sequence.
    #[error("position {position} is out of range for sequence of length {length}")]
    PositionOutOfRange {
        /// The offending position.
        position: usize,
        /// Length of the sequence at the time of the call.
        length: usize,
    },

    /// A point mutation supplied a symbol the target alphabet forbids.
    #[error("symbol '{symbol}' is not a valid {alphabet} symbol")]
    InvalidSymbol {
        /// The rejected symbol.
        symbol: char,
        /// Name of the alphabet that rejected it.
        alphabet: &'static str,
    },

    /// A sequence carried a symbol its alphabet forbids when a transform
    /// required every symbol to be legal. Indicates an upstream invariant
    /// breach (unvalidated construction), not a caller mistake.
    #[error("alphabet invariant violated: {0}")]
    AlphabetViolation(String),
}

/// Convenience alias used throughout the velella workspace.
pub type Result<T> = std::result::Result<T, VelellaError>;
