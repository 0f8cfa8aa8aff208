//! Error types for subset sum instances and solvers.
//!
//! Absence of a solution is never an error: exact solvers answer with a
//! definite `bool`/`Option`, and GRASP returns a best-effort result.

use thiserror::Error;

/// Main error type for instance construction, generation, and configuration.
#[derive(Debug, Error)]
pub enum SubsetSumError {
    /// A value appears more than once in the value set.
    #[error("duplicate value {0} in value set")]
    DuplicateValue(u64),

    /// The sum of all values does not fit in a `u64`.
    #[error("sum of values overflows u64")]
    SumOverflow,

    /// Generation bit length outside `1..=MAX_BIT_LENGTH`.
    #[error("bit length {bitlength} out of range 1..={max}")]
    BitLengthOutOfRange {
        /// Requested bit length.
        bitlength: u32,
        /// Largest supported bit length.
        max: u32,
    },

    /// Not enough distinct values exist below `2^bitlength` for the requested size.
    #[error("bitlength {bitlength} too short for {size} size set")]
    SizeExceedsBitLength {
        /// Requested number of values.
        size: usize,
        /// Requested bit length.
        bitlength: u32,
    },

    /// Power-set enumeration requested on an instance too large to index.
    #[error("instance of size {size} exceeds enumeration limit of {max}")]
    InstanceTooLarge {
        /// Instance size.
        size: usize,
        /// Largest enumerable size.
        max: usize,
    },

    /// Configuration could not be parsed.
    #[error("configuration error: {0}")]
    Config(#[from] toml::de::Error),
}

/// Result type alias for subset sum operations.
pub type Result<T> = std::result::Result<T, SubsetSumError>;
