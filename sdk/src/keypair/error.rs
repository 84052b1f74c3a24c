use thiserror::Error;

/// Error type for keypair loading operations.
#[derive(Debug, Error)]
pub enum KeypairLoadError {
    /// No keypair source was available
    #[error("No keypair source available. Tried:\n{}\n\nHint: Provide keypair via:\n  - solwallet export --keypair /path/to/key.json\n  - export SOLWALLET_KEYPAIR=/path/to/key.json\n  - solwallet config set --keypair /path/to/key.json", format_attempted(.attempted))]
    NoSourceAvailable {
        /// List of sources that were attempted
        attempted: Vec<String>,
    },

    /// Failed to read keypair file
    #[error("Failed to read keypair file '{path}': {message}")]
    FileReadError {
        /// Path that was attempted
        path: String,
        /// Error message
        message: String,
    },

    /// Invalid JSON in keypair data
    #[error("Invalid keypair JSON from {origin}: {message}")]
    InvalidJsonFormat {
        /// Source description
        origin: String,
        /// Error message
        message: String,
    },

    /// The JSON document's top-level value is not an array
    #[error("Invalid keypair JSON from {origin}: top-level value is not an array")]
    NotAnArray {
        /// Source description
        origin: String,
    },

    /// An array element is not an integer in 0..=255
    #[error("Invalid byte value {value} at index {index} from {origin}: expected an integer in 0..=255")]
    ByteOutOfRange {
        /// Source description
        origin: String,
        /// Position of the offending element
        index: usize,
        /// The offending element, rendered as JSON
        value: String,
    },

    /// Invalid keypair bytes (not 64 bytes)
    #[error("Invalid keypair bytes from {origin}: expected 64 bytes, got {len}")]
    InvalidKeypairBytes {
        /// Source description
        origin: String,
        /// Number of bytes actually present
        len: usize,
    },
}

fn format_attempted(attempted: &[String]) -> String {
    attempted
        .iter()
        .enumerate()
        .map(|(i, s)| format!("  {}. {}", i + 1, s))
        .collect::<Vec<_>>()
        .join("\n")
}
