use thiserror::Error;

/// Errors that can occur while decoding or encoding a catalog.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    /// The supplied stream could not be read from or written to.
    #[error("stream error: {0}")]
    Io(#[from] std::io::Error),

    /// A filename-based entry point was given a path that does not exist.
    #[error("file not found: {0}")]
    FileNotFound(String),

    /// The input bytes do not parse as well-formed XML.
    #[error("malformed XML: {0}")]
    MalformedXml(String),

    /// A typed field was present but did not conform to the expected
    /// lexical form.
    #[error("malformed {kind} value at {path}: {text:?}")]
    MalformedValue {
        /// Path of the offending element relative to its lookup root.
        path: String,
        /// Expected lexical type ("integer", "decimal" or "timestamp").
        kind: &'static str,
        /// The text that failed to parse.
        text: String,
    },

    /// The catalog violates an encoding precondition.
    #[error("invalid catalog: {0}")]
    Invalid(String),
}
