use thiserror::Error;

/// Core error type for rendering operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The name generator ran out of representable candidates. Fatal: a
    /// degraded or colliding name is never returned instead.
    #[error("short name space exhausted")]
    NamesExhausted,

    /// The input tree violates a grammar precondition the type system cannot
    /// express.
    #[error("malformed syntax tree: {0}")]
    Malformed(String),

    /// The parser-produced JSON does not conform to the grammar.
    #[error("failed to decode syntax tree: {0}")]
    Decode(#[from] serde_json::Error),
}

impl Error {
    #[must_use]
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }
}
