use thiserror::Error;

/// Failure modes when turning a raw collaborator response into a [`crate::DiseaseReport`].
#[derive(Error, Debug)]
pub enum ParseError {
    /// The response is not a syntactically valid JSON document.
    #[error("response is not a valid JSON document: {0}")]
    MalformedDocument(#[from] serde_json::Error),

    /// The document is valid JSON but a required field is absent or has the wrong shape.
    #[error("missing or malformed field: {0}")]
    MissingField(String),
}

/// Failure modes of a [`crate::ResponseCache`] backend.
///
/// The bundled in-memory backend never fails; the variant exists so that
/// alternative backends can report I/O problems through the same trait.
#[derive(Error, Debug)]
pub enum CacheError {
    #[error("cache backend error: {0}")]
    Backend(String),
}
