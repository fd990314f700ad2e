use hanmal_core::HanmalError;
use thiserror::Error;

/// The library's public error type: a [`HanmalError`] plus the chunk it was
/// raised while processing, per the facade's "report the offending chunk and
/// propagate" contract.
#[derive(Error, Debug)]
#[error("failed to tokenize chunk \"{chunk}\" at offset {offset}: {source}")]
pub struct TokenizeError {
    chunk: String,
    offset: usize,
    #[source]
    source: HanmalError,
}

impl TokenizeError {
    pub fn new(chunk: impl Into<String>, offset: usize, source: HanmalError) -> Self {
        TokenizeError {
            chunk: chunk.into(),
            offset,
            source,
        }
    }

    pub fn chunk(&self) -> &str {
        &self.chunk
    }

    pub fn offset(&self) -> usize {
        self.offset
    }
}
