use std::collections::TryReserveError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Tokenize(#[from] csfm_tokenizer::Error),
    #[error("node arena could not grow past {len} nodes")]
    OutOfMemory {
        len: usize,
        #[source]
        source: TryReserveError,
    },
}
