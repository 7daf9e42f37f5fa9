use std::collections::TryReserveError;
use std::num::TryFromIntError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("input of {len} bytes does not fit in 32-bit offsets")]
    InputTooLarge {
        len: usize,
        #[source]
        source: TryFromIntError,
    },
    #[error("token store could not grow past {len} tokens")]
    OutOfMemory {
        len: usize,
        #[source]
        source: TryReserveError,
    },
}
