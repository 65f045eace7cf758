// 3rd party crates
use thiserror::Error;

// Project imports
use crate::geo::errors::LookupError;
use crate::resolver::errors::ResolutionError;

/// A stage failure that skips the current (hostname, label) pair.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    #[error(transparent)]
    Lookup(#[from] LookupError),
}
