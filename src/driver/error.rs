use thiserror::Error;

use crate::precompile::{PrecompileError, PrecompileKind};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DriverError {
    #[error(transparent)]
    Precompile(#[from] PrecompileError),
    #[error("no implementation of {0} is registered with the driver")]
    Unsupported(PrecompileKind),
}
