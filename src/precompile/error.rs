#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::PrecompileKind;

/// Errors raised while invoking a measured function.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PrecompileError {
    #[error("{kind} precompile returned error: {reason}")]
    Failed { kind: PrecompileKind, reason: String },
}

impl PrecompileError {
    /// Returns the primitive whose invocation failed.
    pub fn kind(&self) -> PrecompileKind {
        match self {
            Self::Failed { kind, .. } => *kind,
        }
    }
}

/// Raised when a string does not name a known [`PrecompileKind`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown precompile `{0}`, expected one of: sha256, ripemd160, blake2f, keccak256")]
pub struct ParseKindError(pub String);
