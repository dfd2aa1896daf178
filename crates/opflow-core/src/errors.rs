//! Errores específicos del core (simples por ahora).

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum EngineError {
    #[error("missing required input: {0}")] MissingInput(String),
    #[error("decorator chain exceeds maximum depth")] DecoratorChainTooDeep,
    #[error("operation failed: {0}")] OperationFailed(String),
    #[error("could not resolve operation '{0}'")] ResolveFailed(String),
    #[error("internal: {0}")] Internal(String),
}
