//! Definiciones de eventos y trait WorkflowLogger.

mod logger;
mod types;

pub use logger::{InMemoryWorkflowLogger, SharedLogger, WorkflowLogger};
pub use types::{WorkflowEvent, WorkflowEventKind};
