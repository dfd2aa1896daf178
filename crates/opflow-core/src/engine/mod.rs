//! Engine module for WorkflowEngine implementation
//!
//! Provides the depth-first executor that wires the operation context around
//! every operation of the run.

pub mod core;

pub use core::WorkflowEngine;

pub use crate::event::{InMemoryWorkflowLogger, WorkflowEvent, WorkflowEventKind, WorkflowLogger};
