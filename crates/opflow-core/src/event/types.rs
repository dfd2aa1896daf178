//! Tipos de evento del run y estructura `WorkflowEvent`.
//!
//! Rol en el runtime:
//! - Cada ejecución del `WorkflowEngine` emite eventos a un `WorkflowLogger`
//!   append-only.
//! - Los eventos son el contrato observable del motor: qué operación corrió,
//!   qué produjo (como digests, no payloads completos) y cómo terminó.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::EngineError;

/// Tipos de eventos soportados.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum WorkflowEventKind {
    /// Emisión inicial de un run: fija la operación raíz y la versión del
    /// runtime. Invariante: debe ser el primer evento de un `run_id`.
    WorkflowStarted { root: String, runtime: String },
    /// Un behavior envolvió a la operación raíz durante `create_operation`.
    BehaviorApplied { operation: String, behavior: String },
    /// Una operación (de negocio) comenzó su ejecución. No implica éxito.
    OperationStarted { operation: String, depth: usize },
    /// Una operación terminó correctamente, con los digests de los kinds que
    /// declaró producir y que están presentes en su scope.
    OperationFinished { operation: String, outputs: Vec<String> },
    /// Una operación terminó con error terminal. El run no continúa
    /// (stop-on-failure).
    OperationFailed { operation: String, error: EngineError },
    /// Un behavior de reintento programó una nueva invocación.
    RetryScheduled { operation: String, attempt: u32 },
    /// Evento de cierre de un run exitoso.
    WorkflowCompleted,
    /// Evento de cierre de un run fallido.
    WorkflowFailed { error: EngineError },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowEvent {
    pub seq: u64, // asignado por el logger in-memory (orden append)
    pub run_id: Uuid,
    pub kind: WorkflowEventKind,
    pub ts: DateTime<Utc>, // metadato (no entra en digests)
}
