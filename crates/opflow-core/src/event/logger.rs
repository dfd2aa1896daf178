use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use chrono::Utc;
use uuid::Uuid;

use super::types::{WorkflowEvent, WorkflowEventKind};

/// Registro de eventos append-only de los runs.
pub trait WorkflowLogger: fmt::Debug {
    /// Agrega un evento a partir de su kind y devuelve el evento completo
    /// (con seq y ts).
    fn append_kind(&mut self, run_id: Uuid, kind: WorkflowEventKind) -> WorkflowEvent;
    /// Lista eventos de un run (orden ascendente por seq).
    fn list(&self, run_id: Uuid) -> Vec<WorkflowEvent>;
}

/// Handle compartido del logger entre configuración, motor y behaviors.
pub type SharedLogger = Rc<RefCell<dyn WorkflowLogger>>;

#[derive(Debug, Default)]
pub struct InMemoryWorkflowLogger {
    pub inner: HashMap<Uuid, Vec<WorkflowEvent>>,
}

impl InMemoryWorkflowLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Conveniencia para obtener un `SharedLogger` en memoria.
    pub fn shared() -> SharedLogger {
        Rc::new(RefCell::new(Self::new()))
    }
}

impl WorkflowLogger for InMemoryWorkflowLogger {
    fn append_kind(&mut self, run_id: Uuid, kind: WorkflowEventKind) -> WorkflowEvent {
        let events = self.inner.entry(run_id).or_default();
        let seq = events.len() as u64;
        let event = WorkflowEvent { seq, run_id, kind, ts: Utc::now() };
        events.push(event.clone());
        event
    }

    fn list(&self, run_id: Uuid) -> Vec<WorkflowEvent> {
        self.inner.get(&run_id).cloned().unwrap_or_default()
    }
}
