//! Side-table de overlays por instancia de operación.
//!
//! La asociación operación -> overlay es por identidad (`OperationId`), nunca
//! por referencia: buscar el overlay de una operación no la mantiene viva, y
//! consultar una identidad desconocida devuelve "sin datos" en lugar de un
//! error. El registro pertenece al run y se desmonta explícitamente cuando
//! éste termina.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use uuid::Uuid;

use crate::operation::OperationId;
use super::store::DataStore;

/// Store compartido dentro de un run. `Rc<RefCell<..>>` refleja el modelo de
/// ejecución: un solo hilo, un solo dueño lógico (el executor), referencias
/// compartidas entre contexto, sink y overlays.
pub type SharedDataStore = Rc<RefCell<DataStore>>;

#[derive(Debug, Default)]
pub struct ScopeRegistry {
    run_id: Option<Uuid>,
    stores: HashMap<OperationId, SharedDataStore>,
}

impl ScopeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marca el comienzo de un run y descarta cualquier estado previo.
    pub fn begin_run(&mut self, run_id: Uuid) {
        self.run_id = Some(run_id);
        self.stores.clear();
    }

    /// Run activo, si lo hay. Los behaviors lo usan para anotar telemetría.
    pub fn run_id(&self) -> Option<Uuid> {
        self.run_id
    }

    /// Devuelve el overlay de la instancia, creándolo si es la primera vez.
    /// Una instancia re-visitada (p. ej. reintento) recibe el mismo store.
    pub fn store_for(&mut self, id: OperationId) -> SharedDataStore {
        self.stores.entry(id).or_default().clone()
    }

    /// Consulta sin crear. Identidad desconocida o ya desmontada: `None`.
    pub fn lookup(&self, id: OperationId) -> Option<SharedDataStore> {
        self.stores.get(&id).cloned()
    }

    /// Desmonta el side-table al cerrar el run. Todo el estado es run-scoped.
    pub fn clear(&mut self) {
        self.run_id = None;
        self.stores.clear();
    }

    pub fn len(&self) -> usize {
        self.stores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }
}

/// Handle compartido del registro dentro de un run.
pub type SharedScopeRegistry = Rc<RefCell<ScopeRegistry>>;
