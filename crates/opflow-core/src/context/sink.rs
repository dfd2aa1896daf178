//! Handler de emisión enlazado a la operación de negocio.

use std::rc::Rc;

use crate::model::{DataKind, DataSpec, DataValue};
use super::scope::SharedDataStore;

/// Captura las emisiones de una operación hacia el store del scope activo y
/// hacia el overlay persistente de la propia operación (para que sus futuros
/// hijos hereden lo producido).
///
/// Sólo acepta los kinds que la operación declaró producir; cualquier otra
/// emisión se descarta. Es clonable y barato de reemplazar: re-registrar
/// handlers sustituye el sink completo, nunca acumula.
#[derive(Debug, Clone)]
pub struct OutputSink {
    accepted: Vec<DataKind>,
    run_values: SharedDataStore,
    overlay: SharedDataStore,
}

impl OutputSink {
    pub(crate) fn new(accepted: Vec<DataKind>,
                      run_values: SharedDataStore,
                      overlay: SharedDataStore)
                      -> Self {
        Self { accepted, run_values, overlay }
    }

    pub fn accepts(&self, kind: &DataKind) -> bool {
        self.accepted.contains(kind)
    }

    /// Emite un valor tipado.
    pub fn emit<T: DataSpec>(&self, output: T) {
        self.emit_value(output.into_value());
    }

    /// Emite un valor neutro. Sobrescribe cualquier valor previo del mismo
    /// kind en ambos stores.
    pub fn emit_value(&self, value: DataValue) {
        if !self.accepts(&value.kind) {
            return;
        }
        self.run_values.borrow_mut().put(value.clone());
        if !Rc::ptr_eq(&self.run_values, &self.overlay) {
            self.overlay.borrow_mut().put(value);
        }
    }
}
