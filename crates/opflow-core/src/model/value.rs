//! Valor neutral del flujo de datos.
//!
//! Un `DataValue` es la unidad de datos propagada entre operaciones. Es
//! neutral:
//! - `kind` es la clave semántica; el motor guarda a lo sumo un valor vivo
//!   por kind en cada scope (last-write-wins).
//! - `payload` es JSON genérico; el motor no interpreta su semántica.
//! - `metadata` permite anotar información auxiliar que no entra al digest.
use serde_json::Value;
use std::fmt;

use crate::hashing::hash_value;

/// Clave semántica de un valor. Las operaciones la declaran en tiempo de
/// construcción (nunca por reflexión en runtime).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DataKind(pub &'static str);

impl DataKind {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for DataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Valor neutral producido/consumido por operaciones.
#[derive(Debug, Clone)]
pub struct DataValue {
    pub kind: DataKind,
    pub payload: Value,          // contenido neutro JSON
    pub metadata: Option<Value>, // información auxiliar (no entra al digest)
}

impl DataValue {
    /// Constructor interno; preferir crear valores a través de
    /// `DataSpec::into_value`.
    pub(crate) fn new(kind: DataKind, payload: Value, metadata: Option<Value>) -> Self {
        Self { kind, payload, metadata }
    }

    /// Digest del payload canónico. Se calcula bajo demanda y sólo lo usa la
    /// telemetría.
    pub fn digest(&self) -> String {
        hash_value(&self.payload)
    }
}
