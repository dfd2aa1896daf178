//! Store de valores por kind semántico.

use indexmap::IndexMap;

use crate::model::{DataKind, DataValue};

/// Mapa kind -> valor más reciente. Registrar un kind ya presente sobrescribe
/// el valor anterior (last-write-wins, sin acumulación ni versionado).
///
/// Se usa `IndexMap` para que la iteración siga el orden de inserción y la
/// telemetría sea determinista entre corridas.
#[derive(Debug, Default)]
pub struct DataStore {
    values: IndexMap<DataKind, DataValue>,
}

impl DataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserta o sobrescribe el valor de su kind.
    pub fn put(&mut self, value: DataValue) {
        self.values.insert(value.kind, value);
    }

    pub fn get(&self, kind: &DataKind) -> Option<&DataValue> {
        self.values.get(kind)
    }

    pub fn contains(&self, kind: &DataKind) -> bool {
        self.values.contains_key(kind)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Kinds presentes, en orden de inserción.
    pub fn kinds(&self) -> Vec<DataKind> {
        self.values.keys().copied().collect()
    }
}
