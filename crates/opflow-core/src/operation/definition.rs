use std::fmt;

use uuid::Uuid;

use crate::context::{OperationContext, OutputSink};
use crate::model::{DataKind, DataValue};
use super::run_result::OperationRunResult;

/// Identidad estable de una instancia de operación dentro de un run.
///
/// Es la clave del side-table de overlays del contexto: asociar datos a una
/// operación por id no extiende su tiempo de vida.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OperationId(Uuid);

impl OperationId {
    /// Genera una identidad nueva. Se asigna una sola vez, al construir la
    /// operación.
    pub fn fresh() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for OperationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Trait que define una Operación. El motor sólo conoce esta interfaz.
pub trait Operation: fmt::Debug {
    /// Identificador estable y legible dentro del workflow.
    fn id(&self) -> &str;

    /// Nombre opcional amigable.
    fn name(&self) -> &str {
        self.id()
    }

    /// Identidad de esta instancia concreta.
    fn instance_id(&self) -> OperationId;

    /// Kinds que la lógica de negocio emite durante su ejecución.
    fn produces(&self) -> &[DataKind] {
        &[]
    }

    /// Kinds que la lógica de negocio necesita recibir.
    fn consumes(&self) -> &[DataKind] {
        &[]
    }

    /// Marcador declarativo de idempotencia. El core no lo interpreta; los
    /// behaviors lo consultan para decidir si una re-invocación es segura.
    /// Por defecto una operación NO es idempotente.
    fn idempotent(&self) -> bool {
        false
    }

    /// Operación envuelta cuando `self` es un decorador transparente.
    /// `None` significa "soy la operación de negocio".
    fn inner(&self) -> Option<&dyn Operation> {
        None
    }

    /// Variante mutable del enlace de la cadena de decoradores.
    fn inner_mut(&mut self) -> Option<&mut dyn Operation> {
        None
    }

    /// Enlaza (o reemplaza) el sink de emisión. Registrar de nuevo sustituye
    /// el sink anterior; nunca acumula handlers.
    fn bind_output_sink(&mut self, _sink: OutputSink) {}

    /// Inyección neutral de un valor de entrada. Las operaciones ignoran
    /// kinds que no consumen.
    fn apply_input(&mut self, _value: &DataValue) {}

    /// Ejecuta la lógica de la operación (o delega, si es un decorador).
    /// Puede devolver hijos dinámicos que el motor ejecutará en profundidad.
    fn execute(&mut self, context: &OperationContext) -> OperationRunResult;
}
