use crate::errors::EngineError;
use super::definition::Operation;

/// Resultado abstracto de ejecutar una operación.
#[derive(Debug)]
pub enum OperationRunResult {
    /// La operación terminó sin generar hijos.
    Success,
    /// La operación terminó y generó hijos que el motor debe ejecutar a
    /// continuación, en orden, bajo un contexto derivado.
    SuccessWithChildren { children: Vec<Box<dyn Operation>> },
    /// La operación falló con un error terminal (stop-on-failure).
    Failure { error: EngineError },
}
