//! Resolución de la operación de negocio al fondo de una cadena de
//! decoradores.
//!
//! Toda inspección de capacidades (produce/consume, marcador de idempotencia)
//! se hace contra la operación resuelta, nunca contra un decorador
//! intermedio: los decoradores son pasamanos transparentes que no participan
//! en el modelo de datos.
//!
//! Las cadenas son finitas y acíclicas por construcción (cada decorador es
//! dueño de su interior vía `Box`). El tope de profundidad convierte una
//! implementación malformada de `inner` en un error de configuración
//! inmediato en lugar de un cuelgue.

use crate::constants::MAX_DECORATOR_DEPTH;
use crate::errors::EngineError;
use super::definition::Operation;

/// Devuelve la operación de negocio siguiendo los enlaces `inner`.
pub fn innermost_operation(operation: &dyn Operation) -> Result<&dyn Operation, EngineError> {
    walk(operation, 0)
}

fn walk(operation: &dyn Operation, depth: usize) -> Result<&dyn Operation, EngineError> {
    if depth > MAX_DECORATOR_DEPTH {
        return Err(EngineError::DecoratorChainTooDeep);
    }
    match operation.inner() {
        Some(inner) => walk(inner, depth + 1),
        None => Ok(operation),
    }
}

/// Variante mutable de `innermost_operation`.
pub fn innermost_operation_mut(operation: &mut dyn Operation)
                               -> Result<&mut dyn Operation, EngineError> {
    walk_mut(operation, 0)
}

fn walk_mut(operation: &mut dyn Operation, depth: usize)
            -> Result<&mut dyn Operation, EngineError> {
    if depth > MAX_DECORATOR_DEPTH {
        return Err(EngineError::DecoratorChainTooDeep);
    }
    if operation.inner_mut().is_none() {
        return Ok(operation);
    }
    let inner = operation.inner_mut().expect("decorator reported an inner operation");
    walk_mut(inner, depth + 1)
}
