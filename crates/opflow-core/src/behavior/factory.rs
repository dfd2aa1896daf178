//! Contrato para fábricas de behaviors.
//!
//! Una `BehaviorFactory` recibe una operación ya resuelta y devuelve una
//! operación que la envuelve (o la misma, si decide no aplicar). Las fábricas
//! registradas se aplican en orden de registro, cada una sobre el resultado
//! de la anterior: la última registrada queda como decorador más externo.
//!
//! Los behaviors concretos (reintento, logging) viven fuera del core; aquí
//! sólo se define la capacidad.

use std::fmt;

use crate::event::SharedLogger;
use crate::operation::Operation;

pub trait BehaviorFactory: fmt::Debug {
    /// Nombre estable del behavior, usado en telemetría.
    fn name(&self) -> &str;

    /// Envuelve la operación con el decorador del behavior.
    fn apply(&self, operation: Box<dyn Operation>, logger: &SharedLogger)
             -> Box<dyn Operation>;
}
