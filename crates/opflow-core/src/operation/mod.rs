//! Definiciones relacionadas a Operaciones.
//!
//! Una operación es la unidad de trabajo del workflow. Puede ser:
//! - Una operación de negocio: declara su conjunto de capacidades (produce
//!   kinds / consume kinds / marcador de idempotencia) en tiempo de
//!   construcción y ejecuta lógica propia.
//! - Un decorador transparente: envuelve a otra operación (campo `inner`) y
//!   añade lógica transversal sin participar en el modelo de datos.
//!
//! Este módulo define:
//! - `Operation`: interfaz neutral usada por el motor.
//! - `OperationRunResult`: resultado de una ejecución (con hijos dinámicos).
//! - Resolución de la operación de negocio al fondo de la cadena.
//! - `ConsumesInput`: capacidad explícita de entrada tipada.

pub mod capability;
pub mod chain;
pub mod definition;
pub mod macros; // macros para valores y operaciones tipadas
mod run_result;

pub use capability::{apply_typed_input, ConsumesInput};
pub use chain::{innermost_operation, innermost_operation_mut};
pub use definition::{Operation, OperationId};
pub use run_result::OperationRunResult;
