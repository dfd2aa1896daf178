//! opflow-adapters: Capa de adaptación sobre el core neutro
//!
//! Este crate provee:
//! - Valores tipados de ejemplo (`values`) para un workflow de fulfillment.
//! - Operaciones concretas (`operations`): una raíz que genera hijos
//!   dinámicos, productores y consumidores por ambos mecanismos de entrada
//!   (campo declarado y capacidad `ConsumesInput`).
//! - Behaviors transversales (`behaviors`): reintento acotado por el
//!   marcador de idempotencia y trazas con `tracing`.
//!
//! Nota: El core sólo conoce `DataValue { kind, payload, metadata }` y la
//! interfaz `Operation`. Aquí nos apoyamos en los macros del core para
//! valores y operaciones tipadas.

pub mod behaviors;
pub mod operations;
pub mod values;
