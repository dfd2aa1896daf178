//! Contexto de operación: el store de propagación de datos.
//!
//! Rol en el runtime:
//! - `DataStore` guarda a lo sumo un valor vivo por kind (last-write-wins).
//! - `ScopeRegistry` es el side-table del run: asocia a cada instancia de
//!   operación (por `OperationId`) su overlay persistente, sin poseer la
//!   operación. Se desmonta explícitamente al terminar el run.
//! - `OperationContext` media todo el cableado de entradas/salidas de una
//!   operación a punto de ejecutar.
//! - `OutputSink` es el handler de emisión que el contexto enlaza a la
//!   operación de negocio.

pub mod operation_context;
pub mod scope;
pub mod sink;
pub mod store;

pub use operation_context::OperationContext;
pub use scope::{ScopeRegistry, SharedDataStore, SharedScopeRegistry};
pub use sink::OutputSink;
pub use store::DataStore;
