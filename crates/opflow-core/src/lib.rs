//! opflow-core: Motor de propagación de datos y resolución de decoradores
//! para workflows secuenciales.
pub mod behavior;
pub mod config;
pub mod constants;
pub mod context;
pub mod engine;
pub mod errors;
pub mod event;
pub mod hashing;
pub mod model;
pub mod operation;

pub use behavior::BehaviorFactory;
pub use config::{OperationResolver, RegistryResolver, WorkflowConfiguration};
pub use context::{DataStore, OperationContext, OutputSink, ScopeRegistry, SharedDataStore,
                  SharedScopeRegistry};
pub use engine::WorkflowEngine;
pub use errors::EngineError;
pub use event::{InMemoryWorkflowLogger, SharedLogger, WorkflowEvent, WorkflowEventKind,
                WorkflowLogger};
pub use model::{DataDecodeError, DataKind, DataSpec, DataValue};
pub use operation::{apply_typed_input, innermost_operation, innermost_operation_mut,
                    ConsumesInput, Operation, OperationId, OperationRunResult};

// Los macros (`data_spec!`, `operation!`, `require_input!`) ya quedan en la
// raíz vía #[macro_export].
