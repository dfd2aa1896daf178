//! Trazas de ejecución con `tracing`.
//!
//! Decorador transparente: anota inicio, fin y duración de la operación de
//! negocio resuelta. No toca el store de datos.

use std::time::Instant;

use opflow_core::behavior::BehaviorFactory;
use opflow_core::context::OperationContext;
use opflow_core::event::SharedLogger;
use opflow_core::operation::{innermost_operation, Operation, OperationId, OperationRunResult};

#[derive(Debug)]
pub struct TracingBehavior {
    instance_id: OperationId,
    inner: Box<dyn Operation>,
}

impl TracingBehavior {
    pub fn new(inner: Box<dyn Operation>) -> Self {
        Self { instance_id: OperationId::fresh(), inner }
    }
}

impl Operation for TracingBehavior {
    fn id(&self) -> &str {
        "tracing"
    }

    fn instance_id(&self) -> OperationId {
        self.instance_id
    }

    fn inner(&self) -> Option<&dyn Operation> {
        Some(self.inner.as_ref())
    }

    fn inner_mut(&mut self) -> Option<&mut dyn Operation> {
        Some(self.inner.as_mut())
    }

    fn execute(&mut self, context: &OperationContext) -> OperationRunResult {
        let operation = match innermost_operation(self.inner.as_ref()) {
            Ok(business) => business.id().to_string(),
            Err(error) => return OperationRunResult::Failure { error },
        };

        tracing::debug!(operation = %operation, "operation starting");
        let started = Instant::now();
        let result = self.inner.execute(context);
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match &result {
            OperationRunResult::Failure { error } => {
                tracing::warn!(operation = %operation, elapsed_ms, error = %error,
                               "operation failed");
            }
            _ => {
                tracing::info!(operation = %operation, elapsed_ms, "operation finished");
            }
        }
        result
    }
}

/// Fábrica del behavior de trazas.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingBehaviorFactory;

impl BehaviorFactory for TracingBehaviorFactory {
    fn name(&self) -> &str {
        "tracing"
    }

    fn apply(&self, operation: Box<dyn Operation>, _logger: &SharedLogger) -> Box<dyn Operation> {
        Box::new(TracingBehavior::new(operation))
    }
}
