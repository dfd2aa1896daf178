//! Reintento acotado de operaciones idempotentes.
//!
//! El decorador re-invoca a la operación envuelta tras un fallo sólo si la
//! operación de negocio resuelta lleva el marcador de idempotencia. Como el
//! contexto reutiliza el overlay de la misma instancia, un reintento ve los
//! valores acumulados en el intento anterior.

use opflow_core::behavior::BehaviorFactory;
use opflow_core::context::OperationContext;
use opflow_core::event::{SharedLogger, WorkflowEventKind};
use opflow_core::operation::{innermost_operation, Operation, OperationId, OperationRunResult};

#[derive(Debug)]
pub struct RetryBehavior {
    instance_id: OperationId,
    inner: Box<dyn Operation>,
    max_attempts: u32,
    logger: SharedLogger,
}

impl RetryBehavior {
    pub fn new(inner: Box<dyn Operation>, max_attempts: u32, logger: SharedLogger) -> Self {
        Self { instance_id: OperationId::fresh(),
               inner,
               max_attempts,
               logger }
    }
}

impl Operation for RetryBehavior {
    fn id(&self) -> &str {
        "retry"
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
        let mut attempt: u32 = 1;
        loop {
            match self.inner.execute(context) {
                OperationRunResult::Failure { error } => {
                    let (retryable, operation) =
                        match innermost_operation(self.inner.as_ref()) {
                            Ok(business) => (business.idempotent(), business.id().to_string()),
                            Err(chain_error) => {
                                return OperationRunResult::Failure { error: chain_error }
                            }
                        };
                    if !retryable || attempt >= self.max_attempts {
                        return OperationRunResult::Failure { error };
                    }
                    if let Some(run_id) = context.run_id() {
                        self.logger
                            .borrow_mut()
                            .append_kind(run_id,
                                         WorkflowEventKind::RetryScheduled { operation, attempt });
                    }
                    attempt += 1;
                }
                done => return done,
            }
        }
    }
}

/// Fábrica del behavior de reintento.
#[derive(Debug, Clone, Copy)]
pub struct RetryBehaviorFactory {
    max_attempts: u32,
}

impl RetryBehaviorFactory {
    pub fn new(max_attempts: u32) -> Self {
        Self { max_attempts }
    }
}

impl BehaviorFactory for RetryBehaviorFactory {
    fn name(&self) -> &str {
        "retry"
    }

    fn apply(&self, operation: Box<dyn Operation>, logger: &SharedLogger) -> Box<dyn Operation> {
        Box::new(RetryBehavior::new(operation, self.max_attempts, logger.clone()))
    }
}
