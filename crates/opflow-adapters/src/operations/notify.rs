//! Confirmación al cliente (consumo vía capacidad `ConsumesInput`).

use opflow_core::context::{OperationContext, OutputSink};
use opflow_core::errors::EngineError;
use opflow_core::model::{DataKind, DataSpec, DataValue};
use opflow_core::operation::{apply_typed_input, ConsumesInput, Operation, OperationId,
                             OperationRunResult};

use crate::values::{OrderConfirmation, PaymentReceipt};

#[derive(Debug)]
pub struct SendConfirmation {
    instance_id: OperationId,
    sink: Option<OutputSink>,
    receipt: Option<PaymentReceipt>,
}

impl SendConfirmation {
    pub fn new() -> Self {
        Self { instance_id: OperationId::fresh(),
               sink: None,
               receipt: None }
    }
}

impl Default for SendConfirmation {
    fn default() -> Self {
        Self::new()
    }
}

// Capacidad explícita: "necesito un PaymentReceipt".
impl ConsumesInput<PaymentReceipt> for SendConfirmation {
    fn set_input(&mut self, value: PaymentReceipt) {
        self.receipt = Some(value);
    }
}

impl Operation for SendConfirmation {
    fn id(&self) -> &str {
        "send_confirmation"
    }

    fn instance_id(&self) -> OperationId {
        self.instance_id
    }

    fn consumes(&self) -> &[DataKind] {
        const CONSUMED: &[DataKind] = &[PaymentReceipt::KIND];
        CONSUMED
    }

    fn produces(&self) -> &[DataKind] {
        const PRODUCED: &[DataKind] = &[OrderConfirmation::KIND];
        PRODUCED
    }

    fn bind_output_sink(&mut self, sink: OutputSink) {
        self.sink = Some(sink);
    }

    fn apply_input(&mut self, value: &DataValue) {
        apply_typed_input::<PaymentReceipt, _>(self, value);
    }

    fn execute(&mut self, context: &OperationContext) -> OperationRunResult {
        if let Err(error) = context.provide_inputs(&mut *self) {
            return OperationRunResult::Failure { error };
        }
        let receipt = match self.receipt.as_ref() {
            Some(receipt) => receipt.clone(),
            None => {
                return OperationRunResult::Failure {
                    error: EngineError::MissingInput("receipt".to_string()),
                }
            }
        };

        tracing::info!(order_id = %receipt.order_id,
                       reference = %receipt.reference,
                       "order confirmed");

        if let Some(sink) = &self.sink {
            sink.emit(OrderConfirmation { message: format!("pago {} confirmado",
                                                           receipt.reference),
                                          order_id: receipt.order_id });
        }
        OperationRunResult::Success
    }
}
