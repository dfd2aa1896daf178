//! Cobro de la orden contra un gateway simulado.
//!
//! `ChargePayment` lleva el marcador de idempotencia: el cobro usa la
//! referencia derivada de la orden como clave de idempotencia del gateway,
//! así que re-invocarlo tras un fallo es seguro. El behavior de reintento
//! consulta ese marcador; el core no lo interpreta.

use opflow_core::context::{OperationContext, OutputSink};
use opflow_core::errors::EngineError;
use opflow_core::model::{DataKind, DataSpec, DataValue};
use opflow_core::operation::{Operation, OperationId, OperationRunResult};

use crate::values::{PaymentReceipt, PricedQuote};

#[derive(Debug)]
pub struct ChargePayment {
    instance_id: OperationId,
    sink: Option<OutputSink>,
    quote: Option<PricedQuote>,
    failures_left: u32,
}

impl ChargePayment {
    /// `failures_left` simula un gateway que rechaza los primeros intentos.
    pub fn new(failures_left: u32) -> Self {
        Self { instance_id: OperationId::fresh(),
               sink: None,
               quote: None,
               failures_left }
    }
}

impl Operation for ChargePayment {
    fn id(&self) -> &str {
        "charge_payment"
    }

    fn instance_id(&self) -> OperationId {
        self.instance_id
    }

    fn consumes(&self) -> &[DataKind] {
        const CONSUMED: &[DataKind] = &[PricedQuote::KIND];
        CONSUMED
    }

    fn produces(&self) -> &[DataKind] {
        const PRODUCED: &[DataKind] = &[PaymentReceipt::KIND];
        PRODUCED
    }

    fn idempotent(&self) -> bool {
        true
    }

    fn bind_output_sink(&mut self, sink: OutputSink) {
        self.sink = Some(sink);
    }

    fn apply_input(&mut self, value: &DataValue) {
        if let Ok(quote) = PricedQuote::from_value(value) {
            self.quote = Some(quote);
        }
    }

    fn execute(&mut self, context: &OperationContext) -> OperationRunResult {
        if let Err(error) = context.provide_inputs(&mut *self) {
            return OperationRunResult::Failure { error };
        }
        let quote = match self.quote.as_ref() {
            Some(quote) => quote.clone(),
            None => {
                return OperationRunResult::Failure {
                    error: EngineError::MissingInput("quote".to_string()),
                }
            }
        };

        if self.failures_left > 0 {
            self.failures_left -= 1;
            return OperationRunResult::Failure {
                error: EngineError::OperationFailed("payment gateway unavailable".into()),
            };
        }

        if let Some(sink) = &self.sink {
            sink.emit(PaymentReceipt { reference: format!("PAY-{}", quote.order_id),
                                       order_id: quote.order_id,
                                       total_cents: quote.total_cents });
        }
        OperationRunResult::Success
    }
}
