//! Ingreso de la orden al flujo de datos.

use opflow_core::context::{OperationContext, OutputSink};
use opflow_core::model::{DataKind, DataSpec};
use opflow_core::operation::{Operation, OperationId, OperationRunResult};

use crate::values::CustomerOrder;

/// Fuente del workflow: emite la orden entrante para que el resto de los
/// pasos la consuman. No accede a IO externo; la orden llega ya construida.
#[derive(Debug)]
pub struct ReceiveOrder {
    instance_id: OperationId,
    sink: Option<OutputSink>,
    order: CustomerOrder,
}

impl ReceiveOrder {
    pub fn new(order: CustomerOrder) -> Self {
        Self { instance_id: OperationId::fresh(),
               sink: None,
               order }
    }
}

impl Operation for ReceiveOrder {
    fn id(&self) -> &str {
        "receive_order"
    }

    fn instance_id(&self) -> OperationId {
        self.instance_id
    }

    fn produces(&self) -> &[DataKind] {
        const PRODUCED: &[DataKind] = &[CustomerOrder::KIND];
        PRODUCED
    }

    fn bind_output_sink(&mut self, sink: OutputSink) {
        self.sink = Some(sink);
    }

    fn execute(&mut self, _context: &OperationContext) -> OperationRunResult {
        if let Some(sink) = &self.sink {
            sink.emit(self.order.clone());
        }
        OperationRunResult::Success
    }
}
