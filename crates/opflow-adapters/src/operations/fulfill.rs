//! Operación raíz del workflow: genera los pasos como hijos dinámicos.

use opflow_core::context::OperationContext;
use opflow_core::operation::{Operation, OperationId, OperationRunResult};

use crate::values::CustomerOrder;
use super::{ChargePayment, PriceOrder, ReceiveOrder, SendConfirmation};

/// Orquestador puro: no produce ni consume datos, sólo decide qué hijos
/// corren y en qué orden. Los hijos comparten un contexto derivado anclado a
/// esta instancia, así que cada paso ve lo que emitieron los anteriores.
#[derive(Debug)]
pub struct FulfillOrder {
    instance_id: OperationId,
    order: CustomerOrder,
    gateway_failures: u32,
}

impl FulfillOrder {
    /// `gateway_failures` simula cuántos intentos de cobro fallarán antes de
    /// que el gateway responda (para ejercitar el behavior de reintento).
    pub fn new(order: CustomerOrder, gateway_failures: u32) -> Self {
        Self { instance_id: OperationId::fresh(),
               order,
               gateway_failures }
    }
}

impl Operation for FulfillOrder {
    fn id(&self) -> &str {
        "fulfill_order"
    }

    fn instance_id(&self) -> OperationId {
        self.instance_id
    }

    fn execute(&mut self, _context: &OperationContext) -> OperationRunResult {
        OperationRunResult::SuccessWithChildren {
            children: vec![Box::new(ReceiveOrder::new(self.order.clone())),
                           Box::new(PriceOrder::new()),
                           Box::new(ChargePayment::new(self.gateway_failures)),
                           Box::new(SendConfirmation::new())],
        }
    }
}
