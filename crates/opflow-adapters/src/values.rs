//! Valores tipados del workflow de fulfillment.
//!
//! Tipos planos y deterministas: payloads estables para que los digests de
//! telemetría sean reproducibles entre corridas.

use serde::{Deserialize, Serialize};

use opflow_core::data_spec;
use opflow_core::model::{DataKind, DataSpec};

data_spec!(CustomerOrder {
    order_id: String,
    items: Vec<String>,
    amount_cents: u64,
});

data_spec!(PricedQuote {
    order_id: String,
    subtotal_cents: u64,
    tax_cents: u64,
    total_cents: u64,
});

/// Recibo de pago. Implementación manual de `DataSpec` para poder validar
/// que la referencia del gateway venga presente.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub order_id: String,
    pub total_cents: u64,
    pub reference: String,
}

impl DataSpec for PaymentReceipt {
    const KIND: DataKind = DataKind::new("PaymentReceipt");

    fn validate(&self) -> Result<(), String> {
        if self.reference.is_empty() {
            return Err("payment reference must not be empty".into());
        }
        Ok(())
    }
}

data_spec!(OrderConfirmation {
    order_id: String,
    message: String,
});
