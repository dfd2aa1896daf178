//! Cotización de la orden (consumo por campo declarado).

use opflow_core::operation::OperationRunResult;
use opflow_core::{operation, require_input};

use crate::values::{CustomerOrder, PricedQuote};

// Tasa fija y aritmética entera: la cotización es determinista y el digest
// del quote es reproducible entre corridas.
const TAX_RATE_PERCENT: u64 = 16;

operation! {
    op PriceOrder {
        id: "price_order",
        consumes { order: CustomerOrder },
        produces: [PricedQuote],
        run(me, _ctx) {
            let order = require_input!(me.order);
            let subtotal_cents = order.amount_cents;
            let tax_cents = subtotal_cents * TAX_RATE_PERCENT / 100;
            me.emit(PricedQuote { order_id: order.order_id,
                                  subtotal_cents,
                                  tax_cents,
                                  total_cents: subtotal_cents + tax_cents });
            OperationRunResult::Success
        }
    }
}
