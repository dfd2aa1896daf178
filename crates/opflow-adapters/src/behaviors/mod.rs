//! Behaviors transversales aplicables a cualquier operación.

pub mod retry;
pub mod trace;

pub use retry::{RetryBehavior, RetryBehaviorFactory};
pub use trace::{TracingBehavior, TracingBehaviorFactory};
