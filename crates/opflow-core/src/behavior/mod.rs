//! Punto de extensión para behaviors transversales.

pub mod factory;

pub use factory::BehaviorFactory;
