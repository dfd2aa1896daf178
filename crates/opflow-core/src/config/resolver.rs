//! Resolución de operaciones por nombre.
//!
//! El core nunca inspecciona tipos en runtime: las operaciones disponibles se
//! registran explícitamente como closures constructoras y se resuelven por
//! nombre. Cada resolución produce una instancia nueva (identidad propia,
//! overlay propio).

use std::collections::HashMap;
use std::fmt;

use crate::errors::EngineError;
use crate::operation::Operation;

pub trait OperationResolver: fmt::Debug {
    fn resolve(&self, operation: &str) -> Result<Box<dyn Operation>, EngineError>;
}

type OperationFactory = Box<dyn Fn() -> Box<dyn Operation>>;

/// Resolver basado en registro explícito nombre -> constructor.
#[derive(Default)]
pub struct RegistryResolver {
    factories: HashMap<String, OperationFactory>,
}

impl RegistryResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registra un constructor bajo un nombre. Devuelve el resolver para
    /// encadenar registros.
    pub fn register<F>(mut self, name: impl Into<String>, factory: F) -> Self
        where F: Fn() -> Box<dyn Operation> + 'static
    {
        self.factories.insert(name.into(), Box::new(factory));
        self
    }
}

impl fmt::Debug for RegistryResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("RegistryResolver").field("operations", &names).finish()
    }
}

impl OperationResolver for RegistryResolver {
    fn resolve(&self, operation: &str) -> Result<Box<dyn Operation>, EngineError> {
        self.factories
            .get(operation)
            .map(|factory| factory())
            .ok_or_else(|| EngineError::ResolveFailed(operation.to_string()))
    }
}
