//! Configuración del workflow.
//!
//! `WorkflowConfiguration` reúne los colaboradores estables entre runs
//! (resolver, logger, fábricas de behaviors) y construye la operación raíz
//! lista para ejecutar. Los mutadores estilo builder consumen y devuelven la
//! configuración para permitir encadenar llamadas; no validan nada más allá
//! de aceptar colaboradores presentes.

pub mod resolver;

pub use resolver::{OperationResolver, RegistryResolver};

use crate::behavior::BehaviorFactory;
use crate::errors::EngineError;
use crate::event::{InMemoryWorkflowLogger, SharedLogger};
use crate::operation::Operation;

#[derive(Debug)]
pub struct WorkflowConfiguration {
    root_operation: String,
    resolver: Option<Box<dyn OperationResolver>>,
    logger: SharedLogger,
    behavior_factories: Vec<Box<dyn BehaviorFactory>>,
}

impl WorkflowConfiguration {
    /// Crea una configuración para la operación raíz indicada, con un logger
    /// in-memory por defecto y sin behaviors.
    pub fn new(root_operation: impl Into<String>) -> Self {
        Self { root_operation: root_operation.into(),
               resolver: None,
               logger: InMemoryWorkflowLogger::shared(),
               behavior_factories: Vec::new() }
    }

    pub fn with_resolver(mut self, resolver: Box<dyn OperationResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    pub fn with_logger(mut self, logger: SharedLogger) -> Self {
        self.logger = logger;
        self
    }

    /// Registra una fábrica de behavior. El orden de registro es el orden de
    /// aplicación: la última registrada envuelve a todas las anteriores.
    pub fn with_behavior_factory(mut self, factory: Box<dyn BehaviorFactory>) -> Self {
        self.behavior_factories.push(factory);
        self
    }

    pub fn root_operation(&self) -> &str {
        &self.root_operation
    }

    pub fn logger(&self) -> SharedLogger {
        self.logger.clone()
    }

    pub fn behavior_factories(&self) -> &[Box<dyn BehaviorFactory>] {
        &self.behavior_factories
    }

    /// Resuelve la operación raíz y le aplica las fábricas registradas, cada
    /// una envolviendo el resultado de la anterior. Devuelve el decorador más
    /// externo, listo para el executor.
    pub fn create_operation(&self) -> Result<Box<dyn Operation>, EngineError> {
        let resolver = self.resolver
                           .as_ref()
                           .ok_or_else(|| EngineError::Internal("no resolver configured".into()))?;
        let operation = resolver.resolve(&self.root_operation)?;
        Ok(self.apply_behaviors(operation))
    }

    /// Aplica las fábricas de behaviors en orden de registro. El motor la usa
    /// también para envolver operaciones hijas generadas dinámicamente, de
    /// modo que los behaviors cubran todo el árbol.
    pub fn apply_behaviors(&self, operation: Box<dyn Operation>) -> Box<dyn Operation> {
        let mut wrapped = operation;
        for factory in &self.behavior_factories {
            wrapped = factory.apply(wrapped, &self.logger);
        }
        wrapped
    }
}
