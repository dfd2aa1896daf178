//! Core WorkflowEngine implementation

use std::cell::RefCell;
use std::rc::Rc;

use uuid::Uuid;

use crate::config::WorkflowConfiguration;
use crate::constants::RUNTIME_VERSION;
use crate::context::{OperationContext, ScopeRegistry, SharedScopeRegistry};
use crate::errors::EngineError;
use crate::event::{SharedLogger, WorkflowEvent, WorkflowEventKind};
use crate::operation::{innermost_operation, Operation, OperationRunResult};

/// Motor de ejecución de workflows.
///
/// Responsable de orquestar la ejecución secuencial en profundidad del árbol
/// de operaciones, cablear el contexto de datos antes de cada operación y
/// emitir la telemetría del run. Un run es mono-hilo por diseño: ninguna
/// operación se intercala con otra dentro del mismo run.
#[derive(Debug)]
pub struct WorkflowEngine {
    configuration: WorkflowConfiguration,
    scopes: SharedScopeRegistry,
    logger: SharedLogger,
    last_run_id: Option<Uuid>,
}

impl WorkflowEngine {
    /// Crea un motor a partir de una configuración ya armada.
    pub fn new(configuration: WorkflowConfiguration) -> Self {
        let logger = configuration.logger();
        Self { configuration,
               scopes: Rc::new(RefCell::new(ScopeRegistry::new())),
               logger,
               last_run_id: None }
    }

    pub fn configuration(&self) -> &WorkflowConfiguration {
        &self.configuration
    }

    /// Ejecuta un run completo y devuelve su ID.
    ///
    /// Todo el estado de datos es run-scoped: el side-table de overlays se
    /// desmonta al terminar, falle o no el run.
    pub fn run(&mut self) -> Result<Uuid, EngineError> {
        let run_id = Uuid::new_v4();
        self.last_run_id = Some(run_id);
        self.scopes.borrow_mut().begin_run(run_id);

        self.append(run_id,
                    WorkflowEventKind::WorkflowStarted { root: self.configuration
                                                                   .root_operation()
                                                                   .to_string(),
                                                         runtime: RUNTIME_VERSION.to_string() });

        let result = self.run_root(run_id);

        match &result {
            Ok(()) => {
                self.append(run_id, WorkflowEventKind::WorkflowCompleted);
            }
            Err(error) => {
                self.append(run_id, WorkflowEventKind::WorkflowFailed { error: error.clone() });
            }
        }
        self.scopes.borrow_mut().clear();
        result.map(|_| run_id)
    }

    fn run_root(&self, run_id: Uuid) -> Result<(), EngineError> {
        let mut root = self.configuration.create_operation()?;
        for factory in self.configuration.behavior_factories() {
            self.append(run_id,
                        WorkflowEventKind::BehaviorApplied { operation: self.configuration
                                                                           .root_operation()
                                                                           .to_string(),
                                                             behavior: factory.name().to_string() });
        }
        let context = OperationContext::create(&self.scopes, root.as_ref())?;
        self.execute_scope(run_id, root.as_mut(), &context, 0)
    }

    /// Ejecuta una operación dentro de su scope y, en profundidad, los hijos
    /// que genere. Orden por operación: registrar handlers de salida, proveer
    /// entradas, ejecutar (behaviors incluidos), y recién después derivar el
    /// contexto de los hijos anclado a la operación generadora.
    fn execute_scope(&self,
                     run_id: Uuid,
                     operation: &mut dyn Operation,
                     context: &OperationContext,
                     depth: usize)
                     -> Result<(), EngineError> {
        context.register_output_handlers(operation)?;
        context.provide_inputs(operation)?;

        let business_id = innermost_operation(&*operation)?.id().to_string();
        self.append(run_id,
                    WorkflowEventKind::OperationStarted { operation: business_id.clone(), depth });

        match operation.execute(context) {
            OperationRunResult::Success => {
                let outputs = self.output_digests(&*operation, context)?;
                self.append(run_id,
                            WorkflowEventKind::OperationFinished { operation: business_id,
                                                                   outputs });
                Ok(())
            }
            OperationRunResult::SuccessWithChildren { children } => {
                let outputs = self.output_digests(&*operation, context)?;
                self.append(run_id,
                            WorkflowEventKind::OperationFinished { operation: business_id,
                                                                   outputs });

                // Un solo contexto compartido entre los hijos secuenciales:
                // los hermanos posteriores ven lo que sobrescribieron los
                // anteriores, y nada de esto vuelve al scope del padre.
                let child_context = OperationContext::create(&self.scopes, &*operation)?;
                for child in children {
                    let mut wrapped = self.configuration.apply_behaviors(child);
                    self.execute_scope(run_id, wrapped.as_mut(), &child_context, depth + 1)?;
                }
                Ok(())
            }
            OperationRunResult::Failure { error } => {
                self.append(run_id,
                            WorkflowEventKind::OperationFailed { operation: business_id,
                                                                 error: error.clone() });
                Err(error)
            }
        }
    }

    /// Digests de los kinds declarados en `produces` que están presentes en
    /// el scope tras la ejecución. Sólo telemetría.
    fn output_digests(&self,
                      operation: &dyn Operation,
                      context: &OperationContext)
                      -> Result<Vec<String>, EngineError> {
        let business = innermost_operation(operation)?;
        let mut digests = Vec::new();
        for kind in business.produces() {
            if let Some(value) = context.get_value(kind) {
                digests.push(value.digest());
            }
        }
        Ok(digests)
    }

    fn append(&self, run_id: Uuid, kind: WorkflowEventKind) {
        self.logger.borrow_mut().append_kind(run_id, kind);
    }

    /// ID del último run ejecutado, si lo hay.
    pub fn last_run_id(&self) -> Option<Uuid> {
        self.last_run_id
    }

    /// Lista eventos del último run.
    pub fn events(&self) -> Option<Vec<WorkflowEvent>> {
        self.last_run_id.map(|run_id| self.logger.borrow().list(run_id))
    }

    /// Variante compacta de eventos para el último run.
    pub fn event_variants(&self) -> Option<Vec<&'static str>> {
        self.events().map(|events| {
                         events.iter()
                               .map(|e| match e.kind {
                                   WorkflowEventKind::WorkflowStarted { .. } => "I",
                                   WorkflowEventKind::BehaviorApplied { .. } => "B",
                                   WorkflowEventKind::OperationStarted { .. } => "S",
                                   WorkflowEventKind::OperationFinished { .. } => "F",
                                   WorkflowEventKind::OperationFailed { .. } => "X",
                                   WorkflowEventKind::RetryScheduled { .. } => "R",
                                   WorkflowEventKind::WorkflowCompleted => "C",
                                   WorkflowEventKind::WorkflowFailed { .. } => "E",
                               })
                               .collect()
                     })
    }
}
