//! `OperationContext`: media el cableado de datos de una operación.
//!
//! Un contexto pertenece a una invocación concreta: su store de respaldo es
//! el overlay de la operación de negocio a la que se ancló al crearse. Ese
//! mismo objeto store se enhebra entre hermanos secuenciales, de modo que un
//! hermano posterior siempre ve los valores sobrescritos por los anteriores
//! (estado mutable lineal del run, por diseño).

use std::rc::Rc;

use uuid::Uuid;

use crate::errors::EngineError;
use crate::model::{DataKind, DataSpec, DataValue};
use crate::operation::{innermost_operation, innermost_operation_mut, Operation};
use super::scope::{SharedDataStore, SharedScopeRegistry};
use super::sink::OutputSink;

#[derive(Debug)]
pub struct OperationContext {
    values: SharedDataStore,
    scopes: SharedScopeRegistry,
}

impl OperationContext {
    /// Crea un contexto anclado a la instancia dada. Si la instancia ya tiene
    /// overlay (p. ej. una invocación reintentada, o un ancestro que recibió
    /// entradas), ese store se reutiliza en lugar de recrearse: los valores
    /// acumulados en un intento previo siguen visibles en el siguiente.
    pub fn create(scopes: &SharedScopeRegistry,
                  operation: &dyn Operation)
                  -> Result<Self, EngineError> {
        let business = innermost_operation(operation)?;
        let values = scopes.borrow_mut().store_for(business.instance_id());
        Ok(Self { values, scopes: scopes.clone() })
    }

    /// Run activo del registro de scopes, si lo hay.
    pub fn run_id(&self) -> Option<Uuid> {
        self.scopes.borrow().run_id()
    }

    /// Resuelve la operación de negocio y le enlaza un sink que captura cada
    /// kind declarado en `produces` hacia este store (semántica de
    /// sobrescritura). Llamar de nuevo reemplaza el sink anterior; nunca
    /// duplica emisiones.
    pub fn register_output_handlers(&self, operation: &mut dyn Operation)
                                    -> Result<(), EngineError> {
        let business = innermost_operation_mut(operation)?;
        let overlay = self.scopes.borrow_mut().store_for(business.instance_id());
        let accepted = business.produces().to_vec();
        business.bind_output_sink(OutputSink::new(accepted, self.values.clone(), overlay));
        Ok(())
    }

    /// Para cada kind que la operación de negocio declara consumir y que está
    /// presente en el store: inyecta el valor y lo copia además al overlay de
    /// la operación, de modo que los hijos que ésta genere lo hereden. Un
    /// kind ausente se omite en silencio; no es un error en esta capa.
    pub fn provide_inputs(&self, operation: &mut dyn Operation)
                          -> Result<(), EngineError> {
        let business = innermost_operation_mut(operation)?;
        let overlay = self.scopes.borrow_mut().store_for(business.instance_id());
        let wanted = business.consumes().to_vec();
        for kind in wanted {
            let found = self.values.borrow().get(&kind).cloned();
            if let Some(value) = found {
                business.apply_input(&value);
                if !Rc::ptr_eq(&self.values, &overlay) {
                    overlay.borrow_mut().put(value);
                }
            }
        }
        Ok(())
    }

    /// Valor actual del kind de `T`, o `None` si aún no se produjo ninguno.
    pub fn get_output<T: DataSpec>(&self) -> Option<T> {
        self.values
            .borrow()
            .get(&T::KIND)
            .and_then(|value| T::from_value(value).ok())
    }

    /// Variante neutra de `get_output`.
    pub fn get_value(&self, kind: &DataKind) -> Option<DataValue> {
        self.values.borrow().get(kind).cloned()
    }

    /// Inserta o sobrescribe el valor del kind de `T`. Misma semántica que la
    /// ruta de emisión por handler.
    pub fn add_data<T: DataSpec>(&self, value: T) {
        self.add_value(value.into_value());
    }

    pub fn add_value(&self, value: DataValue) {
        self.values.borrow_mut().put(value);
    }

    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }
}
