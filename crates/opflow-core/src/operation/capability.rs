//! Capacidad explícita de entrada tipada.
//!
//! Es el mecanismo "declaro que necesito T" por interfaz: la operación
//! implementa `ConsumesInput<T>` y reenvía `apply_input` a través de
//! `apply_typed_input`. El mecanismo alternativo (campo declarado) lo genera
//! el macro `operation!`.

use crate::model::{DataSpec, DataValue};

/// Capacidad "necesito un valor de tipo T". El contexto la alimenta vía
/// `apply_input` cuando el kind está presente en el store.
pub trait ConsumesInput<T: DataSpec> {
    fn set_input(&mut self, value: T);
}

/// Reenvía un `DataValue` hacia la capacidad tipada si el kind coincide.
/// Devuelve `true` si la entrada fue aceptada. Un payload que no decodifica
/// se ignora en silencio: la operación de negocio es la responsable de
/// detectar entradas sin resolver.
pub fn apply_typed_input<T, O>(operation: &mut O, value: &DataValue) -> bool
    where T: DataSpec,
          O: ConsumesInput<T> + ?Sized
{
    if value.kind != T::KIND {
        return false;
    }
    match T::from_value(value) {
        Ok(decoded) => {
            operation.set_input(decoded);
            true
        }
        Err(_) => false,
    }
}
