//! Infraestructura opcional de tipado fuerte para `DataValue` manteniendo el
//! núcleo agnóstico. Permite describir valores con un tipo de datos concreto
//! y validaciones. No introduce semántica de dominio; se basa en generics y
//! serde.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use super::{DataKind, DataValue};

/// Errores posibles al decodificar un valor tipado.
#[derive(Debug)]
pub enum DataDecodeError {
    KindMismatch { expected: DataKind, found: DataKind },
    VersionMismatch { expected: u32, found: Option<u32> },
    Deserialize(String),
    Validation(String),
}

/// Especificación abstracta de un valor tipado.
/// Implementado por tipos de datos que quieren viajar por el contexto de
/// forma segura.
pub trait DataSpec: Sized + Serialize + DeserializeOwned + Clone {
    /// Kind asociado (la clave semántica bajo la que se almacena).
    const KIND: DataKind;
    /// Versión de esquema (incrementar en cambios incompatibles).
    const SCHEMA_VERSION: u32 = 1;

    /// Validación semántica ligera (sin efectos secundarios). Opcional.
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }

    /// Nombre de campo que llevará la versión dentro del payload. Por defecto
    /// `schema_version`. Puede modificarse si el tipo ya usa ese nombre.
    fn version_field_name() -> &'static str {
        "schema_version"
    }

    /// Serializa a `DataValue` neutro, insertando la versión si no existe.
    fn into_value(self) -> DataValue {
        let mut value = serde_json::to_value(&self).expect("serialize data spec");
        if let Value::Object(map) = &mut value {
            map.entry(Self::version_field_name().to_string())
               .or_insert(Value::from(Self::SCHEMA_VERSION));
        }
        DataValue::new(Self::KIND, value, None)
    }

    /// Decodifica desde un valor neutro verificando kind, versión y
    /// validación.
    fn from_value(value: &DataValue) -> Result<Self, DataDecodeError> {
        if value.kind != Self::KIND {
            return Err(DataDecodeError::KindMismatch { expected: Self::KIND,
                                                       found: value.kind });
        }
        let found_version = value.payload
                                 .get(Self::version_field_name())
                                 .and_then(|v| v.as_u64())
                                 .map(|v| v as u32);
        match found_version {
            Some(v) if v == Self::SCHEMA_VERSION => {}
            other => {
                return Err(DataDecodeError::VersionMismatch { expected: Self::SCHEMA_VERSION,
                                                              found: other })
            }
        }
        let decoded: Self = serde_json::from_value(value.payload.clone())
            .map_err(|e| DataDecodeError::Deserialize(e.to_string()))?;
        decoded.validate().map_err(DataDecodeError::Validation)?;
        Ok(decoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Sample {
        label: String,
    }

    impl DataSpec for Sample {
        const KIND: DataKind = DataKind::new("sample");
    }

    #[test]
    fn roundtrip_inserts_schema_version() {
        let value = Sample { label: "x".into() }.into_value();
        assert_eq!(value.payload["schema_version"], 1);
        let back = Sample::from_value(&value).expect("decode sample");
        assert_eq!(back.label, "x");
    }

    #[test]
    fn kind_mismatch_is_rejected() {
        let mut value = Sample { label: "x".into() }.into_value();
        value.kind = DataKind::new("other");
        assert!(matches!(Sample::from_value(&value),
                         Err(DataDecodeError::KindMismatch { .. })));
    }

    #[test]
    fn missing_version_is_rejected() {
        let mut value = Sample { label: "x".into() }.into_value();
        if let serde_json::Value::Object(map) = &mut value.payload {
            map.remove("schema_version");
        }
        assert!(matches!(Sample::from_value(&value),
                         Err(DataDecodeError::VersionMismatch { found: None, .. })));
    }
}
