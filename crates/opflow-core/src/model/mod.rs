//! Modelos neutrales (DataKind, DataValue, DataSpec).

pub mod typed_value;
pub mod value;

pub use typed_value::{DataDecodeError, DataSpec};
pub use value::{DataKind, DataValue};
