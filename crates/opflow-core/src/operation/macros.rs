//! Macros utilitarias para reducir boilerplate al definir valores y
//! operaciones tipadas.
//!
//! Exportadas en la raíz del crate para poder usarlas como:
//!   use opflow_core::{data_spec, operation, require_input};

/// Declara un valor tipado con derives y `DataSpec`.
///
/// Formas soportadas:
/// - data_spec!(Name { field1: Ty1, field2: Ty2 }); // KIND = "Name"
/// - data_spec!(Name { field1: Ty1 } kind: $kind_expr);
#[macro_export]
macro_rules! data_spec {
    // Con KIND explícito
    ($name:ident { $($fname:ident : $fty:ty),+ $(,)? } kind: $kind:expr) => {
        #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
        pub struct $name { $(pub $fname: $fty,)+ }
        impl $crate::model::DataSpec for $name {
            const KIND: $crate::model::DataKind = $kind;
        }
    };
    // KIND por defecto: el nombre del tipo
    ($name:ident { $($fname:ident : $fty:ty),+ $(,)? }) => {
        $crate::data_spec!($name { $($fname : $fty),+ }
                           kind: $crate::model::DataKind::new(stringify!($name)));
    };
}

/// Declara una operación de negocio con su conjunto de capacidades resuelto
/// en tiempo de construcción.
///
/// Forma general (las líneas `idempotent` y `consumes` son opcionales):
///
/// ```ignore
/// operation! {
///     op PriceOrder {
///         id: "price_order",
///         idempotent: true,
///         consumes { order: CustomerOrder },
///         produces: [PricedQuote],
///         run(me, ctx) {
///             let order = require_input!(me.order);
///             me.emit(PricedQuote { /* ... */ });
///             OperationRunResult::Success
///         }
///     }
/// }
/// ```
///
/// El macro genera:
/// - un struct con identidad de instancia, sink opcional y un campo
///   `Option<T>` por cada entrada declarada (mecanismo de campo marcado);
/// - `new()` / `Default`;
/// - un helper `emit` que descarta la emisión si no hay sink enlazado;
/// - la implementación de `Operation` con `apply_input` por kind y un
///   `execute` que re-lee sus entradas del contexto antes del cuerpo.
#[macro_export]
macro_rules! operation {
    (
        op $name:ident {
            id: $id:expr,
            $(idempotent: $idem:expr,)?
            $(consumes { $($in_f:ident : $in_ty:ty),+ $(,)? },)?
            produces: [ $($out_ty:ty),* $(,)? ],
            run($self_i:ident, $ctx_i:ident) $body:block
        }
    ) => {
        #[derive(Debug)]
        pub struct $name {
            instance_id: $crate::operation::OperationId,
            sink: Option<$crate::context::OutputSink>,
            $($(pub $in_f: Option<$in_ty>,)+)?
        }

        impl $name {
            pub fn new() -> Self {
                Self { instance_id: $crate::operation::OperationId::fresh(),
                       sink: None,
                       $($($in_f: None,)+)? }
            }

            /// Emite un valor hacia el scope activo. Sin sink enlazado la
            /// emisión se descarta, igual que un handler sin registrar.
            pub fn emit<T: $crate::model::DataSpec>(&self, output: T) {
                if let Some(sink) = &self.sink {
                    sink.emit(output);
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl $crate::operation::Operation for $name {
            fn id(&self) -> &str {
                $id
            }

            fn instance_id(&self) -> $crate::operation::OperationId {
                self.instance_id
            }

            fn produces(&self) -> &[$crate::model::DataKind] {
                const PRODUCED: &[$crate::model::DataKind] =
                    &[$(<$out_ty as $crate::model::DataSpec>::KIND,)*];
                PRODUCED
            }

            $(
            fn consumes(&self) -> &[$crate::model::DataKind] {
                const CONSUMED: &[$crate::model::DataKind] =
                    &[$(<$in_ty as $crate::model::DataSpec>::KIND,)+];
                CONSUMED
            }
            )?

            $(
            fn idempotent(&self) -> bool {
                $idem
            }
            )?

            fn bind_output_sink(&mut self, sink: $crate::context::OutputSink) {
                self.sink = Some(sink);
            }

            $(
            fn apply_input(&mut self, value: &$crate::model::DataValue) {
                $(
                if value.kind == <$in_ty as $crate::model::DataSpec>::KIND {
                    if let Ok(decoded) = <$in_ty as $crate::model::DataSpec>::from_value(value) {
                        self.$in_f = Some(decoded);
                    }
                    return;
                }
                )+
            }
            )?

            fn execute(&mut self, $ctx_i: &$crate::context::OperationContext)
                       -> $crate::operation::OperationRunResult {
                // Re-leer entradas justo antes del cuerpo: los behaviors que
                // envuelven ya ejecutaron su pre-lógica en este punto.
                if let Err(error) =
                    $crate::context::OperationContext::provide_inputs($ctx_i, &mut *self)
                {
                    return $crate::operation::OperationRunResult::Failure { error };
                }
                let $self_i = self;
                $body
            }
        }
    };
}

/// Convierte un campo de entrada ausente en `Failure { MissingInput }`.
/// Detectar entradas requeridas sin resolver es responsabilidad de la
/// operación de negocio, no del contexto.
#[macro_export]
macro_rules! require_input {
    ($op:ident . $field:ident) => {
        match $op.$field.as_ref() {
            Some(value) => value.clone(),
            None => {
                return $crate::operation::OperationRunResult::Failure {
                    error: $crate::errors::EngineError::MissingInput(
                        stringify!($field).to_string(),
                    ),
                }
            }
        }
    };
}
