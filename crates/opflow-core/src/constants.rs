//! Constantes del runtime core.
//!
//! Este módulo agrupa valores estáticos que participan en la telemetría y en
//! los límites defensivos del motor. `RUNTIME_VERSION` se estampa en el
//! evento inicial de cada run para poder correlacionar logs entre versiones.

/// Versión lógica del runtime. Se incluye en `WorkflowStarted` para que un
/// cambio de versión quede registrado en la telemetría aunque la definición
/// del workflow no cambie. Mantener estable mientras no haya cambios
/// incompatibles.
pub const RUNTIME_VERSION: &str = "OF1.0";

/// Profundidad máxima admitida al recorrer una cadena de decoradores.
/// Las cadenas son acíclicas por construcción; este tope convierte una
/// configuración malformada en un error inmediato en lugar de un cuelgue.
pub const MAX_DECORATOR_DEPTH: usize = 64;
