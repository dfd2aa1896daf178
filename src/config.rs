//! Configuración central de la demo.
//! Carga variables de entorno (.env) y expone una estructura inmutable con
//! los parámetros del run de ejemplo.

use std::env;

/// Parámetros de la demo (extensible para más secciones si hace falta).
#[derive(Debug, Clone, Copy)]
pub struct AppConfig {
    /// Intentos máximos del behavior de reintento.
    pub max_attempts: u32,
    /// Cuántos intentos de cobro rechaza el gateway simulado.
    pub gateway_failures: u32,
}

impl AppConfig {
    /// Lee la configuración desde el entorno, con defaults razonables.
    pub fn from_env() -> Self {
        let max_attempts = env::var("OPFLOW_MAX_ATTEMPTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3);
        let gateway_failures = env::var("OPFLOW_GATEWAY_FAILURES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(1);
        Self { max_attempts, gateway_failures }
    }
}
