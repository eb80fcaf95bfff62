//! # Logging
//! src/logging.rs
//!
//! Inicializa `tracing` con un subscriber de `tracing-subscriber`. El filtro
//! es fijo; no se consulta `RUST_LOG`.

use crate::error::{Result, ServerError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filtro que usa el binario
pub const DEFAULT_FILTER: &str = "info";

/// Instala el subscriber global
///
/// Si ya había uno instalado (por ejemplo en tests) no hace nada.
pub fn init(filter: &str) -> Result<()> {
    let filter = EnvFilter::try_new(filter)
        .map_err(|e| ServerError::Config(format!("invalid log level {:?}: {}", filter, e)))?;

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init();

    Ok(())
}
