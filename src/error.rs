//! # Errores del Servidor
//! src/error.rs
//!
//! Taxonomía de errores del servidor. Solo `Bind`, `Signal` y `Config` son
//! fatales (ocurren antes de aceptar conexiones); el resto se limita a una
//! sola conexión y nunca detiene el accept loop.

use std::io;
use std::net::SocketAddr;

/// Errores que pueden ocurrir en el servidor
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// El puerto está ocupado o no hay permisos para usarlo
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    /// Falló un `accept` del socket de escucha
    #[error("failed to accept connection: {0}")]
    Accept(#[source] io::Error),

    /// Los bytes recibidos no son UTF-8 válido
    #[error("request is not valid UTF-8: {0}")]
    Decode(#[from] std::str::Utf8Error),

    /// Error de lectura/escritura sobre una conexión
    #[error("connection I/O error: {0}")]
    Io(#[from] io::Error),

    /// No se pudo serializar el body JSON
    #[error("failed to encode response body: {0}")]
    Encode(#[from] serde_json::Error),

    /// No se pudo instalar el manejador de Ctrl+C
    #[error("failed to install signal handler: {0}")]
    Signal(#[source] io::Error),

    /// Configuración inválida (por ejemplo un filtro de logging mal formado)
    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ServerError>;
