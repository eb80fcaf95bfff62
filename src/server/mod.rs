//! # Módulo del Servidor
//! src/server/mod.rs
//!
//! 1. `listener`: socket de escucha con backlog fijo
//! 2. `tcp`: accept loop secuencial y escritura de la respuesta
//! 3. `shutdown`: liberación del socket ante Ctrl+C

pub mod listener;
pub mod shutdown;
pub mod tcp;

// Re-exportar para facilitar el uso
pub use listener::{Listener, BACKLOG};
pub use shutdown::ShutdownHandle;
pub use tcp::Server;
