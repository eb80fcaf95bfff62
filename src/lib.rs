//! # Hello Server
//! src/lib.rs
//!
//! Servidor HTTP/1.1 mínimo de un solo hilo. Acepta una conexión a la vez,
//! mira solo la primera línea del request y responde JSON:
//!
//! - `GET ...` → `200 OK` con `{"message": "Hello, World!"}`
//! - cualquier otra cosa → `405 Method Not Allowed`
//!
//! ## Arquitectura
//!
//! - `config`: argumentos CLI
//! - `logging`: inicialización de `tracing`
//! - `error`: tipo de error del servidor
//! - `http`: lectura del request y construcción de responses
//! - `server`: socket de escucha, accept loop y apagado con Ctrl+C
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use hello_server::config::Config;
//! use hello_server::server::Server;
//!
//! let server = Server::new(&Config::default()).expect("Error al iniciar servidor");
//! server.run().expect("Error en el accept loop");
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod logging;
pub mod server;

pub use error::{Result, ServerError};
