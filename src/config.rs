//! # Configuración del Servidor
//! src/config.rs
//!
//! El único parámetro de arranque es el puerto. El servidor siempre escucha
//! en todas las interfaces; no se leen variables de entorno ni archivos.
//!
//! ## Ejemplo de uso
//!
//! ```bash
//! ./hello_server --port 9000
//! ```

use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Puerto por defecto
pub const DEFAULT_PORT: u16 = 8080;

/// Todas las interfaces locales
pub const BIND_IP: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Configuración del servidor
#[derive(Debug, Clone, Parser)]
#[command(name = "hello_server")]
#[command(about = "Servidor HTTP/1.1 mínimo de un solo hilo que responde JSON")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Puerto en el que escucha el servidor
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

impl Config {
    /// Crea una nueva configuración parseando argumentos CLI
    pub fn new() -> Self {
        Config::parse()
    }

    /// Dirección para bind: todas las interfaces en el puerto configurado
    ///
    /// # Ejemplo
    /// ```rust
    /// use hello_server::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
    /// ```
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(BIND_IP, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}
