//! # Hello Server - Entry Point
//! src/main.rs
//!
//! Parsea la CLI, hace bind, instala el manejador de Ctrl+C y corre el
//! accept loop hasta que llegue la señal.

use hello_server::config::Config;
use hello_server::server::{shutdown, Server};
use hello_server::{logging, Result};

fn main() {
    let config = Config::new();

    if let Err(e) = run(&config) {
        eprintln!("💥 Error fatal: {}", e);
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<()> {
    logging::init(logging::DEFAULT_FILTER)?;

    let server = Server::new(config)?;
    shutdown::install(server.shutdown_handle())?;

    // El banner sale recién con Ctrl+C ya registrado
    server.print_banner();

    // Bloquea el thread hasta Ctrl+C
    server.run()
}
