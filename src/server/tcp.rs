//! # Servidor TCP
//! src/server/tcp.rs
//!
//! Accept loop de un solo hilo: cada conexión se lee, se responde y se
//! cierra antes de aceptar la siguiente. Un cliente lento bloquea a todos
//! los demás mientras dura su request.

use super::listener::Listener;
use super::shutdown::ShutdownHandle;
use crate::config::Config;
use crate::error::{Result, ServerError};
use crate::http::{builder, first_line, read_request, Response};
use std::io::Write;
use std::net::{SocketAddr, TcpStream};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

/// Pausa tras un `accept` fallido (por ejemplo EMFILE), para no girar en vacío
pub const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

/// Servidor HTTP/1.1 secuencial
pub struct Server {
    listener: Listener,
}

impl Server {
    /// Crea el servidor y hace bind del socket de escucha
    ///
    /// # Errores
    ///
    /// `ServerError::Bind` si no se puede usar el puerto.
    pub fn new(config: &Config) -> Result<Self> {
        let listener = Listener::bind(config.socket_addr())?;
        info!("Servidor escuchando en {}", listener.local_addr());

        Ok(Self { listener })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.listener.local_addr()
    }

    /// Handle para liberar el socket (Ctrl+C o tests)
    pub fn shutdown_handle(&self) -> ShutdownHandle {
        self.listener.shutdown_handle()
    }

    /// Imprime el banner de arranque con el puerto real
    pub fn print_banner(&self) {
        println!("...::: Server listening on port {} :::...\n", self.local_addr().port());
        println!(" -> Press Ctrl+C to shut down the server.\n");
    }

    /// Accept loop
    ///
    /// Solo retorna cuando el socket fue liberado con `ShutdownHandle::release`.
    /// Los errores de una conexión se registran y el loop sigue.
    pub fn run(&self) -> Result<()> {
        loop {
            let accepted = self.listener.accept();

            if self.listener.is_released() {
                info!("Socket de escucha liberado, deteniendo accept loop");
                return Ok(());
            }

            match accepted {
                Ok((stream, peer)) => {
                    info!("Connection established from {}", peer);
                    match handle_connection(stream) {
                        Ok(()) => {}
                        Err(e @ ServerError::Decode(_)) => {
                            warn!(%peer, "Error processing request: {}", e)
                        }
                        Err(e) => error!(%peer, "Error processing request: {}", e),
                    }
                }
                Err(e) => {
                    error!("{}", e);
                    if let Some(pause) = backoff_after(&e) {
                        thread::sleep(pause);
                    }
                }
            }
        }
    }
}

/// Cuánto esperar antes del próximo `accept` después de un error
fn backoff_after(err: &ServerError) -> Option<Duration> {
    match err {
        ServerError::Accept(_) => Some(ACCEPT_BACKOFF),
        _ => None,
    }
}

/// Atiende una conexión completa: lee, responde y cierra
///
/// La conexión se toma por valor, así que queda cerrada al retornar por
/// cualquier camino (éxito, error de decodificación o de escritura).
pub fn handle_connection(mut stream: TcpStream) -> Result<()> {
    let start = Instant::now();

    let request = read_request(&mut stream)?;
    debug!("Request:\n{}", request);

    let line = first_line(&request);
    info!("First line of request: {}", line);

    let response = builder::build(line)?;
    send_response(&mut stream, &response)?;

    info!(
        "{} ({:.2}ms)",
        response.status(),
        start.elapsed().as_secs_f64() * 1000.0
    );
    Ok(())
}

/// Escribe la respuesta completa en la conexión
///
/// `write_all` reintenta las escrituras parciales hasta mandar todo.
pub fn send_response<W: Write>(stream: &mut W, response: &Response) -> Result<()> {
    stream.write_all(&response.to_bytes())?;
    stream.flush()?;
    Ok(())
}
