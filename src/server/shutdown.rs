//! # Apagado del Servidor
//! src/server/shutdown.rs
//!
//! Ctrl+C se atiende en un thread dedicado que corre un runtime de tokio de
//! un solo hilo. Al llegar la señal libera el socket de escucha y termina
//! el proceso con código 0, abandonando la conexión que esté en curso.
//!
//! ```text
//! main thread:    accept → read → build → send → accept → ...
//! signal thread:  SIGINT.recv() → release() → exit(0)
//! ```

use crate::error::{Result, ServerError};
use socket2::Socket;
use std::io;
use std::net::Shutdown;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tracing::{debug, error, info};

/// Handle compartido sobre el socket de escucha
///
/// Liberar es idempotente: solo la primera llamada a `release` cierra el
/// socket, las siguientes no hacen nada.
#[derive(Clone)]
pub struct ShutdownHandle {
    socket: Arc<Socket>,
    released: Arc<AtomicBool>,
}

impl ShutdownHandle {
    pub(crate) fn new(socket: Arc<Socket>) -> Self {
        Self {
            socket,
            released: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Libera el socket de escucha
    ///
    /// Retorna `true` si esta llamada fue la que lo liberó. Un `accept`
    /// bloqueado en otro thread se despierta con error.
    pub fn release(&self) -> bool {
        if self.released.swap(true, Ordering::SeqCst) {
            return false;
        }
        if let Err(e) = self.socket.shutdown(Shutdown::Both) {
            // Algunas plataformas no permiten shutdown sobre un socket en listen
            debug!("shutdown of listening socket failed: {}", e);
        }
        true
    }

    pub fn is_released(&self) -> bool {
        self.released.load(Ordering::SeqCst)
    }
}

/// Instala el manejador de Ctrl+C
///
/// El listener de la señal queda registrado en el sistema operativo antes
/// de retornar: un SIGINT que llegue apenas después de `install` ya sale
/// con código 0. Un error al registrarlo se reporta al caller.
pub fn install(handle: ShutdownHandle) -> Result<JoinHandle<()>> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(ServerError::Signal)?;

    let mut interrupt = {
        let _guard = runtime.enter();
        listen_interrupt().map_err(ServerError::Signal)?
    };

    thread::Builder::new()
        .name("shutdown".to_string())
        .spawn(move || {
            if runtime.block_on(interrupt.recv()).is_none() {
                error!("signal stream closed before Ctrl+C");
                return;
            }
            info!("Shutting down the server...");
            handle.release();
            std::process::exit(0);
        })
        .map_err(ServerError::Signal)
}

#[cfg(unix)]
fn listen_interrupt() -> io::Result<tokio::signal::unix::Signal> {
    use tokio::signal::unix::{signal, SignalKind};
    signal(SignalKind::interrupt())
}

#[cfg(windows)]
fn listen_interrupt() -> io::Result<tokio::signal::windows::CtrlC> {
    tokio::signal::windows::ctrl_c()
}
