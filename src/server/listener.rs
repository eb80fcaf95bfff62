//! # Socket de Escucha
//! src/server/listener.rs
//!
//! `std::net::TcpListener::bind` no deja elegir el backlog, así que el
//! socket se arma con `socket2` y se escucha con `BACKLOG` conexiones
//! pendientes.

use super::shutdown::ShutdownHandle;
use crate::error::{Result, ServerError};
use socket2::{Domain, Protocol, Socket, Type};
use std::net::{SocketAddr, TcpStream};
use std::sync::Arc;

/// Máximo de conexiones pendientes que encola el sistema operativo
pub const BACKLOG: i32 = 5;

/// Dueño del socket de escucha
pub struct Listener {
    socket: Arc<Socket>,
    local_addr: SocketAddr,
    shutdown: ShutdownHandle,
}

impl Listener {
    /// Crea el socket, hace bind y empieza a escuchar
    ///
    /// # Errores
    ///
    /// `ServerError::Bind` si el puerto está ocupado o no hay permisos.
    pub fn bind(addr: SocketAddr) -> Result<Self> {
        let bind_err = |source| ServerError::Bind { addr, source };

        let socket = Socket::new(Domain::for_address(addr), Type::STREAM, Some(Protocol::TCP))
            .map_err(bind_err)?;
        #[cfg(not(target_os = "windows"))]
        socket.set_reuse_address(true).map_err(bind_err)?;
        socket.bind(&addr.into()).map_err(bind_err)?;
        socket.listen(BACKLOG).map_err(bind_err)?;

        let local_addr = socket
            .local_addr()
            .map_err(bind_err)?
            .as_socket()
            .unwrap_or(addr);

        let socket = Arc::new(socket);
        let shutdown = ShutdownHandle::new(Arc::clone(&socket));

        Ok(Self {
            socket,
            local_addr,
            shutdown,
        })
    }

    /// Bloquea hasta que un cliente se conecte
    pub fn accept(&self) -> Result<(TcpStream, SocketAddr)> {
        let (socket, peer) = self.socket.accept().map_err(ServerError::Accept)?;
        let peer = peer.as_socket().unwrap_or(self.local_addr);
        Ok((TcpStream::from(socket), peer))
    }

    /// Dirección real en la que quedó escuchando (útil con puerto 0)
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Handle para liberar el socket desde otro thread
    pub fn shutdown_handle(&self) -> ShutdownHandle {
        self.shutdown.clone()
    }

    pub fn is_released(&self) -> bool {
        self.shutdown.is_released()
    }
}
