//! # Lectura de Requests
//! src/http/request.rs
//!
//! El servidor no parsea el request completo: hace una sola lectura acotada
//! del socket, la decodifica como UTF-8 y se queda con la primera línea.
//!
//! ```text
//! GET / HTTP/1.1\r\n      <- request line (lo único que se usa)
//! Host: localhost:8080\r\n
//! \r\n
//! ```

use crate::error::Result;
use std::io::Read;

/// Tamaño máximo de la única lectura que se hace por conexión
pub const BUFFER_SIZE: usize = 1024;

/// Lee el request de una conexión
///
/// Hace exactamente un `read` de hasta `BUFFER_SIZE` bytes. Lo que no quepa
/// en esa lectura se descarta. Si el peer no mandó nada retorna un string
/// vacío.
///
/// # Errores
///
/// * `ServerError::Decode` si los bytes no son UTF-8 válido
/// * `ServerError::Io` si falla la lectura
///
/// # Ejemplo
///
/// ```
/// use hello_server::http::request::read_request;
///
/// let mut raw: &[u8] = b"GET / HTTP/1.1\r\n\r\n";
/// assert_eq!(read_request(&mut raw).unwrap(), "GET / HTTP/1.1\r\n\r\n");
/// ```
pub fn read_request<R: Read>(reader: &mut R) -> Result<String> {
    let mut buffer = [0u8; BUFFER_SIZE];
    let bytes_read = reader.read(&mut buffer)?;

    let text = std::str::from_utf8(&buffer[..bytes_read])?;
    Ok(text.to_string())
}

/// Extrae la request line (primera línea) del texto recibido
///
/// Corta en el primer separador de línea; no valida método, path ni versión.
///
/// # Ejemplo
/// ```
/// use hello_server::http::request::first_line;
///
/// assert_eq!(first_line("GET / HTTP/1.1\r\nHost: x\r\n\r\n"), "GET / HTTP/1.1");
/// assert_eq!(first_line(""), "");
/// ```
pub fn first_line(text: &str) -> &str {
    text.split(is_line_break).next().unwrap_or("")
}

/// Separadores de línea reconocidos (los mismos que un `splitlines` genérico)
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}
