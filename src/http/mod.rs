//! # Módulo HTTP
//!
//! Lo mínimo del protocolo para responder a un cliente HTTP ingenuo:
//!
//! - Lectura acotada del request y extracción de la request line
//! - Construcción de responses HTTP/1.1 con body JSON
//! - Códigos de estado
//!
//! ### Formato de Response
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: application/json\r\n
//! Content-Length: 28\r\n
//! \r\n
//! {"message": "Hello, World!"}
//! ```

pub mod builder;   // Elección de la respuesta según la request line
pub mod request;   // Lectura del request
pub mod response;  // Construcción de HTTP responses
pub mod status;    // Códigos de estado HTTP

// Esto permite usar `http::Response` en vez de `http::response::Response`
pub use request::{first_line, read_request};
pub use response::Response;
pub use status::StatusCode;
