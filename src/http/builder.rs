//! # Respuestas del Servidor
//! src/http/builder.rs
//!
//! Decide qué responder a partir de la request line:
//!
//! ```text
//! "GET ..."   → 200 OK                 {"message": "Hello, World!"}
//! otra cosa   → 405 Method Not Allowed {"error": "...", "message": "..."}
//! ```
//!
//! El chequeo del método es un prefijo literal: `GETX / HTTP/1.1` también
//! cuenta como GET.

use super::{Response, StatusCode};
use crate::error::Result;
use serde::Serialize;

/// Prefijo que identifica una petición GET
const GET_PREFIX: &str = "GET";

/// Body de la respuesta exitosa
#[derive(Debug, Serialize)]
struct HelloBody<'a> {
    message: &'a str,
}

/// Body de una respuesta de error
#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: &'a str,
}

/// Construye la respuesta para una request line
///
/// # Ejemplo
/// ```
/// use hello_server::http::{builder, StatusCode};
///
/// let response = builder::build("GET / HTTP/1.1").unwrap();
/// assert_eq!(response.status(), StatusCode::Ok);
///
/// let response = builder::build("DELETE / HTTP/1.1").unwrap();
/// assert_eq!(response.status(), StatusCode::MethodNotAllowed);
/// ```
pub fn build(request_line: &str) -> Result<Response> {
    if request_line.starts_with(GET_PREFIX) {
        hello()
    } else {
        error(StatusCode::MethodNotAllowed, "Only GET method is allowed.")
    }
}

/// Respuesta 200 con el saludo
fn hello() -> Result<Response> {
    let body = HelloBody {
        message: "Hello, World!",
    };
    Ok(Response::json(StatusCode::Ok, &body)?)
}

/// Respuesta de error; el campo `error` repite el status ("405 Method Not Allowed")
fn error(status: StatusCode, message: &str) -> Result<Response> {
    let status_text = status.to_string();
    let body = ErrorBody {
        error: &status_text,
        message,
    };
    Ok(Response::json(status, &body)?)
}
