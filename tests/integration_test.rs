//! Tests de integración para el servidor HTTP
//! tests/integration_test.rs
//!
//! Cada test levanta su propio servidor en un puerto efímero y habla con
//! él por TCP a través de 127.0.0.1.

use hello_server::config::Config;
use hello_server::server::{Server, ShutdownHandle};
use std::io::{Read, Write};
use std::net::{Shutdown, SocketAddr, TcpStream};
use std::thread::{self, JoinHandle};
use std::time::Duration;

struct TestServer {
    addr: SocketAddr,
    handle: ShutdownHandle,
    thread: Option<JoinHandle<hello_server::Result<()>>>,
}

impl TestServer {
    fn start() -> Self {
        let config = Config { port: 0 };

        let server = Server::new(&config).expect("bind");
        let addr = SocketAddr::from(([127, 0, 0, 1], server.local_addr().port()));
        let handle = server.shutdown_handle();
        let thread = thread::spawn(move || server.run());

        Self {
            addr,
            handle,
            thread: Some(thread),
        }
    }

    fn connect(&self) -> TcpStream {
        let stream = TcpStream::connect(self.addr).expect("connect");
        stream.set_read_timeout(Some(Duration::from_secs(5))).unwrap();
        stream.set_write_timeout(Some(Duration::from_secs(5))).unwrap();
        stream
    }

    /// Envía bytes crudos, cierra la escritura y lee la respuesta completa
    fn send_raw(&self, payload: &[u8]) -> Vec<u8> {
        let mut stream = self.connect();
        stream.write_all(payload).unwrap();
        stream.shutdown(Shutdown::Write).unwrap();

        let mut response = Vec::new();
        stream.read_to_end(&mut response).unwrap();
        response
    }

    fn send(&self, payload: &str) -> String {
        String::from_utf8(self.send_raw(payload.as_bytes())).expect("utf-8 response")
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.release();
        let _ = TcpStream::connect(self.addr);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

/// Separa una respuesta en (status line, headers, body)
fn split_response(response: &str) -> (&str, Vec<(&str, &str)>, &str) {
    let (head, body) = response.split_once("\r\n\r\n").expect("blank line");
    let mut lines = head.split("\r\n");
    let status = lines.next().unwrap();
    let headers = lines
        .map(|line| line.split_once(": ").expect("header"))
        .collect();
    (status, headers, body)
}

fn content_length(headers: &[(&str, &str)]) -> usize {
    headers
        .iter()
        .find(|(name, _)| *name == "Content-Length")
        .map(|(_, value)| value.parse().unwrap())
        .expect("Content-Length")
}

#[test]
fn test_get_root() {
    let server = TestServer::start();
    let response = server.send("GET / HTTP/1.1\r\nHost: localhost\r\n\r\n");
    let (status, headers, body) = split_response(&response);

    assert_eq!(status, "HTTP/1.1 200 OK");
    assert_eq!(
        headers,
        vec![("Content-Type", "application/json"), ("Content-Length", "28")]
    );
    assert_eq!(body, r#"{"message": "Hello, World!"}"#);

    let json: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(json, serde_json::json!({"message": "Hello, World!"}));
}

#[test]
fn test_post_not_allowed() {
    let server = TestServer::start();
    let response = server.send("POST / HTTP/1.1\r\nContent-Length: 2\r\n\r\n{}");
    let (status, headers, body) = split_response(&response);

    assert_eq!(status, "HTTP/1.1 405 Method Not Allowed");
    assert_eq!(headers[0], ("Content-Type", "application/json"));
    assert_eq!(content_length(&headers), body.len());

    let json: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "error": "405 Method Not Allowed",
            "message": "Only GET method is allowed."
        })
    );
}

#[test]
fn test_empty_request_not_allowed() {
    let server = TestServer::start();
    let response = server.send("");
    let (status, _, _) = split_response(&response);

    assert_eq!(status, "HTTP/1.1 405 Method Not Allowed");
}

#[test]
fn test_get_prefix_quirk() {
    let server = TestServer::start();
    let response = server.send("GETX / HTTP/1.1\r\n\r\n");
    let (status, _, body) = split_response(&response);

    assert_eq!(status, "HTTP/1.1 200 OK");
    assert_eq!(body, r#"{"message": "Hello, World!"}"#);
}

#[test]
fn test_only_first_line_matters() {
    let server = TestServer::start();
    let response = server.send("PUT /x HTTP/1.1\r\nX-Note: GET / HTTP/1.1\r\n\r\n");
    assert!(response.starts_with("HTTP/1.1 405 Method Not Allowed\r\n"));
}

#[test]
fn test_content_length_matches_body() {
    let server = TestServer::start();
    for request in ["GET / HTTP/1.1\r\n\r\n", "DELETE /a HTTP/1.1\r\n\r\n", "HEAD / HTTP/1.0\r\n\r\n"] {
        let response = server.send(request);
        let (_, headers, body) = split_response(&response);
        assert_eq!(content_length(&headers), body.as_bytes().len());
    }
}

#[test]
fn test_single_response_per_connection() {
    let server = TestServer::start();
    let mut stream = server.connect();
    stream.write_all(b"GET / HTTP/1.1\r\n\r\n").unwrap();

    // Sin cerrar la escritura: el servidor igual responde y cierra
    let mut response = String::new();
    stream.read_to_string(&mut response).unwrap();

    assert_eq!(response.matches("HTTP/1.1 ").count(), 1);
    assert!(response.ends_with(r#"{"message": "Hello, World!"}"#));
}

#[test]
fn test_invalid_utf8_gets_no_response() {
    let server = TestServer::start();

    let response = server.send_raw(b"\xff\xfe / HTTP/1.1\r\n\r\n");
    assert!(response.is_empty());

    // El accept loop sigue atendiendo
    let response = server.send("GET / HTTP/1.1\r\n\r\n");
    assert!(response.starts_with("HTTP/1.1 200 OK\r\n"));
}

#[test]
fn test_multiple_requests_sequentially() {
    let server = TestServer::start();
    for i in 0..5 {
        let request = if i % 2 == 0 { "GET / HTTP/1.1\r\n\r\n" } else { "PATCH / HTTP/1.1\r\n\r\n" };
        let response = server.send(request);
        let expected = if i % 2 == 0 { "HTTP/1.1 200 OK" } else { "HTTP/1.1 405 Method Not Allowed" };
        assert!(response.starts_with(expected), "Request {} failed", i);
    }
}

#[test]
fn test_release_stops_server() {
    let mut server = TestServer::start();
    assert!(server.send("GET / HTTP/1.1\r\n\r\n").starts_with("HTTP/1.1 200 OK"));

    assert!(server.handle.release());
    let _ = TcpStream::connect(server.addr);

    let result = server.thread.take().unwrap().join().unwrap();
    assert!(result.is_ok());
    assert!(!server.handle.release());
}
