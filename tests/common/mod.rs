//! Shared helpers for integration tests

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::mpsc;

use work_lookup::config::SearchConfig;
use work_lookup::search::HttpSearchClient;

/// Serve exactly one HTTP response on a random local port
///
/// Returns the endpoint URL and a receiver yielding the raw request head.
pub fn serve_once(
    status_line: &'static str,
    body: &'static str,
) -> (String, mpsc::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::channel();

    std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        let _ = tx.send(String::from_utf8_lossy(&request).to_string());

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
    });

    (format!("http://{}/api/metadata/search", addr), rx)
}

pub fn client_for(endpoint: &str) -> HttpSearchClient {
    HttpSearchClient::from_config(&SearchConfig {
        endpoint: endpoint.to_string(),
        ..SearchConfig::default()
    })
    .unwrap()
}
