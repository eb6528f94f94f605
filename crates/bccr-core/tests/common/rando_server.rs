//! Minimal HTTP/1.1 stub of the randomizer service for integration tests.
//!
//! Accepts the framed POST, splits the body at `ConfLength`, and echoes the
//! ROM region back as the artifact. The seed response header is configurable
//! (lowercase, wrongly cased, or omitted) so tests can exercise the
//! fallback paths.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;

/// How the stub serializes the seed response header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedHeaderMode {
    /// `seed: <value>` — the key the client expects.
    Lowercase,
    /// `Seed: <value>` — wrongly cased, must trip the existence check.
    Capitalized,
    /// No seed header at all.
    Omitted,
}

#[derive(Debug, Clone)]
pub struct RandoServerOptions {
    pub seed_header: SeedHeaderMode,
    /// Seed the server "chooses" when the request carries no `Seed` header.
    pub server_seed: String,
    /// Conf region the server expects; mismatch yields 400.
    pub expected_conf: Option<Vec<u8>>,
    /// If true, a request carrying a `Seed` header yields 400 (used to prove
    /// the client omits the header for seed input "0").
    pub fail_if_seed_present: bool,
}

impl Default for RandoServerOptions {
    fn default() -> Self {
        Self {
            seed_header: SeedHeaderMode::Lowercase,
            server_seed: "777".to_string(),
            expected_conf: None,
            fail_if_seed_present: false,
        }
    }
}

/// Starts the stub in a background thread. Returns the base URL. The server
/// runs until the process exits.
pub fn start(opts: RandoServerOptions) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let opts = Arc::new(opts);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let opts = Arc::clone(&opts);
            thread::spawn(move || handle(stream, &opts));
        }
    });
    format!("http://127.0.0.1:{}/", port)
}

fn handle(mut stream: std::net::TcpStream, opts: &RandoServerOptions) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));

    let (head, mut body) = match read_request(&mut stream) {
        Some(parts) => parts,
        None => return,
    };
    let content_length = header(&head, "content-length").and_then(|v| v.parse::<usize>().ok());
    let conf_len = header(&head, "conflength").and_then(|v| v.parse::<usize>().ok());
    let req_seed = header(&head, "seed");

    // Drain the rest of the body.
    if let Some(total) = content_length {
        while body.len() < total {
            let mut buf = [0u8; 8192];
            match stream.read(&mut buf) {
                Ok(0) | Err(_) => break,
                Ok(n) => body.extend_from_slice(&buf[..n]),
            }
        }
    }

    let conf_len = match (content_length, conf_len) {
        (Some(total), Some(c)) if body.len() == total && c <= total => c,
        _ => {
            let _ = stream.write_all(b"HTTP/1.1 400 Bad Request\r\nContent-Length: 0\r\n\r\n");
            return;
        }
    };

    if opts.fail_if_seed_present && req_seed.is_some() {
        let _ = stream.write_all(b"HTTP/1.1 400 Bad Request\r\nContent-Length: 0\r\n\r\n");
        return;
    }
    if let Some(expected) = &opts.expected_conf {
        if &body[..conf_len] != expected.as_slice() {
            let _ = stream.write_all(b"HTTP/1.1 400 Bad Request\r\nContent-Length: 0\r\n\r\n");
            return;
        }
    }

    let rom = &body[conf_len..];
    let seed = req_seed.unwrap_or_else(|| opts.server_seed.clone());
    let seed_header = match opts.seed_header {
        SeedHeaderMode::Lowercase => format!("seed: {}\r\n", seed),
        SeedHeaderMode::Capitalized => format!("Seed: {}\r\n", seed),
        SeedHeaderMode::Omitted => String::new(),
    };
    let response = format!(
        "HTTP/1.1 200 OK\r\nContent-Length: {}\r\n{}\r\n",
        rom.len(),
        seed_header
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(rom);
}

/// Reads until the end of the header block. Returns the header text and any
/// body bytes already pulled off the socket.
fn read_request(stream: &mut std::net::TcpStream) -> Option<(String, Vec<u8>)> {
    let mut data: Vec<u8> = Vec::new();
    let mut buf = [0u8; 8192];
    loop {
        let n = match stream.read(&mut buf) {
            Ok(0) => return None,
            Ok(n) => n,
            Err(_) => return None,
        };
        data.extend_from_slice(&buf[..n]);
        if let Some(pos) = data.windows(4).position(|w| w == b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&data[..pos]).to_string();
            let body = data[pos + 4..].to_vec();
            return Some((head, body));
        }
        if data.len() > 1 << 20 {
            return None;
        }
    }
}

fn header(head: &str, name: &str) -> Option<String> {
    for line in head.lines() {
        if let Some((key, value)) = line.split_once(':') {
            if key.trim().eq_ignore_ascii_case(name) {
                return Some(value.trim().to_string());
            }
        }
    }
    None
}
