//! Minimal HTTP/1.1 server answering requests with canned responses.
//!
//! Lets the online catalog path run against a local socket instead of the
//! public index list. Counts every request so tests can see real round trips.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

pub struct JsonServer {
    /// Document URL.
    pub url: String,
    hits: Arc<AtomicUsize>,
}

impl JsonServer {
    /// Requests answered so far.
    pub fn requests(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Serve `body` with `200 OK`.
pub fn start(body: impl Into<Vec<u8>>) -> JsonServer {
    start_with_status(200, "OK", body)
}

/// Serve `body` with an arbitrary status line. The server runs until the
/// process exits.
pub fn start_with_status(status: u16, reason: &'static str, body: impl Into<Vec<u8>>) -> JsonServer {
    spawn(status, reason, vec![body.into()])
}

/// Serve `bodies[n]` to the n-th request; the last one repeats afterwards.
pub fn start_sequence(bodies: Vec<Vec<u8>>) -> JsonServer {
    spawn(200, "OK", bodies)
}

fn spawn(status: u16, reason: &'static str, bodies: Vec<Vec<u8>>) -> JsonServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let bodies = Arc::new(bodies);
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let bodies = Arc::clone(&bodies);
            let counter = Arc::clone(&counter);
            thread::spawn(move || handle(stream, status, reason, &bodies, &counter));
        }
    });
    JsonServer {
        url: format!("http://127.0.0.1:{}/spectral-indices-dict.json", port),
        hits,
    }
}

fn handle(
    mut stream: TcpStream,
    status: u16,
    reason: &str,
    bodies: &[Vec<u8>],
    hits: &AtomicUsize,
) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(_) => {}
    }
    let n = hits.fetch_add(1, Ordering::SeqCst);
    let body = &bodies[n.min(bodies.len() - 1)];
    let head = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        reason,
        body.len()
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(body);
    let _ = stream.flush();
}
