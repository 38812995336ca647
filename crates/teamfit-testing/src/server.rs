//! Minimal canned-response HTTP stub for exercising the blocking client.
//!
//! No routing and no keep-alive: the stub answers one response per incoming
//! connection, in the order given, then its accept loop ends. Tests must
//! issue exactly as many requests as they queued responses.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use anyhow::Result;

/// One canned HTTP response.
#[derive(Debug, Clone)]
pub struct CannedResponse {
    pub status: u16,
    pub body: String,
}

impl CannedResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }
}

/// One request the stub saw, for asserting paths and bodies.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Raw request line, e.g. `GET /api/dashboard-data HTTP/1.1`.
    pub line: String,
    pub body: String,
}

impl RecordedRequest {
    pub fn method(&self) -> &str {
        self.line.split(' ').next().unwrap_or("")
    }

    /// Path including any query string.
    pub fn path(&self) -> &str {
        self.line.split(' ').nth(1).unwrap_or("")
    }
}

/// Throwaway HTTP server bound to an ephemeral localhost port.
pub struct StubApi {
    base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    _handle: JoinHandle<()>,
}

impl StubApi {
    /// Starts serving `responses`, one per connection, on a background thread.
    pub fn serve(responses: Vec<CannedResponse>) -> Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0")?;
        let base_url = format!("http://{}", listener.local_addr()?);
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&requests);

        let handle = thread::spawn(move || {
            for response in responses {
                let Ok((stream, _)) = listener.accept() else {
                    break;
                };
                // Requests are recorded before the response bytes go out, so
                // once a client call returns its request is visible here.
                let _ = handle_connection(stream, &response, &recorded);
            }
        });

        Ok(Self {
            base_url,
            requests,
            _handle: handle,
        })
    }

    /// Starts a stub that answers every request with the same response.
    pub fn serve_repeated(response: CannedResponse, count: usize) -> Result<Self> {
        Self::serve(vec![response; count])
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Snapshot of the requests seen so far.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("request log poisoned").clone()
    }
}

fn handle_connection(
    mut stream: TcpStream,
    response: &CannedResponse,
    recorded: &Mutex<Vec<RecordedRequest>>,
) -> std::io::Result<()> {
    let request = read_request(&mut stream)?;
    recorded.lock().expect("request log poisoned").push(request);
    write_response(&mut stream, response)
}

fn read_request(stream: &mut TcpStream) -> std::io::Result<RecordedRequest> {
    let mut reader = BufReader::new(stream.try_clone()?);

    let mut line = String::new();
    reader.read_line(&mut line)?;
    let line = line.trim_end().to_string();

    let mut content_length = 0usize;
    loop {
        let mut header = String::new();
        if reader.read_line(&mut header)? == 0 {
            break;
        }
        let header = header.trim_end();
        if header.is_empty() {
            break;
        }
        if let Some((name, value)) = header.split_once(':') {
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value.trim().parse().unwrap_or(0);
            }
        }
    }

    let mut body = vec![0u8; content_length];
    if content_length > 0 {
        reader.read_exact(&mut body)?;
    }

    Ok(RecordedRequest {
        line,
        body: String::from_utf8_lossy(&body).into_owned(),
    })
}

fn write_response(stream: &mut TcpStream, response: &CannedResponse) -> std::io::Result<()> {
    let reason = match response.status {
        200 => "OK",
        201 => "Created",
        400 => "Bad Request",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Status",
    };
    write!(
        stream,
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        response.status,
        reason,
        response.body.len(),
        response.body
    )?;
    stream.flush()
}
