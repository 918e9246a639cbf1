//! IPC protocol for communicating with the hosting gateway.
//!
//! Handlers speak a length-prefixed JSON protocol over stdin/stdout: each
//! frame is a 4-byte big-endian length followed by a JSON payload. The
//! gateway writes one `Request` frame per inbound HTTP request and expects
//! exactly one `Response` frame back.

use crate::{HandlerError, Request, Response};
use std::io::{self, Read, Write};

/// Read a request frame from stdin (sent by the gateway).
///
/// Returns `HandlerError::Ipc` when the channel is closed or truncated; a
/// handler main loop treats that as its shutdown signal.
pub fn read_request() -> Result<Request, HandlerError> {
    let stdin = io::stdin();
    let mut handle = stdin.lock();

    let mut len_buf = [0u8; 4];
    if handle.read_exact(&mut len_buf).is_err() {
        return Err(HandlerError::Ipc("Failed to read length prefix".into()));
    }

    let len = u32::from_be_bytes(len_buf) as usize;

    let mut payload = vec![0u8; len];
    if handle.read_exact(&mut payload).is_err() {
        return Err(HandlerError::Ipc("Failed to read payload".into()));
    }

    serde_json::from_slice(&payload)
        .map_err(|e| HandlerError::Ipc(format!("Failed to parse request: {}", e)))
}

/// Send a response frame to stdout (received by the gateway).
pub fn send_response(response: &Response) -> Result<(), HandlerError> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    let payload = serde_json::to_vec(response)
        .map_err(|e| HandlerError::Ipc(format!("Failed to serialize response: {}", e)))?;

    let len = payload.len() as u32;
    handle
        .write_all(&len.to_be_bytes())
        .map_err(|e| HandlerError::Ipc(format!("Failed to write length: {}", e)))?;
    handle
        .write_all(&payload)
        .map_err(|e| HandlerError::Ipc(format!("Failed to write payload: {}", e)))?;
    handle
        .flush()
        .map_err(|e| HandlerError::Ipc(format!("Failed to flush: {}", e)))?;

    Ok(())
}
