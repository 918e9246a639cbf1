//! Error types for edge handlers

use thiserror::Error;

/// Errors that can occur in handler plumbing.
///
/// These cover the handler <-> gateway channel only. Domain failures (an
/// upstream call going wrong, say) are the handler's own error types, turned
/// into a `Response` before they ever reach the IPC layer.
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("IPC error: {0}")]
    Ipc(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl HandlerError {
    /// Convert the error to an HTTP status code
    pub fn status_code(&self) -> u16 {
        500
    }

    /// Convert to a Response
    pub fn to_response(&self) -> crate::Response {
        crate::Response::internal_error(self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_response_produces_json_error_body() {
        let resp = HandlerError::Ipc("stdin closed".into()).to_response();

        assert_eq!(resp.status, 500);
        let body: serde_json::Value =
            serde_json::from_str(resp.body.as_deref().unwrap()).expect("valid JSON body");
        assert_eq!(body["error"], "IPC error: stdin closed");
    }
}
