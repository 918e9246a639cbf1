//! Edge Handler SDK - Types and utilities for writing edge handler binaries
//!
//! This crate provides the core types that handlers use to interact with the
//! hosting gateway: the inbound [`Request`], the outbound [`Response`], and
//! the length-prefixed JSON IPC protocol spoken over stdin/stdout.

pub mod error;
pub mod ipc;
pub mod request;
pub mod response;

pub mod prelude {
    //! Common imports for edge handlers
    pub use crate::error::HandlerError;
    pub use crate::ipc::{read_request, send_response};
    pub use crate::request::Request;
    pub use crate::response::Response;
    pub use serde::{Deserialize, Serialize};
    pub use serde_json::{json, Value as JsonValue};
}

// Re-export key types at crate root
pub use error::HandlerError;
pub use request::Request;
pub use response::Response;
