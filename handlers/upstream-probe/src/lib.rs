//! Upstream egress probe handler.
//!
//! On every invocation the handler makes one GET request to a fixed upstream
//! endpoint and reports the outcome as a JSON envelope: `{"ok": true, ...}`
//! with the upstream payload echoed back, or `{"ok": false, ...}` with the
//! failure message. Deployed behind the gateway it answers the question "can
//! this node reach the outside world and get JSON back?".

pub mod config;
pub mod envelope;
pub mod handler;
pub mod upstream;

pub use config::ProbeConfig;
pub use envelope::Envelope;
pub use handler::handle;
pub use upstream::{UpstreamClient, UpstreamError};
