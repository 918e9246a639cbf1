//! Handler process entry point.
//!
//! The gateway spawns this binary and frames one request per inbound HTTP
//! call over stdin; we frame one response back over stdout. The loop ends
//! when stdin closes.

use edge_handler_sdk::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use upstream_probe::{handle, ProbeConfig, UpstreamClient};

fn main() {
    // Logs go to stderr; stdout is the IPC channel.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,upstream_probe=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ProbeConfig::from_env();
    tracing::info!(url = %config.upstream_url, timeout = ?config.timeout, "starting upstream-probe handler");

    let rt = tokio::runtime::Runtime::new().expect("Failed to create Tokio runtime");

    let client = match UpstreamClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            // Can't build the HTTP client at all; answer every request with
            // the failure envelope rather than dying silently.
            tracing::error!(error = %e, "failed to build upstream client");
            serve_startup_failure(e.to_string());
            return;
        }
    };

    loop {
        match read_request() {
            Ok(req) => {
                let response = rt.block_on(handle(&req, &client));
                if let Err(e) = send_response(&response) {
                    tracing::error!(error = %e, "failed to send response");
                }
            }
            Err(e) => {
                tracing::info!(error = %e, "request channel closed, shutting down");
                break;
            }
        }
    }
}

/// Fallback loop used when the client could not be constructed: every
/// invocation still gets a well-formed failure envelope.
fn serve_startup_failure(message: String) {
    use upstream_probe::Envelope;

    loop {
        match read_request() {
            Ok(_req) => {
                let envelope = Envelope::failure(message.clone());
                let response = Response::json(envelope.status(), envelope);
                if let Err(e) = send_response(&response) {
                    tracing::error!(error = %e, "failed to send response");
                }
            }
            Err(e) => {
                tracing::info!(error = %e, "request channel closed, shutting down");
                break;
            }
        }
    }
}
