//! The probe handler.

use crate::envelope::Envelope;
use crate::upstream::UpstreamClient;
use edge_handler_sdk::{Request, Response};

/// Handle one inbound request: probe the upstream, report the outcome.
///
/// No path, query, or method routing happens here; every invocation does the
/// same single outbound call. Every failure is caught and turned into the
/// failure envelope, so the gateway always receives a JSON body instead of
/// an opaque platform error.
pub async fn handle(req: &Request, client: &UpstreamClient) -> Response {
    let envelope = match client.fetch().await {
        Ok(upstream) => {
            tracing::info!(request_id = %req.request_id, url = client.url(), "upstream probe ok");
            Envelope::success(upstream)
        }
        Err(e) => {
            tracing::warn!(request_id = %req.request_id, url = client.url(), error = %e, "upstream probe failed");
            Envelope::failure(e.to_string())
        }
    };

    Response::json(envelope.status(), envelope)
}
