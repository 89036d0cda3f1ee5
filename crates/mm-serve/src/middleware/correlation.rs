use axum::body::Body;
use axum::http::{HeaderName, HeaderValue, Request};
use axum::middleware::Next;
use axum::response::Response;
use tracing::Instrument;
use ulid::Ulid;

#[derive(Clone, Debug)]
pub struct CorrelationId(pub String);

const HEADER_NAME: &str = "x-correlation-id";

/// Tags every request with a correlation id: the client's own when it sent
/// one, a minted `req_` id otherwise. The id rides along as a request
/// extension, is echoed on the response, and scopes a tracing span so that
/// store-read failures logged downstream carry it without each handler
/// attaching it by hand.
pub async fn correlation_middleware(mut request: Request<Body>, next: Next) -> Response {
    let header = HeaderName::from_static(HEADER_NAME);
    let id = match request
        .headers()
        .get(&header)
        .and_then(|value| value.to_str().ok())
    {
        Some(value) if !value.trim().is_empty() => value.to_string(),
        _ => format!("req_{}", Ulid::new()),
    };

    request.extensions_mut().insert(CorrelationId(id.clone()));
    let span = tracing::info_span!("request", correlation_id = %id);
    let mut response = next.run(request).instrument(span).await;
    if let Ok(value) = HeaderValue::from_str(&id) {
        response.headers_mut().insert(header, value);
    }
    response
}
