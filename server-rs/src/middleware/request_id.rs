use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};

pub static REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

#[derive(Debug, Clone)]
pub struct RequestId(pub String);

fn incoming_id(req: &Request) -> Option<String> {
    req.headers()
        .get(&REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn generate_id() -> String {
    format!("{:016x}", rand::random::<u64>())
}

/// Middleware: reuses the caller's `x-request-id` or mints one, attaches it to
/// the request and echoes it on the response.
pub async fn assign_request_id(mut req: Request, next: Next) -> Response {
    let id = incoming_id(&req).unwrap_or_else(generate_id);
    req.extensions_mut().insert(RequestId(id.clone()));

    let mut response = next.run(req).await;
    if let Ok(value) = HeaderValue::from_str(&id) {
        response.headers_mut().insert(REQUEST_ID_HEADER.clone(), value);
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_hex() {
        let id = generate_id();
        assert_eq!(id.len(), 16);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn blank_header_is_ignored() {
        let req = axum::http::Request::builder()
            .header("x-request-id", "   ")
            .body(axum::body::Body::empty())
            .unwrap();
        assert!(incoming_id(&req).is_none());

        let req = axum::http::Request::builder()
            .header("x-request-id", "abc-123")
            .body(axum::body::Body::empty())
            .unwrap();
        assert_eq!(incoming_id(&req).as_deref(), Some("abc-123"));
    }
}
