use axum::http::{header, HeaderMap, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;

const NOT_FOUND_MESSAGE: &str = "Not Found";

/// Fallback for unknown routes. JSON for clients that ask for it, plain text
/// otherwise.
pub async fn not_found_handler(uri: Uri, headers: HeaderMap) -> Response {
    tracing::debug!(path = %uri.path(), "no route");

    let wants_json = headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|accept| accept.contains("application/json"))
        .unwrap_or(false);

    if wants_json {
        let body = serde_json::json!({"error": NOT_FOUND_MESSAGE});
        (StatusCode::NOT_FOUND, Json(body)).into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            [(header::CONTENT_TYPE, "text/plain")],
            NOT_FOUND_MESSAGE,
        )
            .into_response()
    }
}
