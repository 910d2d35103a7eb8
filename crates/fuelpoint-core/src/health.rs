use axum::http::StatusCode;

/// Handler for `GET /healthz`: liveness check.
///
/// Readiness is service-specific (a store ping, usually); each service wires
/// its own `/readyz` handler.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}
