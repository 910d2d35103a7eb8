use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Chatlink service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum ChatlinkServiceError {
    #[error("user not found")]
    UserNotFound,
    #[error("code not found")]
    CodeNotFound,
    #[error("code expired")]
    CodeExpired,
    #[error("code already used")]
    CodeAlreadyUsed,
    #[error("invalid code format")]
    InvalidCodeFormat,
    #[error("invalid chat id")]
    InvalidChatId,
    #[error("too many code requests")]
    RateLimited,
    #[error("forbidden")]
    Forbidden,
    #[error("store unavailable")]
    Store(#[from] anyhow::Error),
}

impl ChatlinkServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::CodeNotFound => "CODE_NOT_FOUND",
            Self::CodeExpired => "CODE_EXPIRED",
            Self::CodeAlreadyUsed => "CODE_ALREADY_USED",
            Self::InvalidCodeFormat => "INVALID_CODE_FORMAT",
            Self::InvalidChatId => "INVALID_CHAT_ID",
            Self::RateLimited => "RATE_LIMITED",
            Self::Forbidden => "FORBIDDEN",
            Self::Store(_) => "STORE_ERROR",
        }
    }
}

impl IntoResponse for ChatlinkServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::UserNotFound | Self::CodeNotFound => StatusCode::NOT_FOUND,
            Self::CodeExpired => StatusCode::GONE,
            Self::CodeAlreadyUsed => StatusCode::CONFLICT,
            Self::InvalidCodeFormat | Self::InvalidChatId => StatusCode::BAD_REQUEST,
            Self::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Store(_) => StatusCode::SERVICE_UNAVAILABLE,
        };
        // Log store failures only; tower-http TraceLayer already records
        // method/uri/status for all requests. 4xx are expected client errors,
        // and logging them here would be noise. Store errors need the anyhow
        // chain logged so the root cause is traceable.
        if let Self::Store(ref e) = self {
            tracing::error!(error = %e, kind = "STORE_ERROR", "store unavailable");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
