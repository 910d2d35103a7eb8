use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use fuelpoint_core::identity::IdentityHeaders;

use crate::error::ChatlinkServiceError;
use crate::state::AppState;
use crate::usecase::issue_code::{IssueCodeInput, IssueCodeUseCase};
use crate::usecase::status::{GetChatStatusUseCase, SetNotificationsUseCase};

// ── POST /users/@me/chat/code ────────────────────────────────────────────────

#[derive(Serialize)]
pub struct IssueCodeResponse {
    pub code: String,
    #[serde(serialize_with = "fuelpoint_core::serde::to_rfc3339_ms")]
    pub expires_at: chrono::DateTime<chrono::Utc>,
}

pub async fn create_code(
    identity: IdentityHeaders,
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<IssueCodeResponse>), ChatlinkServiceError> {
    let usecase = IssueCodeUseCase {
        users: state.user_repo(),
        codes: state.code_repo(),
    };
    let issued = usecase
        .execute(IssueCodeInput {
            user_id: identity.user_id,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(IssueCodeResponse {
            code: issued.code,
            expires_at: issued.expires_at,
        }),
    ))
}

// ── GET /users/@me/chat ──────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct ChatStatusResponse {
    pub linked: bool,
    pub chat_id: Option<String>,
    #[serde(serialize_with = "fuelpoint_core::serde::to_rfc3339_ms_opt")]
    pub chat_verified_at: Option<chrono::DateTime<chrono::Utc>>,
    pub notifications_enabled: bool,
    #[serde(serialize_with = "fuelpoint_core::serde::to_rfc3339_ms_opt")]
    pub code_expires_at: Option<chrono::DateTime<chrono::Utc>>,
}

pub async fn get_chat_status(
    identity: IdentityHeaders,
    State(state): State<AppState>,
) -> Result<Json<ChatStatusResponse>, ChatlinkServiceError> {
    let usecase = GetChatStatusUseCase {
        users: state.user_repo(),
        codes: state.code_repo(),
    };
    let status = usecase.execute(identity.user_id).await?;
    Ok(Json(ChatStatusResponse {
        linked: status.linked,
        chat_id: status.chat_id,
        chat_verified_at: status.chat_verified_at,
        notifications_enabled: status.notifications_enabled,
        code_expires_at: status.code_expires_at,
    }))
}

// ── PATCH /users/@me/chat ────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateChatRequest {
    pub notifications_enabled: bool,
}

pub async fn update_chat(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<UpdateChatRequest>,
) -> Result<StatusCode, ChatlinkServiceError> {
    let usecase = SetNotificationsUseCase {
        users: state.user_repo(),
    };
    usecase
        .execute(identity.user_id, body.notifications_enabled)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
