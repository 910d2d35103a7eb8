use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fuelpoint_core::identity::IdentityHeaders;
use fuelpoint_domain::user::UserRole;

use crate::error::ChatlinkServiceError;
use crate::state::AppState;
use crate::usecase::link::{LinkChatInput, LinkChatUseCase};
use crate::usecase::unlink::UnlinkChatUseCase;

// ── POST /chat/link ──────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LinkChatRequest {
    /// Message text the bot received; validated against the code format here.
    pub code: String,
    pub chat_id: String,
}

#[derive(Serialize)]
pub struct LinkChatResponse {
    pub id: String,
    pub name: String,
    pub email: String,
}

pub async fn link_chat(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<LinkChatRequest>,
) -> Result<Json<LinkChatResponse>, ChatlinkServiceError> {
    // Only the messaging bot's gateway identity may redeem codes.
    if identity.user_role < UserRole::Bot.as_u8() {
        return Err(ChatlinkServiceError::Forbidden);
    }
    let usecase = LinkChatUseCase {
        codes: state.code_repo(),
    };
    let user = usecase
        .execute(LinkChatInput {
            code: body.code,
            chat_id: body.chat_id,
        })
        .await?;
    Ok(Json(LinkChatResponse {
        id: user.id.to_string(),
        name: user.name,
        email: user.email,
    }))
}

// ── DELETE /users/{user_id}/chat ─────────────────────────────────────────────

pub async fn unlink_chat(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<StatusCode, ChatlinkServiceError> {
    if identity.user_role < UserRole::Manager.as_u8() {
        return Err(ChatlinkServiceError::Forbidden);
    }
    let usecase = UnlinkChatUseCase {
        users: state.user_repo(),
    };
    usecase.execute(user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
