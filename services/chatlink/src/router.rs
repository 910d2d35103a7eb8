use axum::{
    Router,
    routing::{delete, get, patch, post},
};
use tower_http::trace::TraceLayer;

use fuelpoint_core::health::healthz;
use fuelpoint_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::{
    chat::{create_code, get_chat_status, update_chat},
    health::readyz,
    link::{link_chat, unlink_chat},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Chat link (self)
        .route("/users/@me/chat", get(get_chat_status))
        .route("/users/@me/chat", patch(update_chat))
        .route("/users/@me/chat/code", post(create_code))
        // Chat link (bot / admin)
        .route("/chat/link", post(link_chat))
        .route("/users/{user_id}/chat", delete(unlink_chat))
        .layer(propagate_request_id_layer())
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
