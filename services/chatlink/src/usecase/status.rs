use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::repository::{UserRepository, VerificationCodeRepository};
use crate::error::ChatlinkServiceError;

// ── GetChatStatus ────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct ChatStatus {
    pub linked: bool,
    pub chat_id: Option<String>,
    pub chat_verified_at: Option<DateTime<Utc>>,
    pub notifications_enabled: bool,
    /// Expiry of the currently redeemable code, if one is pending. Drives the
    /// countdown when the UI page is reloaded mid-flow.
    pub code_expires_at: Option<DateTime<Utc>>,
}

pub struct GetChatStatusUseCase<U, C>
where
    U: UserRepository,
    C: VerificationCodeRepository,
{
    pub users: U,
    pub codes: C,
}

impl<U, C> GetChatStatusUseCase<U, C>
where
    U: UserRepository,
    C: VerificationCodeRepository,
{
    pub async fn execute(&self, user_id: Uuid) -> Result<ChatStatus, ChatlinkServiceError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(ChatlinkServiceError::UserNotFound)?;

        let pending = self.codes.find_active(user.id).await?;

        Ok(ChatStatus {
            linked: user.chat_id.is_some(),
            chat_id: user.chat_id,
            chat_verified_at: user.chat_verified_at,
            notifications_enabled: user.notifications_enabled,
            code_expires_at: pending.map(|c| c.expires_at),
        })
    }
}

// ── SetNotifications ─────────────────────────────────────────────────────────

pub struct SetNotificationsUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> SetNotificationsUseCase<U> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        enabled: bool,
    ) -> Result<(), ChatlinkServiceError> {
        if !self.users.set_notifications_enabled(user_id, enabled).await? {
            return Err(ChatlinkServiceError::UserNotFound);
        }
        Ok(())
    }
}
