#![allow(async_fn_in_trait)]

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::types::{RedeemOutcome, User, VerificationCode};
use crate::error::ChatlinkServiceError;

/// Repository for back-office accounts.
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ChatlinkServiceError>;

    /// Toggle notification delivery. Returns `false` if the user does not exist.
    async fn set_notifications_enabled(
        &self,
        id: Uuid,
        enabled: bool,
    ) -> Result<bool, ChatlinkServiceError>;

    /// Clear `chat_id` and `chat_verified_at` and delete the user's unused
    /// codes, all in one transaction. Returns `false` if the user does not
    /// exist. Already-unlinked users are a no-op success.
    async fn unlink_chat(&self, id: Uuid) -> Result<bool, ChatlinkServiceError>;
}

/// Repository for single-use verification codes.
pub trait VerificationCodeRepository: Send + Sync {
    /// Count codes created for a user since `since`, used or not.
    async fn count_issued_since(
        &self,
        user_id: Uuid,
        since: DateTime<Utc>,
    ) -> Result<u64, ChatlinkServiceError>;

    /// Find the user's currently redeemable (unused, unexpired) code.
    async fn find_active(
        &self,
        user_id: Uuid,
    ) -> Result<Option<VerificationCode>, ChatlinkServiceError>;

    /// Mark all unused codes for a user as used-but-void. Returns the number
    /// of codes voided.
    async fn void_active(&self, user_id: Uuid) -> Result<u64, ChatlinkServiceError>;

    /// Insert a new verification code.
    async fn create(&self, code: &VerificationCode) -> Result<(), ChatlinkServiceError>;

    /// Consume a code and attach `chat_id` to its owner, atomically.
    ///
    /// The consumption must be a single conditional update (affected-row
    /// count decides between concurrent redeemers), and the user update must
    /// commit in the same transaction.
    async fn redeem(
        &self,
        code: &str,
        chat_id: &str,
    ) -> Result<RedeemOutcome, ChatlinkServiceError>;

    /// Delete unused codes past their expiry. Returns the number deleted.
    /// Used codes are retained for audit.
    async fn delete_expired(&self) -> Result<u64, ChatlinkServiceError>;
}
