use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Back-office account fields the linking workflow reads and writes.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: u8,
    pub active: bool,
    pub chat_id: Option<String>,
    pub chat_verified_at: Option<DateTime<Utc>>,
    pub notifications_enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Single-use code binding a link request to a user account.
#[derive(Debug, Clone)]
pub struct VerificationCode {
    pub id: Uuid,
    pub user_id: Uuid,
    pub code: String,
    pub expires_at: DateTime<Utc>,
    pub used_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl VerificationCode {
    pub fn is_redeemable(&self) -> bool {
        self.used_at.is_none() && self.expires_at > Utc::now()
    }
}

/// User summary returned to the bot after a successful link, for its
/// confirmation message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

/// Result of the atomic redeem operation.
#[derive(Debug, Clone)]
pub enum RedeemOutcome {
    Linked(LinkedUser),
    NotFound,
    Expired,
    AlreadyUsed,
}

/// Verification code time-to-live in seconds.
pub const CODE_TTL_SECS: i64 = 300;

/// Sliding window for the issue rate limit, in seconds.
pub const REISSUE_WINDOW_SECS: i64 = 60;

/// Maximum codes a user may request within one [`REISSUE_WINDOW_SECS`] window.
pub const MAX_CODES_PER_WINDOW: u64 = 3;
