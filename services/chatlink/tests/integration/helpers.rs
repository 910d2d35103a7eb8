use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use fuelpoint_chatlink::domain::repository::{UserRepository, VerificationCodeRepository};
use fuelpoint_chatlink::domain::types::{
    CODE_TTL_SECS, LinkedUser, RedeemOutcome, User, VerificationCode,
};
use fuelpoint_chatlink::error::ChatlinkServiceError;

// ── In-memory store ──────────────────────────────────────────────────────────

#[derive(Default)]
struct StoreState {
    users: Vec<User>,
    codes: Vec<VerificationCode>,
}

/// In-memory fake of the persistence layer, shared across clones.
///
/// Implements both repository traits over one `Mutex`, so `redeem` is atomic
/// the same way the real store's transaction is.
#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<StoreState>>,
}

impl MemoryStore {
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            state: Arc::new(Mutex::new(StoreState {
                users,
                codes: vec![],
            })),
        }
    }

    pub fn insert_code(&self, code: VerificationCode) {
        self.state.lock().unwrap().codes.push(code);
    }

    pub fn codes(&self) -> Vec<VerificationCode> {
        self.state.lock().unwrap().codes.clone()
    }

    pub fn user(&self, id: Uuid) -> Option<User> {
        self.state
            .lock()
            .unwrap()
            .users
            .iter()
            .find(|u| u.id == id)
            .cloned()
    }
}

impl UserRepository for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ChatlinkServiceError> {
        Ok(self.user(id))
    }

    async fn set_notifications_enabled(
        &self,
        id: Uuid,
        enabled: bool,
    ) -> Result<bool, ChatlinkServiceError> {
        let mut state = self.state.lock().unwrap();
        match state.users.iter_mut().find(|u| u.id == id) {
            Some(user) => {
                user.notifications_enabled = enabled;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn unlink_chat(&self, id: Uuid) -> Result<bool, ChatlinkServiceError> {
        let mut state = self.state.lock().unwrap();
        let Some(user) = state.users.iter_mut().find(|u| u.id == id) else {
            return Ok(false);
        };
        user.chat_id = None;
        user.chat_verified_at = None;
        state
            .codes
            .retain(|c| c.user_id != id || c.used_at.is_some());
        Ok(true)
    }
}

impl VerificationCodeRepository for MemoryStore {
    async fn count_issued_since(
        &self,
        user_id: Uuid,
        since: DateTime<Utc>,
    ) -> Result<u64, ChatlinkServiceError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .codes
            .iter()
            .filter(|c| c.user_id == user_id && c.created_at > since)
            .count() as u64)
    }

    async fn find_active(
        &self,
        user_id: Uuid,
    ) -> Result<Option<VerificationCode>, ChatlinkServiceError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .codes
            .iter()
            .find(|c| c.user_id == user_id && c.is_redeemable())
            .cloned())
    }

    async fn void_active(&self, user_id: Uuid) -> Result<u64, ChatlinkServiceError> {
        let now = Utc::now();
        let mut state = self.state.lock().unwrap();
        let mut voided = 0;
        for code in state
            .codes
            .iter_mut()
            .filter(|c| c.user_id == user_id && c.used_at.is_none())
        {
            code.used_at = Some(now);
            voided += 1;
        }
        Ok(voided)
    }

    async fn create(&self, code: &VerificationCode) -> Result<(), ChatlinkServiceError> {
        self.state.lock().unwrap().codes.push(code.clone());
        Ok(())
    }

    async fn redeem(
        &self,
        code: &str,
        chat_id: &str,
    ) -> Result<RedeemOutcome, ChatlinkServiceError> {
        // Single lock for the whole check-and-consume, mirroring the real
        // store's single transaction.
        let mut state = self.state.lock().unwrap();
        let now = Utc::now();

        let Some(idx) = state.codes.iter().position(|c| c.code == code) else {
            return Ok(RedeemOutcome::NotFound);
        };
        if state.codes[idx].expires_at <= now {
            return Ok(RedeemOutcome::Expired);
        }
        if state.codes[idx].used_at.is_some() {
            return Ok(RedeemOutcome::AlreadyUsed);
        }

        state.codes[idx].used_at = Some(now);
        let user_id = state.codes[idx].user_id;
        let user = state
            .users
            .iter_mut()
            .find(|u| u.id == user_id)
            .expect("code owner must exist in fixture");
        user.chat_id = Some(chat_id.to_owned());
        user.chat_verified_at = Some(now);
        user.notifications_enabled = true;

        Ok(RedeemOutcome::Linked(LinkedUser {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
        }))
    }

    async fn delete_expired(&self) -> Result<u64, ChatlinkServiceError> {
        let now = Utc::now();
        let mut state = self.state.lock().unwrap();
        let before = state.codes.len();
        state
            .codes
            .retain(|c| c.used_at.is_some() || c.expires_at > now);
        Ok((before - state.codes.len()) as u64)
    }
}

// ── Test fixture helpers ─────────────────────────────────────────────────────

pub fn test_user() -> User {
    let now = Utc::now();
    User {
        id: Uuid::parse_str("00000000-0000-0000-0000-000000000001").unwrap(),
        name: "azs-12 operator".to_owned(),
        email: "operator@example.com".to_owned(),
        role: 0,
        active: true,
        chat_id: None,
        chat_verified_at: None,
        notifications_enabled: true,
        created_at: now,
        updated_at: now,
    }
}

pub fn test_code(user_id: Uuid, code: &str) -> VerificationCode {
    VerificationCode {
        id: Uuid::new_v4(),
        user_id,
        code: code.to_owned(),
        expires_at: Utc::now() + Duration::seconds(CODE_TTL_SECS),
        used_at: None,
        created_at: Utc::now(),
    }
}

pub fn expired_code(user_id: Uuid, code: &str) -> VerificationCode {
    VerificationCode {
        expires_at: Utc::now() - Duration::seconds(1),
        created_at: Utc::now() - Duration::seconds(CODE_TTL_SECS + 1),
        ..test_code(user_id, code)
    }
}
