use chrono::{DateTime, Duration, Utc};
use rand::RngExt;
use uuid::Uuid;

use fuelpoint_domain::code::{CODE_ALPHABET, CODE_PREFIX, CODE_SUFFIX_LEN};

use crate::domain::repository::{UserRepository, VerificationCodeRepository};
use crate::domain::types::{
    CODE_TTL_SECS, MAX_CODES_PER_WINDOW, REISSUE_WINDOW_SECS, VerificationCode,
};
use crate::error::ChatlinkServiceError;

fn generate_code() -> String {
    let mut rng = rand::rng();
    let suffix: String = (0..CODE_SUFFIX_LEN)
        .map(|_| CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())] as char)
        .collect();
    format!("{CODE_PREFIX}{suffix}")
}

pub struct IssueCodeInput {
    pub user_id: Uuid,
}

#[derive(Debug)]
pub struct IssueCodeOutput {
    pub code: String,
    pub expires_at: DateTime<Utc>,
}

pub struct IssueCodeUseCase<U, C>
where
    U: UserRepository,
    C: VerificationCodeRepository,
{
    pub users: U,
    pub codes: C,
}

impl<U, C> IssueCodeUseCase<U, C>
where
    U: UserRepository,
    C: VerificationCodeRepository,
{
    pub async fn execute(
        &self,
        input: IssueCodeInput,
    ) -> Result<IssueCodeOutput, ChatlinkServiceError> {
        // 1. The user must exist and be active → 404 otherwise.
        let user = self
            .users
            .find_by_id(input.user_id)
            .await?
            .filter(|u| u.active)
            .ok_or(ChatlinkServiceError::UserNotFound)?;

        // 2. Rate limit over the reissue window → 429. Voided codes stay in
        //    the table as used rows, so this count survives reissues.
        let now = Utc::now();
        let window_start = now - Duration::seconds(REISSUE_WINDOW_SECS);
        let issued = self.codes.count_issued_since(user.id, window_start).await?;
        if issued >= MAX_CODES_PER_WINDOW {
            return Err(ChatlinkServiceError::RateLimited);
        }

        // 3. Void prior unused codes so at most one code is redeemable.
        self.codes.void_active(user.id).await?;

        // 4. Persist the fresh code.
        let code = VerificationCode {
            id: Uuid::new_v4(),
            user_id: user.id,
            code: generate_code(),
            expires_at: now + Duration::seconds(CODE_TTL_SECS),
            used_at: None,
            created_at: now,
        };
        self.codes.create(&code).await?;

        Ok(IssueCodeOutput {
            code: code.code,
            expires_at: code.expires_at,
        })
    }
}
