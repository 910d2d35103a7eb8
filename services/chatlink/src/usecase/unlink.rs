use uuid::Uuid;

use crate::domain::repository::UserRepository;
use crate::error::ChatlinkServiceError;

/// Administrative reset of a user's chat link.
///
/// Idempotent: unlinking an already-unlinked user succeeds.
pub struct UnlinkChatUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> UnlinkChatUseCase<U> {
    pub async fn execute(&self, user_id: Uuid) -> Result<(), ChatlinkServiceError> {
        if !self.users.unlink_chat(user_id).await? {
            return Err(ChatlinkServiceError::UserNotFound);
        }
        Ok(())
    }
}
