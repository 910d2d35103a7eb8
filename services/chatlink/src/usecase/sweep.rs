use crate::domain::repository::VerificationCodeRepository;
use crate::error::ChatlinkServiceError;

/// Delete unused codes past their expiry. Housekeeping only: failures are
/// logged by the caller and retried on the next scheduled run.
pub struct SweepExpiredUseCase<C: VerificationCodeRepository> {
    pub codes: C,
}

impl<C: VerificationCodeRepository> SweepExpiredUseCase<C> {
    pub async fn execute(&self) -> Result<u64, ChatlinkServiceError> {
        self.codes.delete_expired().await
    }
}
