use fuelpoint_domain::code::extract_code;

use crate::domain::repository::VerificationCodeRepository;
use crate::domain::types::{LinkedUser, RedeemOutcome};
use crate::error::ChatlinkServiceError;

pub struct LinkChatInput {
    /// Raw code text as typed into the bot chat.
    pub code: String,
    /// Chat identifier reported by the bot for the sender.
    pub chat_id: String,
}

pub struct LinkChatUseCase<C: VerificationCodeRepository> {
    pub codes: C,
}

impl<C: VerificationCodeRepository> LinkChatUseCase<C> {
    pub async fn execute(&self, input: LinkChatInput) -> Result<LinkedUser, ChatlinkServiceError> {
        let code =
            extract_code(&input.code).ok_or(ChatlinkServiceError::InvalidCodeFormat)?;

        let chat_id = input.chat_id.trim();
        if chat_id.is_empty() {
            return Err(ChatlinkServiceError::InvalidChatId);
        }

        // Lookup, validity check, and consume collapse into one atomic store
        // operation; concurrent redemptions of the same code race on the
        // conditional update inside, never here.
        match self.codes.redeem(&code, chat_id).await? {
            RedeemOutcome::Linked(user) => Ok(user),
            RedeemOutcome::NotFound => Err(ChatlinkServiceError::CodeNotFound),
            RedeemOutcome::Expired => Err(ChatlinkServiceError::CodeExpired),
            RedeemOutcome::AlreadyUsed => Err(ChatlinkServiceError::CodeAlreadyUsed),
        }
    }
}
