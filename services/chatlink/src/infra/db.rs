use anyhow::Context as _;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel as _, PaginatorTrait, QueryFilter, TransactionTrait, Value,
    sea_query::Expr,
};
use uuid::Uuid;

use fuelpoint_chatlink_schema::{users, verification_codes};

use crate::domain::repository::{UserRepository, VerificationCodeRepository};
use crate::domain::types::{LinkedUser, RedeemOutcome, User, VerificationCode};
use crate::error::ChatlinkServiceError;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ChatlinkServiceError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn set_notifications_enabled(
        &self,
        id: Uuid,
        enabled: bool,
    ) -> Result<bool, ChatlinkServiceError> {
        let result = users::Entity::update_many()
            .filter(users::Column::Id.eq(id))
            .col_expr(users::Column::NotificationsEnabled, Expr::value(enabled))
            .col_expr(users::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(&self.db)
            .await
            .context("set notifications enabled")?;
        Ok(result.rows_affected > 0)
    }

    async fn unlink_chat(&self, id: Uuid) -> Result<bool, ChatlinkServiceError> {
        let existed = self
            .db
            .transaction::<_, bool, DbErr>(|txn| {
                Box::pin(async move {
                    let updated = users::Entity::update_many()
                        .filter(users::Column::Id.eq(id))
                        .col_expr(users::Column::ChatId, Expr::value(Value::String(None)))
                        .col_expr(
                            users::Column::ChatVerifiedAt,
                            Expr::value(Value::ChronoDateTimeUtc(None)),
                        )
                        .col_expr(users::Column::UpdatedAt, Expr::value(Utc::now()))
                        .exec(txn)
                        .await?;
                    if updated.rows_affected == 0 {
                        return Ok(false);
                    }

                    verification_codes::Entity::delete_many()
                        .filter(verification_codes::Column::UserId.eq(id))
                        .filter(verification_codes::Column::UsedAt.is_null())
                        .exec(txn)
                        .await?;
                    Ok(true)
                })
            })
            .await
            .context("unlink chat")?;
        Ok(existed)
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        name: model.name,
        email: model.email,
        role: model.role as u8,
        active: model.active,
        chat_id: model.chat_id,
        chat_verified_at: model.chat_verified_at,
        notifications_enabled: model.notifications_enabled,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── VerificationCode repository ──────────────────────────────────────────────

#[derive(Clone)]
pub struct DbVerificationCodeRepository {
    pub db: DatabaseConnection,
}

impl VerificationCodeRepository for DbVerificationCodeRepository {
    async fn count_issued_since(
        &self,
        user_id: Uuid,
        since: DateTime<Utc>,
    ) -> Result<u64, ChatlinkServiceError> {
        let count = verification_codes::Entity::find()
            .filter(verification_codes::Column::UserId.eq(user_id))
            .filter(verification_codes::Column::CreatedAt.gt(since))
            .count(&self.db)
            .await
            .context("count codes issued since")?;
        Ok(count)
    }

    async fn find_active(
        &self,
        user_id: Uuid,
    ) -> Result<Option<VerificationCode>, ChatlinkServiceError> {
        let now = Utc::now();
        let model = verification_codes::Entity::find()
            .filter(verification_codes::Column::UserId.eq(user_id))
            .filter(verification_codes::Column::UsedAt.is_null())
            .filter(verification_codes::Column::ExpiresAt.gt(now))
            .one(&self.db)
            .await
            .context("find active verification code")?;
        Ok(model.map(code_from_model))
    }

    async fn void_active(&self, user_id: Uuid) -> Result<u64, ChatlinkServiceError> {
        let now = Utc::now();
        let result = verification_codes::Entity::update_many()
            .filter(verification_codes::Column::UserId.eq(user_id))
            .filter(verification_codes::Column::UsedAt.is_null())
            .col_expr(verification_codes::Column::UsedAt, Expr::value(now))
            .exec(&self.db)
            .await
            .context("void active verification codes")?;
        Ok(result.rows_affected)
    }

    async fn create(&self, code: &VerificationCode) -> Result<(), ChatlinkServiceError> {
        verification_codes::ActiveModel {
            id: Set(code.id),
            user_id: Set(code.user_id),
            code: Set(code.code.clone()),
            expires_at: Set(code.expires_at),
            used_at: Set(None),
            created_at: Set(code.created_at),
        }
        .insert(&self.db)
        .await
        .context("create verification code")?;
        Ok(())
    }

    async fn redeem(
        &self,
        code: &str,
        chat_id: &str,
    ) -> Result<RedeemOutcome, ChatlinkServiceError> {
        let code = code.to_owned();
        let chat_id = chat_id.to_owned();
        let outcome = self
            .db
            .transaction::<_, RedeemOutcome, DbErr>(|txn| {
                Box::pin(async move {
                    let now = Utc::now();

                    // One conditional update; the affected-row count decides
                    // between concurrent redeemers of the same code.
                    let marked = verification_codes::Entity::update_many()
                        .filter(verification_codes::Column::Code.eq(code.clone()))
                        .filter(verification_codes::Column::UsedAt.is_null())
                        .filter(verification_codes::Column::ExpiresAt.gt(now))
                        .col_expr(verification_codes::Column::UsedAt, Expr::value(now))
                        .exec(txn)
                        .await?;

                    if marked.rows_affected == 0 {
                        let existing = verification_codes::Entity::find()
                            .filter(verification_codes::Column::Code.eq(code.clone()))
                            .one(txn)
                            .await?;
                        return Ok(match existing {
                            None => RedeemOutcome::NotFound,
                            Some(model) if model.expires_at <= now => RedeemOutcome::Expired,
                            Some(_) => RedeemOutcome::AlreadyUsed,
                        });
                    }

                    let model = verification_codes::Entity::find()
                        .filter(verification_codes::Column::Code.eq(code.clone()))
                        .one(txn)
                        .await?
                        .ok_or_else(|| {
                            DbErr::RecordNotFound("consumed verification code".to_owned())
                        })?;

                    let user = users::Entity::find_by_id(model.user_id)
                        .one(txn)
                        .await?
                        .ok_or_else(|| DbErr::RecordNotFound("code owner".to_owned()))?;

                    let linked = LinkedUser {
                        id: user.id,
                        name: user.name.clone(),
                        email: user.email.clone(),
                    };

                    let mut account = user.into_active_model();
                    account.chat_id = Set(Some(chat_id));
                    account.chat_verified_at = Set(Some(now));
                    account.notifications_enabled = Set(true);
                    account.updated_at = Set(now);
                    account.update(txn).await?;

                    Ok(RedeemOutcome::Linked(linked))
                })
            })
            .await
            .context("redeem verification code")?;
        Ok(outcome)
    }

    async fn delete_expired(&self) -> Result<u64, ChatlinkServiceError> {
        let now = Utc::now();
        let result = verification_codes::Entity::delete_many()
            .filter(verification_codes::Column::UsedAt.is_null())
            .filter(verification_codes::Column::ExpiresAt.lte(now))
            .exec(&self.db)
            .await
            .context("delete expired verification codes")?;
        Ok(result.rows_affected)
    }
}

fn code_from_model(model: verification_codes::Model) -> VerificationCode {
    VerificationCode {
        id: model.id,
        user_id: model.user_id,
        code: model.code,
        expires_at: model.expires_at,
        used_at: model.used_at,
        created_at: model.created_at,
    }
}
