use sea_orm::entity::prelude::*;

/// Back-office account. `chat_id` is null until the owner links a messaging
/// chat through the verification workflow.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub role: i16,
    pub active: bool,
    pub chat_id: Option<String>,
    pub chat_verified_at: Option<chrono::DateTime<chrono::Utc>>,
    pub notifications_enabled: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::verification_codes::Entity")]
    VerificationCodes,
}

impl Related<super::verification_codes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VerificationCodes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
