use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::{FieldErrors, ModelError};
use crate::user;

pub const COMPANY_NAME_MAX: usize = 255;
pub const CONTACT_PHONE_MAX: usize = 20;
pub const LOCATION_MAX: usize = 255;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "client_profile")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub user_id: Uuid,
    pub company_name: String,
    pub contact_phone: String,
    pub location: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    User,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::User => Entity::belongs_to(user::Entity)
                .from(Column::UserId)
                .to(user::Column::Id)
                .into(),
        }
    }
}

impl Related<user::Entity> for Entity {
    fn to() -> RelationDef { Relation::User.def() }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fields {
    pub user_id: Uuid,
    pub company_name: String,
    pub contact_phone: String,
    pub location: String,
}

impl Fields {
    pub fn check(&self) -> FieldErrors {
        let mut errs = FieldErrors::new();
        errs.check_max_len("company_name", &self.company_name, COMPANY_NAME_MAX);
        errs.check_max_len("contact_phone", &self.contact_phone, CONTACT_PHONE_MAX);
        if !is_valid_phone(&self.contact_phone) {
            errs.add("contact_phone", "enter a valid phone number");
        }
        errs.check_max_len("location", &self.location, LOCATION_MAX);
        errs
    }
}

/// Blank, or digits with the usual `+ - ( )` and space separators.
pub fn is_valid_phone(phone: &str) -> bool {
    if phone.is_empty() {
        return true;
    }
    phone.chars().any(|c| c.is_ascii_digit())
        && phone.chars().all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '(' | ')' | ' '))
}

pub async fn create<C: ConnectionTrait>(db: &C, fields: Fields) -> Result<Model, ModelError> {
    fields.check().into_result()?;
    let now = Utc::now().into();
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(fields.user_id),
        company_name: Set(fields.company_name),
        contact_phone: Set(fields.contact_phone),
        location: Set(fields.location),
        created_at: Set(now),
        updated_at: Set(now),
    };
    Ok(am.insert(db).await?)
}

/// `user_id` is fixed at creation and left untouched here.
pub async fn update<C: ConnectionTrait>(db: &C, existing: Model, fields: Fields) -> Result<Model, ModelError> {
    fields.check().into_result()?;
    let mut am: ActiveModel = existing.into();
    am.company_name = Set(fields.company_name);
    am.contact_phone = Set(fields.contact_phone);
    am.location = Set(fields.location);
    am.updated_at = Set(Utc::now().into());
    Ok(am.update(db).await?)
}
