use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::{FieldErrors, ModelError};
use crate::{client_profile, contractor_profile};

pub const USERNAME_MAX: usize = 150;
pub const EMAIL_MAX: usize = 254;
pub const NAME_MAX: usize = 150;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    ContractorProfile,
    ClientProfile,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::ContractorProfile => Entity::has_one(contractor_profile::Entity).into(),
            Relation::ClientProfile => Entity::has_one(client_profile::Entity).into(),
        }
    }
}

impl Related<contractor_profile::Entity> for Entity {
    fn to() -> RelationDef { Relation::ContractorProfile.def() }
}

impl Related<client_profile::Entity> for Entity {
    fn to() -> RelationDef { Relation::ClientProfile.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Writable user columns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fields {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl Fields {
    pub fn check(&self) -> FieldErrors {
        let mut errs = FieldErrors::new();
        if self.username.is_empty() {
            errs.add("username", crate::errors::BLANK);
        } else {
            errs.check_max_len("username", &self.username, USERNAME_MAX);
            if !is_valid_username(&self.username) {
                errs.add("username", "enter a valid username; only letters, numbers and @/./+/-/_ are allowed");
            }
        }
        if !self.email.is_empty() {
            errs.check_max_len("email", &self.email, EMAIL_MAX);
            if !is_valid_email(&self.email) {
                errs.add("email", "enter a valid email address");
            }
        }
        errs.check_max_len("first_name", &self.first_name, NAME_MAX);
        errs.check_max_len("last_name", &self.last_name, NAME_MAX);
        errs
    }
}

pub fn is_valid_username(username: &str) -> bool {
    username.chars().all(|c| c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_'))
}

pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.rsplit_once('@') else { return false };
    if local.is_empty() || local.contains('@') || email.contains(char::is_whitespace) {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|l| !l.is_empty())
}

pub async fn create<C: ConnectionTrait>(db: &C, fields: Fields) -> Result<Model, ModelError> {
    fields.check().into_result()?;
    let now = Utc::now().into();
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        username: Set(fields.username),
        email: Set(fields.email),
        first_name: Set(fields.first_name),
        last_name: Set(fields.last_name),
        created_at: Set(now),
        updated_at: Set(now),
    };
    Ok(am.insert(db).await?)
}

pub async fn update<C: ConnectionTrait>(db: &C, existing: Model, fields: Fields) -> Result<Model, ModelError> {
    fields.check().into_result()?;
    let mut am: ActiveModel = existing.into();
    am.username = Set(fields.username);
    am.email = Set(fields.email);
    am.first_name = Set(fields.first_name);
    am.last_name = Set(fields.last_name);
    am.updated_at = Set(Utc::now().into());
    Ok(am.update(db).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(username: &str, email: &str) -> Fields {
        Fields { username: username.into(), email: email.into(), first_name: String::new(), last_name: String::new() }
    }

    #[test]
    fn accepts_typical_user() {
        assert!(fields("jane.doe+build", "jane@example.com").check().is_empty());
    }

    #[test]
    fn blank_email_is_allowed() {
        assert!(fields("jane", "").check().is_empty());
    }

    #[test]
    fn rejects_bad_username_chars() {
        let errs = fields("jane doe", "").check();
        assert!(errs.contains("username"));
    }

    #[test]
    fn rejects_blank_username() {
        let errs = fields("", "").check();
        assert_eq!(errs.get("username").map(|m| m.len()), Some(1));
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@@b.co"));
        assert!(!is_valid_email("a b@c.co"));
        assert!(!is_valid_email("a@b..co"));
    }

    #[test]
    fn long_names_are_rejected() {
        let mut f = fields("jane", "");
        f.first_name = "x".repeat(NAME_MAX + 1);
        assert!(f.check().contains("first_name"));
    }
}
