use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::{FieldErrors, ModelError};

pub const NAME_MAX: usize = 100;

/// A trade offered by contractors (plumbing, framing, ...).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fields {
    pub name: String,
    pub description: String,
}

impl Fields {
    pub fn check(&self) -> FieldErrors {
        let mut errs = FieldErrors::new();
        errs.check_not_blank("name", &self.name);
        errs.check_max_len("name", &self.name, NAME_MAX);
        errs
    }
}

pub async fn create<C: ConnectionTrait>(db: &C, fields: Fields) -> Result<Model, ModelError> {
    fields.check().into_result()?;
    let now = Utc::now().into();
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(fields.name),
        description: Set(fields.description),
        created_at: Set(now),
        updated_at: Set(now),
    };
    Ok(am.insert(db).await?)
}

pub async fn update<C: ConnectionTrait>(db: &C, existing: Model, fields: Fields) -> Result<Model, ModelError> {
    fields.check().into_result()?;
    let mut am: ActiveModel = existing.into();
    am.name = Set(fields.name);
    am.description = Set(fields.description);
    am.updated_at = Set(Utc::now().into());
    Ok(am.update(db).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_must_not_be_blank() {
        let f = Fields { name: "   ".into(), description: String::new() };
        assert!(f.check().contains("name"));
    }

    #[test]
    fn name_length_is_capped() {
        let f = Fields { name: "n".repeat(NAME_MAX + 1), description: String::new() };
        assert!(f.check().contains("name"));
        let f = Fields { name: "n".repeat(NAME_MAX), description: String::new() };
        assert!(f.check().is_empty());
    }
}
