//! Join table linking contractor profiles to the services they offer.
use std::collections::HashSet;

use sea_orm::{entity::prelude::*, ConnectionTrait, QueryFilter, Set};
use uuid::Uuid;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::{contractor_profile, service};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contractor_profile_service")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub contractor_profile_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub service_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    ContractorProfile,
    Service,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::ContractorProfile => Entity::belongs_to(contractor_profile::Entity)
                .from(Column::ContractorProfileId)
                .to(contractor_profile::Column::Id)
                .into(),
            Relation::Service => Entity::belongs_to(service::Entity)
                .from(Column::ServiceId)
                .to(service::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Replace the full service set of a profile. Duplicate ids collapse.
pub async fn replace_for_profile<C: ConnectionTrait>(db: &C, profile_id: Uuid, service_ids: &[Uuid]) -> Result<(), ModelError> {
    Entity::delete_many()
        .filter(Column::ContractorProfileId.eq(profile_id))
        .exec(db)
        .await?;

    let mut seen = HashSet::new();
    let rows: Vec<ActiveModel> = service_ids
        .iter()
        .filter(|id| seen.insert(**id))
        .map(|sid| ActiveModel { contractor_profile_id: Set(profile_id), service_id: Set(*sid) })
        .collect();
    if rows.is_empty() {
        return Ok(());
    }
    Entity::insert_many(rows).exec_without_returning(db).await?;
    Ok(())
}

pub async fn delete_for_profile<C: ConnectionTrait>(db: &C, profile_id: Uuid) -> Result<u64, ModelError> {
    let res = Entity::delete_many()
        .filter(Column::ContractorProfileId.eq(profile_id))
        .exec(db)
        .await?;
    Ok(res.rows_affected)
}

pub async fn delete_for_service<C: ConnectionTrait>(db: &C, service_id: Uuid) -> Result<u64, ModelError> {
    let res = Entity::delete_many()
        .filter(Column::ServiceId.eq(service_id))
        .exec(db)
        .await?;
    Ok(res.rows_affected)
}
