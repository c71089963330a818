use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::{FieldErrors, ModelError};
use crate::{contractor_profile_service, service, user};

pub const LOCATION_MAX: usize = 255;
pub const PORTFOLIO_LINK_MAX: usize = 200;
/// Largest rate representable with 8 digits, 2 of them fractional.
pub const HOURLY_RATE_MAX: f64 = 999_999.99;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contractor_profile")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub user_id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub bio: String,
    pub location: String,
    #[sea_orm(column_type = "Double")]
    pub hourly_rate: f64,
    pub portfolio_link: Option<String>,
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

impl Related<service::Entity> for Entity {
    fn to() -> RelationDef { contractor_profile_service::Relation::Service.def() }

    fn via() -> Option<RelationDef> {
        Some(contractor_profile_service::Relation::ContractorProfile.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq)]
pub struct Fields {
    pub user_id: Uuid,
    pub bio: String,
    pub location: String,
    pub hourly_rate: f64,
    pub portfolio_link: Option<String>,
}

impl Fields {
    pub fn check(&self) -> FieldErrors {
        let mut errs = FieldErrors::new();
        errs.check_max_len("location", &self.location, LOCATION_MAX);
        if let Some(msg) = hourly_rate_problem(self.hourly_rate) {
            errs.add("hourly_rate", msg);
        }
        if let Some(link) = self.portfolio_link.as_deref().filter(|l| !l.is_empty()) {
            errs.check_max_len("portfolio_link", link, PORTFOLIO_LINK_MAX);
            if !is_valid_url(link) {
                errs.add("portfolio_link", "enter a valid http(s) URL");
            }
        }
        errs
    }
}

pub fn hourly_rate_problem(rate: f64) -> Option<&'static str> {
    if !rate.is_finite() {
        return Some("a valid number is required");
    }
    if rate < 0.0 {
        return Some("ensure this value is greater than or equal to 0");
    }
    if rate > HOURLY_RATE_MAX {
        return Some("ensure there are no more than 8 digits in total");
    }
    let cents = rate * 100.0;
    if (cents.round() - cents).abs() > 1e-6 {
        return Some("ensure there are no more than 2 decimal places");
    }
    None
}

pub fn is_valid_url(link: &str) -> bool {
    if link.contains(char::is_whitespace) {
        return false;
    }
    let Some(rest) = link.strip_prefix("https://").or_else(|| link.strip_prefix("http://")) else {
        return false;
    };
    let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
    !host.is_empty()
}

pub async fn create<C: ConnectionTrait>(db: &C, fields: Fields) -> Result<Model, ModelError> {
    fields.check().into_result()?;
    let now = Utc::now().into();
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(fields.user_id),
        bio: Set(fields.bio),
        location: Set(fields.location),
        hourly_rate: Set(fields.hourly_rate),
        portfolio_link: Set(fields.portfolio_link),
        created_at: Set(now),
        updated_at: Set(now),
    };
    Ok(am.insert(db).await?)
}

/// `user_id` is fixed at creation and left untouched here.
pub async fn update<C: ConnectionTrait>(db: &C, existing: Model, fields: Fields) -> Result<Model, ModelError> {
    fields.check().into_result()?;
    let mut am: ActiveModel = existing.into();
    am.bio = Set(fields.bio);
    am.location = Set(fields.location);
    am.hourly_rate = Set(fields.hourly_rate);
    am.portfolio_link = Set(fields.portfolio_link);
    am.updated_at = Set(Utc::now().into());
    Ok(am.update(db).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> Fields {
        Fields {
            user_id: Uuid::new_v4(),
            bio: "Framing and drywall".into(),
            location: "Austin, TX".into(),
            hourly_rate: 65.5,
            portfolio_link: Some("https://example.com/work".into()),
        }
    }

    #[test]
    fn accepts_valid_profile() {
        assert!(fields().check().is_empty());
    }

    #[test]
    fn hourly_rate_rules() {
        assert_eq!(hourly_rate_problem(0.0), None);
        assert_eq!(hourly_rate_problem(12.34), None);
        assert_eq!(hourly_rate_problem(HOURLY_RATE_MAX), None);
        assert!(hourly_rate_problem(-1.0).is_some());
        assert!(hourly_rate_problem(12.345).is_some());
        assert!(hourly_rate_problem(1_000_000.0).is_some());
        assert!(hourly_rate_problem(f64::NAN).is_some());
    }

    #[test]
    fn portfolio_link_must_be_http() {
        let mut f = fields();
        f.portfolio_link = Some("ftp://example.com".into());
        assert!(f.check().contains("portfolio_link"));
        f.portfolio_link = Some("https://".into());
        assert!(f.check().contains("portfolio_link"));
        f.portfolio_link = Some(String::new());
        assert!(f.check().is_empty());
        f.portfolio_link = None;
        assert!(f.check().is_empty());
    }

    #[test]
    fn collects_every_problem() {
        let mut f = fields();
        f.location = "l".repeat(LOCATION_MAX + 1);
        f.hourly_rate = -3.0;
        f.portfolio_link = Some("nope".into());
        let errs = f.check();
        assert!(errs.contains("location"));
        assert!(errs.contains("hourly_rate"));
        assert!(errs.contains("portfolio_link"));
    }
}
