//! Wire representations ("serializers") of persisted rows.
//!
//! Field order follows the published schema. Nested `user` and `services`
//! values are read-only: they are rendered from the referenced rows and never
//! accepted on write.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use models::{client_profile, contractor_profile, service, user};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRepr {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<user::Model> for UserRepr {
    fn from(m: user::Model) -> Self {
        Self { id: m.id, username: m.username, email: m.email, first_name: m.first_name, last_name: m.last_name }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRepr {
    pub id: Uuid,
    pub name: String,
    pub description: String,
}

impl From<service::Model> for ServiceRepr {
    fn from(m: service::Model) -> Self {
        Self { id: m.id, name: m.name, description: m.description }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContractorProfileRepr {
    pub id: Uuid,
    pub user: UserRepr,
    pub bio: String,
    pub location: String,
    pub hourly_rate: f64,
    pub services: Vec<ServiceRepr>,
    pub portfolio_link: Option<String>,
}

impl ContractorProfileRepr {
    pub fn from_parts(profile: contractor_profile::Model, owner: user::Model, services: Vec<service::Model>) -> Self {
        Self {
            id: profile.id,
            user: owner.into(),
            bio: profile.bio,
            location: profile.location,
            hourly_rate: profile.hourly_rate,
            services: services.into_iter().map(ServiceRepr::from).collect(),
            portfolio_link: profile.portfolio_link,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientProfileRepr {
    pub id: Uuid,
    pub user: UserRepr,
    pub company_name: String,
    pub contact_phone: String,
    pub location: String,
}

impl ClientProfileRepr {
    pub fn from_parts(profile: client_profile::Model, owner: user::Model) -> Self {
        Self {
            id: profile.id,
            user: owner.into(),
            company_name: profile.company_name,
            contact_phone: profile.contact_phone,
            location: profile.location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn owner() -> user::Model {
        let now = Utc::now().into();
        user::Model {
            id: Uuid::new_v4(),
            username: "mason".into(),
            email: "mason@example.com".into(),
            first_name: "Mason".into(),
            last_name: "Reyes".into(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn contractor_fields_in_schema_order() {
        let now = Utc::now().into();
        let u = owner();
        let p = contractor_profile::Model {
            id: Uuid::new_v4(),
            user_id: u.id,
            bio: "Stone work".into(),
            location: "Tulsa".into(),
            hourly_rate: 55.0,
            portfolio_link: None,
            created_at: now,
            updated_at: now,
        };
        let repr = ContractorProfileRepr::from_parts(p, u.clone(), vec![]);
        let v = serde_json::to_value(&repr).unwrap();
        let keys: Vec<&str> = v.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys.len(), 7);
        assert_eq!(v["user"]["username"], "mason");
        assert_eq!(v["portfolio_link"], serde_json::Value::Null);
        assert!(v.get("user_id").is_none());
        assert!(v.get("created_at").is_none());
    }

    #[test]
    fn user_repr_hides_timestamps() {
        let v = serde_json::to_value(UserRepr::from(owner())).unwrap();
        assert_eq!(v.as_object().unwrap().len(), 5);
        assert!(v.get("updated_at").is_none());
    }
}
