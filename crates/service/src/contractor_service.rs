use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use sea_orm::sea_query::{Condition, Expr, Func, IntoColumnRef, LikeExpr, Query, SimpleExpr};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use serde::Deserialize;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use models::{contractor_profile, contractor_profile_service, errors::FieldErrors, service, user};
use crate::errors::ServiceError;
use crate::input::{decimal, nullable, optional, required, trimmed};
use crate::pagination::{fetch_page, Page, Pagination};
use crate::representation::ContractorProfileRepr;
use crate::resource::Resource;

pub(crate) const OWNER_IMMUTABLE: &str = "the owning user cannot be changed";

/// Write payload for contractor profiles. Nested `user`/`services` keys are
/// not part of it and are dropped on deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContractorProfileInput {
    #[serde(default)]
    pub user_id: Option<Uuid>,
    #[serde(default, deserialize_with = "trimmed")]
    pub bio: Option<String>,
    #[serde(default, deserialize_with = "trimmed")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "decimal")]
    pub hourly_rate: Option<f64>,
    #[serde(default, deserialize_with = "nullable")]
    pub portfolio_link: Option<Option<String>>,
    #[serde(default)]
    pub service_ids: Option<Vec<Uuid>>,
}

/// Discovery filters for the contractor list. Blank strings are ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContractorProfileFilter {
    /// Only profiles offering this service.
    pub service: Option<Uuid>,
    /// Case-insensitive substring of `location`.
    pub location: Option<String>,
    /// Case-insensitive substring of the bio, the owner's username or names, or an offered service name.
    pub search: Option<String>,
}

impl ContractorProfileFilter {
    fn condition(&self) -> Condition {
        let mut cond = Condition::all();
        if let Some(id) = self.service {
            cond = cond.add(contractor_profile::Column::Id.in_subquery(
                Query::select()
                    .column(contractor_profile_service::Column::ContractorProfileId)
                    .from(contractor_profile_service::Entity)
                    .and_where(contractor_profile_service::Column::ServiceId.eq(id))
                    .to_owned(),
            ));
        }
        if let Some(pattern) = like_pattern(self.location.as_deref()) {
            cond = cond.add(lower_like((contractor_profile::Entity, contractor_profile::Column::Location), &pattern));
        }
        if let Some(pattern) = like_pattern(self.search.as_deref()) {
            let owners = Query::select()
                .column(user::Column::Id)
                .from(user::Entity)
                .cond_where(
                    Condition::any()
                        .add(lower_like((user::Entity, user::Column::Username), &pattern))
                        .add(lower_like((user::Entity, user::Column::FirstName), &pattern))
                        .add(lower_like((user::Entity, user::Column::LastName), &pattern)),
                )
                .to_owned();
            let named = Query::select()
                .column(service::Column::Id)
                .from(service::Entity)
                .and_where(lower_like((service::Entity, service::Column::Name), &pattern))
                .to_owned();
            let offering = Query::select()
                .column(contractor_profile_service::Column::ContractorProfileId)
                .from(contractor_profile_service::Entity)
                .and_where(contractor_profile_service::Column::ServiceId.in_subquery(named))
                .to_owned();
            cond = cond.add(
                Condition::any()
                    .add(lower_like((contractor_profile::Entity, contractor_profile::Column::Bio), &pattern))
                    .add(contractor_profile::Column::UserId.in_subquery(owners))
                    .add(contractor_profile::Column::Id.in_subquery(offering)),
            );
        }
        cond
    }
}

/// `%needle%` in lower case with LIKE wildcards escaped; `None` for blank input.
fn like_pattern(needle: Option<&str>) -> Option<String> {
    let needle = needle.map(str::trim).filter(|n| !n.is_empty())?;
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.to_lowercase().chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    Some(pattern)
}

fn lower_like(col: impl IntoColumnRef, pattern: &str) -> SimpleExpr {
    Expr::expr(Func::lower(Expr::col(col))).like(LikeExpr::new(pattern).escape('\\'))
}

/// Checks shared by both profile kinds: the owner exists and the profile is new
/// for it, or the owner is unchanged on update.
pub(crate) async fn check_owner<C, F>(
    db: &C,
    errs: &mut FieldErrors,
    supplied: Option<Uuid>,
    existing_owner: Option<Uuid>,
    has_profile: F,
) -> Result<Option<Uuid>, ServiceError>
where
    C: ConnectionTrait,
    F: std::future::Future<Output = Result<bool, ServiceError>>,
{
    if let Some(owner) = existing_owner {
        if supplied.is_some_and(|id| id != owner) {
            errs.add("user_id", OWNER_IMMUTABLE);
        }
        return Ok(Some(owner));
    }

    let Some(user_id) = required(errs, "user_id", supplied, None) else {
        return Ok(None);
    };
    if user::Entity::find_by_id(user_id).one(db).await?.is_none() {
        errs.add("user_id", format!("invalid pk \"{user_id}\" - object does not exist"));
    } else if has_profile.await? {
        errs.add("user_id", "this user already has a profile of this kind");
    }
    Ok(Some(user_id))
}

async fn has_contractor_profile<C: ConnectionTrait>(db: &C, user_id: Option<Uuid>) -> Result<bool, ServiceError> {
    let Some(user_id) = user_id else { return Ok(false) };
    let found = contractor_profile::Entity::find()
        .filter(contractor_profile::Column::UserId.eq(user_id))
        .one(db)
        .await?;
    Ok(found.is_some())
}

async fn check_services<C: ConnectionTrait>(db: &C, errs: &mut FieldErrors, ids: &[Uuid]) -> Result<(), ServiceError> {
    if ids.is_empty() {
        return Ok(());
    }
    let known: HashSet<Uuid> = service::Entity::find()
        .filter(service::Column::Id.is_in(ids.iter().copied()))
        .all(db)
        .await?
        .into_iter()
        .map(|s| s.id)
        .collect();
    for id in ids.iter().filter(|id| !known.contains(id)) {
        errs.add("service_ids", format!("invalid pk \"{id}\" - object does not exist"));
    }
    Ok(())
}

/// Resolved profile columns plus the new service set (`None` leaves it unchanged).
async fn resolve_fields<C: ConnectionTrait>(
    db: &C,
    input: ContractorProfileInput,
    existing: Option<&contractor_profile::Model>,
    partial: bool,
) -> Result<(contractor_profile::Fields, Option<Vec<Uuid>>), ServiceError> {
    let current = existing.filter(|_| partial);
    let mut errs = FieldErrors::new();

    let owner = check_owner(
        db,
        &mut errs,
        input.user_id,
        existing.map(|m| m.user_id),
        has_contractor_profile(db, input.user_id),
    )
    .await?;
    let hourly_rate = required(&mut errs, "hourly_rate", input.hourly_rate, current.map(|m| m.hourly_rate));
    let portfolio_link = match input.portfolio_link {
        Some(link) => link,
        None => current.and_then(|m| m.portfolio_link.clone()),
    }
    .map(|l| l.trim().to_string())
    .filter(|l| !l.is_empty());

    let fields = contractor_profile::Fields {
        user_id: owner.unwrap_or_default(),
        bio: optional(input.bio, current.map(|m| m.bio.clone())),
        location: optional(input.location, current.map(|m| m.location.clone())),
        hourly_rate: hourly_rate.unwrap_or_default(),
        portfolio_link,
    };
    errs.merge_new_fields(fields.check());

    let services = match input.service_ids {
        Some(ids) => Some(ids),
        None if partial => None,
        None => Some(Vec::new()),
    };
    if let Some(ids) = services.as_deref() {
        check_services(db, &mut errs, ids).await?;
    }

    errs.into_result()?;
    Ok((fields, services))
}

async fn hydrate<C: ConnectionTrait>(db: &C, profile: contractor_profile::Model) -> Result<ContractorProfileRepr, ServiceError> {
    let mut page = hydrate_many(db, vec![profile]).await?;
    page.pop().ok_or_else(|| ServiceError::not_found("contractor_profile"))
}

/// Attach owners and offered services to a batch of profiles with one query per relation.
async fn hydrate_many<C: ConnectionTrait>(
    db: &C,
    profiles: Vec<contractor_profile::Model>,
) -> Result<Vec<ContractorProfileRepr>, ServiceError> {
    if profiles.is_empty() {
        return Ok(Vec::new());
    }
    let profile_ids: Vec<Uuid> = profiles.iter().map(|p| p.id).collect();
    let owner_ids: Vec<Uuid> = profiles.iter().map(|p| p.user_id).collect();

    let mut owners: HashMap<Uuid, user::Model> = user::Entity::find()
        .filter(user::Column::Id.is_in(owner_ids))
        .all(db)
        .await?
        .into_iter()
        .map(|u| (u.id, u))
        .collect();

    let links = contractor_profile_service::Entity::find()
        .filter(contractor_profile_service::Column::ContractorProfileId.is_in(profile_ids))
        .all(db)
        .await?;
    let services: HashMap<Uuid, service::Model> = if links.is_empty() {
        HashMap::new()
    } else {
        service::Entity::find()
            .filter(service::Column::Id.is_in(links.iter().map(|l| l.service_id)))
            .order_by_asc(service::Column::Name)
            .all(db)
            .await?
            .into_iter()
            .map(|s| (s.id, s))
            .collect()
    };
    let mut offered: HashMap<Uuid, Vec<service::Model>> = HashMap::new();
    for link in links {
        if let Some(s) = services.get(&link.service_id) {
            offered.entry(link.contractor_profile_id).or_default().push(s.clone());
        }
    }

    let mut out = Vec::with_capacity(profiles.len());
    for profile in profiles {
        let Some(owner) = owners.remove(&profile.user_id) else {
            warn!(profile = %profile.id, user = %profile.user_id, "contractor profile without owner");
            return Err(ServiceError::Db(format!("owner {} of contractor profile {} is missing", profile.user_id, profile.id)));
        };
        let mut services = offered.remove(&profile.id).unwrap_or_default();
        services.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        out.push(ContractorProfileRepr::from_parts(profile, owner, services));
    }
    Ok(out)
}

#[instrument(skip_all)]
pub async fn create_contractor_profile(db: &DatabaseConnection, input: ContractorProfileInput) -> Result<ContractorProfileRepr, ServiceError> {
    let txn = db.begin().await?;
    let (fields, services) = resolve_fields(&txn, input, None, false).await?;
    let created = contractor_profile::create(&txn, fields).await?;
    contractor_profile_service::replace_for_profile(&txn, created.id, services.as_deref().unwrap_or_default()).await?;
    let repr = hydrate(&txn, created).await?;
    txn.commit().await?;
    info!(id = %repr.id, user = %repr.user.id, services = repr.services.len(), "created contractor profile");
    Ok(repr)
}

pub async fn get_contractor_profile(db: &DatabaseConnection, id: Uuid) -> Result<ContractorProfileRepr, ServiceError> {
    let found = contractor_profile::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("contractor_profile"))?;
    hydrate(db, found).await
}

pub async fn list_contractor_profiles(
    db: &DatabaseConnection,
    opts: Pagination,
    filter: ContractorProfileFilter,
) -> Result<Page<ContractorProfileRepr>, ServiceError> {
    let select = contractor_profile::Entity::find()
        .filter(filter.condition())
        .order_by_asc(contractor_profile::Column::CreatedAt)
        .order_by_asc(contractor_profile::Column::Id);
    let page = fetch_page(db, select, opts).await?;
    let results = hydrate_many(db, page.results).await?;
    Ok(Page { count: page.count, page: page.page, per_page: page.per_page, results })
}

#[instrument(skip(db, input))]
pub async fn update_contractor_profile(
    db: &DatabaseConnection,
    id: Uuid,
    input: ContractorProfileInput,
    partial: bool,
) -> Result<ContractorProfileRepr, ServiceError> {
    let txn = db.begin().await?;
    let existing = contractor_profile::Entity::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or_else(|| ServiceError::not_found("contractor_profile"))?;
    let (fields, services) = resolve_fields(&txn, input, Some(&existing), partial).await?;
    let updated = contractor_profile::update(&txn, existing, fields).await?;
    if let Some(ids) = services.as_deref() {
        contractor_profile_service::replace_for_profile(&txn, updated.id, ids).await?;
    }
    let repr = hydrate(&txn, updated).await?;
    txn.commit().await?;
    info!(%id, services = repr.services.len(), "updated contractor profile");
    Ok(repr)
}

#[instrument(skip(db))]
pub async fn delete_contractor_profile(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
    let txn = db.begin().await?;
    contractor_profile_service::delete_for_profile(&txn, id).await?;
    let res = contractor_profile::Entity::delete_by_id(id).exec(&txn).await?;
    if res.rows_affected == 0 {
        txn.rollback().await?;
        return Err(ServiceError::not_found("contractor_profile"));
    }
    txn.commit().await?;
    info!(%id, "deleted contractor profile");
    Ok(())
}

#[derive(Clone)]
pub struct ContractorProfileResource {
    db: DatabaseConnection,
}

impl ContractorProfileResource {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl Resource for ContractorProfileResource {
    const NAME: &'static str = "contractor_profile";
    type Input = ContractorProfileInput;
    type Repr = ContractorProfileRepr;
    type Filter = ContractorProfileFilter;

    async fn list(&self, page: Pagination, filter: ContractorProfileFilter) -> Result<Page<ContractorProfileRepr>, ServiceError> {
        list_contractor_profiles(&self.db, page, filter).await
    }

    async fn retrieve(&self, id: Uuid) -> Result<ContractorProfileRepr, ServiceError> {
        get_contractor_profile(&self.db, id).await
    }

    async fn create(&self, input: ContractorProfileInput) -> Result<ContractorProfileRepr, ServiceError> {
        create_contractor_profile(&self.db, input).await
    }

    async fn update(&self, id: Uuid, input: ContractorProfileInput, partial: bool) -> Result<ContractorProfileRepr, ServiceError> {
        update_contractor_profile(&self.db, id, input, partial).await
    }

    async fn destroy(&self, id: Uuid) -> Result<(), ServiceError> { delete_contractor_profile(&self.db, id).await }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog_service::{create_service, delete_service, ServiceInput};
    use crate::test_support::{get_db, unique};
    use crate::user_service::{create_user, delete_user, update_user, UserInput};
    use crate::representation::{ServiceRepr, UserRepr};

    async fn owner(db: &DatabaseConnection) -> Result<UserRepr, ServiceError> {
        let name = unique("pro");
        create_user(db, UserInput { username: Some(name.clone()), email: Some(format!("{name}@example.com")), ..Default::default() }).await
    }

    async fn offering(db: &DatabaseConnection, name: &str) -> Result<ServiceRepr, ServiceError> {
        create_service(db, ServiceInput { name: Some(name.to_string()), description: None }).await
    }

    fn input(user_id: Uuid, service_ids: Vec<Uuid>) -> ContractorProfileInput {
        ContractorProfileInput {
            user_id: Some(user_id),
            bio: Some("Twenty years of carpentry".into()),
            location: Some("Denver, CO".into()),
            hourly_rate: Some(72.5),
            portfolio_link: Some(Some("https://portfolio.example.com".into())),
            service_ids: Some(service_ids),
        }
    }

    #[tokio::test]
    async fn create_and_retrieve_nests_user_and_services() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let u = owner(&db).await?;
        let framing = offering(&db, "Framing").await?;
        let decks = offering(&db, "Decks").await?;

        let p = create_contractor_profile(&db, input(u.id, vec![framing.id, decks.id, framing.id])).await?;
        assert_eq!(p.user, u);
        assert_eq!(p.hourly_rate, 72.5);
        assert_eq!(p.portfolio_link.as_deref(), Some("https://portfolio.example.com"));
        let names: Vec<&str> = p.services.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Decks", "Framing"]);

        assert_eq!(get_contractor_profile(&db, p.id).await?, p);

        // nested user reflects later edits of the owner
        update_user(&db, u.id, UserInput { first_name: Some("Rae".into()), ..Default::default() }, true).await?;
        assert_eq!(get_contractor_profile(&db, p.id).await?.user.first_name, "Rae");
        Ok(())
    }

    #[tokio::test]
    async fn patch_keeps_services_and_put_clears_them() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let u = owner(&db).await?;
        let tile = offering(&db, "Tile").await?;
        let p = create_contractor_profile(&db, input(u.id, vec![tile.id])).await?;

        let patched = update_contractor_profile(
            &db,
            p.id,
            ContractorProfileInput { hourly_rate: Some(80.0), ..Default::default() },
            true,
        )
        .await?;
        assert_eq!(patched.hourly_rate, 80.0);
        assert_eq!(patched.services.len(), 1);
        assert_eq!(patched.bio, p.bio);

        let replaced = update_contractor_profile(
            &db,
            p.id,
            ContractorProfileInput { hourly_rate: Some(90.0), ..Default::default() },
            false,
        )
        .await?;
        assert!(replaced.services.is_empty());
        assert_eq!(replaced.bio, "");
        assert_eq!(replaced.portfolio_link, None);
        assert_eq!(replaced.user.id, u.id);

        let cleared = update_contractor_profile(
            &db,
            p.id,
            ContractorProfileInput { portfolio_link: Some(None), ..Default::default() },
            true,
        )
        .await?;
        assert_eq!(cleared.portfolio_link, None);
        Ok(())
    }

    #[tokio::test]
    async fn reports_every_invalid_field() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let err = create_contractor_profile(
            &db,
            ContractorProfileInput {
                user_id: Some(Uuid::new_v4()),
                hourly_rate: Some(-5.0),
                portfolio_link: Some(Some("not a url".into())),
                service_ids: Some(vec![Uuid::new_v4()]),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
        let fields = err.field_errors().expect("validation error");
        for f in ["user_id", "hourly_rate", "portfolio_link", "service_ids"] {
            assert!(fields.contains(f), "missing {f}");
        }

        let err = create_contractor_profile(&db, ContractorProfileInput::default()).await.unwrap_err();
        let fields = err.field_errors().expect("validation error");
        assert!(fields.contains("user_id"));
        assert!(fields.contains("hourly_rate"));
        Ok(())
    }

    #[tokio::test]
    async fn owner_is_unique_and_immutable() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let u = owner(&db).await?;
        let other = owner(&db).await?;
        let p = create_contractor_profile(&db, input(u.id, vec![])).await?;

        let err = create_contractor_profile(&db, input(u.id, vec![])).await.unwrap_err();
        assert!(err.field_errors().is_some_and(|f| f.contains("user_id")));

        let err = update_contractor_profile(
            &db,
            p.id,
            ContractorProfileInput { user_id: Some(other.id), ..Default::default() },
            true,
        )
        .await
        .unwrap_err();
        assert_eq!(err.field_errors().and_then(|f| f.get("user_id")).map(|m| m[0].as_str()), Some(OWNER_IMMUTABLE));
        Ok(())
    }

    #[tokio::test]
    async fn deletes_cascade_from_user_and_service() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let u = owner(&db).await?;
        let siding = offering(&db, "Siding").await?;
        let gutters = offering(&db, "Gutters").await?;
        let p = create_contractor_profile(&db, input(u.id, vec![siding.id, gutters.id])).await?;

        delete_service(&db, siding.id).await?;
        let after = get_contractor_profile(&db, p.id).await?;
        assert_eq!(after.services, vec![gutters.clone()]);

        delete_user(&db, u.id).await?;
        assert!(matches!(get_contractor_profile(&db, p.id).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(delete_contractor_profile(&db, p.id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn list_hydrates_each_profile() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let masonry = offering(&db, "Masonry").await?;
        let mut created = Vec::new();
        for _ in 0..3 {
            let u = owner(&db).await?;
            created.push(create_contractor_profile(&db, input(u.id, vec![masonry.id])).await?);
        }
        delete_contractor_profile(&db, created[1].id).await?;

        let page = list_contractor_profiles(&db, Pagination::default(), ContractorProfileFilter::default()).await?;
        assert_eq!(page.count, 2);
        assert_eq!(page.results, vec![created[0].clone(), created[2].clone()]);
        Ok(())
    }

    async fn listed(db: &DatabaseConnection, filter: ContractorProfileFilter) -> Result<(u64, Vec<Uuid>), ServiceError> {
        let page = list_contractor_profiles(db, Pagination::default(), filter).await?;
        Ok((page.count, page.results.into_iter().map(|p| p.id).collect()))
    }

    #[tokio::test]
    async fn list_filters_by_service_location_and_search() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let roofing = offering(&db, "Roofing").await?;
        let plumbing = offering(&db, "Plumbing").await?;

        let u1 = create_user(&db, UserInput { username: Some(unique("ridge")), first_name: Some("Marta".into()), ..Default::default() }).await?;
        let u2 = owner(&db).await?;
        let u3 = owner(&db).await?;
        let roofer = create_contractor_profile(
            &db,
            ContractorProfileInput { location: Some("Austin, TX".into()), bio: Some("Metal roofs".into()), ..input(u1.id, vec![roofing.id]) },
        )
        .await?;
        let plumber = create_contractor_profile(
            &db,
            ContractorProfileInput { location: Some("Dallas, TX".into()), bio: Some("Leak repair".into()), ..input(u2.id, vec![plumbing.id]) },
        )
        .await?;
        let both = create_contractor_profile(
            &db,
            ContractorProfileInput { location: Some("austin".into()), bio: Some("Handyman".into()), ..input(u3.id, vec![roofing.id, plumbing.id]) },
        )
        .await?;

        let by_service = ContractorProfileFilter { service: Some(plumbing.id), ..Default::default() };
        assert_eq!(listed(&db, by_service).await?, (2, vec![plumber.id, both.id]));

        let by_location = ContractorProfileFilter { location: Some(" AUSTIN ".into()), ..Default::default() };
        assert_eq!(listed(&db, by_location).await?, (2, vec![roofer.id, both.id]));

        // owner name, bio and offered service names are all searched
        let by_name = ContractorProfileFilter { search: Some("marta".into()), ..Default::default() };
        assert_eq!(listed(&db, by_name).await?, (1, vec![roofer.id]));
        let by_bio = ContractorProfileFilter { search: Some("LEAK".into()), ..Default::default() };
        assert_eq!(listed(&db, by_bio).await?, (1, vec![plumber.id]));
        let by_offering = ContractorProfileFilter { search: Some("roof".into()), ..Default::default() };
        assert_eq!(listed(&db, by_offering).await?, (2, vec![roofer.id, both.id]));

        let combined = ContractorProfileFilter {
            service: Some(roofing.id),
            location: Some("austin".into()),
            search: Some("handy".into()),
        };
        assert_eq!(listed(&db, combined).await?, (1, vec![both.id]));

        let blank = ContractorProfileFilter { location: Some("  ".into()), search: Some(String::new()), ..Default::default() };
        assert_eq!(listed(&db, blank).await?.0, 3);

        // wildcards are matched literally
        let wildcard = ContractorProfileFilter { search: Some("%".into()), ..Default::default() };
        assert_eq!(listed(&db, wildcard).await?, (0, vec![]));
        Ok(())
    }

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern(Some(" 50%_Off ")).as_deref(), Some("%50\\%\\_off%"));
        assert_eq!(like_pattern(Some("   ")), None);
        assert_eq!(like_pattern(None), None);
    }
}
