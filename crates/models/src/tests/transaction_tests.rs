use super::{setup_test_db, unique};
use crate::{contractor_profile, contractor_profile_service, service, user};
use sea_orm::{EntityTrait, TransactionTrait};
use anyhow::Result;

/// Test basic transaction commit
#[tokio::test]
async fn test_transaction_commit() -> Result<()> {
    let db = setup_test_db().await?;

    let txn = db.begin().await?;
    let created = service::create(&txn, service::Fields { name: "Masonry".into(), description: String::new() }).await?;
    txn.commit().await?;

    let found = service::Entity::find_by_id(created.id).one(&db).await?;
    assert_eq!(found.map(|s| s.name), Some("Masonry".to_string()));
    Ok(())
}

/// Test transaction rollback
#[tokio::test]
async fn test_transaction_rollback() -> Result<()> {
    let db = setup_test_db().await?;
    let u = user::create(&db, user::Fields {
        username: unique("tx"),
        email: String::new(),
        first_name: String::new(),
        last_name: String::new(),
    })
    .await?;
    let s = service::create(&db, service::Fields { name: "Tiling".into(), description: String::new() }).await?;

    let txn = db.begin().await?;
    let profile = contractor_profile::create(&txn, contractor_profile::Fields {
        user_id: u.id,
        bio: String::new(),
        location: String::new(),
        hourly_rate: 40.0,
        portfolio_link: None,
    })
    .await?;
    contractor_profile_service::replace_for_profile(&txn, profile.id, &[s.id]).await?;
    txn.rollback().await?;

    assert!(contractor_profile::Entity::find_by_id(profile.id).one(&db).await?.is_none());
    assert!(contractor_profile_service::Entity::find().all(&db).await?.is_empty());
    Ok(())
}
