use anyhow::Result;
use platform_db::{DbError, EmployeeRecord, EmployeeStore, SeaOrmEmployeeStore};
use products_hr::{Employee, NewEmployee};
use suite_tests::{PgFixture, docker_available};
use testcontainers::clients::Cli;

fn record(first: &str, last: &str, email: &str) -> EmployeeRecord {
    EmployeeRecord {
        id: None,
        first_name: first.into(),
        last_name: last.into(),
        email: email.into(),
    }
}

#[tokio::test]
async fn store_round_trips_against_postgres() -> Result<()> {
    if !docker_available() {
        return Ok(());
    }
    let docker = Cli::default();
    let pg = PgFixture::start(&docker).await?;
    let store = SeaOrmEmployeeStore::new(pg.pool.clone());

    assert!(store.find_all().await?.is_empty());

    let ankesh = store.save(record("Ankesh", "Tiwari", "ank01@gmail.com")).await?;
    let akt = store.save(record("akt", "Tiwari", "akt@gmail.com")).await?;
    assert!(ankesh.id > 0);
    assert!(akt.id > ankesh.id);
    assert_eq!(store.find_all().await?.len(), 2);

    assert_eq!(store.find_by_id(ankesh.id).await?, Some(ankesh.clone()));
    assert_eq!(
        store.find_by_email("akt@gmail.com").await?.map(|row| row.id),
        Some(akt.id)
    );
    assert_eq!(
        store.find_by_name("Ankesh", "Tiwari").await?.map(|row| row.id),
        Some(ankesh.id)
    );

    let mut changed = EmployeeRecord::from(ankesh.clone());
    changed.email = "ram@gmail.com".into();
    let updated = store.save(changed).await?;
    assert_eq!(updated.id, ankesh.id);
    assert_eq!(updated.email, "ram@gmail.com");

    store.delete_by_id(akt.id).await?;
    assert!(store.find_by_id(akt.id).await?.is_none());
    store.delete_by_id(akt.id).await?;
    Ok(())
}

#[tokio::test]
async fn unique_email_constraint_backs_the_service_check() -> Result<()> {
    if !docker_available() {
        return Ok(());
    }
    let docker = Cli::default();
    let pg = PgFixture::start(&docker).await?;
    let store = SeaOrmEmployeeStore::new(pg.pool.clone());

    store.save(record("Ankesh", "Tiwari", "ank01@gmail.com")).await?;
    let err = store
        .save(record("Other", "Person", "ank01@gmail.com"))
        .await
        .expect_err("second row with the same email must be rejected");
    assert!(matches!(err, DbError::Query(_)));
    assert_eq!(store.find_all().await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn update_with_unknown_id_leaves_the_sequence_usable() -> Result<()> {
    if !docker_available() {
        return Ok(());
    }
    let docker = Cli::default();
    let pg = PgFixture::start(&docker).await?;
    let service = pg.service();

    let stray = service
        .update(Employee {
            id: 1,
            first_name: "Ram".into(),
            last_name: "Kumar".into(),
            email: "ram@gmail.com".into(),
        })
        .await?;
    let created = service
        .create(NewEmployee::new("Ankesh", "Tiwari", "ankesh@gmail.com"))
        .await?;

    assert_ne!(created.id, stray.id);
    assert_eq!(service.list_all().await?.len(), 2);
    Ok(())
}
