//! Integration tests for writes through a unit of work
//!
//! Tests that:
//! - Creates and updates persist only after commit
//! - Failed operations leave the store untouched
//! - Deleting a venue takes its shows with it

use booking_directory::db::entities::{show, venue};
use booking_directory::db::UnitOfWork;
use booking_directory::error::AppError;
use booking_directory::forms::ShowInput;
use booking_directory::services::{booking, directory};
use booking_directory::test_utils::*;
use chrono::{NaiveDate, NaiveDateTime};
use pretty_assertions::assert_eq;
use sea_orm::{EntityTrait, PaginatorTrait};

fn evening(day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2035, 4, day)
        .unwrap()
        .and_hms_opt(20, 0, 0)
        .unwrap()
}

#[tokio::test]
async fn test_create_venue_commits() {
    let db = setup_test_db().await;

    let uow = UnitOfWork::begin(&db, "venue.create").await.unwrap();
    let outcome = booking::create_venue(&uow, venue_input("The Musical Hop")).await;
    let created = uow.finish(outcome).await.unwrap();

    let stored = directory::get_venue(&db, created.id).await.unwrap();
    assert_eq!(stored, created);
    assert_eq!(
        stored.genre_list().unwrap(),
        vec!["Jazz".to_string(), "Reggae".to_string()]
    );
    assert!(stored.seeking_talent);
}

#[tokio::test]
async fn test_rollback_discards_writes() {
    let db = setup_test_db().await;

    let uow = UnitOfWork::begin(&db, "venue.create").await.unwrap();
    booking::create_venue(&uow, venue_input("The Musical Hop"))
        .await
        .unwrap();
    assert_eq!(uow.operation(), "venue.create");
    assert_eq!(venue::Entity::find().count(uow.conn()).await.unwrap(), 1);
    uow.rollback().await.unwrap();

    assert_eq!(venue::Entity::find().count(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn test_finish_rolls_back_on_error() {
    let db = setup_test_db().await;

    let uow = UnitOfWork::begin(&db, "show.create").await.unwrap();
    let outcome = async {
        let venue = booking::create_venue(&uow, venue_input("The Musical Hop")).await?;
        booking::create_show(
            &uow,
            ShowInput {
                venue_id: venue.id,
                artist_id: 404,
                start_time: evening(1),
            },
        )
        .await
    }
    .await;
    let err = uow.finish(outcome).await.unwrap_err();

    assert!(matches!(err, AppError::Validation(ref msg) if msg == "Artist 404 does not exist"));
    // The venue inserted earlier in the same unit is gone too
    assert_eq!(venue::Entity::find().count(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn test_update_with_same_input_is_stable() {
    let db = setup_test_db().await;
    let existing = create_test_artist(&db, "Guns N Petals").await;

    let mut snapshots = Vec::new();
    for _ in 0..2 {
        let uow = UnitOfWork::begin(&db, "artist.update").await.unwrap();
        let outcome = booking::update_artist(&uow, existing.id, artist_input("Guns N Petals")).await;
        snapshots.push(uow.finish(outcome).await.unwrap());
    }

    assert_eq!(snapshots[0], snapshots[1]);
    assert_eq!(snapshots[0].id, existing.id);
    assert_eq!(snapshots[0].genres, r#"["Rock n Roll"]"#);
}

#[tokio::test]
async fn test_update_overwrites_every_field() {
    let db = setup_test_db().await;
    let existing = create_test_venue(&db, "The Dueling Pianos Bar", "New York", "NY").await;

    let mut input = venue_input("The Dueling Pianos Bar");
    input.genres = Vec::new();
    input.seeking_talent = false;
    input.seeking_description = None;

    let uow = UnitOfWork::begin(&db, "venue.update").await.unwrap();
    let outcome = booking::update_venue(&uow, existing.id, input).await;
    let updated = uow.finish(outcome).await.unwrap();

    assert_eq!(updated.city, "San Francisco");
    assert_eq!(updated.genres, "[]");
    assert!(!updated.seeking_talent);
    assert_eq!(updated.seeking_description, None);
}

#[tokio::test]
async fn test_update_venue_round_trip_is_idempotent() {
    let db = setup_test_db().await;
    let existing = create_test_venue(&db, "The Dueling Pianos Bar", "New York", "NY").await;
    let now = evening(1);

    let mut input = venue_input("The Dueling Pianos Bar");
    input.genres = vec!["Classical".to_string(), "R&B".to_string()];
    input.website = Some("https://www.theduelingpianos.com".to_string());
    input.seeking_talent = false;
    input.seeking_description = None;

    for _ in 0..2 {
        let uow = UnitOfWork::begin(&db, "venue.update").await.unwrap();
        let outcome = booking::update_venue(&uow, existing.id, input.clone()).await;
        uow.finish(outcome).await.unwrap();

        let detail = directory::venue_detail(&db, existing.id, now).await.unwrap();
        assert_eq!(detail.id, existing.id);
        assert_eq!(detail.name, input.name);
        assert_eq!(detail.city, input.city);
        assert_eq!(detail.state, input.state);
        assert_eq!(detail.address, input.address);
        assert_eq!(detail.phone, input.phone);
        assert_eq!(detail.genres, input.genres);
        assert_eq!(detail.image_link, input.image_link);
        assert_eq!(detail.facebook_link, input.facebook_link);
        assert_eq!(detail.website, input.website);
        assert_eq!(detail.seeking_talent, input.seeking_talent);
        assert_eq!(detail.seeking_description, input.seeking_description);
    }
}

#[tokio::test]
async fn test_update_missing_venue_is_not_found() {
    let db = setup_test_db().await;

    let uow = UnitOfWork::begin(&db, "venue.update").await.unwrap();
    let outcome = booking::update_venue(&uow, 7, venue_input("Nowhere")).await;
    let err = uow.finish(outcome).await.unwrap_err();

    assert!(matches!(err, AppError::NotFound(ref msg) if msg == "Venue 7 not found"));
}

#[tokio::test]
async fn test_delete_venue_removes_its_shows() {
    let db = setup_test_db().await;
    let hop = create_test_venue(&db, "The Musical Hop", "San Francisco", "CA").await;
    let pianos = create_test_venue(&db, "The Dueling Pianos Bar", "New York", "NY").await;
    let artist = create_test_artist(&db, "The Wild Sax Band").await;
    for day in 1..=3 {
        create_test_show(&db, hop.id, artist.id, evening(day)).await;
    }
    create_test_show(&db, pianos.id, artist.id, evening(4)).await;

    let uow = UnitOfWork::begin(&db, "venue.delete").await.unwrap();
    let outcome = booking::delete_venue(&uow, hop.id).await;
    let deleted = uow.finish(outcome).await.unwrap();

    assert_eq!(deleted.venue_id, hop.id);
    assert_eq!(deleted.shows_removed, 3);
    assert!(matches!(
        directory::get_venue(&db, hop.id).await,
        Err(AppError::NotFound(_))
    ));

    // Other venues' shows and the artist are untouched
    let remaining = show::Entity::find().all(&db).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].venue_id, pianos.id);
    assert!(directory::get_artist(&db, artist.id).await.is_ok());
}

#[tokio::test]
async fn test_delete_missing_venue_is_not_found() {
    let db = setup_test_db().await;

    let uow = UnitOfWork::begin(&db, "venue.delete").await.unwrap();
    let outcome = booking::delete_venue(&uow, 1).await;
    let err = uow.finish(outcome).await.unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_create_show_with_missing_artist_changes_nothing() {
    let db = setup_test_db().await;
    let venue = create_test_venue(&db, "The Musical Hop", "San Francisco", "CA").await;
    let before = show::Entity::find().count(&db).await.unwrap();

    let uow = UnitOfWork::begin(&db, "show.create").await.unwrap();
    let outcome = booking::create_show(
        &uow,
        ShowInput {
            venue_id: venue.id,
            artist_id: 99,
            start_time: evening(1),
        },
    )
    .await;
    let err = uow.finish(outcome).await.unwrap_err();

    assert!(matches!(err, AppError::Validation(_)));
    assert_eq!(show::Entity::find().count(&db).await.unwrap(), before);
}

#[tokio::test]
async fn test_create_show() {
    let db = setup_test_db().await;
    let venue = create_test_venue(&db, "The Musical Hop", "San Francisco", "CA").await;
    let artist = create_test_artist(&db, "Guns N Petals").await;

    let uow = UnitOfWork::begin(&db, "show.create").await.unwrap();
    let outcome = booking::create_show(
        &uow,
        ShowInput {
            venue_id: venue.id,
            artist_id: artist.id,
            start_time: evening(1),
        },
    )
    .await;
    let show = uow.finish(outcome).await.unwrap();

    assert_eq!(show.venue_id, venue.id);
    assert_eq!(show.artist_id, artist.id);
    assert_eq!(show.start_time, evening(1));
}
