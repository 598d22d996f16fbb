//! Integration tests for the HTML routes
//!
//! Drives the full router, including the fallback, through:
//! - Listing and detail pages
//! - Form submissions and their redirects
//! - Failure pages for missing records and rejected input

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use sea_orm::{EntityTrait, PaginatorTrait};
use tower::util::ServiceExt;

use booking_directory::db::entities::{artist, show, venue};
use booking_directory::handlers;
use booking_directory::state::AppState;
use booking_directory::test_utils::*;

fn create_test_router(state: &AppState) -> Router {
    handlers::router(state.clone())
}

async fn body_text(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_form(uri: &str, pairs: &[(String, String)]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(encode_form(pairs)))
        .unwrap()
}

fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
}

fn with_field(mut pairs: Vec<(String, String)>, name: &str, value: &str) -> Vec<(String, String)> {
    for pair in pairs.iter_mut() {
        if pair.0 == name {
            pair.1 = value.to_string();
        }
    }
    pairs
}

#[tokio::test]
async fn test_home_page() {
    let state = setup_test_app_state().await;
    let response = create_test_router(&state).oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Booking Directory"));
}

#[tokio::test]
async fn test_unknown_route_renders_not_found_page() {
    let state = setup_test_app_state().await;
    let response = create_test_router(&state)
        .oneshot(get("/nowhere"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("Not Found"));
}

#[tokio::test]
async fn test_venues_page_lists_areas() {
    let state = setup_test_app_state().await;
    create_test_venue(&state.db, "The Musical Hop", "San Francisco", "CA").await;
    create_test_venue(&state.db, "The Dueling Pianos Bar", "New York", "NY").await;

    let response = create_test_router(&state)
        .oneshot(get("/venues"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("San Francisco, CA"));
    assert!(body.contains("New York, NY"));
    assert!(body.contains("/venues/1"));
}

#[tokio::test]
async fn test_create_venue_redirects_to_detail() {
    let state = setup_test_app_state().await;

    let response = create_test_router(&state)
        .oneshot(post_form("/venues/create", &venue_form("The Musical Hop")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/venues/1");

    let stored = venue::Entity::find_by_id(1).one(&state.db).await.unwrap().unwrap();
    assert_eq!(stored.name, "The Musical Hop");
    assert_eq!(stored.genres, r#"["Jazz","Reggae"]"#);
    assert_eq!(stored.image_link, None);
    assert!(stored.seeking_talent);
}

#[tokio::test]
async fn test_create_venue_rejects_malformed_flag() {
    let state = setup_test_app_state().await;
    let form = with_field(venue_form("The Musical Hop"), "seeking_talent", "Ture");

    let response = create_test_router(&state)
        .oneshot(post_form("/venues/create", &form))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_text(response).await;
    assert!(body.contains("An error occurred. Venue The Musical Hop could not be listed."));
    assert_eq!(venue::Entity::find().count(&state.db).await.unwrap(), 0);
}

#[tokio::test]
async fn test_venue_detail_page() {
    let state = setup_test_app_state().await;
    let venue = create_test_venue(&state.db, "The Musical Hop", "San Francisco", "CA").await;
    let artist = create_test_artist(&state.db, "Guns N Petals").await;
    let start = NaiveDate::from_ymd_opt(2019, 5, 21)
        .unwrap()
        .and_hms_opt(21, 30, 0)
        .unwrap();
    create_test_show(&state.db, venue.id, artist.id, start).await;

    let response = create_test_router(&state)
        .oneshot(get("/venues/1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("The Musical Hop"));
    assert!(body.contains("Guns N Petals"));
    assert!(body.contains("05/21/2019, 21:30:00"));
}

#[tokio::test]
async fn test_venue_detail_not_found() {
    let state = setup_test_app_state().await;

    let response = create_test_router(&state)
        .oneshot(get("/venues/999"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("Venue 999 not found"));
}

#[tokio::test]
async fn test_search_venues_page() {
    let state = setup_test_app_state().await;
    create_test_venue(&state.db, "The Musical Hop", "San Francisco", "CA").await;
    create_test_venue(&state.db, "The Dueling Pianos Bar", "New York", "NY").await;

    let response = create_test_router(&state)
        .oneshot(post_form(
            "/venues/search",
            &[("search_term".to_string(), "hop".to_string())],
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("The Musical Hop"));
    assert!(!body.contains("The Dueling Pianos Bar"));
}

#[tokio::test]
async fn test_search_artists_without_matches() {
    let state = setup_test_app_state().await;
    create_test_artist(&state.db, "Guns N Petals").await;

    let response = create_test_router(&state)
        .oneshot(post_form(
            "/artists/search",
            &[("search_term".to_string(), "zzz".to_string())],
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("No artists matched your search."));
}

#[tokio::test]
async fn test_edit_venue_form_is_prefilled() {
    let state = setup_test_app_state().await;
    create_test_venue(&state.db, "The Musical Hop", "San Francisco", "CA").await;

    let response = create_test_router(&state)
        .oneshot(get("/venues/1/edit"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains(r#"value="The Musical Hop""#));
    assert!(body.contains(r#"action="/venues/1/edit""#));
}

#[tokio::test]
async fn test_delete_venue_redirects_home() {
    let state = setup_test_app_state().await;
    let venue = create_test_venue(&state.db, "The Musical Hop", "San Francisco", "CA").await;
    let artist = create_test_artist(&state.db, "Guns N Petals").await;
    let start = NaiveDate::from_ymd_opt(2035, 4, 1)
        .unwrap()
        .and_hms_opt(20, 0, 0)
        .unwrap();
    create_test_show(&state.db, venue.id, artist.id, start).await;

    let response = create_test_router(&state)
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/venues/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
    assert_eq!(venue::Entity::find().count(&state.db).await.unwrap(), 0);
    assert_eq!(show::Entity::find().count(&state.db).await.unwrap(), 0);
}

#[tokio::test]
async fn test_delete_missing_venue_is_not_found() {
    let state = setup_test_app_state().await;

    let response = create_test_router(&state)
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/venues/5")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_edit_artist_submission() {
    let state = setup_test_app_state().await;
    create_test_artist(&state.db, "Guns N Petals").await;
    let form = with_field(artist_form("Guns N Petals"), "seeking_venue", "yes");

    let response = create_test_router(&state)
        .oneshot(post_form("/artists/1/edit", &form))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/artists/1");

    let stored = artist::Entity::find_by_id(1).one(&state.db).await.unwrap().unwrap();
    assert!(stored.seeking_venue);
}

#[tokio::test]
async fn test_edit_missing_artist_is_not_found() {
    let state = setup_test_app_state().await;

    let response = create_test_router(&state)
        .oneshot(post_form("/artists/9/edit", &artist_form("Guns N Petals")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_artist_rejects_bad_link() {
    let state = setup_test_app_state().await;
    let form = with_field(artist_form("Guns N Petals"), "website", "gunsnpetals");

    let response = create_test_router(&state)
        .oneshot(post_form("/artists/create", &form))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body_text(response)
        .await
        .contains("An error occurred. Artist Guns N Petals could not be listed."));
    assert_eq!(artist::Entity::find().count(&state.db).await.unwrap(), 0);
}

#[tokio::test]
async fn test_create_show_redirects_to_listing() {
    let state = setup_test_app_state().await;
    create_test_venue(&state.db, "The Musical Hop", "San Francisco", "CA").await;
    create_test_artist(&state.db, "Guns N Petals").await;
    let form = vec![
        ("venue_id".to_string(), "1".to_string()),
        ("artist_id".to_string(), "1".to_string()),
        ("start_time".to_string(), "2035-04-01T20:00".to_string()),
    ];

    let response = create_test_router(&state)
        .oneshot(post_form("/shows/create", &form))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/shows");

    let listing = create_test_router(&state)
        .oneshot(get("/shows"))
        .await
        .unwrap();
    assert!(body_text(listing).await.contains("04/01/2035, 20:00:00"));
}

#[tokio::test]
async fn test_create_show_with_missing_artist() {
    let state = setup_test_app_state().await;
    create_test_venue(&state.db, "The Musical Hop", "San Francisco", "CA").await;
    let form = vec![
        ("venue_id".to_string(), "1".to_string()),
        ("artist_id".to_string(), "3".to_string()),
        ("start_time".to_string(), "2035-04-01 20:00:00".to_string()),
    ];

    let response = create_test_router(&state)
        .oneshot(post_form("/shows/create", &form))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_text(response).await;
    assert!(body.contains("An error occurred. Show could not be listed."));
    assert!(body.contains("Artist 3 does not exist"));
    assert_eq!(show::Entity::find().count(&state.db).await.unwrap(), 0);
}

#[tokio::test]
async fn test_show_form_lists_choices() {
    let state = setup_test_app_state().await;
    create_test_venue(&state.db, "The Musical Hop", "San Francisco", "CA").await;
    create_test_artist(&state.db, "Guns N Petals").await;

    let response = create_test_router(&state)
        .oneshot(get("/shows/create"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("The Musical Hop"));
    assert!(body.contains("Guns N Petals"));
}

#[tokio::test]
async fn test_create_venue_rejects_over_long_city() {
    let state = setup_test_app_state().await;
    let form = with_field(venue_form("The Musical Hop"), "city", &"x".repeat(121));

    let response = create_test_router(&state)
        .oneshot(post_form("/venues/create", &form))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body_text(response)
        .await
        .contains("city must be at most 120 characters"));
    assert_eq!(venue::Entity::find().count(&state.db).await.unwrap(), 0);
}

#[tokio::test]
async fn test_malformed_id_renders_not_found_page() {
    let state = setup_test_app_state().await;

    for uri in ["/venues/abc", "/artists/abc/edit"] {
        let response = create_test_router(&state).oneshot(get(uri)).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{}", uri);
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(content_type.starts_with("text/html"), "{}", content_type);
        assert!(body_text(response).await.contains("No record at this address"));
    }
}
