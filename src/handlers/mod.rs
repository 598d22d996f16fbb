pub mod api;
pub mod artists;
pub mod health;
pub mod home;
pub mod shows;
pub mod venues;

use axum::{
    extract::{rejection::PathRejection, Path},
    routing::{get, post},
    Router,
};
use chrono::{NaiveDateTime, Utc};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::state::AppState;

/// Shows are stored as naive UTC timestamps.
pub(crate) fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

/// A numeric `:id` segment. Handlers turn a rejection into a not-found error
/// so a malformed id gets the same page (or JSON body) as a missing record.
pub(crate) type RecordId = std::result::Result<Path<i32>, PathRejection>;

pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))

        // Venues
        .route("/venues", get(venues::list_venues))
        .route("/venues/search", post(venues::search_venues))
        .route(
            "/venues/create",
            get(venues::create_venue_form).post(venues::create_venue_submission),
        )
        .route(
            "/venues/:id",
            get(venues::show_venue).delete(venues::delete_venue),
        )
        .route(
            "/venues/:id/edit",
            get(venues::edit_venue_form).post(venues::edit_venue_submission),
        )

        // Artists
        .route("/artists", get(artists::list_artists))
        .route("/artists/search", post(artists::search_artists))
        .route(
            "/artists/create",
            get(artists::create_artist_form).post(artists::create_artist_submission),
        )
        .route("/artists/:id", get(artists::show_artist))
        .route(
            "/artists/:id/edit",
            get(artists::edit_artist_form).post(artists::edit_artist_submission),
        )

        // Shows
        .route("/shows", get(shows::list_shows))
        .route(
            "/shows/create",
            get(shows::create_show_form).post(shows::create_show_submission),
        )
}

pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/venues", get(api::list_venues))
        .route("/venues/search", get(api::search_venues))
        .route("/venues/:id", get(api::get_venue))
        .route("/artists", get(api::list_artists))
        .route("/artists/search", get(api::search_artists))
        .route("/artists/:id", get(api::get_artist))
        .route("/shows", get(api::list_shows))
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", api_routes())
        .merge(page_routes())
        .fallback(home::not_found)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
