//! Read-only JSON views of the directory. Same data as the pages, no writes.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Serialize;

use super::{now, RecordId};
use crate::{
    error::Result,
    forms::SearchForm,
    services::{directory, Area, ArtistDetail, SearchResults, ShowListing, VenueDetail},
    state::AppState,
};

#[derive(Serialize)]
pub struct ArtistSummary {
    pub id: i32,
    pub name: String,
}

pub async fn list_venues(State(state): State<AppState>) -> Result<Json<Vec<Area>>> {
    let areas = directory::list_venues_by_area(&state.db, now()).await?;
    Ok(Json(areas))
}

/// GET /api/venues/search?search_term=hop
pub async fn search_venues(
    State(state): State<AppState>,
    Query(query): Query<SearchForm>,
) -> Result<Json<SearchResults>> {
    let results = directory::search_venues(&state.db, &query.search_term, now()).await?;
    Ok(Json(results))
}

pub async fn get_venue(
    State(state): State<AppState>,
    id: RecordId,
) -> Result<Json<VenueDetail>> {
    let Path(id) = id?;
    let venue = directory::venue_detail(&state.db, id, now()).await?;
    Ok(Json(venue))
}

pub async fn list_artists(State(state): State<AppState>) -> Result<Json<Vec<ArtistSummary>>> {
    let artists = directory::list_artists(&state.db).await?;

    Ok(Json(
        artists
            .into_iter()
            .map(|artist| ArtistSummary {
                id: artist.id,
                name: artist.name,
            })
            .collect(),
    ))
}

pub async fn search_artists(
    State(state): State<AppState>,
    Query(query): Query<SearchForm>,
) -> Result<Json<SearchResults>> {
    let results = directory::search_artists(&state.db, &query.search_term, now()).await?;
    Ok(Json(results))
}

pub async fn get_artist(
    State(state): State<AppState>,
    id: RecordId,
) -> Result<Json<ArtistDetail>> {
    let Path(id) = id?;
    let artist = directory::artist_detail(&state.db, id, now()).await?;
    Ok(Json(artist))
}

pub async fn list_shows(State(state): State<AppState>) -> Result<Json<Vec<ShowListing>>> {
    let shows = directory::list_shows(&state.db).await?;
    Ok(Json(shows))
}
