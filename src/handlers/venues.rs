use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form,
};

use super::{now, RecordId};
use crate::{
    db::{entities::venue, UnitOfWork},
    error::{AppError, PageResult, Result},
    forms::{FormFields, SearchForm, VenueInput},
    services::{booking, directory, DeletedVenue},
    state::AppState,
    templates::{search_results_page, venue_detail_page, venue_form_page, venues_page, Directory},
};

/// Venues grouped by city and state
pub async fn list_venues(State(state): State<AppState>) -> PageResult<Html<String>> {
    let areas = directory::list_venues_by_area(&state.db, now()).await?;
    Ok(Html(venues_page(&areas).into_string()))
}

pub async fn search_venues(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> PageResult<Html<String>> {
    let results = directory::search_venues(&state.db, &form.search_term, now()).await?;
    Ok(Html(
        search_results_page(Directory::Venues, &results).into_string(),
    ))
}

pub async fn show_venue(
    State(state): State<AppState>,
    id: RecordId,
) -> PageResult<Html<String>> {
    let Path(id) = id?;
    let venue = directory::venue_detail(&state.db, id, now()).await?;
    Ok(Html(venue_detail_page(&venue).into_string()))
}

pub async fn create_venue_form() -> Html<String> {
    Html(venue_form_page(None, &[]).into_string())
}

pub async fn create_venue_submission(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> PageResult<Redirect> {
    let fields = FormFields::from(pairs);
    let venue = create(&state, &fields)
        .await
        .map_err(|e| AppError::mutation("Venue", submitted_name(&fields), "listed", e))?;

    Ok(Redirect::to(&format!("/venues/{}", venue.id)))
}

async fn create(state: &AppState, fields: &FormFields) -> Result<venue::Model> {
    let input = VenueInput::from_form(fields)?;
    let uow = UnitOfWork::begin(&state.db, "venue.create").await?;
    let outcome = booking::create_venue(&uow, input).await;
    uow.finish(outcome).await
}

pub async fn edit_venue_form(
    State(state): State<AppState>,
    id: RecordId,
) -> PageResult<Html<String>> {
    let Path(id) = id?;
    let venue = directory::get_venue(&state.db, id).await?;
    let genres = venue.genre_list()?;
    Ok(Html(venue_form_page(Some(&venue), &genres).into_string()))
}

pub async fn edit_venue_submission(
    State(state): State<AppState>,
    id: RecordId,
    Form(pairs): Form<Vec<(String, String)>>,
) -> PageResult<Redirect> {
    let Path(id) = id?;
    let fields = FormFields::from(pairs);
    let venue = update(&state, id, &fields)
        .await
        .map_err(|e| AppError::mutation("Venue", submitted_name(&fields), "updated", e))?;

    Ok(Redirect::to(&format!("/venues/{}", venue.id)))
}

async fn update(state: &AppState, id: i32, fields: &FormFields) -> Result<venue::Model> {
    let input = VenueInput::from_form(fields)?;
    let uow = UnitOfWork::begin(&state.db, "venue.update").await?;
    let outcome = booking::update_venue(&uow, id, input).await;
    uow.finish(outcome).await
}

/// Deletes the venue and its shows, then sends the browser home.
pub async fn delete_venue(
    State(state): State<AppState>,
    id: RecordId,
) -> PageResult<Redirect> {
    let Path(id) = id?;
    let deleted = delete(&state, id)
        .await
        .map_err(|e| AppError::mutation("Venue", id.to_string(), "deleted", e))?;

    tracing::debug!(
        venue_id = deleted.venue_id,
        shows_removed = deleted.shows_removed,
        "Redirecting after venue delete"
    );
    Ok(Redirect::to("/"))
}

async fn delete(state: &AppState, id: i32) -> Result<DeletedVenue> {
    let uow = UnitOfWork::begin(&state.db, "venue.delete").await?;
    let outcome = booking::delete_venue(&uow, id).await;
    uow.finish(outcome).await
}

pub(crate) fn submitted_name(fields: &FormFields) -> String {
    fields.get("name").unwrap_or_default().trim().to_string()
}
