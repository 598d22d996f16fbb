use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form,
};

use super::{now, venues::submitted_name, RecordId};
use crate::{
    db::{entities::artist, UnitOfWork},
    error::{AppError, PageResult, Result},
    forms::{ArtistInput, FormFields, SearchForm},
    services::{booking, directory},
    state::AppState,
    templates::{
        artist_detail_page, artist_form_page, artists_page, search_results_page, Directory,
    },
};

pub async fn list_artists(State(state): State<AppState>) -> PageResult<Html<String>> {
    let artists = directory::list_artists(&state.db).await?;
    Ok(Html(artists_page(&artists).into_string()))
}

pub async fn search_artists(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> PageResult<Html<String>> {
    let results = directory::search_artists(&state.db, &form.search_term, now()).await?;
    Ok(Html(
        search_results_page(Directory::Artists, &results).into_string(),
    ))
}

pub async fn show_artist(
    State(state): State<AppState>,
    id: RecordId,
) -> PageResult<Html<String>> {
    let Path(id) = id?;
    let artist = directory::artist_detail(&state.db, id, now()).await?;
    Ok(Html(artist_detail_page(&artist).into_string()))
}

pub async fn create_artist_form() -> Html<String> {
    Html(artist_form_page(None, &[]).into_string())
}

pub async fn create_artist_submission(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> PageResult<Redirect> {
    let fields = FormFields::from(pairs);
    let artist = create(&state, &fields)
        .await
        .map_err(|e| AppError::mutation("Artist", submitted_name(&fields), "listed", e))?;

    Ok(Redirect::to(&format!("/artists/{}", artist.id)))
}

async fn create(state: &AppState, fields: &FormFields) -> Result<artist::Model> {
    let input = ArtistInput::from_form(fields)?;
    let uow = UnitOfWork::begin(&state.db, "artist.create").await?;
    let outcome = booking::create_artist(&uow, input).await;
    uow.finish(outcome).await
}

pub async fn edit_artist_form(
    State(state): State<AppState>,
    id: RecordId,
) -> PageResult<Html<String>> {
    let Path(id) = id?;
    let artist = directory::get_artist(&state.db, id).await?;
    let genres = artist.genre_list()?;
    Ok(Html(artist_form_page(Some(&artist), &genres).into_string()))
}

pub async fn edit_artist_submission(
    State(state): State<AppState>,
    id: RecordId,
    Form(pairs): Form<Vec<(String, String)>>,
) -> PageResult<Redirect> {
    let Path(id) = id?;
    let fields = FormFields::from(pairs);
    let artist = update(&state, id, &fields)
        .await
        .map_err(|e| AppError::mutation("Artist", submitted_name(&fields), "updated", e))?;

    Ok(Redirect::to(&format!("/artists/{}", artist.id)))
}

async fn update(state: &AppState, id: i32, fields: &FormFields) -> Result<artist::Model> {
    let input = ArtistInput::from_form(fields)?;
    let uow = UnitOfWork::begin(&state.db, "artist.update").await?;
    let outcome = booking::update_artist(&uow, id, input).await;
    uow.finish(outcome).await
}
