use axum::{
    extract::State,
    response::{Html, Redirect},
    Form,
};

use crate::{
    db::{entities::show, UnitOfWork},
    error::{AppError, PageResult, Result},
    forms::{FormFields, ShowInput},
    services::{booking, directory},
    state::AppState,
    templates::{show_form_page, shows_page},
};

pub async fn list_shows(State(state): State<AppState>) -> PageResult<Html<String>> {
    let shows = directory::list_shows(&state.db).await?;
    Ok(Html(shows_page(&shows).into_string()))
}

/// Form with venue and artist pickers
pub async fn create_show_form(State(state): State<AppState>) -> PageResult<Html<String>> {
    let venues = directory::list_venues(&state.db).await?;
    let artists = directory::list_artists(&state.db).await?;
    Ok(Html(show_form_page(&venues, &artists).into_string()))
}

pub async fn create_show_submission(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> PageResult<Redirect> {
    let fields = FormFields::from(pairs);
    create(&state, &fields)
        .await
        .map_err(|e| AppError::mutation("Show", "", "listed", e))?;

    Ok(Redirect::to("/shows"))
}

async fn create(state: &AppState, fields: &FormFields) -> Result<show::Model> {
    let input = ShowInput::from_form(fields)?;
    let uow = UnitOfWork::begin(&state.db, "show.create").await?;
    let outcome = booking::create_show(&uow, input).await;
    uow.finish(outcome).await
}
