use axum::response::Html;

use crate::{
    error::{AppError, PageError},
    templates::home_page,
};

pub async fn index() -> Html<String> {
    Html(home_page().into_string())
}

pub async fn not_found() -> PageError {
    PageError(AppError::NotFound("Page not found".to_string()))
}
