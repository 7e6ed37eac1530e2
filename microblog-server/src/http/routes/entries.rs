//! Entry endpoints
//!
//! Writes redirect back to the listing with a flash message so that a
//! browser refresh never resubmits the form.

use std::sync::Arc;

use askama::Template;
use axum::{
    extract::{Query, State},
    http::header::SET_COOKIE,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Router,
};

use crate::db::{EntryRepo, RequestDb};
use crate::http::error::ApiError;
use crate::http::extractors::{Flash, ValidForm};
use crate::http::flash;
use crate::http::server::AppState;
use crate::models::{EntryForm, IdForm, UpdateForm};
use crate::views::ShowEntries;

pub const ENTRY_ADDED: &str = "New entry was successfully posted";
pub const ENTRY_DELETED: &str = "Entry deleted";
pub const ENTRY_UPDATED: &str = "Entry updated";

/// Query parameters for the listing
#[derive(Debug, Default)]
pub struct ListParams {
    pub category: Option<String>,
}

impl ListParams {
    /// Build from raw query pairs. A repeated key keeps its first value.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let category = pairs
            .into_iter()
            .find(|(key, _)| key == "category")
            .map(|(_, value)| value);

        Self { category }
    }
}

/// GET / - list entries, optionally filtered by category
async fn show_entries(
    mut db: RequestDb,
    flash: Flash,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Response, ApiError> {
    let params = ListParams::from_pairs(pairs);

    let mut repo = EntryRepo::new(db.acquire().await?);
    let entries = repo.list(params.category.as_deref()).await?;
    let categories = repo.categories().await?;
    db.release();

    // Shown messages are consumed; a cookie that failed to verify is dropped
    let clear = flash.cookie_present;
    let page = Html(ShowEntries::new(entries, categories, params.category, flash.messages).render()?);

    if clear {
        Ok(([(SET_COOKIE, flash::clear_cookie())], page).into_response())
    } else {
        Ok(page.into_response())
    }
}

/// POST /add - create an entry
async fn add_entry(
    State(state): State<Arc<AppState>>,
    mut db: RequestDb,
    flash: Flash,
    ValidForm(form): ValidForm<EntryForm>,
) -> Result<Response, ApiError> {
    let entry = form.validate()?;
    let id = EntryRepo::new(db.acquire().await?).insert(&entry).await?;
    tracing::info!(%id, category = %entry.category, "entry added");

    Ok(redirect_with_flash(&state, flash.messages, ENTRY_ADDED))
}

/// POST /delete - delete an entry by id (missing ids are not an error)
async fn delete_entry(
    State(state): State<Arc<AppState>>,
    mut db: RequestDb,
    flash: Flash,
    ValidForm(form): ValidForm<IdForm>,
) -> Result<Response, ApiError> {
    let id = form.validate()?;
    let removed = EntryRepo::new(db.acquire().await?).delete(id).await?;
    tracing::info!(%id, removed, "entry deleted");

    Ok(redirect_with_flash(&state, flash.messages, ENTRY_DELETED))
}

/// POST /update - replace an entry's content by id (missing ids are not an error)
async fn update_entry(
    State(state): State<Arc<AppState>>,
    mut db: RequestDb,
    flash: Flash,
    ValidForm(form): ValidForm<UpdateForm>,
) -> Result<Response, ApiError> {
    let (id, entry) = form.validate()?;
    let changed = EntryRepo::new(db.acquire().await?).update(id, &entry).await?;
    tracing::info!(%id, changed, category = %entry.category, "entry updated");

    Ok(redirect_with_flash(&state, flash.messages, ENTRY_UPDATED))
}

/// 303 to the listing, queueing `message` after any still-pending ones.
fn redirect_with_flash(state: &AppState, mut flashes: Vec<String>, message: &str) -> Response {
    flashes.push(message.to_string());
    (
        [(SET_COOKIE, state.flash.set_cookie(&flashes))],
        Redirect::to("/"),
    )
        .into_response()
}

/// Entry routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(show_entries))
        .route("/add", post(add_entry))
        .route("/delete", post(delete_entry))
        .route("/update", post(update_entry))
}
