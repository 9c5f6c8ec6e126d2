//! Link management pages for the admin UI.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::Redirect,
};
use serde::Deserialize;

use crate::domain::entities::Link;
use crate::state::AppState;
use crate::web::error::WebError;

/// Template for the link list page.
///
/// Renders `templates/shortlinks.html` with:
/// - Link creation form
/// - Every stored link with its visit count and a delete button
#[derive(Template, WebTemplate)]
#[template(path = "shortlinks.html")]
pub struct ShortlinksTemplate {
    pub site_url: String,
    pub links: Vec<Link>,
}

/// Form posted by the link creation form.
#[derive(Debug, Deserialize)]
pub struct ShortenForm {
    #[serde(default)]
    pub url: String,
    /// Optional custom code; the field name matches the HTML form.
    #[serde(default, rename = "shortURL")]
    pub short_url: String,
}

/// Renders every stored link.
///
/// # Endpoint
///
/// `GET /shortlinks`
pub async fn shortlinks_handler(
    State(state): State<AppState>,
) -> Result<ShortlinksTemplate, WebError> {
    let links = state.link_service.list_links().await?;

    Ok(ShortlinksTemplate {
        site_url: state.site_url.clone(),
        links,
    })
}

/// Creates a link from the admin form.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Errors
///
/// - 400 `Invalid URL` if the URL is not an absolute http(s) URL
/// - 400 if the custom code is invalid or reserved
/// - 409 if the custom code is taken
pub async fn shorten_form_handler(
    State(state): State<AppState>,
    Form(form): Form<ShortenForm>,
) -> Result<Redirect, WebError> {
    let custom_code = Some(form.short_url.trim().to_string());

    let link = state
        .link_service
        .create_link(form.url.trim(), custom_code)
        .await?;

    tracing::info!(short_code = %link.short_code, "Short link created via admin UI");

    Ok(Redirect::to("/shortlinks"))
}

/// Deletes a link.
///
/// # Endpoint
///
/// `POST /{code}/delete`
///
/// Deleting a code that does not exist is logged and otherwise ignored.
pub async fn delete_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, WebError> {
    if state.link_service.delete_link(&code).await? {
        tracing::info!(short_code = %code, "Short link deleted");
    } else {
        tracing::warn!(short_code = %code, "Delete requested for unknown short link");
    }

    Ok(Redirect::to("/shortlinks"))
}
