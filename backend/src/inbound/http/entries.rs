//! Journal page handlers.
//!
//! ```text
//! GET  /                      weeks of entries, public
//! POST /                      create an entry (admin, multipart or URL-encoded)
//! GET  /entries/{id}/edit     entry for the edit page (admin)
//! POST /entries/{id}/edit     update, or delete with `_action=delete` (admin)
//! ```

use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, get, post, web};
use tracing::debug;

use super::ApiResult;
use super::entry_form::EntryForm;
use super::schemas::{EntryFormSchema, ErrorSchema};
use super::session::SessionContext;
use super::state::HttpState;
use super::validation::parse_entry_id;
use super::views::{EntryView, JournalView, SessionView, WeekView, edit_path};

/// Redirect back to the journal after a successful form post.
pub(crate) fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location.to_owned()))
        .finish()
}

/// List every entry grouped by week, newest week first.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Journal weeks", body = JournalView),
        (status = 503, description = "Storage unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["journal"],
    operation_id = "listJournal",
    security([])
)]
#[get("/")]
pub async fn journal_index(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<JournalView>> {
    let is_admin = session.is_admin();
    let page = state.journal_query.list_weeks().await?;
    let weeks = page
        .weeks
        .iter()
        .map(|week| WeekView::from_week(week, is_admin))
        .collect();
    Ok(web::Json(JournalView {
        session: SessionView { is_admin },
        weeks,
    }))
}

/// Create an entry from the multipart journal form.
#[utoipa::path(
    post,
    path = "/",
    request_body(
        content(
            (EntryFormSchema = "multipart/form-data"),
            (EntryFormSchema = "application/x-www-form-urlencoded")
        )
    ),
    responses(
        (
            status = 201,
            description = "Entry created",
            body = EntryView,
            headers(("Location" = String, description = "Edit page of the new entry"))
        ),
        (status = 400, description = "Invalid form", body = ErrorSchema),
        (status = 401, description = "Not authenticated", body = ErrorSchema),
        (status = 503, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["journal"],
    operation_id = "createEntry"
)]
#[post("/")]
pub async fn create_entry(
    req: HttpRequest,
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Payload,
) -> ApiResult<HttpResponse> {
    session.require_admin()?;
    let draft = EntryForm::from_request(&req, payload).await?.into_draft()?;
    let entry = state.journal_command.create_entry(draft).await?;
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, edit_path(&entry)))
        .json(EntryView::from_entry(&entry, true)))
}

/// Load an entry for its edit page.
///
/// Unknown ids answer 404 even to visitors.
#[utoipa::path(
    get,
    path = "/entries/{id}/edit",
    params(("id" = String, Path, description = "Entry identifier")),
    responses(
        (status = 200, description = "Entry", body = EntryView),
        (status = 401, description = "Not authenticated", body = ErrorSchema),
        (status = 404, description = "Unknown entry", body = ErrorSchema)
    ),
    tags = ["journal"],
    operation_id = "getEntryForEdit"
)]
#[get("/entries/{id}/edit")]
pub async fn edit_entry_page(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<web::Json<EntryView>> {
    let id = parse_entry_id(&path)?;
    let entry = state.journal_query.get_entry(&id).await?;
    session.require_admin()?;
    Ok(web::Json(EntryView::from_entry(&entry, true)))
}

/// Update or delete an entry from the edit form.
///
/// The delete button posts a bare URL-encoded `_action=delete`.
#[utoipa::path(
    post,
    path = "/entries/{id}/edit",
    params(("id" = String, Path, description = "Entry identifier")),
    request_body(
        content(
            (EntryFormSchema = "multipart/form-data"),
            (EntryFormSchema = "application/x-www-form-urlencoded")
        )
    ),
    responses(
        (
            status = 303,
            description = "Saved or deleted; back to the journal",
            headers(("Location" = String, description = "Always `/`"))
        ),
        (status = 400, description = "Invalid form", body = ErrorSchema),
        (status = 401, description = "Not authenticated", body = ErrorSchema),
        (status = 404, description = "Unknown entry", body = ErrorSchema)
    ),
    tags = ["journal"],
    operation_id = "updateEntry"
)]
#[post("/entries/{id}/edit")]
pub async fn update_entry(
    req: HttpRequest,
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    payload: web::Payload,
) -> ApiResult<HttpResponse> {
    session.require_admin()?;
    let id = parse_entry_id(&path)?;
    state.journal_query.get_entry(&id).await?;

    let form = EntryForm::from_request(&req, payload).await?;
    if form.is_delete() {
        state.journal_command.delete_entry(&id).await?;
        debug!(entry_id = %id, "entry deleted from edit form");
        return Ok(see_other("/"));
    }

    let update = form.into_update()?;
    state.journal_command.update_entry(&id, update).await?;
    Ok(see_other("/"))
}

#[cfg(test)]
#[path = "entries_tests.rs"]
mod tests;
