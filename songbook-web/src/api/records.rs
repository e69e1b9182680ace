//! Record CRUD page handlers

use std::collections::HashMap;

use axum::extract::{Form, Path, State};
use axum::response::{Html, Redirect};
use tracing::{info, warn};
use uuid::Uuid;

use songbook_common::form::normalize;
use songbook_common::model::Song;

use crate::api::ui::{self, FormValues};
use crate::db::songs;
use crate::error::{PageError, PageResult};
use crate::{AppState, NavLinks};

/// GET /records/new
///
/// Empty record form.
pub async fn new_record_page(State(state): State<AppState>) -> Html<String> {
    let body = format!(
        "        <h1>Add Record</h1>\n{}",
        ui::song_form(state.nav.add, "Add record", &FormValues::default())
    );
    Html(ui::layout(&state.nav, "Add Record", &body))
}

/// POST /records/new
///
/// Normalizes the submitted form, stores the record, and redirects to
/// its new detail page.
pub async fn create_record(
    State(state): State<AppState>,
    Form(raw): Form<HashMap<String, String>>,
) -> PageResult<Redirect> {
    let fields = normalize(&raw)?;

    // Duplicate titles are tolerated, only flagged. The check is not
    // atomic with the insert.
    let existing = songs::count_by_title(&state.db, &fields.title).await?;
    if existing > 0 {
        warn!(
            "'{}' already appears in the catalog {existing} time(s)",
            fields.title
        );
    }

    let id = songs::insert(&state.db, &fields).await?;
    info!("created record {id}: '{}'", fields.title);

    Ok(Redirect::to(&format!("/records/{id}")))
}

/// GET /records/:id
///
/// Detail page. An unknown or malformed id renders the page in its
/// "record does not exist" state rather than failing.
pub async fn record_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> PageResult<Html<String>> {
    let page = match songs::find_by_id(&state.db, &id).await? {
        Some(song) => record_detail(&state.nav, &song),
        None => record_missing(&state.nav, &id),
    };
    Ok(Html(page))
}

/// GET /records/:id/edit
///
/// Record form prefilled from the stored record. Editing a record that
/// does not exist is a 404.
pub async fn edit_record_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> PageResult<Html<String>> {
    let song = songs::find_by_id(&state.db, &id)
        .await?
        .ok_or_else(|| PageError::NotFound(format!("record {id}")))?;

    let action = format!("/records/{}/edit", song.id);
    let body = format!(
        "        <h1>Edit Record</h1>\n{}",
        ui::song_form(&action, "Save changes", &FormValues::from_song(&song))
    );
    Ok(Html(ui::layout(&state.nav, "Edit Record", &body)))
}

/// POST /records/:id/edit
///
/// Replaces every field of the record with the normalized submission
/// and redirects back to the detail page. The id never changes.
pub async fn update_record(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(raw): Form<HashMap<String, String>>,
) -> PageResult<Redirect> {
    let id = parse_id(&id)?;
    let fields = normalize(&raw)?;

    songs::update(&state.db, id, &fields).await?;
    info!("updated record {id}: '{}'", fields.title);

    Ok(Redirect::to(&format!("/records/{id}")))
}

/// GET /records/:id/delete
///
/// Confirmation page. A record that is already gone gets the same
/// missing state as the detail page.
pub async fn delete_record_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> PageResult<Html<String>> {
    let page = match songs::find_by_id(&state.db, &id).await? {
        Some(song) => delete_confirm(&state.nav, &song),
        None => record_missing(&state.nav, &id),
    };
    Ok(Html(page))
}

/// POST /records/:id/delete
///
/// Removes the record and redirects to its detail page, which then
/// renders the missing state. Deleting an absent or malformed id is a
/// no-op.
pub async fn delete_record(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> PageResult<Redirect> {
    if let Ok(parsed) = Uuid::parse_str(&id) {
        songs::delete(&state.db, parsed).await?;
        info!("deleted record {parsed}");
    }
    Ok(Redirect::to(&format!("/records/{id}")))
}

fn parse_id(id: &str) -> Result<Uuid, PageError> {
    Uuid::parse_str(id).map_err(|_| PageError::NotFound(format!("record {id}")))
}

fn record_detail(nav: &NavLinks, song: &Song) -> String {
    let links = if song.fields.links.is_empty() {
        "<p>None</p>".to_string()
    } else {
        let items: String = song
            .fields
            .links
            .iter()
            .map(|link| {
                let href = ui::escape(link);
                format!(r#"<li><a href="{href}">{href}</a></li>"#)
            })
            .collect();
        format!("<ul>{items}</ul>")
    };

    let body = format!(
        r#"        <h1>{title}</h1>
        <h2>Writers</h2>
        {writers}
        <h2>Producers</h2>
        {producers}
        <h2>Genres</h2>
        {genres}
        <h2>Release date</h2>
        <p>{release_date}</p>
        <h2>Duration</h2>
        <p>{duration}</p>
        <h2>Links</h2>
        {links}
        <h2>Lyrics</h2>
        <pre>{lyrics}</pre>
        <div class="actions">
            <a href="/records/{id}/edit">Edit</a>
            <a href="/records/{id}/delete">Delete</a>
        </div>
"#,
        title = ui::escape(&song.fields.title),
        writers = ui::list_items(&song.fields.writers),
        producers = ui::list_items(&song.fields.producers),
        genres = ui::list_items(&song.fields.genres),
        release_date = ui::escape(&song.fields.release_date),
        duration = ui::escape(&song.fields.duration),
        links = links,
        lyrics = ui::escape(&song.fields.lyrics),
        id = song.id,
    );
    ui::layout(nav, &song.fields.title, &body)
}

fn record_missing(nav: &NavLinks, id: &str) -> String {
    let body = format!(
        r#"        <h1>Record</h1>
        <p class="missing">Record {id} does not exist. It may have been deleted.</p>
        <div class="actions">
            <a href="{search}">Search the catalog</a>
            <a href="{add}">Add a record</a>
        </div>
"#,
        id = ui::escape(id),
        search = nav.search,
        add = nav.add,
    );
    ui::layout(nav, "Record", &body)
}

fn delete_confirm(nav: &NavLinks, song: &Song) -> String {
    let body = format!(
        r#"        <h1>Delete Record</h1>
        <p>Delete "{title}" permanently? This cannot be undone.</p>
        <form method="post" action="/records/{id}/delete">
            <button type="submit" class="danger">Delete</button>
        </form>
        <div class="actions">
            <a href="/records/{id}">Cancel</a>
        </div>
"#,
        title = ui::escape(&song.fields.title),
        id = song.id,
    );
    ui::layout(nav, "Delete Record", &body)
}
