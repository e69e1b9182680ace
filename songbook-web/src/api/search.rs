//! Search page handler

use axum::extract::{Query, State};
use axum::response::Html;

use songbook_common::search::{self, SearchCriteria, SearchHit};

use crate::api::ui;
use crate::db::songs;
use crate::error::PageResult;
use crate::{AppState, NavLinks};

/// GET /search
///
/// Runs the search described by the query string and renders the form
/// together with the matching records. With no criteria the whole
/// catalog is listed.
pub async fn search_page(
    State(state): State<AppState>,
    Query(criteria): Query<SearchCriteria>,
) -> PageResult<Html<String>> {
    let records = songs::find_all(&state.db, &criteria).await?;
    let hits = search::filter_records(records, &criteria);
    Ok(Html(results_page(&state.nav, &criteria, &hits)))
}

fn results_page(nav: &NavLinks, criteria: &SearchCriteria, hits: &[SearchHit]) -> String {
    let form = format!(
        r#"        <h1>Search Records</h1>
        <form method="get" action="{action}">
            <label for="title">Title (exact)</label>
            <input type="text" id="title" name="title" value="{title}">

            <label for="writer">Writer (exact)</label>
            <input type="text" id="writer" name="writer" value="{writer}">

            <label for="year">Release year</label>
            <input type="text" id="year" name="year" value="{year}">

            <button type="submit">Search</button>
        </form>
"#,
        action = nav.search,
        title = ui::escape(criteria.title.as_deref().unwrap_or("")),
        writer = ui::escape(criteria.writer.as_deref().unwrap_or("")),
        year = ui::escape(criteria.year.as_deref().unwrap_or("")),
    );

    let results = if hits.is_empty() {
        "        <p>No records matched.</p>\n".to_string()
    } else {
        let rows: String = hits
            .iter()
            .map(|hit| {
                format!(
                    r#"                <tr>
                    <td><a href="/records/{id}">{title}</a></td>
                    <td>{year}</td>
                    <td>{writers}</td>
                    <td>{duration}</td>
                </tr>
"#,
                    id = hit.song.id,
                    title = ui::escape(&hit.song.fields.title),
                    year = ui::escape(&hit.year),
                    writers = ui::escape(&hit.song.fields.writers.join(", ")),
                    duration = ui::escape(&hit.song.fields.duration),
                )
            })
            .collect();

        format!(
            r#"        <p>{count} record{plural} found.</p>
        <table>
            <thead>
                <tr><th>Title</th><th>Year</th><th>Writers</th><th>Duration</th></tr>
            </thead>
            <tbody>
{rows}            </tbody>
        </table>
"#,
            count = hits.len(),
            plural = if hits.len() == 1 { "" } else { "s" },
        )
    };

    ui::layout(nav, "Search", &format!("{form}{results}"))
}
