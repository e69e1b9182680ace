//! Shared page chrome and form rendering
//!
//! All pages are server-rendered HTML assembled with format!. Handlers
//! build their page body and wrap it in [`layout`]; the record form is
//! shared between the add and edit pages.

use axum::extract::State;
use axum::response::Html;

use songbook_common::model::Song;

use crate::{AppState, NavLinks};

/// Escape text for interpolation into element content or double-quoted
/// attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap a page body in the shared chrome: head, styles, navigation bar.
pub fn layout(nav: &NavLinks, page_title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - Songbook</title>
    <style>
        * {{
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }}
        body {{
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            background-color: #1a1a1a;
            color: #e0e0e0;
            line-height: 1.6;
        }}
        nav {{
            background-color: #2a2a2a;
            border-bottom: 1px solid #3a3a3a;
            padding: 15px 20px;
        }}
        nav a {{
            color: #4a9eff;
            text-decoration: none;
            margin-right: 20px;
            font-weight: 600;
        }}
        nav a:hover {{
            text-decoration: underline;
        }}
        main {{
            max-width: 720px;
            margin: 0 auto;
            padding: 30px 20px;
        }}
        h1 {{
            font-size: 26px;
            color: #4a9eff;
            margin-bottom: 15px;
        }}
        h2 {{
            font-size: 18px;
            color: #888;
            margin: 20px 0 5px 0;
        }}
        a {{
            color: #4a9eff;
        }}
        ul {{
            list-style-position: inside;
            margin-bottom: 10px;
        }}
        table {{
            width: 100%;
            border-collapse: collapse;
            margin-top: 15px;
        }}
        th, td {{
            text-align: left;
            padding: 8px 10px;
            border-bottom: 1px solid #3a3a3a;
        }}
        label {{
            display: block;
            margin-top: 15px;
            color: #888;
        }}
        input, textarea {{
            width: 100%;
            padding: 8px;
            background-color: #2a2a2a;
            border: 1px solid #3a3a3a;
            border-radius: 4px;
            color: #e0e0e0;
            font-family: inherit;
        }}
        .duration-inputs {{
            display: flex;
            gap: 10px;
        }}
        .duration-inputs input {{
            width: 70px;
        }}
        button {{
            margin-top: 20px;
            padding: 10px 24px;
            background-color: #4a9eff;
            border: none;
            border-radius: 4px;
            color: #fff;
            font-weight: 600;
            cursor: pointer;
        }}
        button:hover {{
            background-color: #3a8eef;
        }}
        .danger {{
            background-color: #dc2626;
        }}
        .danger:hover {{
            background-color: #b91c1c;
        }}
        .missing {{
            color: #f59e0b;
        }}
        .error {{
            color: #dc2626;
        }}
        pre {{
            background-color: #2a2a2a;
            border: 1px solid #3a3a3a;
            border-radius: 4px;
            padding: 12px;
            margin-top: 5px;
            white-space: pre-wrap;
            font-family: inherit;
        }}
        .actions {{
            margin-top: 25px;
        }}
        .actions a {{
            margin-right: 15px;
        }}
    </style>
</head>
<body>
    <nav>
        <a href="{home}">Home</a>
        <a href="{add}">Add Record</a>
        <a href="{search}">Search</a>
    </nav>
    <main>
{body}
    </main>
</body>
</html>
"#,
        title = escape(page_title),
        home = nav.home,
        add = nav.add,
        search = nav.search,
        body = body,
    )
}

/// GET /
///
/// Landing page with pointers to the catalog actions.
pub async fn home_page(State(state): State<AppState>) -> Html<String> {
    let body = format!(
        r#"        <h1>Songbook</h1>
        <p>A catalog of song records: who wrote and produced them, when
        they were released, how long they run, and where to hear them.</p>
        <div class="actions">
            <a href="{add}">Add a record</a>
            <a href="{search}">Search the catalog</a>
        </div>
"#,
        add = state.nav.add,
        search = state.nav.search,
    );
    Html(layout(&state.nav, "Home", &body))
}

/// Render the generic failure page. Used by the error boundary, so it
/// relies on the default navigation targets rather than request state.
pub fn error_page(message: &str) -> String {
    let nav = NavLinks::default();
    let body = format!(
        r#"        <h1 class="error">Something went wrong</h1>
        <p>{message}</p>
        <div class="actions">
            <a href="{home}">Back to home</a>
        </div>
"#,
        message = escape(message),
        home = nav.home,
    );
    layout(&nav, "Error", &body)
}

/// Values prefilling the record form. Empty for the add page; derived
/// from the stored record for the edit page.
#[derive(Debug, Default)]
pub struct FormValues {
    pub title: String,
    pub writers: String,
    pub producers: String,
    pub genres: String,
    pub release_date: String,
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
    pub links: String,
    pub lyrics: String,
}

impl FormValues {
    pub fn from_song(song: &Song) -> Self {
        let (hours, minutes, seconds) = split_duration(&song.fields.duration);
        Self {
            title: song.fields.title.clone(),
            writers: song.fields.writers.join("\n"),
            producers: song.fields.producers.join("\n"),
            genres: song.fields.genres.join("\n"),
            release_date: song.fields.release_date.clone(),
            hours,
            minutes,
            seconds,
            links: song.fields.links.join("\n"),
            lyrics: song.fields.lyrics.clone(),
        }
    }
}

/// Split a stored `HH:MM:SS` duration back into its form components by
/// position: characters 0-1, 3-4, and the last two.
fn split_duration(duration: &str) -> (String, String, String) {
    let chars: Vec<char> = duration.chars().collect();
    let slice = |from: usize, to: usize| -> String {
        if from >= chars.len() {
            return String::new();
        }
        chars[from..to.min(chars.len())].iter().collect()
    };
    let hours = slice(0, 2);
    let minutes = slice(3, 5);
    let seconds: String = chars[chars.len().saturating_sub(2)..].iter().collect();
    (hours, minutes, seconds)
}

/// Render the shared record form, posting to `action`.
pub fn song_form(action: &str, submit_label: &str, values: &FormValues) -> String {
    format!(
        r#"        <form method="post" action="{action}">
            <label for="title">Title</label>
            <input type="text" id="title" name="title" value="{title}">

            <label for="writers">Writers (one per line)</label>
            <textarea id="writers" name="writers" rows="3">{writers}</textarea>

            <label for="producers">Producers (one per line)</label>
            <textarea id="producers" name="producers" rows="3">{producers}</textarea>

            <label for="genres">Genres (one per line)</label>
            <textarea id="genres" name="genres" rows="2">{genres}</textarea>

            <label for="releaseDate">Release date</label>
            <input type="date" id="releaseDate" name="releaseDate" value="{release_date}">

            <label>Duration (hours / minutes / seconds)</label>
            <div class="duration-inputs">
                <input type="text" name="songHours" value="{hours}" placeholder="HH">
                <input type="text" name="songMinutes" value="{minutes}" placeholder="MM">
                <input type="text" name="songSeconds" value="{seconds}" placeholder="SS">
            </div>

            <label for="links">Links (one per line)</label>
            <textarea id="links" name="links" rows="2">{links}</textarea>

            <label for="lyrics">Lyrics</label>
            <textarea id="lyrics" name="lyrics" rows="8">{lyrics}</textarea>

            <button type="submit">{submit}</button>
        </form>
"#,
        action = escape(action),
        title = escape(&values.title),
        writers = escape(&values.writers),
        producers = escape(&values.producers),
        genres = escape(&values.genres),
        release_date = escape(&values.release_date),
        hours = escape(&values.hours),
        minutes = escape(&values.minutes),
        seconds = escape(&values.seconds),
        links = escape(&values.links),
        lyrics = escape(&values.lyrics),
        submit = escape(submit_label),
    )
}

/// Render a list field as an unordered list, or a placeholder when the
/// list is empty.
pub fn list_items(values: &[String]) -> String {
    if values.is_empty() {
        return "<p>None</p>".to_string();
    }
    let items: String = values
        .iter()
        .map(|v| format!("<li>{}</li>", escape(v)))
        .collect();
    format!("<ul>{items}</ul>")
}
