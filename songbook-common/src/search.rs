//! Search criteria and in-memory result filtering
//!
//! Title matching is pushed down into the store query; the writer and
//! release-year criteria are evaluated here, over the fetched records.

use serde::Deserialize;

use crate::model::Song;

/// Optional search constraints submitted by the search form. All
/// criteria are conjunctive; a criterion that is absent or empty
/// imposes no constraint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchCriteria {
    pub title: Option<String>,
    pub writer: Option<String>,
    pub year: Option<String>,
}

impl SearchCriteria {
    /// Title constraint, if one was actually supplied
    pub fn title(&self) -> Option<&str> {
        non_empty(&self.title)
    }

    /// Writer constraint, if one was actually supplied
    pub fn writer(&self) -> Option<&str> {
        non_empty(&self.writer)
    }

    /// Release-year constraint, if one was actually supplied
    pub fn year(&self) -> Option<&str> {
        non_empty(&self.year)
    }

    /// True when no criterion is in effect
    pub fn is_empty(&self) -> bool {
        self.title().is_none() && self.writer().is_none() && self.year().is_none()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// A record matched by a search, annotated with its release year
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub song: Song,
    /// Derived from the release date; not stored
    pub year: String,
}

/// Apply the in-memory criteria over records fetched from the store.
///
/// The writer criterion matches records whose writers list contains the
/// exact string; the year criterion matches records whose release year
/// equals it exactly. Record order is preserved, and every hit carries
/// its derived release year.
pub fn filter_records(records: Vec<Song>, criteria: &SearchCriteria) -> Vec<SearchHit> {
    records
        .into_iter()
        .filter(|song| {
            criteria
                .writer()
                .map_or(true, |writer| song.fields.writers.iter().any(|w| w == writer))
        })
        .map(|song| {
            let year = song.fields.release_year();
            SearchHit { song, year }
        })
        .filter(|hit| criteria.year().map_or(true, |year| hit.year == year))
        .collect()
}
