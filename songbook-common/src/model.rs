//! Canonical song record model

use uuid::Uuid;

/// Field values of a song record, as produced by form normalization.
///
/// Holds everything except the identifier: the store assigns an id at
/// insert time, and updates replace exactly this set of fields.
#[derive(Debug, Clone, PartialEq)]
pub struct SongFields {
    /// Song title, whitespace-trimmed
    pub title: String,
    /// Writers, one entry per non-blank submitted line
    pub writers: Vec<String>,
    /// Producers, one entry per non-blank submitted line
    pub producers: Vec<String>,
    /// Genres, one entry per non-blank submitted line
    pub genres: Vec<String>,
    /// Release date as submitted (expected `YYYY-MM-DD`, not validated)
    pub release_date: String,
    /// Duration as `HH:MM:SS`
    pub duration: String,
    /// External links, one entry per non-blank submitted line
    pub links: Vec<String>,
    /// Lyrics, stored verbatim
    pub lyrics: String,
}

impl SongFields {
    /// Year component of the release date: the first four characters,
    /// or fewer if the stored date is shorter.
    pub fn release_year(&self) -> String {
        self.release_date.chars().take(4).collect()
    }
}

/// A persisted song record
#[derive(Debug, Clone, PartialEq)]
pub struct Song {
    /// Store-assigned identifier
    pub id: Uuid,
    pub fields: SongFields,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields_with_date(release_date: &str) -> SongFields {
        SongFields {
            title: "Test".to_string(),
            writers: vec![],
            producers: vec![],
            genres: vec![],
            release_date: release_date.to_string(),
            duration: "00:03:00".to_string(),
            links: vec![],
            lyrics: String::new(),
        }
    }

    #[test]
    fn release_year_is_date_prefix() {
        assert_eq!(fields_with_date("2020-05-17").release_year(), "2020");
    }

    #[test]
    fn release_year_of_short_date() {
        assert_eq!(fields_with_date("99").release_year(), "99");
        assert_eq!(fields_with_date("").release_year(), "");
    }
}
