//! Event and snapshot types.

use serde::de::{Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A logged user action: "this movie was looked at"
///
/// Nothing is validated. Either field may be missing; a missing title
/// still counts as an interaction but is left out of the movie ranking.
///
/// Deserializes from any map. Unknown keys are skipped, and a field of the
/// wrong type counts as missing. A list of genres is joined with `|`.
/// Anything that is not a map is rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InteractionEvent {
    pub title: Option<String>,
    /// Delimiter-joined genre string, e.g. "Action|Sci-Fi"
    pub genres: Option<String>,
}

impl InteractionEvent {
    pub fn new(title: impl Into<String>, genres: Option<&str>) -> Self {
        Self {
            title: Some(title.into()),
            genres: genres.map(str::to_string),
        }
    }

    /// Genre tags of this event, split on `|` or `,` and trimmed
    pub fn genre_tags(&self) -> impl Iterator<Item = &str> {
        self.genres
            .as_deref()
            .unwrap_or("")
            .split(['|', ','])
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
    }
}

/// A field value of whatever shape the client sent
#[derive(Deserialize)]
#[serde(untagged)]
enum LooseField {
    Text(String),
    List(Vec<LooseField>),
    Other(IgnoredAny),
}

impl LooseField {
    fn into_text(self) -> Option<String> {
        match self {
            LooseField::Text(text) => Some(text),
            _ => None,
        }
    }

    fn into_genres(self) -> Option<String> {
        match self {
            LooseField::Text(text) => Some(text),
            LooseField::List(items) => {
                let tags: Vec<String> = items.into_iter().filter_map(LooseField::into_text).collect();
                Some(tags.join("|"))
            }
            LooseField::Other(_) => None,
        }
    }
}

struct EventVisitor;

impl<'de> Visitor<'de> for EventVisitor {
    type Value = InteractionEvent;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an interaction object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut event = InteractionEvent::default();

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "title" => {
                    event.title = map.next_value::<Option<LooseField>>()?.and_then(LooseField::into_text);
                }
                "genres" => {
                    event.genres = map.next_value::<Option<LooseField>>()?.and_then(LooseField::into_genres);
                }
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        Ok(event)
    }
}

impl<'de> Deserialize<'de> for InteractionEvent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(EventVisitor)
    }
}

/// One row of a ranking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub name: String,
    pub count: usize,
}

impl RankedEntry {
    pub fn new(name: impl Into<String>, count: usize) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

/// Rankings computed from the whole log at read time
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsSnapshot {
    /// At most 5 titles, most viewed first
    pub top_movies: Vec<RankedEntry>,
    /// At most 5 genres, most viewed first
    pub top_genres: Vec<RankedEntry>,
    pub total_interactions: usize,
}
