//! Append-only interaction log and the aggregation over it.
//!
//! The log lives only in memory and is gone after a restart. A single
//! `RwLock` orders appends against each other and against snapshots, so a
//! snapshot always sees whole events.

use crate::ranking::{Ranking, TOP_K};
use crate::types::{AnalyticsSnapshot, InteractionEvent};
use parking_lot::RwLock;
use tracing::debug;

/// Thread-safe, append-only log of interaction events
#[derive(Debug, Default)]
pub struct InteractionLog {
    events: RwLock<Vec<InteractionEvent>>,
}

impl InteractionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event. Never rejects anything.
    pub fn log_event(&self, event: InteractionEvent) {
        let mut events = self.events.write();
        events.push(event);
        debug!("Logged interaction #{}", events.len());
    }

    /// Number of events logged so far
    pub fn len(&self) -> usize {
        self.events.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.read().is_empty()
    }

    /// Compute rankings from the full log
    pub fn snapshot(&self) -> AnalyticsSnapshot {
        let events = self.events.read();
        if events.is_empty() {
            return AnalyticsSnapshot::default();
        }

        let mut movies = Ranking::new();
        let mut genres = Ranking::new();

        for event in events.iter() {
            if let Some(title) = event.title.as_deref() {
                movies.record(title);
            }
            for tag in event.genre_tags() {
                genres.record(tag);
            }
        }

        debug!(
            "Snapshot over {} events: {} titles, {} genres",
            events.len(),
            movies.distinct(),
            genres.distinct()
        );

        AnalyticsSnapshot {
            top_movies: movies.top(TOP_K),
            top_genres: genres.top(TOP_K),
            total_interactions: events.len(),
        }
    }
}
