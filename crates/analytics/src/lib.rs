//! # Analytics Crate
//!
//! Usage analytics over an in-memory interaction log.
//!
//! - **types**: `InteractionEvent`, `AnalyticsSnapshot`, `RankedEntry`
//! - **log**: `InteractionLog`, the lock-guarded append-only log
//! - **ranking**: frequency counting with first-occurrence tie-break
//!
//! ```ignore
//! use analytics::{InteractionEvent, InteractionLog};
//!
//! let log = InteractionLog::new();
//! log.log_event(InteractionEvent::new("Inception", Some("Action|Sci-Fi")));
//!
//! let snapshot = log.snapshot();
//! assert_eq!(snapshot.total_interactions, 1);
//! ```

pub mod log;
pub mod ranking;
pub mod types;

pub use log::InteractionLog;
pub use ranking::{Ranking, TOP_K};
pub use types::{AnalyticsSnapshot, InteractionEvent, RankedEntry};
