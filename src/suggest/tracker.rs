use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::Utc;
use serde::Serialize;

/// Fire-and-forget sink for typed search queries.
///
/// No return contract: a sink that cannot record an event drops it silently.
/// A broken analytics hookup must never break the search experience.
pub trait QueryTracker {
    fn track(&mut self, query: &str);
}

/// Gate shared by every sink: only queries longer than `threshold` characters
/// are reported, to keep one- and two-character noise out.
pub fn should_track(query: &str, threshold: usize) -> bool {
    query.chars().count() > threshold
}

/// Default sink: a structured log line per query.
pub struct LogTracker;

impl QueryTracker for LogTracker {
    fn track(&mut self, query: &str) {
        log::info!(target: "docq::track", "search query tracked: {query}");
    }
}

/// Sink used when tracking is disabled.
pub struct NullTracker;

impl QueryTracker for NullTracker {
    fn track(&mut self, _query: &str) {}
}

#[derive(Serialize)]
struct QueryEvent<'a> {
    timestamp: String,
    query: &'a str,
}

/// Appends one timestamped JSON record per query to a file.
pub struct JsonlTracker {
    writer: BufWriter<std::fs::File>,
}

impl JsonlTracker {
    pub fn create(path: &Path) -> std::io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }
}

impl QueryTracker for JsonlTracker {
    fn track(&mut self, query: &str) {
        let event = QueryEvent {
            timestamp: Utc::now().to_rfc3339(),
            query,
        };

        if let Ok(line) = serde_json::to_string(&event) {
            let _ = writeln!(self.writer, "{line}");
            let _ = self.writer.flush();
        }
    }
}

/// Test sink recording every tracked query, shareable with the app under test.
#[cfg(test)]
#[derive(Clone, Default)]
pub struct RecordingTracker {
    queries: std::rc::Rc<std::cell::RefCell<Vec<String>>>,
}

#[cfg(test)]
impl RecordingTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.borrow().clone()
    }
}

#[cfg(test)]
impl QueryTracker for RecordingTracker {
    fn track(&mut self, query: &str) {
        self.queries.borrow_mut().push(query.to_string());
    }
}

#[cfg(test)]
#[path = "tracker_tests.rs"]
mod tracker_tests;
