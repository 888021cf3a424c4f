//! Log capture for asserting on `tracing` output in tests.
//!
//! Capture is scoped to the calling thread via
//! [`tracing::subscriber::with_default`], so parallel tests do not see each
//! other's events. Events emitted from rayon workers are not captured.

use std::sync::{Arc, Mutex};

use tracing::Level;
use tracing::field::{Field, Visit};
use tracing_subscriber::layer::Context;
use tracing_subscriber::prelude::*;

/// A captured log entry.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: Level,
    pub target: String,
    pub message: String,
    pub fields: Vec<(String, String)>,
}

impl LogEntry {
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Entries captured while running a closure.
#[derive(Debug, Default, Clone)]
pub struct LogCapture {
    entries: Vec<LogEntry>,
}

impl LogCapture {
    /// Run `op` with a capturing subscriber installed on this thread.
    pub fn run<R>(op: impl FnOnce() -> R) -> (R, Self) {
        let storage = Arc::new(Mutex::new(Vec::new()));
        let subscriber = tracing_subscriber::registry().with(CaptureLayer {
            storage: Arc::clone(&storage),
        });
        let result = tracing::subscriber::with_default(subscriber, op);
        let entries = storage.lock().map(|e| e.clone()).unwrap_or_default();
        (result, Self { entries })
    }

    #[must_use]
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    #[must_use]
    pub fn contains(&self, target: &str, message: &str) -> bool {
        self.entries
            .iter()
            .any(|e| e.target == target && e.message.contains(message))
    }

    #[must_use]
    pub fn at_level(&self, level: Level) -> Vec<&LogEntry> {
        self.entries.iter().filter(|e| e.level == level).collect()
    }

    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.at_level(Level::WARN).is_empty()
    }
}

struct CaptureLayer {
    storage: Arc<Mutex<Vec<LogEntry>>>,
}

impl<S> tracing_subscriber::Layer<S> for CaptureLayer
where
    S: tracing::Subscriber,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let mut visitor = EntryVisitor::default();
        event.record(&mut visitor);

        let entry = LogEntry {
            level: *metadata.level(),
            target: metadata.target().to_string(),
            message: visitor.message,
            fields: visitor.fields,
        };
        if let Ok(mut storage) = self.storage.lock() {
            storage.push(entry);
        }
    }
}

#[derive(Default)]
struct EntryVisitor {
    message: String,
    fields: Vec<(String, String)>,
}

impl Visit for EntryVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields.push((field.name().to_string(), value.to_string()));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let value = format!("{value:?}");
        if field.name() == "message" {
            self.message = value;
        } else {
            self.fields.push((field.name().to_string(), value));
        }
    }
}
