//! Progress reporting.
//!
//! The preparation never logs through a global handle directly; it gets a
//! [`Reporter`] at construction. [`TracingReporter`] forwards to `tracing`.

/// Sink for progress messages.
pub trait Reporter {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
}

/// Reporter emitting `tracing` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn info(&self, message: &str) {
        tracing::info!("{}", message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!("{}", message);
    }
}

/// Level of a recorded message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
}

/// Reporter keeping every message in memory. Used by tests.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    messages: std::sync::Mutex<Vec<(Level, String)>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<(Level, String)> {
        self.messages.lock().map(|m| m.clone()).unwrap_or_default()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.messages()
            .into_iter()
            .filter(|(level, _)| *level == Level::Warn)
            .map(|(_, msg)| msg)
            .collect()
    }

    fn push(&self, level: Level, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push((level, message.to_string()));
        }
    }
}

impl Reporter for RecordingReporter {
    fn info(&self, message: &str) {
        self.push(Level::Info, message);
    }

    fn warn(&self, message: &str) {
        self.push(Level::Warn, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_reporter_keeps_order() {
        let reporter = RecordingReporter::new();
        reporter.info("one");
        reporter.warn("two");
        reporter.info("three");

        assert_eq!(
            reporter.messages(),
            vec![
                (Level::Info, "one".to_string()),
                (Level::Warn, "two".to_string()),
                (Level::Info, "three".to_string()),
            ]
        );
        assert_eq!(reporter.warnings(), vec!["two".to_string()]);
    }
}
