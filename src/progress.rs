// src/progress.rs
use tracing::info;

/// Lightweight progress reporting used by long-running operations (builds, batch tools).
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one file has been written. `rel` is relative to the public dir.
    fn item_done(&mut self, _rel: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Forwards every event to `tracing` at info level.
#[derive(Default)]
pub struct LogProgress {
    total: usize,
    done: usize,
}

impl Progress for LogProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
    }

    fn log(&mut self, msg: &str) {
        info!("{}", msg);
    }

    fn item_done(&mut self, rel: &str) {
        self.done += 1;
        info!("Generated: {}", rel);
    }

    fn finish(&mut self) {
        tracing::debug!(done = self.done, total = self.total, "progress finished");
    }
}

/// Test helper / GUI-style sink that just records what it saw.
#[derive(Default, Debug)]
pub struct RecordingProgress {
    pub total: Option<usize>,
    pub lines: Vec<String>,
    pub items: Vec<String>,
    pub finished: bool,
}

impl Progress for RecordingProgress {
    fn begin(&mut self, total: usize) { self.total = Some(total); }
    fn log(&mut self, msg: &str) { self.lines.push(s!(msg)); }
    fn item_done(&mut self, rel: &str) { self.items.push(s!(rel)); }
    fn finish(&mut self) { self.finished = true; }
}
