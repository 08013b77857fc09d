//! Live Status Region
//!
//! Assertive, transient status messages ("sending...", "pick a gift first").
//! A message stays readable until its fire-once clear timer elapses.

/// A status message and the time it clears
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub posted_ms: u64,
    pub clear_at_ms: u64,
}

/// Single-slot live region; a new message replaces the old one and its timer
#[derive(Debug, Clone, Default)]
pub struct StatusRegion {
    current: Option<StatusMessage>,
}

impl StatusRegion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn post(&mut self, text: impl Into<String>, now_ms: u64, duration_ms: u64) -> &StatusMessage {
        self.current.insert(StatusMessage {
            text: text.into(),
            posted_ms: now_ms,
            clear_at_ms: now_ms.saturating_add(duration_ms),
        })
    }

    /// Fire the clear timer if due; returns the cleared message
    pub fn tick(&mut self, now_ms: u64) -> Option<StatusMessage> {
        if self.current.as_ref().is_some_and(|m| now_ms >= m.clear_at_ms) {
            return self.current.take();
        }
        None
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_ref().map(|m| m.text.as_str())
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}
