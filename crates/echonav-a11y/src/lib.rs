//! echonav Accessibility
//!
//! Screen-reader navigation simulator. Turns keyboard and touch input into
//! sequential, spoken navigation over the interactive elements of a host
//! container, without an assistive technology installed.
//!
//! Features:
//! - Platform detection (iOS-like vs. other) for voice selection
//! - Voice resolution with a deterministic fallback chain
//! - Element scanning (links, buttons, radio inputs) with label resolution
//! - Swipe and double-tap gestures
//! - Circular focus navigation with a single mutation point
//! - Cancel-before-speak announcements and a transient status region
//!
//! The host is reached only through [`ElementHost`] and [`SpeechSynthesis`].

pub mod config;
pub mod focus;
pub mod gesture;
pub mod host;
pub mod keyboard_nav;
pub mod live_region;
pub mod platform;
pub mod scanner;
pub mod screen_reader;
pub mod simulator;
pub mod speech;
pub mod voice;

pub use config::{SimulatorConfig, Phrasebook};
pub use focus::{FocusNavigator, NavOutcome};
pub use gesture::{GestureTranslator, Gesture, TouchPoint};
pub use host::ElementHost;
pub use keyboard_nav::{KeyBindings, KeyHandling, NavCommand};
pub use live_region::{StatusRegion, StatusMessage};
pub use platform::{HostInfo, Platform};
pub use scanner::{ElementScanner, FocusableElement, ElementRole, ElementState};
pub use screen_reader::{Announcer, compose_announcement};
pub use simulator::ScreenReaderSimulator;
pub use speech::{SpeechSynthesis, SpeechError, Utterance, Voice, NullSynthesis};
pub use voice::{VoiceResolver, VoiceUpdate};

/// Accessibility error
#[derive(Debug, thiserror::Error)]
pub enum A11yError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Configuration parse error: {0}")]
    Config(#[from] serde_json::Error),
}
