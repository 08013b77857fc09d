//! Speech Synthesis Port
//!
//! The host's text-to-speech capability, injected into the simulator.
//! Implementations wrap whatever the platform offers; the simulator only
//! ever enumerates voices, cancels, and asks for playback.

/// A synthesis voice offered by the host
#[derive(Debug, Clone, PartialEq)]
pub struct Voice {
    /// Display name, e.g. "Yuna"
    pub name: String,
    /// BCP 47 locale tag, e.g. "ko-KR"
    pub lang: String,
    /// Host marks this as its default voice
    pub default: bool,
    /// Installed locally rather than cloud-backed
    pub local_service: bool,
}

impl Voice {
    pub fn new(name: impl Into<String>, lang: impl Into<String>) -> Self {
        Self { name: name.into(), lang: lang.into(), default: false, local_service: false }
    }

    pub fn with_default(mut self, default: bool) -> Self {
        self.default = default;
        self
    }

    pub fn with_local_service(mut self, local: bool) -> Self {
        self.local_service = local;
        self
    }
}

/// One playback request
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub lang: String,
    pub rate: f32,
    /// `None` lets the engine pick its own default voice
    pub voice: Option<Voice>,
}

/// Speech engine failure at the host boundary
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpeechError {
    #[error("speech synthesis is not available")]
    Unavailable,

    #[error("failed to enumerate voices: {0}")]
    Enumeration(String),

    #[error("playback failed: {0}")]
    Playback(String),
}

/// Host speech synthesis capability
pub trait SpeechSynthesis {
    /// Whether the host has a speech engine at all
    fn is_available(&self) -> bool {
        true
    }

    /// Currently installed voices; may be empty while the host is still loading
    fn voices(&self) -> Result<Vec<Voice>, SpeechError>;

    /// Queue an utterance for playback
    fn speak(&mut self, utterance: Utterance) -> Result<(), SpeechError>;

    /// Drop every queued and playing utterance
    fn cancel(&mut self);
}

/// Speech port for hosts without synthesis
#[derive(Debug, Default)]
pub struct NullSynthesis;

impl NullSynthesis {
    pub fn new() -> Self { Self }
}

impl SpeechSynthesis for NullSynthesis {
    fn is_available(&self) -> bool { false }
    fn voices(&self) -> Result<Vec<Voice>, SpeechError> { Err(SpeechError::Unavailable) }
    fn speak(&mut self, _utterance: Utterance) -> Result<(), SpeechError> { Err(SpeechError::Unavailable) }
    fn cancel(&mut self) {}
}
