//! Simulator Configuration

use serde::{Deserialize, Serialize};

use crate::keyboard_nav::KeyBindings;
use crate::A11yError;

/// Simulator configuration options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Target locale tag for utterances and voice matching
    pub locale: String,

    /// Speaking rate passed to every utterance
    pub speech_rate: f32,

    /// Localized proper names of the preferred iOS voice, native script first
    pub preferred_voices: Vec<String>,

    /// Minimum horizontal travel (px) for a swipe
    pub swipe_threshold: f64,

    /// Maximum gap between two taps of a double tap
    pub double_tap_window_ms: u64,

    /// How long a transient status message stays readable
    pub status_duration_ms: u64,

    /// Joins the state, label and role of an announcement
    pub separator: String,

    /// Spoken words for roles and states
    pub phrases: Phrasebook,

    /// Key identifier to command mapping
    pub key_bindings: KeyBindings,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            locale: "ko-KR".to_string(),
            speech_rate: 1.2,
            preferred_voices: vec!["유나".to_string(), "Yuna".to_string()],
            swipe_threshold: 30.0,
            double_tap_window_ms: 300,
            status_duration_ms: 2000,
            separator: ", ".to_string(),
            phrases: Phrasebook::default(),
            key_bindings: KeyBindings::default(),
        }
    }
}

impl SimulatorConfig {
    /// Parse a JSON document; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, A11yError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the engine cannot work with
    pub fn validate(&self) -> Result<(), A11yError> {
        if self.locale.trim().is_empty() {
            return Err(A11yError::InvalidConfig("locale must not be empty".into()));
        }
        if !(self.speech_rate.is_finite() && self.speech_rate > 0.0) {
            return Err(A11yError::InvalidConfig(format!("speech_rate {} is not positive", self.speech_rate)));
        }
        if !(self.swipe_threshold.is_finite() && self.swipe_threshold >= 0.0) {
            return Err(A11yError::InvalidConfig(format!("swipe_threshold {} is negative", self.swipe_threshold)));
        }
        Ok(())
    }
}

/// Role and state vocabulary for the target locale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Phrasebook {
    pub button: String,
    pub link: String,
    pub radio: String,
    pub checked: String,
    /// Empty by default: an unchecked radio announces no state
    pub unchecked: String,
}

impl Default for Phrasebook {
    fn default() -> Self {
        Self {
            button: "버튼".to_string(),
            link: "링크".to_string(),
            radio: "라디오 버튼".to_string(),
            checked: "선택됨".to_string(),
            unchecked: String::new(),
        }
    }
}
