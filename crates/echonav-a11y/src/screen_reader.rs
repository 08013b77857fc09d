//! Screen Reader Announcer
//!
//! Turns an element description into speech. At most one utterance is ever
//! alive: every request cancels whatever the engine is still saying.

use crate::config::{Phrasebook, SimulatorConfig};
use crate::scanner::FocusableElement;
use crate::speech::{SpeechSynthesis, Utterance, Voice};

/// Join the non-empty parts of `state, label, role` in that order
pub fn compose_announcement(state: &str, label: &str, role: &str, separator: &str) -> String {
    [state, label, role]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Sole owner of the speech engine
#[derive(Debug)]
pub struct Announcer<S> {
    synth: S,
    locale: String,
    rate: f32,
    separator: String,
    phrases: Phrasebook,
    last_spoken: Option<String>,
}

impl<S: SpeechSynthesis> Announcer<S> {
    pub fn new(synth: S, config: &SimulatorConfig) -> Self {
        Self {
            synth,
            locale: config.locale.clone(),
            rate: config.speech_rate,
            separator: config.separator.clone(),
            phrases: config.phrases.clone(),
            last_spoken: None,
        }
    }

    /// Spoken text for an element
    pub fn describe<N>(&self, element: &FocusableElement<N>) -> String {
        compose_announcement(
            element.state.phrase(&self.phrases),
            &element.label,
            element.role.phrase(&self.phrases),
            &self.separator,
        )
    }

    /// Announce an element; returns whether playback was requested
    pub fn announce<N>(&mut self, element: &FocusableElement<N>, voice: Option<&Voice>) -> bool {
        let text = self.describe(element);
        self.speak(&text, voice)
    }

    /// Cancel, then speak `text`. Failures are logged and swallowed.
    pub fn speak(&mut self, text: &str, voice: Option<&Voice>) -> bool {
        if text.is_empty() {
            return false;
        }
        if !self.synth.is_available() {
            tracing::debug!("Speech synthesis unavailable, dropping \"{}\"", text);
            return false;
        }

        self.synth.cancel();
        let utterance = Utterance {
            text: text.to_string(),
            lang: self.locale.clone(),
            rate: self.rate,
            voice: voice.cloned(),
        };

        match self.synth.speak(utterance) {
            Ok(()) => {
                self.last_spoken = Some(text.to_string());
                true
            }
            Err(e) => {
                tracing::error!("Speech playback failed: {}", e);
                false
            }
        }
    }

    /// Silence any queued or playing utterance
    pub fn cancel(&mut self) {
        self.synth.cancel();
    }

    /// Text of the last utterance handed to the engine
    pub fn last_spoken(&self) -> Option<&str> {
        self.last_spoken.as_deref()
    }

    pub fn synth(&self) -> &S {
        &self.synth
    }

    pub fn synth_mut(&mut self) -> &mut S {
        &mut self.synth
    }
}
