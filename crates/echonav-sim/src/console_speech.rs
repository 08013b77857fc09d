//! Console Speech
//!
//! A [`SpeechSynthesis`] that "plays" utterances by logging them and,
//! optionally, printing them to stdout. Voices are whatever the driver
//! installs, so voice loading can be replayed from a script.

use echonav_a11y::{SpeechError, SpeechSynthesis, Utterance, Voice};

#[derive(Debug, Default)]
pub struct ConsoleSpeech {
    voices: Vec<Voice>,
    echo: bool,
    playing: Option<Utterance>,
    transcript: Vec<Utterance>,
    interrupted: usize,
}

impl ConsoleSpeech {
    pub fn new() -> Self {
        Self::default()
    }

    /// Print every utterance to stdout as it starts
    pub fn echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Install a voice; the simulator must be told via `on_voices_changed`
    pub fn install_voice(&mut self, voice: Voice) {
        self.voices.push(voice);
    }

    /// Every utterance handed to the engine, oldest first
    pub fn transcript(&self) -> &[Utterance] {
        &self.transcript
    }

    /// Utterances cut off by a later cancel
    pub fn interrupted(&self) -> usize {
        self.interrupted
    }

    /// Playback finished on its own
    pub fn finish(&mut self) {
        self.playing = None;
    }
}

impl SpeechSynthesis for ConsoleSpeech {
    fn voices(&self) -> Result<Vec<Voice>, SpeechError> {
        Ok(self.voices.clone())
    }

    fn speak(&mut self, utterance: Utterance) -> Result<(), SpeechError> {
        let voice = utterance.voice.as_ref().map_or("default", |v| v.name.as_str());
        tracing::info!(target: "speech", "[{} @{}x {}] {}", utterance.lang, utterance.rate, voice, utterance.text);
        if self.echo {
            println!("🔊 {}", utterance.text);
        }
        self.playing = Some(utterance.clone());
        self.transcript.push(utterance);
        Ok(())
    }

    fn cancel(&mut self) {
        if self.playing.take().is_some() {
            self.interrupted += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utterance(text: &str) -> Utterance {
        Utterance { text: text.into(), lang: "ko-KR".into(), rate: 1.2, voice: None }
    }

    #[test]
    fn test_cancel_interrupts_playing() {
        let mut speech = ConsoleSpeech::new();
        speech.cancel();
        assert_eq!(speech.interrupted(), 0);

        speech.speak(utterance("하나")).unwrap();
        speech.cancel();
        speech.speak(utterance("둘")).unwrap();
        speech.finish();
        speech.cancel();

        assert_eq!(speech.interrupted(), 1);
        assert_eq!(speech.transcript().len(), 2);
    }

    #[test]
    fn test_installed_voices() {
        let mut speech = ConsoleSpeech::new();
        assert!(speech.voices().unwrap().is_empty());
        speech.install_voice(Voice::new("Yuna", "ko-KR"));
        assert_eq!(speech.voices().unwrap().len(), 1);
    }
}
