//! Voice Resolution
//!
//! Picks at most one synthesis voice for the target locale. The result is
//! cached for the simulator's lifetime and only recomputed when the host
//! reports that its voice list changed.

use crate::platform::Platform;
use crate::speech::Voice;

/// Outcome of one resolution attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceUpdate {
    /// A voice was selected (possibly the same as before)
    Resolved,
    /// Voices exist but none speaks the target locale; previous choice kept
    NoMatch,
    /// Host reported no voices yet; previous choice kept
    Empty,
}

/// Voice state: platform plus the cached voice
#[derive(Debug, Clone)]
pub struct VoiceResolver {
    platform: Platform,
    locale: String,
    preferred_names: Vec<String>,
    resolved: Option<Voice>,
}

impl VoiceResolver {
    pub fn new(platform: Platform, locale: impl Into<String>, preferred_names: Vec<String>) -> Self {
        Self { platform, locale: locale.into(), preferred_names, resolved: None }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Cached voice, if any attempt found one
    pub fn voice(&self) -> Option<&Voice> {
        self.resolved.as_ref()
    }

    /// Run the fallback chain over a fresh voice list and update the cache
    pub fn update(&mut self, voices: &[Voice]) -> VoiceUpdate {
        if voices.is_empty() {
            return VoiceUpdate::Empty;
        }
        match self.select(voices) {
            Some(voice) => {
                tracing::info!("Using voice '{}' ({})", voice.name, voice.lang);
                self.resolved = Some(voice.clone());
                VoiceUpdate::Resolved
            }
            None => {
                tracing::warn!("No synthesis voice available for {}", self.locale);
                VoiceUpdate::NoMatch
            }
        }
    }

    /// Pure selection: named iOS voice, then default, then local, then any
    pub fn select<'a>(&self, voices: &'a [Voice]) -> Option<&'a Voice> {
        let mut candidates = voices.iter().filter(|v| v.lang == self.locale);

        if self.platform.is_ios_like() {
            let named = self.preferred_names.iter()
                .find_map(|name| voices.iter().find(|v| v.lang == self.locale && &v.name == name));
            if named.is_some() {
                return named;
            }
        }

        candidates.clone().find(|v| v.default)
            .or_else(|| candidates.clone().find(|v| v.local_service))
            .or_else(|| candidates.next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver(platform: Platform) -> VoiceResolver {
        VoiceResolver::new(platform, "ko-KR", vec!["유나".into(), "Yuna".into()])
    }

    fn voices() -> Vec<Voice> {
        vec![
            Voice::new("Samantha", "en-US").with_default(true),
            Voice::new("Google 한국의", "ko-KR").with_default(true),
            Voice::new("Sora", "ko-KR").with_local_service(true),
            Voice::new("Yuna", "ko-KR").with_local_service(true),
        ]
    }

    #[test]
    fn test_ios_prefers_named_voice_over_default() {
        let voices = voices();
        let r = resolver(Platform::IosLike);
        assert_eq!(r.select(&voices).map(|v| v.name.as_str()), Some("Yuna"));
    }

    #[test]
    fn test_ios_native_name_before_romanized() {
        let mut voices = voices();
        voices.push(Voice::new("유나", "ko-KR"));
        let r = resolver(Platform::IosLike);
        assert_eq!(r.select(&voices).map(|v| v.name.as_str()), Some("유나"));
    }

    #[test]
    fn test_named_voice_must_match_locale() {
        let voices = vec![Voice::new("Yuna", "ja-JP"), Voice::new("Sora", "ko-KR")];
        let r = resolver(Platform::IosLike);
        assert_eq!(r.select(&voices).map(|v| v.name.as_str()), Some("Sora"));
    }

    #[test]
    fn test_other_platform_fallback_chain() {
        let r = resolver(Platform::Other);
        let voices = voices();
        assert_eq!(r.select(&voices).map(|v| v.name.as_str()), Some("Google 한국의"));

        let local_only: Vec<_> = voices.iter().filter(|v| !v.default).cloned().collect();
        assert_eq!(r.select(&local_only).map(|v| v.name.as_str()), Some("Sora"));

        let plain = vec![Voice::new("A", "en-US").with_local_service(true), Voice::new("B", "ko-KR")];
        assert_eq!(r.select(&plain).map(|v| v.name.as_str()), Some("B"));

        let none = vec![Voice::new("A", "en-US")];
        assert!(r.select(&none).is_none());
    }

    #[test]
    fn test_update_keeps_cache_on_empty_or_no_match() {
        let mut r = resolver(Platform::Other);
        assert_eq!(r.update(&voices()), VoiceUpdate::Resolved);
        assert_eq!(r.update(&[]), VoiceUpdate::Empty);
        assert_eq!(r.update(&[Voice::new("Samantha", "en-US")]), VoiceUpdate::NoMatch);
        assert_eq!(r.voice().map(|v| v.name.as_str()), Some("Google 한국의"));
    }
}
