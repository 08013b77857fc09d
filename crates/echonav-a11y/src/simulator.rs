//! Screen Reader Simulator
//!
//! Owns the per-lifetime voice state and, while active, one navigation
//! session. Keyboard and touch handlers both end in [`ScreenReaderSimulator::dispatch`],
//! the single place where focus changes.

use std::fmt::Debug;

use crate::config::SimulatorConfig;
use crate::focus::{FocusNavigator, NavOutcome};
use crate::gesture::{GestureTranslator, TouchPoint};
use crate::host::ElementHost;
use crate::keyboard_nav::{KeyHandling, NavCommand};
use crate::live_region::{StatusMessage, StatusRegion};
use crate::platform::{HostInfo, Platform};
use crate::scanner::{ElementScanner, FocusableElement};
use crate::screen_reader::Announcer;
use crate::speech::{SpeechSynthesis, Voice};
use crate::voice::{VoiceResolver, VoiceUpdate};

/// State that exists only between activation and deactivation
#[derive(Debug)]
struct Session<N> {
    navigator: FocusNavigator<N>,
    gestures: GestureTranslator,
}

/// Screen-reader navigation engine
#[derive(Debug)]
pub struct ScreenReaderSimulator<S, N> {
    config: SimulatorConfig,
    announcer: Announcer<S>,
    voices: VoiceResolver,
    status: StatusRegion,
    session: Option<Session<N>>,
}

impl<S, N> ScreenReaderSimulator<S, N>
where
    S: SpeechSynthesis,
    N: Clone + PartialEq + Debug,
{
    /// Detect the platform from host strings and load voices
    pub fn new(config: SimulatorConfig, host: &HostInfo, synth: S) -> Self {
        Self::with_platform(config, Platform::detect(host), synth)
    }

    pub fn with_platform(config: SimulatorConfig, platform: Platform, synth: S) -> Self {
        let voices = VoiceResolver::new(platform, config.locale.clone(), config.preferred_voices.clone());
        let announcer = Announcer::new(synth, &config);
        let mut simulator = Self {
            config,
            announcer,
            voices,
            status: StatusRegion::new(),
            session: None,
        };
        tracing::debug!("Screen reader simulator on {:?}", platform);
        simulator.on_voices_changed();
        simulator
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    pub fn platform(&self) -> Platform {
        self.voices.platform()
    }

    /// Resolved voice; `None` lets the engine use its own default
    pub fn voice(&self) -> Option<&Voice> {
        self.voices.voice()
    }

    /// Host callback: the voice list changed (also run once at construction)
    pub fn on_voices_changed(&mut self) -> VoiceUpdate {
        let synth = self.announcer.synth();
        if !synth.is_available() {
            tracing::debug!("Speech synthesis unavailable, no voices to load");
            return VoiceUpdate::Empty;
        }
        match synth.voices() {
            Ok(list) => self.voices.update(&list),
            Err(e) => {
                tracing::error!("Failed to load voices: {}", e);
                VoiceUpdate::Empty
            }
        }
    }

    /// Activation contract: attach on false→true, detach on true→false
    pub fn set_active<H>(&mut self, host: &H, container: Option<&N>, active: bool)
    where
        H: ElementHost<Node = N>,
    {
        if active {
            self.activate(host, container);
        } else {
            self.deactivate();
        }
    }

    /// Scan `container` and start an idle session. No-op while already active.
    pub fn activate<H>(&mut self, host: &H, container: Option<&N>)
    where
        H: ElementHost<Node = N>,
    {
        if self.session.is_some() {
            return;
        }
        let elements = ElementScanner::scan(host, container);
        tracing::debug!("Simulator activated with {} elements", elements.len());
        self.session = Some(Session {
            navigator: FocusNavigator::new(elements),
            gestures: GestureTranslator::new(self.config.swipe_threshold, self.config.double_tap_window_ms),
        });
    }

    /// Drop the session and silence speech. Idempotent.
    pub fn deactivate(&mut self) {
        if self.session.take().is_none() {
            return;
        }
        self.announcer.cancel();
        self.status.clear();
        tracing::debug!("Simulator deactivated");
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Elements of the current session
    pub fn elements(&self) -> &[FocusableElement<N>] {
        self.session.as_ref().map(|s| s.navigator.elements()).unwrap_or(&[])
    }

    /// Focused index, `None` while idle or inactive
    pub fn current_index(&self) -> Option<usize> {
        self.session.as_ref().and_then(|s| s.navigator.current_index())
    }

    pub fn focused(&self) -> Option<&FocusableElement<N>> {
        self.session.as_ref().and_then(|s| s.navigator.current())
    }

    /// Host key-down callback
    pub fn handle_key<H>(&mut self, host: &mut H, key: &str) -> KeyHandling
    where
        H: ElementHost<Node = N>,
    {
        let Some(session) = self.session.as_ref() else {
            return KeyHandling::Ignored;
        };
        if session.navigator.is_empty() {
            return KeyHandling::Ignored;
        }
        match self.config.key_bindings.get_command(key) {
            Some(command) => {
                self.dispatch(host, command);
                KeyHandling::Consumed(command)
            }
            None => KeyHandling::Ignored,
        }
    }

    /// Host touch-start callback
    pub fn touch_start(&mut self, point: TouchPoint) {
        if let Some(session) = self.session.as_mut() {
            session.gestures.touch_start(point);
        }
    }

    /// Host touch-end callback; returns the command the gesture produced
    pub fn touch_end<H>(&mut self, host: &mut H, point: TouchPoint, timestamp_ms: u64) -> Option<NavCommand>
    where
        H: ElementHost<Node = N>,
    {
        let session = self.session.as_mut()?;
        let gesture = session.gestures.touch_end(point, timestamp_ms);
        let command = gesture.command()?;
        tracing::debug!("{:?} → {}", gesture, command.label());
        self.dispatch(host, command);
        Some(command)
    }

    /// Apply one command: move and announce, or activate the focused element
    pub fn dispatch<H>(&mut self, host: &mut H, command: NavCommand) -> NavOutcome
    where
        H: ElementHost<Node = N>,
    {
        let Some(session) = self.session.as_mut() else {
            return NavOutcome::Ignored;
        };

        let outcome = session.navigator.apply(command);
        match outcome {
            NavOutcome::Moved(index) => {
                if let Some(element) = session.navigator.get_mut(index) {
                    ElementScanner::refresh(&*host, element);
                    self.announcer.announce(element, self.voices.voice());
                }
            }
            NavOutcome::Activate(index) => {
                if let Some(element) = session.navigator.elements().get(index) {
                    tracing::debug!("Activating {:?} \"{}\"", element.role, element.label);
                    host.click(&element.node);
                }
            }
            NavOutcome::Ignored => {
                tracing::debug!("Ignored {} (nothing focused or no elements)", command.label());
            }
        }
        outcome
    }

    /// Speak a transient status message and keep it until its timer fires
    pub fn announce_status(&mut self, text: &str, now_ms: u64) {
        self.announce_status_for(text, now_ms, self.config.status_duration_ms);
    }

    /// [`Self::announce_status`] with an explicit lifetime
    pub fn announce_status_for(&mut self, text: &str, now_ms: u64, duration_ms: u64) {
        self.status.post(text, now_ms, duration_ms);
        self.announcer.speak(text, self.voices.voice());
    }

    /// Advance timers; returns a status message that just cleared
    pub fn tick(&mut self, now_ms: u64) -> Option<StatusMessage> {
        self.status.tick(now_ms)
    }

    pub fn status(&self) -> Option<&str> {
        self.status.current()
    }

    pub fn announcer(&self) -> &Announcer<S> {
        &self.announcer
    }

    /// Direct access to the speech port, e.g. for host-side playback callbacks
    pub fn speech_mut(&mut self) -> &mut S {
        self.announcer.synth_mut()
    }
}
