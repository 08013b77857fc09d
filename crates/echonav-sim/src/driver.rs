//! Mission Driver
//!
//! Wires the simulator to the mission screen and plays host events into both.

use echonav_a11y::{HostInfo, KeyHandling, ScreenReaderSimulator, SimulatorConfig};
use echonav_dom::{DomResult, NodeId};

use crate::console_speech::ConsoleSpeech;
use crate::mission::{MissionEvent, MissionScreen, SELECT_FIRST, START_HINT, START_HINT_MS};
use crate::script::ScriptCommand;

/// What one script command caused
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StepReport {
    /// The host should suppress the key's default action
    pub prevent_default: bool,
    pub events: Vec<MissionEvent>,
    /// Status message whose timer fired during this step
    pub cleared_status: Option<String>,
}

#[derive(Debug)]
pub struct MissionDriver {
    simulator: ScreenReaderSimulator<ConsoleSpeech, NodeId>,
    screen: MissionScreen,
    clock_ms: u64,
}

impl MissionDriver {
    pub fn new(config: SimulatorConfig, host: &HostInfo, speech: ConsoleSpeech, gifts: &[&str]) -> DomResult<Self> {
        Ok(Self {
            simulator: ScreenReaderSimulator::new(config, host, speech),
            screen: MissionScreen::new(gifts)?,
            clock_ms: 0,
        })
    }

    pub fn simulator(&self) -> &ScreenReaderSimulator<ConsoleSpeech, NodeId> {
        &self.simulator
    }

    pub fn screen(&self) -> &MissionScreen {
        &self.screen
    }

    pub fn speech(&self) -> &ConsoleSpeech {
        self.simulator.announcer().synth()
    }

    pub fn clock_ms(&self) -> u64 {
        self.clock_ms
    }

    /// Activate the simulator on the mission container and speak the start hint
    pub fn activate(&mut self) {
        if self.simulator.is_active() {
            return;
        }
        let container = self.screen.container();
        self.simulator.activate(self.screen.host(), Some(&container));
        self.simulator.announce_status_for(START_HINT, self.clock_ms, START_HINT_MS);
    }

    pub fn step(&mut self, command: &ScriptCommand) -> StepReport {
        let mut report = StepReport::default();

        match command {
            ScriptCommand::InstallVoice(voice) => {
                self.simulator.speech_mut().install_voice(voice.clone());
            }
            ScriptCommand::VoicesChanged => {
                self.simulator.on_voices_changed();
            }
            ScriptCommand::Activate => self.activate(),
            ScriptCommand::Deactivate => self.simulator.deactivate(),
            ScriptCommand::Key(key) => {
                let handling = self.simulator.handle_key(self.screen.host_mut(), key);
                report.prevent_default = handling.prevent_default();
                if handling == KeyHandling::Ignored {
                    tracing::debug!("Key {} passed through to the host", key);
                }
            }
            ScriptCommand::Touch { start, end, at_ms } => {
                self.advance(*at_ms, &mut report);
                self.simulator.touch_start(*start);
                self.simulator.touch_end(self.screen.host_mut(), *end, *at_ms);
            }
            ScriptCommand::Tick(at_ms) => self.advance(*at_ms, &mut report),
        }

        report.events = self.screen.poll();
        for event in &report.events {
            if *event == MissionEvent::Submit(None) {
                self.simulator.announce_status(SELECT_FIRST, self.clock_ms);
            }
        }
        report
    }

    fn advance(&mut self, at_ms: u64, report: &mut StepReport) {
        self.clock_ms = self.clock_ms.max(at_ms);
        if let Some(message) = self.simulator.tick(self.clock_ms) {
            report.cleared_status = Some(message.text);
        }
    }
}
