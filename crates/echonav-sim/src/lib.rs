//! echonav Simulator Host
//!
//! Runs the screen-reader simulator against a real DOM.
//!
//! # Features
//! - `ElementHost` adapter over echonav-dom documents
//! - Console speech synthesis with a replayable voice list
//! - The gift mission screen
//! - Script replay of keyboard, touch, voice and timer events
//! - Command-line interface for the replay binary

pub mod cli;
pub mod console_speech;
pub mod dom_host;
pub mod driver;
pub mod mission;
pub mod script;

pub use cli::Cli;
pub use console_speech::ConsoleSpeech;
pub use dom_host::DomHost;
pub use driver::{MissionDriver, StepReport};
pub use mission::{MissionEvent, MissionScreen, DEFAULT_GIFTS};
pub use script::{parse_script, ScriptCommand, ScriptError};
