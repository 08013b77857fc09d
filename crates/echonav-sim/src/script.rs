//! Input Scripts
//!
//! Line-oriented scripts that replay host events through the simulator.
//!
//! ```text
//! # comment
//! voice Yuna ko-KR local      install a voice (flags: default, local)
//! voices                      report that the voice list changed
//! activate | deactivate
//! key ArrowRight
//! swipe left 1200             swipe left/right ending at t=1200 ms
//! tap 1500                    single tap at t=1500 ms
//! touch 10 0 60 5 1800        raw touch: start x y, end x y, t
//! tick 4000                   advance the clock to t=4000 ms
//! ```

use echonav_a11y::{TouchPoint, Voice};

/// Horizontal travel of a scripted swipe
const SWIPE_DISTANCE: f64 = 100.0;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("line {line}: {message}")]
pub struct ScriptError {
    pub line: usize,
    pub message: String,
}

/// One host event
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptCommand {
    InstallVoice(Voice),
    VoicesChanged,
    Activate,
    Deactivate,
    Key(String),
    Touch { start: TouchPoint, end: TouchPoint, at_ms: u64 },
    Tick(u64),
}

/// Parse a whole script; blank lines and `#` comments are skipped
pub fn parse_script(source: &str) -> Result<Vec<ScriptCommand>, ScriptError> {
    source.lines()
        .enumerate()
        .filter_map(|(i, line)| {
            let line = line.split('#').next().unwrap_or("").trim();
            (!line.is_empty()).then(|| parse_line(line).map_err(|message| ScriptError { line: i + 1, message }))
        })
        .collect()
}

fn parse_line(line: &str) -> Result<ScriptCommand, String> {
    let mut words = line.split_whitespace();
    let verb = words.next().unwrap_or_default();
    let args: Vec<&str> = words.collect();

    let command = match (verb, args.as_slice()) {
        ("voice", [name, lang, flags @ ..]) => {
            let mut voice = Voice::new(*name, *lang);
            for flag in flags {
                match *flag {
                    "default" => voice.default = true,
                    "local" => voice.local_service = true,
                    other => return Err(format!("unknown voice flag '{}'", other)),
                }
            }
            ScriptCommand::InstallVoice(voice)
        }
        ("voices", []) => ScriptCommand::VoicesChanged,
        ("activate", []) => ScriptCommand::Activate,
        ("deactivate", []) => ScriptCommand::Deactivate,
        ("key", [key]) => ScriptCommand::Key(key.to_string()),
        ("swipe", [direction, at]) => {
            let dx = match *direction {
                "left" => -SWIPE_DISTANCE,
                "right" => SWIPE_DISTANCE,
                other => return Err(format!("unknown swipe direction '{}'", other)),
            };
            let start = TouchPoint::new(200.0, 400.0);
            ScriptCommand::Touch { start, end: TouchPoint::new(start.x + dx, start.y), at_ms: number(at)? }
        }
        ("tap", [at]) => {
            let point = TouchPoint::new(200.0, 400.0);
            ScriptCommand::Touch { start: point, end: point, at_ms: number(at)? }
        }
        ("touch", [x0, y0, x1, y1, at]) => ScriptCommand::Touch {
            start: TouchPoint::new(coordinate(x0)?, coordinate(y0)?),
            end: TouchPoint::new(coordinate(x1)?, coordinate(y1)?),
            at_ms: number(at)?,
        },
        ("tick", [at]) => ScriptCommand::Tick(number(at)?),
        _ => return Err(format!("cannot parse '{}'", line)),
    };
    Ok(command)
}

fn number(word: &str) -> Result<u64, String> {
    word.parse().map_err(|_| format!("expected a timestamp, got '{}'", word))
}

fn coordinate(word: &str) -> Result<f64, String> {
    word.parse().map_err(|_| format!("expected a coordinate, got '{}'", word))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_script() {
        let script = "\
            # warm up
            voice 유나 ko-KR default local
            voices

            activate
            key ArrowRight   # first element
            swipe left 1000
            tap 1200
            tick 3000
        ";
        let commands = parse_script(script).unwrap();
        assert_eq!(commands.len(), 7);
        assert_eq!(
            commands[0],
            ScriptCommand::InstallVoice(Voice::new("유나", "ko-KR").with_default(true).with_local_service(true))
        );
        assert_eq!(commands[3], ScriptCommand::Key("ArrowRight".into()));
        match &commands[4] {
            ScriptCommand::Touch { start, end, at_ms } => {
                assert_eq!(end.x - start.x, -SWIPE_DISTANCE);
                assert_eq!(*at_ms, 1000);
            }
            other => panic!("expected touch, got {:?}", other),
        }
        assert_eq!(commands[6], ScriptCommand::Tick(3000));
    }

    #[test]
    fn test_raw_touch() {
        let commands = parse_script("touch 10 0 60.5 5 1800").unwrap();
        assert_eq!(commands, vec![ScriptCommand::Touch {
            start: TouchPoint::new(10.0, 0.0),
            end: TouchPoint::new(60.5, 5.0),
            at_ms: 1800,
        }]);
    }

    #[test]
    fn test_errors_carry_line_numbers() {
        let err = parse_script("activate\nswipe up 10").unwrap_err();
        assert_eq!(err.line, 2);
        assert!(err.message.contains("up"));

        assert_eq!(parse_script("key").unwrap_err().line, 1);
        assert!(parse_script("tick soon").is_err());
        assert!(parse_script("voice Yuna ko-KR loud").is_err());
    }
}
