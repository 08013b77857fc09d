//! Command-line interface for the script replay binary

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "echonav-sim")]
#[command(version, about = "Replay keyboard and touch scripts through the screen-reader simulator")]
#[command(long_about = "
Replays a line-oriented input script against the gift mission screen and
prints every utterance the simulator speaks.

The script is read from stdin when no path is given. Log verbosity follows
RUST_LOG (default: info).
")]
pub struct Cli {
    /// Path to a JSON simulator config
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Host user agent, used for platform detection
    #[arg(long, value_name = "UA")]
    pub user_agent: Option<String>,

    /// Host platform string (e.g. MacIntel)
    #[arg(long, value_name = "PLATFORM", default_value = "")]
    pub platform: String,

    /// Maximum simultaneous touch points the host reports
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub max_touch_points: u32,

    /// Script to replay
    #[arg(value_name = "SCRIPT")]
    pub script: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["echonav-sim"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.script.is_none());
        assert_eq!(cli.max_touch_points, 0);
    }

    #[test]
    fn test_flags_and_script() {
        let cli = Cli::try_parse_from([
            "echonav-sim",
            "--config=demos/english.json",
            "--user-agent",
            "Mozilla/5.0 (Macintosh)",
            "--platform",
            "MacIntel",
            "--max-touch-points",
            "5",
            "demos/mission.script",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("demos/english.json")));
        assert_eq!(cli.platform, "MacIntel");
        assert_eq!(cli.max_touch_points, 5);
        assert_eq!(cli.script, Some(PathBuf::from("demos/mission.script")));
    }

    #[test]
    fn test_rejects_unknown_flag_and_second_script() {
        assert!(Cli::try_parse_from(["echonav-sim", "--verbose"]).is_err());
        assert!(Cli::try_parse_from(["echonav-sim", "a.script", "b.script"]).is_err());
    }

    #[test]
    fn test_help_is_recognized() {
        let err = Cli::try_parse_from(["echonav-sim", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}
