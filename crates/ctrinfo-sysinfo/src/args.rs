//! Command-line arguments

use clap::Parser;
use std::path::PathBuf;

/// Report what a 3DS-family console says about its hardware
#[derive(Debug, Parser)]
#[command(name = "ctrinfo-sysinfo")]
#[command(version)]
#[command(about = "Report screen, audio, card and brightness facts of a 3DS-family console", long_about = None)]
pub struct Args {
    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Mock console profile (old3ds, old3dsxl, old2ds, new3ds, new3dsxl, new2dsxl)
    #[arg(short, long, env = "CTRINFO_MOCK_DEVICE")]
    pub profile: Option<String>,

    /// Configuration file, instead of the standard locations
    #[arg(short, long, env = "CTRINFO_CONFIG")]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("ctrinfo-sysinfo").chain(args.iter().copied()))
    }

    #[test]
    fn test_flags_and_options() {
        let args = parse(&["--json", "-p", "old2ds", "--config", "/tmp/ctrinfo.toml"]).unwrap();
        assert!(args.json);
        assert_eq!(args.profile.as_deref(), Some("old2ds"));
        assert_eq!(args.config, Some(PathBuf::from("/tmp/ctrinfo.toml")));
    }

    #[test]
    fn test_long_profile() {
        let args = parse(&["--profile", "new3ds"]).unwrap();
        assert!(!args.json);
        assert_eq!(args.profile.as_deref(), Some("new3ds"));
    }

    #[test]
    fn test_missing_value() {
        assert!(parse(&["--profile"]).is_err());
    }

    #[test]
    fn test_unknown_argument() {
        let err = parse(&["--verbose"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_help() {
        let err = parse(&["--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_command_definition() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
