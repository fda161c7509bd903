//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::Parser;
use std::path::PathBuf;

use crate::adapter::config::DEFAULT_ENV_FILE;

/// .m3uプレイリストをmStreamサーバーに追加するCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "m3usync")]
#[command(
    about = "Add playlists (in m3u format) to an mStream server via its REST API",
    long_about = None
)]
pub struct Args {
    /// Path to a .m3u file or a directory containing .m3u files (non-recursive)
    #[arg(short, long)]
    pub path: PathBuf,

    /// Env file read before the process environment is consulted
    #[arg(long, default_value = DEFAULT_ENV_FILE)]
    pub env_file: PathBuf,

    /// Dry run mode - list and parse playlists without logging in or uploading
    #[arg(long)]
    pub dry_run: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_args_path_required() {
        let err = Args::try_parse_from(["m3usync"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert!(err.use_stderr());
    }

    #[test]
    fn test_args_short_path() {
        let args = Args::parse_from(["m3usync", "-p", "/music/mix.m3u"]);
        assert_eq!(args.path, PathBuf::from("/music/mix.m3u"));
        assert_eq!(args.env_file, PathBuf::from(".env"));
        assert!(!args.dry_run);
    }

    #[test]
    fn test_args_long_options() {
        let args = Args::parse_from([
            "m3usync",
            "--path",
            "/music/playlists",
            "--env-file",
            "/etc/m3usync.env",
            "--dry-run",
        ]);
        assert_eq!(args.path, PathBuf::from("/music/playlists"));
        assert_eq!(args.env_file, PathBuf::from("/etc/m3usync.env"));
        assert!(args.dry_run);
    }

    #[test]
    fn test_args_help_is_not_an_error_exit() {
        let err = Args::try_parse_from(["m3usync", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert!(!err.use_stderr());
    }
}
