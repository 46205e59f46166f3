use crate::constants::{
    verbosity, DEFAULT_AUTHOR_NAME, DEFAULT_COMPANY_NAME, DEFAULT_OUTPUT_ROOT,
    DEFAULT_PROJECT_NAME,
};
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

/// CLI arguments for agriscaffold.
///
/// Every option has a built-in default, so a bare invocation generates the
/// standard skeleton in the current directory.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Project name rendered into the generated documents.
    #[arg(long = "project-name", default_value = DEFAULT_PROJECT_NAME)]
    pub project_name: String,

    /// Author name rendered into the generated documents.
    #[arg(long = "author-name", default_value = DEFAULT_AUTHOR_NAME)]
    pub author_name: String,

    /// Company name rendered into the generated documents.
    #[arg(long = "company-name", default_value = DEFAULT_COMPANY_NAME)]
    pub company_name: String,

    /// Directory the skeleton is generated under; created if missing.
    #[arg(long = "output-root", default_value = DEFAULT_OUTPUT_ROOT)]
    pub output_root: PathBuf,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Preview actions without touching the filesystem.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

/// Parse command line arguments.
pub fn get_args() -> Args {
    Args::parse()
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_verbose_flags_to_log_filters() {
        use crate::constants::verbosity;
        assert_eq!(get_log_level_from_verbose(verbosity::OFF), LevelFilter::Error);
        assert_eq!(get_log_level_from_verbose(verbosity::INFO), LevelFilter::Info);
        assert_eq!(get_log_level_from_verbose(verbosity::DEBUG), LevelFilter::Debug);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE), LevelFilter::Trace);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE + 1), LevelFilter::Trace);
    }

    #[test]
    fn bare_invocation_uses_built_in_defaults() {
        let args = Args::parse_from(["agriscaffold"]);
        assert_eq!(args.project_name, DEFAULT_PROJECT_NAME);
        assert_eq!(args.author_name, DEFAULT_AUTHOR_NAME);
        assert_eq!(args.company_name, DEFAULT_COMPANY_NAME);
        assert_eq!(args.output_root, PathBuf::from(DEFAULT_OUTPUT_ROOT));
        assert_eq!(args.verbose, 0);
        assert!(!args.dry_run);
    }

    #[test]
    fn parses_full_option_set() {
        let args = Args::parse_from([
            "agriscaffold",
            "--project-name",
            "TerraWatch",
            "--author-name",
            "Jane Farmer",
            "--company-name",
            "TerraWatch Ltd",
            "--output-root",
            "/tmp/terrawatch",
            "-vvv",
            "--dry-run",
        ]);
        assert_eq!(args.project_name, "TerraWatch");
        assert_eq!(args.author_name, "Jane Farmer");
        assert_eq!(args.company_name, "TerraWatch Ltd");
        assert_eq!(args.output_root, PathBuf::from("/tmp/terrawatch"));
        assert_eq!(args.verbose, 3);
        assert!(args.dry_run);
    }
}
