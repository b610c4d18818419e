use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "secdigest",
    version,
    about = "Aggregates security scanner outputs into an executive-facing HTML report",
    long_about = "secdigest reads Semgrep, Gitleaks, and Grype scan artifacts from a reports \
                  directory and renders a single executive HTML report with a risk and \
                  compliance summary. Missing or malformed inputs are skipped, never fatal."
)]
pub struct Cli {
    /// Directory containing scan artifacts (and the generated report)
    #[arg(short, long, default_value = "security-reports")]
    pub dir: PathBuf,

    /// Output path for the HTML report (default: <dir>/executive-report.html)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["secdigest"]).unwrap();
        assert_eq!(cli.dir, PathBuf::from("security-reports"));
        assert!(cli.output.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_custom_dir_and_output() {
        let cli = Cli::try_parse_from([
            "secdigest",
            "--dir",
            "artifacts",
            "--output",
            "report.html",
        ])
        .unwrap();
        assert_eq!(cli.dir, PathBuf::from("artifacts"));
        assert_eq!(cli.output, Some(PathBuf::from("report.html")));
    }
}
