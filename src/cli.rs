use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "oss-license-detect",
    about = "Crawl LICENSE files in a directory and write a license manifest",
    version
)]
pub struct Cli {
    /// Path to the directory to crawl for LICENSE files
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Manifest output path [default: ./oss_license_detect_intermediate.json]
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Config file [default: <PATH>/.oss-license-detect/config.toml, fallback ~/.config/oss-license-detect/config.toml]
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Report printed after the manifest is written
    #[arg(long, default_value = "terminal", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// Print the classification rules in evaluation order and exit
    #[arg(long)]
    pub list_rules: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print summary line
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
    None,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["oss-license-detect"]);
        assert_eq!(cli.path, PathBuf::from("."));
        assert_eq!(cli.report, ReportFormat::Terminal);
        assert!(cli.output.is_none());
        assert!(!cli.verbose && !cli.quiet && !cli.list_rules);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from([
            "oss-license-detect",
            "third_party",
            "-o",
            "out.json",
            "--report",
            "json",
            "-v",
        ]);
        assert_eq!(cli.path, PathBuf::from("third_party"));
        assert_eq!(cli.output, Some(PathBuf::from("out.json")));
        assert_eq!(cli.report, ReportFormat::Json);
        assert!(cli.verbose);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["oss-license-detect", "-q", "-v"]).is_err());
    }
}
