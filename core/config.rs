use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Debug, Parser, Clone, Default)]
#[clap(
    about = "Preprocess HTML files for production (main arguments)",
    long_about = "These are the main arguments for the stripping operations."
)]
pub struct HtmlpackArgs {
    #[clap(help = "Path to file or folder", required = true)]
    pub path: Option<PathBuf>,

    #[clap(
        short = 's',
        long = "strip-comments",
        help = "Whether to strip HTML comments (default: false)"
    )]
    pub strip_comments: bool,

    #[clap(short = 'v', long, help = "Verbose output (default: false)")]
    pub verbose: bool,

    #[clap(
        short = 'd',
        long = "dry-run",
        help = "Perform a dry run without modifying files (default: false)"
    )]
    pub dry_run: bool,
}

impl HtmlpackArgs {
    /// Freezes the parsed flags into a [`Config`]. `None` when no path was given,
    /// which clap only allows when a subcommand is present.
    pub fn to_config(&self) -> Option<Config> {
        let path = self.path.clone()?;
        Some(Config {
            path,
            strip_comments: self.strip_comments,
            verbose: self.verbose,
            dry_run: self.dry_run,
        })
    }
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    #[clap(about = "Generate shell completion scripts")]
    Completion(CompletionArgs),
}

#[derive(Debug, Parser, Clone)]
pub struct CompletionArgs {
    #[clap(value_parser = clap::value_parser!(clap_complete::Shell))]
    pub shell: clap_complete::Shell,
}

#[derive(Debug, Parser, Clone)]
#[clap(
    name = "htmlpack",
    version = "0.1.0",
    about = "Preprocess HTML files for production environments",
    long_about = "Strips HTML comments from a file, or from every .html and .hbs file under a folder.\nUse --dry-run to preview what would be removed.",
    propagate_version = true,
    subcommand_negates_reqs = true,
    args_conflicts_with_subcommands = true
)]
pub struct CliArgs {
    #[clap(subcommand)]
    pub command: Option<Command>,

    #[clap(flatten)]
    pub main_opts: HtmlpackArgs,
}

/// Run configuration, resolved once at startup and passed by reference to
/// every operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub path: PathBuf,
    pub strip_comments: bool,
    pub verbose: bool,
    pub dry_run: bool,
}

impl Config {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Config {
            path: path.as_ref().to_path_buf(),
            strip_comments: false,
            verbose: false,
            dry_run: false,
        }
    }

    pub fn with_strip_comments(mut self, strip_comments: bool) -> Self {
        self.strip_comments = strip_comments;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Findings are listed whenever the user asked for them or nothing will be written.
    pub fn reports_findings(&self) -> bool {
        self.verbose || self.dry_run
    }
}
