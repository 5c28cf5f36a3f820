pub mod config;
pub mod file_finder;
pub mod processor;
pub mod stripper;

pub use config::{CliArgs, Command, CompletionArgs, Config, HtmlpackArgs};
pub use file_finder::{Target, find_files, resolve_target};

pub use processor::{ProcessedFileResult, RunSummary, Transformation, process_file, process_files, run};
pub use stripper::{CommentMatch, StripError, find_comments, remove_matches, strip_comments};

use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum CoreError {
    #[error("{} is not a valid file or folder.", .0.display())]
    InvalidPath(PathBuf),

    #[error("Read failed for {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Write failed for {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write report: {0}")]
    Report(std::io::Error),

    #[error("Stripping failed: {0}")]
    Strip(StripError),
}

impl From<StripError> for CoreError {
    fn from(e: StripError) -> Self {
        CoreError::Strip(e)
    }
}
