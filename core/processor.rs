use crate::CoreError;
use crate::config::Config;
use crate::file_finder::find_files;
use crate::stripper;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// A flag-gated rewrite of one file's content. Each variant owns its flag and
/// its own logic; traversal never needs to know which ones exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transformation {
    StripComments,
}

impl Transformation {
    pub const ALL: &'static [Transformation] = &[Transformation::StripComments];

    pub fn is_enabled(self, config: &Config) -> bool {
        match self {
            Transformation::StripComments => config.strip_comments,
        }
    }

    pub fn enabled(config: &Config) -> Vec<Transformation> {
        Self::ALL
            .iter()
            .copied()
            .filter(|t| t.is_enabled(config))
            .collect()
    }

    fn apply(
        self,
        path: &Path,
        content: String,
        config: &Config,
        out: &mut dyn Write,
        outcome: &mut ProcessedFileResult,
    ) -> Result<String, CoreError> {
        match self {
            Transformation::StripComments => {
                let matches = stripper::find_comments(&content);
                outcome.comments_found += matches.len();
                if config.reports_findings() {
                    stripper::write_report(out, path, &content, &matches, config.dry_run)
                        .map_err(CoreError::Report)?;
                }
                Ok(stripper::remove_matches(content, matches)?)
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct ProcessedFileResult {
    pub path: PathBuf,
    pub comments_found: usize,
    pub written: bool,
    pub error: Option<String>,
}

#[derive(Debug, Default)]
pub struct RunSummary {
    pub results: Vec<ProcessedFileResult>,
}

impl RunSummary {
    pub fn processed(&self) -> usize {
        self.results.len()
    }

    pub fn modified(&self) -> usize {
        self.results.iter().filter(|r| r.written).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &ProcessedFileResult> {
        self.results.iter().filter(|r| r.error.is_some())
    }

    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }
}

/// Reads the file once, runs every enabled transformation over the buffer and
/// writes it back once, unless this is a dry run or nothing changed.
pub fn process_file(
    path: &Path,
    config: &Config,
    out: &mut dyn Write,
) -> Result<ProcessedFileResult, CoreError> {
    let mut outcome = ProcessedFileResult {
        path: path.to_path_buf(),
        ..Default::default()
    };
    let transformations = Transformation::enabled(config);
    if transformations.is_empty() {
        return Ok(outcome);
    }

    let original_content = fs::read_to_string(path).map_err(|source| CoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mut current_content = original_content.clone();
    for t in transformations {
        current_content = t.apply(path, current_content, config, out, &mut outcome)?;
    }

    if config.dry_run {
        log::debug!("Dry run, leaving {} untouched", path.display());
        return Ok(outcome);
    }
    if current_content != original_content {
        fs::write(path, current_content).map_err(|source| CoreError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        outcome.written = true;
        log::info!("Rewrote {}", path.display());
    }
    Ok(outcome)
}

/// Processes files one after another. Per-file read/write failures are recorded
/// and the run moves on; a broken report stream stops it.
pub fn process_files(
    files: Vec<PathBuf>,
    config: &Config,
    out: &mut dyn Write,
) -> Result<Vec<ProcessedFileResult>, CoreError> {
    let mut r = Vec::with_capacity(files.len());
    for p in files {
        match process_file(&p, config, out) {
            Ok(o) => r.push(o),
            Err(e @ CoreError::Report(_)) => return Err(e),
            Err(e) => {
                log::warn!("{}", e);
                r.push(ProcessedFileResult {
                    path: p,
                    error: Some(e.to_string()),
                    ..Default::default()
                });
            }
        }
    }
    Ok(r)
}

pub fn run(config: &Config, out: &mut dyn Write) -> Result<RunSummary, CoreError> {
    let files = find_files(config)?;
    if Transformation::enabled(config).is_empty() {
        log::info!("No transformation enabled, nothing to do");
    }
    let results = process_files(files, config, out)?;
    out.flush().map_err(CoreError::Report)?;
    Ok(RunSummary { results })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = "<!-- a -->text<!-- b\nc -->";

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let p = dir.join(name);
        if let Some(parent) = p.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&p, content).unwrap();
        p
    }

    fn run_capture(config: &Config) -> (RunSummary, String) {
        let mut out = Vec::new();
        let summary = run(config, &mut out).unwrap();
        (summary, String::from_utf8(out).unwrap())
    }

    #[test]
    fn strips_file_in_place() {
        let tmp = TempDir::new().unwrap();
        let p = write(tmp.path(), "index.html", SAMPLE);
        let (summary, output) = run_capture(&Config::new(&p).with_strip_comments(true));
        assert_eq!(fs::read_to_string(&p).unwrap(), "text");
        assert_eq!(summary.modified(), 1);
        assert_eq!(summary.results[0].comments_found, 2);
        assert!(output.is_empty());
    }

    #[test]
    fn dry_run_reports_and_never_writes() {
        let tmp = TempDir::new().unwrap();
        let p = write(tmp.path(), "index.html", SAMPLE);
        for verbose in [false, true] {
            for strip in [false, true] {
                let config = Config::new(&p)
                    .with_strip_comments(strip)
                    .with_verbose(verbose)
                    .with_dry_run(true);
                let (summary, _) = run_capture(&config);
                assert_eq!(summary.modified(), 0);
                assert_eq!(fs::read(&p).unwrap(), SAMPLE.as_bytes());
            }
        }
    }

    #[test]
    fn dry_run_output() {
        let tmp = TempDir::new().unwrap();
        let p = write(tmp.path(), "index.html", SAMPLE);
        let config = Config::new(&p).with_strip_comments(true).with_dry_run(true);
        let (_, output) = run_capture(&config);
        assert_eq!(
            output,
            format!(
                "Identified 2 comments from {}\n* <!-- a -->\n* <!-- b\nc -->\n",
                p.display()
            )
        );
    }

    #[test]
    fn verbose_reports_then_writes() {
        let tmp = TempDir::new().unwrap();
        let p = write(tmp.path(), "index.html", SAMPLE);
        let config = Config::new(&p).with_strip_comments(true).with_verbose(true);
        let (_, output) = run_capture(&config);
        assert!(output.starts_with(&format!("Removing 2 comments from {}\n", p.display())));
        assert_eq!(fs::read_to_string(&p).unwrap(), "text");
    }

    #[test]
    fn stripping_disabled_is_silent_noop() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "a.html", SAMPLE);
        let config = Config::new(tmp.path()).with_verbose(true).with_dry_run(true);
        let (summary, output) = run_capture(&config);
        assert!(output.is_empty());
        assert_eq!(summary.processed(), 1);
        assert_eq!(summary.results[0].comments_found, 0);
        assert_eq!(fs::read_to_string(tmp.path().join("a.html")).unwrap(), SAMPLE);
    }

    #[test]
    fn directory_mode_filters_extensions() {
        let tmp = TempDir::new().unwrap();
        let a = write(tmp.path(), "a.html", SAMPLE);
        let b = write(tmp.path(), "sub/b.hbs", SAMPLE);
        let c = write(tmp.path(), "c.txt", SAMPLE);
        run_capture(&Config::new(tmp.path()).with_strip_comments(true));
        assert_eq!(fs::read_to_string(a).unwrap(), "text");
        assert_eq!(fs::read_to_string(b).unwrap(), "text");
        assert_eq!(fs::read_to_string(c).unwrap(), SAMPLE);
    }

    #[test]
    fn second_pass_finds_nothing() {
        let tmp = TempDir::new().unwrap();
        let p = write(tmp.path(), "a.html", "<b>x</b><!-- y -->\n");
        let config = Config::new(&p).with_strip_comments(true);
        run_capture(&config);
        let (summary, _) = run_capture(&config);
        assert_eq!(summary.results[0].comments_found, 0);
        assert!(!summary.results[0].written);
        assert_eq!(fs::read_to_string(&p).unwrap(), "<b>x</b>\n");
    }

    #[test]
    fn comment_free_file_is_byte_identical() {
        let tmp = TempDir::new().unwrap();
        let content = "\u{feff}<html>\r\n<body>a</body>\r\n</html>\r\n";
        let p = write(tmp.path(), "a.html", content);
        let (summary, _) = run_capture(&Config::new(&p).with_strip_comments(true));
        assert_eq!(summary.modified(), 0);
        assert_eq!(fs::read(&p).unwrap(), content.as_bytes());
    }

    #[test]
    fn invalid_utf8_is_recorded_and_run_continues() {
        let tmp = TempDir::new().unwrap();
        let bad = tmp.path().join("a.html");
        fs::write(&bad, [0xff, 0xfe, b'<', b'!']).unwrap();
        let good = write(tmp.path(), "b.html", SAMPLE);
        let (summary, _) = run_capture(&Config::new(tmp.path()).with_strip_comments(true));
        assert!(summary.has_failures());
        let failed: Vec<_> = summary.failures().map(|r| r.path.clone()).collect();
        assert_eq!(failed, vec![bad]);
        assert_eq!(fs::read_to_string(good).unwrap(), "text");
    }

    #[test]
    fn invalid_path_fails_before_processing() {
        let tmp = TempDir::new().unwrap();
        let config = Config::new(tmp.path().join("missing")).with_strip_comments(true);
        let mut out = Vec::new();
        let err = run(&config, &mut out).unwrap_err();
        assert!(matches!(err, CoreError::InvalidPath(_)));
        assert!(out.is_empty());
    }

    #[test]
    fn enabled_transformations_follow_flags() {
        assert!(Transformation::enabled(&Config::new(".")).is_empty());
        assert_eq!(
            Transformation::enabled(&Config::new(".").with_strip_comments(true)),
            vec![Transformation::StripComments]
        );
    }
}
