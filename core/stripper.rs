pub mod common;
pub mod html;

pub use common::{CommentMatch, StripError, remove_matches};

use std::io::{self, Write};
use std::path::Path;

/// Comment spans in document order. Detection is a plain marker scan, see
/// [`html::find_comments`]; swap that out to get a tokenizer-aware stripper.
pub fn find_comments(content: &str) -> Vec<CommentMatch> {
    html::find_comments(content)
}

pub fn strip_comments(content: &str) -> Result<String, StripError> {
    let matches = find_comments(content);
    remove_matches(content.to_string(), matches)
}

/// Writes the count line followed by one `* <!--body-->` line per comment.
pub fn write_report(
    out: &mut dyn Write,
    path: &Path,
    content: &str,
    matches: &[CommentMatch],
    dry_run: bool,
) -> io::Result<()> {
    writeln!(
        out,
        "{} {} comments from {}",
        if dry_run { "Identified" } else { "Removing" },
        matches.len(),
        path.display()
    )?;
    for m in matches {
        writeln!(out, "* <!--{}-->", m.body(content))?;
    }
    Ok(())
}
