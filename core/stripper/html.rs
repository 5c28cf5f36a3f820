use super::common::CommentMatch;
use once_cell::sync::Lazy;
use regex::Regex;

// Non-greedy and dot-matches-newline: the first `-->` after a `<!--` closes it,
// even if that `-->` sits inside what a browser would treat as a quoted value.
static COMMENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<!--(.*?)-->").unwrap());

pub fn find_comments(input: &str) -> Vec<CommentMatch> {
    COMMENT_RE
        .captures_iter(input)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let body = caps.get(1)?;
            Some(CommentMatch {
                from: whole.start(),
                to: whole.end(),
                body_from: body.start(),
                body_to: body.end(),
            })
        })
        .collect()
}
