pub type StripError = &'static str;

/// Byte offsets of one comment span. `from..to` covers the markers,
/// `body_from..body_to` only the text between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentMatch {
    pub from: usize,
    pub to: usize,
    pub body_from: usize,
    pub body_to: usize,
}

impl CommentMatch {
    pub fn body<'a>(&self, input: &'a str) -> &'a str {
        &input[self.body_from..self.body_to]
    }

    pub fn span<'a>(&self, input: &'a str) -> &'a str {
        &input[self.from..self.to]
    }
}

pub fn remove_matches(
    mut input: String,
    mut matches: Vec<CommentMatch>,
) -> Result<String, StripError> {
    if matches.is_empty() {
        return Ok(input);
    }
    check_matches_bounds(&input, &matches)?;

    matches.sort_by_key(|m| m.from);
    check_sorted_matches_overlap(&matches)?;
    matches.reverse();

    for m in matches {
        if input.is_char_boundary(m.from) && input.is_char_boundary(m.to) {
            input.drain(m.from..m.to);
        } else {
            return Err("Match range does not fall on character boundaries");
        }
    }
    Ok(input)
}

fn check_matches_bounds(input: &str, matches: &[CommentMatch]) -> Result<(), StripError> {
    let len = input.len();
    for m in matches {
        if m.from > len || m.to > len || m.from > m.to {
            log::debug!("Invalid bounds: from={}, to={}, len={}", m.from, m.to, len);
            return Err("Match indices out of bounds or invalid range (from > to)");
        }
    }
    Ok(())
}

fn check_sorted_matches_overlap(matches: &[CommentMatch]) -> Result<(), StripError> {
    let mut last_to = 0;
    for m in matches {
        if m.from < last_to {
            log::debug!("Overlap: from={}, last_to={}", m.from, last_to);
            return Err("Matches are overlapping");
        }
        last_to = m.to;
    }
    Ok(())
}
