/// Turn a path segment into a display name: hyphens become spaces and each
/// word is capitalized, so `quick-start` renders as `Quick Start`.
pub fn display_case(segment: &str) -> String {
    let spaced = segment.replace('-', " ");
    let mut out = String::with_capacity(spaced.len());
    let mut at_word_start = true;

    for ch in spaced.chars() {
        if ch.is_whitespace() {
            at_word_start = true;
            out.push(ch);
        } else if at_word_start {
            out.extend(ch.to_uppercase());
            at_word_start = false;
        } else {
            out.push(ch);
        }
    }

    out
}

/// Build the breadcrumb trail for a page path relative to the docs root.
///
/// The trail always starts at `Home`; the final segment drops its `.md`
/// extension. Empty segments (doubled separators) are skipped.
pub fn breadcrumb_trail(rel_path: &str) -> Vec<String> {
    let mut trail = vec!["Home".to_string()];

    let segments: Vec<&str> = rel_path.split('/').filter(|part| !part.is_empty()).collect();

    for (index, segment) in segments.iter().enumerate() {
        let is_last = index == segments.len() - 1;
        let segment = if is_last {
            segment.trim_end_matches(".md")
        } else {
            segment
        };
        trail.push(display_case(segment));
    }

    trail
}

#[cfg(test)]
#[path = "breadcrumb_tests.rs"]
mod breadcrumb_tests;
