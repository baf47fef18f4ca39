use std::fmt;

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use crate::site::Page;

/// Fuzzy matcher over the page index, fzf-style: space-separated terms must
/// all match (AND), results come back best score first.
pub struct PageMatcher {
    matcher: SkimMatcherV2,
}

impl fmt::Debug for PageMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageMatcher").finish_non_exhaustive()
    }
}

impl Default for PageMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl PageMatcher {
    pub fn new() -> Self {
        Self {
            matcher: SkimMatcherV2::default(),
        }
    }

    /// Indices into `pages` matching `query`. An empty query keeps every page
    /// in index order.
    pub fn filter(&self, query: &str, pages: &[Page]) -> Vec<usize> {
        let terms: Vec<&str> = query.split_whitespace().collect();
        if terms.is_empty() {
            return (0..pages.len()).collect();
        }

        let mut scored: Vec<(usize, i64)> = pages
            .iter()
            .enumerate()
            .filter_map(|(idx, page)| {
                // Both the title and the path are searchable
                let haystack = format!("{} {}", page.title, page.rel_path);

                let mut total_score: i64 = 0;
                for term in &terms {
                    match self.matcher.fuzzy_match(&haystack, term) {
                        Some(score) => total_score += score,
                        None => return None, // Term didn't match, exclude page
                    }
                }
                Some((idx, total_score))
            })
            .collect();

        scored.sort_by(|a, b| b.1.cmp(&a.1));

        scored.into_iter().map(|(idx, _)| idx).collect()
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod matcher_tests;
