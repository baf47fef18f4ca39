/// Build the "edit this page" URL for a page relative to the docs root.
///
/// Trailing slashes on the repository URL are tolerated so config values like
/// `https://github.com/org/repo/` produce a clean link.
pub fn edit_url(repo_url: &str, branch: &str, rel_path: &str) -> String {
    let repo = repo_url.trim_end_matches('/');
    let page = rel_path.trim_start_matches('/');

    format!("{repo}/edit/{branch}/docs/{page}")
}

#[cfg(test)]
#[path = "edit_link_tests.rs"]
mod edit_link_tests;
