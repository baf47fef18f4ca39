use crate::config::MarkerRule;

use super::{ValidationError, validate};

fn rules(pairs: &[(&str, &str)]) -> Vec<MarkerRule> {
    pairs
        .iter()
        .map(|(label, marker)| MarkerRule {
            label: label.to_string(),
            marker: marker.to_string(),
        })
        .collect()
}

#[test]
fn empty_content_is_rejected() {
    let rules = rules(&[("title", "title:")]);

    assert_eq!(validate("", &rules), Err(ValidationError::Empty));
    assert_eq!(validate("   \n\t\n", &rules), Err(ValidationError::Empty));
}

#[test]
fn missing_marker_names_the_rule() {
    let rules = rules(&[("title", "title:")]);

    let result = validate("# A Page\n\nbody text\n", &rules);

    assert_eq!(
        result,
        Err(ValidationError::MissingMarker("title".to_string()))
    );
}

#[test]
fn content_with_all_markers_passes() {
    let rules = rules(&[("title", "title:"), ("kind", "kind: Page")]);
    let content = "---\ntitle: Install\nkind: Page\n---\n\n# Install\n";

    assert_eq!(validate(content, &rules), Ok(()));
}

#[test]
fn first_failing_rule_wins() {
    let rules = rules(&[("title", "title:"), ("kind", "kind: Page")]);

    let result = validate("---\ndescription: x\n---\n", &rules);

    assert_eq!(
        result,
        Err(ValidationError::MissingMarker("title".to_string()))
    );
}

#[test]
fn no_rules_means_any_nonempty_content_passes() {
    assert_eq!(validate("anything at all", &[]), Ok(()));
    assert_eq!(validate("", &[]), Err(ValidationError::Empty));
}

#[test]
fn marker_match_is_a_plain_substring_check() {
    // Not a parser: a marker buried mid-line still counts
    let rules = rules(&[("title", "title:")]);

    assert_eq!(validate("some text title: here", &rules), Ok(()));
}

#[test]
fn error_messages_render_inline_text() {
    assert_eq!(ValidationError::Empty.to_string(), "Empty page content");
    assert_eq!(
        ValidationError::MissingMarker("title".to_string()).to_string(),
        "Missing required title marker"
    );
}
