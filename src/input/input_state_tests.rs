use super::InputState;

#[test]
fn starts_empty() {
    let input = InputState::new();
    assert_eq!(input.value(), "");
    assert!(input.is_empty());
}

#[test]
fn set_value_replaces_existing_text() {
    let mut input = InputState::new();
    input.textarea.insert_str("scal");

    input.set_value("installation");

    assert_eq!(input.value(), "installation");
}

#[test]
fn set_value_leaves_cursor_at_end() {
    let mut input = InputState::new();

    input.set_value("abc");
    input.textarea.insert_str("d");

    assert_eq!(input.value(), "abcd");
}

#[test]
fn set_value_with_empty_string_clears() {
    let mut input = InputState::new();
    input.textarea.insert_str("something");

    input.set_value("");

    assert!(input.is_empty());
}
