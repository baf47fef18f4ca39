use super::encode_osc52;

#[test]
fn sequence_wraps_base64_payload() {
    let sequence = encode_osc52("hello");

    assert!(sequence.starts_with("\x1b]52;c;"));
    assert!(sequence.ends_with('\x07'));
    assert!(sequence.contains("aGVsbG8="));
}

#[test]
fn empty_payload_still_produces_a_sequence() {
    assert_eq!(encode_osc52(""), "\x1b]52;c;\x07");
}

#[test]
fn payload_is_recoverable_from_the_sequence() {
    use base64::{Engine as _, engine::general_purpose::STANDARD};

    let original = "guides/quick-start.md";
    let sequence = encode_osc52(original);

    let inner = sequence
        .strip_prefix("\x1b]52;c;")
        .unwrap()
        .strip_suffix('\x07')
        .unwrap();
    let decoded = STANDARD.decode(inner).unwrap();

    assert_eq!(String::from_utf8(decoded).unwrap(), original);
}
