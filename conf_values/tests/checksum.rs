//! Digest determinism checks.

use conf_values::checksum_hex;

#[test]
fn empty_input_matches_the_known_vector() {
    assert_eq!(
        checksum_hex(b""),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

#[test]
fn digest_is_deterministic_and_input_sensitive() {
    assert_eq!(checksum_hex(b"values"), checksum_hex(b"values"));
    assert_ne!(checksum_hex(b"values"), checksum_hex(b"values2"));
    assert_eq!(checksum_hex(b"values").len(), 64);
}
