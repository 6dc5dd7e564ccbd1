//! Lenient text decoding.

use folio_core::codec::{
    NormalizationForm, code_points_to_string, decode_text, decode_text_with, utf16_to_string,
};

#[test]
fn test_utf16_with_bom_decodes_nfc() {
    let bytes = [0xFE, 0xFF, 0x00, b'c', 0x00, b'a', 0x00, b'f', 0x00, 0xE9];
    let text = decode_text(&bytes);
    assert_eq!(text, "caf\u{e9}");
    assert!(!text.contains(char::REPLACEMENT_CHARACTER));
}

#[test]
fn test_utf16_decomposed_input_is_composed() {
    // "e" followed by a combining acute accent
    let bytes = [0xFE, 0xFF, 0x00, b'e', 0x03, 0x01];
    assert_eq!(decode_text(&bytes), "\u{e9}");
    assert_eq!(
        decode_text_with(&bytes, NormalizationForm::None),
        "e\u{301}"
    );
}

#[test]
fn test_undefined_byte_becomes_replacement() {
    assert_eq!(decode_text(b"a\x7fb"), "a\u{fffd}b");
    assert_eq!(decode_text(&[0x9F]), "\u{fffd}");
}

#[test]
fn test_pdfdoc_specials() {
    // bullet, em dash, euro sign
    assert_eq!(decode_text(&[0x80, 0x84, 0xA0]), "\u{2022}\u{2014}\u{20ac}");
    assert_eq!(decode_text(b"plain ASCII"), "plain ASCII");
    // Latin-1 range maps straight through
    assert_eq!(decode_text(&[0xE9]), "\u{e9}");
}

#[test]
fn test_unpaired_surrogate_and_invalid_scalar() {
    assert_eq!(
        utf16_to_string(&[0x0061, 0xD800, 0x0062], NormalizationForm::Nfc),
        "a\u{fffd}b"
    );
    assert_eq!(
        code_points_to_string(&[0x61, 0x11_0000, 0xD800], NormalizationForm::Nfc),
        "a\u{fffd}\u{fffd}"
    );
}

#[test]
fn test_nfkc_folds_ligatures() {
    assert_eq!(
        code_points_to_string(&[0xFB01, 0x6E, 0x65], NormalizationForm::Nfkc),
        "fine"
    );
    assert_eq!(
        code_points_to_string(&[0xFB01, 0x6E, 0x65], NormalizationForm::Nfc),
        "\u{fb01}ne"
    );
}
