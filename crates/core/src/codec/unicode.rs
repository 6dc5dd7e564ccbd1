//! Unicode arrays and normalization.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use unicode_normalization::{IsNormalized, UnicodeNormalization, is_nfc_quick, is_nfkc_quick};

/// Normalization applied to every decoded string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NormalizationForm {
    /// Canonical composition. Extracted text is matched downstream in this
    /// form.
    #[default]
    Nfc,
    /// Compatibility composition; folds ligatures such as U+FB01.
    Nfkc,
    /// Leave the decoded text untouched.
    None,
}

/// Normalize `s`, borrowing when it is already in the requested form.
pub fn normalize(s: &str, form: NormalizationForm) -> Cow<'_, str> {
    match form {
        NormalizationForm::Nfc => {
            if is_nfc_quick(s.chars()) == IsNormalized::Yes {
                Cow::Borrowed(s)
            } else {
                Cow::Owned(s.nfc().collect())
            }
        }
        NormalizationForm::Nfkc => {
            if is_nfkc_quick(s.chars()) == IsNormalized::Yes {
                Cow::Borrowed(s)
            } else {
                Cow::Owned(s.nfkc().collect())
            }
        }
        NormalizationForm::None => Cow::Borrowed(s),
    }
}

/// Build a string from UTF-32 code points. Values that are not Unicode
/// scalar values become U+FFFD.
pub fn code_points_to_string(code_points: &[u32], form: NormalizationForm) -> String {
    let mut replaced = 0usize;
    let raw: String = code_points
        .iter()
        .map(|&cp| {
            char::from_u32(cp).unwrap_or_else(|| {
                replaced += 1;
                char::REPLACEMENT_CHARACTER
            })
        })
        .collect();
    if replaced > 0 {
        tracing::warn!(replaced, "invalid code points replaced during decoding");
    }
    normalize(&raw, form).into_owned()
}

/// Build a string from UTF-16 code units. Unpaired surrogates become U+FFFD.
pub fn utf16_to_string(units: &[u16], form: NormalizationForm) -> String {
    let mut replaced = 0usize;
    let raw: String = char::decode_utf16(units.iter().copied())
        .map(|r| {
            r.unwrap_or_else(|_| {
                replaced += 1;
                char::REPLACEMENT_CHARACTER
            })
        })
        .collect();
    if replaced > 0 {
        tracing::warn!(replaced, "unpaired surrogates replaced during decoding");
    }
    normalize(&raw, form).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_points_compose() {
        let decomposed = [0x63, 0x61, 0x66, 0x65, 0x301];
        assert_eq!(
            code_points_to_string(&decomposed, NormalizationForm::Nfc),
            "caf\u{e9}"
        );
        assert_eq!(
            code_points_to_string(&decomposed, NormalizationForm::None),
            "cafe\u{301}"
        );
    }

    #[test]
    fn test_invalid_code_point_replaced() {
        assert_eq!(
            code_points_to_string(&[0x41, 0xD800, 0x110000], NormalizationForm::Nfc),
            "A\u{fffd}\u{fffd}"
        );
    }

    #[test]
    fn test_unpaired_surrogate_replaced() {
        assert_eq!(
            utf16_to_string(&[0x0041, 0xDC00, 0x0042], NormalizationForm::Nfc),
            "A\u{fffd}B"
        );
        // U+1D11E MUSICAL SYMBOL G CLEF as a surrogate pair
        assert_eq!(
            utf16_to_string(&[0xD834, 0xDD1E], NormalizationForm::Nfc),
            "\u{1d11e}"
        );
    }

    #[test]
    fn test_nfkc_folds_ligature() {
        assert_eq!(normalize("\u{fb01}nd", NormalizationForm::Nfkc), "find");
        assert_eq!(normalize("\u{fb01}nd", NormalizationForm::Nfc), "\u{fb01}nd");
    }
}
