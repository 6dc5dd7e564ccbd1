//! Text reconstruction parameters.
//!
//! Contains TextParams struct for controlling how proxies produce text.

use serde::{Deserialize, Serialize};

use crate::codec::NormalizationForm;

/// Parameters for text reconstruction.
///
/// The defaults reproduce the canonical extraction output that downstream
/// matching depends on; change them only for display-oriented consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextParams {
    /// Unicode normalization applied to every word's decoded text.
    pub normalization: NormalizationForm,

    /// If a hyphenated line should be spliced onto the first word of the
    /// following line when joining the lines of a block. When disabled,
    /// lines are always joined by a single space.
    pub join_hyphenated: bool,
}

impl Default for TextParams {
    fn default() -> Self {
        Self {
            normalization: NormalizationForm::Nfc,
            join_hyphenated: true,
        }
    }
}

impl TextParams {
    /// Creates new text parameters with the specified values.
    pub const fn new(normalization: NormalizationForm, join_hyphenated: bool) -> Self {
        Self {
            normalization,
            join_hyphenated,
        }
    }
}
