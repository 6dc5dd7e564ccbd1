//! Font descriptors.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

bitflags! {
    /// Font descriptor flags, using the bit positions of the PDF `/Flags`
    /// entry.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct FontFlags: u32 {
        const FIXED_PITCH = 1;
        const SERIF = 1 << 1;
        const SYMBOLIC = 1 << 2;
        const SCRIPT = 1 << 3;
        const NONSYMBOLIC = 1 << 5;
        const ITALIC = 1 << 6;
        const ALL_CAP = 1 << 16;
        const SMALL_CAP = 1 << 17;
        const FORCE_BOLD = 1 << 18;
    }
}

/// What the engine knows about one font resource.
///
/// The style flags come straight from the font descriptor and are not
/// reliable: many producers set them wrongly or not at all.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FontDescriptor {
    /// Resource tag (e.g. `F1`), the font's identity within a document.
    pub tag: SmolStr,
    /// Base font name (e.g. `Times-Roman`); may be empty.
    #[serde(default)]
    pub name: SmolStr,
    #[serde(default)]
    pub flags: FontFlags,
}

impl FontDescriptor {
    pub fn new(tag: impl Into<SmolStr>, name: impl Into<SmolStr>) -> Self {
        Self {
            tag: tag.into(),
            name: name.into(),
            flags: FontFlags::empty(),
        }
    }

    pub fn with_flags(mut self, flags: FontFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn is_fixed_width(&self) -> bool {
        self.flags.contains(FontFlags::FIXED_PITCH)
    }

    pub const fn is_serif(&self) -> bool {
        self.flags.contains(FontFlags::SERIF)
    }

    pub const fn is_symbolic(&self) -> bool {
        self.flags.contains(FontFlags::SYMBOLIC)
    }

    pub const fn is_italic(&self) -> bool {
        self.flags.contains(FontFlags::ITALIC)
    }

    pub const fn is_bold(&self) -> bool {
        self.flags.contains(FontFlags::FORCE_BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_flags() {
        let font = FontDescriptor::new("F2", "Courier-BoldOblique")
            .with_flags(FontFlags::FIXED_PITCH | FontFlags::ITALIC | FontFlags::FORCE_BOLD);
        assert!(font.is_fixed_width());
        assert!(font.is_italic());
        assert!(font.is_bold());
        assert!(!font.is_serif());
        assert!(!font.is_symbolic());
    }

    #[test]
    fn test_flags_from_pdf_bits() {
        // /Flags 34 = Serif | Nonsymbolic
        let flags = FontFlags::from_bits_truncate(34);
        assert_eq!(flags, FontFlags::SERIF | FontFlags::NONSYMBOLIC);
    }
}
