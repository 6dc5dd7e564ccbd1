use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::font::FontDescriptor;
use crate::geometry::BoundingBox;
use crate::layout::{Cursor, Region};
use crate::params::TextParams;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct RegionId(pub(crate) usize);
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct BlockId(pub(crate) usize);
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct LineId(pub(crate) usize);
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct WordId(pub(crate) usize);
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct FontId(pub(crate) usize);

macro_rules! impl_index {
    ($($id:ty),*) => {
        $(impl $id {
            pub const fn index(self) -> usize {
                self.0
            }
        })*
    };
}

impl_index!(RegionId, BlockId, LineId, WordId, FontId);

/// RGB fill colour of a word, components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct RegionNode {
    pub(crate) bbox: BoundingBox,
    pub(crate) first_block: Option<BlockId>,
    pub(crate) next: Option<RegionId>,
}

#[derive(Debug, Clone)]
pub(crate) struct BlockNode {
    pub(crate) bbox: BoundingBox,
    pub(crate) rotation: i32,
    pub(crate) first_line: Option<LineId>,
    pub(crate) next: Option<BlockId>,
}

#[derive(Debug, Clone)]
pub(crate) struct LineNode {
    pub(crate) bbox: BoundingBox,
    pub(crate) rotation: i32,
    pub(crate) hyphenated: bool,
    pub(crate) first_word: Option<WordId>,
    pub(crate) next: Option<LineId>,
}

#[derive(Debug, Clone)]
pub(crate) struct WordNode {
    pub(crate) bbox: BoundingBox,
    pub(crate) rotation: i32,
    pub(crate) text: SmallVec<[u32; 16]>,
    /// Near edge of every character along the primary axis, plus the far
    /// edge of the last one.
    pub(crate) edges: SmallVec<[f64; 17]>,
    pub(crate) font: FontId,
    pub(crate) font_size: f64,
    pub(crate) baseline: f64,
    pub(crate) color: Color,
    pub(crate) space_after: bool,
    pub(crate) underlined: bool,
    pub(crate) next: Option<WordId>,
}

impl WordNode {
    pub(crate) fn len(&self) -> usize {
        self.text.len()
    }

    pub(crate) fn char_bbox(&self, index: usize) -> BoundingBox {
        let near = self.edges[index];
        let far = self.edges[index + 1];
        let b = &self.bbox;
        match self.rotation {
            0 => BoundingBox::new(near, b.y1, far, b.y2),
            1 => BoundingBox::new(b.x1, near, b.x2, far),
            2 => BoundingBox::new(far, b.y1, near, b.y2),
            _ => BoundingBox::new(b.x1, far, b.x2, near),
        }
    }
}

/// A page's text flow, as produced by the PDF engine's text analysis.
///
/// Built once with [`TextFlowBuilder`](super::TextFlowBuilder) and read-only
/// afterwards.
#[derive(Debug, Clone, Default)]
pub struct TextFlow {
    pub(crate) params: TextParams,
    pub(crate) fonts: Vec<FontDescriptor>,
    pub(crate) regions: Vec<RegionNode>,
    pub(crate) blocks: Vec<BlockNode>,
    pub(crate) lines: Vec<LineNode>,
    pub(crate) words: Vec<WordNode>,
    pub(crate) first_region: Option<RegionId>,
}

impl TextFlow {
    pub fn params(&self) -> &TextParams {
        &self.params
    }

    pub fn fonts(&self) -> &[FontDescriptor] {
        &self.fonts
    }

    pub fn font(&self, id: FontId) -> &FontDescriptor {
        &self.fonts[id.0]
    }

    pub fn font_by_tag(&self, tag: &str) -> Option<FontId> {
        self.fonts.iter().position(|f| f.tag == tag).map(FontId)
    }

    /// Cursor on the first region; the end cursor when the page has no text.
    pub fn first_region(&self) -> Region<'_> {
        Region::at(self, self.first_region)
    }

    /// All regions in flow order.
    pub fn regions(&self) -> Vec<Region<'_>> {
        self.first_region().siblings().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.first_region.is_none()
    }

    pub fn num_regions(&self) -> usize {
        self.regions.len()
    }

    pub fn num_blocks(&self) -> usize {
        self.blocks.len()
    }

    pub fn num_lines(&self) -> usize {
        self.lines.len()
    }

    pub fn num_words(&self) -> usize {
        self.words.len()
    }

    pub(crate) fn region(&self, id: RegionId) -> &RegionNode {
        &self.regions[id.0]
    }

    pub(crate) fn block(&self, id: BlockId) -> &BlockNode {
        &self.blocks[id.0]
    }

    pub(crate) fn line(&self, id: LineId) -> &LineNode {
        &self.lines[id.0]
    }

    pub(crate) fn word(&self, id: WordId) -> &WordNode {
        &self.words[id.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(rotation: i32) -> WordNode {
        WordNode {
            bbox: BoundingBox::new(10.0, 20.0, 40.0, 50.0),
            rotation,
            text: SmallVec::from_slice(&[0x61, 0x62, 0x63]),
            edges: SmallVec::from_slice(&[0.0, 1.0, 2.0, 3.0]),
            font: FontId(0),
            font_size: 10.0,
            baseline: 48.0,
            color: Color::BLACK,
            space_after: false,
            underlined: false,
            next: None,
        }
    }

    #[test]
    fn test_char_bbox_follows_rotation() {
        assert_eq!(word(0).char_bbox(1), BoundingBox::new(1.0, 20.0, 2.0, 50.0));
        assert_eq!(word(1).char_bbox(1), BoundingBox::new(10.0, 1.0, 40.0, 2.0));
        assert_eq!(word(2).char_bbox(1), BoundingBox::new(2.0, 20.0, 1.0, 50.0));
        assert_eq!(word(3).char_bbox(1), BoundingBox::new(10.0, 2.0, 40.0, 1.0));
    }

    #[test]
    fn test_empty_flow() {
        let flow = TextFlow::default();
        assert!(flow.is_empty());
        assert!(flow.first_region().is_end());
        assert!(flow.regions().is_empty());
    }
}
