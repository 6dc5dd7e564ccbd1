//! A page's text analysis, the ownership root for its proxies.

use once_cell::unsync::OnceCell;

use crate::area::{Area, compile};
use crate::arena::TextFlow;
use crate::font::FontCollection;
use crate::geometry::HasBoundingBox;
use crate::layout::{Cursor, Region, TextCursor};

/// The text flow of one page together with its position in the document.
///
/// Every [`Region`] (and everything reached from it) borrows the page, so
/// the analysis cannot be dropped while a proxy is alive.
#[derive(Debug)]
pub struct TextPage {
    index: usize,
    flow: TextFlow,
    fonts: OnceCell<FontCollection>,
}

impl TextPage {
    pub fn new(index: usize, flow: TextFlow) -> Self {
        Self {
            index,
            flow,
            fonts: OnceCell::new(),
        }
    }

    /// Zero-based page number.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn flow(&self) -> &TextFlow {
        &self.flow
    }

    pub fn first_region(&self) -> Region<'_> {
        self.flow.first_region()
    }

    pub fn regions(&self) -> Vec<Region<'_>> {
        self.flow.regions()
    }

    /// Each region's text followed by a newline.
    pub fn text(&self) -> String {
        let mut text = String::new();
        for region in self.first_region().siblings() {
            text.push_str(&region.text());
            text.push('\n');
        }
        text
    }

    /// A [`TextCursor`] confined to this page, on its first character.
    pub fn cursor(&self) -> TextCursor<'_> {
        TextCursor::new(std::slice::from_ref(self))
    }

    /// Font usage on this page, scanned on first call.
    pub fn fonts(&self) -> &FontCollection {
        self.fonts.get_or_init(|| FontCollection::scan(&self.flow))
    }

    /// One area per item on this page, with overlapping ones merged.
    pub fn areas<I>(&self, items: I) -> Vec<Area>
    where
        I: IntoIterator,
        I::Item: HasBoundingBox,
    {
        let page = i32::try_from(self.index).unwrap_or(i32::MAX);
        compile(
            items
                .into_iter()
                .map(|item| Area::new(page, item.rotation(), item.bounding_box())),
        )
    }
}
