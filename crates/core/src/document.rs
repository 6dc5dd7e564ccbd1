//! Document-level text: pages in order and their combined font usage.

use crate::arena::TextFlow;
use crate::font::FontCollection;
use crate::layout::TextCursor;
use crate::page::TextPage;

#[derive(Debug, Default)]
pub struct TextDocument {
    pages: Vec<TextPage>,
}

impl TextDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a document from per-page flows, numbering pages from zero.
    pub fn from_flows<I: IntoIterator<Item = TextFlow>>(flows: I) -> Self {
        let pages = flows
            .into_iter()
            .enumerate()
            .map(|(index, flow)| TextPage::new(index, flow))
            .collect();
        Self { pages }
    }

    /// Append a page; it gets the next page number.
    pub fn push(&mut self, flow: TextFlow) -> &TextPage {
        let index = self.pages.len();
        self.pages.push(TextPage::new(index, flow));
        &self.pages[index]
    }

    pub fn page(&self, index: usize) -> Option<&TextPage> {
        self.pages.get(index)
    }

    pub fn pages(&self) -> &[TextPage] {
        &self.pages
    }

    pub fn num_pages(&self) -> usize {
        self.pages.len()
    }

    /// A [`TextCursor`] on the first character of the document.
    pub fn cursor(&self) -> TextCursor<'_> {
        TextCursor::new(&self.pages)
    }

    /// Concatenated page text.
    pub fn text(&self) -> String {
        self.pages.iter().map(TextPage::text).collect()
    }

    /// Font usage over all pages.
    pub fn fonts(&self) -> FontCollection {
        let mut fonts = FontCollection::new();
        for page in &self.pages {
            fonts.merge(page.fonts());
        }
        fonts
    }
}
