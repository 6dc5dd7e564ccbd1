//! Line cursor.

use std::fmt;

use crate::area::Area;
use crate::arena::flow::LineNode;
use crate::arena::{LineId, TextFlow};
use crate::geometry::{BoundingBox, HasBoundingBox};

use super::cursor::{Children, Cursor, FlowNode, same_position};
use super::word::Word;

/// One line of a block.
pub struct Line<'a> {
    flow: &'a TextFlow,
    id: Option<LineId>,
    words: Children<Word<'a>>,
}

impl<'a> Line<'a> {
    pub(crate) const fn at(flow: &'a TextFlow, id: Option<LineId>) -> Self {
        Self {
            flow,
            id,
            words: Children::new(),
        }
    }

    fn node(&self) -> &'a LineNode {
        match self.id {
            Some(id) => self.flow.line(id),
            None => panic!("line accessor called on an end cursor"),
        }
    }

    pub fn id(&self) -> Option<LineId> {
        self.id
    }

    /// The line's words, built on first access. Empty for the end cursor.
    pub fn words(&self) -> &[Word<'a>] {
        let first = self.id.and_then(|id| self.flow.line(id).first_word);
        self.words.get(self.flow, first)
    }

    /// Whether the line ends in a hyphen that breaks a word.
    ///
    /// # Panics
    /// Panics on the end cursor.
    pub fn hyphenated(&self) -> bool {
        self.node().hyphenated
    }

    /// Words in order, each followed by a space when the engine saw one.
    pub fn text(&self) -> String {
        let mut text = String::new();
        push_words(&mut text, self.words());
        text
    }

    pub fn area(&self, page: i32) -> Area {
        Area::new(page, self.rotation(), self.bounding_box())
    }
}

/// Append each word's text, plus a space after words flagged `space_after`.
pub(crate) fn push_words(text: &mut String, words: &[Word<'_>]) {
    for word in words {
        text.push_str(&word.text());
        if word.space_after() {
            text.push(' ');
        }
    }
}

impl HasBoundingBox for Line<'_> {
    fn bounding_box(&self) -> BoundingBox {
        self.node().bbox
    }

    fn rotation(&self) -> i32 {
        self.node().rotation
    }
}

impl Cursor for Line<'_> {
    fn advance(&mut self) {
        self.words.reset();
        if let Some(id) = self.id {
            self.id = Self::successor(self.flow, id);
        }
    }

    fn is_end(&self) -> bool {
        self.id.is_none()
    }
}

impl<'a> FlowNode<'a> for Line<'a> {
    type Id = LineId;

    fn at(flow: &'a TextFlow, id: Option<LineId>) -> Self {
        Line::at(flow, id)
    }

    fn successor(flow: &'a TextFlow, id: LineId) -> Option<LineId> {
        flow.line(id).next
    }
}

impl Clone for Line<'_> {
    fn clone(&self) -> Self {
        Line::at(self.flow, self.id)
    }
}

impl PartialEq for Line<'_> {
    fn eq(&self, other: &Self) -> bool {
        same_position((self.flow, self.id), (other.flow, other.id))
    }
}

impl fmt::Debug for Line<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Line")
            .field("id", &self.id)
            .field("words_cached", &self.words.is_materialized())
            .finish()
    }
}
