//! Character cursor.

use std::fmt;

use crate::arena::flow::WordNode;
use crate::arena::{Color, TextFlow, WordId};
use crate::codec::normalize;
use crate::font::FontDescriptor;
use crate::geometry::{BoundingBox, HasBoundingBox};

use super::cursor::{Cursor, FlowNode, same_position};
use super::word::Word;

/// One character of a word. Font, colour and baseline are shared with the
/// enclosing word.
#[derive(Clone, Copy)]
pub struct Character<'a> {
    flow: &'a TextFlow,
    pos: Option<(WordId, usize)>,
}

impl<'a> Character<'a> {
    fn node(&self) -> (&'a WordNode, usize) {
        match self.pos {
            Some((word, index)) => (self.flow.word(word), index),
            None => panic!("character accessor called on an end cursor"),
        }
    }

    /// Position within the word.
    ///
    /// # Panics
    /// Panics on the end cursor, like every scalar accessor.
    pub fn index(&self) -> usize {
        self.node().1
    }

    pub fn code_point(&self) -> u32 {
        let (word, index) = self.node();
        word.text[index]
    }

    /// The character as normalized text (U+FFFD for an invalid code point).
    pub fn text(&self) -> String {
        if self.pos.is_none() {
            return String::new();
        }
        let c = char::from_u32(self.code_point()).unwrap_or(char::REPLACEMENT_CHARACTER);
        let mut buf = [0u8; 4];
        normalize(c.encode_utf8(&mut buf), self.flow.params.normalization).into_owned()
    }

    /// The word this character belongs to.
    pub fn word(&self) -> Word<'a> {
        Word::at(self.flow, self.pos.map(|(word, _)| word))
    }

    pub fn font(&self) -> &'a FontDescriptor {
        self.flow.font(self.node().0.font)
    }

    pub fn font_name(&self) -> &'a str {
        self.font().name()
    }

    pub fn font_size(&self) -> f64 {
        self.node().0.font_size
    }

    pub fn baseline(&self) -> f64 {
        self.node().0.baseline
    }

    pub fn color(&self) -> Color {
        self.node().0.color
    }

    pub fn underlined(&self) -> bool {
        self.node().0.underlined
    }

    /// True for the last character of a word followed by a space.
    pub fn space_after(&self) -> bool {
        let (word, index) = self.node();
        word.space_after && index + 1 == word.len()
    }
}

impl HasBoundingBox for Character<'_> {
    fn bounding_box(&self) -> BoundingBox {
        let (word, index) = self.node();
        word.char_bbox(index)
    }

    fn rotation(&self) -> i32 {
        self.node().0.rotation
    }
}

impl Cursor for Character<'_> {
    fn advance(&mut self) {
        if let Some((word, index)) = self.pos {
            self.pos = Self::successor(self.flow, (word, index));
        }
    }

    fn is_end(&self) -> bool {
        self.pos.is_none()
    }
}

impl<'a> FlowNode<'a> for Character<'a> {
    type Id = (WordId, usize);

    fn at(flow: &'a TextFlow, id: Option<Self::Id>) -> Self {
        Self { flow, pos: id }
    }

    fn successor(flow: &'a TextFlow, (word, index): Self::Id) -> Option<Self::Id> {
        (index + 1 < flow.word(word).len()).then_some((word, index + 1))
    }
}

impl PartialEq for Character<'_> {
    fn eq(&self, other: &Self) -> bool {
        same_position((self.flow, self.pos), (other.flow, other.pos))
    }
}

impl fmt::Debug for Character<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Character").field("pos", &self.pos).finish()
    }
}
