//! Word cursor.

use std::fmt;

use crate::area::Area;
use crate::arena::flow::WordNode;
use crate::arena::{Color, TextFlow, WordId};
use crate::codec::code_points_to_string;
use crate::font::FontDescriptor;
use crate::geometry::{BoundingBox, HasBoundingBox};

use super::character::Character;
use super::cursor::{Children, Cursor, FlowNode, same_position};

/// One word of a line.
pub struct Word<'a> {
    flow: &'a TextFlow,
    id: Option<WordId>,
    characters: Children<Character<'a>>,
}

impl<'a> Word<'a> {
    pub(crate) const fn at(flow: &'a TextFlow, id: Option<WordId>) -> Self {
        Self {
            flow,
            id,
            characters: Children::new(),
        }
    }

    fn node(&self) -> &'a WordNode {
        match self.id {
            Some(id) => self.flow.word(id),
            None => panic!("word accessor called on an end cursor"),
        }
    }

    pub fn id(&self) -> Option<WordId> {
        self.id
    }

    /// The word's characters, built on first access. Empty for the end
    /// cursor.
    pub fn characters(&self) -> &[Character<'a>] {
        let first = self
            .id
            .filter(|&id| self.flow.word(id).len() > 0)
            .map(|id| (id, 0));
        self.characters.get(self.flow, first)
    }

    /// Number of characters; zero for the end cursor.
    pub fn len(&self) -> usize {
        self.id.map_or(0, |id| self.flow.word(id).len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Decoded, normalized text. Empty for the end cursor.
    pub fn text(&self) -> String {
        match self.id {
            Some(id) => {
                code_points_to_string(&self.flow.word(id).text, self.flow.params.normalization)
            }
            None => String::new(),
        }
    }

    /// # Panics
    /// Panics on the end cursor, like every scalar accessor.
    pub fn font(&self) -> &'a FontDescriptor {
        self.flow.font(self.node().font)
    }

    pub fn font_name(&self) -> &'a str {
        self.font().name()
    }

    pub fn font_tag(&self) -> &'a str {
        self.font().tag()
    }

    pub fn font_size(&self) -> f64 {
        self.node().font_size
    }

    pub fn baseline(&self) -> f64 {
        self.node().baseline
    }

    pub fn color(&self) -> Color {
        self.node().color
    }

    /// Whether the engine saw a gap between this word and the next one on
    /// the line.
    pub fn space_after(&self) -> bool {
        self.node().space_after
    }

    pub fn underlined(&self) -> bool {
        self.node().underlined
    }

    pub fn area(&self, page: i32) -> Area {
        Area::new(page, self.rotation(), self.bounding_box())
    }
}

impl HasBoundingBox for Word<'_> {
    fn bounding_box(&self) -> BoundingBox {
        self.node().bbox
    }

    fn rotation(&self) -> i32 {
        self.node().rotation
    }
}

impl Cursor for Word<'_> {
    fn advance(&mut self) {
        self.characters.reset();
        if let Some(id) = self.id {
            self.id = Self::successor(self.flow, id);
        }
    }

    fn is_end(&self) -> bool {
        self.id.is_none()
    }
}

impl<'a> FlowNode<'a> for Word<'a> {
    type Id = WordId;

    fn at(flow: &'a TextFlow, id: Option<WordId>) -> Self {
        Word::at(flow, id)
    }

    fn successor(flow: &'a TextFlow, id: WordId) -> Option<WordId> {
        flow.word(id).next
    }
}

/// Copies the position only; the clone builds its own character list.
impl Clone for Word<'_> {
    fn clone(&self) -> Self {
        Word::at(self.flow, self.id)
    }
}

impl PartialEq for Word<'_> {
    fn eq(&self, other: &Self) -> bool {
        same_position((self.flow, self.id), (other.flow, other.id))
    }
}

impl fmt::Debug for Word<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Word")
            .field("id", &self.id)
            .field("characters_cached", &self.characters.is_materialized())
            .finish()
    }
}
