//! Block cursor and block text reconstruction.

use std::fmt;

use crate::area::Area;
use crate::arena::flow::BlockNode;
use crate::arena::{BlockId, TextFlow};
use crate::geometry::{BoundingBox, HasBoundingBox};

use super::cursor::{Children, Cursor, FlowNode, same_position};
use super::line::{Line, push_words};

/// One block (paragraph-like group of lines) of a region.
pub struct Block<'a> {
    flow: &'a TextFlow,
    id: Option<BlockId>,
    lines: Children<Line<'a>>,
}

impl<'a> Block<'a> {
    pub(crate) const fn at(flow: &'a TextFlow, id: Option<BlockId>) -> Self {
        Self {
            flow,
            id,
            lines: Children::new(),
        }
    }

    fn node(&self) -> &'a BlockNode {
        match self.id {
            Some(id) => self.flow.block(id),
            None => panic!("block accessor called on an end cursor"),
        }
    }

    pub fn id(&self) -> Option<BlockId> {
        self.id
    }

    /// The block's lines, built on first access. Empty for the end cursor.
    pub fn lines(&self) -> &[Line<'a>] {
        let first = self.id.and_then(|id| self.flow.block(id).first_line);
        self.lines.get(self.flow, first)
    }

    /// Block text with hyphenated line breaks rejoined.
    ///
    /// Each line contributes its words as [`Line::text`] does. Lines are
    /// joined by a single space, except when the previous line is
    /// hyphenated and this line has words: then exactly one character (the
    /// hyphen ending the previous line) is removed and the first word
    /// continues directly. The removal is unconditional; it does not check
    /// what the character is.
    ///
    /// The joining space goes only between lines. A space at the very end
    /// comes from the last word's `space_after` flag, so `"example text "`
    /// keeps its trailing space while a block whose last word has the flag
    /// cleared ends on that word.
    pub fn text(&self) -> String {
        let join_hyphenated = self.flow.params.join_hyphenated;
        let mut text = String::new();
        let mut prev_hyphenated = None;

        for line in self.lines() {
            let words = line.words();
            match prev_hyphenated {
                None => {}
                Some(true) if join_hyphenated && !words.is_empty() => {
                    text.pop();
                }
                Some(_) => text.push(' '),
            }
            push_words(&mut text, words);
            prev_hyphenated = Some(line.hyphenated());
        }
        text
    }

    pub fn area(&self, page: i32) -> Area {
        Area::new(page, self.rotation(), self.bounding_box())
    }
}

impl HasBoundingBox for Block<'_> {
    fn bounding_box(&self) -> BoundingBox {
        self.node().bbox
    }

    fn rotation(&self) -> i32 {
        self.node().rotation
    }
}

impl Cursor for Block<'_> {
    fn advance(&mut self) {
        self.lines.reset();
        if let Some(id) = self.id {
            self.id = Self::successor(self.flow, id);
        }
    }

    fn is_end(&self) -> bool {
        self.id.is_none()
    }
}

impl<'a> FlowNode<'a> for Block<'a> {
    type Id = BlockId;

    fn at(flow: &'a TextFlow, id: Option<BlockId>) -> Self {
        Block::at(flow, id)
    }

    fn successor(flow: &'a TextFlow, id: BlockId) -> Option<BlockId> {
        flow.block(id).next
    }
}

impl Clone for Block<'_> {
    fn clone(&self) -> Self {
        Block::at(self.flow, self.id)
    }
}

impl PartialEq for Block<'_> {
    fn eq(&self, other: &Self) -> bool {
        same_position((self.flow, self.id), (other.flow, other.id))
    }
}

impl fmt::Debug for Block<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Block")
            .field("id", &self.id)
            .field("lines_cached", &self.lines.is_materialized())
            .finish()
    }
}
