//! Document-wide text cursor.
//!
//! Where a [`Cursor`](super::Cursor) walks one sibling chain, a
//! [`TextCursor`] holds a position on every level at once (page, region,
//! block, line, word and character) and steps through the text in reading
//! order. A step can cross into the next or previous container, up to the
//! [`IterateLimit`] the caller passes.

use std::iter::successors;

use crate::arena::{BlockId, LineId, RegionId, TextFlow, WordId};
use crate::page::TextPage;

use super::cursor::FlowNode;
use super::{Block, Character, Line, Region, Word};

/// A level of the text hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Element {
    Page,
    Region,
    Block,
    Line,
    Word,
    Character,
}

impl Element {
    const fn depth(self) -> usize {
        self as usize
    }
}

/// How far a step may reach: `WithinLine` keeps a word step inside the
/// current line, `WithinBlock` lets it continue on the following lines of
/// the block, and so on up to `WithinDocument`.
///
/// A limit below an element's own container forbids stepping that element
/// at all, e.g. a line step with `WithinLine`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IterateLimit {
    WithinWord,
    WithinLine,
    WithinBlock,
    WithinRegion,
    WithinPage,
    WithinDocument,
}

impl IterateLimit {
    /// Depth of the container the limit names; the document is 0.
    const fn depth(self) -> usize {
        match self {
            IterateLimit::WithinDocument => 0,
            IterateLimit::WithinPage => 1,
            IterateLimit::WithinRegion => 2,
            IterateLimit::WithinBlock => 3,
            IterateLimit::WithinLine => 4,
            IterateLimit::WithinWord => 5,
        }
    }

    /// `element` may move inside its own container.
    const fn allows_step(self, element: usize) -> bool {
        self.depth() <= element
    }

    /// `element` may move on into the next or previous container.
    const fn allows_crossing(self, element: usize) -> bool {
        self.depth() < element
    }
}

const LEVELS: usize = 6;

/// A position in a run of pages, one slot per [`Element`].
///
/// Each slot is either a node of its container or "past the end" of it
/// (`None`); a slot past the end empties every slot below it. Stepping
/// forward off the last child leaves the cursor past the end, from where a
/// backward step returns to the last child. A backward step that finds
/// nothing within its limit leaves the cursor unchanged.
#[derive(Debug, Clone)]
pub struct TextCursor<'d> {
    pages: &'d [TextPage],
    /// Page index, region/block/line/word arena indices, character index.
    pos: [Option<usize>; LEVELS],
}

macro_rules! steps {
    ($($next:ident, $previous:ident, $element:ident, $get:ident -> $item:ty;)*) => {
        $(
            #[doc = concat!("Step to the next ", stringify!($get), " within `limit`.")]
            pub fn $next(&mut self, limit: IterateLimit) -> Option<$item> {
                if self.next(Element::$element, limit) {
                    self.$get()
                } else {
                    None
                }
            }

            #[doc = concat!("Step to the previous ", stringify!($get), " within `limit`.")]
            pub fn $previous(&mut self, limit: IterateLimit) -> Option<$item> {
                if self.previous(Element::$element, limit) {
                    self.$get()
                } else {
                    None
                }
            }
        )*
    };
}

impl<'d> TextCursor<'d> {
    /// Cursor on the first character of `pages`, or on the first position
    /// that exists when the text starts with empty containers.
    pub(crate) fn new(pages: &'d [TextPage]) -> Self {
        let mut cursor = Self {
            pages,
            pos: [None; LEVELS],
        };
        cursor.to_front(Element::Page);
        cursor
    }

    /// Whether every slot down to `element` names a node.
    pub fn is_valid(&self, element: Element) -> bool {
        self.valid(element.depth())
    }

    pub fn page(&self) -> Option<&'d TextPage> {
        self.pos[0].map(|p| &self.pages[p])
    }

    pub fn region(&self) -> Option<Region<'d>> {
        let id = self.slot(Element::Region)?;
        Some(Region::at(self.flow()?, Some(RegionId(id))))
    }

    pub fn block(&self) -> Option<Block<'d>> {
        let id = self.slot(Element::Block)?;
        Some(Block::at(self.flow()?, Some(BlockId(id))))
    }

    pub fn line(&self) -> Option<Line<'d>> {
        let id = self.slot(Element::Line)?;
        Some(Line::at(self.flow()?, Some(LineId(id))))
    }

    pub fn word(&self) -> Option<Word<'d>> {
        let id = self.slot(Element::Word)?;
        Some(Word::at(self.flow()?, Some(WordId(id))))
    }

    pub fn character(&self) -> Option<Character<'d>> {
        let index = self.slot(Element::Character)?;
        let word = self.pos[Element::Word.depth()]?;
        Some(Character::at(self.flow()?, Some((WordId(word), index))))
    }

    steps! {
        next_page, previous_page, Page, page -> &'d TextPage;
        next_region, previous_region, Region, region -> Region<'d>;
        next_block, previous_block, Block, block -> Block<'d>;
        next_line, previous_line, Line, line -> Line<'d>;
        next_word, previous_word, Word, word -> Word<'d>;
        next_character, previous_character, Character, character -> Character<'d>;
    }

    /// Move `element` one step forward and reset everything below it to
    /// the front. Past the last child of its container the step continues
    /// into the following containers when `limit` allows; otherwise the
    /// cursor ends up past the end. Returns whether `element` is valid
    /// afterwards.
    pub fn next(&mut self, element: Element, limit: IterateLimit) -> bool {
        self.step_forward(element.depth(), limit)
    }

    /// Move `element` one step back and reset everything below it to the
    /// front. From past the end this lands on the last child. Returns
    /// `false`, leaving the cursor as it was, when there is nothing before
    /// the current position within `limit`.
    pub fn previous(&mut self, element: Element, limit: IterateLimit) -> bool {
        let saved = self.pos;
        let moved = self.step_back(element.depth(), limit);
        if !moved {
            self.pos = saved;
        }
        moved
    }

    /// Reset `element` and everything below it to the first child of its
    /// container.
    pub fn to_front(&mut self, element: Element) {
        for level in element.depth()..LEVELS {
            self.pos[level] = self.first_child(level);
        }
    }

    fn step_forward(&mut self, level: usize, limit: IterateLimit) -> bool {
        if !limit.allows_step(level) {
            return false;
        }
        if let Some(current) = self.slot_at(level) {
            self.pos[level] = self.successor(level, current);
            self.reset_below(level);
        }
        if limit.allows_crossing(level) {
            while !self.valid(level) {
                if !self.step_forward(level - 1, limit) {
                    break;
                }
            }
        }
        self.valid(level)
    }

    fn step_back(&mut self, level: usize, limit: IterateLimit) -> bool {
        if !limit.allows_step(level) {
            return false;
        }
        if level == 0 || self.valid(level - 1) {
            let target = match self.pos[level] {
                Some(current) => self.predecessor(level, current),
                None => self.last_child(level),
            };
            if let Some(target) = target {
                self.pos[level] = Some(target);
                self.reset_below(level);
                return true;
            }
        }
        if !limit.allows_crossing(level) {
            return false;
        }
        loop {
            if !self.step_back(level - 1, limit) {
                return false;
            }
            if let Some(last) = self.last_child(level) {
                self.pos[level] = Some(last);
                self.reset_below(level);
                return true;
            }
        }
    }

    fn reset_below(&mut self, level: usize) {
        for below in level + 1..LEVELS {
            self.pos[below] = self.first_child(below);
        }
    }

    fn valid(&self, level: usize) -> bool {
        self.pos[..=level].iter().all(Option::is_some)
    }

    fn slot(&self, element: Element) -> Option<usize> {
        self.slot_at(element.depth())
    }

    fn slot_at(&self, level: usize) -> Option<usize> {
        if self.valid(level) {
            self.pos[level]
        } else {
            None
        }
    }

    fn flow(&self) -> Option<&'d TextFlow> {
        self.page().map(TextPage::flow)
    }

    /// First node of `level` inside the current node one level up.
    fn first_child(&self, level: usize) -> Option<usize> {
        if level == 0 {
            return (!self.pages.is_empty()).then_some(0);
        }
        if !self.valid(level - 1) {
            return None;
        }
        let flow = self.flow()?;
        let parent = self.pos[level - 1]?;
        match level {
            1 => flow.first_region.map(RegionId::index),
            2 => flow.region(RegionId(parent)).first_block.map(BlockId::index),
            3 => flow.block(BlockId(parent)).first_line.map(LineId::index),
            4 => flow.line(LineId(parent)).first_word.map(WordId::index),
            _ => (flow.word(WordId(parent)).len() > 0).then_some(0),
        }
    }

    fn successor(&self, level: usize, current: usize) -> Option<usize> {
        if level == 0 {
            return (current + 1 < self.pages.len()).then_some(current + 1);
        }
        let flow = self.flow()?;
        match level {
            1 => flow.region(RegionId(current)).next.map(RegionId::index),
            2 => flow.block(BlockId(current)).next.map(BlockId::index),
            3 => flow.line(LineId(current)).next.map(LineId::index),
            4 => flow.word(WordId(current)).next.map(WordId::index),
            _ => {
                let word = flow.word(WordId(self.pos[4]?));
                (current + 1 < word.len()).then_some(current + 1)
            }
        }
    }

    // sibling chains only link forward, so both of these walk from the front

    fn predecessor(&self, level: usize, current: usize) -> Option<usize> {
        successors(self.first_child(level), |&i| self.successor(level, i))
            .take_while(|&i| i != current)
            .last()
    }

    fn last_child(&self, level: usize) -> Option<usize> {
        successors(self.first_child(level), |&i| self.successor(level, i)).last()
    }
}
