//! Region cursor, the top of the text flow.

use std::fmt;

use crate::area::Area;
use crate::arena::flow::RegionNode;
use crate::arena::{RegionId, TextFlow};
use crate::geometry::{BoundingBox, HasBoundingBox};

use super::block::Block;
use super::cursor::{Children, Cursor, FlowNode, same_position};

/// One text region (flow) of a page.
pub struct Region<'a> {
    flow: &'a TextFlow,
    id: Option<RegionId>,
    blocks: Children<Block<'a>>,
}

impl<'a> Region<'a> {
    pub(crate) const fn at(flow: &'a TextFlow, id: Option<RegionId>) -> Self {
        Self {
            flow,
            id,
            blocks: Children::new(),
        }
    }

    fn node(&self) -> &'a RegionNode {
        match self.id {
            Some(id) => self.flow.region(id),
            None => panic!("region accessor called on an end cursor"),
        }
    }

    pub fn id(&self) -> Option<RegionId> {
        self.id
    }

    /// The region's blocks, built on first access. Empty for the end cursor.
    pub fn blocks(&self) -> &[Block<'a>] {
        let first = self.id.and_then(|id| self.flow.region(id).first_block);
        self.blocks.get(self.flow, first)
    }

    /// Every block's text followed by a newline.
    pub fn text(&self) -> String {
        let mut text = String::new();
        for block in self.blocks() {
            text.push_str(&block.text());
            text.push('\n');
        }
        text
    }

    pub fn area(&self, page: i32) -> Area {
        Area::new(page, self.rotation(), self.bounding_box())
    }
}

impl HasBoundingBox for Region<'_> {
    fn bounding_box(&self) -> BoundingBox {
        self.node().bbox
    }

    /// Always 0: blocks within a region may be rotated differently, so ask
    /// the blocks.
    fn rotation(&self) -> i32 {
        0
    }
}

impl Cursor for Region<'_> {
    fn advance(&mut self) {
        self.blocks.reset();
        if let Some(id) = self.id {
            self.id = Self::successor(self.flow, id);
        }
    }

    fn is_end(&self) -> bool {
        self.id.is_none()
    }
}

impl<'a> FlowNode<'a> for Region<'a> {
    type Id = RegionId;

    fn at(flow: &'a TextFlow, id: Option<RegionId>) -> Self {
        Region::at(flow, id)
    }

    fn successor(flow: &'a TextFlow, id: RegionId) -> Option<RegionId> {
        flow.region(id).next
    }
}

impl Clone for Region<'_> {
    fn clone(&self) -> Self {
        Region::at(self.flow, self.id)
    }
}

impl PartialEq for Region<'_> {
    fn eq(&self, other: &Self) -> bool {
        same_position((self.flow, self.id), (other.flow, other.id))
    }
}

impl fmt::Debug for Region<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Region")
            .field("id", &self.id)
            .field("blocks_cached", &self.blocks.is_materialized())
            .finish()
    }
}
