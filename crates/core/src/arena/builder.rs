//! Incremental construction of a [`TextFlow`].
//!
//! The builder is the hand-off point from the PDF engine: the engine opens a
//! region, then blocks, lines and words inside it, in reading order.
//! Siblings are linked as they are added.

use smallvec::SmallVec;

use crate::error::{FlowError, Result};
use crate::font::FontDescriptor;
use crate::geometry::BoundingBox;
use crate::params::TextParams;

use super::flow::{
    BlockId, BlockNode, Color, FontId, LineId, LineNode, RegionId, RegionNode, TextFlow, WordId,
    WordNode,
};

/// One word as reported by the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct RawWord {
    /// Unicode code points, one per character.
    pub text: Vec<u32>,
    /// Character edges along the primary axis (`text.len() + 1` values).
    /// Left empty, they are spread evenly across `bbox`.
    pub edges: Vec<f64>,
    pub bbox: BoundingBox,
    pub rotation: i32,
    pub font: FontId,
    pub font_size: f64,
    pub baseline: f64,
    pub color: Color,
    pub space_after: bool,
    pub underlined: bool,
}

impl RawWord {
    /// Upright black word with evenly spaced characters and its baseline on
    /// the box's `y2` edge.
    pub fn new(text: &str, bbox: BoundingBox, font: FontId, font_size: f64) -> Self {
        Self {
            text: text.chars().map(u32::from).collect(),
            edges: Vec::new(),
            bbox,
            rotation: 0,
            font,
            font_size,
            baseline: bbox.y2,
            color: Color::BLACK,
            space_after: false,
            underlined: false,
        }
    }

    pub fn space_after(mut self, space_after: bool) -> Self {
        self.space_after = space_after;
        self
    }

    pub fn underlined(mut self, underlined: bool) -> Self {
        self.underlined = underlined;
        self
    }

    pub fn with_rotation(mut self, rotation: i32) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_edges(mut self, edges: Vec<f64>) -> Self {
        self.edges = edges;
        self
    }

    pub fn with_baseline(mut self, baseline: f64) -> Self {
        self.baseline = baseline;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

fn check_rotation(rotation: i32) -> Result<i32> {
    if (0..=3).contains(&rotation) {
        Ok(rotation)
    } else {
        Err(FlowError::InvalidRotation(rotation))
    }
}

fn check_bbox(bbox: Option<BoundingBox>, what: &'static str) -> Result<()> {
    match bbox {
        Some(b) if !b.is_finite() => Err(FlowError::NonFinite(what)),
        _ => Ok(()),
    }
}

/// Evenly spaced edges along the primary axis of `rotation`.
fn spread_edges(bbox: &BoundingBox, rotation: i32, count: usize) -> SmallVec<[f64; 17]> {
    let (start, end) = match rotation {
        0 => (bbox.x1, bbox.x2),
        1 => (bbox.y1, bbox.y2),
        2 => (bbox.x2, bbox.x1),
        _ => (bbox.y2, bbox.y1),
    };
    if count == 0 {
        return SmallVec::from_slice(&[start]);
    }
    let step = (end - start) / count as f64;
    (0..=count)
        .map(|i| if i == count { end } else { start + step * i as f64 })
        .collect()
}

/// Builds a [`TextFlow`] node by node.
#[derive(Debug, Default)]
pub struct TextFlowBuilder {
    flow: TextFlow,
    region_fixed: Vec<bool>,
    block_fixed: Vec<bool>,
    line_fixed: Vec<bool>,
    region: Option<RegionId>,
    block: Option<BlockId>,
    line: Option<LineId>,
    word: Option<WordId>,
}

impl TextFlowBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_params(params: TextParams) -> Self {
        let mut builder = Self::default();
        builder.flow.params = params;
        builder
    }

    /// Register a font; a tag seen before returns the existing id.
    pub fn add_font(&mut self, font: FontDescriptor) -> FontId {
        if let Some(id) = self.flow.font_by_tag(&font.tag) {
            return id;
        }
        self.flow.fonts.push(font);
        FontId(self.flow.fonts.len() - 1)
    }

    pub fn font_by_tag(&self, tag: &str) -> Option<FontId> {
        self.flow.font_by_tag(tag)
    }

    /// Open a new region after the current one. `None` lets the box be
    /// computed from the region's blocks.
    pub fn begin_region(&mut self, bbox: Option<BoundingBox>) -> Result<RegionId> {
        check_bbox(bbox, "region")?;
        let id = RegionId(self.flow.regions.len());
        self.flow.regions.push(RegionNode {
            bbox: bbox.unwrap_or_default(),
            first_block: None,
            next: None,
        });
        self.region_fixed.push(bbox.is_some());
        match self.region {
            Some(prev) => self.flow.regions[prev.0].next = Some(id),
            None => self.flow.first_region = Some(id),
        }
        self.region = Some(id);
        self.block = None;
        self.line = None;
        self.word = None;
        Ok(id)
    }

    pub fn begin_block(&mut self, bbox: Option<BoundingBox>, rotation: i32) -> Result<BlockId> {
        let region = self.region.ok_or(FlowError::NoOpenContainer {
            child: "block",
            parent: "region",
        })?;
        let rotation = check_rotation(rotation)?;
        check_bbox(bbox, "block")?;
        let id = BlockId(self.flow.blocks.len());
        self.flow.blocks.push(BlockNode {
            bbox: bbox.unwrap_or_default(),
            rotation,
            first_line: None,
            next: None,
        });
        self.block_fixed.push(bbox.is_some());
        match self.block {
            Some(prev) => self.flow.blocks[prev.0].next = Some(id),
            None => self.flow.regions[region.0].first_block = Some(id),
        }
        self.block = Some(id);
        self.line = None;
        self.word = None;
        Ok(id)
    }

    pub fn begin_line(
        &mut self,
        bbox: Option<BoundingBox>,
        rotation: i32,
        hyphenated: bool,
    ) -> Result<LineId> {
        let block = self.block.ok_or(FlowError::NoOpenContainer {
            child: "line",
            parent: "block",
        })?;
        let rotation = check_rotation(rotation)?;
        check_bbox(bbox, "line")?;
        let id = LineId(self.flow.lines.len());
        self.flow.lines.push(LineNode {
            bbox: bbox.unwrap_or_default(),
            rotation,
            hyphenated,
            first_word: None,
            next: None,
        });
        self.line_fixed.push(bbox.is_some());
        match self.line {
            Some(prev) => self.flow.lines[prev.0].next = Some(id),
            None => self.flow.blocks[block.0].first_line = Some(id),
        }
        self.line = Some(id);
        self.word = None;
        Ok(id)
    }

    pub fn add_word(&mut self, word: RawWord) -> Result<WordId> {
        let line = self.line.ok_or(FlowError::NoOpenContainer {
            child: "word",
            parent: "line",
        })?;
        let rotation = check_rotation(word.rotation)?;
        check_bbox(Some(word.bbox), "word")?;
        if !word.baseline.is_finite() {
            return Err(FlowError::NonFinite("word baseline"));
        }
        if word.edges.iter().any(|e| !e.is_finite()) {
            return Err(FlowError::NonFinite("word edges"));
        }
        if !word.font_size.is_finite() || word.font_size < 0.0 {
            return Err(FlowError::InvalidFontSize(word.font_size));
        }
        if word.font.0 >= self.flow.fonts.len() {
            return Err(FlowError::UnknownFont(format!("#{}", word.font.0)));
        }
        let edges: SmallVec<[f64; 17]> = if word.edges.is_empty() {
            spread_edges(&word.bbox, rotation, word.text.len())
        } else if word.edges.len() == word.text.len() + 1 {
            SmallVec::from_vec(word.edges)
        } else {
            return Err(FlowError::EdgeCount {
                text: word.text.iter().filter_map(|&c| char::from_u32(c)).collect(),
                expected: word.text.len() + 1,
                got: word.edges.len(),
            });
        };

        let id = WordId(self.flow.words.len());
        self.flow.words.push(WordNode {
            bbox: word.bbox,
            rotation,
            text: SmallVec::from_vec(word.text),
            edges,
            font: word.font,
            font_size: word.font_size,
            baseline: word.baseline,
            color: word.color,
            space_after: word.space_after,
            underlined: word.underlined,
            next: None,
        });
        match self.word {
            Some(prev) => self.flow.words[prev.0].next = Some(id),
            None => self.flow.lines[line.0].first_word = Some(id),
        }
        self.word = Some(id);
        Ok(id)
    }

    /// Close the flow. Container boxes that were not given are computed as
    /// the union of their children; empty containers get the zero box.
    pub fn finish(mut self) -> TextFlow {
        let flow = &mut self.flow;

        for i in 0..flow.lines.len() {
            if self.line_fixed[i] {
                continue;
            }
            let mut cur = flow.lines[i].first_word;
            let mut bbox: Option<BoundingBox> = None;
            while let Some(w) = cur {
                let node = &flow.words[w.0];
                bbox = Some(bbox.map_or(node.bbox, |b| b | node.bbox));
                cur = node.next;
            }
            flow.lines[i].bbox = bbox.unwrap_or_default();
        }

        for i in 0..flow.blocks.len() {
            if self.block_fixed[i] {
                continue;
            }
            let mut cur = flow.blocks[i].first_line;
            let mut bbox: Option<BoundingBox> = None;
            while let Some(l) = cur {
                let node = &flow.lines[l.0];
                bbox = Some(bbox.map_or(node.bbox, |b| b | node.bbox));
                cur = node.next;
            }
            flow.blocks[i].bbox = bbox.unwrap_or_default();
        }

        for i in 0..flow.regions.len() {
            if self.region_fixed[i] {
                continue;
            }
            let mut cur = flow.regions[i].first_block;
            let mut bbox: Option<BoundingBox> = None;
            while let Some(b) = cur {
                let node = &flow.blocks[b.0];
                bbox = Some(bbox.map_or(node.bbox, |acc| acc | node.bbox));
                cur = node.next;
            }
            flow.regions[i].bbox = bbox.unwrap_or_default();
        }

        tracing::debug!(
            regions = flow.regions.len(),
            blocks = flow.blocks.len(),
            lines = flow.lines.len(),
            words = flow.words.len(),
            fonts = flow.fonts.len(),
            "built text flow"
        );
        self.flow
    }
}
