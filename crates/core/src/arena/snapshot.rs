//! Serializable dump of a text flow.
//!
//! A snapshot is the nested form of a [`TextFlow`]: regions hold blocks,
//! blocks hold lines, lines hold words. Words carry their text as a string
//! and name their font by tag. Container boxes may be omitted, in which
//! case they are computed from the children when the flow is rebuilt.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::error::{FlowError, Result};
use crate::font::FontDescriptor;
use crate::geometry::BoundingBox;
use crate::params::TextParams;

use super::builder::{RawWord, TextFlowBuilder};
use super::flow::{Color, TextFlow};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlowSnapshot {
    #[serde(default)]
    pub params: TextParams,
    #[serde(default)]
    pub fonts: Vec<FontDescriptor>,
    #[serde(default)]
    pub regions: Vec<RegionSnapshot>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegionSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bbox: Option<BoundingBox>,
    #[serde(default)]
    pub blocks: Vec<BlockSnapshot>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bbox: Option<BoundingBox>,
    #[serde(default)]
    pub rotation: i32,
    #[serde(default)]
    pub lines: Vec<LineSnapshot>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bbox: Option<BoundingBox>,
    #[serde(default)]
    pub rotation: i32,
    #[serde(default)]
    pub hyphenated: bool,
    #[serde(default)]
    pub words: Vec<WordSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordSnapshot {
    pub text: String,
    /// The word's raw code points. Only written when some of them are not
    /// Unicode scalar values (lone surrogates, values above U+10FFFF), which
    /// `text` shows as U+FFFD. When present it wins over `text`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_points: Option<Vec<u32>>,
    pub bbox: BoundingBox,
    /// Font tag; must name one of [`FlowSnapshot::fonts`].
    pub font: SmolStr,
    pub font_size: f64,
    #[serde(default)]
    pub rotation: i32,
    /// Defaults to the box's `y2` edge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub edges: Vec<f64>,
    #[serde(default)]
    pub color: Color,
    #[serde(default)]
    pub space_after: bool,
    #[serde(default)]
    pub underlined: bool,
}

impl TextFlow {
    /// Rebuild a flow from its snapshot, validating it on the way.
    pub fn from_snapshot(snapshot: &FlowSnapshot) -> Result<TextFlow> {
        let mut builder = TextFlowBuilder::with_params(snapshot.params.clone());
        for font in &snapshot.fonts {
            builder.add_font(font.clone());
        }

        for region in &snapshot.regions {
            builder.begin_region(region.bbox)?;
            for block in &region.blocks {
                builder.begin_block(block.bbox, block.rotation)?;
                for line in &block.lines {
                    builder.begin_line(line.bbox, line.rotation, line.hyphenated)?;
                    for word in &line.words {
                        let font = builder
                            .font_by_tag(&word.font)
                            .ok_or_else(|| FlowError::UnknownFont(word.font.to_string()))?;
                        let mut raw = RawWord::new(&word.text, word.bbox, font, word.font_size)
                            .with_rotation(word.rotation)
                            .with_edges(word.edges.clone())
                            .with_baseline(word.baseline.unwrap_or(word.bbox.y2))
                            .with_color(word.color)
                            .space_after(word.space_after)
                            .underlined(word.underlined);
                        if let Some(code_points) = &word.code_points {
                            raw.text = code_points.clone();
                        }
                        builder.add_word(raw)?;
                    }
                }
            }
        }
        Ok(builder.finish())
    }

    /// Nested dump of this flow. Every box and edge array is written out, so
    /// rebuilding from the snapshot gives back the same geometry.
    pub fn to_snapshot(&self) -> FlowSnapshot {
        let mut regions = Vec::with_capacity(self.regions.len());
        let mut region_id = self.first_region;
        while let Some(r) = region_id {
            let region = self.region(r);
            let mut blocks = Vec::new();
            let mut block_id = region.first_block;
            while let Some(b) = block_id {
                let block = self.block(b);
                let mut lines = Vec::new();
                let mut line_id = block.first_line;
                while let Some(l) = line_id {
                    let line = self.line(l);
                    let mut words = Vec::new();
                    let mut word_id = line.first_word;
                    while let Some(w) = word_id {
                        let word = self.word(w);
                        let lossless = word.text.iter().all(|&c| char::from_u32(c).is_some());
                        words.push(WordSnapshot {
                            text: word
                                .text
                                .iter()
                                .map(|&c| char::from_u32(c).unwrap_or(char::REPLACEMENT_CHARACTER))
                                .collect(),
                            code_points: (!lossless).then(|| word.text.to_vec()),
                            bbox: word.bbox,
                            font: self.font(word.font).tag.clone(),
                            font_size: word.font_size,
                            rotation: word.rotation,
                            baseline: Some(word.baseline),
                            edges: word.edges.to_vec(),
                            color: word.color,
                            space_after: word.space_after,
                            underlined: word.underlined,
                        });
                        word_id = word.next;
                    }
                    lines.push(LineSnapshot {
                        bbox: Some(line.bbox),
                        rotation: line.rotation,
                        hyphenated: line.hyphenated,
                        words,
                    });
                    line_id = line.next;
                }
                blocks.push(BlockSnapshot {
                    bbox: Some(block.bbox),
                    rotation: block.rotation,
                    lines,
                });
                block_id = block.next;
            }
            regions.push(RegionSnapshot {
                bbox: Some(region.bbox),
                blocks,
            });
            region_id = region.next;
        }

        FlowSnapshot {
            params: self.params.clone(),
            fonts: self.fonts.clone(),
            regions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str, x: f64) -> WordSnapshot {
        WordSnapshot {
            text: text.to_string(),
            code_points: None,
            bbox: BoundingBox::new(x, 0.0, x + 10.0, 10.0),
            font: "F1".into(),
            font_size: 10.0,
            rotation: 0,
            baseline: None,
            edges: Vec::new(),
            color: Color::BLACK,
            space_after: true,
            underlined: false,
        }
    }

    fn snapshot() -> FlowSnapshot {
        FlowSnapshot {
            params: TextParams::default(),
            fonts: vec![FontDescriptor::new("F1", "Helvetica")],
            regions: vec![RegionSnapshot {
                bbox: None,
                blocks: vec![BlockSnapshot {
                    bbox: None,
                    rotation: 0,
                    lines: vec![LineSnapshot {
                        bbox: None,
                        rotation: 0,
                        hyphenated: false,
                        words: vec![word("one", 0.0), word("two", 20.0)],
                    }],
                }],
            }],
        }
    }

    #[test]
    fn test_from_snapshot_computes_boxes() {
        let flow = TextFlow::from_snapshot(&snapshot()).unwrap();
        assert_eq!(flow.num_words(), 2);
        let dumped = flow.to_snapshot();
        assert_eq!(
            dumped.regions[0].bbox,
            Some(BoundingBox::new(0.0, 0.0, 30.0, 10.0))
        );
        assert_eq!(dumped.regions[0].blocks[0].lines[0].words[0].baseline, Some(10.0));
    }

    #[test]
    fn test_unknown_font_tag() {
        let mut snap = snapshot();
        snap.regions[0].blocks[0].lines[0].words[1].font = "F9".into();
        assert_eq!(
            TextFlow::from_snapshot(&snap).unwrap_err(),
            FlowError::UnknownFont("F9".to_string())
        );
    }

    #[test]
    fn test_dump_rebuild_is_stable() {
        let flow = TextFlow::from_snapshot(&snapshot()).unwrap();
        let dumped = flow.to_snapshot();
        let rebuilt = TextFlow::from_snapshot(&dumped).unwrap();
        assert_eq!(rebuilt.to_snapshot(), dumped);
    }

    #[test]
    fn test_invalid_code_points_survive_dump() {
        let mut snap = snapshot();
        snap.regions[0].blocks[0].lines[0].words[0].code_points = Some(vec![0x61, 0xD800, 0x62]);
        let flow = TextFlow::from_snapshot(&snap).unwrap();
        let id = flow.first_region.and_then(|r| flow.region(r).first_block);
        let id = id.and_then(|b| flow.block(b).first_line);
        let id = id.and_then(|l| flow.line(l).first_word).unwrap();
        assert_eq!(flow.word(id).text.as_slice(), [0x61, 0xD800, 0x62]);

        let dumped = flow.to_snapshot();
        let words = &dumped.regions[0].blocks[0].lines[0].words;
        assert_eq!(words[0].text, "a\u{fffd}b");
        assert_eq!(words[0].code_points, Some(vec![0x61, 0xD800, 0x62]));
        // valid words stay text-only
        assert_eq!(words[1].code_points, None);

        let json = serde_json::to_string(&dumped).unwrap();
        assert_eq!(json.matches("code_points").count(), 1);
        let reread: FlowSnapshot = serde_json::from_str(&json).unwrap();
        let rebuilt = TextFlow::from_snapshot(&reread).unwrap();
        assert_eq!(rebuilt.to_snapshot(), dumped);
    }
}
