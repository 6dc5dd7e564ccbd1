//! folio-core - text geometry reconstruction over a PDF engine's text flow.
//!
//! The PDF engine's text analysis hands over one [`TextFlow`] per page
//! (regions of blocks of lines of words). This crate exposes it as lazy,
//! read-only cursors with bounding boxes, font attribution and text
//! reconstruction, merges highlighted spans into page [`Area`]s and keeps
//! font usage statistics.

pub mod area;
pub mod arena;
pub mod codec;
pub mod document;
pub mod error;
pub mod font;
pub mod geometry;
pub mod layout;
pub mod page;
pub mod params;

pub use area::{Area, AreaSet, compile};
pub use arena::{Color, FlowSnapshot, RawWord, TextFlow, TextFlowBuilder};
pub use document::TextDocument;
pub use error::{FlowError, Result};
pub use font::{Font, FontCollection, FontDescriptor, FontFlags, SizeHistogram};
pub use geometry::{BoundingBox, HasBoundingBox};
pub use layout::{
    Block, Character, Cursor, Element, IterateLimit, Line, Region, Siblings, TextCursor, Word,
};
pub use page::TextPage;
pub use params::TextParams;
