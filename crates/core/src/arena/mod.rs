//! Arena holding a page's analysed text flow.
//!
//! The flow is the ownership root for everything a page's text analysis
//! produced. Nodes are stored flat and linked by typed indices, the way the
//! PDF engine links its regions, blocks, lines and words; the proxies in
//! [`crate::layout`] borrow the flow and therefore cannot outlive it.

pub mod builder;
pub mod flow;
pub mod snapshot;

pub use builder::{RawWord, TextFlowBuilder};
pub use flow::{BlockId, Color, FontId, LineId, RegionId, TextFlow, WordId};
pub use snapshot::{BlockSnapshot, FlowSnapshot, LineSnapshot, RegionSnapshot, WordSnapshot};
