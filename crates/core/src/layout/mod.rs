//! Lazy proxies over a page's text flow.
//!
//! Every proxy is a cursor: it names one node of a sibling chain (or the
//! end of that chain), borrows the [`TextFlow`](crate::arena::TextFlow)
//! it points into, and builds its child list only when first asked for it.
//!
//! ```text
//! Region -> Block -> Line -> Word -> Character
//! ```

mod block;
mod character;
mod cursor;
mod line;
mod region;
mod text_cursor;
mod word;

pub use block::Block;
pub use character::Character;
pub use cursor::{Cursor, Siblings};
pub use line::Line;
pub use region::Region;
pub use text_cursor::{Element, IterateLimit, TextCursor};
pub use word::Word;
