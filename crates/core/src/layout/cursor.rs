//! Forward cursors over sibling chains and their lazily built child lists.

use std::fmt;
use std::iter::FusedIterator;

use once_cell::unsync::OnceCell;

use crate::arena::TextFlow;

/// A position within a chain of siblings (words of a line, lines of a
/// block, ...). Advancing past the last sibling yields the end cursor, and
/// all end cursors compare equal.
pub trait Cursor: Clone {
    /// Move to the next sibling. The end cursor stays where it is.
    fn advance(&mut self);

    fn is_end(&self) -> bool;

    /// Iterate from this position to the end of the chain.
    fn siblings(self) -> Siblings<Self> {
        Siblings { cursor: self }
    }
}

/// Construction of cursors from arena positions.
pub(crate) trait FlowNode<'a>: Cursor {
    type Id: Copy + PartialEq + fmt::Debug;

    fn at(flow: &'a TextFlow, id: Option<Self::Id>) -> Self;

    fn successor(flow: &'a TextFlow, id: Self::Id) -> Option<Self::Id>;
}

/// Iterator yielding a cursor at every position from its start to the end.
#[derive(Debug, Clone)]
pub struct Siblings<C> {
    cursor: C,
}

impl<C: Cursor> Iterator for Siblings<C> {
    type Item = C;

    fn next(&mut self) -> Option<C> {
        if self.cursor.is_end() {
            return None;
        }
        let item = self.cursor.clone();
        self.cursor.advance();
        Some(item)
    }
}

impl<C: Cursor> FusedIterator for Siblings<C> {}

/// Child list of a cursor, materialized on first access.
///
/// The cache belongs to one cursor value: clones start empty and
/// [`reset`](Self::reset) drops it when the owner moves.
pub(crate) struct Children<C> {
    cell: OnceCell<Vec<C>>,
}

impl<C> Children<C> {
    pub(crate) const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Children starting at `first`, walking successors until the chain
    /// ends. `None` yields an empty list.
    pub(crate) fn get<'a>(&self, flow: &'a TextFlow, first: Option<C::Id>) -> &[C]
    where
        C: FlowNode<'a>,
    {
        self.cell.get_or_init(|| {
            let mut out = Vec::new();
            let mut cur = first;
            while let Some(id) = cur {
                out.push(C::at(flow, Some(id)));
                cur = C::successor(flow, id);
            }
            out
        })
    }

    pub(crate) fn reset(&mut self) {
        self.cell.take();
    }

    pub(crate) fn is_materialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<C> Default for Children<C> {
    fn default() -> Self {
        Self::new()
    }
}

/// Position equality: same flow and same node, or both at the end.
pub(crate) fn same_position<I: PartialEq>(
    a: (&TextFlow, Option<I>),
    b: (&TextFlow, Option<I>),
) -> bool {
    match (a.1, b.1) {
        (None, None) => true,
        (Some(x), Some(y)) => std::ptr::eq(a.0, b.0) && x == y,
        _ => false,
    }
}
