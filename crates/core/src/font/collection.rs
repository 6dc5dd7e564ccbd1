//! Font usage statistics.
//!
//! A [`FontCollection`] is filled by scanning a page's text flow: every
//! character is counted once against its word's font and size. Collections
//! from several pages merge into a document-level collection by summing the
//! per-size counts of each font.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

use indexmap::IndexMap;
use itertools::Itertools;
use ordered_float::OrderedFloat;
use rustc_hash::FxBuildHasher;
use smol_str::SmolStr;

use crate::arena::TextFlow;
use crate::layout::{Cursor, Word};

use super::descriptor::FontDescriptor;

/// Occurrence count per font size.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SizeHistogram {
    counts: BTreeMap<OrderedFloat<f64>, usize>,
}

impl SizeHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` occurrences at `size`.
    pub fn record(&mut self, size: f64, count: usize) {
        *self.counts.entry(OrderedFloat(size)).or_insert(0) += count;
    }

    /// Sum `other` into this histogram, key by key.
    pub fn merge(&mut self, other: &SizeHistogram) {
        for (&size, &count) in &other.counts {
            *self.counts.entry(size).or_insert(0) += count;
        }
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Size seen most often; ties go to the smallest size.
    pub fn most_common(&self) -> Option<f64> {
        self.counts
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(size, _)| size.0)
    }

    pub fn count(&self, size: f64) -> usize {
        self.counts.get(&OrderedFloat(size)).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// `(size, count)` pairs in ascending size order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, usize)> + '_ {
        self.counts.iter().map(|(size, &count)| (size.0, count))
    }
}

/// A font together with how often it was used.
///
/// Identity is the tag alone: two `Font`s with the same tag are equal no
/// matter what their histograms hold.
#[derive(Debug, Clone)]
pub struct Font {
    descriptor: FontDescriptor,
    sizes: SizeHistogram,
}

impl Font {
    pub(crate) fn new(descriptor: FontDescriptor) -> Self {
        Self {
            descriptor,
            sizes: SizeHistogram::new(),
        }
    }

    pub(crate) fn record(&mut self, size: f64, count: usize) {
        self.sizes.record(size, count);
    }

    pub(crate) fn merge_sizes(&mut self, sizes: &SizeHistogram) {
        self.sizes.merge(sizes);
    }

    pub fn descriptor(&self) -> &FontDescriptor {
        &self.descriptor
    }

    pub fn tag(&self) -> &str {
        self.descriptor.tag()
    }

    pub fn name(&self) -> &str {
        self.descriptor.name()
    }

    pub fn sizes(&self) -> &SizeHistogram {
        &self.sizes
    }

    /// Total number of characters seen in this font.
    pub fn occurrences(&self) -> usize {
        self.sizes.total()
    }

    /// Ascending order by [`occurrences`](Self::occurrences).
    pub fn cmp_occurrences(a: &Font, b: &Font) -> Ordering {
        a.occurrences().cmp(&b.occurrences())
    }

    // Style flags as reported by the font descriptor; often wrong.

    pub fn is_fixed_width(&self) -> bool {
        self.descriptor.is_fixed_width()
    }

    pub fn is_serif(&self) -> bool {
        self.descriptor.is_serif()
    }

    pub fn is_symbolic(&self) -> bool {
        self.descriptor.is_symbolic()
    }

    pub fn is_italic(&self) -> bool {
        self.descriptor.is_italic()
    }

    pub fn is_bold(&self) -> bool {
        self.descriptor.is_bold()
    }
}

impl PartialEq for Font {
    fn eq(&self, other: &Self) -> bool {
        self.descriptor.tag == other.descriptor.tag
    }
}

impl Eq for Font {}

impl Hash for Font {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.descriptor.tag.hash(state);
    }
}

/// Fonts keyed by tag, in the order they were first seen.
#[derive(Debug, Clone, Default)]
pub struct FontCollection {
    fonts: IndexMap<SmolStr, Font, FxBuildHasher>,
}

impl FontCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every font registered on `flow`, in registration order, with one
    /// occurrence per character set in it. Fonts no word uses are listed with
    /// an empty histogram.
    pub(crate) fn scan(flow: &TextFlow) -> Self {
        let mut collection = Self::new();
        for descriptor in flow.fonts() {
            collection
                .fonts
                .entry(descriptor.tag.clone())
                .or_insert_with(|| Font::new(descriptor.clone()));
        }
        for region in flow.first_region().siblings() {
            for block in region.blocks() {
                for line in block.lines() {
                    for word in line.words() {
                        collection.record_word(word);
                    }
                }
            }
        }
        tracing::debug!(
            fonts = collection.len(),
            characters = collection.iter().map(Font::occurrences).sum::<usize>(),
            "scanned fonts"
        );
        collection
    }

    fn record_word(&mut self, word: &Word<'_>) {
        if word.is_empty() {
            return;
        }
        let descriptor = word.font();
        let size = word.font_size();
        let font = self
            .fonts
            .entry(descriptor.tag.clone())
            .or_insert_with(|| Font::new(descriptor.clone()));
        // one occurrence per character
        font.record(size, word.len());
    }

    /// Add `other`'s counts. Fonts already present keep their descriptor and
    /// position; unseen fonts are appended.
    pub fn merge(&mut self, other: &FontCollection) {
        for (tag, font) in &other.fonts {
            match self.fonts.get_mut(tag) {
                Some(existing) => existing.merge_sizes(&font.sizes),
                None => {
                    self.fonts.insert(tag.clone(), font.clone());
                }
            }
        }
    }

    pub fn get(&self, tag: &str) -> Option<&Font> {
        self.fonts.get(tag)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.fonts.contains_key(tag)
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// Fonts in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &Font> + '_ {
        self.fonts.values()
    }

    /// Most used font first; equal counts keep first-seen order.
    pub fn by_usage(&self) -> Vec<&Font> {
        self.fonts
            .values()
            .sorted_by(|a, b| Font::cmp_occurrences(b, a))
            .collect()
    }
}

impl<'c> IntoIterator for &'c FontCollection {
    type Item = &'c Font;
    type IntoIter = indexmap::map::Values<'c, SmolStr, Font>;

    fn into_iter(self) -> Self::IntoIter {
        self.fonts.values()
    }
}
