//! Page-scoped areas and area compilation.
//!
//! An [`Area`] tags a bounding box with the page it lives on and the text
//! rotation it was taken from. Selections produce one area per contiguous
//! span; [`compile`] coalesces the overlapping ones.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::geometry::BoundingBox;

/// A box on one page.
///
/// Ordering is the tuple `(page, orientation, bbox)`; it places areas
/// deterministically in ordered containers and says nothing about reading
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Area {
    pub page: i32,
    pub orientation: i32,
    #[serde(rename = "bbox")]
    pub bounding_box: BoundingBox,
}

/// Ordered, de-duplicated set of areas.
pub type AreaSet = BTreeSet<Area>;

impl Area {
    /// Sentinel for a consumed or otherwise unusable area.
    pub const INVALID: Area = Area {
        page: -1,
        orientation: 0,
        bounding_box: BoundingBox::new(0.0, 0.0, 0.0, 0.0),
    };

    pub const fn new(page: i32, orientation: i32, bounding_box: BoundingBox) -> Self {
        Self {
            page,
            orientation,
            bounding_box,
        }
    }

    /// Smallest area on `page`, handy as a range bound in an [`AreaSet`].
    pub fn page_start(page: i32) -> Self {
        let low = f64::NEG_INFINITY;
        Self {
            page,
            orientation: i32::MIN,
            bounding_box: BoundingBox::new(low, low, low, low),
        }
    }

    pub const fn is_valid(&self) -> bool {
        self.page >= 0
    }
}

impl Default for Area {
    fn default() -> Self {
        Self::INVALID
    }
}

/// Areas of `set` lying on `page`.
pub fn areas_on_page(set: &AreaSet, page: i32) -> impl Iterator<Item = &Area> {
    set.range(Area::page_start(page)..Area::page_start(page.saturating_add(1)))
}

/// Merge overlapping same-page areas.
///
/// Each surviving area absorbs every later area on the same page whose box
/// intersects its (growing) box; the scan restarts after every merge because
/// the grown box may reach areas it missed before. Passes repeat until one
/// performs no merge. Survivors keep their original relative order and
/// inputs with fewer than two areas come back unchanged.
pub fn compile<I>(areas: I) -> Vec<Area>
where
    I: IntoIterator<Item = Area>,
{
    let mut work: Vec<Area> = areas.into_iter().collect();
    if work.len() < 2 {
        return work;
    }

    loop {
        let merged = compile_pass(&mut work);
        work.retain(Area::is_valid);
        if merged == 0 || work.len() < 2 {
            break;
        }
    }
    work
}

/// One pass over `work`; returns the number of merges performed.
fn compile_pass(work: &mut [Area]) -> usize {
    let mut merged = 0;
    for start in 0..work.len() {
        if !work[start].is_valid() {
            continue;
        }
        let mut index = start + 1;
        while index < work.len() {
            let candidate = work[index];
            if candidate.page == work[start].page
                && work[start].bounding_box.intersects(&candidate.bounding_box)
            {
                tracing::trace!(
                    page = candidate.page,
                    into = %work[start].bounding_box,
                    absorbed = %candidate.bounding_box,
                    "merging areas"
                );
                work[start].bounding_box |= candidate.bounding_box;
                work[index] = Area::INVALID;
                merged += 1;
                index = start + 1;
            } else {
                index += 1;
            }
        }
    }
    merged
}
