//! Page-space geometry.
//!
//! Coordinates are PDF user-space units with the axis convention of the
//! engine that produced the text flow.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{BitOr, BitOrAssign};

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Axis-aligned box `(x1, y1)`–`(x2, y2)`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl BoundingBox {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    /// True when the box has a strictly positive extent on both axes.
    pub fn is_valid(&self) -> bool {
        self.x2 > self.x1 && self.y2 > self.y1
    }

    pub fn is_finite(&self) -> bool {
        self.x1.is_finite() && self.y1.is_finite() && self.x2.is_finite() && self.y2.is_finite()
    }

    /// Same box with `x1 <= x2` and `y1 <= y2`.
    pub fn normalized(&self) -> Self {
        Self::new(
            self.x1.min(self.x2),
            self.y1.min(self.y2),
            self.x1.max(self.x2),
            self.y1.max(self.y2),
        )
    }

    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Smallest box covering both `self` and `other`.
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            x1: self.x1.min(other.x1),
            y1: self.y1.min(other.y1),
            x2: self.x2.max(other.x2),
            y2: self.y2.max(other.y2),
        }
    }

    /// Closed-interval overlap test: boxes sharing only an edge intersect.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.x1 <= other.x2 && other.x1 <= self.x2 && self.y1 <= other.y2 && other.y1 <= self.y2
    }

    /// Overlapping region of the two boxes, if any.
    pub fn intersection(&self, other: &BoundingBox) -> Option<BoundingBox> {
        if !self.intersects(other) {
            return None;
        }
        Some(BoundingBox {
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
            x2: self.x2.min(other.x2),
            y2: self.y2.min(other.y2),
        })
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x1 && x <= self.x2 && y >= self.y1 && y <= self.y2
    }

    pub fn contains_box(&self, other: &BoundingBox) -> bool {
        self.contains(other.x1, other.y1) && self.contains(other.x2, other.y2)
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x1 + self.width() / 2.0, self.y1 + self.height() / 2.0)
    }

    /// Union of all boxes, `None` for an empty input.
    pub fn enclosing<'b, I>(boxes: I) -> Option<BoundingBox>
    where
        I: IntoIterator<Item = &'b BoundingBox>,
    {
        boxes
            .into_iter()
            .fold(None, |acc: Option<BoundingBox>, b| match acc {
                Some(a) => Some(a.union(b)),
                None => Some(*b),
            })
    }

    fn key(&self) -> [OrderedFloat<f64>; 4] {
        [
            OrderedFloat(self.x1),
            OrderedFloat(self.y1),
            OrderedFloat(self.x2),
            OrderedFloat(self.y2),
        ]
    }
}

impl PartialEq for BoundingBox {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for BoundingBox {}

impl Hash for BoundingBox {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for BoundingBox {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Lexicographic by `x1, y1, x2, y2`. Only meant for ordered containers,
/// not reading order.
impl Ord for BoundingBox {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl BitOr for BoundingBox {
    type Output = BoundingBox;

    fn bitor(self, rhs: BoundingBox) -> BoundingBox {
        self.union(&rhs)
    }
}

impl BitOrAssign for BoundingBox {
    fn bitor_assign(&mut self, rhs: BoundingBox) {
        *self = self.union(&rhs);
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BB({},{},{},{})", self.x1, self.y1, self.x2, self.y2)
    }
}

/// Anything that occupies a box on the page.
pub trait HasBoundingBox {
    fn bounding_box(&self) -> BoundingBox;

    /// Rotation code (multiples of 90 degrees, 0..=3).
    fn rotation(&self) -> i32;
}

impl<T: HasBoundingBox + ?Sized> HasBoundingBox for &T {
    fn bounding_box(&self) -> BoundingBox {
        (**self).bounding_box()
    }

    fn rotation(&self) -> i32 {
        (**self).rotation()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_covers_both() {
        let a = BoundingBox::new(10.0, 20.0, 30.0, 40.0);
        let b = BoundingBox::new(5.0, 25.0, 35.0, 45.0);
        let u = a | b;
        assert_eq!(u, BoundingBox::new(5.0, 20.0, 35.0, 45.0));
        assert!(u.contains_box(&a));
        assert!(u.contains_box(&b));
    }

    #[test]
    fn test_edge_touching_boxes_intersect() {
        let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let b = BoundingBox::new(10.0, 0.0, 20.0, 10.0);
        assert!(a.intersects(&b));
        assert_eq!(
            a.intersection(&b),
            Some(BoundingBox::new(10.0, 0.0, 10.0, 10.0))
        );
    }

    #[test]
    fn test_disjoint_boxes() {
        let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let b = BoundingBox::new(10.5, 0.0, 20.0, 10.0);
        assert!(!a.intersects(&b));
        assert_eq!(a.intersection(&b), None);
    }

    #[test]
    fn test_normalized() {
        let b = BoundingBox::new(10.0, 40.0, 0.0, 5.0);
        assert!(!b.is_valid());
        assert_eq!(b.normalized(), BoundingBox::new(0.0, 5.0, 10.0, 40.0));
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        let a = BoundingBox::new(0.0, 5.0, 1.0, 1.0);
        let b = BoundingBox::new(0.0, 6.0, 0.0, 0.0);
        let c = BoundingBox::new(1.0, 0.0, 0.0, 0.0);
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn test_display() {
        let b = BoundingBox::new(1.0, 2.5, 3.0, 4.0);
        assert_eq!(b.to_string(), "BB(1,2.5,3,4)");
    }
}
