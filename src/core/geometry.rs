//! Plain rectangle maths shared by the reveal, cursor and navigation logic.
//!
//! Coordinates are CSS pixels in the browser and terminal cells in the
//! preview; the core never needs to know which.

/// An axis-aligned rectangle (`x`/`y` is the top-left corner).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// Half-open containment: the right and bottom edges are outside.
    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    /// Overlapping region, or `None` when the rectangles do not touch.
    pub fn intersection(&self, other: &Bounds) -> Option<Bounds> {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right > left && bottom > top {
            Some(Bounds::new(left, top, right - left, bottom - top))
        } else {
            None
        }
    }

    /// Shrink the bottom edge by `margin` (a negative root margin).
    pub fn inset_bottom(&self, margin: f64) -> Bounds {
        Bounds::new(self.x, self.y, self.width, (self.height - margin).max(0.0))
    }

    /// Pointer position relative to the top-left corner.
    pub fn local(&self, px: f64, py: f64) -> (f64, f64) {
        (px - self.x, py - self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intersection_of_overlapping_rects() {
        let a = Bounds::new(0.0, 0.0, 10.0, 10.0);
        let b = Bounds::new(5.0, 5.0, 10.0, 10.0);
        assert_eq!(a.intersection(&b), Some(Bounds::new(5.0, 5.0, 5.0, 5.0)));
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = Bounds::new(0.0, 0.0, 10.0, 10.0);
        let b = Bounds::new(10.0, 0.0, 10.0, 10.0);
        assert_eq!(a.intersection(&b), None);
    }

    #[test]
    fn contains_is_half_open() {
        let r = Bounds::new(2.0, 2.0, 3.0, 1.0);
        assert!(r.contains(2.0, 2.0));
        assert!(r.contains(4.9, 2.5));
        assert!(!r.contains(5.0, 2.0));
        assert!(!r.contains(2.0, 3.0));
    }

    #[test]
    fn inset_bottom_never_goes_negative() {
        let r = Bounds::new(0.0, 0.0, 100.0, 50.0).inset_bottom(80.0);
        assert_eq!(r.height, 0.0);
    }
}
