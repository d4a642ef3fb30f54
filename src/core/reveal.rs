//! Reveal-on-scroll: flag targets visible once they scroll into view.
//!
//! Follows intersection-observer semantics.  The root is the viewport with
//! its bottom edge pulled up by `margin_bottom`; a target is revealed when
//! the visible fraction of its area reaches `threshold`.  The first scan
//! after targets are observed reveals anything that intersects at all (the
//! observer's initial notification).  Revealed targets are never hidden
//! again and are no longer checked.

use super::geometry::Bounds;

/// Class added to a revealed target.
pub const VISIBLE_CLASS: &str = "is-visible";

pub const DEFAULT_THRESHOLD: f64 = 0.15;

/// CSS pixels trimmed off the bottom of the viewport.
pub const DEFAULT_MARGIN_BOTTOM: f64 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RevealMode {
    /// Reveal as targets scroll into the (margin-adjusted) viewport.
    Observe { threshold: f64, margin_bottom: f64 },
    /// No observer available: everything is visible from the start.
    Immediate,
}

impl Default for RevealMode {
    fn default() -> Self {
        RevealMode::Observe {
            threshold: DEFAULT_THRESHOLD,
            margin_bottom: DEFAULT_MARGIN_BOTTOM,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Revealer {
    mode: RevealMode,
    visible: Vec<bool>,
    initial_pass: bool,
}

impl Revealer {
    /// Observe `count` targets (indexed `0..count`).
    pub fn new(mode: RevealMode, count: usize) -> Self {
        let immediate = matches!(mode, RevealMode::Immediate);
        Self {
            mode,
            visible: vec![immediate; count],
            initial_pass: !immediate,
        }
    }

    /// Check every still-hidden target against `viewport`.  `bounds_of`
    /// returns a target's current bounds in viewport coordinates (`None`
    /// for a target that is not laid out).  Returns the newly revealed
    /// indices.
    pub fn scan<F>(&mut self, viewport: Bounds, mut bounds_of: F) -> Vec<usize>
    where
        F: FnMut(usize) -> Option<Bounds>,
    {
        let RevealMode::Observe {
            threshold,
            margin_bottom,
        } = self.mode
        else {
            return Vec::new();
        };

        let root = viewport.inset_bottom(margin_bottom);
        let initial = std::mem::take(&mut self.initial_pass);
        let mut revealed = Vec::new();

        for (i, shown) in self.visible.iter_mut().enumerate() {
            if *shown {
                continue;
            }
            let Some(target) = bounds_of(i) else {
                continue;
            };
            let Some(overlap) = target.intersection(&root) else {
                continue;
            };
            let ratio = if target.area() > 0.0 {
                overlap.area() / target.area()
            } else {
                0.0
            };
            if initial || ratio >= threshold {
                *shown = true;
                revealed.push(i);
            }
        }

        if !revealed.is_empty() {
            tracing::trace!(?revealed, "revealed targets");
        }
        revealed
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }

}
