//! Content slider — a clamped index over a fixed strip of items.
//!
//! The controller owns a single integer (the index of the leftmost visible
//! item) and translates it into a horizontal offset:
//!
//! ```text
//! offset = index × (first item width + gap)
//! ```
//!
//! The strip itself is reached through the [`StripSurface`] trait so the
//! same controller drives a DOM element in the browser and a row of cards in
//! the terminal preview.  Geometry is measured afresh on every redraw; the
//! controller never caches a width across a resize.
//!
//! Every operation is total.  Out-of-range navigation is absorbed by the
//! clamp, a missing strip makes the controller inert, and an empty strip
//! measures as zero so the offset stays at `0`.

use super::events::{Subscriptions, Trigger};

// ───────────────────────────────────────── surface ───────────

/// The rendered strip of slider items.
///
/// Implementors report live layout measurements and receive the computed
/// offset.  `None` from a measurement means "not available" and degrades to
/// zero.
pub trait StripSurface {
    /// Number of items in the strip.  Read once, when the controller is built.
    fn item_count(&self) -> usize;

    /// Rendered width of the first item, if there is one.
    fn first_item_width(&self) -> Option<f64>;

    /// Horizontal spacing between items from the strip's layout styling.
    fn gap(&self) -> Option<f64>;

    /// Translate the strip left by `offset` (i.e. apply `-offset`).
    fn apply_offset(&mut self, offset: f64);
}

/// Measured strip geometry.  Both values are finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StripGeometry {
    pub item_width: f64,
    pub gap: f64,
}

impl StripGeometry {
    pub fn new(item_width: f64, gap: f64) -> Self {
        Self {
            item_width: sanitize(item_width),
            gap: sanitize(gap),
        }
    }

    /// Read the geometry from a surface, degrading missing values to zero.
    pub fn measure<S: StripSurface + ?Sized>(surface: &S) -> Self {
        Self::new(
            surface.first_item_width().unwrap_or(0.0),
            surface.gap().unwrap_or(0.0),
        )
    }

    /// Distance from the strip origin to the left edge of item `index`.
    pub fn offset_for(&self, index: usize) -> f64 {
        index as f64 * (self.item_width + self.gap)
    }
}

fn sanitize(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 {
        v
    } else {
        0.0
    }
}

/// Clamp a (possibly negative) target index into `0..=count-1`.
/// An empty strip clamps everything to `0`.
pub fn clamp_index(target: isize, count: usize) -> usize {
    let max = count.saturating_sub(1).min(isize::MAX as usize) as isize;
    target.clamp(0, max) as usize
}

// ───────────────────────────────────────── controller ────────

/// Anything that owns a slider and can hand it to trigger handlers.
pub trait SliderHost {
    type Strip: StripSurface;

    fn slider(&mut self) -> &mut SliderController<Self::Strip>;
}

/// Slider state machine: one index, two transitions, one redraw step.
#[derive(Debug)]
pub struct SliderController<S> {
    strip: Option<S>,
    item_count: usize,
    index: usize,
    offset: f64,
}

impl<S: StripSurface> SliderController<S> {
    /// Build the controller and perform the initial measurement.
    ///
    /// `strip` is `None` when the page has no slider; the controller then
    /// accepts every call and does nothing.
    pub fn new(strip: Option<S>) -> Self {
        let item_count = strip.as_ref().map_or(0, |s| s.item_count());
        let mut controller = Self {
            strip,
            item_count,
            index: 0,
            offset: 0.0,
        };
        controller.recompute();
        controller
    }

    /// Move one item to the right.  A no-op at the last item.
    pub fn advance(&mut self) {
        self.step(1);
    }

    /// Move one item to the left.  A no-op at the first item.
    pub fn retreat(&mut self) {
        self.step(-1);
    }

    fn step(&mut self, delta: isize) {
        let target = (self.index as isize).saturating_add(delta);
        let clamped = clamp_index(target, self.item_count);
        if clamped != self.index {
            tracing::trace!(from = self.index, to = clamped, "slider index");
        }
        self.index = clamped;
        self.recompute();
    }

    /// Re-measure the strip and re-apply the offset for the current index.
    /// Returns the applied offset.
    pub fn recompute(&mut self) -> f64 {
        let Some(strip) = self.strip.as_mut() else {
            return self.offset;
        };
        let geometry = StripGeometry::measure(&*strip);
        self.offset = geometry.offset_for(self.index);
        strip.apply_offset(self.offset);
        self.offset
    }

    /// Register the slider's handlers: previous/next navigation and
    /// re-measurement on load and resize.
    pub fn subscribe<C: SliderHost<Strip = S>>(subs: &mut Subscriptions<C>) {
        subs.on(Trigger::SliderPrevious, |ctx: &mut C| ctx.slider().retreat());
        subs.on(Trigger::SliderNext, |ctx: &mut C| ctx.slider().advance());
        subs.on(Trigger::Resize, |ctx: &mut C| {
            ctx.slider().recompute();
        });
        subs.on(Trigger::Load, |ctx: &mut C| {
            ctx.slider().recompute();
        });
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Last applied offset (positive; the strip is moved by its negation).
    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn at_start(&self) -> bool {
        self.index == 0
    }

    pub fn at_end(&self) -> bool {
        self.index + 1 >= self.item_count
    }

    pub fn strip(&self) -> Option<&S> {
        self.strip.as_ref()
    }

    pub fn strip_mut(&mut self) -> Option<&mut S> {
        self.strip.as_mut()
    }
}

// ───────────────────────────────────────── CSS helpers ───────

/// Parse the leading number of a CSS length (`"20px"` → `20.0`).
///
/// Mirrors `parseFloat`: leading whitespace is skipped, the longest numeric
/// prefix wins, and anything without one (`"normal"`, `""`) yields `None`.
pub fn parse_css_length(value: &str) -> Option<f64> {
    let s = value.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    let mut seen_exp = false;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot && !seen_exp => seen_dot = true,
            b'e' | b'E' if seen_digit && !seen_exp => {
                // Only an exponent if digits follow (optionally signed).
                let rest = &bytes[end + 1..];
                let digits_at = usize::from(matches!(rest.first(), Some(b'+' | b'-')));
                if !rest.get(digits_at).is_some_and(u8::is_ascii_digit) {
                    break;
                }
                seen_exp = true;
                end += digits_at;
            }
            _ => break,
        }
        end += 1;
    }

    if !seen_digit {
        return None;
    }
    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Resolve the strip gap from computed `column-gap` / `gap` values.
/// The first one that parses wins; neither → `None`.
pub fn resolve_gap(column_gap: Option<&str>, gap: Option<&str>) -> Option<f64> {
    column_gap
        .and_then(parse_css_length)
        .or_else(|| gap.and_then(parse_css_length))
}

/// The inline transform for an offset, e.g. `translateX(-440px)`.
pub fn translate_x(offset: f64) -> String {
    if offset == 0.0 {
        "translateX(0px)".to_string()
    } else {
        format!("translateX({}px)", -offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// In-memory strip with fixed geometry that records what was applied.
    #[derive(Debug, Default)]
    struct FakeStrip {
        items: usize,
        width: f64,
        gap: Option<f64>,
        applied: Vec<f64>,
    }

    impl FakeStrip {
        fn new(items: usize, width: f64, gap: f64) -> Self {
            Self {
                items,
                width,
                gap: Some(gap),
                applied: Vec::new(),
            }
        }
    }

    impl StripSurface for FakeStrip {
        fn item_count(&self) -> usize {
            self.items
        }
        fn first_item_width(&self) -> Option<f64> {
            (self.items > 0).then_some(self.width)
        }
        fn gap(&self) -> Option<f64> {
            self.gap
        }
        fn apply_offset(&mut self, offset: f64) {
            self.applied.push(offset);
        }
    }

    #[test]
    fn initial_state_is_index_zero_with_one_redraw() {
        let slider = SliderController::new(Some(FakeStrip::new(4, 200.0, 20.0)));
        assert_eq!(slider.index(), 0);
        assert_eq!(slider.offset(), 0.0);
        assert_eq!(slider.strip().map(|s| s.applied.clone()), Some(vec![0.0]));
    }

    #[test]
    fn offset_scenario_width_200_gap_20_index_2() {
        let mut slider = SliderController::new(Some(FakeStrip::new(5, 200.0, 20.0)));
        slider.advance();
        slider.advance();
        assert_eq!(slider.index(), 2);
        assert_eq!(slider.offset(), 440.0);
        assert_eq!(translate_x(slider.offset()), "translateX(-440px)");
    }

    #[test]
    fn four_items_stop_at_the_last_index() {
        let mut slider = SliderController::new(Some(FakeStrip::new(4, 100.0, 0.0)));
        for _ in 0..3 {
            slider.advance();
        }
        assert_eq!(slider.index(), 3);
        slider.advance();
        assert_eq!(slider.index(), 3);
        assert!(slider.at_end());
    }

    #[test]
    fn retreat_at_zero_stays_at_zero() {
        let mut slider = SliderController::new(Some(FakeStrip::new(3, 100.0, 10.0)));
        slider.retreat();
        assert_eq!(slider.index(), 0);
        assert_eq!(slider.offset(), 0.0);
        assert!(slider.at_start());
    }

    #[test]
    fn recompute_is_idempotent() {
        let mut slider = SliderController::new(Some(FakeStrip::new(3, 150.0, 12.0)));
        slider.advance();
        let first = slider.recompute();
        let second = slider.recompute();
        assert_eq!(first, second);
        assert_eq!(slider.index(), 1);
    }

    #[test]
    fn recompute_picks_up_new_geometry_without_moving_the_index() {
        let mut slider = SliderController::new(Some(FakeStrip::new(3, 150.0, 10.0)));
        slider.advance();
        assert_eq!(slider.offset(), 160.0);

        if let Some(strip) = slider.strip_mut() {
            strip.width = 90.0;
        }
        assert_eq!(slider.recompute(), 100.0);
        assert_eq!(slider.index(), 1);
    }

    #[test]
    fn empty_strip_is_a_permanent_no_op() {
        let mut slider = SliderController::new(Some(FakeStrip::new(0, 200.0, 20.0)));
        slider.advance();
        slider.retreat();
        slider.recompute();
        assert_eq!(slider.index(), 0);
        assert_eq!(slider.offset(), 0.0);
        assert!(slider
            .strip()
            .is_some_and(|s| s.applied.iter().all(|&o| o == 0.0)));
    }

    #[test]
    fn missing_strip_is_inert() {
        let mut slider: SliderController<FakeStrip> = SliderController::new(None);
        slider.advance();
        slider.retreat();
        assert_eq!(slider.recompute(), 0.0);
        assert_eq!(slider.index(), 0);
        assert_eq!(slider.item_count(), 0);
    }

    #[test]
    fn unset_gap_degrades_to_zero() {
        let mut strip = FakeStrip::new(3, 100.0, 0.0);
        strip.gap = None;
        let mut slider = SliderController::new(Some(strip));
        slider.advance();
        assert_eq!(slider.offset(), 100.0);
    }

    #[test]
    fn geometry_rejects_non_finite_and_negative_values() {
        let g = StripGeometry::new(f64::NAN, -4.0);
        assert_eq!(g, StripGeometry::default());
        assert_eq!(StripGeometry::new(f64::INFINITY, 3.0).item_width, 0.0);
    }

    #[test]
    fn clamp_index_handles_both_ends() {
        assert_eq!(clamp_index(-1, 4), 0);
        assert_eq!(clamp_index(4, 4), 3);
        assert_eq!(clamp_index(2, 4), 2);
        assert_eq!(clamp_index(7, 0), 0);
        assert_eq!(clamp_index(-7, 0), 0);
    }

    #[test]
    fn css_lengths_parse_like_parse_float() {
        assert_eq!(parse_css_length("20px"), Some(20.0));
        assert_eq!(parse_css_length("  1.5rem"), Some(1.5));
        assert_eq!(parse_css_length("-3px"), Some(-3.0));
        assert_eq!(parse_css_length(".5em"), Some(0.5));
        assert_eq!(parse_css_length("1e2px"), Some(100.0));
        assert_eq!(parse_css_length("2em"), Some(2.0));
        assert_eq!(parse_css_length("normal"), None);
        assert_eq!(parse_css_length(""), None);
        assert_eq!(parse_css_length("-"), None);
    }

    #[test]
    fn gap_prefers_column_gap_then_gap() {
        assert_eq!(resolve_gap(Some("24px"), Some("8px")), Some(24.0));
        assert_eq!(resolve_gap(Some("normal"), Some("8px")), Some(8.0));
        assert_eq!(resolve_gap(None, None), None);
        assert_eq!(resolve_gap(Some("normal"), Some("normal")), None);
    }

    #[test]
    fn zero_offset_renders_without_sign() {
        assert_eq!(translate_x(0.0), "translateX(0px)");
        assert_eq!(translate_x(12.5), "translateX(-12.5px)");
    }
}
