pub use kurbo::{Affine, Rect, Vec2};

/// Closed-open interval along one axis, in millimetres.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Span {
    pub start: f64,
    pub end: f64, // exclusive
}

impl Span {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn is_empty(self) -> bool {
        !matches!(
            self.start.partial_cmp(&self.end),
            Some(std::cmp::Ordering::Less)
        )
    }

    pub fn contains(self, v: f64) -> bool {
        self.start <= v && v < self.end
    }

    /// Intersect with `[lo, hi]`; `None` when nothing non-degenerate remains.
    pub fn clamp_to(self, lo: f64, hi: f64) -> Option<Self> {
        let clamped = Self {
            start: self.start.max(lo),
            end: self.end.min(hi),
        };
        if clamped.is_empty() {
            return None;
        }
        Some(clamped)
    }
}

/// Build a rectangle from an x span and a y span.
pub fn rect_from_spans(x: Span, y: Span) -> Rect {
    Rect::new(x.start, y.start, x.end, y.end)
}
