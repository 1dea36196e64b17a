use crate::foundation::core::{Rect, Span, rect_from_spans};
use crate::foundation::math::{dedup_cut_lines, midpoint};
use crate::model::divider::{Divider, DividerKind, MemberThickness};

/// The area a divider occupies inside the opening.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Footprint {
    pub(crate) kind: DividerKind,
    pub(crate) x: Span,
    pub(crate) y: Span,
    /// Whether the divider carried an explicit span (its span edges become cut lines).
    pub(crate) partial: bool,
}

impl Footprint {
    fn contains(&self, x: f64, y: f64) -> bool {
        self.x.contains(x) && self.y.contains(y)
    }

    pub(crate) fn rect(&self) -> Rect {
        rect_from_spans(self.x, self.y)
    }
}

/// Resolve a divider's occupied rectangle, or `None` if the divider must be ignored.
///
/// The thickness band is clamped to the opening; the span is clamped along the
/// divider's own length.
pub(crate) fn footprint(
    divider: &Divider,
    inner_width: f64,
    inner_height: f64,
    defaults: MemberThickness,
) -> Option<Footprint> {
    let thickness = divider.thickness_or(defaults);
    let (across, along) = match divider.kind {
        DividerKind::Vertical => (inner_width, inner_height),
        DividerKind::Horizontal => (inner_height, inner_width),
    };

    if !divider.offset.is_finite() || !thickness.is_finite() || thickness <= 0.0 {
        tracing::warn!(divider = %divider.id, "ignoring divider with invalid offset or thickness");
        return None;
    }
    if divider.offset <= 0.0 || divider.offset >= across {
        tracing::warn!(
            divider = %divider.id,
            offset = divider.offset,
            extent = across,
            "ignoring divider outside the opening"
        );
        return None;
    }
    let band = Span::new(
        divider.offset - thickness * 0.5,
        divider.offset + thickness * 0.5,
    )
    .clamp_to(0.0, across)?;
    let Some(span) = divider.span_within(along) else {
        tracing::warn!(divider = %divider.id, "ignoring divider with degenerate span");
        return None;
    };

    let (x, y) = match divider.kind {
        DividerKind::Vertical => (band, span),
        DividerKind::Horizontal => (span, band),
    };
    Some(Footprint {
        kind: divider.kind,
        x,
        y,
        partial: divider.has_span(),
    })
}

/// Elementary grid between consecutive cut lines, each cell classified glass or frame.
#[derive(Clone, Debug)]
pub(crate) struct CutGrid {
    xs: Vec<f64>,
    ys: Vec<f64>,
    glass: Vec<bool>,
}

impl CutGrid {
    pub(crate) fn build(
        inner_width: f64,
        inner_height: f64,
        footprints: &[Footprint],
        tolerance: f64,
    ) -> Self {
        let mut xs = vec![0.0, inner_width];
        let mut ys = vec![0.0, inner_height];
        for fp in footprints {
            // Band edges always cut; span edges only for dividers with explicit limits.
            let (band_axis, span_axis, band, span) = match fp.kind {
                DividerKind::Vertical => (&mut xs, &mut ys, fp.x, fp.y),
                DividerKind::Horizontal => (&mut ys, &mut xs, fp.y, fp.x),
            };
            band_axis.extend([band.start, band.end]);
            if fp.partial {
                span_axis.extend([span.start, span.end]);
            }
        }
        let xs = pin_extent(dedup_cut_lines(xs, tolerance), inner_width);
        let ys = pin_extent(dedup_cut_lines(ys, tolerance), inner_height);

        let cols = xs.len().saturating_sub(1);
        let rows = ys.len().saturating_sub(1);
        let mut glass = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            let cy = midpoint(ys[r], ys[r + 1]);
            for c in 0..cols {
                let cx = midpoint(xs[c], xs[c + 1]);
                glass.push(!footprints.iter().any(|fp| fp.contains(cx, cy)));
            }
        }
        Self { xs, ys, glass }
    }

    pub(crate) fn rows(&self) -> usize {
        self.ys.len().saturating_sub(1)
    }

    pub(crate) fn cols(&self) -> usize {
        self.xs.len().saturating_sub(1)
    }

    pub(crate) fn is_glass(&self, row: usize, col: usize) -> bool {
        self.glass[row * self.cols() + col]
    }

    pub(crate) fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub(crate) fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Dense index for every row holding at least one glass cell.
    pub(crate) fn glass_row_indices(&self) -> Vec<Option<usize>> {
        compress((0..self.rows()).map(|r| (0..self.cols()).any(|c| self.is_glass(r, c))))
    }

    /// Dense index for every column holding at least one glass cell.
    pub(crate) fn glass_col_indices(&self) -> Vec<Option<usize>> {
        compress((0..self.cols()).map(|c| (0..self.rows()).any(|r| self.is_glass(r, c))))
    }
}

/// Keep the far opening edge as the last cut line.
///
/// Tolerance merging keeps the smallest line of a cluster, so a cluster touching the edge
/// would otherwise end short of it. Lines never exceed the extent, and `0.0` is always the
/// first line.
fn pin_extent(mut lines: Vec<f64>, extent: f64) -> Vec<f64> {
    if lines.len() < 2 {
        lines.push(extent);
    } else if let Some(last) = lines.last_mut() {
        *last = extent;
    }
    lines
}

fn compress(has_glass: impl Iterator<Item = bool>) -> Vec<Option<usize>> {
    let mut next = 0usize;
    has_glass
        .map(|g| {
            if !g {
                return None;
            }
            let idx = next;
            next += 1;
            Some(idx)
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/layout/grid.rs"]
mod tests;
