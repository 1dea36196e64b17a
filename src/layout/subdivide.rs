use crate::foundation::core::Rect;
use crate::model::divider::{DividerKind, GlazingBar};
use crate::model::pane::{Pane, pane_id};

/// Bar members placed between the lights of a subdivided sash.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct BarRect {
    pub bar_id: String,
    pub kind: DividerKind,
    pub rect: Rect,
}

struct BarGrid<'a> {
    verticals: Vec<&'a GlazingBar>,
    horizontals: Vec<&'a GlazingBar>,
    light_w: f64,
    light_h: f64,
    bar: f64,
}

impl<'a> BarGrid<'a> {
    fn new(
        glass_width: f64,
        glass_height: f64,
        bars: &'a [GlazingBar],
        bar_thickness: f64,
    ) -> Option<Self> {
        let bar = if bar_thickness.is_finite() {
            bar_thickness.max(0.0)
        } else {
            0.0
        };
        let (mut verticals, mut horizontals): (Vec<_>, Vec<_>) =
            bars.iter().partition(|b| b.kind == DividerKind::Vertical);
        verticals.sort_by(|a, b| a.offset.total_cmp(&b.offset));
        horizontals.sort_by(|a, b| a.offset.total_cmp(&b.offset));

        let available_w = glass_width - verticals.len() as f64 * bar;
        let available_h = glass_height - horizontals.len() as f64 * bar;
        // Written as a negated `>` so NaN dimensions also bail out.
        if !(available_w > 0.0 && available_h > 0.0) {
            return None;
        }

        let light_w = available_w / (verticals.len() + 1) as f64;
        let light_h = available_h / (horizontals.len() + 1) as f64;
        Some(Self {
            verticals,
            horizontals,
            light_w,
            light_h,
            bar,
        })
    }

    fn x_at(&self, col: usize) -> f64 {
        col as f64 * (self.light_w + self.bar)
    }

    fn y_at(&self, row: usize) -> f64 {
        row as f64 * (self.light_h + self.bar)
    }
}

/// Divide a sash's glass area into evenly spaced lights between glazing bars.
///
/// Bars are counted per kind; their stored offsets only order them. Lights are emitted
/// row-major (top to bottom, then left to right) with ids `"{row}-{col}"`. Returns an
/// empty list when the bars leave no room or a dimension is not positive.
pub fn subdivide(
    glass_width: f64,
    glass_height: f64,
    bars: &[GlazingBar],
    bar_thickness: f64,
) -> Vec<Pane> {
    let Some(grid) = BarGrid::new(glass_width, glass_height, bars, bar_thickness) else {
        return Vec::new();
    };

    let rows = grid.horizontals.len() + 1;
    let cols = grid.verticals.len() + 1;
    let mut lights = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        for col in 0..cols {
            lights.push(Pane::new(
                pane_id(row, col),
                grid.x_at(col),
                grid.y_at(row),
                grid.light_w,
                grid.light_h,
            ));
        }
    }
    lights
}

/// Member rectangles of the glazing bars matching [`subdivide`]'s gaps.
///
/// Vertical bars run the full glass height and horizontal bars the full glass width, so
/// they overlap where they cross. Bars are assigned to gaps in offset order.
pub fn glazing_bar_rects(
    glass_width: f64,
    glass_height: f64,
    bars: &[GlazingBar],
    bar_thickness: f64,
) -> Vec<BarRect> {
    let Some(grid) = BarGrid::new(glass_width, glass_height, bars, bar_thickness) else {
        return Vec::new();
    };

    let mut out = Vec::with_capacity(bars.len());
    for (i, b) in grid.verticals.iter().enumerate() {
        let x0 = grid.x_at(i) + grid.light_w;
        out.push(BarRect {
            bar_id: b.id.clone(),
            kind: b.kind,
            rect: Rect::new(x0, 0.0, x0 + grid.bar, glass_height),
        });
    }
    for (i, b) in grid.horizontals.iter().enumerate() {
        let y0 = grid.y_at(i) + grid.light_h;
        out.push(BarRect {
            bar_id: b.id.clone(),
            kind: b.kind,
            rect: Rect::new(0.0, y0, glass_width, y0 + grid.bar),
        });
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/layout/subdivide.rs"]
mod tests;
