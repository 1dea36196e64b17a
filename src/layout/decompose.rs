use crate::foundation::core::Rect;
use crate::layout::grid::{CutGrid, Footprint, footprint};
use crate::model::divider::{Divider, MemberThickness};
use crate::model::pane::{Pane, pane_id};

/// Split an opening into the maximal glass panes left between its dividers.
///
/// Cut lines are deduplicated by exact equality. Invalid dividers (offset outside
/// `(0, extent)`, degenerate span, non-positive thickness) are skipped. Returns an empty
/// list for non-positive dimensions or when dividers cover the whole opening.
pub fn decompose(
    inner_width: f64,
    inner_height: f64,
    dividers: &[Divider],
    defaults: MemberThickness,
) -> Vec<Pane> {
    decompose_with_tolerance(inner_width, inner_height, dividers, defaults, 0.0)
}

/// [`decompose`] with cut lines closer than `tolerance` merged together.
#[tracing::instrument(level = "debug", skip(dividers), fields(dividers = dividers.len()))]
pub fn decompose_with_tolerance(
    inner_width: f64,
    inner_height: f64,
    dividers: &[Divider],
    defaults: MemberThickness,
    tolerance: f64,
) -> Vec<Pane> {
    if !is_positive(inner_width) || !is_positive(inner_height) {
        return Vec::new();
    }

    let footprints = divider_footprints(inner_width, inner_height, dividers, defaults);
    let footprints: Vec<Footprint> = footprints.into_iter().map(|(_, fp)| fp).collect();
    let grid = CutGrid::build(inner_width, inner_height, &footprints, tolerance);
    let panes = merge_glass_cells(&grid);

    tracing::debug!(
        rows = grid.rows(),
        cols = grid.cols(),
        panes = panes.len(),
        "decomposed opening"
    );
    panes
}

/// Occupied rectangle of every divider that takes part in decomposition.
///
/// Ignored dividers are absent; the rectangles are relative to the inner origin.
pub fn divider_rects<'a>(
    inner_width: f64,
    inner_height: f64,
    dividers: &'a [Divider],
    defaults: MemberThickness,
) -> Vec<(&'a Divider, Rect)> {
    if !is_positive(inner_width) || !is_positive(inner_height) {
        return Vec::new();
    }
    divider_footprints(inner_width, inner_height, dividers, defaults)
        .into_iter()
        .map(|(d, fp)| (d, fp.rect()))
        .collect()
}

fn divider_footprints<'a>(
    inner_width: f64,
    inner_height: f64,
    dividers: &'a [Divider],
    defaults: MemberThickness,
) -> Vec<(&'a Divider, Footprint)> {
    dividers
        .iter()
        .filter_map(|d| footprint(d, inner_width, inner_height, defaults).map(|fp| (d, fp)))
        .collect()
}

/// Greedy row-major merge: widen each unclaimed glass cell to the right, then grow the
/// run downward while every cell beneath it is glass and unclaimed.
fn merge_glass_cells(grid: &CutGrid) -> Vec<Pane> {
    let rows = grid.rows();
    let cols = grid.cols();
    let row_idx = grid.glass_row_indices();
    let col_idx = grid.glass_col_indices();
    let xs = grid.xs();
    let ys = grid.ys();

    let mut claimed = vec![false; rows * cols];
    let free = |claimed: &[bool], r: usize, c: usize| grid.is_glass(r, c) && !claimed[r * cols + c];

    let mut panes = Vec::new();
    for r in 0..rows {
        for c in 0..cols {
            if !free(&claimed, r, c) {
                continue;
            }

            let mut c_end = c + 1;
            while c_end < cols && free(&claimed, r, c_end) {
                c_end += 1;
            }
            let mut r_end = r + 1;
            while r_end < rows && (c..c_end).all(|cc| free(&claimed, r_end, cc)) {
                r_end += 1;
            }

            for rr in r..r_end {
                for cc in c..c_end {
                    claimed[rr * cols + cc] = true;
                }
            }

            // A glass cell always lies in an indexed row and column.
            let (Some(pr), Some(pc)) = (row_idx[r], col_idx[c]) else {
                continue;
            };
            panes.push(Pane::new(
                pane_id(pr, pc),
                xs[c],
                ys[r],
                xs[c_end] - xs[c],
                ys[r_end] - ys[r],
            ));
        }
    }
    panes
}

fn is_positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

#[cfg(test)]
#[path = "../../tests/unit/layout/decompose.rs"]
mod tests;
