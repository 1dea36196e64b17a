use crate::compose::plan::{InstanceLayout, LayoutPlan, Member, PaneLayout, SashLayout};
use crate::foundation::core::{Affine, Rect, Vec2};
use crate::model::pane::Pane;

/// Uniform scale plus translation from item millimetres to a target surface.
///
/// The preview and the print path each build their own viewport and map the same
/// [`LayoutPlan`]; ids survive the mapping untouched.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub scale: f64,
    pub offset: Vec2,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset: Vec2::ZERO,
        }
    }
}

impl Viewport {
    /// Largest uniform scale that fits `bounds` into `target_width × target_height`
    /// minus `margin` on every side, centred.
    ///
    /// Falls back to the identity when either side is empty.
    pub fn fit(bounds: Rect, target_width: f64, target_height: f64, margin: f64) -> Self {
        let avail_w = target_width - 2.0 * margin;
        let avail_h = target_height - 2.0 * margin;
        if !(bounds.width() > 0.0 && bounds.height() > 0.0 && avail_w > 0.0 && avail_h > 0.0) {
            return Self::default();
        }

        let scale = (avail_w / bounds.width()).min(avail_h / bounds.height());
        let offset = Vec2::new(
            margin + (avail_w - bounds.width() * scale) * 0.5 - bounds.x0 * scale,
            margin + (avail_h - bounds.height() * scale) * 0.5 - bounds.y0 * scale,
        );
        Self { scale, offset }
    }

    pub fn affine(&self) -> Affine {
        Affine::translate(self.offset) * Affine::scale(self.scale)
    }

    pub fn map_rect(&self, rect: Rect) -> Rect {
        self.affine().transform_rect_bbox(rect)
    }

    pub fn map_pane(&self, pane: &Pane) -> Pane {
        Pane::from_rect(pane.id.clone(), self.map_rect(pane.rect()))
    }
}

impl LayoutPlan {
    /// The same plan mapped through `viewport`.
    pub fn transformed(&self, viewport: &Viewport) -> LayoutPlan {
        LayoutPlan {
            item_id: self.item_id.clone(),
            item_type: self.item_type,
            bounds: viewport.map_rect(self.bounds),
            instances: self
                .instances
                .iter()
                .map(|i| InstanceLayout {
                    instance_id: i.instance_id.clone(),
                    outer: viewport.map_rect(i.outer),
                    inner: viewport.map_rect(i.inner),
                    members: i
                        .members
                        .iter()
                        .map(|m| Member {
                            kind: m.kind,
                            source_id: m.source_id.clone(),
                            rect: viewport.map_rect(m.rect),
                        })
                        .collect(),
                    panes: i
                        .panes
                        .iter()
                        .map(|p| PaneLayout {
                            pane: viewport.map_pane(&p.pane),
                            sash: p.sash.as_ref().map(|s| SashLayout {
                                sash_type: s.sash_type,
                                hinge_side: s.hinge_side,
                                glass: viewport.map_rect(s.glass),
                                lights: s.lights.iter().map(|l| viewport.map_pane(l)).collect(),
                            }),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/viewport.rs"]
mod tests;
