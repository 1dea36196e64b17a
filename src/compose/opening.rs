use crate::foundation::core::{Rect, Vec2};
use crate::model::divider::Divider;
use crate::model::item::{Instance, ItemKind, QuoteItem};
use crate::model::settings::LayoutSettings;

/// Divider id given to the implicit meeting rail of sliding sash items.
pub const MEETING_RAIL_ID: &str = "meeting_rail";

/// One instance placed on the item's coordinate system, with its effective dividers.
#[derive(Clone, Debug)]
pub(crate) struct InstanceOpening<'a> {
    pub(crate) instance: &'a Instance,
    pub(crate) outer: Rect,
    /// Glazing opening inside the outer frame; may be degenerate for undersized units.
    pub(crate) inner: Rect,
    pub(crate) dividers: Vec<Divider>,
}

impl InstanceOpening<'_> {
    pub(crate) fn inner_origin(&self) -> Vec2 {
        Vec2::new(self.inner.x0, self.inner.y0)
    }
}

/// Place every instance left to right and resolve the dividers that apply to it.
pub(crate) fn instance_openings<'a>(
    item: &'a QuoteItem,
    settings: &LayoutSettings,
) -> Vec<InstanceOpening<'a>> {
    let frame = settings.frame_thickness;
    let sill = item.kind.sill_thickness(settings);

    let mut x = 0.0;
    let mut out = Vec::with_capacity(item.instances.len());
    for instance in &item.instances {
        let outer = Rect::new(x, 0.0, x + instance.width, instance.height);
        let inner = Rect::new(
            outer.x0 + frame,
            outer.y0 + frame,
            outer.x1 - frame,
            outer.y1 - sill,
        );

        let mut dividers: Vec<Divider> = item.dividers_for(&instance.id).cloned().collect();
        if matches!(item.kind, ItemKind::Sash { .. }) {
            dividers.push(
                Divider::transom(MEETING_RAIL_ID, inner.height() * 0.5)
                    .with_thickness(settings.meeting_rail_thickness),
            );
        }

        out.push(InstanceOpening {
            instance,
            outer,
            inner,
            dividers,
        });
        x += instance.width;
    }
    out
}
