use serde::Serialize;

use crate::compose::opening::{InstanceOpening, MEETING_RAIL_ID, instance_openings};
use crate::foundation::core::{Rect, Vec2};
use crate::foundation::math::midpoint;
use crate::layout::decompose::{decompose_with_tolerance, divider_rects};
use crate::layout::subdivide::{glazing_bar_rects, subdivide};
use crate::model::divider::{DividerKind, GlazingBar};
use crate::model::item::{ItemKind, QuoteItem};
use crate::model::pane::Pane;
use crate::model::sash::{HingeSide, PlacedSash, SashType};
use crate::model::settings::LayoutSettings;

/// Complete drawable geometry of a quote item, in item millimetres.
///
/// The origin is the top-left of the first instance's outer frame. Every renderer draws
/// from the same plan so pane and light ids line up across preview and print.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LayoutPlan {
    pub item_id: String,
    pub item_type: &'static str,
    /// Union of all instance outer rectangles.
    pub bounds: Rect,
    pub instances: Vec<InstanceLayout>,
}

/// Geometry of one ganged unit.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InstanceLayout {
    pub instance_id: String,
    pub outer: Rect,
    pub inner: Rect,
    /// Outer frame, dividers, sash profiles and glazing bars.
    pub members: Vec<Member>,
    pub panes: Vec<PaneLayout>,
}

/// A decomposed pane and the sash placed into it, if any.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PaneLayout {
    /// Pane in item coordinates; `id` is the decomposition id.
    pub pane: Pane,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sash: Option<SashLayout>,
}

/// A sash inside a pane, subdivided into lights.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SashLayout {
    pub sash_type: SashType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hinge_side: Option<HingeSide>,
    /// Glass area inside the sash profile.
    pub glass: Rect,
    /// Lights in item coordinates; ids are the subdivision ids.
    pub lights: Vec<Pane>,
}

/// A structural member rectangle.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Member {
    pub kind: MemberKind,
    /// Divider, bar or pane id this member belongs to; empty for outer frame parts.
    pub source_id: String,
    pub rect: Rect,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    Head,
    Sill,
    Threshold,
    Jamb,
    Mullion,
    Transom,
    MeetingRail,
    SashFrame,
    GlazingBar,
}

impl MemberKind {
    pub(crate) fn tag(self) -> u8 {
        match self {
            Self::Head => 0,
            Self::Sill => 1,
            Self::Threshold => 2,
            Self::Jamb => 3,
            Self::Mullion => 4,
            Self::Transom => 5,
            Self::MeetingRail => 6,
            Self::SashFrame => 7,
            Self::GlazingBar => 8,
        }
    }
}

impl LayoutPlan {
    /// All panes of all instances, in instance order.
    pub fn panes(&self) -> impl Iterator<Item = &PaneLayout> {
        self.instances.iter().flat_map(|i| i.panes.iter())
    }

    /// Look up a pane by instance and decomposition id.
    pub fn pane(&self, instance_id: &str, pane_id: &str) -> Option<&PaneLayout> {
        self.instances
            .iter()
            .find(|i| i.instance_id == instance_id)?
            .panes
            .iter()
            .find(|p| p.pane.id == pane_id)
    }
}

/// Build the full layout of `item`.
///
/// Never fails: degenerate instances produce frames without panes, and placements that
/// name a pane missing from the decomposition are skipped with a warning.
#[tracing::instrument(skip_all, fields(item = %item.id, kind = item.kind.name()))]
pub fn compose(item: &QuoteItem, settings: &LayoutSettings) -> LayoutPlan {
    let openings = instance_openings(item, settings);
    let instances: Vec<InstanceLayout> = openings
        .iter()
        .map(|o| compose_instance(item, o, settings))
        .collect();

    let bounds = openings
        .iter()
        .map(|o| o.outer)
        .reduce(|a, b| a.union(b))
        .unwrap_or(Rect::ZERO);

    tracing::debug!(
        instances = instances.len(),
        panes = instances.iter().map(|i| i.panes.len()).sum::<usize>(),
        "composed item"
    );
    LayoutPlan {
        item_id: item.id.clone(),
        item_type: item.kind.name(),
        bounds,
        instances,
    }
}

fn compose_instance(
    item: &QuoteItem,
    opening: &InstanceOpening<'_>,
    settings: &LayoutSettings,
) -> InstanceLayout {
    let origin = opening.inner_origin();
    let (inner_w, inner_h) = (opening.inner.width(), opening.inner.height());
    let defaults = settings.member_thickness();

    let mut members = outer_frame_members(item, opening);
    for (divider, rect) in divider_rects(inner_w, inner_h, &opening.dividers, defaults) {
        let is_rail = divider.id == MEETING_RAIL_ID && matches!(item.kind, ItemKind::Sash { .. });
        let kind = match divider.kind {
            DividerKind::Horizontal if is_rail => MemberKind::MeetingRail,
            DividerKind::Horizontal => MemberKind::Transom,
            DividerKind::Vertical => MemberKind::Mullion,
        };
        members.push(Member {
            kind,
            source_id: divider.id.clone(),
            rect: rect + origin,
        });
    }

    let decomposed = decompose_with_tolerance(
        inner_w,
        inner_h,
        &opening.dividers,
        defaults,
        settings.coord_tolerance,
    );
    warn_unmatched_placements(item, opening, &decomposed);

    let rail_y = midpoint(opening.inner.y0, opening.inner.y1);
    let mut panes = Vec::with_capacity(decomposed.len());
    for pane in decomposed {
        let pane = pane.translated(origin);
        let sash = sash_for_pane(item, opening, &pane, rail_y)
            .map(|spec| compose_sash(&pane, spec, settings, &mut members));
        panes.push(PaneLayout { pane, sash });
    }

    InstanceLayout {
        instance_id: opening.instance.id.clone(),
        outer: opening.outer,
        inner: opening.inner,
        members,
        panes,
    }
}

struct SashSpec<'a> {
    sash_type: SashType,
    hinge_side: Option<HingeSide>,
    bars: &'a [GlazingBar],
}

fn sash_for_pane<'a>(
    item: &'a QuoteItem,
    opening: &InstanceOpening<'_>,
    pane: &Pane,
    rail_y: f64,
) -> Option<SashSpec<'a>> {
    match &item.kind {
        ItemKind::Casement { .. } | ItemKind::Door { .. } => {
            let placed: &PlacedSash = item
                .kind
                .placements()
                .iter()
                .find(|s| s.pane_id == pane.id && s.applies_to(&opening.instance.id))?;
            Some(SashSpec {
                sash_type: placed.sash_type,
                hinge_side: placed.hinge_side,
                bars: &placed.glazing_bars,
            })
        }
        ItemKind::Sash {
            upper_bars,
            lower_bars,
        } => {
            let upper = midpoint(pane.y, pane.y + pane.height) < rail_y;
            Some(SashSpec {
                sash_type: SashType::Sliding,
                hinge_side: None,
                bars: if upper { upper_bars } else { lower_bars },
            })
        }
        ItemKind::Screen => None,
    }
}

fn compose_sash(
    pane: &Pane,
    spec: SashSpec<'_>,
    settings: &LayoutSettings,
    members: &mut Vec<Member>,
) -> SashLayout {
    let outer = pane.rect();
    let profile = if spec.sash_type.has_sash_frame() {
        settings.sash_thickness
    } else {
        0.0
    };
    let glass = Rect::new(
        outer.x0 + profile,
        outer.y0 + profile,
        outer.x1 - profile,
        outer.y1 - profile,
    );

    if glass.width() <= 0.0 || glass.height() <= 0.0 {
        tracing::warn!(pane = %pane.id, "sash profile leaves no glass");
        members.push(Member {
            kind: MemberKind::SashFrame,
            source_id: pane.id.clone(),
            rect: outer,
        });
        return SashLayout {
            sash_type: spec.sash_type,
            hinge_side: spec.hinge_side,
            glass: Rect::new(outer.x0, outer.y0, outer.x0, outer.y0),
            lights: Vec::new(),
        };
    }

    if profile > 0.0 {
        members.extend(ring_members(
            MemberKind::SashFrame,
            MemberKind::SashFrame,
            MemberKind::SashFrame,
            &pane.id,
            outer,
            glass,
        ));
    }

    let glass_origin = Vec2::new(glass.x0, glass.y0);
    let bar = settings.glazing_bar_thickness;
    let lights = subdivide(glass.width(), glass.height(), spec.bars, bar)
        .into_iter()
        .map(|l| l.translated(glass_origin))
        .collect();
    for b in glazing_bar_rects(glass.width(), glass.height(), spec.bars, bar) {
        members.push(Member {
            kind: MemberKind::GlazingBar,
            source_id: b.bar_id,
            rect: b.rect + glass_origin,
        });
    }

    SashLayout {
        sash_type: spec.sash_type,
        hinge_side: spec.hinge_side,
        glass,
        lights,
    }
}

fn outer_frame_members(item: &QuoteItem, opening: &InstanceOpening<'_>) -> Vec<Member> {
    let bottom = match item.kind {
        ItemKind::Door {
            threshold: Some(_),
            ..
        } => MemberKind::Threshold,
        _ => MemberKind::Sill,
    };
    // Undersized units collapse the opening instead of inverting it.
    let outer = opening.outer;
    let x0 = opening.inner.x0.min(outer.x1);
    let y0 = opening.inner.y0.min(outer.y1);
    let inner = Rect::new(x0, y0, opening.inner.x1.max(x0), opening.inner.y1.max(y0));
    ring_members(MemberKind::Head, bottom, MemberKind::Jamb, "", outer, inner)
}

/// Four members around `inner`: full-width top and bottom, sides between them.
fn ring_members(
    top: MemberKind,
    bottom: MemberKind,
    side: MemberKind,
    source_id: &str,
    outer: Rect,
    inner: Rect,
) -> Vec<Member> {
    let member = |kind, rect| Member {
        kind,
        source_id: source_id.to_string(),
        rect,
    };
    vec![
        member(top, Rect::new(outer.x0, outer.y0, outer.x1, inner.y0)),
        member(bottom, Rect::new(outer.x0, inner.y1, outer.x1, outer.y1)),
        member(side, Rect::new(outer.x0, inner.y0, inner.x0, inner.y1)),
        member(side, Rect::new(inner.x1, inner.y0, outer.x1, inner.y1)),
    ]
}

fn warn_unmatched_placements(item: &QuoteItem, opening: &InstanceOpening<'_>, panes: &[Pane]) {
    for placed in item.kind.placements() {
        if !placed.applies_to(&opening.instance.id) {
            continue;
        }
        if !panes.iter().any(|p| p.id == placed.pane_id) {
            tracing::warn!(
                instance = %opening.instance.id,
                pane = %placed.pane_id,
                "placed sash names no decomposed pane; skipping"
            );
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/plan.rs"]
mod tests;
