use super::*;
use crate::compose::plan::compose;
use crate::model::divider::Divider;
use crate::model::item::{ItemKind, QuoteItem};
use crate::model::sash::{PlacedSash, SashType};
use crate::model::settings::LayoutSettings;

#[test]
fn fit_uses_the_tighter_axis_and_centres() {
    let vp = Viewport::fit(Rect::new(0.0, 0.0, 1200.0, 1200.0), 600.0, 400.0, 20.0);
    assert!((vp.scale - 0.3).abs() < 1e-12);
    let r = vp.map_rect(Rect::new(0.0, 0.0, 1200.0, 1200.0));
    assert!((r.x0 - 120.0).abs() < 1e-9);
    assert!((r.y0 - 20.0).abs() < 1e-9);
    assert!((r.x1 - 480.0).abs() < 1e-9);
    assert!((r.y1 - 380.0).abs() < 1e-9);
}

#[test]
fn fit_accounts_for_bounds_origin() {
    let vp = Viewport::fit(Rect::new(100.0, 50.0, 300.0, 150.0), 200.0, 100.0, 0.0);
    assert_eq!(vp.scale, 1.0);
    assert_eq!(vp.map_rect(Rect::new(100.0, 50.0, 300.0, 150.0)), Rect::new(0.0, 0.0, 200.0, 100.0));
}

#[test]
fn degenerate_fit_is_identity() {
    assert_eq!(Viewport::fit(Rect::ZERO, 100.0, 100.0, 0.0), Viewport::default());
    assert_eq!(
        Viewport::fit(Rect::new(0.0, 0.0, 10.0, 10.0), 10.0, 10.0, 6.0),
        Viewport::default()
    );
}

#[test]
fn transformed_plan_keeps_ids_and_proportions() {
    let item = QuoteItem::single(
        "W",
        1200.0,
        1200.0,
        ItemKind::Casement {
            sashes: vec![PlacedSash::new("0-1", SashType::Casement)],
        },
    )
    .with_dividers(vec![Divider::mullion("m", 530.0)]);
    let plan = compose(&item, &LayoutSettings::default());
    let vp = Viewport {
        scale: 0.5,
        offset: Vec2::new(10.0, 10.0),
    };
    let page = plan.transformed(&vp);

    assert_eq!(page.bounds, Rect::new(10.0, 10.0, 610.0, 610.0));
    let ids = |p: &LayoutPlan| p.panes().map(|x| x.pane.id.clone()).collect::<Vec<_>>();
    assert_eq!(ids(&plan), ids(&page));

    for (a, b) in plan.panes().zip(page.panes()) {
        assert!((b.pane.width - a.pane.width * 0.5).abs() < 1e-9);
        assert!((b.pane.height - a.pane.height * 0.5).abs() < 1e-9);
    }
    let sash = page.pane("W.1", "0-1").unwrap().sash.as_ref().unwrap();
    assert_eq!(sash.lights[0].id, "0-0");
    assert_eq!(
        page.instances[0].members.len(),
        plan.instances[0].members.len()
    );
}
