use super::*;
use crate::model::divider::Divider;
use crate::model::item::Instance;

fn members_of(inst: &InstanceLayout, kind: MemberKind) -> Vec<Rect> {
    inst.members
        .iter()
        .filter(|m| m.kind == kind)
        .map(|m| m.rect)
        .collect()
}

fn casement_item() -> QuoteItem {
    QuoteItem::single(
        "W1",
        1200.0,
        1200.0,
        ItemKind::Casement {
            sashes: vec![
                PlacedSash::new("0-0", SashType::Casement)
                    .hinged(HingeSide::Left)
                    .with_bars(vec![GlazingBar::vertical("gb", 0.0)]),
                PlacedSash::new("0-1", SashType::FixedGlazing),
            ],
        },
    )
    .with_dividers(vec![Divider::mullion("m1", 530.0)])
}

#[test]
fn casement_panes_are_in_item_coordinates() {
    let plan = compose(&casement_item(), &LayoutSettings::default());
    assert_eq!(plan.item_type, "casement");
    assert_eq!(plan.bounds, Rect::new(0.0, 0.0, 1200.0, 1200.0));

    let inst = &plan.instances[0];
    assert_eq!(inst.inner, Rect::new(70.0, 70.0, 1130.0, 1130.0));
    let panes: Vec<_> = inst.panes.iter().map(|p| p.pane.clone()).collect();
    assert_eq!(
        panes,
        vec![
            Pane::new("0-0", 70.0, 70.0, 490.0, 1060.0),
            Pane::new("0-1", 640.0, 70.0, 490.0, 1060.0),
        ]
    );
}

#[test]
fn casement_sash_is_inset_and_subdivided() {
    let plan = compose(&casement_item(), &LayoutSettings::default());
    let sash = plan.pane("W1.1", "0-0").unwrap().sash.as_ref().unwrap();
    assert_eq!(sash.sash_type, SashType::Casement);
    assert_eq!(sash.hinge_side, Some(HingeSide::Left));
    assert_eq!(sash.glass, Rect::new(125.0, 125.0, 505.0, 1075.0));
    assert_eq!(
        sash.lights,
        vec![
            Pane::new("0-0", 125.0, 125.0, 180.0, 950.0),
            Pane::new("0-1", 325.0, 125.0, 180.0, 950.0),
        ]
    );

    let fixed = plan.pane("W1.1", "0-1").unwrap().sash.as_ref().unwrap();
    assert_eq!(fixed.glass, Rect::new(640.0, 70.0, 1130.0, 1130.0));
    assert_eq!(
        fixed.lights,
        vec![Pane::new("0-0", 640.0, 70.0, 490.0, 1060.0)]
    );
}

#[test]
fn casement_members_cover_frame_divider_sash_and_bars() {
    let plan = compose(&casement_item(), &LayoutSettings::default());
    let inst = &plan.instances[0];
    assert_eq!(
        members_of(inst, MemberKind::Head),
        vec![Rect::new(0.0, 0.0, 1200.0, 70.0)]
    );
    assert_eq!(
        members_of(inst, MemberKind::Sill),
        vec![Rect::new(0.0, 1130.0, 1200.0, 1200.0)]
    );
    assert_eq!(
        members_of(inst, MemberKind::Jamb),
        vec![
            Rect::new(0.0, 70.0, 70.0, 1130.0),
            Rect::new(1130.0, 70.0, 1200.0, 1130.0),
        ]
    );
    assert_eq!(
        members_of(inst, MemberKind::Mullion),
        vec![Rect::new(560.0, 70.0, 640.0, 1130.0)]
    );
    assert_eq!(members_of(inst, MemberKind::SashFrame).len(), 4);
    assert_eq!(
        members_of(inst, MemberKind::GlazingBar),
        vec![Rect::new(305.0, 125.0, 325.0, 1075.0)]
    );
}

#[test]
fn sliding_sash_splits_at_meeting_rail() {
    let item = QuoteItem::single(
        "S1",
        1000.0,
        1600.0,
        ItemKind::Sash {
            upper_bars: vec![GlazingBar::vertical("a", 0.0), GlazingBar::vertical("b", 0.0)],
            lower_bars: vec![],
        },
    );
    let plan = compose(&item, &LayoutSettings::default());
    let inst = &plan.instances[0];
    assert_eq!(
        members_of(inst, MemberKind::MeetingRail),
        vec![Rect::new(70.0, 775.0, 930.0, 825.0)]
    );
    assert!(members_of(inst, MemberKind::Transom).is_empty());

    let upper = plan.pane("S1.1", "0-0").unwrap();
    let lower = plan.pane("S1.1", "1-0").unwrap();
    assert_eq!(upper.pane, Pane::new("0-0", 70.0, 70.0, 860.0, 705.0));
    assert_eq!(lower.pane, Pane::new("1-0", 70.0, 825.0, 860.0, 705.0));
    let upper = upper.sash.as_ref().unwrap();
    let lower = lower.sash.as_ref().unwrap();
    assert_eq!(upper.sash_type, SashType::Sliding);
    assert_eq!(upper.lights.len(), 3);
    assert_eq!(lower.lights.len(), 1);
}

#[test]
fn ganged_instances_sit_side_by_side() {
    let item = QuoteItem {
        id: "G".to_string(),
        instances: vec![Instance::new("a", 800.0, 1000.0), Instance::new("b", 600.0, 1000.0)],
        dividers: vec![Divider::mullion("m", 300.0).for_instance("b")],
        kind: ItemKind::Casement {
            sashes: vec![PlacedSash::new("0-1", SashType::Casement)],
        },
    };
    let plan = compose(&item, &LayoutSettings::default());
    assert_eq!(plan.bounds, Rect::new(0.0, 0.0, 1400.0, 1000.0));
    assert_eq!(plan.instances[1].outer, Rect::new(800.0, 0.0, 1400.0, 1000.0));

    assert_eq!(plan.instances[0].panes.len(), 1);
    assert!(plan.pane("a", "0-1").is_none());

    let b = plan.pane("b", "0-1").unwrap();
    assert_eq!(b.pane, Pane::new("0-1", 1210.0, 70.0, 120.0, 860.0));
    assert!(b.sash.is_some());
    assert!(plan.pane("b", "0-0").unwrap().sash.is_none());
}

#[test]
fn door_threshold_replaces_sill() {
    let item = QuoteItem::single(
        "D1",
        1000.0,
        2100.0,
        ItemKind::Door {
            leaves: vec![PlacedSash::new("0-0", SashType::DoorLeaf).hinged(HingeSide::Right)],
            threshold: Some(20.0),
        },
    );
    let plan = compose(&item, &LayoutSettings::default());
    let inst = &plan.instances[0];
    assert!(members_of(inst, MemberKind::Sill).is_empty());
    assert_eq!(
        members_of(inst, MemberKind::Threshold),
        vec![Rect::new(0.0, 2080.0, 1000.0, 2100.0)]
    );
    assert_eq!(inst.inner, Rect::new(70.0, 70.0, 930.0, 2080.0));
}

#[test]
fn screen_panes_carry_no_sash() {
    let item = QuoteItem::single("SC", 2000.0, 1000.0, ItemKind::Screen)
        .with_dividers(vec![Divider::mullion("m1", 620.0), Divider::mullion("m2", 1240.0)]);
    let plan = compose(&item, &LayoutSettings::default());
    assert_eq!(plan.panes().count(), 3);
    assert!(plan.panes().all(|p| p.sash.is_none()));
}

#[test]
fn oversized_sash_profile_leaves_solid_sash() {
    let settings = LayoutSettings {
        sash_thickness: 400.0,
        ..LayoutSettings::default()
    };
    let plan = compose(&casement_item(), &settings);
    let sash = plan.pane("W1.1", "0-0").unwrap().sash.as_ref().unwrap();
    assert!(sash.lights.is_empty());
    let solid: Vec<_> = plan.instances[0]
        .members
        .iter()
        .filter(|m| m.kind == MemberKind::SashFrame)
        .collect();
    assert_eq!(solid.len(), 1);
    assert_eq!(solid[0].rect, Rect::new(70.0, 70.0, 560.0, 1130.0));
}

#[test]
fn undersized_instance_has_frame_but_no_panes() {
    let item = QuoteItem::single("tiny", 100.0, 100.0, ItemKind::Screen);
    let plan = compose(&item, &LayoutSettings::default());
    let inst = &plan.instances[0];
    assert!(inst.panes.is_empty());
    assert_eq!(inst.members.len(), 4);
}
