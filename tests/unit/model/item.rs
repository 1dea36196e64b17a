use super::*;
use crate::model::sash::HingeSide;

#[test]
fn casement_item_parses_from_json() {
    let json = r#"
{
  "id": "W1",
  "instances": [{ "id": "W1.1", "width": 1200, "height": 1200 }],
  "dividers": [{ "id": "m1", "kind": "vertical", "offset": 530 }],
  "kind": {
    "item_type": "casement",
    "sashes": [{ "pane_id": "0-0", "type": "casement", "hinge_side": "left" }]
  }
}
"#;
    let item = QuoteItem::from_reader(json.as_bytes()).unwrap();
    assert_eq!(item.instances[0].width, 1200.0);
    assert_eq!(item.kind.name(), "casement");
    assert_eq!(item.kind.placements().len(), 1);
    assert_eq!(
        item.kind.placements()[0].hinge_side,
        Some(HingeSide::Left)
    );
}

#[test]
fn screen_is_a_bare_tag() {
    let kind: ItemKind = serde_json::from_str(r#"{ "item_type": "screen" }"#).unwrap();
    assert_eq!(kind, ItemKind::Screen);
    assert!(kind.placements().is_empty());
    assert!(!kind.allows(SashType::FixedGlazing));
}

#[test]
fn unknown_item_type_is_a_serde_error() {
    let json = r#"{ "id": "x", "instances": [], "kind": { "item_type": "skylight" } }"#;
    let err = QuoteItem::from_reader(json.as_bytes()).unwrap_err();
    assert!(matches!(err, SashgridError::Serde(_)));
}

#[test]
fn allowed_sash_types_follow_item_kind() {
    let casement = ItemKind::Casement { sashes: vec![] };
    let door = ItemKind::Door {
        leaves: vec![],
        threshold: None,
    };
    assert!(casement.allows(SashType::Casement));
    assert!(!casement.allows(SashType::DoorLeaf));
    assert!(door.allows(SashType::DoorLeaf));
    assert!(door.allows(SashType::FixedGlazing));
    assert!(!door.allows(SashType::Casement));
}

#[test]
fn door_threshold_overrides_sill() {
    let settings = LayoutSettings::default();
    let door = ItemKind::Door {
        leaves: vec![],
        threshold: Some(20.0),
    };
    assert_eq!(door.sill_thickness(&settings), 20.0);
    assert_eq!(
        ItemKind::Screen.sill_thickness(&settings),
        settings.frame_thickness
    );
}

#[test]
fn dividers_for_filters_by_instance() {
    let item = QuoteItem {
        id: "G".to_string(),
        instances: vec![Instance::new("a", 800.0, 1000.0), Instance::new("b", 800.0, 1000.0)],
        dividers: vec![
            Divider::transom("shared", 300.0),
            Divider::mullion("only-b", 400.0).for_instance("b"),
        ],
        kind: ItemKind::Screen,
    };
    let ids = |inst: &str| {
        item.dividers_for(inst)
            .map(|d| d.id.clone())
            .collect::<Vec<_>>()
    };
    assert_eq!(ids("a"), vec!["shared"]);
    assert_eq!(ids("b"), vec!["shared", "only-b"]);
}
