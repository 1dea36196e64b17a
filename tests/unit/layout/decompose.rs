use super::*;

fn thickness(t: f64) -> MemberThickness {
    MemberThickness::uniform(t)
}

fn geometry(panes: &[Pane]) -> Vec<(&str, f64, f64, f64, f64)> {
    panes
        .iter()
        .map(|p| (p.id.as_str(), p.x, p.y, p.width, p.height))
        .collect()
}

#[test]
fn no_dividers_is_one_full_pane() {
    let panes = decompose(1234.0, 567.0, &[], thickness(80.0));
    assert_eq!(panes, vec![Pane::new("0-0", 0.0, 0.0, 1234.0, 567.0)]);
}

#[test]
fn single_full_height_mullion_splits_in_two() {
    let dividers = [Divider::mullion("m", 500.0).with_thickness(100.0)];
    let panes = decompose(1000.0, 1000.0, &dividers, thickness(100.0));
    assert_eq!(
        geometry(&panes),
        vec![
            ("0-0", 0.0, 0.0, 450.0, 1000.0),
            ("0-1", 550.0, 0.0, 450.0, 1000.0),
        ]
    );
}

#[test]
fn centre_mullion_on_1200_square() {
    let dividers = [Divider::mullion("m", 600.0).with_thickness(80.0)];
    let panes = decompose(1200.0, 1200.0, &dividers, thickness(70.0));
    assert_eq!(
        geometry(&panes),
        vec![
            ("0-0", 0.0, 0.0, 560.0, 1200.0),
            ("0-1", 640.0, 0.0, 560.0, 1200.0),
        ]
    );
}

#[test]
fn partial_mullion_leaves_gap_below_its_span() {
    let dividers = [Divider::mullion("m", 500.0).with_span(0.0, 600.0)];
    let panes = decompose(1000.0, 1000.0, &dividers, thickness(100.0));
    assert_eq!(
        geometry(&panes),
        vec![
            ("0-0", 0.0, 0.0, 450.0, 1000.0),
            ("0-2", 550.0, 0.0, 450.0, 1000.0),
            ("1-1", 450.0, 600.0, 100.0, 400.0),
        ]
    );
}

#[test]
fn area_below_partial_mullion_fuses_into_one_wide_pane() {
    let dividers = [
        Divider::transom("t", 650.0),
        Divider::mullion("m", 500.0).with_span(0.0, 600.0),
    ];
    let panes = decompose(1000.0, 1000.0, &dividers, thickness(100.0));
    assert_eq!(
        geometry(&panes),
        vec![
            ("0-0", 0.0, 0.0, 450.0, 600.0),
            ("0-2", 550.0, 0.0, 450.0, 600.0),
            ("1-0", 0.0, 700.0, 1000.0, 300.0),
        ]
    );
}

#[test]
fn mullion_and_transom_cross_into_four() {
    let dividers = [Divider::mullion("m", 500.0), Divider::transom("t", 400.0)];
    let panes = decompose(1000.0, 800.0, &dividers, thickness(60.0));
    assert_eq!(
        geometry(&panes),
        vec![
            ("0-0", 0.0, 0.0, 470.0, 370.0),
            ("0-1", 530.0, 0.0, 470.0, 370.0),
            ("1-0", 0.0, 430.0, 470.0, 370.0),
            ("1-1", 530.0, 430.0, 470.0, 370.0),
        ]
    );
}

#[test]
fn ids_ignore_all_frame_grid_lines() {
    let one = [Divider::mullion("m", 500.0).with_thickness(100.0)];
    let overlapping = [
        Divider::mullion("m", 500.0).with_thickness(100.0),
        Divider::mullion("m2", 510.0).with_thickness(80.0),
    ];
    let a = decompose(1000.0, 1000.0, &one, thickness(100.0));
    let b = decompose(1000.0, 1000.0, &overlapping, thickness(100.0));
    assert_eq!(a, b);

    let one = [Divider::transom("t", 500.0).with_thickness(100.0)];
    let overlapping = [
        Divider::transom("t", 500.0).with_thickness(100.0),
        Divider::transom("t2", 520.0).with_thickness(60.0),
    ];
    let a = decompose(1000.0, 1000.0, &one, thickness(100.0));
    let b = decompose(1000.0, 1000.0, &overlapping, thickness(100.0));
    assert_eq!(a, b);
    assert_eq!(
        a.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(),
        vec!["0-0", "1-0"]
    );
}

#[test]
fn covering_dividers_leave_nothing() {
    let dividers = [Divider::mullion("m", 500.0).with_thickness(2000.0)];
    assert!(decompose(1000.0, 1000.0, &dividers, thickness(80.0)).is_empty());
}

#[test]
fn non_positive_dimensions_yield_nothing() {
    assert!(decompose(0.0, 1000.0, &[], thickness(80.0)).is_empty());
    assert!(decompose(1000.0, -1.0, &[], thickness(80.0)).is_empty());
    assert!(decompose(f64::NAN, 1000.0, &[], thickness(80.0)).is_empty());
}

#[test]
fn invalid_dividers_are_skipped() {
    let dividers = [
        Divider::mullion("outside", 1500.0),
        Divider::transom("degenerate", 300.0).with_span(600.0, 600.0),
    ];
    let panes = decompose(1000.0, 1000.0, &dividers, thickness(80.0));
    assert_eq!(panes, vec![Pane::new("0-0", 0.0, 0.0, 1000.0, 1000.0)]);
}

#[test]
fn tolerance_removes_float_noise_slivers() {
    let dividers = [
        Divider::mullion("m", 500.0),
        Divider::transom("t", 500.0).with_span(0.0, 449.999_999),
    ];
    let exact = decompose(1000.0, 1000.0, &dividers, thickness(100.0));
    assert!(exact.iter().any(|p| p.width < 1e-3));

    let merged = decompose_with_tolerance(1000.0, 1000.0, &dividers, thickness(100.0), 1e-3);
    assert!(merged.iter().all(|p| p.width > 1.0 && p.height > 1.0));
    assert_eq!(
        merged.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(),
        vec!["0-0", "0-1", "2-0"]
    );
}

#[test]
fn tolerance_keeps_the_opening_edge() {
    let dividers = [Divider::transom("t", 500.0).with_span(0.0, 999.999_5)];
    let panes = decompose_with_tolerance(1000.0, 1000.0, &dividers, thickness(100.0), 1e-3);
    assert_eq!(
        geometry(&panes),
        vec![
            ("0-0", 0.0, 0.0, 1000.0, 450.0),
            ("1-0", 0.0, 550.0, 1000.0, 450.0),
        ]
    );
    let glass: f64 = panes.iter().map(Pane::area).sum();
    assert_eq!(glass + 1000.0 * 100.0, 1000.0 * 1000.0);
}

#[test]
fn divider_rects_match_footprints() {
    let dividers = [
        Divider::mullion("m", 500.0).with_span(0.0, 600.0),
        Divider::mullion("bad", -5.0),
    ];
    let rects = divider_rects(1000.0, 1000.0, &dividers, thickness(100.0));
    assert_eq!(rects.len(), 1);
    assert_eq!(rects[0].0.id, "m");
    assert_eq!(rects[0].1, Rect::new(450.0, 0.0, 550.0, 600.0));
}
