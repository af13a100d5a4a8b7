use flo_curves::*;
use flo_curves::bezier::*;

#[test]
fn default_settings() {
    let curve = BezierBuilder::new().build();

    assert!(curve.curve_mode() == CurveMode::Basic);
    assert!(curve.continuity_mode() == ContinuityMode::C0);
    assert!(curve.subdivision_level() == 0);
    assert!(curve.piecewise_degree() == 1);
    assert!(curve.samples() == 20);
    assert!(curve.control_points().len() == 0);
}

#[test]
fn control_points_are_kept_in_order() {
    let mut builder = BezierBuilder::new();
    builder.add_control_point(Coord2(1.0, 2.0));
    builder.add_control_point(Coord2(3.0, 4.0));
    builder.add_control_point(Coord2(5.0, 6.0));

    let curve = builder.build();

    assert!(curve.control_points() == &[Coord2(1.0, 2.0), Coord2(3.0, 4.0), Coord2(5.0, 6.0)]);
    assert!(curve.control_point(1) == Some(Coord2(3.0, 4.0)));
    assert!(curve.control_point(3) == None);
    assert!(curve.degree() == Some(2));
}

#[test]
fn chained_builder() {
    let curve = BezierBuilder::new()
        .control_point(Coord2(0.0, 0.0))
        .control_point(Coord2(1.0, 1.0))
        .curve_mode(CurveMode::Piecewise)
        .continuity_mode(ContinuityMode::C1)
        .subdivision_level(3)
        .piecewise_degree(2)
        .samples(5)
        .build();

    assert!(curve.control_points().len() == 2);
    assert!(curve.curve_mode() == CurveMode::Piecewise);
    assert!(curve.continuity_mode() == ContinuityMode::C1);
    assert!(curve.subdivision_level() == 3);
    assert!(curve.piecewise_degree() == 2);
    assert!(curve.samples() == 5);
}

#[test]
fn remove_control_point() {
    let mut builder = BezierBuilder::from_points(vec![Coord2(1.0, 2.0), Coord2(3.0, 4.0), Coord2(5.0, 6.0)]);

    assert!(builder.remove_control_point(&Coord2(3.0, 4.0)));
    assert!(!builder.remove_control_point(&Coord2(7.0, 8.0)));
    assert!(builder.control_points() == &[Coord2(1.0, 2.0), Coord2(5.0, 6.0)]);
}

#[test]
fn clear_control_points() {
    let mut builder = BezierBuilder::from_points(vec![Coord2(1.0, 2.0), Coord2(3.0, 4.0)]);
    builder.clear_control_points();

    assert!(builder.build().control_points().is_empty());
}

#[test]
fn edit_existing_curve() {
    let mut curve   = Bezier::from_points(vec![Coord2(1.0, 2.0), Coord2(3.0, 4.0)]);
    curve.set_samples(7);

    let edited      = curve.to_builder().control_point(Coord2(5.0, 6.0)).build();

    assert!(curve.control_points().len() == 2);
    assert!(edited.control_points().len() == 3);
    assert!(edited.samples() == 7);
}

#[test]
fn settings_can_be_changed_after_building() {
    let mut curve = Bezier::from_points(vec![Coord2(1.0, 2.0), Coord2(3.0, 4.0)]);

    curve.set_curve_mode(CurveMode::Subdivision);
    curve.set_continuity_mode(ContinuityMode::C1);
    curve.set_subdivision_level(4);
    curve.set_piecewise_degree(3);
    curve.set_samples(50);

    assert!(curve.settings() == CurveSettings {
        curve_mode:         CurveMode::Subdivision,
        continuity_mode:    ContinuityMode::C1,
        subdivision_level:  4,
        piecewise_degree:   3,
        samples:            50
    });
}

#[test]
fn parse_mode_names() {
    assert!("Basic".parse::<CurveMode>() == Ok(CurveMode::Basic));
    assert!("subdivision".parse::<CurveMode>() == Ok(CurveMode::Subdivision));
    assert!("Piecewise".parse::<CurveMode>() == Ok(CurveMode::Piecewise));
    assert!("c1".parse::<ContinuityMode>() == Ok(ContinuityMode::C1));
    assert!("C0".parse::<ContinuityMode>() == Ok(ContinuityMode::C0));

    assert!("Spline".parse::<CurveMode>() == Err(UnknownMode("Spline".to_string())));
    assert!("C2".parse::<ContinuityMode>().is_err());
}

#[test]
fn mode_names_round_trip_through_display() {
    for mode in vec![CurveMode::Basic, CurveMode::Subdivision, CurveMode::Piecewise] {
        assert!(mode.to_string().parse::<CurveMode>() == Ok(mode));
    }
}

#[test]
fn display_lists_control_points() {
    let curve = BezierBuilder::new()
        .control_point(Coord2(0.0, 0.0))
        .control_point(Coord2(1.0, 2.5))
        .control_point(Coord2(3.0, 0.0))
        .curve_mode(CurveMode::Piecewise)
        .build();

    assert!(curve.to_string() == "Piecewise curve (0, 0) (1, 2.5) (3, 0)");
}
