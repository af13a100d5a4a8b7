use super::*;

use flo_curves::bezier::*;

#[test]
fn subdivide_single_point() {
    assert!(subdivide_points(&[Coord2(3.0, 4.0)]) == vec![Coord2(3.0, 4.0)]);
}

#[test]
fn subdivide_nothing() {
    let no_points: Vec<Coord2> = vec![];

    assert!(subdivide_points(&no_points).is_empty());
}

#[test]
fn subdivide_line() {
    assert!(subdivide_points(&[Coord2(0.0, 0.0), Coord2(4.0, 2.0)]) == vec![Coord2(0.0, 0.0), Coord2(2.0, 1.0), Coord2(4.0, 2.0)]);
}

#[test]
fn subdivide_cubic() {
    let subdivided = subdivide_points(&arch());

    assert!(subdivided == vec![
        Coord2(0.0, 0.0), Coord2(0.5, 1.0), Coord2(1.0, 1.5),
        Coord2(1.5, 1.5),
        Coord2(2.0, 1.5), Coord2(2.5, 1.0), Coord2(3.0, 0.0)
    ]);
}

#[test]
fn subdivided_length_and_end_points() {
    for len in 1..12 {
        let points: Vec<_>  = (0..len).map(|i| Coord2((i*i) as f64, (i*5 % 3) as f64)).collect();
        let subdivided      = subdivide_points(&points);

        assert!(subdivided.len() == 2*len - 1);
        assert!(subdivided[0] == points[0]);
        assert!(subdivided[subdivided.len()-1] == points[len-1]);
    }
}

#[test]
fn halves_share_split_point() {
    let curve                       = Bezier::from_points(arch());
    let (first_half, second_half)   = curve.subdivide();

    assert!(first_half.control_points().len() == 4);
    assert!(second_half.control_points().len() == 4);
    assert!(first_half.control_points()[3] == second_half.control_points()[0]);
}

#[test]
fn halves_match_original_curve() {
    let curve                       = Bezier::from_points(vec![Coord2(1.0, 1.0), Coord2(3.0, 5.0), Coord2(4.0, -2.0), Coord2(7.0, 3.0), Coord2(9.0, 0.0)]);
    let (first_half, second_half)   = curve.subdivide();

    for x in 0..=100 {
        let t = (x as f64)/100.0;

        assert!(first_half.evaluate(t).unwrap().distance_to(&curve.evaluate(t*0.5).unwrap()) < 0.0001);
        assert!(second_half.evaluate(t).unwrap().distance_to(&curve.evaluate(0.5 + t*0.5).unwrap()) < 0.0001);
    }
}

#[test]
fn halves_inherit_settings() {
    let curve                       = BezierBuilder::from_points(arch())
        .curve_mode(CurveMode::Subdivision)
        .subdivision_level(3)
        .samples(7)
        .build();
    let (first_half, second_half)   = curve.subdivide();

    assert!(first_half.settings() == curve.settings());
    assert!(second_half.settings() == curve.settings());
}

#[test]
fn subdivide_into_builders() {
    let curve           = Bezier::from_points(arch());
    let mut first_half  = BezierBuilder::new();
    let mut second_half = BezierBuilder::new();

    curve.subdivide_into(&mut first_half, &mut second_half);

    let (expected_first, expected_second) = curve.subdivide();

    assert!(first_half.control_points() == expected_first.control_points());
    assert!(second_half.control_points() == expected_second.control_points());
}

#[test]
fn split_even_length_sequence() {
    let (first, second) = split_subdivided(&[1.0f64, 2.0, 3.0, 4.0]);

    assert!(first == vec![1.0, 2.0, 3.0]);
    assert!(second == vec![3.0, 4.0]);
}
