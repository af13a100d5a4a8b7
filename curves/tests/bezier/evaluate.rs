use super::*;

use flo_curves::bezier::*;

///
/// Evaluates the bernstein sum directly, without using the library's binomial function
///
fn direct_bernstein_sum(t: f64, points: &[Coord2]) -> Coord2 {
    let degree      = points.len() - 1;
    let mut result  = Coord2(0.0, 0.0);

    for (index, point) in points.iter().enumerate() {
        let coefficient = (1..=degree).product::<usize>() as f64
            / ((1..=index).product::<usize>() as f64 * (1..=(degree-index)).product::<usize>() as f64);
        let weight      = coefficient * t.powi(index as i32) * (1.0-t).powi((degree-index) as i32);

        result = result + *point * weight;
    }

    result
}

#[test]
fn evaluate_matches_bernstein_sum() {
    let curve = Bezier::from_points(vec![Coord2(1.0, 1.0), Coord2(3.0, 5.0), Coord2(4.0, -2.0), Coord2(7.0, 3.0), Coord2(9.0, 0.0)]);

    for x in 0..=100 {
        let t           = (x as f64)/100.0;
        let evaluated   = curve.evaluate(t).unwrap();
        let direct      = direct_bernstein_sum(t, curve.control_points());

        assert!(evaluated.distance_to(&direct) < 0.0001);
    }
}

#[test]
fn evaluate_matches_de_casteljau() {
    let curve = Bezier::from_points(arch());

    for x in 0..=100 {
        let t = (x as f64)/100.0;

        assert!(curve.evaluate(t).unwrap().distance_to(&de_casteljau(t, &arch()).unwrap()) < 0.0001);
    }
}

#[test]
fn evaluate_at_ends_gives_end_points() {
    for degree in 1..10 {
        let points: Vec<_>  = (0..=degree).map(|i| Coord2((i*3) as f64, ((i*7) % 5) as f64 - 2.0)).collect();
        let curve           = Bezier::from_points(points.clone());

        assert!(curve.evaluate(0.0) == Some(points[0]));
        assert!(curve.evaluate(1.0) == Some(points[degree]));
    }
}

#[test]
fn linear_curve_midpoint() {
    let curve = Bezier::from_points(vec![Coord2(0.0, 0.0), Coord2(4.0, 2.0)]);

    assert!(approx_equal_points(curve.evaluate(0.5).unwrap(), Coord2(2.0, 1.0)));
}

#[test]
fn cubic_arch_midpoint() {
    let curve = Bezier::from_points(arch());

    assert!(approx_equal_points(curve.evaluate(0.5).unwrap(), Coord2(1.5, 1.5)));
}

#[test]
fn evaluate_before_start_is_none() {
    let curve = Bezier::from_points(arch());

    assert!(curve.evaluate(-0.1) == None);
}

#[test]
fn evaluate_after_end_is_none() {
    let curve = Bezier::from_points(arch());

    assert!(curve.evaluate(1.1) == None);
    assert!(curve.evaluate(1.00001) == None);
}

#[test]
fn evaluate_nan_is_none() {
    let curve = Bezier::from_points(arch());

    assert!(curve.evaluate(f64::NAN) == None);
    assert!(curve.tangent_at(f64::NAN) == None);
}

#[test]
fn evaluate_tolerates_small_overshoot() {
    let curve = Bezier::from_points(arch());

    let overshoot = curve.evaluate(1.000001).unwrap();
    assert!(approx_equal_points(overshoot, Coord2(3.0, 0.0)));
}

#[test]
fn single_point_curve_does_not_evaluate() {
    let curve = Bezier::from_points(vec![Coord2(1.0, 2.0)]);

    assert!(curve.evaluate(0.0) == None);
    assert!(curve.evaluate(0.5) == None);
}

#[test]
fn empty_curve_does_not_evaluate() {
    let curve = Bezier::from_points(vec![]);

    assert!(curve.evaluate(0.5) == None);
    assert!(curve.degree() == None);
}
