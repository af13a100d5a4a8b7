use super::super::coordinate::*;

///
/// Computes the binomial coefficient 'n choose k'
///
/// The coefficient is built up as a running product and quotient so intermediate values stay close to
/// the size of the result. Returns `None` if `k` is negative or larger than `n`.
///
pub fn binomial(n: i32, k: i32) -> Option<f64> {
    if k < 0 || n < k {
        return None;
    }

    let mut result = 1.0;
    for j in 1..=k {
        result *= (n - (k - j)) as f64;
        result /= j as f64;
    }

    Some(result)
}

///
/// The Bernstein basis polynomial B(i, m) evaluated at t
///
#[inline]
pub fn bernstein(m: usize, i: usize, t: f64) -> Option<f64> {
    let coefficient = binomial(m as i32, i as i32)?;

    Some(coefficient * t.powi(i as i32) * (1.0-t).powi((m - i) as i32))
}

///
/// The weighted basis function for a bezier curve of any degree
///
/// Each control point is weighted by its Bernstein polynomial and the results are summed. Returns
/// `None` if there are no points.
///
pub fn basis<Point: Coordinate>(t: f64, points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }

    let degree      = points.len() - 1;
    let mut result  = Point::origin();

    for (index, point) in points.iter().enumerate() {
        result = result + (*point * bernstein(degree, index, t)?);
    }

    Some(result)
}

///
/// Evaluates a bezier curve of any degree using de Casteljau's algorithm
///
/// This repeatedly interpolates between adjacent points until only one remains: it gives the same
/// results as `basis()` without using the binomial coefficients.
///
pub fn de_casteljau<Point: Coordinate>(t: f64, points: &[Point]) -> Option<Point> {
    let mut weights = points.to_vec();

    while weights.len() > 1 {
        weights = weights.windows(2)
            .map(|pair| pair[0].lerp(&pair[1], t))
            .collect();
    }

    weights.pop()
}
