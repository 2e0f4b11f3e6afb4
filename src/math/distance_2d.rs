use super::Point2;

/// Returns the Euclidean distance between `a` and `b`.
#[must_use]
pub fn distance(a: &Point2, b: &Point2) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn distance_3_4_5() {
        let d = distance(&Point2::new(0.0, 0.0), &Point2::new(3.0, 4.0));
        assert_abs_diff_eq!(d, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Point2::new(-1.5, 2.0);
        let b = Point2::new(4.0, -7.25);
        assert_eq!(distance(&a, &b).to_bits(), distance(&b, &a).to_bits());
    }

    #[test]
    fn distance_to_self_is_zero() {
        let a = Point2::new(12.0, -3.0);
        assert!(distance(&a, &a).abs() < f64::EPSILON);
    }
}
