#![forbid(unsafe_code)]

//! Pointer-to-item distance.

use crate::pointer::PointerSample;

/// Signed distance `pointer - center` along the primary axis.
///
/// An absent pointer is infinitely far away, which the magnifier maps to the
/// base size.
#[inline]
#[must_use]
pub fn signed_distance(sample: PointerSample, center: f64) -> f64 {
    match sample {
        PointerSample::Present(p) => p - center,
        PointerSample::Absent => f64::INFINITY,
    }
}

/// Distance to an item whose geometry may be unknown.
///
/// Items the host has not measured yet are treated like an absent pointer.
#[inline]
#[must_use]
pub fn distance_to(sample: PointerSample, center: Option<f64>) -> f64 {
    center.map_or(f64::INFINITY, |c| signed_distance(sample, c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_both_sides() {
        assert_eq!(signed_distance(PointerSample::Present(100.0), 175.0), -75.0);
        assert_eq!(signed_distance(PointerSample::Present(250.0), 175.0), 75.0);
    }

    #[test]
    fn absent_is_infinite() {
        assert_eq!(signed_distance(PointerSample::Absent, 0.0), f64::INFINITY);
    }

    #[test]
    fn unmeasured_item_is_infinite() {
        assert_eq!(
            distance_to(PointerSample::Present(10.0), None),
            f64::INFINITY
        );
        assert_eq!(distance_to(PointerSample::Present(10.0), Some(4.0)), 6.0);
    }
}
