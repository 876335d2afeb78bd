use super::ApproxEq;

impl ApproxEq for f64 {
    fn abs_diff_eq(&self, other: &Self, tolerance: f64) -> bool {
        if !self.is_finite() || !other.is_finite() {
            // `inf == inf`, `-inf == -inf`, `inf != -inf`, `NaN` is never equal
            return self == other;
        }

        (self - other).abs() <= tolerance
    }

    fn rel_diff_eq(&self, other: &Self, tolerance: f64) -> bool {
        if !self.is_finite() || !other.is_finite() {
            return self == other;
        }

        let largest = self.abs().max(other.abs());
        (self - other).abs() <= largest * tolerance
    }
}

impl<T: ApproxEq<U> + ?Sized, U: ?Sized> ApproxEq<U> for &T {
    fn abs_diff_eq(&self, other: &U, tolerance: f64) -> bool {
        T::abs_diff_eq(self, other, tolerance)
    }

    fn rel_diff_eq(&self, other: &U, tolerance: f64) -> bool {
        T::rel_diff_eq(self, other, tolerance)
    }
}

impl<T: ApproxEq<U>, U> ApproxEq<[U]> for [T] {
    fn abs_diff_eq(&self, other: &[U], tolerance: f64) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| a.abs_diff_eq(b, tolerance))
    }

    fn rel_diff_eq(&self, other: &[U], tolerance: f64) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| a.rel_diff_eq(b, tolerance))
    }
}

impl<T: ApproxEq<U>, U> ApproxEq<Vec<U>> for Vec<T> {
    fn abs_diff_eq(&self, other: &Vec<U>, tolerance: f64) -> bool {
        self.as_slice().abs_diff_eq(other.as_slice(), tolerance)
    }

    fn rel_diff_eq(&self, other: &Vec<U>, tolerance: f64) -> bool {
        self.as_slice().rel_diff_eq(other.as_slice(), tolerance)
    }
}

impl<T: ApproxEq<U>, U> ApproxEq<Option<U>> for Option<T> {
    fn abs_diff_eq(&self, other: &Option<U>, tolerance: f64) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.abs_diff_eq(b, tolerance),
            (None, None) => true,
            _ => false,
        }
    }

    fn rel_diff_eq(&self, other: &Option<U>, tolerance: f64) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.rel_diff_eq(b, tolerance),
            (None, None) => true,
            _ => false,
        }
    }
}
