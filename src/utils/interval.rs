/// A closed interval `[self.0, self.1]`.
///
/// In this crate an interval is mostly the "shadow" a polygon casts on a candidate separating
/// axis: the range of the dot products between the axis and every vertex of the polygon.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Interval<T>(pub T, pub T);

impl<T> Interval<T> {
    /// Computes a new interval that contains both `self` and `t`.
    ///
    /// Both bounds are updated independently so that enclosing a value into
    /// [`Interval::empty`] yields `[t, t]`.
    #[must_use]
    pub fn enclose(self, t: T) -> Self
    where
        T: PartialOrd + Copy,
    {
        let min = if t < self.0 { t } else { self.0 };
        let max = if t > self.1 { t } else { self.1 };
        Interval(min, max)
    }

    /// Do `self` and `rhs` share at least one value?
    ///
    /// Bounds are inclusive: two intervals touching at a single endpoint intersect.
    /// Comparisons involving NaN are false, so a NaN bound never intersects anything.
    #[must_use]
    pub fn intersects(&self, rhs: &Self) -> bool
    where
        T: PartialOrd,
    {
        rhs.1 >= self.0 && self.1 >= rhs.0
    }
}

impl Interval<crate::math::Real> {
    /// The empty interval `[+inf, -inf]`, neutral element of [`Interval::enclose`].
    #[must_use]
    pub fn empty() -> Self {
        use crate::math::Real;
        Interval(Real::INFINITY, Real::NEG_INFINITY)
    }

    /// Is this the empty interval (lower bound above upper bound)?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0 > self.1
    }
}
