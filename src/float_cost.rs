use derive_more::Display;
use num_traits::One;
use num_traits::SaturatingAdd;
use num_traits::Zero;
use ordered_float::FloatCore;
use ordered_float::OrderedFloat;

use crate::cost::Cost;

/// A real-valued [`Cost`].
///
/// `OrderedFloat` gives us the total order the frontier needs. NaN sorts above
/// every other value, so a NaN cost behaves like an unreachable one.
#[derive(Copy, Clone, Default, Debug, Display)]
#[repr(transparent)]
#[display("{_0}")]
pub struct FloatCost<F: FloatCore>(pub OrderedFloat<F>);

impl<F> Cost for FloatCost<F> where F: FloatCore + std::fmt::Debug + std::fmt::Display {}

impl<F: FloatCore> FloatCost<F> {
    pub fn new(f: F) -> Self {
        Self(OrderedFloat(f))
    }

    #[inline(always)]
    pub fn get(&self) -> F {
        self.0.0
    }
}

impl<F: FloatCore> std::ops::Add for FloatCost<F> {
    type Output = Self;
    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl<F: FloatCore> std::ops::AddAssign for FloatCost<F> {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Floats saturate at infinity on their own.
impl<F: FloatCore> SaturatingAdd for FloatCost<F> {
    #[inline(always)]
    fn saturating_add(&self, rhs: &Self) -> Self {
        *self + *rhs
    }
}

/// Only there because [`One`] asks for it.
impl<F: FloatCore> std::ops::Mul for FloatCost<F> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

impl<F: FloatCore> Zero for FloatCost<F> {
    #[inline(always)]
    fn zero() -> Self {
        Self::new(F::zero())
    }
    #[inline(always)]
    fn is_zero(&self) -> bool {
        self.0.0.is_zero()
    }
}

impl<F: FloatCore> One for FloatCost<F> {
    #[inline(always)]
    fn one() -> Self {
        Self::new(F::one())
    }
}

// `OrderedFloat` already orders NaN, so equality and order are total.
impl<F: FloatCore> PartialEq for FloatCost<F> {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl<F: FloatCore> Eq for FloatCost<F> {}

impl<F: FloatCore> PartialOrd for FloatCost<F> {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl<F: FloatCore> Ord for FloatCost<F> {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.cmp(&other.0)
    }
}
