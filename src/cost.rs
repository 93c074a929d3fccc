/// A path cost.
///
/// Costs are totally ordered and additive, and path sums saturate instead of
/// overflowing. Search relies on them being non-negative, which unsigned
/// integers get for free and `FloatCost` checks through [`Cost::is_negative`].
pub trait Cost:
    Copy
    + std::fmt::Debug
    + std::fmt::Display
    + PartialEq
    + core::cmp::Eq
    + PartialOrd
    + Ord
    + num_traits::SaturatingAdd
    + num_traits::Zero
    + num_traits::One
    + std::ops::Add<Self, Output = Self>
    + std::ops::AddAssign
{
    #[inline(always)]
    fn is_negative(&self) -> bool {
        *self < Self::zero()
    }
}

impl Cost for u32 {}
impl Cost for u64 {}
impl Cost for usize {}
