use std::fmt::Debug;
use std::hash::Hash;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

/// Signed integer type a gap table is generated over.
///
/// All overflow guards in the generators are phrased against [`GapInt::MAX`], so a table
/// built for `i16` is exactly the prefix of the recurrence that fits in an `i16`.
pub trait GapInt:
    Copy
    + Ord
    + Hash
    + Debug
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
    + Neg<Output = Self>
{
    const ZERO: Self;
    const ONE: Self;
    const MAX: Self;
    /// Number of value bits, sign bit excluded.
    const DIGITS: u32;
    const NAME: &'static str;

    fn from_small(value: i8) -> Self;

    /// The gap as a slice stride, `None` if it does not fit in `usize`.
    fn to_usize(self) -> Option<usize>;
}

macro_rules! impl_gap_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl GapInt for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const MAX: Self = <$t>::MAX;
                const DIGITS: u32 = <$t>::BITS - 1;
                const NAME: &'static str = stringify!($t);

                #[inline(always)]
                fn from_small(value: i8) -> Self {
                    Self::from(value)
                }

                #[inline(always)]
                fn to_usize(self) -> Option<usize> {
                    usize::try_from(self).ok()
                }
            }
        )*
    };
}

impl_gap_int!(i8, i16, i32, i64, i128, isize);
