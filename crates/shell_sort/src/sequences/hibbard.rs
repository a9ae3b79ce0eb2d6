use crate::GapInt;

use super::GapSequence;

/// Hibbard's `2^k - 1`, one term per value bit of `T`.
pub struct Hibbard63;

impl GapSequence for Hibbard63 {
    fn table_size<T: GapInt>() -> usize {
        T::DIGITS as usize
    }

    fn generate<T: GapInt>() -> Vec<T> {
        let size = Self::table_size::<T>();
        let mut terms = Vec::with_capacity(size);
        let mut f = T::ZERO;
        while terms.len() < size {
            // 2 f + 1 tops out at exactly T::MAX.
            f = f + f + T::ONE;
            terms.push(f);
        }
        terms.reverse();
        terms
    }
}
