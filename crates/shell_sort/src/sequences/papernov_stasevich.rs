use crate::GapInt;

use super::GapSequence;

/// Papernov & Stasevich: `1, 3, 5, 9, 17, ...` (`2^k + 1` after the leading 1).
pub struct PapernovStasevich;

impl GapSequence for PapernovStasevich {
    fn table_size<T: GapInt>() -> usize {
        T::DIGITS as usize
    }

    fn generate<T: GapInt>() -> Vec<T> {
        let size = Self::table_size::<T>();
        let mut terms = Vec::with_capacity(size);
        let mut f = T::ONE;
        terms.push(f);
        for n in 1..size {
            f = if n == 1 {
                T::from_small(3)
            } else {
                f + f - T::ONE
            };
            terms.push(f);
        }
        terms.reverse();
        terms
    }
}
