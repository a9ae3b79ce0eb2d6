use crate::GapInt;

use super::GapSequence;

/// OEIS A109110: `f(n) = 2 f(n-1) + f(n-2) - f(n-3)` from `4, 9, 20`, closed by a final 1.
pub struct A109110;

#[inline]
fn next_term<T: GapInt>(f0: T, f1: T, f2: T) -> T {
    // f1 > f0, so the difference is positive and the sum never passes the guarded bound.
    f2 + f2 + (f1 - f0)
}

impl GapSequence for A109110 {
    fn table_size<T: GapInt>() -> usize {
        let two = T::from_small(2);
        let (mut f0, mut f1, mut f2) = (T::from_small(4), T::from_small(9), T::from_small(20));
        let mut size = 3;
        while ((T::MAX - f1) + f0) / two >= f2 {
            let f3 = next_term(f0, f1, f2);
            f0 = f1;
            f1 = f2;
            f2 = f3;
            size += 1;
        }
        size + 1
    }

    fn generate<T: GapInt>() -> Vec<T> {
        let size = Self::table_size::<T>();
        let mut terms = Vec::with_capacity(size);
        let (mut f0, mut f1, mut f2) = (T::from_small(4), T::from_small(9), T::from_small(20));
        terms.extend([f0, f1, f2]);
        while terms.len() + 1 < size {
            let f3 = next_term(f0, f1, f2);
            f0 = f1;
            f1 = f2;
            f2 = f3;
            terms.push(f3);
        }
        terms.reverse();
        terms.push(T::ONE);
        terms
    }
}
