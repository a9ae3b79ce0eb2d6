use crate::GapInt;

use super::GapSequence;

/// Plain Fibonacci numbers, `f(0) = f(1) = 1`.
///
/// The repeated base term is not a usable gap, so the table starts at `f(1)`.
pub struct Fibonacci;

impl GapSequence for Fibonacci {
    fn table_size<T: GapInt>() -> usize {
        let (mut f0, mut f1) = (T::ONE, T::ONE);
        let mut size = 1;
        while T::MAX - f1 >= f0 {
            let f2 = f1 + f0;
            f0 = f1;
            f1 = f2;
            size += 1;
        }
        size
    }

    fn generate<T: GapInt>() -> Vec<T> {
        let size = Self::table_size::<T>();
        let mut terms = Vec::with_capacity(size);
        let (mut f0, mut f1) = (T::ONE, T::ONE);
        terms.push(f1);
        while terms.len() < size {
            let f2 = f1 + f0;
            f0 = f1;
            f1 = f2;
            terms.push(f1);
        }
        terms.reverse();
        terms
    }
}

/// Fibonacci numbers seeded with `f(0) = 1, f(1) = 2`, closed by a final gap of 1.
pub struct Fibonacci12;

impl GapSequence for Fibonacci12 {
    fn table_size<T: GapInt>() -> usize {
        let (mut f0, mut f1) = (T::ONE, T::from_small(2));
        let mut size = 1;
        while T::MAX - f1 >= f0 {
            let f2 = f1 + f0;
            f0 = f1;
            f1 = f2;
            size += 1;
        }
        size + 1
    }

    fn generate<T: GapInt>() -> Vec<T> {
        let size = Self::table_size::<T>();
        let mut terms = Vec::with_capacity(size);
        let (mut f0, mut f1) = (T::ONE, T::from_small(2));
        terms.push(f1);
        while terms.len() + 1 < size {
            let f2 = f1 + f0;
            f0 = f1;
            f1 = f2;
            terms.push(f1);
        }
        terms.reverse();
        terms.push(T::ONE);
        terms
    }
}

/// `f(n) = f(n-1) + 3 f(n-2)` with `f(0) = f(1) = 1`.
pub struct Fibonacci13;

impl GapSequence for Fibonacci13 {
    fn table_size<T: GapInt>() -> usize {
        let three = T::from_small(3);
        let (mut f0, mut f1) = (T::ONE, T::ONE);
        let mut size = 1;
        while (T::MAX - f1) / f0 >= three {
            let f2 = f1 + f0 * three;
            f0 = f1;
            f1 = f2;
            size += 1;
        }
        size
    }

    fn generate<T: GapInt>() -> Vec<T> {
        let three = T::from_small(3);
        let size = Self::table_size::<T>();
        let mut terms = Vec::with_capacity(size);
        let (mut f0, mut f1) = (T::ONE, T::ONE);
        terms.push(f1);
        while terms.len() < size {
            let f2 = f1 + f0 * three;
            f0 = f1;
            f1 = f2;
            terms.push(f1);
        }
        terms.reverse();
        terms
    }
}

/// `f(n) = f(n-1) + 2 f(n-2)` with `f(0) = f(1) = 1`.
pub struct Fibonacci12Alt;

impl GapSequence for Fibonacci12Alt {
    fn table_size<T: GapInt>() -> usize {
        let two = T::from_small(2);
        let (mut f0, mut f1) = (T::ONE, T::ONE);
        let mut size = 1;
        while (T::MAX - f1) / two >= f0 {
            let f2 = f1 + f0 + f0;
            f0 = f1;
            f1 = f2;
            size += 1;
        }
        size
    }

    fn generate<T: GapInt>() -> Vec<T> {
        let size = Self::table_size::<T>();
        let mut terms = Vec::with_capacity(size);
        let (mut f0, mut f1) = (T::ONE, T::ONE);
        terms.push(f1);
        while terms.len() < size {
            let f2 = f1 + f0 + f0;
            f0 = f1;
            f1 = f2;
            terms.push(f1);
        }
        terms.reverse();
        terms
    }
}

/// Fibonacci numbers seeded `5, 8` plus an alternating `-1, +1` correction.
///
/// `term(n) = fib(n) + grand(n)` where `grand(n) = -grand(n-1)`, `grand(1) = -1`.
/// `term(0) = 1` is fixed.
pub struct FibonacciFuzzy;

impl GapSequence for FibonacciFuzzy {
    fn table_size<T: GapInt>() -> usize {
        let (mut f0, mut f1) = (T::from_small(5), T::from_small(8));
        let mut grand = -T::ONE;
        let mut size = 3;
        while T::MAX - f1 >= f0 + grand {
            let f2 = f1 + f0;
            f0 = f1;
            f1 = f2;
            grand = -grand;
            size += 1;
        }
        size
    }

    fn generate<T: GapInt>() -> Vec<T> {
        let size = Self::table_size::<T>();
        let mut terms = Vec::with_capacity(size);
        let (mut f0, mut f1) = (T::from_small(5), T::from_small(8));
        let mut grand = T::ONE;
        terms.push(T::ONE);
        terms.push(f0 - T::ONE);
        terms.push(f1 + grand);
        while terms.len() < size {
            let f2 = f1 + f0;
            f0 = f1;
            f1 = f2;
            grand = -grand;
            terms.push(f1 + grand);
        }
        terms.reverse();
        terms
    }
}
