use crate::GapInt;

use super::GapSequence;

/// `f(n) = 2 f(n-1) + floor((f(n-1) + 3) / 4) + 1` with `f(0) = 1`.
pub struct Tokuda;

/// `floor((f + 3) / 4)` without forming `f + 3`.
#[inline]
fn quarter_ceil<T: GapInt>(f: T) -> T {
    let three = T::from_small(3);
    let four = T::from_small(4);
    f / four + (f % four + three) / four
}

impl GapSequence for Tokuda {
    fn table_size<T: GapInt>() -> usize {
        let two = T::from_small(2);
        let mut f = T::ONE;
        let mut size = 1;
        while (T::MAX - quarter_ceil(f) - T::ONE) / f >= two {
            f = f + f + quarter_ceil(f) + T::ONE;
            size += 1;
        }
        size
    }

    fn generate<T: GapInt>() -> Vec<T> {
        let size = Self::table_size::<T>();
        let mut terms = Vec::with_capacity(size);
        let mut f = T::ONE;
        terms.push(f);
        while terms.len() < size {
            f = f + f + quarter_ceil(f) + T::ONE;
            terms.push(f);
        }
        terms.reverse();
        terms
    }
}

#[cfg(test)]
mod tests {
    use super::quarter_ceil;

    #[test]
    fn quarter_ceil_matches_shifted_floor() {
        for f in 1_i32..200 {
            assert_eq!(quarter_ceil(f), (f + 3) / 4, "f={f}");
        }
        assert_eq!(quarter_ceil(i8::MAX), 32);
    }
}
