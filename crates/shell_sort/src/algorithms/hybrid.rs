use tracing::trace;

use crate::{GapInt, GapTable};

use super::common::{self, SMALL_SORT_THRESHOLD, Touched};

/// Ends of the slice known to be in order: `v[..prefix]` and `v[suffix..]`.
#[derive(Clone, Copy, Debug)]
struct Settled {
    len: usize,
    prefix: usize,
    suffix: usize,
}

impl Settled {
    fn new(len: usize) -> Self {
        Self {
            len,
            prefix: 1,
            suffix: len - 1,
        }
    }

    /// Shrinks both ordered ends so neither covers a slot in `touched`.
    fn written(&mut self, touched: Touched) {
        if touched.is_empty() {
            return;
        }
        if touched.lo < self.prefix {
            self.prefix = touched.lo;
        }
        if touched.hi > self.suffix {
            self.suffix = touched.hi;
        }
    }

    /// Both ends ordered and sharing at least one slot means the whole slice is ordered.
    fn covers_all(self) -> bool {
        self.prefix >= self.len || self.suffix == 0 || self.suffix < self.prefix
    }
}

/// Two-step Shell sort fused with budgeted straight-insertion sweeps.
///
/// After each gapped pass with a gap above 1, a forward and then a backward insertion sweep
/// run. Each may shift at most as many elements as the next table entry, the one the
/// two-step stride skips. A sweep that reaches the far end has ordered the whole slice and
/// the sort stops there.
pub fn sort<E, T, F>(v: &mut [E], table: &GapTable<T>, is_less: &mut F)
where
    T: GapInt,
    F: FnMut(&E, &E) -> bool,
{
    let len = v.len();
    if len < SMALL_SORT_THRESHOLD {
        common::insertion_sort(v, is_less);
        return;
    }

    let mut settled = Settled::new(len);
    let mut index = table.first_below(len);
    while let Some(gap) = table.stride(index) {
        if gap == 1 {
            break;
        }

        settled.written(common::insert_gapped(v, gap, is_less));
        if settled.covers_all() {
            trace!(gap, "ordered ends meet after gapped pass");
            return;
        }

        let budget = table.stride(index + 1).unwrap_or(1);

        let forward = common::sweep_forward(v, settled.prefix, budget, is_less);
        let Some(halt) = forward.halt else {
            trace!(gap, shifts = forward.shifts, "forward sweep ordered the range");
            return;
        };
        settled.written(Touched {
            lo: halt.placed,
            hi: halt.cursor + 1,
        });
        settled.prefix = halt.placed;

        let backward = common::sweep_backward(v, settled.suffix, budget, is_less);
        let Some(halt) = backward.halt else {
            trace!(gap, shifts = backward.shifts, "backward sweep ordered the range");
            return;
        };
        settled.written(Touched {
            lo: halt.cursor - 1,
            hi: halt.placed + 1,
        });
        settled.suffix = halt.placed + 1;

        if settled.covers_all() {
            trace!(gap, "ordered ends meet after sweeps");
            return;
        }
        index += 2;
    }

    common::insertion_sort_from(v, settled.prefix, is_less);
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::{Settled, sort};
    use crate::algorithms::common::Touched;
    use crate::{GapFamily, GapTable};

    #[test]
    fn settled_ends_shrink_on_writes() {
        let mut settled = Settled::new(20);
        settled.prefix = 8;
        settled.suffix = 12;
        settled.written(Touched::NONE);
        assert_eq!((settled.prefix, settled.suffix), (8, 12));
        settled.written(Touched { lo: 9, hi: 11 });
        assert_eq!((settled.prefix, settled.suffix), (8, 12));
        settled.written(Touched { lo: 5, hi: 15 });
        assert_eq!((settled.prefix, settled.suffix), (5, 15));
        assert!(!settled.covers_all());
        settled.prefix = 16;
        assert!(settled.covers_all());
    }

    #[test]
    fn sorts_random_inputs_with_every_family() {
        let mut rng = StdRng::seed_from_u64(0x4B1D_2026);
        for &family in crate::all_families() {
            let table = family.table::<isize>();
            for &size in &[10_usize, 11, 17, 64, 333, 1000] {
                let mut data = (0..size)
                    .map(|_| rng.random_range(0..size as u32 / 2 + 1))
                    .collect::<Vec<_>>();
                let mut expected = data.clone();
                expected.sort_unstable();
                sort(&mut data, &table, &mut |a: &u32, b: &u32| a < b);
                assert_eq!(data, expected, "family={family:?} size={size}");
            }
        }
    }

    #[test]
    fn nearly_sorted_input_exits_early() {
        let table = GapFamily::Fibonacci.table::<isize>();
        let mut data = (0..4096).collect::<Vec<u32>>();
        data.swap(100, 101);
        data.swap(3000, 3001);

        let calls = Cell::new(0_usize);
        sort(&mut data, &table, &mut |a: &u32, b: &u32| {
            calls.set(calls.get() + 1);
            a < b
        });
        assert!(data.windows(2).all(|w| w[0] <= w[1]));

        let mut plain = (0..4096).collect::<Vec<u32>>();
        plain.swap(100, 101);
        plain.swap(3000, 3001);
        let plain_calls = Cell::new(0_usize);
        crate::algorithms::shell_sort::sort(&mut plain, &table, &mut |a: &u32, b: &u32| {
            plain_calls.set(plain_calls.get() + 1);
            a < b
        });
        assert!(calls.get() < plain_calls.get());
    }

    #[test]
    fn sweep_budget_is_the_skipped_gap() {
        // Gap 8 writes nothing, then one forward sweep with budget 3 makes the two shifts
        // needed and finishes: 2 + 9 + 2 comparisons.
        let table = GapTable::new(vec![8_i32, 3, 1]).unwrap();
        let mut data = vec![0_u32, 1, 2, 3, 4, 5, 6, 8, 9, 7];
        let calls = Cell::new(0_usize);
        sort(&mut data, &table, &mut |a: &u32, b: &u32| {
            calls.set(calls.get() + 1);
            a < b
        });
        assert_eq!(data, (0..10).collect::<Vec<_>>());
        assert_eq!(calls.get(), 13);
    }

    #[test]
    fn custom_table_without_terminal_one_still_sorts() {
        let table = GapTable::new(vec![40_i32, 13, 4]).unwrap();
        let mut data = (0..200).rev().collect::<Vec<i32>>();
        sort(&mut data, &table, &mut |a: &i32, b: &i32| a < b);
        assert_eq!(data, (0..200).collect::<Vec<_>>());
    }
}
