use crate::{GapInt, GapTable};

use super::common::{self, SMALL_SORT_THRESHOLD};

/// Shell sort over every other gap.
///
/// For the Fibonacci family `F(2n) = F(1) + F(3) + ... + F(2n - 1)`, so half the table is
/// enough as long as the run still finishes with a gap of 1.
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

    let mut last_gap = 0;
    let mut index = table.first_below(len);
    while let Some(gap) = table.stride(index) {
        common::insert_gapped(v, gap, is_less);
        last_gap = gap;
        index += 2;
    }

    if last_gap != 1 {
        common::insertion_sort(v, is_less);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::sort;
    use crate::GapTable;

    #[test]
    fn walk_starts_at_largest_gap_below_len() {
        // Gaps 5 then 1 on ordered input: (12 - 5) + (12 - 1) comparisons.
        // Starting from 12 instead would pick 3 and cost 20.
        let table = GapTable::new(vec![12_i32, 5, 3, 1]).unwrap();
        let mut data = (0..12).collect::<Vec<u32>>();
        let calls = Cell::new(0_usize);
        sort(&mut data, &table, &mut |a: &u32, b: &u32| {
            calls.set(calls.get() + 1);
            a < b
        });
        assert_eq!(calls.get(), 18);
        assert_eq!(data, (0..12).collect::<Vec<_>>());
    }

    #[test]
    fn finishes_with_gap_one_when_the_walk_skips_it() {
        let table = GapTable::new(vec![9_i64, 4, 2, 1]).unwrap();
        let mut data = (0..40).rev().collect::<Vec<i32>>();
        sort(&mut data, &table, &mut |a: &i32, b: &i32| a < b);
        assert_eq!(data, (0..40).collect::<Vec<_>>());
    }
}
