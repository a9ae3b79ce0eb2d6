use std::mem::ManuallyDrop;
use std::ptr;

/// Below this length the two-step and hybrid variants fall back to plain insertion sort.
pub const SMALL_SORT_THRESHOLD: usize = 10;

// When dropped, copies from `src` into `dest`.
struct InsertionHole<E> {
    src: *const E,
    dest: *mut E,
}

impl<E> Drop for InsertionHole<E> {
    fn drop(&mut self) {
        // SAFETY: `src` points at the value read out of the slice and `dest` at the single
        // slot whose contents were moved elsewhere.
        unsafe {
            ptr::copy_nonoverlapping(self.src, self.dest, 1);
        }
    }
}

/// Half-open span of slice indices written by a pass. Empty when `lo >= hi`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Touched {
    pub lo: usize,
    pub hi: usize,
}

impl Touched {
    pub const NONE: Self = Self {
        lo: usize::MAX,
        hi: 0,
    };

    #[inline]
    pub fn is_empty(self) -> bool {
        self.lo >= self.hi
    }

    #[inline]
    fn cover(&mut self, first: usize, last: usize) {
        self.lo = self.lo.min(first);
        self.hi = self.hi.max(last + 1);
    }
}

/// Where a bounded sweep ran out of budget.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Halt {
    /// Cursor position when the budget hit zero.
    pub cursor: usize,
    /// Final slot of the element that was being moved.
    pub placed: usize,
}

/// Result of one bounded insertion sweep.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Sweep {
    pub shifts: usize,
    /// `None` when the sweep reached the far end, i.e. the whole slice is ordered.
    pub halt: Option<Halt>,
}

/// One insertion pass at stride `gap`.
///
/// Each `v[i]` with `i >= gap` walks left in steps of `gap` while its predecessor compares
/// after it. Returns the span of indices that were written.
#[inline]
pub fn insert_gapped<E, F>(v: &mut [E], gap: usize, is_less: &mut F) -> Touched
where
    F: FnMut(&E, &E) -> bool,
{
    insert_gapped_from(v, gap, gap, is_less)
}

/// Plain insertion sort of `v`, assuming `v[..offset]` is already ordered.
#[inline]
pub fn insertion_sort_from<E, F>(v: &mut [E], offset: usize, is_less: &mut F) -> Touched
where
    F: FnMut(&E, &E) -> bool,
{
    insert_gapped_from(v, 1, offset, is_less)
}

fn insert_gapped_from<E, F>(v: &mut [E], gap: usize, start: usize, is_less: &mut F) -> Touched
where
    F: FnMut(&E, &E) -> bool,
{
    debug_assert!(gap > 0);

    let len = v.len();
    let mut touched = Touched::NONE;
    if gap == 0 || gap >= len {
        return touched;
    }

    let base = v.as_mut_ptr();
    for i in start.max(gap)..len {
        // SAFETY: `gap <= j <= i < len` whenever `j` and `j - gap` are dereferenced, and the
        // hole guard writes `tmp` back into exactly one slot even if `is_less` panics.
        unsafe {
            let cur = base.add(i);
            if !is_less(&*cur, &*cur.sub(gap)) {
                continue;
            }

            let tmp = ManuallyDrop::new(ptr::read(cur));
            let mut hole = InsertionHole {
                src: &*tmp,
                dest: cur,
            };
            let mut j = i;
            loop {
                ptr::copy_nonoverlapping(base.add(j - gap), base.add(j), 1);
                j -= gap;
                hole.dest = base.add(j);
                if j < gap || !is_less(&*tmp, &*base.add(j - gap)) {
                    break;
                }
            }
            touched.cover(j, i);
        }
    }
    touched
}

#[inline]
pub fn insertion_sort<E, F>(v: &mut [E], is_less: &mut F)
where
    F: FnMut(&E, &E) -> bool,
{
    insert_gapped(v, 1, is_less);
}

/// Forward insertion sweep from `start`, capped at `budget` element shifts.
///
/// `v[..start]` must already be ordered. The sweep stops right after the shift that
/// exhausts the budget.
pub fn sweep_forward<E, F>(v: &mut [E], start: usize, budget: usize, is_less: &mut F) -> Sweep
where
    F: FnMut(&E, &E) -> bool,
{
    let len = v.len();
    let mut left = budget;
    let mut sweep = Sweep {
        shifts: 0,
        halt: None,
    };
    if left == 0 {
        sweep.halt = Some(Halt {
            cursor: start,
            placed: start,
        });
        return sweep;
    }

    let base = v.as_mut_ptr();
    for i in start.max(1)..len {
        // SAFETY: `1 <= j <= i < len` whenever `j` and `j - 1` are dereferenced.
        unsafe {
            let cur = base.add(i);
            if !is_less(&*cur, &*cur.sub(1)) {
                continue;
            }

            let tmp = ManuallyDrop::new(ptr::read(cur));
            let mut hole = InsertionHole {
                src: &*tmp,
                dest: cur,
            };
            let mut j = i;
            loop {
                ptr::copy_nonoverlapping(base.add(j - 1), base.add(j), 1);
                j -= 1;
                hole.dest = base.add(j);
                left -= 1;
                if j == 0 || left == 0 || !is_less(&*tmp, &*base.add(j - 1)) {
                    break;
                }
            }
            drop(hole);

            if left == 0 {
                sweep.shifts = budget;
                sweep.halt = Some(Halt {
                    cursor: i,
                    placed: j,
                });
                return sweep;
            }
        }
    }

    sweep.shifts = budget - left;
    sweep
}

/// Backward insertion sweep: the mirror image of [`sweep_forward`].
///
/// `v[cursor..]` must already be ordered. Walking the cursor down to 1, the element just
/// left of it sinks right into the ordered suffix, shifting smaller elements left.
pub fn sweep_backward<E, F>(v: &mut [E], cursor: usize, budget: usize, is_less: &mut F) -> Sweep
where
    F: FnMut(&E, &E) -> bool,
{
    let len = v.len();
    let mut left = budget;
    let mut sweep = Sweep {
        shifts: 0,
        halt: None,
    };
    if len < 2 {
        return sweep;
    }
    let cursor = cursor.min(len - 1);
    if left == 0 {
        sweep.halt = Some(Halt {
            cursor,
            placed: cursor,
        });
        return sweep;
    }

    let base = v.as_mut_ptr();
    for i in (1..=cursor).rev() {
        // SAFETY: `i - 1 <= j < len - 1` whenever `j` and `j + 1` are dereferenced.
        unsafe {
            let prev = base.add(i - 1);
            if !is_less(&*base.add(i), &*prev) {
                continue;
            }

            let tmp = ManuallyDrop::new(ptr::read(prev));
            let mut hole = InsertionHole {
                src: &*tmp,
                dest: prev,
            };
            let mut j = i - 1;
            loop {
                ptr::copy_nonoverlapping(base.add(j + 1), base.add(j), 1);
                j += 1;
                hole.dest = base.add(j);
                left -= 1;
                if j == len - 1 || left == 0 || !is_less(&*base.add(j + 1), &*tmp) {
                    break;
                }
            }
            drop(hole);

            if left == 0 {
                sweep.shifts = budget;
                sweep.halt = Some(Halt {
                    cursor: i,
                    placed: j,
                });
                return sweep;
            }
        }
    }

    sweep.shifts = budget - left;
    sweep
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn lt(a: &i32, b: &i32) -> bool {
        a < b
    }

    fn random_vec(rng: &mut StdRng, len: usize) -> Vec<i32> {
        (0..len).map(|_| rng.random_range(-50..50)).collect()
    }

    #[test]
    fn gapped_pass_orders_every_stride_chain() {
        let mut rng = StdRng::seed_from_u64(0x5EED_2026);
        for &gap in &[1_usize, 2, 3, 7] {
            let mut v = random_vec(&mut rng, 40);
            insert_gapped(&mut v, gap, &mut lt);
            for i in gap..v.len() {
                assert!(v[i - gap] <= v[i], "gap={gap} i={i} v={v:?}");
            }
        }
    }

    #[test]
    fn gapped_pass_reports_written_span() {
        let mut v = vec![1, 2, 3, 9, 5, 6, 4];
        let touched = insert_gapped(&mut v, 3, &mut lt);
        assert_eq!(v, vec![1, 2, 3, 4, 5, 6, 9]);
        assert_eq!(touched, Touched { lo: 3, hi: 7 });

        let mut sorted = vec![1, 2, 3];
        assert!(insert_gapped(&mut sorted, 1, &mut lt).is_empty());
    }

    #[test]
    fn gapped_pass_ignores_oversized_gap() {
        let mut v = vec![3, 2, 1];
        assert!(insert_gapped(&mut v, 3, &mut lt).is_empty());
        assert_eq!(v, vec![3, 2, 1]);
    }

    #[test]
    fn insertion_sort_from_respects_offset() {
        let mut v = vec![1, 4, 7, 3, 2, 9];
        let touched = insertion_sort_from(&mut v, 3, &mut lt);
        assert_eq!(v, vec![1, 2, 3, 4, 7, 9]);
        assert_eq!(touched, Touched { lo: 1, hi: 5 });
    }

    #[test]
    fn forward_sweep_never_exceeds_budget() {
        let mut rng = StdRng::seed_from_u64(0xB0D6_E7);
        for budget in 1..30 {
            let mut v = random_vec(&mut rng, 25);
            let before = {
                let mut s = v.clone();
                s.sort_unstable();
                s
            };
            let sweep = sweep_forward(&mut v, 1, budget, &mut lt);
            assert!(sweep.shifts <= budget);
            match sweep.halt {
                Some(halt) => {
                    assert_eq!(sweep.shifts, budget);
                    assert!(v[..halt.placed].windows(2).all(|w| w[0] <= w[1]));
                }
                None => assert!(v.windows(2).all(|w| w[0] <= w[1])),
            }
            let mut after = v.clone();
            after.sort_unstable();
            assert_eq!(after, before);
        }
    }

    #[test]
    fn backward_sweep_never_exceeds_budget() {
        let mut rng = StdRng::seed_from_u64(0xBAC6_0A2D);
        for budget in 1..30 {
            let mut v = random_vec(&mut rng, 25);
            let before = {
                let mut s = v.clone();
                s.sort_unstable();
                s
            };
            let last = v.len() - 1;
            let sweep = sweep_backward(&mut v, last, budget, &mut lt);
            assert!(sweep.shifts <= budget);
            match sweep.halt {
                Some(halt) => {
                    assert_eq!(sweep.shifts, budget);
                    assert!(v[halt.placed + 1..].windows(2).all(|w| w[0] <= w[1]));
                }
                None => assert!(v.windows(2).all(|w| w[0] <= w[1])),
            }
            let mut after = v.clone();
            after.sort_unstable();
            assert_eq!(after, before);
        }
    }

    #[test]
    fn backward_sweep_with_ample_budget_sorts() {
        let mut v = vec![5, 1, 4, 2, 3];
        let sweep = sweep_backward(&mut v, 4, usize::MAX, &mut lt);
        assert_eq!(sweep.halt, None);
        assert_eq!(v, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn sweeps_on_ordered_input_shift_nothing() {
        let mut v = (0..16).collect::<Vec<i32>>();
        assert_eq!(
            sweep_forward(&mut v, 1, 1, &mut lt),
            Sweep {
                shifts: 0,
                halt: None
            }
        );
        assert_eq!(
            sweep_backward(&mut v, 15, 1, &mut lt),
            Sweep {
                shifts: 0,
                halt: None
            }
        );
    }

    #[test]
    fn panicking_comparator_keeps_every_element() {
        use std::panic::{AssertUnwindSafe, catch_unwind};

        let mut v = (0..64).rev().map(|x| x.to_string()).collect::<Vec<_>>();
        let mut calls = 0;
        let result = catch_unwind(AssertUnwindSafe(|| {
            insert_gapped(&mut v, 1, &mut |a: &String, b: &String| {
                calls += 1;
                if calls == 100 {
                    panic!("comparator failure");
                }
                a.len() < b.len() || (a.len() == b.len() && a < b)
            });
        }));
        assert!(result.is_err());
        let mut seen = v.iter().map(|s| s.parse::<i32>().unwrap()).collect::<Vec<_>>();
        seen.sort_unstable();
        assert_eq!(seen, (0..64).collect::<Vec<_>>());
    }
}
