use crate::{GapInt, GapTable};

use super::common;

/// Classic Shell sort: one strided insertion pass per gap below `v.len()`, largest first.
pub fn sort<E, T, F>(v: &mut [E], table: &GapTable<T>, is_less: &mut F)
where
    T: GapInt,
    F: FnMut(&E, &E) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    for index in table.first_below(len)..table.len() {
        if let Some(gap) = table.stride(index) {
            common::insert_gapped(v, gap, is_less);
        }
    }
}
