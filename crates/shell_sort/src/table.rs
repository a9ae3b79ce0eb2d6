use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;
use tracing::debug;

use crate::error::GapTableError;
use crate::{GapFamily, GapInt, family_name};

/// Immutable gap table in consumption order: strictly decreasing, all gaps positive.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct GapTable<T> {
    gaps: Box<[T]>,
}

impl<T: GapInt> GapTable<T> {
    /// Builds a table from caller-supplied gaps, largest first.
    ///
    /// # Errors
    ///
    /// Returns [`GapTableError`] when `gaps` is empty, holds a non-positive gap, or is not
    /// strictly decreasing.
    pub fn new(gaps: Vec<T>) -> Result<Self, GapTableError> {
        if gaps.is_empty() {
            return Err(GapTableError::Empty);
        }
        for (index, &gap) in gaps.iter().enumerate() {
            if gap <= T::ZERO {
                return Err(GapTableError::NonPositive { index });
            }
            if index > 0 && gaps[index - 1] <= gap {
                return Err(GapTableError::NotDecreasing { index });
            }
        }
        Ok(Self {
            gaps: gaps.into_boxed_slice(),
        })
    }

    pub(crate) fn from_family(family: GapFamily) -> Self {
        let gaps = family.generate::<T>();
        debug_assert!(gaps.windows(2).all(|pair| pair[0] > pair[1]));
        debug_assert_eq!(gaps.last(), Some(&T::ONE));
        Self {
            gaps: gaps.into_boxed_slice(),
        }
    }

    #[inline]
    pub fn gaps(&self) -> &[T] {
        &self.gaps
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.gaps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.gaps.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.gaps.iter().copied()
    }

    /// Index of the largest gap strictly below `len`, or `self.len()` if there is none.
    #[inline]
    pub fn first_below(&self, len: usize) -> usize {
        self.gaps
            .partition_point(|gap| gap.to_usize().is_none_or(|gap| gap >= len))
    }

    /// The gap at `index` as a slice stride.
    #[inline]
    pub fn stride(&self, index: usize) -> Option<usize> {
        self.gaps.get(index)?.to_usize()
    }
}

type TableCache = RwLock<HashMap<(GapFamily, TypeId), Arc<dyn Any + Send + Sync>>>;

fn cache() -> &'static TableCache {
    static CACHE: OnceLock<TableCache> = OnceLock::new();
    CACHE.get_or_init(TableCache::default)
}

fn downcast<T: GapInt>(table: Arc<dyn Any + Send + Sync>) -> Arc<GapTable<T>> {
    match table.downcast::<GapTable<T>>() {
        Ok(table) => table,
        Err(_) => unreachable!("gap table cache entries are keyed by their numeric TypeId"),
    }
}

impl GapFamily {
    /// The shared table for this family over `T`, generated on first use.
    ///
    /// Concurrent first calls may each generate a table; only the first one published is
    /// kept and every caller receives it.
    pub fn table<T: GapInt>(self) -> Arc<GapTable<T>> {
        let key = (self, TypeId::of::<T>());
        if let Some(table) = cache().read().get(&key) {
            return downcast(Arc::clone(table));
        }

        let fresh: Arc<dyn Any + Send + Sync> = Arc::new(GapTable::<T>::from_family(self));
        let published = Arc::clone(cache().write().entry(key).or_insert_with(|| {
            debug!(
                family = family_name(self),
                numeric = T::NAME,
                "materialized gap table"
            );
            fresh
        }));
        downcast(published)
    }
}
