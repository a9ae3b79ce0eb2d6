mod a109110;
mod fibonacci;
mod hibbard;
mod papernov_stasevich;
mod tokuda;

use crate::{GapFamily, GapInt};

pub use a109110::A109110;
pub use fibonacci::{Fibonacci, Fibonacci12, Fibonacci12Alt, Fibonacci13, FibonacciFuzzy};
pub use hibbard::Hibbard63;
pub use papernov_stasevich::PapernovStasevich;
pub use tokuda::Tokuda;

/// A gap sequence family.
///
/// - `table_size::<T>()` depends only on the limits of `T`, never on the data being sorted.
/// - `generate::<T>()` returns exactly `table_size::<T>()` gaps, largest first, and no term
///   (or intermediate value used to test it) exceeds `T::MAX`.
pub trait GapSequence {
    fn table_size<T: GapInt>() -> usize;
    fn generate<T: GapInt>() -> Vec<T>;
}

impl GapFamily {
    pub fn table_size<T: GapInt>(self) -> usize {
        match self {
            GapFamily::Fibonacci => Fibonacci::table_size::<T>(),
            GapFamily::Fibonacci12 => Fibonacci12::table_size::<T>(),
            GapFamily::Fibonacci13 => Fibonacci13::table_size::<T>(),
            GapFamily::Fibonacci12Alt => Fibonacci12Alt::table_size::<T>(),
            GapFamily::FibonacciFuzzy => FibonacciFuzzy::table_size::<T>(),
            GapFamily::Hibbard63 => Hibbard63::table_size::<T>(),
            GapFamily::PapernovStasevich => PapernovStasevich::table_size::<T>(),
            GapFamily::Tokuda => Tokuda::table_size::<T>(),
            GapFamily::A109110 => A109110::table_size::<T>(),
        }
    }

    /// Uncached generation; see [`GapFamily::table`] for the shared copy.
    pub fn generate<T: GapInt>(self) -> Vec<T> {
        match self {
            GapFamily::Fibonacci => Fibonacci::generate::<T>(),
            GapFamily::Fibonacci12 => Fibonacci12::generate::<T>(),
            GapFamily::Fibonacci13 => Fibonacci13::generate::<T>(),
            GapFamily::Fibonacci12Alt => Fibonacci12Alt::generate::<T>(),
            GapFamily::FibonacciFuzzy => FibonacciFuzzy::generate::<T>(),
            GapFamily::Hibbard63 => Hibbard63::generate::<T>(),
            GapFamily::PapernovStasevich => PapernovStasevich::generate::<T>(),
            GapFamily::Tokuda => Tokuda::generate::<T>(),
            GapFamily::A109110 => A109110::generate::<T>(),
        }
    }
}
