mod algorithms;
mod config;
mod error;
mod int;
mod sequences;
mod table;

pub use config::{ALL_WIDTHS, NumericWidth, ShellSortConfig, width_name};
pub use error::{GapTableError, ParseError};
pub use int::GapInt;
pub use sequences::{
    A109110, Fibonacci, Fibonacci12, Fibonacci12Alt, Fibonacci13, FibonacciFuzzy, GapSequence,
    Hibbard63, PapernovStasevich, Tokuda,
};
pub use table::GapTable;

/// Named gap sequence families.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum GapFamily {
    #[default]
    Fibonacci,
    Fibonacci12,
    Fibonacci13,
    Fibonacci12Alt,
    FibonacciFuzzy,
    Hibbard63,
    PapernovStasevich,
    Tokuda,
    A109110,
}

pub const ALL_FAMILIES: [GapFamily; 9] = [
    GapFamily::Fibonacci,
    GapFamily::Fibonacci12,
    GapFamily::Fibonacci13,
    GapFamily::Fibonacci12Alt,
    GapFamily::FibonacciFuzzy,
    GapFamily::Hibbard63,
    GapFamily::PapernovStasevich,
    GapFamily::Tokuda,
    GapFamily::A109110,
];

pub fn all_families() -> &'static [GapFamily] {
    &ALL_FAMILIES
}

pub fn family_name(family: GapFamily) -> &'static str {
    match family {
        GapFamily::Fibonacci => "fibonacci",
        GapFamily::Fibonacci12 => "fibonacci_1_2",
        GapFamily::Fibonacci13 => "fibonacci_1_3",
        GapFamily::Fibonacci12Alt => "fibonacci_1_2_alt",
        GapFamily::FibonacciFuzzy => "fibonacci_fuzzy",
        GapFamily::Hibbard63 => "hibbard63",
        GapFamily::PapernovStasevich => "papernov_stasevich",
        GapFamily::Tokuda => "tokuda",
        GapFamily::A109110 => "a109110",
    }
}

/// How the gap table is walked.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum ShellSortVariant {
    /// Every gap below the slice length, largest first.
    #[default]
    Plain,
    /// Every other gap, always closing with a gap of 1.
    TwoStep,
    /// Two-step passes fused with budgeted insertion sweeps and early exit.
    Hybrid,
}

pub const ALL_VARIANTS: [ShellSortVariant; 3] = [
    ShellSortVariant::Plain,
    ShellSortVariant::TwoStep,
    ShellSortVariant::Hybrid,
];

pub fn all_variants() -> &'static [ShellSortVariant] {
    &ALL_VARIANTS
}

pub fn variant_name(variant: ShellSortVariant) -> &'static str {
    match variant {
        ShellSortVariant::Plain => "plain",
        ShellSortVariant::TwoStep => "two_step",
        ShellSortVariant::Hybrid => "hybrid",
    }
}

/// Sorts `data` in natural order with the cached `isize` table of `family`.
pub fn shell_sort<E: Ord>(family: GapFamily, variant: ShellSortVariant, data: &mut [E]) {
    shell_sort_by(family, variant, data, E::lt);
}

/// Sorts `data` so that no element is `is_less` than the one before it.
pub fn shell_sort_by<E, F>(
    family: GapFamily,
    variant: ShellSortVariant,
    data: &mut [E],
    is_less: F,
) where
    F: FnMut(&E, &E) -> bool,
{
    sort_with_table(variant, data, &family.table::<isize>(), is_less);
}

/// Sorts `data` with an explicit gap table.
///
/// The result is fully ordered once a gap-1 pass has run. The plain variant only runs one if
/// `table` ends in 1; the two-step and hybrid variants always do.
pub fn sort_with_table<E, T, F>(
    variant: ShellSortVariant,
    data: &mut [E],
    table: &GapTable<T>,
    mut is_less: F,
) where
    T: GapInt,
    F: FnMut(&E, &E) -> bool,
{
    match variant {
        ShellSortVariant::Plain => algorithms::shell_sort::sort(data, table, &mut is_less),
        ShellSortVariant::TwoStep => algorithms::two_step::sort(data, table, &mut is_less),
        ShellSortVariant::Hybrid => algorithms::hybrid::sort(data, table, &mut is_less),
    }
}
