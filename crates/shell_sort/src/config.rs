use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::{
    GapFamily, GapInt, ShellSortVariant, all_families, all_variants, family_name, sort_with_table,
    variant_name,
};

/// Numeric type the gap table is generated over.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum NumericWidth {
    I8,
    I16,
    I32,
    I64,
    I128,
    #[default]
    Isize,
}

pub const ALL_WIDTHS: [NumericWidth; 6] = [
    NumericWidth::I8,
    NumericWidth::I16,
    NumericWidth::I32,
    NumericWidth::I64,
    NumericWidth::I128,
    NumericWidth::Isize,
];

pub fn width_name(width: NumericWidth) -> &'static str {
    match width {
        NumericWidth::I8 => <i8 as GapInt>::NAME,
        NumericWidth::I16 => <i16 as GapInt>::NAME,
        NumericWidth::I32 => <i32 as GapInt>::NAME,
        NumericWidth::I64 => <i64 as GapInt>::NAME,
        NumericWidth::I128 => <i128 as GapInt>::NAME,
        NumericWidth::Isize => <isize as GapInt>::NAME,
    }
}

impl FromStr for GapFamily {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        all_families()
            .iter()
            .copied()
            .find(|&family| family_name(family).eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseError::UnknownFamily {
                name: name.to_owned(),
            })
    }
}

impl FromStr for ShellSortVariant {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        all_variants()
            .iter()
            .copied()
            .find(|&variant| variant_name(variant).eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseError::UnknownVariant {
                name: name.to_owned(),
            })
    }
}

impl FromStr for NumericWidth {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        ALL_WIDTHS
            .iter()
            .copied()
            .find(|&width| width_name(width).eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseError::UnknownWidth {
                name: name.to_owned(),
            })
    }
}

/// Which gap family, algorithm variant and numeric type a sort runs with.
///
/// Parses from `family[/variant[/width]]`, e.g. `tokuda`, `fibonacci/hybrid`,
/// `hibbard63/plain/i32`. Omitted parts take their defaults.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct ShellSortConfig {
    pub family: GapFamily,
    pub variant: ShellSortVariant,
    pub width: NumericWidth,
}

impl ShellSortConfig {
    pub fn new(family: GapFamily, variant: ShellSortVariant) -> Self {
        Self {
            family,
            variant,
            width: NumericWidth::default(),
        }
    }

    pub fn with_width(mut self, width: NumericWidth) -> Self {
        self.width = width;
        self
    }

    pub fn sort<E: Ord>(&self, data: &mut [E]) {
        self.sort_by(data, E::lt);
    }

    pub fn sort_by<E, F>(&self, data: &mut [E], is_less: F)
    where
        F: FnMut(&E, &E) -> bool,
    {
        let Self {
            family,
            variant,
            width,
        } = *self;
        match width {
            NumericWidth::I8 => sort_with_table(variant, data, &family.table::<i8>(), is_less),
            NumericWidth::I16 => sort_with_table(variant, data, &family.table::<i16>(), is_less),
            NumericWidth::I32 => sort_with_table(variant, data, &family.table::<i32>(), is_less),
            NumericWidth::I64 => sort_with_table(variant, data, &family.table::<i64>(), is_less),
            NumericWidth::I128 => {
                sort_with_table(variant, data, &family.table::<i128>(), is_less);
            }
            NumericWidth::Isize => {
                sort_with_table(variant, data, &family.table::<isize>(), is_less);
            }
        }
    }
}

impl fmt::Display for ShellSortConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}",
            family_name(self.family),
            variant_name(self.variant),
            width_name(self.width)
        )
    }
}

impl FromStr for ShellSortConfig {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('/');
        let mut config = Self::default();
        match parts.next() {
            Some(family) if !family.trim().is_empty() => config.family = family.parse()?,
            _ => {
                return Err(ParseError::Malformed {
                    input: s.to_owned(),
                });
            }
        }
        if let Some(variant) = parts.next() {
            config.variant = variant.parse()?;
        }
        if let Some(width) = parts.next() {
            config.width = width.parse()?;
        }
        if parts.next().is_some() {
            return Err(ParseError::Malformed {
                input: s.to_owned(),
            });
        }
        Ok(config)
    }
}
