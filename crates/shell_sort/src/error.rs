use thiserror::Error;

/// Failure to turn a textual configuration into a [`crate::ShellSortConfig`].
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ParseError {
    #[error("unknown gap sequence family: {name}")]
    UnknownFamily { name: String },

    #[error("unknown shell sort variant: {name}")]
    UnknownVariant { name: String },

    #[error("unknown numeric width: {name}")]
    UnknownWidth { name: String },

    #[error("malformed shell sort config `{input}`: expected family[/variant[/width]]")]
    Malformed { input: String },
}

/// A caller-supplied gap table that the engine cannot consume.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum GapTableError {
    #[error("gap table is empty")]
    Empty,

    #[error("gap at index {index} is not positive")]
    NonPositive { index: usize },

    #[error("gap at index {index} does not strictly decrease")]
    NotDecreasing { index: usize },
}
