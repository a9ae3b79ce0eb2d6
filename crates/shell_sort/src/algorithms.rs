pub(crate) mod common;
pub(crate) mod hybrid;
pub(crate) mod shell_sort;
pub(crate) mod two_step;
