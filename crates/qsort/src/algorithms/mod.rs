pub(crate) mod common;
pub(crate) mod hybrid_quick_sort;
pub(crate) mod partition;
pub(crate) mod stack;
pub(crate) mod swap;
