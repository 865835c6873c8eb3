pub(crate) mod aggregate;
pub(crate) mod common;
pub(crate) mod elements;
pub(crate) mod grouping;
pub(crate) mod joins;
pub(crate) mod sources;
pub(crate) mod try_process;

// Only re-export files with top-level functions
pub use sources::*;
