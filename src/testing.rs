//! Testing utilities for ironseq queries.
//!
//! This module provides a testing facility for end-users to write idiomatic Rust
//! tests for their sequence queries. It includes:
//!
//! - **Assertions**: Compare query outputs with expected results and error kinds
//! - **Fixtures**: A pull counter for verifying laziness, plus sample records
//! - **Debug utilities**: Inspect elements as they are pulled through a chain
//!
//! # Quick Start
//!
//! ```
//! use ironseq::*;
//! use ironseq::testing::*;
//!
//! # fn main() -> Result<()> {
//! let counter = PullCounter::new();
//! let doubled = counter.wrap(vec![1, 2, 3]).select(|x| x * 2);
//! assert_eq!(counter.pulls(), 0);
//!
//! assert_yields(doubled, &[2, 4, 6]);
//! assert_eq!(counter.pulls(), 3);
//! # Ok(())
//! # }
//! ```
//!
//! # Assertion Functions
//!
//! - [`assert_yields`]: Exact order-dependent comparison
//! - [`assert_yields_unordered`]: Order-independent comparison
//! - [`assert_error_kind`]: Check the [`QueryError`](crate::QueryError) kind of a failure
//! - [`assert_groups_equal`]: Compare a `group_by` result key by key
//! - [`assert_all`]: Verify all elements match a predicate

pub mod assertions;
pub mod debug;
pub mod fixtures;

// Re-export commonly used items
pub use assertions::*;
pub use debug::*;
pub use fixtures::*;
