//! Pre-built test datasets and fixtures for common testing scenarios.

use crate::Enumerable;
use std::cell::Cell;
use std::rc::Rc;

/// Counts how many elements have been pulled out of wrapped sources.
///
/// Use it to check laziness: building a chain over a counted source must leave
/// the count at zero, and `take(k)` must pull exactly `k` elements.
///
/// # Example
///
/// ```
/// use ironseq::testing::PullCounter;
///
/// # fn main() -> ironseq::Result<()> {
/// let counter = PullCounter::new();
/// let chain = counter.wrap(1u64..).select(|x| x * 10).take(3)?;
/// assert_eq!(counter.pulls(), 0);
///
/// assert_eq!(chain.to_list(), vec![10, 20, 30]);
/// assert_eq!(counter.pulls(), 3);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default)]
pub struct PullCounter {
    pulls: Rc<Cell<usize>>,
}

impl PullCounter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Elements pulled so far from every source wrapped by this counter.
    #[must_use]
    pub fn pulls(&self) -> usize {
        self.pulls.get()
    }

    /// Wrap `source` so each element it yields bumps the counter.
    pub fn wrap<'a, I>(&self, source: I) -> Enumerable<'a, I::Item>
    where
        I: IntoIterator,
        I::IntoIter: 'a,
        I::Item: 'a,
    {
        let pulls = Rc::clone(&self.pulls);
        Enumerable::new(source.into_iter().inspect(move |_| pulls.set(pulls.get() + 1)))
    }
}

/// Sample customer record for join and grouping tests.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SampleCustomer {
    pub id: u32,
    pub name: String,
    pub region: String,
}

/// Sample order record; `customer_id` refers to [`SampleCustomer::id`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SampleOrder {
    pub id: u32,
    pub customer_id: u32,
    pub amount: u64,
}

/// Four customers across two regions. Customer 4 has no orders.
#[must_use]
pub fn sample_customers() -> Vec<SampleCustomer> {
    [(1, "Alice", "east"), (2, "Bob", "west"), (3, "Carol", "east"), (4, "Dave", "west")]
        .into_iter()
        .map(|(id, name, region)| SampleCustomer {
            id,
            name: name.to_string(),
            region: region.to_string(),
        })
        .collect()
}

/// Five orders. Order 104 references customer 9, who does not exist.
#[must_use]
pub fn sample_orders() -> Vec<SampleOrder> {
    [(100, 1, 250), (101, 2, 75), (102, 1, 40), (103, 3, 310), (104, 9, 15)]
        .into_iter()
        .map(|(id, customer_id, amount)| SampleOrder {
            id,
            customer_id,
            amount,
        })
        .collect()
}
