use crate::producer::Producer;

/// A lazy, single-pass sequence of `T`.
///
/// An `Enumerable` holds exactly one producer. Chainable operators (see
/// [`select`](Enumerable::select), [`filter`](Enumerable::filter),
/// [`join`](Enumerable::join), ...) consume the handle and return a new one wrapping
/// a composed producer; nothing is pulled until a terminal operator such as
/// [`to_list`](Enumerable::to_list) or [`count`](Enumerable::count) runs.
///
/// Every operator takes `self` by value, so a handle that has been chained or
/// consumed cannot be used again.
///
/// The lifetime `'a` bounds whatever the producer borrows: a slice it iterates,
/// or state captured by a selector closure.
#[must_use = "an Enumerable does nothing until a terminal operator is called"]
pub struct Enumerable<'a, T> {
    pub(crate) source: Producer<'a, T>,
}

impl<'a, T: 'a> Enumerable<'a, T> {
    /// Wrap any iterable source without pulling from it.
    ///
    /// ```
    /// use ironseq::Enumerable;
    ///
    /// let naturals = Enumerable::new(1u64..);
    /// assert_eq!(naturals.take(3)?.to_list(), vec![1, 2, 3]);
    /// # Ok::<(), ironseq::QueryError>(())
    /// ```
    pub fn new<I>(source: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        Self {
            source: Box::new(source.into_iter()),
        }
    }

    /// Compose a new handle from this one's producer.
    pub(crate) fn chain<U, I, F>(self, f: F) -> Enumerable<'a, U>
    where
        U: 'a,
        I: Iterator<Item = U> + 'a,
        F: FnOnce(Producer<'a, T>) -> I,
    {
        Enumerable {
            source: Box::new(f(self.source)),
        }
    }
}

impl<'a, T: 'a> IntoIterator for Enumerable<'a, T> {
    type Item = T;
    type IntoIter = Producer<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.source
    }
}

/// Eager, finite-only conversion.
///
/// `FromIterator` cannot tie the incoming iterator to `'a`, so the elements are
/// collected into a `Vec` before the handle exists. Every element is pulled at
/// `collect()` time and an infinite iterator never returns. Use
/// [`Enumerable::new`] or [`from_iter`](crate::from_iter) to wrap a source
/// lazily.
impl<'a, T: 'a> FromIterator<T> for Enumerable<'a, T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<'a, T: 'a> From<Vec<T>> for Enumerable<'a, T> {
    fn from(data: Vec<T>) -> Self {
        Self::new(data)
    }
}

impl<T> std::fmt::Debug for Enumerable<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (lower, upper) = self.source.size_hint();
        f.debug_struct("Enumerable")
            .field("element", &std::any::type_name::<T>())
            .field("size_hint", &(lower, upper))
            .finish()
    }
}
