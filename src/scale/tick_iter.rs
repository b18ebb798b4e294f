use super::Tick;

/// Iterator over ticks produced by a scale.
pub struct TickIter<K> {
    inner: Box<dyn Iterator<Item = Tick<K>> + 'static>,
}

impl<K: 'static> TickIter<K> {
    pub fn new<I>(iter: I) -> Self
    where
        I: Iterator<Item = Tick<K>> + 'static,
    {
        Self {
            inner: Box::new(iter),
        }
    }

    /// Creates a `TickIter` from a vector of ticks.
    ///
    /// This is useful for providing a custom list of tick marks to a scale.
    ///
    /// # Examples
    ///
    /// ```
    /// use aksel_dimension::scale::{Tick, TickIter};
    ///
    /// let ticks = vec![
    ///     Tick { value: "low", level: 0 },
    ///     Tick { value: "high", level: 0 },
    /// ];
    ///
    /// let iter = TickIter::from_vec(ticks);
    /// assert_eq!(iter.count(), 2);
    /// ```
    pub fn from_vec(vec: Vec<Tick<K>>) -> Self {
        Self::new(vec.into_iter())
    }

    /// Creates an empty `TickIter` that produces no ticks.
    ///
    /// # Examples
    ///
    /// ```
    /// use aksel_dimension::scale::TickIter;
    ///
    /// let iter = TickIter::<String>::empty();
    /// assert_eq!(iter.count(), 0);
    /// ```
    pub fn empty() -> Self {
        Self::new(std::iter::empty())
    }

    /// One major tick per category, in the given order.
    pub(crate) fn from_categories<I>(categories: I) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        let ticks: Vec<_> = categories
            .into_iter()
            .map(|value| Tick { value, level: 0 })
            .collect();
        Self::from_vec(ticks)
    }
}

impl<K> Iterator for TickIter<K> {
    type Item = Tick<K>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}
