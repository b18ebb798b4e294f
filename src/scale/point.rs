use std::fmt;
use std::hash::Hash;

use indexmap::{Equivalent, IndexSet};
use num_traits::Float;

use super::{OrdinalScale, Tick, TickIter, util};

type TickGenerator<K, N> = Box<dyn Fn(&Point<K, N>) -> TickIter<K>>;

/// Point scale: ordered categories placed at evenly spaced points of a numeric range.
///
/// `Point` distributes the categories of its domain across `[start, end]`.
/// Neighbouring categories are one [`step`](OrdinalScale::step) apart, and a
/// configurable amount of padding (measured in steps) is split evenly between
/// the two ends so the outermost categories need not sit on the range edges.
///
/// # Type Parameters
///
/// - `K`: Category type (typically `String` or `&'static str`)
/// - `N`: Output type (typically `f32` or `f64`, usually pixel positions)
///
/// # Layout
///
/// For `n` categories and padding `p`:
///
/// - `n >= 2`: `step = (end - start) / (n - 1 + p)` and category `i` sits at
///   `start + step * p / 2 + step * i`
/// - `n == 1`: the category sits at the midpoint of the range
/// - `n == 0`: nothing is mapped
///
/// # Features
///
/// - **Order preserving**: categories keep the order they were given in
/// - **Duplicate collapsing**: a repeated category keeps its first position
/// - **Inverted ranges**: `start > end` lays categories out in decreasing order
/// - **No implicit growth**: mapping an unknown category yields `None` and
///   does not add it to the domain
///
/// # Examples
///
/// ## Basic Usage
///
/// ```rust
/// use aksel_dimension::{OrdinalScale, scale::Point};
///
/// let scale = Point::<&str, f64>::new(0.0, 100.0, 1.0).with_domain(["a", "b", "c", "d"]);
///
/// assert_eq!(scale.step(), 25.0);
/// assert_eq!(scale.position("a"), Some(12.5));
/// assert_eq!(scale.position("b"), Some(37.5));
/// assert_eq!(scale.position("d"), Some(87.5));
/// assert_eq!(scale.position("z"), None);
/// ```
///
/// ## Inverted Range
///
/// ```rust
/// use aksel_dimension::scale::Point;
///
/// // Top-to-bottom layout for a vertical axis
/// let scale = Point::<&str, f64>::new(100.0, 0.0, 1.0).with_domain(["low", "high"]);
///
/// assert_eq!(scale.position("low"), Some(75.0));
/// assert_eq!(scale.position("high"), Some(25.0));
/// ```
///
/// ## Custom Tick Generation
///
/// ```rust
/// use aksel_dimension::{OrdinalScale, scale::{Point, Tick}};
///
/// // Only label every other category
/// let scale = Point::<&str, f64>::new_with_tick_fn(0.0, 100.0, 1.0, |scale| {
///     scale
///         .domain()
///         .iter()
///         .step_by(2)
///         .map(|value| Tick { value: *value, level: 0 })
///         .collect()
/// })
/// .with_domain(["a", "b", "c"]);
///
/// assert_eq!(scale.ticks().len(), 2);
/// ```
pub struct Point<K, N = f64>
where
    N: Float,
{
    domain: IndexSet<K>,
    start: N,
    end: N,
    padding: N,
    step: N,
    positions: Vec<N>,
    tick_generator: TickGenerator<K, N>,
}

fn default_tick_generator<K, N>(scale: &Point<K, N>) -> TickIter<K>
where
    K: Clone + 'static,
    N: Float,
{
    TickIter::from_categories(scale.domain.iter().cloned())
}

impl<K, N> Point<K, N>
where
    K: Hash + Eq + Clone + 'static,
    N: Float + 'static,
{
    /// Creates a point scale with an empty domain over `[start, end]`.
    ///
    /// `padding` is measured in steps; `1.0` leaves half a step free at each end.
    ///
    /// # Examples
    ///
    /// ```
    /// use aksel_dimension::{OrdinalScale, scale::Point};
    ///
    /// let scale = Point::<String, f64>::new(0.0, 1.0, 1.0);
    /// assert!(scale.domain().is_empty());
    /// assert_eq!(scale.range(), (&0.0, &1.0));
    /// ```
    pub fn new(start: N, end: N, padding: N) -> Self {
        Self::new_with_tick_generator(start, end, padding, default_tick_generator)
    }

    /// Creates a point scale with a custom tick generator.
    ///
    /// The tick generator receives the scale and returns a [`TickIter`]
    /// over the categories that should be labelled.
    ///
    /// # Examples
    ///
    /// ```
    /// use aksel_dimension::{OrdinalScale, scale::{Point, TickIter}};
    ///
    /// let scale = Point::<&str, f64>::new_with_tick_generator(0.0, 100.0, 1.0, |_scale| {
    ///     TickIter::empty()
    /// })
    /// .with_domain(["a", "b"]);
    /// assert!(scale.ticks().is_empty());
    /// ```
    pub fn new_with_tick_generator<F>(start: N, end: N, padding: N, tick_generator: F) -> Self
    where
        F: Fn(&Self) -> TickIter<K> + 'static,
    {
        Self {
            domain: IndexSet::new(),
            start,
            end,
            padding,
            step: N::zero(),
            positions: Vec::new(),
            tick_generator: Box::new(tick_generator),
        }
    }

    /// Creates a point scale with a custom tick function.
    ///
    /// Convenience wrapper around [`Point::new_with_tick_generator`] for
    /// functions that return a plain `Vec<Tick<K>>`.
    pub fn new_with_tick_fn<F>(start: N, end: N, padding: N, tick_fn: F) -> Self
    where
        F: Fn(&Self) -> Vec<Tick<K>> + 'static,
    {
        Self::new_with_tick_generator(start, end, padding, move |scale| {
            TickIter::from_vec(tick_fn(scale))
        })
    }

    /// Builder form of [`OrdinalScale::set_domain`].
    pub fn with_domain<I>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        self.set_domain(values);
        self
    }

    /// Position of `value`, or `None` if it is not part of the domain.
    ///
    /// Accepts borrowed forms of the category, e.g. `&str` for `String` domains.
    pub fn position<Q>(&self, value: &Q) -> Option<N>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        let index = self.domain.get_index_of(value)?;
        self.positions.get(index).copied()
    }

    /// Index of `value` within the domain.
    pub fn index_of<Q>(&self, value: &Q) -> Option<usize>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.domain.get_index_of(value)
    }

    /// Positions of all categories, in domain order.
    pub fn positions(&self) -> &[N] {
        &self.positions
    }

    /// Point padding, in steps.
    pub fn padding(&self) -> N {
        self.padding
    }

    /// Output bounds ordered as `(min, max)`, regardless of range direction.
    pub fn extent(&self) -> (N, N) {
        util::sorted_pair(self.start, self.end)
    }

    /// The category whose point lies closest to `position`.
    ///
    /// Useful for hit-testing a pointer against an ordinal axis. Returns
    /// `None` for an empty domain.
    ///
    /// # Examples
    ///
    /// ```
    /// use aksel_dimension::scale::Point;
    ///
    /// let scale = Point::<&str, f64>::new(0.0, 100.0, 1.0).with_domain(["a", "b", "c", "d"]);
    ///
    /// assert_eq!(scale.nearest(0.0), Some(&"a"));
    /// assert_eq!(scale.nearest(40.0), Some(&"b"));
    /// assert_eq!(scale.nearest(250.0), Some(&"d"));
    /// ```
    pub fn nearest(&self, position: N) -> Option<&K> {
        let (index, _) = self
            .positions
            .iter()
            .map(|p| (*p - position).abs())
            .enumerate()
            .min_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))?;
        self.domain.get_index(index)
    }

    /// Returns `(first_position, step)` for the current domain and range.
    fn layout(&self) -> Option<(N, N)> {
        let count = self.domain.len();
        if count < 2 {
            return Some((util::midpoint(self.start, self.end), N::zero()));
        }

        let two = N::one() + N::one();
        let intervals = N::from(count - 1)? + self.padding;
        let step = (self.end - self.start) / intervals;
        Some((self.start + step * self.padding / two, step))
    }

    /// Recompute the cached positions after the domain or range changed.
    fn rescale(&mut self) {
        let Some((first, step)) = self.layout() else {
            self.step = N::zero();
            self.positions.clear();
            return;
        };

        self.step = step;
        // Computed from the index to avoid accumulating rounding errors.
        self.positions = (0..self.domain.len())
            .map(|i| N::from(i).map(|i| first + step * i))
            .collect::<Option<Vec<_>>>()
            .unwrap_or_default();
    }
}

impl<K, N> OrdinalScale for Point<K, N>
where
    K: Hash + Eq + Clone + 'static,
    N: Float + 'static,
{
    type Domain = K;
    type Output = N;

    fn domain(&self) -> &IndexSet<K> {
        &self.domain
    }

    fn set_domain<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = K>,
    {
        let mut domain = IndexSet::new();
        let mut repeated = 0usize;
        for value in values {
            if !domain.insert(value) {
                repeated += 1;
            }
        }
        if repeated > 0 {
            tracing::debug!(repeated, "collapsed repeated categories in ordinal domain");
        }

        self.domain = domain;
        self.rescale();
    }

    fn range(&self) -> (&N, &N) {
        (&self.start, &self.end)
    }

    fn set_range_points(&mut self, start: N, end: N, padding: N) {
        self.start = start;
        self.end = end;
        self.padding = padding;
        self.rescale();
    }

    fn map_opt(&self, value: &K) -> Option<N> {
        self.position(value)
    }

    fn step(&self) -> N {
        self.step
    }

    fn tick_iter(&self) -> TickIter<K> {
        (self.tick_generator)(self)
    }
}

impl<K, N> fmt::Debug for Point<K, N>
where
    K: fmt::Debug,
    N: Float + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Point")
            .field("domain", &self.domain)
            .field("start", &self.start)
            .field("end", &self.end)
            .field("padding", &self.padding)
            .field("step", &self.step)
            .field("positions", &self.positions)
            .finish_non_exhaustive()
    }
}
