//! Plot dimensions: one axis of a multi-dimensional plot.
//!
//! A dimension turns data values into positions along an output range (usually
//! pixels) and knows how to set up the axis that renders it. Plotting code
//! works against the [`Dimension`] trait and only branches on
//! [`Dimension::is_ordinal`] where categorical and continuous axes genuinely
//! differ, such as drawing one gridline per category.
//!
//! # Examples
//!
//! ```rust
//! use aksel_dimension::{Dimension, OrdinalDimension, TickSize};
//!
//! let mut dimension = OrdinalDimension::<String, f64>::new();
//! dimension.set_domain(["low", "mid", "high"].map(String::from));
//! dimension.set_range(0.0, 120.0);
//!
//! // step = 120 / 3, with half a step free at either end
//! assert_eq!(dimension.position("low"), Some(20.0));
//! assert_eq!(dimension.position("mid"), Some(60.0));
//! assert_eq!(dimension.position("high"), Some(100.0));
//!
//! // Ticks become gridlines across the opposing 300px dimension
//! let mut axis = TickSize::default();
//! assert!(dimension.format(&mut axis, 300.0).is_ordinal());
//! assert_eq!(axis, TickSize::uniform(-300.0));
//! ```

use std::fmt;
use std::hash::Hash;

use indexmap::{Equivalent, IndexSet};
use num_traits::Float;

use crate::axis::Axis;
use crate::error::DimensionError;
use crate::scale::{OrdinalScale, Point};

/// Placeholder category of a freshly created ordinal dimension.
pub const UNKNOWN_CATEGORY: &str = "unknown";

/// Common interface of plot dimensions.
pub trait Dimension {
    /// Data value type.
    type Value;
    /// Output position type.
    type Position: Float;
    /// Underlying scale, exposed through [`Dimension::scale`].
    type Scale;

    /// Position of `value`, or `None` if the dimension cannot place it.
    fn map(&self, value: &Self::Value) -> Option<Self::Position>;

    /// Replace the domain.
    fn set_domain<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = Self::Value>;

    /// Replace the output range. `min > max` gives an inverted axis.
    fn set_range(&mut self, min: Self::Position, max: Self::Position);

    /// The underlying scale, for collaborators that need more than this trait offers.
    fn scale(&self) -> &Self::Scale;

    /// Configure `axis` for this dimension.
    ///
    /// `max_length` is the extent of the opposing dimension. Returns `self`
    /// so calls can be chained.
    fn format<A>(&mut self, axis: &mut A, max_length: Self::Position) -> &mut Self
    where
        A: Axis<Self::Position> + ?Sized;

    /// Whether the dimension is categorical.
    fn is_ordinal(&self) -> bool;
}

/// A categorical dimension backed by a [`Point`] scale.
///
/// Categories are spread evenly across the range with one step of padding,
/// split between both ends. A new dimension has the single category
/// [`UNKNOWN_CATEGORY`] over the range `[0, 1]`.
pub struct OrdinalDimension<K = String, N = f64>
where
    N: Float,
{
    scale: Point<K, N>,
}

impl<K, N> OrdinalDimension<K, N>
where
    K: Hash + Eq + Clone + From<&'static str> + 'static,
    N: Float + 'static,
{
    /// Creates a dimension with domain `["unknown"]` and range `[0, 1]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use aksel_dimension::{OrdinalDimension, UNKNOWN_CATEGORY};
    ///
    /// let dimension = OrdinalDimension::<String, f64>::new();
    /// assert_eq!(dimension.range(), (0.0, 1.0));
    /// assert_eq!(dimension.position(UNKNOWN_CATEGORY), Some(0.5));
    /// ```
    pub fn new() -> Self {
        let scale =
            Point::new(N::zero(), N::one(), N::one()).with_domain([K::from(UNKNOWN_CATEGORY)]);
        Self { scale }
    }
}

impl<K, N> Default for OrdinalDimension<K, N>
where
    K: Hash + Eq + Clone + From<&'static str> + 'static,
    N: Float + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, N> OrdinalDimension<K, N>
where
    K: Hash + Eq + Clone + 'static,
    N: Float + 'static,
{
    /// Builder form of [`Dimension::set_domain`].
    pub fn with_domain<I>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        self.set_domain(values);
        self
    }

    /// Builder form of [`Dimension::set_range`].
    pub fn with_range(mut self, min: N, max: N) -> Self {
        self.set_range(min, max);
        self
    }

    /// Position of `value`, accepting borrowed forms of the category.
    pub fn position<Q>(&self, value: &Q) -> Option<N>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.scale.position(value)
    }

    /// Current categories, in position order.
    pub fn domain(&self) -> &IndexSet<K> {
        self.scale.domain()
    }

    /// Current range as `(min, max)`, exactly as set.
    pub fn range(&self) -> (N, N) {
        let (min, max) = self.scale.range();
        (*min, *max)
    }

    /// Strict form of [`Dimension::set_domain`].
    ///
    /// Rejects an empty sequence and repeated categories. On error the
    /// dimension keeps its previous domain.
    ///
    /// # Examples
    ///
    /// ```
    /// use aksel_dimension::{DimensionError, OrdinalDimension};
    ///
    /// let mut dimension = OrdinalDimension::<String, f64>::new();
    /// let err = dimension
    ///     .try_set_domain(["a", "b", "a"].map(String::from))
    ///     .unwrap_err();
    ///
    /// assert_eq!(
    ///     err,
    ///     DimensionError::DuplicateCategory { category: "\"a\"".into(), index: 2 }
    /// );
    /// assert_eq!(dimension.domain().len(), 1);
    /// ```
    pub fn try_set_domain<I>(&mut self, values: I) -> Result<(), DimensionError>
    where
        I: IntoIterator<Item = K>,
        K: fmt::Debug,
    {
        let mut domain = IndexSet::new();
        for (index, value) in values.into_iter().enumerate() {
            let (existing, inserted) = domain.insert_full(value);
            if !inserted {
                return Err(DimensionError::DuplicateCategory {
                    category: format!("{:?}", domain[existing]),
                    index,
                });
            }
        }
        if domain.is_empty() {
            return Err(DimensionError::EmptyDomain);
        }

        self.set_domain(domain);
        Ok(())
    }
}

impl<K, N> Dimension for OrdinalDimension<K, N>
where
    K: Hash + Eq + Clone + 'static,
    N: Float + 'static,
{
    type Value = K;
    type Position = N;
    type Scale = Point<K, N>;

    fn map(&self, value: &K) -> Option<N> {
        self.scale.map_opt(value)
    }

    fn set_domain<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = K>,
    {
        self.scale.set_domain(values);
        tracing::trace!(categories = self.scale.domain().len(), "ordinal domain replaced");
    }

    fn set_range(&mut self, min: N, max: N) {
        self.scale.set_range_points(min, max, N::one());
        tracing::trace!(min = ?min.to_f64(), max = ?max.to_f64(), "ordinal range replaced");
    }

    fn scale(&self) -> &Point<K, N> {
        &self.scale
    }

    fn format<A>(&mut self, axis: &mut A, max_length: N) -> &mut Self
    where
        A: Axis<N> + ?Sized,
    {
        axis.set_tick_size(-max_length, -max_length);
        self
    }

    fn is_ordinal(&self) -> bool {
        true
    }
}

impl<K, N> fmt::Debug for OrdinalDimension<K, N>
where
    K: fmt::Debug,
    N: Float + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrdinalDimension")
            .field("scale", &self.scale)
            .finish()
    }
}
