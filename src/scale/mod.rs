//! Scales mapping category values to positions along an output range.
//!
//! The only scale in this crate is [`Point`], an ordinal scale that places
//! each category of its domain at an evenly spaced point of a numeric range.
//! It implements [`OrdinalScale`], the small surface a
//! [`Dimension`](crate::Dimension) needs from its underlying scale.

pub mod point;
mod tick_iter;
pub mod util;

pub use point::Point;
pub use tick_iter::TickIter;

use indexmap::IndexSet;
use num_traits::Float;

/// A tick mark emitted by a scale.
///
/// For ordinal scales `value` is the category the tick belongs to; the tick
/// position is obtained by mapping it through the scale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tick<K> {
    pub value: K,
    /// 0 for major ticks, higher for minor ones.
    pub level: u8,
}

/// An ordinal scale: ordered categories mapped onto points of a numeric range.
///
/// Implementors keep the category order exactly as set; the order determines
/// which point each category is assigned.
pub trait OrdinalScale {
    /// Category type.
    type Domain;
    /// Output position type.
    type Output: Float;

    /// Categories in position order.
    fn domain(&self) -> &IndexSet<Self::Domain>;

    /// Replace the domain. Repeated categories keep their first position.
    fn set_domain<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = Self::Domain>;

    /// Output bounds as set, `(start, end)`. `start` may exceed `end`.
    fn range(&self) -> (&Self::Output, &Self::Output);

    /// Replace the output range and point padding.
    ///
    /// `padding` is expressed in steps and split evenly across both ends.
    fn set_range_points(&mut self, start: Self::Output, end: Self::Output, padding: Self::Output);

    /// Position of `value`, or `None` if it is not part of the domain.
    fn map_opt(&self, value: &Self::Domain) -> Option<Self::Output>;

    /// Position of `value`; categories outside the domain map to NaN.
    fn map(&self, value: &Self::Domain) -> Self::Output {
        self.map_opt(value).unwrap_or_else(Self::Output::nan)
    }

    /// Distance between two neighbouring points.
    fn step(&self) -> Self::Output;

    /// Returns a tick iterator for this scale.
    fn tick_iter(&self) -> TickIter<Self::Domain>;

    /// Collects all ticks into a vector.
    fn ticks(&self) -> Vec<Tick<Self::Domain>> {
        self.tick_iter().collect()
    }

    /// Whether `value` is one of the domain's categories.
    fn is_valid_domain_value(&self, value: &Self::Domain) -> bool {
        self.map_opt(value).is_some()
    }
}
