//! Axis collaborators configured by dimensions.
//!
//! Rendering is left to the plotting layer. A dimension only needs to push
//! tick sizing into whatever axis object the renderer uses, which is the
//! [`Axis`] trait. [`TickSize`] is a plain implementation that just holds the
//! values, handy for renderers that read settings back later.

use num_traits::Float;

/// Something that draws ticks and accepts tick sizing.
///
/// Sizes follow the usual axis convention: positive values extend outward
/// from the axis line, negative values extend across the plot area. A size
/// equal to minus the plot extent therefore turns ticks into gridlines.
pub trait Axis<S> {
    /// Set the length of inner ticks and of the two outer (end) ticks.
    fn set_tick_size(&mut self, inner: S, outer: S);
}

/// Inner and outer tick lengths of an axis.
///
/// # Examples
///
/// ```
/// use aksel_dimension::{Axis, TickSize};
///
/// let mut ticks = TickSize::<f64>::default();
/// assert_eq!(ticks.inner, 6.0);
/// assert!(!ticks.is_gridline());
///
/// ticks.set_tick_size(-400.0, -400.0);
/// assert!(ticks.is_gridline());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSize<S = f64> {
    /// Length of ticks at each category or tick value.
    pub inner: S,
    /// Length of the ticks at both ends of the axis line.
    pub outer: S,
}

impl<S: Float> TickSize<S> {
    /// Creates tick sizing with separate inner and outer lengths.
    pub const fn new(inner: S, outer: S) -> Self {
        Self { inner, outer }
    }

    /// Same length for inner and outer ticks.
    pub const fn uniform(size: S) -> Self {
        Self::new(size, size)
    }

    /// Whether inner ticks reach across the plot area.
    pub fn is_gridline(&self) -> bool {
        self.inner < S::zero()
    }
}

impl<S: Float> Default for TickSize<S> {
    fn default() -> Self {
        let six = S::from(6.0).unwrap_or_else(S::one);
        Self::uniform(six)
    }
}

impl<S: Copy> Axis<S> for TickSize<S> {
    fn set_tick_size(&mut self, inner: S, outer: S) {
        self.inner = inner;
        self.outer = outer;
    }
}

impl<S, A> Axis<S> for &mut A
where
    A: Axis<S> + ?Sized,
{
    fn set_tick_size(&mut self, inner: S, outer: S) {
        (**self).set_tick_size(inner, outer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_outward() {
        let ticks = TickSize::<f32>::default();

        assert_eq!(ticks, TickSize::uniform(6.0));
        assert!(!ticks.is_gridline());
    }

    #[test]
    fn set_tick_size_overwrites_both() {
        let mut ticks = TickSize::new(1.0, 2.0);
        ticks.set_tick_size(-10.0, -20.0);

        assert_eq!(ticks.inner, -10.0);
        assert_eq!(ticks.outer, -20.0);
    }

    #[test]
    fn forwards_through_mutable_reference() {
        fn gridlines<A: Axis<f64>>(mut axis: A) {
            axis.set_tick_size(-3.0, -3.0);
        }

        let mut ticks = TickSize::<f64>::default();
        gridlines(&mut ticks);

        assert_eq!(ticks, TickSize::uniform(-3.0));
    }
}
