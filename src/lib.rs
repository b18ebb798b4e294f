//! Ordinal plot dimensions
//!
//! `aksel-dimension` provides categorical (ordinal) dimensions for
//! multi-dimensional plots such as scatter plots or parallel coordinates.
//! A dimension maps discrete category labels onto evenly spaced positions of
//! a numeric output range and configures the axis that renders it.
//!
//! # Core Concepts
//!
//! ## Point Scales
//!
//! [`scale::Point`] is the ordinal scale underneath every dimension. It keeps
//! the categories in the order they were given and places them at evenly
//! spaced points, with padding (measured in steps) split between both ends of
//! the range. Inverted ranges (`start > end`) are supported.
//!
//! ## Dimensions
//!
//! [`Dimension`] is the interface a plotting layer works with: map, set the
//! domain and range, reach the underlying scale, format an axis and ask
//! whether the dimension is ordinal. [`OrdinalDimension`] is the categorical
//! implementation.
//!
//! ## Axes
//!
//! Rendering is not part of this crate. Dimensions configure any type that
//! implements [`Axis`]; [`TickSize`] is a plain settings holder.
//!
//! # Examples
//!
//! ## Placing Categories
//!
//! ```rust
//! use aksel_dimension::{Dimension, OrdinalDimension};
//!
//! let mut dimension = OrdinalDimension::<String, f64>::new();
//! dimension.set_domain(["a", "b", "c", "d"].map(String::from));
//! dimension.set_range(0.0, 400.0);
//!
//! // step = 400 / 4, half a step of padding at each end
//! assert_eq!(dimension.position("a"), Some(50.0));
//! assert_eq!(dimension.position("d"), Some(350.0));
//! assert_eq!(dimension.position("e"), None);
//! ```
//!
//! ## Gridlines
//!
//! ```rust
//! use aksel_dimension::{Dimension, OrdinalDimension, TickSize};
//!
//! let mut x = OrdinalDimension::<String, f64>::new();
//! let mut axis = TickSize::default();
//!
//! // Ticks span the 300px height of the plot
//! x.format(&mut axis, 300.0);
//! assert!(axis.is_gridline());
//! ```
//!
//! ## Ticks
//!
//! ```rust
//! use aksel_dimension::{Dimension, OrdinalDimension, OrdinalScale};
//!
//! let dimension = OrdinalDimension::<String, f64>::new()
//!     .with_domain(["low", "high"].map(String::from))
//!     .with_range(0.0, 100.0);
//!
//! for tick in dimension.scale().ticks() {
//!     let position = dimension.scale().map(&tick.value);
//!     println!("{} at {}", tick.value, position);
//! }
//! ```

pub mod axis;
pub mod dimension;
pub mod error;
pub mod scale;

pub use axis::{Axis, TickSize};
pub use dimension::{Dimension, OrdinalDimension, UNKNOWN_CATEGORY};
pub use error::DimensionError;
pub use num_traits::Float;
pub use scale::{OrdinalScale, Tick, TickIter};
