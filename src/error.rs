use thiserror::Error;

/// Errors reported by the validating dimension operations.
///
/// The regular configuration methods never fail; these are only produced by
/// strict variants such as
/// [`OrdinalDimension::try_set_domain`](crate::OrdinalDimension::try_set_domain).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DimensionError {
    #[error("ordinal domain must contain at least one category")]
    EmptyDomain,

    #[error("category {category} appears more than once (repeated at index {index})")]
    DuplicateCategory { category: String, index: usize },
}
