use num_traits::Float;

/// Return `(min, max)` for two owned values.
pub fn sorted_pair<T: PartialOrd>(a: T, b: T) -> (T, T) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Halfway point between `a` and `b`.
pub fn midpoint<T: Float>(a: T, b: T) -> T {
    let two = T::one() + T::one();
    (a + b) / two
}
