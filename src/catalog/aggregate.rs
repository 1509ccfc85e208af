//! Aggregates
//!
//! Scalar summaries over a collection (or a filtered view of one) for stat
//! cards and progress widgets.
//!
//! Averaging an empty collection is always `DomainError::DivisionByZero`;
//! callers decide how to render the absence of a value.

use std::iter::Sum;

use crate::domain::{DomainError, DomainResult};

/// Number of items satisfying `predicate`
pub fn count<T, P>(items: &[T], predicate: P) -> usize
where
    P: Fn(&T) -> bool,
{
    items.iter().filter(|item| predicate(item)).count()
}

/// Sum of a numeric field
pub fn sum<T, N, F>(items: &[T], selector: F) -> N
where
    N: Sum<N>,
    F: Fn(&T) -> N,
{
    items.iter().map(selector).sum()
}

/// Arithmetic mean of a numeric field
pub fn average<T, F>(items: &[T], selector: F) -> DomainResult<f64>
where
    F: Fn(&T) -> f64,
{
    if items.is_empty() {
        return Err(DomainError::DivisionByZero(
            "average of an empty collection".to_string(),
        ));
    }
    let total: f64 = sum(items, selector);
    Ok(total / items.len() as f64)
}

/// Round half-up (toward positive infinity) to one decimal place
pub fn round_to_one_decimal(x: f64) -> f64 {
    (x * 10.0 + 0.5).floor() / 10.0
}

/// `round(100 * numerator / denominator)`, 0 when the denominator is 0
pub fn percentage(numerator: usize, denominator: usize) -> u32 {
    if denominator == 0 {
        return 0;
    }
    (100.0 * numerator as f64 / denominator as f64 + 0.5).floor() as u32
}
