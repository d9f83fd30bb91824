//! Higher-order aggregation over integer sequences
//!
//! `manual_sum` is the hand-written reduction. `aggregate` keeps the same loop
//! but takes the combining step as a function value, so `sum`, `max`, `min`
//! and `product` become one-line instantiations of it.
//!
//! Arithmetic wraps on overflow.

use crate::error::{FnkitError, Result};
use tracing::trace;


/// Function type of a combining operation: two integers in, one out
pub type IntBinaryOp = fn(i32, i32) -> i32;

/// Sum a sequence with an explicit loop
///
/// The accumulator starts at the first element; every following element is
/// added left to right.
///
/// # Errors
///
/// Returns [`FnkitError::InvalidArgument`] when `numbers` is empty.
pub fn manual_sum(numbers: &[i32]) -> Result<i32> {
    let mut result = *numbers.first().ok_or_else(FnkitError::empty_input)?;

    for n in &numbers[1..] {
        result = result.wrapping_add(*n);
    }

    Ok(result)
}

/// Reduce a sequence with a caller-supplied combining operation
///
/// Folds strictly left to right: `op(op(op(n0, n1), n2), n3)`. Order matters
/// for operations that are not associative or commutative.
///
/// # Errors
///
/// Returns [`FnkitError::InvalidArgument`] when `numbers` is empty. No partial
/// result is produced.
///
/// # Example
/// ```
/// use fnkit::aggregate::aggregate;
///
/// let diff = aggregate(&[10, 3, 2], |acc, n| acc - n).unwrap();
/// assert_eq!(diff, 5);
/// ```
pub fn aggregate<F>(numbers: &[i32], op: F) -> Result<i32>
where
    F: Fn(i32, i32) -> i32,
{
    let (first, rest) = numbers.split_first().ok_or_else(FnkitError::empty_input)?;
    trace!("Aggregating {} numbers", numbers.len());

    Ok(rest.iter().fold(*first, |acc, &n| op(acc, n)))
}

/// Sum of all elements, built on [`aggregate`]
pub fn sum(numbers: &[i32]) -> Result<i32> {
    aggregate(numbers, |result, n| result.wrapping_add(n))
}

/// Largest element, built on [`aggregate`]
///
/// Only a strictly greater element replaces the running value.
pub fn max(numbers: &[i32]) -> Result<i32> {
    aggregate(numbers, |result, n| if n > result { n } else { result })
}

/// Smallest element, built on [`aggregate`]
pub fn min(numbers: &[i32]) -> Result<i32> {
    aggregate(numbers, |result, n| if n < result { n } else { result })
}

/// Product of all elements, built on [`aggregate`] with a plain function item
pub fn product(numbers: &[i32]) -> Result<i32> {
    const MULTIPLY: IntBinaryOp = i32::wrapping_mul;
    aggregate(numbers, MULTIPLY)
}
