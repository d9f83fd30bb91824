//! Function values: function types, optional callables and curried closures

use crate::error::{FnkitError, Result};
use std::time::{Duration, Instant};

pub mod consumer;

pub use consumer::{printer, StringConsumer};

/// Boxed one-argument integer function, for storing closures side by side
pub type IntUnaryOp = Box<dyn Fn(i32) -> i32>;

/// Run `action` once and report how long it took
pub fn measure_time<F>(action: F) -> Duration
where
    F: FnOnce(),
{
    let start = Instant::now();
    action();
    start.elapsed()
}

/// Like [`measure_time`], but the action may be absent
///
/// With `None` nothing is called and the returned duration is close to zero.
pub fn measure_time_optional<F>(action: Option<F>) -> Duration
where
    F: FnOnce(),
{
    let start = Instant::now();

    if let Some(action) = action {
        action();
    }

    start.elapsed()
}

/// Curried addition: `shifter(n)` returns a function adding `n` to its argument
///
/// ```
/// use fnkit::functions::shifter;
///
/// let inc = shifter(1);
/// let dec = shifter(-1);
/// assert_eq!(inc(10), 11);
/// assert_eq!(dec(10), 9);
/// ```
pub fn shifter(n: i32) -> impl Fn(i32) -> i32 {
    move |i| i.wrapping_add(n)
}

/// [`shifter`] with its result boxed so different offsets share one type
pub fn boxed_shifter(n: i32) -> IntUnaryOp {
    Box::new(shifter(n))
}

/// Increment as a plain function item
pub fn inc(n: i32) -> i32 {
    n.wrapping_add(1)
}

/// Longest squares table whose last entry still fits in an `i32`
pub const MAX_SQUARES: usize = 46_341;

/// Table of `len` squares, each computed from its index
///
/// # Errors
///
/// Returns [`FnkitError::InvalidArgument`] when `len` exceeds [`MAX_SQUARES`].
pub fn squares(len: usize) -> Result<Vec<i32>> {
    if len > MAX_SQUARES {
        return Err(FnkitError::invalid_argument(format!(
            "squares table length {len} exceeds {MAX_SQUARES}"
        )));
    }

    let square = |n: usize| {
        i32::try_from(n)
            .map(|n| n * n)
            .map_err(|_| FnkitError::invalid_argument(format!("index {n} does not fit in i32")))
    };
    (0..len).map(square).collect()
}
