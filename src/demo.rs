//! Demo runners
//!
//! Each runner renders its report into a [`StringConsumer`], keeping the
//! computations free of direct stdout access.

use crate::aggregate::{manual_sum, max, sum};
use crate::config::DemoConfig;
use crate::error::Result;
use crate::functions::{measure_time, shifter, squares, StringConsumer};
use tracing::{debug, warn};

/// Aggregation demo: `sum`, `sum1` and `max` over the configured numbers
pub fn run_aggregate_demo(config: &DemoConfig, sink: &mut impl StringConsumer) -> Result<()> {
    let numbers = &config.numbers;
    debug!("Running aggregate demo over {:?}", numbers);

    sink.accept(&format!("sum: {}", manual_sum(numbers)?));
    sink.accept(&format!("sum1: {}", sum(numbers)?));
    sink.accept(&format!("max: {}", max(numbers)?));

    Ok(())
}

/// Function-value demo: consumer call, then `inc` and `dec` built by `shifter`
pub fn run_functions_demo(config: &DemoConfig, sink: &mut impl StringConsumer) -> Result<()> {
    sink.accept(&config.greeting);

    let inc = shifter(1);
    let dec = shifter(-1);

    let mut results = (0, 0);
    let elapsed = measure_time(|| results = (inc(config.probe), dec(config.probe)));
    debug!("Shifter calls took {:?}", elapsed);

    let table = squares(config.squares)?;
    debug!("squares({}) = {:?}", config.squares, table);

    sink.accept(&format!("inc: {}", results.0));
    sink.accept(&format!("dec: {}", results.1));

    Ok(())
}

/// Run both demos, aggregation first
///
/// A failing aggregation ends only its own demo; the function-value demo still
/// runs and the aggregation error is returned afterwards.
pub fn run_all(config: &DemoConfig, sink: &mut impl StringConsumer) -> Result<()> {
    let aggregated = run_aggregate_demo(config, sink);
    if let Err(e) = &aggregated {
        warn!("Aggregate demo failed: {}", e);
    }

    run_functions_demo(config, sink)?;
    aggregated
}
