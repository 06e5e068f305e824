//! Unit tests for performance instrumentation.

use trackboard::perf::{ScopedTimer, measure, measure_and_log};

#[test]
fn test_measure_returns_result_and_elapsed() {
    let (result, elapsed_ms) = measure(|| 21 * 2);
    assert_eq!(result, 42);
    assert!(elapsed_ms >= 0.0);
}

#[test]
fn test_measure_and_log_passes_result_through() {
    let result = measure_and_log("test_op", 1000.0, || "done");
    assert_eq!(result, "done");
}

#[test]
fn test_scoped_timer_elapsed_is_monotonic() {
    let timer = ScopedTimer::new("test_timer", 1000.0);
    let first = timer.elapsed_ms();
    let second = timer.elapsed_ms();
    assert!(second >= first);
}
