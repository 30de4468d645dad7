//! Unit tests for perf module.

use pdf_studio::perf::{ScopedTimer, measure, measure_and_log};

#[test]
fn test_scoped_timer_creation() {
    // High threshold: dropping must not warn or panic
    let timer = ScopedTimer::new("test_op", 1000.0);
    assert_eq!(timer.name(), "test_op");
    assert!(timer.elapsed_ms() >= 0.0);
}

#[test]
fn test_measure_returns_result() {
    let (value, elapsed_ms) = measure(|| 21 * 2);
    assert_eq!(value, 42);
    assert!(elapsed_ms >= 0.0);
}

#[test]
fn test_measure_and_log_passes_through() {
    assert_eq!(measure_and_log("noop", 0.0, || "done"), "done");
}
