//! Unit tests for perf module.

use ruler::perf::{INPUT_BUDGET_MS, ScopedTimer};

#[test]
fn test_scoped_timer_creation() {
    // Threshold is high enough that dropping never reports
    let timer = ScopedTimer::new("test_op", 1000.0);
    assert_eq!(timer.name(), "test_op");
    assert_eq!(timer.threshold_ms(), 1000.0);
    assert!(timer.elapsed_ms() >= 0.0);
}

#[test]
fn test_input_timer_uses_input_budget() {
    let timer = ScopedTimer::for_profiling("handle_pointer_move");
    assert_eq!(timer.name(), "handle_pointer_move");
    assert_eq!(timer.threshold_ms(), INPUT_BUDGET_MS);
}

#[test]
fn test_profile_scope_macro_compiles_in_any_build() {
    ruler::profile_scope!("scope");
    ruler::profile_scope!("scope_with_threshold", 5.0);
}
