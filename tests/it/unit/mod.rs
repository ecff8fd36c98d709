//! Unit tests for the ruler.

mod params_tests;
mod perf_tests;
mod render_tests;
