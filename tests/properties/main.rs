//! Property tests, compiled as a single test binary.

mod determinism;
mod scoring;
