//! Unit and scenario tests, compiled as a single test binary.

mod assembler;
mod config;
mod engine;
mod extractor;
mod perf;
mod remote;
