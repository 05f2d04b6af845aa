//! Unit tests that exercise the library purely through its public API,
//! distinct from the module-internal `#[cfg(test)]` suites in `src/`.

#[path = "unit/ding_format.rs"]
mod ding_format;
