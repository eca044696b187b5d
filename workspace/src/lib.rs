//! Internal workspace checks, the trials live in `tests/checks.rs`.
