//! Rules evaluated by the detector.
//!
//! Each rule inspects a parsed, error-free syntax tree and returns at most
//! one diagnostic per unit.

pub(crate) mod prefer_test_starter;
