//! Unit tests for `starterlint_core` types.
