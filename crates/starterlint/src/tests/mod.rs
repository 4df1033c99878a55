//! Tests for the detector.
