//! Test modules for the Hua tokenizer.
//!
//! This module contains crate-level tests that cross component boundaries:
//! configuration loading, error reporting and vocabulary files. Tests of a
//! single data structure live next to it.

pub mod error_tests;

pub use test_utils::TestFixture;
