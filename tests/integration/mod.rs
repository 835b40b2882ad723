//! Integration tests for ngr.
//!
//! - `fixtures` - Stub `npm` and `gum` executables in a temporary directory
//! - `cli_tests` - Help and argument handling
//! - `flow_tests` - Listing, selection and running end to end

pub mod cli_tests;
pub mod fixtures;
