//! Integration tests for the extraction routines
//!
//! These tests use wiremock to stand in for the documentation sites and run
//! each routine end-to-end through the cached session.

mod common;
mod dispatch_tests;
mod pep_tests;
