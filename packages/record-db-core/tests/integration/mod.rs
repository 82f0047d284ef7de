//! Integration test suite.
//!
//! 1. Basic CRUD on tables and fields
//! 2. Intersection scenarios
//! 3. Save/load round trips through the public API

mod basic_crud;
mod helpers;
mod intersection_tests;
mod persistence_tests;
