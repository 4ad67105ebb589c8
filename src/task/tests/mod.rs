//! Unit tests for the task module.
//!
//! Tests cover builder validation order, normalization of optional fields,
//! identity-by-uuid semantics and the ordered characteristics mapping.
