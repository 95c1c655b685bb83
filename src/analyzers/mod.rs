//! Dataset aggregation.
//!
//! This module joins the loaded training tables, computes the overall and
//! per-category statistics, and shapes them into the report written by
//! [`crate::output`].

pub mod aggregate;
pub mod analyzer;
pub mod types;
pub mod utility;
