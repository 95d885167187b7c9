//! Utility functions for code generation and database error inspection.
//!
//! - [`code_generator`] - Random short code generation
//! - [`db_error`] - Classification of PostgreSQL constraint violations

pub mod code_generator;
pub mod db_error;
