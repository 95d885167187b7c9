//! Core domain entities.
//!
//! - [`UrlMapping`] - The persisted association between a short code and a URL

pub mod mapping;

pub use mapping::UrlMapping;
