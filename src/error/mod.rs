//! Error types for conversion failures.
//!
//! This module provides [`ConvertError`], the path-annotated error raised by
//! matcher conversion, and its helpers.

mod convert_error;

pub use convert_error::ConvertError;
