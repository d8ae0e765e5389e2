//! Utility functions for request input handling.
//!
//! - [`system_name`] - Host-system name validation and sanitization

pub mod system_name;
