//! Tests for the expansion engine
//!
//! Templates are compiled through the public compiler and expanded against
//! data built with `serde_json::json!`.

use super::*;

// Test helper functions
mod helpers;


mod errors;
