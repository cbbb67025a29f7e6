//! Integration tests for the processor module
//!
//! Tests the complete combine pipeline using temporary year-folder layouts.

pub mod fixtures;
