// Public entities for the MAP Tool API
// This module contains data structures that cross the HTTP boundary

// Form input and JSON output of the calculate endpoint
pub mod map;

// Common entities for error handling
pub mod common;
