// Domain entities and value objects
pub mod map;

// Re-export common types for easier imports
pub use map::{BpField, MapResult, Reading, Submission};
