pub mod calculate;


// Re-export handlers for easier imports
pub use calculate::calculate_map;
