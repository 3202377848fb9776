pub mod calculator;
pub mod rounding;

// Domain services
// This module contains business logic implementations.

// Re-export service traits and factory functions
pub use calculator::{create_default_map_calculator, MapCalculator, MapCalculatorTrait};
pub use rounding::round_to_one_decimal;
