// MapTool Domain
// This crate contains the business rules for the MAP Tool: which blood
// pressure inputs are acceptable and how Mean Arterial Pressure is derived.

// Domain entities
pub mod entities;

// Validation errors shared by entities and services
pub mod errors;

// Services that implement business logic
pub mod services;

pub use entities::{BpField, MapResult, Reading, Submission};
pub use errors::{FieldError, MapValidationError, ViolationKind};
pub use services::{create_default_map_calculator, MapCalculator, MapCalculatorTrait};
