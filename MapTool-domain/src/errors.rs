use thiserror::Error;

use crate::entities::map::BpField;

/// Why a single field was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ViolationKind {
    /// Value lies below the field's inclusive lower bound
    #[error("must be greater than or equal to {min}")]
    BelowMinimum { min: i32 },

    /// Value lies above the field's inclusive upper bound
    #[error("must be less than or equal to {max}")]
    AboveMaximum { max: i32 },

    /// Value is not a whole number
    #[error("must be a valid integer")]
    WrongType,

    /// Field was not submitted
    #[error("is required")]
    Missing,
}

impl ViolationKind {
    /// Machine-readable code for API clients
    pub fn code(&self) -> &'static str {
        match self {
            ViolationKind::BelowMinimum { .. } => "below_minimum",
            ViolationKind::AboveMaximum { .. } => "above_maximum",
            ViolationKind::WrongType => "wrong_type",
            ViolationKind::Missing => "missing",
        }
    }
}

/// A rejected field together with the reason
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{field} {kind}")]
pub struct FieldError {
    pub field: BpField,
    pub kind: ViolationKind,
}

impl FieldError {
    pub fn new(field: BpField, kind: ViolationKind) -> Self {
        Self { field, kind }
    }
}

/// Input rejected before the MAP formula ran
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Validation error: {}", summarize(.errors))]
pub struct MapValidationError {
    errors: Vec<FieldError>,
}

impl MapValidationError {
    /// Collect field errors, ordered systolic first
    pub fn new(mut errors: Vec<FieldError>) -> Self {
        errors.sort_by_key(|error| error.field);
        errors.dedup_by_key(|error| error.field);
        Self { errors }
    }

    /// Every rejected field
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// The error recorded for `field`, if that field was rejected
    pub fn for_field(&self, field: BpField) -> Option<&FieldError> {
        self.errors.iter().find(|error| error.field == field)
    }
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<String>>()
        .join("; ")
}
