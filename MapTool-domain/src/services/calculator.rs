//! MAP calculation service
//!
//! Derives Mean Arterial Pressure from a validated reading using
//! `MAP = (SBP + 2 * DBP) / 3`, rounded to one decimal place.

use tracing::debug;

use crate::entities::map::{MapResult, Reading, Submission};
use crate::errors::MapValidationError;
use crate::services::rounding::round_to_one_decimal;

/// Unrounded MAP for a reading
pub fn mean_arterial_pressure(reading: &Reading) -> f64 {
    let systolic = f64::from(reading.systolic_bp());
    let diastolic = f64::from(reading.diastolic_bp());
    (systolic + 2.0 * diastolic) / 3.0
}

/// Trait for MAP calculator operations
pub trait MapCalculatorTrait {
    /// Calculate MAP for a reading that has already been validated
    fn calculate(&self, reading: &Reading) -> MapResult;

    /// Validate two integers and calculate MAP
    fn compute(&self, systolic_bp: i32, diastolic_bp: i32) -> Result<MapResult, MapValidationError> {
        let reading = Reading::new(systolic_bp, diastolic_bp)?;
        Ok(self.calculate(&reading))
    }

    /// Parse raw form values, validate them and calculate MAP
    fn calculate_submission(&self, submission: Submission) -> Result<MapResult, MapValidationError> {
        let reading = submission.into_reading()?;
        Ok(self.calculate(&reading))
    }
}

/// Stateless MAP calculator
#[derive(Debug, Clone, Copy, Default)]
pub struct MapCalculator;

impl MapCalculator {
    /// Create a new calculator
    pub fn new() -> Self {
        Self
    }
}

impl MapCalculatorTrait for MapCalculator {
    fn calculate(&self, reading: &Reading) -> MapResult {
        let map = round_to_one_decimal(mean_arterial_pressure(reading));
        debug!(
            systolic_bp = reading.systolic_bp(),
            diastolic_bp = reading.diastolic_bp(),
            map,
            "calculated mean arterial pressure"
        );
        MapResult::new(map)
    }
}

/// Factory function to create the default calculator
pub fn create_default_map_calculator() -> MapCalculator {
    MapCalculator::new()
}
