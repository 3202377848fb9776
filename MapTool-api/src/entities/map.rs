use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use map_tool_domain::{BpField, MapResult, Submission};

/// Form-based input for calculating Mean Arterial Pressure (MAP).
///
/// Fields are kept as raw strings so that missing and non-numeric values
/// reach the domain parser instead of failing form decoding.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct MapFormInput {
    /// Enter your systolic blood pressure (SBP) in mmHg. Must be between 50 and 250.
    #[schema(value_type = i32, minimum = 50, maximum = 250, example = 120)]
    pub systolic_bp: Option<String>,

    /// Enter your diastolic blood pressure (DBP) in mmHg. Must be between 30 and 150.
    #[schema(value_type = i32, minimum = 30, maximum = 150, example = 80)]
    pub diastolic_bp: Option<String>,
}

impl MapFormInput {
    /// Build the input from decoded form pairs.
    ///
    /// A repeated key keeps its last value; unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut input = Self::default();
        for (key, value) in pairs {
            match BpField::from_name(&key) {
                Some(BpField::SystolicBp) => input.systolic_bp = Some(value),
                Some(BpField::DiastolicBp) => input.diastolic_bp = Some(value),
                None => {}
            }
        }
        input
    }
}

impl From<MapFormInput> for Submission {
    fn from(input: MapFormInput) -> Self {
        Submission::new(input.systolic_bp, input.diastolic_bp)
    }
}

/// Calculated Mean Arterial Pressure (MAP)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MapFormOutput {
    /// Your calculated Mean Arterial Pressure (MAP) in mmHg.
    #[schema(example = 93.3)]
    pub map: f64,
}

impl From<MapResult> for MapFormOutput {
    fn from(result: MapResult) -> Self {
        Self { map: result.map() }
    }
}
