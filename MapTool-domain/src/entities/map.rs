use std::fmt;
use std::num::IntErrorKind;

use crate::errors::{FieldError, MapValidationError, ViolationKind};

/// Lowest accepted systolic pressure in mmHg
pub const SYSTOLIC_MIN: i32 = 50;
/// Highest accepted systolic pressure in mmHg
pub const SYSTOLIC_MAX: i32 = 250;
/// Lowest accepted diastolic pressure in mmHg
pub const DIASTOLIC_MIN: i32 = 30;
/// Highest accepted diastolic pressure in mmHg
pub const DIASTOLIC_MAX: i32 = 150;

/// The two input fields of a MAP calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BpField {
    /// Systolic blood pressure (the higher number)
    SystolicBp,
    /// Diastolic blood pressure (the lower number)
    DiastolicBp,
}

impl BpField {
    /// Wire name of the field as submitted in the form body
    pub const fn name(self) -> &'static str {
        match self {
            BpField::SystolicBp => "systolic_bp",
            BpField::DiastolicBp => "diastolic_bp",
        }
    }

    /// Look up a field by its wire name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "systolic_bp" => Some(BpField::SystolicBp),
            "diastolic_bp" => Some(BpField::DiastolicBp),
            _ => None,
        }
    }

    /// Inclusive `(min, max)` bounds in mmHg
    pub const fn bounds(self) -> (i32, i32) {
        match self {
            BpField::SystolicBp => (SYSTOLIC_MIN, SYSTOLIC_MAX),
            BpField::DiastolicBp => (DIASTOLIC_MIN, DIASTOLIC_MAX),
        }
    }

    /// Classify a parsed value against this field's bounds.
    ///
    /// Returns `None` when the value is acceptable.
    pub fn range_violation(self, value: i32) -> Option<ViolationKind> {
        let (min, max) = self.bounds();
        if value < min {
            Some(ViolationKind::BelowMinimum { min })
        } else if value > max {
            Some(ViolationKind::AboveMaximum { max })
        } else {
            None
        }
    }

    /// Check a parsed value against this field's bounds
    pub fn check(self, value: i32) -> Result<i32, ViolationKind> {
        match self.range_violation(value) {
            Some(kind) => Err(kind),
            None => Ok(value),
        }
    }

    /// Parse a raw form value into an integer.
    ///
    /// Absent and blank values are `Missing`. Integral decimals (`"120.0"`)
    /// and underscore digit separators (`"1_20"`) are accepted. Anything else
    /// that is not a base-10 integer is `WrongType`, except integers too large
    /// to represent, which are reported against the nearest bound.
    pub fn parse(self, raw: Option<&str>) -> Result<i32, ViolationKind> {
        let raw = raw
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or(ViolationKind::Missing)?;

        let digits = normalize_integer(raw).ok_or(ViolationKind::WrongType)?;

        let (min, max) = self.bounds();
        digits.parse::<i32>().map_err(|err| match err.kind() {
            IntErrorKind::PosOverflow => ViolationKind::AboveMaximum { max },
            IntErrorKind::NegOverflow => ViolationKind::BelowMinimum { min },
            _ => ViolationKind::WrongType,
        })
    }
}

// Drop a zero-only fractional part and single underscores between digits.
// Returns `None` when the text cannot denote an integer.
fn normalize_integer(raw: &str) -> Option<String> {
    let whole = match raw.split_once('.') {
        Some((whole, fraction)) if !fraction.is_empty() && fraction.bytes().all(|b| b == b'0') => whole,
        Some(_) => return None,
        None => raw,
    };

    let (sign, digits) = match whole.strip_prefix(['+', '-']) {
        Some(rest) => (&whole[..1], rest),
        None => ("", whole),
    };

    if digits.is_empty()
        || digits.starts_with('_')
        || digits.ends_with('_')
        || digits.contains("__")
        || !digits.bytes().all(|b| b.is_ascii_digit() || b == b'_')
    {
        return None;
    }

    Some(format!("{}{}", sign, digits.replace('_', "")))
}

impl fmt::Display for BpField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A validated pair of blood pressure values.
///
/// The fields are private: the only way to obtain a `Reading` is through
/// [`Reading::new`] (or [`Submission::into_reading`]), which rejects values
/// outside the physiological bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reading {
    systolic_bp: i32,
    diastolic_bp: i32,
}

impl Reading {
    /// Build a reading, rejecting any value outside its inclusive bounds
    pub fn new(systolic_bp: i32, diastolic_bp: i32) -> Result<Self, MapValidationError> {
        Self::from_checked(
            BpField::SystolicBp.check(systolic_bp),
            BpField::DiastolicBp.check(diastolic_bp),
        )
    }

    /// Systolic blood pressure in mmHg
    pub fn systolic_bp(&self) -> i32 {
        self.systolic_bp
    }

    /// Diastolic blood pressure in mmHg
    pub fn diastolic_bp(&self) -> i32 {
        self.diastolic_bp
    }

    fn from_checked(
        systolic: Result<i32, ViolationKind>,
        diastolic: Result<i32, ViolationKind>,
    ) -> Result<Self, MapValidationError> {
        match (systolic, diastolic) {
            (Ok(systolic_bp), Ok(diastolic_bp)) => Ok(Self {
                systolic_bp,
                diastolic_bp,
            }),
            (systolic, diastolic) => {
                let errors = [
                    (BpField::SystolicBp, systolic.err()),
                    (BpField::DiastolicBp, diastolic.err()),
                ]
                .into_iter()
                .filter_map(|(field, kind)| kind.map(|kind| FieldError::new(field, kind)))
                .collect();

                Err(MapValidationError::new(errors))
            }
        }
    }
}

/// Raw, unvalidated form values as received from a client
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    /// Systolic value exactly as submitted, if present
    pub systolic_bp: Option<String>,

    /// Diastolic value exactly as submitted, if present
    pub diastolic_bp: Option<String>,
}

impl Submission {
    /// Create a submission from raw field values
    pub fn new(systolic_bp: Option<String>, diastolic_bp: Option<String>) -> Self {
        Self {
            systolic_bp,
            diastolic_bp,
        }
    }

    /// Parse and validate both fields.
    ///
    /// Every failing field is reported, not just the first one.
    pub fn into_reading(self) -> Result<Reading, MapValidationError> {
        let systolic = BpField::SystolicBp;
        let diastolic = BpField::DiastolicBp;

        Reading::from_checked(
            systolic
                .parse(self.systolic_bp.as_deref())
                .and_then(|value| systolic.check(value)),
            diastolic
                .parse(self.diastolic_bp.as_deref())
                .and_then(|value| diastolic.check(value)),
        )
    }
}

/// Mean Arterial Pressure derived from a valid reading
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapResult {
    map: f64,
}

impl MapResult {
    pub(crate) fn new(map: f64) -> Self {
        Self { map }
    }

    /// MAP in mmHg, rounded to one decimal place
    pub fn map(&self) -> f64 {
        self.map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(systolic: Option<&str>, diastolic: Option<&str>) -> Submission {
        Submission::new(systolic.map(String::from), diastolic.map(String::from))
    }

    #[test]
    fn test_reading_accepts_inclusive_bounds() {
        assert!(Reading::new(50, 30).is_ok());
        assert!(Reading::new(250, 150).is_ok());
        assert!(Reading::new(50, 150).is_ok());
        assert!(Reading::new(250, 30).is_ok());
    }

    #[test]
    fn test_reading_rejects_systolic_out_of_range() {
        let err = Reading::new(49, 80).unwrap_err();
        assert_eq!(err.errors().len(), 1);
        assert_eq!(
            err.for_field(BpField::SystolicBp).map(|e| e.kind),
            Some(ViolationKind::BelowMinimum { min: 50 })
        );

        let err = Reading::new(251, 80).unwrap_err();
        assert_eq!(
            err.for_field(BpField::SystolicBp).map(|e| e.kind),
            Some(ViolationKind::AboveMaximum { max: 250 })
        );
    }

    #[test]
    fn test_reading_rejects_diastolic_out_of_range() {
        let err = Reading::new(120, 29).unwrap_err();
        assert_eq!(err.errors().len(), 1);
        assert_eq!(
            err.for_field(BpField::DiastolicBp).map(|e| e.kind),
            Some(ViolationKind::BelowMinimum { min: 30 })
        );

        let err = Reading::new(120, 151).unwrap_err();
        assert_eq!(
            err.for_field(BpField::DiastolicBp).map(|e| e.kind),
            Some(ViolationKind::AboveMaximum { max: 150 })
        );
    }

    #[test]
    fn test_reading_reports_both_fields() {
        let err = Reading::new(300, 10).unwrap_err();
        let fields: Vec<BpField> = err.errors().iter().map(|e| e.field).collect();
        assert_eq!(fields, vec![BpField::SystolicBp, BpField::DiastolicBp]);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        for field in [BpField::SystolicBp, BpField::DiastolicBp] {
            let (min, max) = field.bounds();
            let build = |value| match field {
                BpField::SystolicBp => Reading::new(value, 80),
                BpField::DiastolicBp => Reading::new(120, value),
            };
            assert!(build(min).is_ok(), "{} should accept {}", field, min);
            assert!(build(max).is_ok(), "{} should accept {}", field, max);
            assert!(build(min - 1).is_err(), "{} should reject {}", field, min - 1);
            assert!(build(max + 1).is_err(), "{} should reject {}", field, max + 1);
        }
    }

    #[test]
    fn test_parse_field_values() {
        let field = BpField::DiastolicBp;
        assert_eq!(field.parse(Some("80")), Ok(80));
        assert_eq!(field.parse(Some("  80 ")), Ok(80));
        assert_eq!(field.parse(Some("-5")), Ok(-5));
        assert_eq!(field.parse(None), Err(ViolationKind::Missing));
        assert_eq!(field.parse(Some("")), Err(ViolationKind::Missing));
        assert_eq!(field.parse(Some("   ")), Err(ViolationKind::Missing));
        assert_eq!(field.parse(Some("abc")), Err(ViolationKind::WrongType));
        assert_eq!(field.parse(Some("80.5")), Err(ViolationKind::WrongType));
        assert_eq!(field.parse(Some("1e2")), Err(ViolationKind::WrongType));
    }

    #[test]
    fn test_parse_integral_decimals_and_separators() {
        let field = BpField::SystolicBp;
        assert_eq!(field.parse(Some("120.0")), Ok(120));
        assert_eq!(field.parse(Some("120.00")), Ok(120));
        assert_eq!(field.parse(Some("1_20")), Ok(120));
        assert_eq!(field.parse(Some("1_2_0.0")), Ok(120));
        assert_eq!(field.parse(Some("-30.0")), Ok(-30));
        assert_eq!(field.parse(Some("+120")), Ok(120));

        assert_eq!(field.parse(Some("120.5")), Err(ViolationKind::WrongType));
        assert_eq!(field.parse(Some("120.")), Err(ViolationKind::WrongType));
        assert_eq!(field.parse(Some(".0")), Err(ViolationKind::WrongType));
        assert_eq!(field.parse(Some("1__20")), Err(ViolationKind::WrongType));
        assert_eq!(field.parse(Some("_120")), Err(ViolationKind::WrongType));
        assert_eq!(field.parse(Some("120_")), Err(ViolationKind::WrongType));
        assert_eq!(field.parse(Some("+-120")), Err(ViolationKind::WrongType));
        assert_eq!(field.parse(Some("120.0.0")), Err(ViolationKind::WrongType));
    }

    #[test]
    fn test_submission_accepts_coercible_integers() {
        let reading = submission(Some("120.0"), Some("8_0")).into_reading().unwrap();
        assert_eq!(reading.systolic_bp(), 120);
        assert_eq!(reading.diastolic_bp(), 80);

        let err = submission(Some("1_20"), Some("250.0")).into_reading().unwrap_err();
        assert!(err.for_field(BpField::SystolicBp).is_none());
        assert_eq!(
            err.for_field(BpField::DiastolicBp).map(|e| e.kind),
            Some(ViolationKind::AboveMaximum { max: 150 })
        );
    }

    #[test]
    fn test_parse_overflow_is_a_range_violation() {
        let field = BpField::SystolicBp;
        assert_eq!(
            field.parse(Some("99999999999999999999")),
            Err(ViolationKind::AboveMaximum { max: 250 })
        );
        assert_eq!(
            field.parse(Some("-99999999999999999999")),
            Err(ViolationKind::BelowMinimum { min: 50 })
        );
    }

    #[test]
    fn test_submission_into_reading() {
        let reading = submission(Some("120"), Some("80")).into_reading().unwrap();
        assert_eq!(reading.systolic_bp(), 120);
        assert_eq!(reading.diastolic_bp(), 80);
    }

    #[test]
    fn test_submission_type_violation() {
        let err = submission(Some("120"), Some("abc")).into_reading().unwrap_err();
        assert_eq!(err.errors().len(), 1);
        assert_eq!(
            err.for_field(BpField::DiastolicBp).map(|e| e.kind),
            Some(ViolationKind::WrongType)
        );
    }

    #[test]
    fn test_submission_mixes_parse_and_range_errors() {
        let err = submission(None, Some("10")).into_reading().unwrap_err();
        assert_eq!(
            err.for_field(BpField::SystolicBp).map(|e| e.kind),
            Some(ViolationKind::Missing)
        );
        assert_eq!(
            err.for_field(BpField::DiastolicBp).map(|e| e.kind),
            Some(ViolationKind::BelowMinimum { min: 30 })
        );
    }

    #[test]
    fn test_submission_missing_both() {
        let err = Submission::default().into_reading().unwrap_err();
        assert!(err.errors().iter().all(|e| e.kind == ViolationKind::Missing));
        assert_eq!(err.errors().len(), 2);
    }

    #[test]
    fn test_field_names_round_trip() {
        for field in [BpField::SystolicBp, BpField::DiastolicBp] {
            assert_eq!(BpField::from_name(field.name()), Some(field));
        }
        assert_eq!(BpField::from_name("pulse"), None);
    }
}
