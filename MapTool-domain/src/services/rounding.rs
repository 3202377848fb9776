/// Round to one decimal place, resolving exact ties to the even digit.
///
/// `x.y5` values that are exactly representable in binary (`0.25`, `0.75`,
/// `22.25`) go to the even tenth; everything else rounds to the nearest tenth.
pub fn round_to_one_decimal(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}
