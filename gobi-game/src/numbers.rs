//! Numeric conversion helpers centralizing safe numeric casts.

use num_traits::cast::cast;

/// Floor a f64 and clamp it to the i32 range, returning 0 for non-finite values.
#[must_use]
pub fn floor_f64_to_i32(value: f64) -> i32 {
    if !value.is_finite() {
        return 0;
    }
    let min = f64::from(i32::MIN);
    let max = f64::from(i32::MAX);
    cast::<f64, i32>(value.floor().clamp(min, max)).unwrap_or(0)
}

/// Floor a f64 and clamp it to the u32 range, returning 0 for non-finite or negative values.
#[must_use]
pub fn floor_f64_to_u32(value: f64) -> u32 {
    if !value.is_finite() {
        return 0;
    }
    let max = f64::from(u32::MAX);
    cast::<f64, u32>(value.floor().clamp(0.0, max)).unwrap_or(0)
}

/// Truncating scale of an integer bucket ceiling, e.g. `floor(3 * 0.8) == 2`.
#[must_use]
pub fn scaled_ceiling(base: i32, modifier: f64) -> i32 {
    floor_f64_to_i32(f64::from(base) * modifier)
}

/// Clamp an i64 into an inclusive i32 range.
#[must_use]
pub fn clamp_i64_to_i32(value: i64, min: i32, max: i32) -> i32 {
    let clamped = value.clamp(i64::from(min), i64::from(max));
    i32::try_from(clamped).unwrap_or(min)
}

/// Clamp an i64 into the u32 range.
#[must_use]
pub fn clamp_i64_to_u32(value: i64) -> u32 {
    u32::try_from(value.clamp(0, i64::from(u32::MAX))).unwrap_or(0)
}

/// Convert a non-negative i32 draw into a u32 amount, flooring negatives at zero.
#[must_use]
pub fn i32_to_u32(value: i32) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(0)
}

/// Convert a u32 amount into i32, saturating at `i32::MAX`.
#[must_use]
pub fn u32_to_i32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
