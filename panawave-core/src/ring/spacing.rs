//! Periodic spacing: the angular gap preceding sticker `i` is
//! `increment × scaler_list[i mod L]`, with `increment` chosen so the
//! `count` scaled gaps sum to exactly 360°.

use crate::error::InvalidGeometryError;

/// Validate the inputs that feed `increment`; called at every setter
/// boundary so the geometry code below never sees a zero divisor.
pub(crate) fn validate(
    radius: f64,
    count: u32,
    scaler_list: &[u32],
) -> Result<(), InvalidGeometryError> {
    if radius <= 0. || !radius.is_finite() {
        return Err(InvalidGeometryError::NonPositiveRadius(radius));
    }
    if count == 0 {
        return Err(InvalidGeometryError::ZeroCount);
    }
    if scaler_list.is_empty() {
        return Err(InvalidGeometryError::EmptyScalerList);
    }
    if let Some(i) = scaler_list.iter().position(|&s| s == 0) {
        return Err(InvalidGeometryError::ZeroScalerEntry(i));
    }
    Ok(())
}

/// Base angular step: 360 over the sum of the pattern cycled across all
/// `count` stickers. When `count` is not a multiple of the pattern length
/// the pattern truncates mid-cycle and the ring is asymmetric by design.
pub(crate) fn increment(count: u32, scaler_list: &[u32]) -> f64 {
    // u64 so the sum can't overflow even at u32::MAX entries.
    let total: u64 = (0..count as usize)
        .map(|i| scaler_list[i % scaler_list.len()] as u64)
        .sum();
    360. / total as f64
}

/// Cumulative placement angle of each sticker, in degrees. The k-th angle
/// is `offset + increment × Σ pattern[..=k]`; the last always lands on
/// `offset + 360`.
pub(crate) fn angles<'a>(
    count: u32,
    scaler_list: &'a [u32],
    offset_degrees: f64,
    increment: f64,
) -> impl Iterator<Item = f64> + 'a {
    (0..count as usize).scan(0u64, move |acc, i| {
        *acc += scaler_list[i % scaler_list.len()] as u64;
        Some(offset_degrees + increment * *acc as f64)
    })
}
