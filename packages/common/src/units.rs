//! Centimeter/pixel conversion at a fixed 96 DPI.
//!
//! Dialogs show table dimensions in centimeters while the document stores
//! whole pixels. Both directions are pure functions of their input.

/// Screen pixels per inch
pub const DPI: f64 = 96.0;

/// Centimeters per inch
pub const CM_PER_INCH: f64 = 2.54;

/// Pixels per centimeter (≈ 37.795)
pub const PIXELS_PER_CM: f64 = DPI / CM_PER_INCH;

/// Convert centimeters to whole pixels, rounding to the nearest pixel.
///
/// Negative and NaN inputs saturate to 0.
pub fn cm_to_pixels(cm: f64) -> u32 {
    (cm * DPI / CM_PER_INCH).round() as u32
}

/// Convert pixels to centimeters, rounded to two decimal places.
pub fn pixels_to_cm(pixels: u32) -> f64 {
    ((f64::from(pixels) * CM_PER_INCH / DPI) * 100.0).round() / 100.0
}
