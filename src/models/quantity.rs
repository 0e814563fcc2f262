//! Quantity codec: liters kept as the stored unit, edited either directly
//! or as 2-liter boxes plus a half-liter-stepped remainder.

/// Liters per box.
pub const BOX_LITERS: f64 = 2.0;
/// Smallest remainder increment.
pub const LITER_STEP: f64 = 0.5;

/// Coerce a user-supplied amount into a valid stored value.
/// Negative and non-finite inputs become 0.
pub fn clamp(amount: f64) -> f64 {
    if amount.is_finite() && amount > 0.0 {
        amount
    } else {
        0.0
    }
}

/// Round to the nearest multiple of `step`, then to 2 decimal places so
/// repeated edits don't accumulate float drift.
pub fn round_to_step(n: f64, step: f64) -> f64 {
    let k = (n / step).round() * step;
    (k * 100.0).round() / 100.0
}

/// Split a liter amount into whole boxes and a remainder on the 0.5 grid.
pub fn decompose(amount: f64) -> (u32, f64) {
    let amount = clamp(amount);
    let boxes = (amount / BOX_LITERS).floor() as u32;
    let remainder = round_to_step(amount - boxes as f64 * BOX_LITERS, LITER_STEP);
    (boxes, remainder)
}

/// Recombine boxes and remainder liters into a total.
pub fn compose(boxes: u32, remainder: f64) -> f64 {
    round_to_step(
        boxes as f64 * BOX_LITERS + clamp(remainder),
        LITER_STEP,
    )
}

/// New total after editing the box count, keeping the current remainder.
pub fn with_boxes(amount: f64, boxes: u32) -> f64 {
    let (_, remainder) = decompose(amount);
    compose(boxes, remainder)
}

/// New total after editing the remainder liters, keeping the current boxes.
pub fn with_remainder(amount: f64, liters: f64) -> f64 {
    let (boxes, _) = decompose(amount);
    let liters = round_to_step(clamp(liters), LITER_STEP);
    compose(boxes, liters)
}
