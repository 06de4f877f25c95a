// Both constants are hand-tuned; nothing derives them. Changing either changes which country
// gets recommended, so they stay as they are.

/// Applied when a candidate sits closer to a guessed capital than the reported distance.
pub const PENALTY_MULTIPLIER: f64 = 100_000.0;

/// Lower bound of a "warmer" hint's factor, keeps the product positive.
pub const HINT_FLOOR: f64 = 1.0;
