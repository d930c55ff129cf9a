//! The dopamine color palette for day cells.
//!
//! Busier days get stronger colors: the intensity tier comes from event count
//! and total text length, the hue within a tier is random per render.

use rand::Rng;

/// Tier 0: days with little or nothing on them.
pub const LIGHT: [&str; 5] = ["#FFE5E5", "#E5F3FF", "#E5FFE5", "#FFF5E5", "#F0E5FF"];

/// Tier 1: moderately busy days.
pub const MEDIUM: [&str; 5] = ["#FFB3B3", "#B3D9FF", "#B3FFB3", "#FFDFB3", "#D9B3FF"];

/// Tier 2: packed days.
pub const DARK: [&str; 5] = ["#FF8080", "#80B3FF", "#80FF80", "#FFCC80", "#CC80FF"];

/// Maps a day's load to a tier index (0..=2).
///
/// Two weight units per event plus one per fifty characters of text, divided
/// by three and floored. The division stays in floating point so short texts
/// still nudge the score.
pub fn intensity(event_count: usize, total_text_len: usize) -> usize {
    let score = (event_count as f64 * 2.0 + total_text_len as f64 / 50.0) / 3.0;
    (score.floor() as usize).min(2)
}

/// The five colors of one tier.
pub fn tier(intensity: usize) -> &'static [&'static str; 5] {
    match intensity {
        0 => &LIGHT,
        1 => &MEDIUM,
        _ => &DARK,
    }
}

/// Picks a cell color for a day: tier by load, hue at random.
pub fn day_color(event_count: usize, total_text_len: usize) -> &'static str {
    let tier = tier(intensity(event_count, total_text_len));
    let idx = rand::rng().random_range(0..tier.len());
    tier[idx]
}
