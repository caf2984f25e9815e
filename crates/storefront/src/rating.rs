//! Card formatting: five-unit star ratings and currency.

use std::fmt;

pub const MAX_STARS: u8 = 5;

/// A 0–5 score split into whole, half, and empty star units.
///
/// Whole units are `floor(score)`, one half unit is added when the fractional part is
/// at least 0.5, and the rest are empty. Scores outside 0–5 are clamped; non-finite
/// scores render as all empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarRating {
    pub full: u8,
    pub half: bool,
    pub empty: u8,
}

impl StarRating {
    pub fn from_score(score: f64) -> Self {
        let score = if score.is_finite() {
            score.clamp(0.0, f64::from(MAX_STARS))
        } else {
            0.0
        };
        let full = score.floor() as u8;
        let half = score.fract() >= 0.5;
        Self {
            full,
            half,
            empty: MAX_STARS - full - u8::from(half),
        }
    }
}

impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.full {
            f.write_str("★")?;
        }
        if self.half {
            f.write_str("⯪")?;
        }
        for _ in 0..self.empty {
            f.write_str("☆")?;
        }
        Ok(())
    }
}

/// Two-decimal dollar amount, e.g. `$109.95`.
pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}
