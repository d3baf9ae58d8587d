//! Coin-toss simulation and line classification
//!
//! Three coins per line, each landing tails (2) or heads (3), summed.
//! The sums carry the traditional non-uniform distribution: 6 and 9
//! (moving lines) at 1/8 each, 7 and 8 (static lines) at 3/8 each.

use crate::core::error::{OracleError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A single cast line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// Sum of the three coin faces: 6, 7, 8 or 9
    pub value: u8,
    /// Solid (Yang) line - values 7 and 9
    pub is_yang: bool,
    /// Moving line that flips polarity in the transformed hexagram - values 6 and 9
    pub is_changing: bool,
}

impl Line {
    /// Classify a toss sum into a line.
    ///
    /// 6 = old Yin (moving), 7 = young Yang, 8 = young Yin, 9 = old Yang (moving).
    /// Any other value is a caller bug and is rejected.
    pub fn from_toss_value(value: u8) -> Result<Self> {
        match value {
            6 => Ok(Self { value, is_yang: false, is_changing: true }),
            7 => Ok(Self { value, is_yang: true, is_changing: false }),
            8 => Ok(Self { value, is_yang: false, is_changing: false }),
            9 => Ok(Self { value, is_yang: true, is_changing: true }),
            other => Err(OracleError::InvalidLineValue(other)),
        }
    }

    /// The line as it settles in the transformed hexagram: a moving line
    /// flips polarity and comes to rest, a static line passes through.
    pub fn settled(&self) -> Self {
        if self.is_changing {
            Self {
                value: if self.is_yang { 8 } else { 7 },
                is_yang: !self.is_yang,
                is_changing: false,
            }
        } else {
            *self
        }
    }
}

/// Toss three coins for one line and return the sum (6..=9).
///
/// Each coin is an independent fair 2-or-3, so the distribution over sums
/// is the traditional 1/8, 3/8, 3/8, 1/8 - not uniform over the four values.
pub fn toss_coins(rng: &mut impl Rng) -> u8 {
    (0..3).map(|_| rng.gen_range(2u8..=3)).sum()
}

/// Cast a full hexagram: six lines from bottom (index 0) to top (index 5).
///
/// Callers that stagger the reveal for animation can instead drive
/// `toss_coins` + `Line::from_toss_value` one line at a time; the six
/// results are only meaningful as one atomic cast.
pub fn cast_six_lines(rng: &mut impl Rng) -> [Line; 6] {
    std::array::from_fn(|_| {
        let value = toss_coins(rng);
        Line::from_toss_value(value).expect("three 2-or-3 coins always sum to 6..=9")
    })
}
