//! Hexagram identification and cast assembly
//!
//! Six lines become a Fu Xi sequence number (bottom line = least significant
//! bit), which the permutation table turns into a King Wen number. A missing
//! table entry means the embedded reference data is corrupt; that surfaces
//! as a `DataIntegrity` error rather than a silently substituted default.

use crate::core::error::{OracleError, Result};
use crate::hexagram::line::Line;
use crate::hexagram::table::{Hexagram, HEXAGRAMS, KING_WEN_FROM_FU_XI};
use serde::Serialize;

/// Outcome of one full six-line cast
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CastResult {
    /// The six lines, bottom (index 0) to top (index 5)
    pub lines: [Line; 6],
    pub primary_hexagram: &'static Hexagram,
    /// Present only when at least one line is moving
    pub secondary_hexagram: Option<&'static Hexagram>,
    /// 0-based indices of the moving lines, ascending
    pub changing_line_indices: Vec<usize>,
}

/// Fu Xi sequence number of a line set: one polarity bit per line, 1 = Yang,
/// bottom line least significant. Result is in 0..64.
fn fu_xi_index(lines: &[Line; 6]) -> usize {
    lines
        .iter()
        .enumerate()
        .fold(0, |acc, (i, line)| acc | ((line.is_yang as usize) << i))
}

/// Identify the hexagram formed by six lines.
pub fn identify_hexagram(lines: &[Line; 6]) -> Result<&'static Hexagram> {
    let fu_xi = fu_xi_index(lines);
    let king_wen = *KING_WEN_FROM_FU_XI.get(fu_xi).ok_or_else(|| {
        OracleError::DataIntegrity(format!("no King Wen mapping for Fu Xi index {}", fu_xi))
    })?;
    HEXAGRAMS
        .iter()
        .find(|h| h.number == king_wen)
        .ok_or_else(|| {
            OracleError::DataIntegrity(format!("no hexagram entry for King Wen number {}", king_wen))
        })
}

impl CastResult {
    /// Assemble the full result of a cast.
    ///
    /// The secondary hexagram is derived from the line set with every moving
    /// line settled into its opposite polarity; it exists exactly when the
    /// cast has moving lines.
    pub fn from_lines(lines: [Line; 6]) -> Result<Self> {
        let changing_line_indices: Vec<usize> = lines
            .iter()
            .enumerate()
            .filter(|(_, line)| line.is_changing)
            .map(|(i, _)| i)
            .collect();

        let primary_hexagram = identify_hexagram(&lines)?;

        let secondary_hexagram = if changing_line_indices.is_empty() {
            None
        } else {
            let settled = lines.map(|line| line.settled());
            Some(identify_hexagram(&settled)?)
        };

        Ok(Self {
            lines,
            primary_hexagram,
            secondary_hexagram,
            changing_line_indices,
        })
    }
}
